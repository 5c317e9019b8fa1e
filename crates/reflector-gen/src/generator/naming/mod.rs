pub mod constants;
pub mod operations;
pub mod tokenizer;

pub use tokenizer::{NameTokenizer, capitalize_first, to_camel_case, to_pascal_case};

#[cfg(test)]
mod tests;
