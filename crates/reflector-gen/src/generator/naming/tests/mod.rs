mod operations;
mod tokenizer;
