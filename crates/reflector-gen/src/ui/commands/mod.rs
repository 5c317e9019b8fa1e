pub mod list;
pub mod reflect;

pub use list::list_operations;
pub use reflect::{ReflectConfig, reflect_document};
