pub mod refs;
pub mod spec;

pub use refs::ref_component_name;
