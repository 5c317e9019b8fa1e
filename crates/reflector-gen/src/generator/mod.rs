pub mod config;
pub mod document;
pub mod endpoint;
pub mod enum_registry;
pub mod errors;
pub mod metrics;
pub mod model;
pub mod modules;
pub mod naming;
pub mod orchestrator;
pub mod properties;
pub mod requests;
pub mod schema_node;
pub mod schemas;

#[cfg(test)]
mod tests;
