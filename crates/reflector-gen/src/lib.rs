#![allow(clippy::doc_markdown)]
#![allow(clippy::missing_errors_doc)]
//! Derives a normalized client code model (modules, methods, enums) from an OpenAPI document.
//!
//! ```no_run
//! use reflector_gen::generator::{config::ReflectorConfig, orchestrator::Reflector};
//!
//! # fn example() -> anyhow::Result<()> {
//! let json = std::fs::read_to_string("openapi.json")?;
//! let document = reflector_gen::utils::spec::SpecFormat::Json.parse(json.as_bytes())?;
//!
//! let output = Reflector::new(ReflectorConfig::default()).reflect(&document)?;
//! println!("{} modules, {} enums", output.model.modules.len(), output.model.enums.len());
//! # Ok(())
//! # }
//! ```

pub mod generator;
pub mod utils;
