//! Runs the reflection pipeline over one document.
//!
//! ```no_run
//! use reflector_gen::{
//!   generator::{config::ReflectorConfig, orchestrator::Reflector},
//!   utils::spec::SpecFormat,
//! };
//!
//! # fn example() -> anyhow::Result<()> {
//! let bytes = std::fs::read("openapi.yaml")?;
//! let document = SpecFormat::Yaml.parse(&bytes)?;
//!
//! let output = Reflector::new(ReflectorConfig::default()).reflect(&document)?;
//! println!("{} methods, {} warnings", output.stats.methods_generated, output.stats.warnings.len());
//! # Ok(())
//! # }
//! ```

use crate::generator::{
  config::ReflectorConfig,
  document::OpenApiDocument,
  enum_registry::EnumRegistry,
  errors::ReflectError,
  metrics::GenerationStats,
  model::{CodeMetadata, CodeModel},
  modules::ModuleAggregator,
  schemas::SchemaModelBuilder,
};

#[derive(Debug, Clone)]
pub struct ReflectOutput {
  pub model: CodeModel,
  pub stats: GenerationStats,
}

/// Derives a [`CodeModel`] from a document.
///
/// Every call to [`Reflector::reflect`] starts from an empty [`EnumRegistry`], so the same
/// document always produces the same model.
#[derive(Debug, Clone, Default)]
pub struct Reflector {
  config: ReflectorConfig,
}

impl Reflector {
  #[must_use]
  pub fn new(config: ReflectorConfig) -> Self {
    Self { config }
  }

  #[must_use]
  pub fn config(&self) -> &ReflectorConfig {
    &self.config
  }

  /// Component schemas are processed before paths so schema members name shared enums.
  pub fn reflect(&self, document: &OpenApiDocument) -> Result<ReflectOutput, ReflectError> {
    let schemas = document.component_schemas().ok_or(ReflectError::MissingSection {
      section: "components.schemas",
    })?;
    let paths = document
      .paths
      .as_ref()
      .ok_or(ReflectError::MissingSection { section: "paths" })?;

    let mut registry = EnumRegistry::new(self.config.tokenizer());
    let mut warnings = Vec::new();

    let schema_models = SchemaModelBuilder::new(&mut registry, &mut warnings).build(schemas);
    let modules = ModuleAggregator::new(&mut registry, &mut warnings).aggregate(paths);

    let model = CodeModel {
      metadata: Self::metadata(document),
      modules,
      schemas: schema_models.schemas,
      enums: registry.into_descriptors(),
      field_names: schema_models.field_names,
    };

    let mut stats = GenerationStats::default();
    stats.record_model(&model);
    stats.record_warnings(warnings);

    Ok(ReflectOutput { model, stats })
  }

  fn metadata(document: &OpenApiDocument) -> CodeMetadata {
    document
      .info
      .as_ref()
      .map(|info| CodeMetadata {
        title: info.title.clone(),
        version: info.version.clone(),
        description: info.description.clone(),
      })
      .unwrap_or_default()
  }
}
