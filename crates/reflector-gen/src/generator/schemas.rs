use indexmap::{IndexMap, IndexSet};

use crate::generator::{
  document::SchemaFragment,
  enum_registry::EnumRegistry,
  metrics::GenerationWarning,
  model::SchemaModel,
  properties::PropertyModelBuilder,
};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchemaModels {
  pub schemas: Vec<SchemaModel>,
  pub field_names: IndexSet<String>,
}

/// Builds one [`SchemaModel`] per component schema that declares `properties`.
///
/// Bare references and property-less schemas (enums, aliases, compositions) produce no
/// model; their enum value-sets are only registered when a member uses them.
pub struct SchemaModelBuilder<'a> {
  registry: &'a mut EnumRegistry,
  warnings: &'a mut Vec<GenerationWarning>,
}

impl<'a> SchemaModelBuilder<'a> {
  pub fn new(registry: &'a mut EnumRegistry, warnings: &'a mut Vec<GenerationWarning>) -> Self {
    Self { registry, warnings }
  }

  pub fn build(&mut self, schemas: &IndexMap<String, SchemaFragment>) -> SchemaModels {
    let mut models = SchemaModels::default();

    for (name, schema) in schemas {
      if schema.is_reference() {
        continue;
      }
      let Some(properties) = &schema.properties else {
        continue;
      };

      models.field_names.extend(properties.keys().cloned());
      let mut builder = PropertyModelBuilder::new(self.registry, self.warnings);
      models.schemas.push(SchemaModel {
        name: name.clone(),
        properties: builder.build(properties, &schema.required, name),
      });
    }

    models
  }
}
