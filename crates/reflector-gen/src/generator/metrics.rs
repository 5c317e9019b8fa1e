use strum::Display;

use crate::generator::model::{CodeModel, Method};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GenerationStats {
  pub schemas_processed: usize,
  pub properties_described: usize,
  pub modules_generated: usize,
  pub methods_generated: usize,
  pub invalid_methods: usize,
  pub enums_registered: usize,
  pub warnings: Vec<GenerationWarning>,
}

impl GenerationStats {
  pub fn record_schema(&mut self, property_count: usize) {
    self.schemas_processed += 1;
    self.properties_described += property_count;
  }

  pub fn record_method(&mut self, method: &Method) {
    self.methods_generated += 1;
    if !method.is_valid() {
      self.invalid_methods += 1;
    }
  }

  /// Counts everything derivable from a finished model.
  pub fn record_model(&mut self, model: &CodeModel) {
    for schema in &model.schemas {
      self.record_schema(schema.properties.len());
    }
    self.modules_generated += model.modules.len();
    for (_, method) in model.methods() {
      self.record_method(method);
    }
    self.enums_registered += model.enums.len();
  }

  pub fn record_warnings(&mut self, warnings: impl IntoIterator<Item = GenerationWarning>) {
    self.warnings.extend(warnings);
  }

  #[must_use]
  pub fn skipped_items(&self) -> usize {
    self.warnings.iter().filter(|warning| warning.is_skipped_item()).count()
  }
}

/// Non-fatal diagnostics. Structural gaps in the document never abort a run; they land here.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum GenerationWarning {
  #[strum(to_string = "Schema '{entity}': skipped inline object member '{property}'")]
  SkippedInlineObject { entity: String, property: String },
  #[strum(to_string = "Schema '{entity}': array member '{property}' has no items, typed as unknown")]
  UnknownArrayItems { entity: String, property: String },
  #[strum(to_string = "[{operation}] skipped referenced parameter '{reference}'")]
  SkippedReferencedParameter { operation: String, reference: String },
  #[strum(to_string = "[{operation}] skipped parameter '{parameter}' without schema")]
  SkippedParameterWithoutSchema { operation: String, parameter: String },
  #[strum(to_string = "[{operation}] skipped parameter '{parameter}' with unknown location '{location}'")]
  UnknownParameterLocation {
    operation: String,
    parameter: String,
    location: String,
  },
  #[strum(to_string = "[{operation}] skipped malformed operation: {reason}")]
  MalformedOperation { operation: String, reason: String },
  #[strum(to_string = "[{operation}] no response type could be inferred")]
  MissingResponseType { operation: String },
  #[strum(to_string = "Endpoint '{endpoint}' has no operationId, grouped under the empty module")]
  MissingOperationId { endpoint: String },
  #[strum(to_string = "[{operation}] path placeholder '{placeholder}' has no declared path parameter")]
  UndeclaredPathParameter { operation: String, placeholder: String },
}

impl GenerationWarning {
  pub fn is_skipped_item(&self) -> bool {
    matches!(
      self,
      Self::SkippedInlineObject { .. }
        | Self::SkippedReferencedParameter { .. }
        | Self::SkippedParameterWithoutSchema { .. }
        | Self::UnknownParameterLocation { .. }
        | Self::MalformedOperation { .. }
    )
  }
}
