//! Derived code model handed to the template-rendering stage.
//!
//! Everything here is built once per run and read-only afterward. All types serialize in
//! camelCase so the CLI can write the model as JSON for an external emitter.

use indexmap::IndexSet;
use serde::Serialize;
use strum::Display;

use crate::generator::{document::HttpVerb, endpoint, enum_registry::EnumDescriptor};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum PropertyKind {
  Primitive,
  Array,
  Object,
  Enum,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyDescriptor {
  /// Raw member or parameter name as written in the document.
  pub name: String,
  pub kind: PropertyKind,
  pub canonical_type_name: String,
  pub required: bool,
  pub is_parameter: bool,
  pub is_array_of_primitive: bool,
  /// Set when `name` is not a plain identifier (it contains a hyphen).
  pub needs_bracket_access: bool,
  pub nullable: bool,
  pub is_enum: bool,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
}

impl PropertyDescriptor {
  pub fn new(name: impl Into<String>, kind: PropertyKind, canonical_type_name: impl Into<String>) -> Self {
    let name = name.into();
    Self {
      needs_bracket_access: name.contains('-'),
      name,
      kind,
      canonical_type_name: canonical_type_name.into(),
      required: false,
      is_parameter: false,
      is_array_of_primitive: false,
      nullable: false,
      is_enum: kind == PropertyKind::Enum,
      description: None,
    }
  }

  #[must_use]
  pub fn with_required(mut self, required: bool) -> Self {
    self.required = required;
    self
  }

  #[must_use]
  pub fn with_nullable(mut self, nullable: bool) -> Self {
    self.nullable = nullable;
    self
  }

  #[must_use]
  pub fn with_array_of_primitive(mut self, is_array_of_primitive: bool) -> Self {
    self.is_array_of_primitive = is_array_of_primitive;
    self
  }

  #[must_use]
  pub fn with_enum(mut self) -> Self {
    self.is_enum = true;
    self
  }

  #[must_use]
  pub fn with_description(mut self, description: Option<String>) -> Self {
    self.description = description;
    self
  }

  #[must_use]
  pub fn as_parameter(mut self) -> Self {
    self.is_parameter = true;
    self
  }
}

/// Semantic kind of a request, used by templates to pick a call shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum AttributeKind {
  Entity,
  List,
  Form,
  Other,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestAnalysis {
  pub body_type_name: Option<String>,
  pub response_type_name: Option<String>,
  pub attribute_kind: AttributeKind,
  pub has_enum_response: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MethodParameters {
  pub path: Vec<PropertyDescriptor>,
  pub header: Vec<PropertyDescriptor>,
  pub query: Vec<PropertyDescriptor>,
  pub cookie: Vec<PropertyDescriptor>,
}

impl MethodParameters {
  #[must_use]
  pub fn len(&self) -> usize {
    self.path.len() + self.header.len() + self.query.len() + self.cookie.len()
  }

  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Method {
  pub name: String,
  pub http_verb: HttpVerb,
  pub endpoint_template: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
  pub request: RequestAnalysis,
  pub parameters: MethodParameters,
}

impl Method {
  /// A method without a response type cannot be rendered, except `DELETE` which may return nothing.
  #[must_use]
  pub fn is_valid(&self) -> bool {
    self.request.response_type_name.is_some() || self.http_verb == HttpVerb::Delete
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Module {
  pub name: String,
  pub canonical_path_prefix: String,
  pub methods: Vec<Method>,
}

impl Module {
  /// Canonical prefix without leading slash or placeholder segments: `/users/{id}` gives `users`.
  #[must_use]
  pub fn base_path(&self) -> String {
    endpoint::base_endpoint(&self.canonical_path_prefix)
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SchemaModel {
  pub name: String,
  pub properties: Vec<PropertyDescriptor>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CodeMetadata {
  pub title: String,
  pub version: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeModel {
  pub metadata: CodeMetadata,
  pub modules: Vec<Module>,
  pub schemas: Vec<SchemaModel>,
  pub enums: Vec<EnumDescriptor>,
  /// Every property name seen across component schemas, in first-seen order.
  pub field_names: IndexSet<String>,
}

impl CodeModel {
  #[must_use]
  pub fn module(&self, name: &str) -> Option<&Module> {
    self.modules.iter().find(|module| module.name == name)
  }

  #[must_use]
  pub fn schema(&self, name: &str) -> Option<&SchemaModel> {
    self.schemas.iter().find(|schema| schema.name == name)
  }

  pub fn methods(&self) -> impl Iterator<Item = (&Module, &Method)> {
    self
      .modules
      .iter()
      .flat_map(|module| module.methods.iter().map(move |method| (module, method)))
  }
}
