//! Lenient serde model of the OpenAPI sections the pipeline reads.
//!
//! Only `info`, `paths` and `components.schemas` are modelled. Every field is optional or
//! defaulted so partial documents still load; shape problems surface later as degenerate
//! values and warnings rather than parse failures.
//!
//! Schema positions accept any JSON value. Boolean schemas (OpenAPI 3.1) and fragments that
//! fail to decode become an empty [`SchemaFragment`]. An operation that fails to decode is
//! kept on its [`PathItem`] as a [`RejectedOperation`] so the run can report it.

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use strum::{Display, EnumString};

use crate::utils::ref_component_name;

pub const ARRAY_TYPE: &str = "array";
pub const OBJECT_TYPE: &str = "object";
pub const ANY_TYPE: &str = "any";
pub const NULL_TYPE: &str = "null";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OpenApiDocument {
  pub info: Option<Info>,
  pub paths: Option<IndexMap<String, PathItem>>,
  pub components: Option<Components>,
}

impl OpenApiDocument {
  #[must_use]
  pub fn component_schemas(&self) -> Option<&IndexMap<String, SchemaFragment>> {
    self.components.as_ref().and_then(|components| components.schemas.as_ref())
  }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Info {
  #[serde(default)]
  pub title: String,
  #[serde(default)]
  pub version: String,
  pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Components {
  #[serde(default, deserialize_with = "lenient_schema_map")]
  pub schemas: Option<IndexMap<String, SchemaFragment>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize)]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpVerb {
  Get,
  Post,
  Put,
  Patch,
  Delete,
  Head,
  Options,
  Trace,
}

impl HttpVerb {
  #[must_use]
  pub fn as_lowercase(self) -> String {
    self.to_string().to_ascii_lowercase()
  }

  #[must_use]
  pub fn sends_form(self) -> bool {
    matches!(self, Self::Post | Self::Put | Self::Patch)
  }
}

/// Operations of a single endpoint in declaration order.
///
/// Keys that are not HTTP verbs (`parameters`, `summary`, `servers`, `$ref`, extensions)
/// are dropped while deserializing. A path item that is not an object has no operations.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(from = "Value")]
pub struct PathItem {
  operations: IndexMap<HttpVerb, Operation>,
  rejected: Vec<RejectedOperation>,
}

/// A verb entry whose value could not be read as an operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedOperation {
  pub verb: HttpVerb,
  pub reason: String,
}

impl PathItem {
  pub fn operations(&self) -> impl Iterator<Item = (HttpVerb, &Operation)> {
    self.operations.iter().map(|(verb, operation)| (*verb, operation))
  }

  #[must_use]
  pub fn first_operation(&self) -> Option<(HttpVerb, &Operation)> {
    self.operations().next()
  }

  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.operations.is_empty()
  }

  #[must_use]
  pub fn rejected_operations(&self) -> &[RejectedOperation] {
    &self.rejected
  }
}

impl From<Value> for PathItem {
  fn from(value: Value) -> Self {
    let mut item = Self::default();
    let Value::Object(entries) = value else {
      return item;
    };

    for (key, value) in entries {
      let Ok(verb) = key.parse::<HttpVerb>() else {
        continue;
      };
      match serde_json::from_value(value) {
        Ok(operation) => {
          item.operations.insert(verb, operation);
        }
        Err(error) => item.rejected.push(RejectedOperation {
          verb,
          reason: error.to_string(),
        }),
      }
    }
    item
  }
}

/// Either an inline object or a `$ref` to a reusable component.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ObjectOrReference<T> {
  Ref {
    #[serde(rename = "$ref")]
    ref_path: String,
  },
  Object(T),
}

impl<T> ObjectOrReference<T> {
  #[must_use]
  pub fn as_object(&self) -> Option<&T> {
    match self {
      Self::Object(object) => Some(object),
      Self::Ref { .. } => None,
    }
  }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Operation {
  pub operation_id: Option<String>,
  pub summary: Option<String>,
  pub description: Option<String>,
  #[serde(default)]
  pub parameters: Vec<ObjectOrReference<Parameter>>,
  pub request_body: Option<ObjectOrReference<RequestBody>>,
  #[serde(default)]
  pub responses: IndexMap<String, ObjectOrReference<Response>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Parameter {
  #[serde(default)]
  pub name: String,
  #[serde(rename = "in", default)]
  pub location: String,
  #[serde(default)]
  pub required: bool,
  pub description: Option<String>,
  #[serde(default, deserialize_with = "lenient_schema")]
  pub schema: Option<SchemaFragment>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RequestBody {
  pub description: Option<String>,
  pub content: Option<IndexMap<String, MediaType>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Response {
  pub description: Option<String>,
  pub content: Option<IndexMap<String, MediaType>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MediaType {
  #[serde(default, deserialize_with = "lenient_schema")]
  pub schema: Option<SchemaFragment>,
}

/// Schema of the first media type entry, if that entry carries one.
#[must_use]
pub fn first_media_schema(content: Option<&IndexMap<String, MediaType>>) -> Option<&SchemaFragment> {
  content?.values().next()?.schema.as_ref()
}

/// `type` is a single name in OpenAPI 3.0 and may be a list in 3.1.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum SchemaType {
  Single(String),
  Multiple(Vec<String>),
}

impl SchemaType {
  /// The single type, or the first non-`null` entry of a type list.
  #[must_use]
  pub fn primary(&self) -> Option<&str> {
    match self {
      Self::Single(name) => Some(name),
      Self::Multiple(names) => names.iter().map(String::as_str).find(|name| *name != NULL_TYPE),
    }
  }

  fn includes_null(&self) -> bool {
    match self {
      Self::Single(name) => name == NULL_TYPE,
      Self::Multiple(names) => names.iter().any(|name| name == NULL_TYPE),
    }
  }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaFragment {
  #[serde(rename = "$ref")]
  pub ref_path: Option<String>,
  #[serde(rename = "type")]
  pub schema_type: Option<SchemaType>,
  pub format: Option<String>,
  pub title: Option<String>,
  pub description: Option<String>,
  #[serde(rename = "enum")]
  pub enum_values: Option<Vec<Value>>,
  #[serde(default, deserialize_with = "lenient_boxed_schema")]
  pub items: Option<Box<SchemaFragment>>,
  #[serde(default, deserialize_with = "lenient_schema_list")]
  pub all_of: Vec<SchemaFragment>,
  #[serde(default, deserialize_with = "lenient_schema_map")]
  pub properties: Option<IndexMap<String, SchemaFragment>>,
  #[serde(default, deserialize_with = "lenient_names")]
  pub required: Vec<String>,
  pub nullable: Option<bool>,
  #[serde(rename = "x-enum-name")]
  pub x_enum_name: Option<String>,
}

impl SchemaFragment {
  /// Decodes any JSON value; non-objects and malformed fragments become the empty fragment.
  #[must_use]
  pub fn from_value_lossy(value: Value) -> Self {
    serde_json::from_value(value).unwrap_or_default()
  }

  #[must_use]
  pub fn is_reference(&self) -> bool {
    self.ref_path.is_some()
  }

  /// Component name of a `$ref` fragment.
  #[must_use]
  pub fn reference_name(&self) -> Option<&str> {
    self.ref_path.as_deref().map(ref_component_name)
  }

  #[must_use]
  pub fn type_name(&self) -> Option<&str> {
    self.schema_type.as_ref().and_then(SchemaType::primary)
  }

  #[must_use]
  pub fn is_type(&self, name: &str) -> bool {
    self.type_name() == Some(name)
  }

  #[must_use]
  pub fn has_enum(&self) -> bool {
    self.enum_values.is_some()
  }

  /// Enum values rendered as strings: strings verbatim, `null` as empty, anything else as JSON.
  #[must_use]
  pub fn enum_labels(&self) -> Option<Vec<String>> {
    self
      .enum_values
      .as_ref()
      .map(|values| values.iter().map(enum_value_label).collect())
  }

  #[must_use]
  pub fn is_nullable(&self) -> bool {
    self.nullable.unwrap_or(false) || self.schema_type.as_ref().is_some_and(SchemaType::includes_null)
  }

  /// First `allOf` member when it is a reference.
  #[must_use]
  pub fn all_of_reference(&self) -> Option<&str> {
    self.all_of.first().and_then(SchemaFragment::reference_name)
  }

  /// An object declared in place: `type: object`, or an untyped fragment that only
  /// carries `properties` or a non-reference `allOf`.
  #[must_use]
  pub fn is_inline_object(&self) -> bool {
    if self.is_type(OBJECT_TYPE) {
      return true;
    }
    self.schema_type.is_none()
      && !self.has_enum()
      && (self.properties.is_some() || (!self.all_of.is_empty() && self.all_of_reference().is_none()))
  }

  /// Name for an enum used as a whole body or response: `x-enum-name`, then `title`, then `string`.
  #[must_use]
  pub fn enum_display_name(&self) -> String {
    self
      .x_enum_name
      .as_deref()
      .or(self.title.as_deref())
      .unwrap_or("string")
      .to_string()
  }
}

fn enum_value_label(value: &Value) -> String {
  match value {
    Value::String(text) => text.clone(),
    Value::Null => String::new(),
    other => other.to_string(),
  }
}

/// Accepts `required` in any shape; only a list of strings contributes names.
fn lenient_names<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
  D: Deserializer<'de>,
{
  let names = match Value::deserialize(deserializer)? {
    Value::Array(items) => items
      .into_iter()
      .filter_map(|item| match item {
        Value::String(name) => Some(name),
        _ => None,
      })
      .collect(),
    _ => Vec::new(),
  };
  Ok(names)
}

fn lenient_schema<'de, D>(deserializer: D) -> Result<Option<SchemaFragment>, D::Error>
where
  D: Deserializer<'de>,
{
  Ok(Option::<Value>::deserialize(deserializer)?.map(SchemaFragment::from_value_lossy))
}

fn lenient_boxed_schema<'de, D>(deserializer: D) -> Result<Option<Box<SchemaFragment>>, D::Error>
where
  D: Deserializer<'de>,
{
  Ok(lenient_schema(deserializer)?.map(Box::new))
}

fn lenient_schema_list<'de, D>(deserializer: D) -> Result<Vec<SchemaFragment>, D::Error>
where
  D: Deserializer<'de>,
{
  let fragments = match Value::deserialize(deserializer)? {
    Value::Array(items) => items.into_iter().map(SchemaFragment::from_value_lossy).collect(),
    _ => Vec::new(),
  };
  Ok(fragments)
}

/// Named schemas in declaration order. A value that is not an object yields no map.
fn lenient_schema_map<'de, D>(deserializer: D) -> Result<Option<IndexMap<String, SchemaFragment>>, D::Error>
where
  D: Deserializer<'de>,
{
  let fragments = match Option::<Value>::deserialize(deserializer)? {
    Some(Value::Object(members)) => Some(
      members
        .into_iter()
        .map(|(name, value)| (name, SchemaFragment::from_value_lossy(value)))
        .collect(),
    ),
    _ => None,
  };
  Ok(fragments)
}
