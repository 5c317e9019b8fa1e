use serde::Serialize;

use crate::generator::document::{ARRAY_TYPE, SchemaFragment};

pub const UNKNOWN_TYPE: &str = "unknown";
pub const DEFAULT_PRIMITIVE_TYPE: &str = "string";
const ARRAY_SUFFIX: &str = "[]";

/// Resolved shape of a schema fragment. Every consumer matches on this instead of
/// probing the raw fragment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum SchemaNode {
  #[serde(rename_all = "camelCase")]
  Primitive {
    raw_type: String,
    enum_values: Option<Vec<String>>,
  },
  Array {
    item: Box<SchemaNode>,
  },
  ObjectRef {
    name: String,
  },
  Composite {
    reference: String,
    nullable: bool,
  },
}

impl SchemaNode {
  #[must_use]
  pub fn primitive(raw_type: impl Into<String>) -> Self {
    Self::Primitive {
      raw_type: raw_type.into(),
      enum_values: None,
    }
  }

  #[must_use]
  pub fn array(item: SchemaNode) -> Self {
    Self::Array { item: Box::new(item) }
  }

  #[must_use]
  pub fn object_ref(name: impl Into<String>) -> Self {
    Self::ObjectRef { name: name.into() }
  }

  /// Rendered type name; arrays append `[]` to their item name, so nesting stacks.
  #[must_use]
  pub fn type_name(&self) -> String {
    match self {
      Self::Primitive { raw_type, .. } => raw_type.clone(),
      Self::Array { item } => format!("{}{ARRAY_SUFFIX}", item.type_name()),
      Self::ObjectRef { name } => name.clone(),
      Self::Composite { reference, .. } => reference.clone(),
    }
  }

  #[must_use]
  pub fn is_primitive(&self) -> bool {
    !matches!(self, Self::ObjectRef { .. } | Self::Composite { .. })
  }

  #[must_use]
  pub fn enum_values(&self) -> Option<&[String]> {
    match self {
      Self::Primitive {
        enum_values: Some(values),
        ..
      } => Some(values),
      _ => None,
    }
  }
}

pub struct SchemaTypeResolver;

impl SchemaTypeResolver {
  #[must_use]
  pub fn resolve(fragment: &SchemaFragment) -> SchemaNode {
    if let Some(name) = fragment.reference_name() {
      return SchemaNode::object_ref(name);
    }

    if let Some(values) = fragment.enum_labels() {
      return SchemaNode::Primitive {
        raw_type: fragment.type_name().unwrap_or(DEFAULT_PRIMITIVE_TYPE).to_string(),
        enum_values: Some(values),
      };
    }

    if fragment.is_type(ARRAY_TYPE) {
      let item = match fragment.items.as_deref() {
        Some(items) => Self::resolve(items),
        None => SchemaNode::primitive(UNKNOWN_TYPE),
      };
      return SchemaNode::array(item);
    }

    if let Some(reference) = fragment.all_of_reference() {
      return SchemaNode::Composite {
        reference: reference.to_string(),
        nullable: fragment.is_nullable(),
      };
    }

    SchemaNode::primitive(fragment.type_name().unwrap_or(DEFAULT_PRIMITIVE_TYPE))
  }
}
