use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::generator::{
  document::{OpenApiDocument, Operation, SchemaFragment},
  enum_registry::EnumRegistry,
  naming::NameTokenizer,
};

pub(super) const USERS_API: &str = include_str!("../../../fixtures/users_api.json");

pub(super) fn from_json<T: DeserializeOwned>(value: Value) -> T {
  serde_json::from_value(value).expect("failed to deserialize test value")
}

pub(super) fn fragment(value: Value) -> SchemaFragment {
  from_json(value)
}

pub(super) fn members(value: Value) -> IndexMap<String, SchemaFragment> {
  from_json(value)
}

pub(super) fn operation(value: Value) -> Operation {
  from_json(value)
}

pub(super) fn parse_document(json: &str) -> OpenApiDocument {
  serde_json::from_str(json).expect("failed to parse test document")
}

pub(super) fn default_registry() -> EnumRegistry {
  EnumRegistry::new(NameTokenizer::default())
}

pub(super) fn strings(values: &[&str]) -> Vec<String> {
  values.iter().map(ToString::to_string).collect()
}
