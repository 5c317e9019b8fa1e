use indexmap::IndexMap;
use itertools::Itertools;
use serde::Serialize;

use crate::generator::naming::{NameTokenizer, constants::ENUM_PREFIX};

/// One distinct enum value-set and the type name every occurrence of it shares.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnumDescriptor {
  pub key: String,
  pub values: Vec<String>,
  pub canonical_name: String,
}

/// Deduplicates enum value-sets across the whole document.
///
/// Value-sets are keyed by their values joined with `,` in declaration order, so
/// `["a","b"]` and `["b","a"]` are distinct. The first registration of a key fixes its
/// name; later lookups return it regardless of the entity or property asking.
#[derive(Debug, Clone, Default)]
pub struct EnumRegistry {
  tokenizer: NameTokenizer,
  entries: IndexMap<String, EnumDescriptor>,
}

impl EnumRegistry {
  #[must_use]
  pub fn new(tokenizer: NameTokenizer) -> Self {
    Self {
      tokenizer,
      entries: IndexMap::new(),
    }
  }

  pub fn resolve(&mut self, entity_name: &str, property_name: &str, values: &[String]) -> String {
    let key = values.join(",");
    if let Some(descriptor) = self.entries.get(&key) {
      return descriptor.canonical_name.clone();
    }

    let canonical_name = self.derive_name(entity_name, property_name);
    self.entries.insert(
      key.clone(),
      EnumDescriptor {
        key,
        values: values.iter().unique().cloned().collect(),
        canonical_name: canonical_name.clone(),
      },
    );
    canonical_name
  }

  /// `ENUM_<ENTITY TOKENS>_<PROPERTY>` with adjacent repeated tokens collapsed.
  fn derive_name(&self, entity_name: &str, property_name: &str) -> String {
    let entity = self.tokenizer.to_entity_name(entity_name);
    let entity_tokens = NameTokenizer::tokenize(&entity)
      .iter()
      .map(|token| token.to_uppercase())
      .join("_");
    let raw = format!("{ENUM_PREFIX}_{entity_tokens}_{}", property_name.to_uppercase());

    raw.split('_').dedup().join("_")
  }

  #[must_use]
  pub fn get(&self, key: &str) -> Option<&EnumDescriptor> {
    self.entries.get(key)
  }

  pub fn descriptors(&self) -> impl Iterator<Item = &EnumDescriptor> {
    self.entries.values()
  }

  #[must_use]
  pub fn into_descriptors(self) -> Vec<EnumDescriptor> {
    self.entries.into_values().collect()
  }

  #[must_use]
  pub fn len(&self) -> usize {
    self.entries.len()
  }

  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }
}
