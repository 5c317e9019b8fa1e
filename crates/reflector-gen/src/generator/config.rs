use serde::Deserialize;

use crate::generator::{
  errors::ConfigError,
  naming::{NameTokenizer, constants::{DEFAULT_FILTER_WORDS, DEFAULT_PROPERTY_NAME}},
};

/// Options for one reflection run.
///
/// ```json
/// { "naming": { "propertyName": "filterWords", "filterWords": ["Get", "Res", "Default", "Dto", "Public"] } }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, bon::Builder)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct ReflectorConfig {
  #[builder(default)]
  pub naming: NamingConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, bon::Builder)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct NamingConfig {
  /// Name of the key holding the filter words. Informational; kept so existing config files load.
  #[builder(default = DEFAULT_PROPERTY_NAME.to_string())]
  pub property_name: String,
  #[builder(default = default_filter_words())]
  pub filter_words: Vec<String>,
}

impl Default for NamingConfig {
  fn default() -> Self {
    Self {
      property_name: DEFAULT_PROPERTY_NAME.to_string(),
      filter_words: default_filter_words(),
    }
  }
}

fn default_filter_words() -> Vec<String> {
  DEFAULT_FILTER_WORDS.iter().map(ToString::to_string).collect()
}

impl ReflectorConfig {
  pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
    let deserializer = &mut serde_json::Deserializer::from_str(json);
    Ok(serde_path_to_error::deserialize(deserializer)?)
  }

  /// Appends filter words not already configured.
  pub fn extend_filter_words(&mut self, words: impl IntoIterator<Item = String>) {
    for word in words {
      if !self.naming.filter_words.contains(&word) {
        self.naming.filter_words.push(word);
      }
    }
  }

  #[must_use]
  pub fn tokenizer(&self) -> NameTokenizer {
    NameTokenizer::new(self.naming.filter_words.iter().cloned())
  }
}
