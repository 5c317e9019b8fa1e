#[derive(Debug, thiserror::Error)]
pub enum ReflectError {
  #[error("document has no `{section}` section")]
  MissingSection { section: &'static str },
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
  #[error("config deserialization error at path {path}: {inner}")]
  JsonDeserialize { path: String, inner: serde_json::Error },
}

impl From<serde_path_to_error::Error<serde_json::Error>> for ConfigError {
  fn from(error: serde_path_to_error::Error<serde_json::Error>) -> Self {
    Self::JsonDeserialize {
      path: error.path().to_string(),
      inner: error.into_inner(),
    }
  }
}
