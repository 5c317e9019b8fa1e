use crate::generator::{
  config::{NamingConfig, ReflectorConfig},
  errors::ConfigError,
  naming::constants::DEFAULT_FILTER_WORDS,
};

#[test]
fn test_default_filter_words() {
  let config = ReflectorConfig::default();
  assert_eq!(config.naming.filter_words, DEFAULT_FILTER_WORDS.to_vec());
  assert_eq!(config, ReflectorConfig::builder().build());
}

#[test]
fn test_from_json_str() {
  let cases = [
    ("{}", vec!["Get", "Res", "Default", "Dto", "Public"]),
    (r#"{ "naming": {} }"#, vec!["Get", "Res", "Default", "Dto", "Public"]),
    (r#"{ "naming": { "filterWords": ["Model"] } }"#, vec!["Model"]),
    (r#"{ "naming": { "filterWords": [] } }"#, vec![]),
  ];
  for (json, expected) in cases {
    let config = ReflectorConfig::from_json_str(json).unwrap();
    assert_eq!(config.naming.filter_words, expected, "failed for {json:?}");
  }
}

#[test]
fn test_from_json_str_accepts_property_name() {
  let json = r#"{
    "naming": {
      "propertyName": "filterWords",
      "filterWords": ["Get", "Res", "Default", "Dto", "Public"]
    }
  }"#;
  let config = ReflectorConfig::from_json_str(json).unwrap();

  assert_eq!(config, ReflectorConfig::default());
  assert_eq!(config.naming.property_name, "filterWords");

  let renamed = ReflectorConfig::from_json_str(r#"{ "naming": { "propertyName": "words" } }"#).unwrap();
  assert_eq!(renamed.naming.property_name, "words");
  assert_eq!(renamed.naming.filter_words, DEFAULT_FILTER_WORDS.to_vec());
}

#[test]
fn test_from_json_str_reports_path() {
  let ConfigError::JsonDeserialize { path, .. } =
    ReflectorConfig::from_json_str(r#"{ "naming": { "filterWords": "Dto" } }"#).unwrap_err();
  assert_eq!(path, "naming.filterWords");
}

#[test]
fn test_from_json_str_rejects_unknown_fields() {
  let cases = [
    r#"{ "naming": { "filter_words": [] } }"#,
    r#"{ "output": "model.json" }"#,
  ];
  for json in cases {
    let error = ReflectorConfig::from_json_str(json).unwrap_err();
    assert!(error.to_string().contains("unknown field"), "failed for {json:?}");
  }
}

#[test]
fn test_extend_filter_words_skips_duplicates() {
  let mut config = ReflectorConfig::default();
  config.extend_filter_words(["Dto", "Model", "Model"].map(String::from));

  assert_eq!(
    config.naming.filter_words,
    vec!["Get", "Res", "Default", "Dto", "Public", "Model"]
  );
}

#[test]
fn test_tokenizer_uses_configured_words() {
  let config = ReflectorConfig::builder()
    .naming(NamingConfig::builder().filter_words(vec!["Model".to_string()]).build())
    .build();
  let tokenizer = config.tokenizer();

  assert_eq!(tokenizer.to_entity_name("UserModel"), "userEntity");
  assert_eq!(tokenizer.to_entity_name("UserDto"), "userDto");
}
