//! End-to-end reflection of the bundled fixture through the public API.

use std::{io::Write, path::PathBuf};

use reflector_gen::{
  generator::{
    config::ReflectorConfig,
    model::AttributeKind,
    orchestrator::{ReflectOutput, Reflector},
  },
  utils::spec::{SpecFormat, SpecLoader},
};

fn fixture_path() -> PathBuf {
  PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fixtures/users_api.json")
}

async fn reflect_file(path: &std::path::Path) -> ReflectOutput {
  let loader = SpecLoader::open(path).await.unwrap();
  let document = loader.parse().unwrap();
  Reflector::new(ReflectorConfig::default()).reflect(&document).unwrap()
}

#[tokio::test]
async fn test_fixture_reflects_from_disk() {
  let output = reflect_file(&fixture_path()).await;

  assert_eq!(output.model.metadata.title, "Users API");
  assert_eq!(output.model.metadata.version, "1.2.0");
  assert_eq!(
    output.model.modules.iter().map(|module| module.name.as_str()).collect::<Vec<_>>(),
    vec!["Users", "Orders", ""]
  );

  let users = output.model.module("Users").unwrap();
  assert_eq!(users.base_path(), "users");
  let list_all = &users.methods[0];
  assert_eq!(list_all.name, "listAll");
  assert_eq!(list_all.request.attribute_kind, AttributeKind::List);

  assert_eq!(output.stats.methods_generated, 10);
  assert_eq!(output.stats.invalid_methods, 1);
  assert_eq!(output.stats.warnings.len(), 7);
}

#[tokio::test]
async fn test_yaml_copy_reflects_identically() {
  let json = std::fs::read_to_string(fixture_path()).unwrap();
  let value: serde_json::Value = serde_json::from_str(&json).unwrap();

  let mut file = tempfile::Builder::new().suffix(".yml").tempfile().unwrap();
  file.write_all(serde_yaml::to_string(&value).unwrap().as_bytes()).unwrap();

  let loader = SpecLoader::open(file.path()).await.unwrap();
  assert_eq!(loader.format(), SpecFormat::Yaml);

  let from_yaml = reflect_file(file.path()).await;
  let from_json = reflect_file(&fixture_path()).await;
  assert_eq!(from_yaml.model, from_json.model);
  assert_eq!(from_yaml.stats, from_json.stats);
}

#[test]
fn test_model_serializes_in_camel_case() {
  let document = SpecFormat::Json.parse(include_bytes!("../fixtures/users_api.json")).unwrap();
  let output = Reflector::default().reflect(&document).unwrap();
  let json = serde_json::to_value(&output.model).unwrap();

  let first_method = &json["modules"][0]["methods"][0];
  assert_eq!(first_method["endpointTemplate"], "/users");
  assert_eq!(first_method["request"]["attributeKind"], "list");
  assert_eq!(json["enums"][0]["canonicalName"], "ENUM_USER_ENTITY_STATUS");
  assert_eq!(json["fieldNames"][0], "id");
}
