use serde_json::json;

use super::support::{default_registry, fragment, members, strings};
use crate::generator::{
  metrics::GenerationWarning,
  model::{PropertyDescriptor, PropertyKind},
  properties::PropertyModelBuilder,
};

#[test]
fn test_array_of_reference() {
  let mut registry = default_registry();
  let mut warnings = Vec::new();
  let mut builder = PropertyModelBuilder::new(&mut registry, &mut warnings);

  let descriptor = builder
    .describe(
      "items",
      &fragment(json!({ "type": "array", "items": { "$ref": "#/components/schemas/Foo" } })),
      false,
      "CartDto",
    )
    .unwrap();

  assert_eq!(descriptor.kind, PropertyKind::Array);
  assert_eq!(descriptor.canonical_type_name, "Foo");
  assert!(!descriptor.is_array_of_primitive);
  assert!(!descriptor.is_enum);
}

#[test]
fn test_build_members_in_order() {
  let mut registry = default_registry();
  let mut warnings = Vec::new();
  let schema_members = members(json!({
    "id": { "type": "string", "description": "Identifier" },
    "status": { "type": "string", "enum": ["ACTIVE", "INACTIVE"] },
    "roles": { "type": "array", "items": { "type": "string", "enum": ["admin", "member"] } },
    "tags": { "type": "array", "items": { "type": "string" } },
    "address": { "$ref": "#/components/schemas/AddressDto" },
    "manager": { "allOf": [{ "$ref": "#/components/schemas/UserDto" }], "nullable": true },
    "x-trace-id": { "type": "string" },
    "nickname": { "type": ["string", "null"] }
  }));

  let required = strings(&["id", "address"]);
  let descriptors = PropertyModelBuilder::new(&mut registry, &mut warnings).build(&schema_members, &required, "UserDto");

  let expected = vec![
    PropertyDescriptor::new("id", PropertyKind::Primitive, "string")
      .with_required(true)
      .with_description(Some("Identifier".to_string())),
    PropertyDescriptor::new("status", PropertyKind::Enum, "ENUM_USER_ENTITY_STATUS"),
    PropertyDescriptor::new("roles", PropertyKind::Array, "ENUM_USER_ENTITY_ROLES")
      .with_array_of_primitive(true)
      .with_enum(),
    PropertyDescriptor::new("tags", PropertyKind::Array, "string").with_array_of_primitive(true),
    PropertyDescriptor::new("address", PropertyKind::Object, "AddressDto").with_required(true),
    PropertyDescriptor::new("manager", PropertyKind::Object, "UserDto").with_nullable(true),
    PropertyDescriptor::new("x-trace-id", PropertyKind::Primitive, "string"),
    PropertyDescriptor::new("nickname", PropertyKind::Primitive, "string").with_nullable(true),
  ];
  assert_eq!(descriptors, expected);
  assert!(warnings.is_empty());
  assert_eq!(registry.len(), 2);
}

#[test]
fn test_descriptor_flags() {
  let cases = [
    ("x-trace-id", true),
    ("traceId", false),
    ("trace_id", false),
  ];
  for (name, expected) in cases {
    let descriptor = PropertyDescriptor::new(name, PropertyKind::Primitive, "string");
    assert_eq!(descriptor.needs_bracket_access, expected, "failed for {name:?}");
  }

  let enum_descriptor = PropertyDescriptor::new("status", PropertyKind::Enum, "ENUM_X_STATUS");
  assert!(enum_descriptor.is_enum);
  assert!(!enum_descriptor.is_parameter);
  assert!(enum_descriptor.as_parameter().is_parameter);
}

#[test]
fn test_inline_objects_are_skipped_with_warning() {
  let mut registry = default_registry();
  let mut warnings = Vec::new();
  let schema_members = members(json!({
    "metadata": { "type": "object", "properties": { "source": { "type": "string" } } },
    "extra": { "properties": { "a": { "type": "string" } } },
    "name": { "type": "string" }
  }));

  let descriptors = PropertyModelBuilder::new(&mut registry, &mut warnings).build(&schema_members, &[], "UserDto");

  assert_eq!(descriptors.len(), 1);
  assert_eq!(descriptors[0].name, "name");
  assert_eq!(
    warnings,
    vec![
      GenerationWarning::SkippedInlineObject {
        entity: "UserDto".to_string(),
        property: "metadata".to_string(),
      },
      GenerationWarning::SkippedInlineObject {
        entity: "UserDto".to_string(),
        property: "extra".to_string(),
      },
    ]
  );
}

#[test]
fn test_array_without_items_is_unknown() {
  let mut registry = default_registry();
  let mut warnings = Vec::new();
  let descriptor = PropertyModelBuilder::new(&mut registry, &mut warnings)
    .describe("lines", &fragment(json!({ "type": "array" })), true, "OrderDto")
    .unwrap();

  assert_eq!(descriptor.kind, PropertyKind::Array);
  assert_eq!(descriptor.canonical_type_name, "unknown");
  assert!(descriptor.is_array_of_primitive);
  assert!(descriptor.required);
  assert_eq!(
    warnings,
    vec![GenerationWarning::UnknownArrayItems {
      entity: "OrderDto".to_string(),
      property: "lines".to_string(),
    }]
  );
}

#[test]
fn test_nested_array_type_name() {
  let mut registry = default_registry();
  let mut warnings = Vec::new();
  let descriptor = PropertyModelBuilder::new(&mut registry, &mut warnings)
    .describe(
      "matrix",
      &fragment(json!({ "type": "array", "items": { "type": "array", "items": { "type": "number" } } })),
      false,
      "OrderDto",
    )
    .unwrap();

  assert_eq!(descriptor.canonical_type_name, "number[]");
  assert!(descriptor.is_array_of_primitive);
}

#[test]
fn test_shared_value_sets_reuse_enum_names_across_entities() {
  let mut registry = default_registry();
  let mut warnings = Vec::new();
  let status = fragment(json!({ "type": "string", "enum": ["ACTIVE", "INACTIVE"] }));

  let mut builder = PropertyModelBuilder::new(&mut registry, &mut warnings);
  let user = builder.describe("status", &status, false, "UserDto").unwrap();
  let order = builder.describe("state", &status, false, "OrderDto").unwrap();

  assert_eq!(user.canonical_type_name, "ENUM_USER_ENTITY_STATUS");
  assert_eq!(order.canonical_type_name, user.canonical_type_name);
}
