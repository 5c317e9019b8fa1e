use indexmap::IndexMap;

use crate::generator::{
  document::SchemaFragment,
  enum_registry::EnumRegistry,
  metrics::GenerationWarning,
  model::{PropertyDescriptor, PropertyKind},
  schema_node::{SchemaNode, SchemaTypeResolver},
};

/// Builds typed descriptors for schema members and operation parameters.
///
/// Enum members register their value-set with the run's [`EnumRegistry`] under the
/// supplied entity name. Inline objects are not modelled and are skipped with a warning.
pub struct PropertyModelBuilder<'a> {
  registry: &'a mut EnumRegistry,
  warnings: &'a mut Vec<GenerationWarning>,
}

impl<'a> PropertyModelBuilder<'a> {
  pub fn new(registry: &'a mut EnumRegistry, warnings: &'a mut Vec<GenerationWarning>) -> Self {
    Self { registry, warnings }
  }

  /// Descriptors for `members` in declaration order.
  pub fn build(
    &mut self,
    members: &IndexMap<String, SchemaFragment>,
    required_names: &[String],
    entity_name: &str,
  ) -> Vec<PropertyDescriptor> {
    members
      .iter()
      .filter_map(|(name, fragment)| {
        let required = required_names.contains(name);
        self.describe(name, fragment, required, entity_name)
      })
      .collect()
  }

  /// Descriptor for a single member, or `None` when the member is an inline object.
  pub fn describe(
    &mut self,
    name: &str,
    fragment: &SchemaFragment,
    required: bool,
    entity_name: &str,
  ) -> Option<PropertyDescriptor> {
    let descriptor = match SchemaTypeResolver::resolve(fragment) {
      SchemaNode::ObjectRef { name: reference } | SchemaNode::Composite { reference, .. } => {
        PropertyDescriptor::new(name, PropertyKind::Object, reference)
      }
      SchemaNode::Primitive {
        enum_values: Some(values),
        ..
      } => {
        let enum_name = self.registry.resolve(entity_name, name, &values);
        PropertyDescriptor::new(name, PropertyKind::Enum, enum_name)
      }
      SchemaNode::Array { item } => self.describe_array(name, fragment, *item, entity_name),
      SchemaNode::Primitive { .. } if fragment.is_inline_object() => {
        self.warnings.push(GenerationWarning::SkippedInlineObject {
          entity: entity_name.to_string(),
          property: name.to_string(),
        });
        return None;
      }
      SchemaNode::Primitive { raw_type, .. } => PropertyDescriptor::new(name, PropertyKind::Primitive, raw_type),
    };

    Some(
      descriptor
        .with_required(required)
        .with_nullable(fragment.is_nullable())
        .with_description(fragment.description.clone()),
    )
  }

  fn describe_array(
    &mut self,
    name: &str,
    fragment: &SchemaFragment,
    item: SchemaNode,
    entity_name: &str,
  ) -> PropertyDescriptor {
    if let Some(values) = item.enum_values() {
      let enum_name = self.registry.resolve(entity_name, name, values);
      return PropertyDescriptor::new(name, PropertyKind::Array, enum_name)
        .with_array_of_primitive(true)
        .with_enum();
    }

    if fragment.items.is_none() {
      self.warnings.push(GenerationWarning::UnknownArrayItems {
        entity: entity_name.to_string(),
        property: name.to_string(),
      });
    }

    PropertyDescriptor::new(name, PropertyKind::Array, item.type_name())
      .with_array_of_primitive(item.is_primitive())
  }
}
