use indexmap::IndexMap;
use strum::EnumString;

use crate::generator::{
  document::{
    ANY_TYPE, ARRAY_TYPE, HttpVerb, ObjectOrReference, Operation, Parameter, RequestBody, Response,
    SchemaFragment, first_media_schema,
  },
  endpoint,
  enum_registry::EnumRegistry,
  metrics::GenerationWarning,
  model::{AttributeKind, Method, MethodParameters, PropertyDescriptor, RequestAnalysis},
  naming::operations::method_name_from_operation_id,
  properties::PropertyModelBuilder,
};

const PAGE_PARAMETER: &str = "page";

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString)]
#[strum(serialize_all = "lowercase")]
enum ParameterLocation {
  Path,
  Header,
  Query,
  Cookie,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct InferredType {
  name: String,
  from_enum: bool,
}

impl InferredType {
  fn named(name: impl Into<String>) -> Self {
    Self {
      name: name.into(),
      from_enum: false,
    }
  }

  fn enumeration(schema: &SchemaFragment) -> Self {
    Self {
      name: schema.enum_display_name(),
      from_enum: true,
    }
  }
}

/// Per-operation inference of body type, response type, request kind and parameters.
pub struct RequestResponseAnalyzer<'a> {
  registry: &'a mut EnumRegistry,
  warnings: &'a mut Vec<GenerationWarning>,
}

impl<'a> RequestResponseAnalyzer<'a> {
  pub fn new(registry: &'a mut EnumRegistry, warnings: &'a mut Vec<GenerationWarning>) -> Self {
    Self { registry, warnings }
  }

  /// Builds the complete [`Method`] for one operation of `module_name`.
  pub fn build_method(
    &mut self,
    verb: HttpVerb,
    endpoint_template: &str,
    operation: &Operation,
    module_name: &str,
  ) -> Method {
    let label = operation_label(verb, endpoint_template, operation);
    let parameters = self.bucket_parameters(&operation.parameters, module_name, &label);

    for placeholder in endpoint::path_params(endpoint_template) {
      if !parameters.path.iter().any(|parameter| parameter.name == placeholder) {
        self.warnings.push(GenerationWarning::UndeclaredPathParameter {
          operation: label.clone(),
          placeholder,
        });
      }
    }

    let method = Method {
      name: method_name_from_operation_id(operation.operation_id.as_deref(), verb),
      http_verb: verb,
      endpoint_template: endpoint_template.to_string(),
      description: operation.description.clone().or_else(|| operation.summary.clone()),
      request: Self::analyze(verb, operation),
      parameters,
    };

    if !method.is_valid() {
      self.warnings.push(GenerationWarning::MissingResponseType { operation: label });
    }
    method
  }

  #[must_use]
  pub fn analyze(verb: HttpVerb, operation: &Operation) -> RequestAnalysis {
    let response = response_type(&operation.responses);
    RequestAnalysis {
      body_type_name: operation.request_body.as_ref().and_then(body_type),
      has_enum_response: response.as_ref().is_some_and(|inferred| inferred.from_enum),
      response_type_name: response.map(|inferred| inferred.name),
      attribute_kind: Self::attribute_kind(verb, &operation.parameters),
    }
  }

  #[must_use]
  pub fn attribute_kind(verb: HttpVerb, parameters: &[ObjectOrReference<Parameter>]) -> AttributeKind {
    match verb {
      verb if verb.sends_form() => AttributeKind::Form,
      HttpVerb::Get if has_page_parameter(parameters) => AttributeKind::List,
      HttpVerb::Get => AttributeKind::Entity,
      _ => AttributeKind::Other,
    }
  }

  /// Routes parameters into path/header/query/cookie buckets in declaration order.
  ///
  /// Referenced parameters, parameters without a schema and parameters whose schema is a
  /// reference are skipped. Enum parameters register under `module_name`.
  pub fn bucket_parameters(
    &mut self,
    parameters: &[ObjectOrReference<Parameter>],
    module_name: &str,
    operation_label: &str,
  ) -> MethodParameters {
    let mut buckets = MethodParameters::default();

    for parameter in parameters {
      let parameter = match parameter {
        ObjectOrReference::Object(parameter) => parameter,
        ObjectOrReference::Ref { ref_path } => {
          self.warnings.push(GenerationWarning::SkippedReferencedParameter {
            operation: operation_label.to_string(),
            reference: ref_path.clone(),
          });
          continue;
        }
      };

      let Some(schema) = &parameter.schema else {
        self.warnings.push(GenerationWarning::SkippedParameterWithoutSchema {
          operation: operation_label.to_string(),
          parameter: parameter.name.clone(),
        });
        continue;
      };

      if let Some(ref_path) = &schema.ref_path {
        self.warnings.push(GenerationWarning::SkippedReferencedParameter {
          operation: operation_label.to_string(),
          reference: ref_path.clone(),
        });
        continue;
      }

      let Ok(location) = parameter.location.parse::<ParameterLocation>() else {
        self.warnings.push(GenerationWarning::UnknownParameterLocation {
          operation: operation_label.to_string(),
          parameter: parameter.name.clone(),
          location: parameter.location.clone(),
        });
        continue;
      };

      let mut builder = PropertyModelBuilder::new(self.registry, self.warnings);
      let Some(descriptor) = builder.describe(&parameter.name, schema, parameter.required, module_name) else {
        continue;
      };
      let description = parameter.description.clone().or_else(|| descriptor.description.clone());
      let descriptor = descriptor.with_description(description).as_parameter();

      bucket_for(&mut buckets, location).push(descriptor);
    }

    buckets
  }
}

fn bucket_for(buckets: &mut MethodParameters, location: ParameterLocation) -> &mut Vec<PropertyDescriptor> {
  match location {
    ParameterLocation::Path => &mut buckets.path,
    ParameterLocation::Header => &mut buckets.header,
    ParameterLocation::Query => &mut buckets.query,
    ParameterLocation::Cookie => &mut buckets.cookie,
  }
}

fn operation_label(verb: HttpVerb, endpoint_template: &str, operation: &Operation) -> String {
  operation
    .operation_id
    .clone()
    .unwrap_or_else(|| format!("{verb} {endpoint_template}"))
}

fn has_page_parameter(parameters: &[ObjectOrReference<Parameter>]) -> bool {
  parameters
    .iter()
    .filter_map(ObjectOrReference::as_object)
    .any(|parameter| parameter.name == PAGE_PARAMETER)
}

fn body_type(request_body: &ObjectOrReference<RequestBody>) -> Option<String> {
  let body = request_body.as_object()?;
  let schema = first_media_schema(body.content.as_ref())?;
  type_from_schema_or_type(schema).map(|inferred| inferred.name)
}

/// First response, in declaration order, whose content yields a type.
fn response_type(responses: &IndexMap<String, ObjectOrReference<Response>>) -> Option<InferredType> {
  responses
    .values()
    .filter_map(ObjectOrReference::as_object)
    .filter_map(|response| first_media_schema(response.content.as_ref()))
    .find_map(type_from_schema_or_type)
}

fn type_from_schema_or_type(schema: &SchemaFragment) -> Option<InferredType> {
  if let Some(name) = schema.reference_name() {
    return Some(InferredType::named(name));
  }

  if schema.has_enum() {
    return Some(InferredType::enumeration(schema));
  }

  if let Some(first) = schema.all_of.first()
    && !first.is_reference()
    && let Some(inferred) = type_from_data_member(first.properties.as_ref())
  {
    return Some(inferred);
  }

  if schema.is_type(ARRAY_TYPE)
    && let Some(items) = schema.items.as_deref()
  {
    if let Some(name) = items.reference_name() {
      return Some(InferredType::named(name));
    }
    if items.has_enum() {
      return Some(InferredType::enumeration(items));
    }
    return items.type_name().map(InferredType::named);
  }

  if let Some(inferred) = type_from_data_member(schema.properties.as_ref()) {
    return Some(inferred);
  }

  schema.type_name().map(InferredType::named)
}

/// Envelope rule: an object that wraps its payload in a `data` member is typed by that member.
fn type_from_data_member(properties: Option<&IndexMap<String, SchemaFragment>>) -> Option<InferredType> {
  let data = properties?.get("data")?;

  if let Some(name) = data.reference_name() {
    return Some(InferredType::named(name));
  }
  if data.is_type(ANY_TYPE) {
    return None;
  }
  if data.has_enum() {
    return Some(InferredType::enumeration(data));
  }
  // An array of enum values keeps its raw `array` type but still counts as an enum response.
  let from_enum = data.is_type(ARRAY_TYPE)
    && data
      .items
      .as_deref()
      .is_some_and(|items| !items.is_reference() && items.has_enum());
  data.type_name().map(|name| InferredType {
    name: name.to_string(),
    from_enum,
  })
}
