use crate::generator::{
  document::HttpVerb,
  naming::{
    constants::{CONTROLLER_TOKEN, LIST_ALL_METHOD, LIST_METHOD, OPERATION_ID_SEPARATOR},
    tokenizer::NameTokenizer,
  },
};

/// Module key for an `operationId` such as `UsersController_findOne`.
///
/// The segment before the first `_` is tokenized and every `Controller` token dropped.
/// A missing `operationId` yields the empty key.
#[must_use]
pub fn module_name_from_operation_id(operation_id: Option<&str>) -> String {
  let Some(operation_id) = operation_id else {
    return String::new();
  };
  let prefix = operation_id
    .split_once(OPERATION_ID_SEPARATOR)
    .map_or(operation_id, |(prefix, _)| prefix);

  NameTokenizer::tokenize(prefix)
    .into_iter()
    .filter(|token| token != CONTROLLER_TOKEN)
    .collect()
}

/// Method name for an operation: the `operationId` segment after the first `_`.
///
/// `list` is renamed to `listAll`. Without a usable segment the lower-case verb is used.
#[must_use]
pub fn method_name_from_operation_id(operation_id: Option<&str>, verb: HttpVerb) -> String {
  let segment = operation_id
    .and_then(|id| id.split_once(OPERATION_ID_SEPARATOR))
    .map(|(_, rest)| rest.split(OPERATION_ID_SEPARATOR).next().unwrap_or(rest))
    .filter(|segment| !segment.is_empty());

  match segment {
    Some(LIST_METHOD) => LIST_ALL_METHOD.to_string(),
    Some(segment) => segment.to_string(),
    None => verb.as_lowercase(),
  }
}
