use crate::generator::{
  document::HttpVerb,
  naming::operations::{method_name_from_operation_id, module_name_from_operation_id},
};

#[test]
fn test_module_name_from_operation_id() {
  let cases = [
    (Some("UsersController_listAll"), "Users"),
    (Some("UsersController_findOne"), "Users"),
    (Some("OrderLinesController_create"), "OrderLines"),
    (Some("HealthController"), "Health"),
    (Some("ControllerUsersController_get"), "Users"),
    (Some("listPets"), "listPets"),
    (Some("_orphan"), ""),
    (None, ""),
  ];
  for (input, expected) in cases {
    assert_eq!(module_name_from_operation_id(input), expected, "failed for {input:?}");
  }
}

#[test]
fn test_method_name_from_operation_id() {
  let cases = [
    (Some("UsersController_findOne"), HttpVerb::Get, "findOne"),
    (Some("UsersController_list"), HttpVerb::Get, "listAll"),
    (Some("UsersController_update_v2"), HttpVerb::Put, "update"),
    (Some("UsersController"), HttpVerb::Post, "post"),
    (Some("UsersController_"), HttpVerb::Delete, "delete"),
    (None, HttpVerb::Patch, "patch"),
  ];
  for (operation_id, verb, expected) in cases {
    assert_eq!(
      method_name_from_operation_id(operation_id, verb),
      expected,
      "failed for {operation_id:?} {verb}"
    );
  }
}
