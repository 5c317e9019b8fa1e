use crate::generator::naming::{NameTokenizer, capitalize_first, to_camel_case, to_pascal_case};

#[test]
fn test_tokenize() {
  let cases = [
    ("getUserDto", vec!["get", "User", "Dto"]),
    ("UsersController", vec!["Users", "Controller"]),
    ("ABC", vec!["A", "B", "C"]),
    ("user", vec!["user"]),
    ("User2Fa", vec!["User2", "Fa"]),
    ("", vec![]),
  ];
  for (input, expected) in cases {
    assert_eq!(NameTokenizer::tokenize(input), expected, "failed for input {input:?}");
  }
}

#[test]
fn test_to_entity_name_with_default_filter_words() {
  let tokenizer = NameTokenizer::default();
  let cases = [
    // `Res` is an exact filter word and does not strip `Response`.
    ("GetUserResponseDto", "userResponse"),
    ("GetResDto", "entity"),
    ("UserDto", "userEntity"),
    ("PublicOrderLineDto", "orderLine"),
    ("Users", "usersEntity"),
    ("", "entity"),
    ("userProfile", "userProfile"),
  ];
  for (input, expected) in cases {
    assert_eq!(tokenizer.to_entity_name(input), expected, "failed for input {input:?}");
  }
}

#[test]
fn test_to_entity_name_with_custom_filter_words() {
  let tokenizer = NameTokenizer::new(["Get", "Res", "Response", "Dto"]);
  assert_eq!(tokenizer.to_entity_name("GetUserResponseDto"), "userEntity");

  let unfiltered = NameTokenizer::new(Vec::<String>::new());
  assert_eq!(unfiltered.to_entity_name("GetUserDto"), "getUserDto");
}

#[test]
fn test_filter_words_are_case_sensitive() {
  let tokenizer = NameTokenizer::default();
  assert!(tokenizer.filter_words().contains("Dto"));
  assert_eq!(tokenizer.to_entity_name("dtoUser"), "dtoUser");
}

#[test]
fn test_casing_helpers() {
  let cases = [
    ("user-profile-id", "userProfileId", "UserProfileId"),
    ("x-request-id", "xRequestId", "XRequestId"),
    ("status", "status", "Status"),
    ("Status", "Status", "Status"),
    ("", "", ""),
  ];
  for (input, camel, pascal) in cases {
    assert_eq!(to_camel_case(input), camel, "camel failed for {input:?}");
    assert_eq!(to_pascal_case(input), pascal, "pascal failed for {input:?}");
  }
  assert_eq!(capitalize_first("éclair"), "Éclair");
}
