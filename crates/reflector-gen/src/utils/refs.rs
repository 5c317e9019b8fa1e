/// Extracts the referenced component name from a `$ref` path.
///
/// The name is the last `/` segment of the path, so `#/components/schemas/User`
/// yields `User`. External and non-component references are not rejected: a
/// reference the document cannot resolve still names the type it points at.
#[must_use]
pub fn ref_component_name(ref_path: &str) -> &str {
  ref_path.rsplit('/').next().unwrap_or(ref_path)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_ref_component_name() {
    let cases = [
      ("#/components/schemas/User", "User"),
      ("#/components/parameters/PageParam", "PageParam"),
      ("./common.yaml#/Pet", "Pet"),
      ("User", "User"),
      ("#/components/schemas/", ""),
      ("", ""),
    ];
    for (input, expected) in cases {
      assert_eq!(ref_component_name(input), expected, "failed for input {input:?}");
    }
  }
}
