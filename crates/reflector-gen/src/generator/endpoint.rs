use std::sync::LazyLock;

use regex::Regex;

static PLACEHOLDER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\{(.+)\}$|^\[(.+)\]$").unwrap());

/// Literal segments of an endpoint template joined by `/`, without a leading slash.
///
/// `/users/{id}/posts` becomes `users/posts`.
#[must_use]
pub fn base_endpoint(template: &str) -> String {
  template
    .split('/')
    .filter(|segment| !segment.is_empty() && !segment.contains('{'))
    .collect::<Vec<_>>()
    .join("/")
}

/// Placeholder names in declaration order. Both `{id}` and `[id]` segments count.
#[must_use]
pub fn path_params(template: &str) -> Vec<String> {
  template
    .split('/')
    .filter_map(|segment| PLACEHOLDER_RE.captures(segment))
    .filter_map(|captures| captures.get(1).or_else(|| captures.get(2)))
    .map(|name| name.as_str().to_string())
    .collect()
}
