use indexmap::IndexSet;

use crate::generator::naming::constants::{DEFAULT_FILTER_WORDS, ENTITY_FALLBACK, ENTITY_SUFFIX};

/// Splits identifiers on case boundaries and derives entity names from them.
///
/// Filter words are matched exactly and case-sensitively against whole tokens, so the
/// default `Res` removes `Res` but leaves `Response` alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameTokenizer {
  filter_words: IndexSet<String>,
}

impl Default for NameTokenizer {
  fn default() -> Self {
    Self::new(DEFAULT_FILTER_WORDS)
  }
}

impl NameTokenizer {
  pub fn new<I, S>(filter_words: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    Self {
      filter_words: filter_words.into_iter().map(Into::into).collect(),
    }
  }

  #[must_use]
  pub fn filter_words(&self) -> &IndexSet<String> {
    &self.filter_words
  }

  /// Splits before every ASCII uppercase letter: `getUserDto` becomes `get`, `User`, `Dto`.
  #[must_use]
  pub fn tokenize(identifier: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    for ch in identifier.chars() {
      if ch.is_ascii_uppercase() && !current.is_empty() {
        tokens.push(std::mem::take(&mut current));
      }
      current.push(ch);
    }
    if !current.is_empty() {
      tokens.push(current);
    }
    tokens
  }

  /// Lower camel case entity name with filter words removed.
  ///
  /// No surviving token yields `entity`; a single survivor gains an `Entity` suffix so the
  /// result never collides with a bare primitive-looking word.
  #[must_use]
  pub fn to_entity_name(&self, identifier: &str) -> String {
    let mut words = Self::tokenize(identifier)
      .into_iter()
      .map(|token| token.trim().to_string())
      .filter(|token| !token.is_empty() && !self.filter_words.contains(token))
      .collect::<Vec<_>>();

    match words.len() {
      0 => return ENTITY_FALLBACK.to_string(),
      1 => words.push(ENTITY_SUFFIX.to_string()),
      _ => {}
    }

    words
      .iter()
      .enumerate()
      .map(|(index, word)| {
        if index == 0 {
          lowercase_first(word)
        } else {
          capitalize_first(word)
        }
      })
      .collect()
  }
}

#[must_use]
pub fn capitalize_first(text: &str) -> String {
  let mut chars = text.chars();
  match chars.next() {
    Some(first) => first.to_uppercase().chain(chars).collect(),
    None => String::new(),
  }
}

fn lowercase_first(text: &str) -> String {
  let mut chars = text.chars();
  match chars.next() {
    Some(first) => first.to_lowercase().chain(chars).collect(),
    None => String::new(),
  }
}

/// `user-profile-id` becomes `userProfileId`. The first chunk is kept verbatim.
#[must_use]
pub fn to_camel_case(text: &str) -> String {
  text
    .split('-')
    .enumerate()
    .map(|(index, chunk)| {
      if index == 0 {
        chunk.to_string()
      } else {
        capitalize_first(chunk)
      }
    })
    .collect()
}

/// `user-profile-id` becomes `UserProfileId`.
#[must_use]
pub fn to_pascal_case(text: &str) -> String {
  text.split('-').map(capitalize_first).collect()
}
