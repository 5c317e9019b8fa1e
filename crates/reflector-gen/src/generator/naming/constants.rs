pub const DEFAULT_PROPERTY_NAME: &str = "filterWords";

/// Identifier words dropped by default when deriving entity names.
pub const DEFAULT_FILTER_WORDS: [&str; 5] = ["Get", "Res", "Default", "Dto", "Public"];

pub const ENTITY_FALLBACK: &str = "entity";
pub const ENTITY_SUFFIX: &str = "Entity";
pub const CONTROLLER_TOKEN: &str = "Controller";
pub const ENUM_PREFIX: &str = "ENUM";

pub(crate) const OPERATION_ID_SEPARATOR: char = '_';
pub(crate) const LIST_METHOD: &str = "list";
pub(crate) const LIST_ALL_METHOD: &str = "listAll";
