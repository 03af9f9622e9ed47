use serde::{Deserialize, Serialize};

const MAX_ID_LEN: usize = 128;

/// Reference to another CMS document by id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DocumentRef {
    #[serde(rename = "_ref")]
    pub id: String,
}

impl DocumentRef {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }

    pub fn is_well_formed(&self) -> bool {
        is_well_formed_id(&self.id)
    }
}

/// Document ids are 1 to 128 characters of `[A-Za-z0-9._-]` and never start
/// with a dash. Draft ids (`drafts.<id>`) satisfy the same rule.
pub fn is_well_formed_id(id: &str) -> bool {
    !id.is_empty()
        && id.len() <= MAX_ID_LEN
        && !id.starts_with('-')
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'))
}
