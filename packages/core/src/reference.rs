//! References to other backend documents.

use serde::{Deserialize, Serialize};

/// A reference that the backend may or may not have populated.
///
/// Populated references arrive as the full document; unpopulated ones as the
/// bare document id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Populated<T> {
    Doc(T),
    Id(String),
}

impl<T> Populated<T> {
    /// Get the populated document, if any.
    pub fn doc(&self) -> Option<&T> {
        match self {
            Populated::Doc(doc) => Some(doc),
            Populated::Id(_) => None,
        }
    }
}
