//! Provider list envelope.

use serde::{Deserialize, Serialize};

fn list_object() -> String {
    "list".to_string()
}

/// One page of a provider collection, in the order the provider returned it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemoteList<T> {
    #[serde(default = "list_object")]
    pub object: String,
    pub data: Vec<T>,
    /// Whether the provider holds more items beyond this page.
    #[serde(default)]
    pub has_more: bool,
    #[serde(default)]
    pub url: String,
}

impl<T> RemoteList<T> {
    pub fn new(data: Vec<T>, has_more: bool, url: impl Into<String>) -> Self {
        Self {
            object: list_object(),
            data,
            has_more,
            url: url.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn first(&self) -> Option<&T> {
        self.data.first()
    }

    pub fn last(&self) -> Option<&T> {
        self.data.last()
    }
}

impl<T> Default for RemoteList<T> {
    fn default() -> Self {
        Self::new(Vec::new(), false, "")
    }
}
