use std::collections::BTreeMap;

use crate::error::ViewError;

/// State shared by every view rendered within one response.
///
/// Holds the named block store: fragments rendered by one view and read back
/// by another (typically a layout). Outlives individual render passes.
#[derive(Debug, Default, Clone)]
pub struct ViewContext {
    blocks: BTreeMap<String, String>,
}

impl ViewContext {
    pub fn new() -> Self {
        ViewContext::default()
    }

    /// Store `content` under `id`, replacing any previous content.
    pub fn set_block(&mut self, id: impl Into<String>, content: impl Into<String>) {
        let id = id.into();
        let content = content.into();
        tracing::debug!(block = %id, bytes = content.len(), "block stored");
        self.blocks.insert(id, content);
    }

    pub fn get_block(&self, id: &str) -> Result<&str, ViewError> {
        self.blocks
            .get(id)
            .map(|s| s.as_str())
            .ok_or_else(|| ViewError::UnknownBlock(id.to_string()))
    }

    pub fn has_block(&self, id: &str) -> bool {
        self.blocks.contains_key(id)
    }

    pub fn remove_block(&mut self, id: &str) -> Option<String> {
        self.blocks.remove(id)
    }

    /// All stored blocks in key order.
    pub fn blocks(&self) -> impl Iterator<Item = (&str, &str)> {
        self.blocks.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}
