use std::path::Path;

use serde::Deserialize;

use crate::block::Block;
use crate::error::WidgetError;

/// Declarative block configuration, as found in TOML view settings:
///
/// ```toml
/// id = "sidebar"
/// render_in_place = false
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BlockConfig {
    #[serde(default)]
    pub id: Option<String>,

    /// Emit the captured content in place instead of storing it.
    #[serde(default)]
    pub render_in_place: bool,
}

impl BlockConfig {
    pub fn from_toml_str(source: &str) -> Result<Self, WidgetError> {
        toml::from_str(source).map_err(|e| WidgetError::Config(format!("TOML parse error: {}", e)))
    }

    pub fn load(path: &Path) -> Result<Self, WidgetError> {
        let source = std::fs::read_to_string(path).map_err(|e| {
            WidgetError::Config(format!("cannot read '{}': {}", path.display(), e))
        })?;
        Self::from_toml_str(&source)
    }

    pub fn build(&self) -> Block {
        let block = match &self.id {
            Some(id) => Block::new().id(id.as_str()),
            None => Block::new(),
        };
        if self.render_in_place {
            block.render_in_place()
        } else {
            block
        }
    }
}

impl From<BlockConfig> for Block {
    fn from(config: BlockConfig) -> Self {
        config.build()
    }
}
