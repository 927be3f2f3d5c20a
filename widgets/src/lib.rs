pub mod block;
pub mod config;
pub mod error;
pub mod render;
pub mod widget;

pub use block::{Block, BlockState};
pub use config::BlockConfig;
pub use error::WidgetError;
pub use render::RenderPass;
pub use widget::Widget;
