use crate::error::WidgetError;
use crate::render::RenderPass;
use crate::widget::Widget;

/// Where a block is in its begin/end lifecycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BlockState {
    #[default]
    Idle,
    Capturing,
}

/// Records all output written between begin and end, and stores it as a
/// named block in the view context.
///
/// A layout defines the default content of a block:
///
/// ```
/// use view::{OutputBuffer, ViewContext};
/// use widgets::{Block, RenderPass};
///
/// let mut ctx = ViewContext::new();
/// let mut out = OutputBuffer::new(Vec::new());
/// let mut pass = RenderPass::new(&mut ctx, &mut out);
///
/// pass.begin(Block::new().id("my-block")).unwrap();
/// pass.write("Umm... hello?").unwrap();
/// assert_eq!(pass.end::<Block>().unwrap(), "");
/// pass.finish().unwrap();
///
/// assert_eq!(ctx.get_block("my-block").unwrap(), "Umm... hello?");
/// ```
///
/// Other views then read it back with [`view::ViewContext::get_block`].
///
/// Configuration methods never modify the receiver; each returns a new,
/// independently configured block.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Block {
    id: Option<String>,
    render_in_place: bool,
    state: BlockState,
}

impl Block {
    pub fn new() -> Self {
        Block::default()
    }

    /// Returns a copy with the block id set to `value`.
    pub fn id(&self, value: impl Into<String>) -> Self {
        Block {
            id: Some(value.into()),
            ..self.clone()
        }
    }

    /// Returns a copy that emits its captured content where it ends instead
    /// of storing it.
    pub fn render_in_place(&self) -> Self {
        Block {
            render_in_place: true,
            ..self.clone()
        }
    }

    pub fn identifier(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn renders_in_place(&self) -> bool {
        self.render_in_place
    }

    pub fn state(&self) -> BlockState {
        self.state
    }
}

impl Widget for Block {
    fn begin(&mut self, pass: &mut RenderPass<'_>) -> Result<(), WidgetError> {
        pass.capturer().start_capture();
        self.state = BlockState::Capturing;
        Ok(())
    }

    fn run(&mut self, pass: &mut RenderPass<'_>) -> Result<String, WidgetError> {
        if self.state != BlockState::Capturing {
            return Err(WidgetError::NotBegun {
                widget: "Block".to_string(),
            });
        }
        self.state = BlockState::Idle;

        // Checked before the in-place branch: in-place blocks need an id too.
        let Some(id) = self.id.as_deref() else {
            pass.capturer().discard_capture()?;
            tracing::warn!("block ended without an id, captured output discarded");
            return Err(WidgetError::MissingIdentifier);
        };

        let content = pass.capturer().stop_capture_and_retrieve()?;

        if self.render_in_place {
            return Ok(content);
        }

        if !content.is_empty() {
            pass.context_mut().set_block(id, content);
        }

        Ok(String::new())
    }

    fn abort(&mut self, pass: &mut RenderPass<'_>) -> Result<(), WidgetError> {
        if self.state == BlockState::Capturing {
            self.state = BlockState::Idle;
            pass.capturer().discard_capture()?;
        }
        Ok(())
    }
}
