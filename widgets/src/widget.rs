use std::fmt;

use crate::error::WidgetError;
use crate::render::RenderPass;

/// A reusable piece of view logic with a begin/end lifecycle.
///
/// Widgets are either rendered directly with [`RenderPass::render`], or
/// opened with [`RenderPass::begin`] and closed with [`RenderPass::end`] so
/// that they can wrap the output written in between.
pub trait Widget: fmt::Debug {
    /// Called when the widget is opened, before it is pushed on the pass's
    /// widget stack.
    fn begin(&mut self, _pass: &mut RenderPass<'_>) -> Result<(), WidgetError> {
        Ok(())
    }

    /// Returning false skips `run` and renders nothing.
    fn before_run(&mut self) -> bool {
        true
    }

    /// Produce the widget's rendered output.
    fn run(&mut self, pass: &mut RenderPass<'_>) -> Result<String, WidgetError>;

    fn after_run(&mut self, result: String) -> String {
        result
    }

    /// Called instead of `run` when the pass finishes with this widget still
    /// open. Releases whatever `begin` acquired.
    fn abort(&mut self, _pass: &mut RenderPass<'_>) -> Result<(), WidgetError> {
        Ok(())
    }
}
