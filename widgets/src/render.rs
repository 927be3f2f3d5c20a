use std::any::{TypeId, type_name};

use view::{Capturer, ViewContext};

use crate::error::WidgetError;
use crate::widget::Widget;

/// A widget that has been begun and is waiting for its end() call.
struct OpenWidget {
    type_id: TypeId,
    name: &'static str,
    widget: Box<dyn Widget>,
}

/// One render pass over a view.
///
/// Borrows the shared view context and the output capturer for the duration
/// of the pass, and tracks begun widgets so that end() calls pair up with
/// their begin() in LIFO order.
pub struct RenderPass<'a> {
    context: &'a mut ViewContext,
    capturer: &'a mut dyn Capturer,
    open: Vec<OpenWidget>,
}

impl<'a> RenderPass<'a> {
    pub fn new(context: &'a mut ViewContext, capturer: &'a mut dyn Capturer) -> Self {
        RenderPass {
            context,
            capturer,
            open: Vec::new(),
        }
    }

    pub fn context(&self) -> &ViewContext {
        &*self.context
    }

    pub fn context_mut(&mut self) -> &mut ViewContext {
        &mut *self.context
    }

    pub fn capturer(&mut self) -> &mut (dyn Capturer + 'a) {
        &mut *self.capturer
    }

    /// Number of widgets begun and not yet ended.
    pub fn depth(&self) -> usize {
        self.open.len()
    }

    /// Write rendered text at the current position of the pass.
    pub fn write(&mut self, text: &str) -> Result<(), WidgetError> {
        self.capturer.write(text)?;
        Ok(())
    }

    /// Open `widget`. Everything written until the matching [`end`](Self::end)
    /// belongs to it.
    pub fn begin<W: Widget + 'static>(&mut self, mut widget: W) -> Result<(), WidgetError> {
        widget.begin(self)?;
        tracing::debug!(widget = type_name::<W>(), depth = self.open.len() + 1, "widget begun");
        self.open.push(OpenWidget {
            type_id: TypeId::of::<W>(),
            name: type_name::<W>(),
            widget: Box::new(widget),
        });
        Ok(())
    }

    /// Close the innermost open widget, which must be a `W`, and return its
    /// rendered output. On a mismatch the innermost widget stays open.
    pub fn end<W: Widget + 'static>(&mut self) -> Result<String, WidgetError> {
        let open = self.open.pop().ok_or_else(|| WidgetError::UnexpectedEnd {
            widget: type_name::<W>().to_string(),
        })?;
        if open.type_id != TypeId::of::<W>() {
            let err = WidgetError::MismatchedEnd {
                expected: open.name.to_string(),
                found: type_name::<W>().to_string(),
            };
            self.open.push(open);
            return Err(err);
        }
        tracing::debug!(widget = open.name, depth = self.open.len(), "widget ended");
        let mut widget = open.widget;
        self.run_widget(widget.as_mut())
    }

    /// Render a widget that wraps no content.
    pub fn render<W: Widget>(&mut self, mut widget: W) -> Result<String, WidgetError> {
        self.run_widget(&mut widget)
    }

    /// Complete the pass, failing if any widget was left open. Open widgets
    /// are aborted innermost first so they release their capture levels.
    pub fn finish(mut self) -> Result<(), WidgetError> {
        if self.open.is_empty() {
            return Ok(());
        }
        let names: Vec<String> = self.open.iter().map(|w| w.name.to_string()).collect();
        tracing::warn!(widgets = ?names, "render pass finished with open widgets");
        while let Some(open) = self.open.pop() {
            let mut widget = open.widget;
            widget.abort(&mut self)?;
        }
        Err(WidgetError::UnclosedWidgets(names))
    }

    fn run_widget(&mut self, widget: &mut dyn Widget) -> Result<String, WidgetError> {
        if !widget.before_run() {
            return Ok(String::new());
        }
        let result = widget.run(self)?;
        Ok(widget.after_run(result))
    }
}
