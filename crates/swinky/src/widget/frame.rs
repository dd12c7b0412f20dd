//! Top-level window.

use crate::types::Constraint;
use crate::{Widget, WidgetKind};

use super::panel::Panel;

widget_view! {
    /// A top-level window.
    ///
    /// A frame does not take children directly; content goes into its
    /// [`content_pane`](Frame::content_pane), which is created with the frame.
    Frame => Frame
}

impl Frame {
    pub fn new(title: impl Into<String>) -> Self {
        let frame = Frame(Widget::new(WidgetKind::Frame));
        frame.state_mut().text = Some(title.into());

        frame.attach_content();
        frame
    }

    pub fn title(&self) -> String {
        self.state().text.clone().unwrap_or_default()
    }

    pub fn set_title(&self, title: impl Into<String>) {
        self.state_mut().text = Some(title.into());
    }

    /// The panel that holds the frame's content.
    pub fn content_pane(&self) -> Panel {
        match self.child_at(&Constraint::Center) {
            Some(widget) if widget.kind() == WidgetKind::Panel => Panel(widget),
            _ => self.attach_content(),
        }
    }

    fn attach_content(&self) -> Panel {
        let content = Panel::new();
        if let Err(err) = self.add_with(&content, Constraint::Center) {
            log::warn!("{}: cannot add content pane: {err}", self.describe());
        }
        content
    }
}

impl Default for Frame {
    fn default() -> Self {
        Frame::new("")
    }
}
