//! Static text.

use crate::{Widget, WidgetKind};

widget_view! {
    /// A single line of static text.
    Label => Label
}

impl Label {
    pub fn new(text: impl Into<String>) -> Self {
        let label = Label(Widget::new(WidgetKind::Label));
        label.set_text(text);
        label
    }

    pub fn text(&self) -> String {
        self.state().text.clone().unwrap_or_default()
    }

    pub fn set_text(&self, text: impl Into<String>) {
        self.state_mut().text = Some(text.into());
    }
}

impl Default for Label {
    fn default() -> Self {
        Label::new("")
    }
}
