//! Single-line text input.

use crate::{Widget, WidgetKind};

widget_view! {
    /// An editable single-line text field.
    TextField => TextField
}

impl TextField {
    pub fn new() -> Self {
        TextField(Widget::new(WidgetKind::TextField))
    }

    pub fn text(&self) -> String {
        self.state().text.clone().unwrap_or_default()
    }

    pub fn set_text(&self, text: impl Into<String>) {
        self.state_mut().text = Some(text.into());
    }

    /// Preferred width in characters. Zero means "size to content".
    pub fn columns(&self) -> u16 {
        self.state().columns
    }

    pub fn set_columns(&self, columns: u16) {
        self.state_mut().columns = columns;
    }
}

impl Default for TextField {
    fn default() -> Self {
        TextField::new()
    }
}
