//! Scrollable viewport.

use crate::{Widget, WidgetKind};

widget_view! {
    /// Shows a single view widget. Adding a child replaces the current view.
    ScrollPane => ScrollPane
}

impl ScrollPane {
    pub fn new() -> Self {
        ScrollPane(Widget::new(WidgetKind::ScrollPane))
    }

    pub fn view(&self) -> Option<Widget> {
        self.child(0)
    }

    pub fn set_view(&self, view: Option<&Widget>) {
        match view {
            Some(view) => {
                if let Err(err) = self.add(view) {
                    log::warn!("ScrollPane: cannot show {}: {err}", view.describe());
                }
            }
            None => self.remove_all(),
        }
    }
}

impl Default for ScrollPane {
    fn default() -> Self {
        ScrollPane::new()
    }
}
