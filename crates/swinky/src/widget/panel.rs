//! Generic container.

use crate::types::Layout;
use crate::{Widget, WidgetKind};

widget_view! {
    /// A plain container. Styles targeting `Panel` also reach border panes.
    Panel => Panel, accepts [BorderPane]
}

impl Panel {
    pub fn new() -> Self {
        Panel(Widget::new(WidgetKind::Panel))
    }

    pub fn with_layout(layout: Layout) -> Self {
        let panel = Panel::new();
        panel.set_layout(layout);
        panel
    }
}

impl Default for Panel {
    fn default() -> Self {
        Panel::new()
    }
}
