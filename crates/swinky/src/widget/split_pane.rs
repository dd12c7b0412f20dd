//! Two widgets side by side.

use crate::types::{Axis, Constraint};
use crate::{Widget, WidgetKind};

widget_view! {
    /// Shows a leading and a trailing widget separated by a divider.
    SplitPane => SplitPane
}

impl SplitPane {
    pub fn new() -> Self {
        SplitPane(Widget::new(WidgetKind::SplitPane))
    }

    pub fn orientation(&self) -> Axis {
        match self.layout() {
            crate::types::Layout::Box(axis) => axis,
            _ => Axis::Horizontal,
        }
    }

    pub fn set_orientation(&self, axis: Axis) {
        self.set_layout(crate::types::Layout::Box(axis));
    }

    pub fn left(&self) -> Option<Widget> {
        self.child_at(&Constraint::Leading)
    }

    pub fn right(&self) -> Option<Widget> {
        self.child_at(&Constraint::Trailing)
    }

    pub fn set_left(&self, widget: Option<&Widget>) {
        self.set_side(Constraint::Leading, widget);
    }

    pub fn set_right(&self, widget: Option<&Widget>) {
        self.set_side(Constraint::Trailing, widget);
    }

    fn set_side(&self, side: Constraint, widget: Option<&Widget>) {
        if let Some(existing) = self.child_at(&side) {
            self.remove(&existing);
        }
        if let Some(widget) = widget {
            if let Err(err) = self.add_with(widget, side) {
                log::warn!("SplitPane: cannot place {}: {err}", widget.describe());
            }
        }
    }
}

impl Default for SplitPane {
    fn default() -> Self {
        SplitPane::new()
    }
}
