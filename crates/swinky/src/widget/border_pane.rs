//! A panel with five named regions.

use crate::types::Constraint;
use crate::{Widget, WidgetKind};

widget_view! {
    /// A panel laid out in `north`, `south`, `east`, `west` and `center`
    /// regions.
    ///
    /// Builders never add children to a border pane on their own; place them
    /// with the region setters instead:
    ///
    /// ```
    /// use swinky::builders::{border_pane, label, panel};
    /// use swinky::Panel;
    ///
    /// let root = Panel::new();
    /// let pane = border_pane(&root, |pane| {
    ///     pane.set_north(Some(&label(pane, |l| l.set_text("North"))));
    ///     pane.set_center(Some(&panel(pane, |_| {})));
    /// });
    ///
    /// assert_eq!(pane.child_count(), 2);
    /// assert!(pane.north().is_some());
    /// ```
    BorderPane => BorderPane
}

impl BorderPane {
    pub fn new() -> Self {
        BorderPane(Widget::new(WidgetKind::BorderPane))
    }

    /// Replaces whatever sits in `region` with `widget`; `None` clears it.
    pub fn set_region(&self, region: Constraint, widget: Option<&Widget>) {
        if let Some(existing) = self.child_at(&region) {
            self.remove(&existing);
        }
        if let Some(widget) = widget {
            if let Err(err) = self.add_with(widget, region) {
                log::warn!("BorderPane: cannot place {}: {err}", widget.describe());
            }
        }
    }

    pub fn north(&self) -> Option<Widget> {
        self.child_at(&Constraint::North)
    }

    pub fn south(&self) -> Option<Widget> {
        self.child_at(&Constraint::South)
    }

    pub fn east(&self) -> Option<Widget> {
        self.child_at(&Constraint::East)
    }

    pub fn west(&self) -> Option<Widget> {
        self.child_at(&Constraint::West)
    }

    pub fn center(&self) -> Option<Widget> {
        self.child_at(&Constraint::Center)
    }

    pub fn set_north(&self, widget: Option<&Widget>) {
        self.set_region(Constraint::North, widget);
    }

    pub fn set_south(&self, widget: Option<&Widget>) {
        self.set_region(Constraint::South, widget);
    }

    pub fn set_east(&self, widget: Option<&Widget>) {
        self.set_region(Constraint::East, widget);
    }

    pub fn set_west(&self, widget: Option<&Widget>) {
        self.set_region(Constraint::West, widget);
    }

    pub fn set_center(&self, widget: Option<&Widget>) {
        self.set_region(Constraint::Center, widget);
    }
}

impl Default for BorderPane {
    fn default() -> Self {
        BorderPane::new()
    }
}
