//! Builder functions: one per widget type.
//!
//! Every builder takes the parent container and an `init` closure:
//!
//! 1. the widget is created by the parent's factory for the type, if one is
//!    registered on the parent or an ancestor, or by the type's default;
//! 2. the parent is recorded as the widget's pending container and `init`
//!    runs on it (set text, classes, build children). Builders nested in
//!    `init` find factories through that pending container;
//! 3. if the parent [auto-adds](crate::Widget::is_auto_add_enabled), the
//!    widget is appended to it. Otherwise it stays pending and the caller
//!    places it with [`Widget::at`](crate::Widget::at).
//!
//! ```
//! use swinky::builders::{button, label, panel};
//!
//! let root = swinky::Panel::new();
//! panel(&root, |row| {
//!     label(row, |l| l.set_text("Name"));
//!     button(row, |b| b.set_text("Save"));
//! });
//!
//! assert_eq!(root.child_count(), 1);
//! assert_eq!(root.child(0).unwrap().child_count(), 2);
//! ```

use crate::style::StyleTarget;
use crate::{
    BorderPane, Button, ComboBox, Label, Panel, ScrollPane, SplitPane, TextField, Widget,
};

/// A view type builders can create.
pub trait Buildable: StyleTarget + Clone {
    fn build_default() -> Self;

    fn as_widget(&self) -> &Widget;
}

/// Creates a `T` inside `parent`, runs `init` on it, then attaches it or
/// marks it pending.
pub fn build<T: Buildable>(parent: &Widget, init: impl FnOnce(&T)) -> T {
    let view = parent.create::<T>();
    let widget = view.as_widget();
    widget.set_pending_container(parent);
    init(&view);

    if parent.is_auto_add_enabled() {
        if let Err(err) = parent.add(widget) {
            log::warn!(
                "{}: cannot add {}: {err}",
                parent.describe(),
                widget.describe()
            );
        }
    } else {
        log::trace!(
            "{} is pending in {}",
            widget.describe(),
            parent.describe()
        );
    }
    view
}

builder_fns! {
    panel => Panel;
    button => Button;
    label => Label;
    text_field => TextField;
    combo_box => ComboBox;
    split_pane => SplitPane;
    scroll_pane => ScrollPane;
    /// Builds a [`BorderPane`]. Its children are not added automatically;
    /// place them with the region setters or [`Widget::at`].
    border_pane => BorderPane;
}
