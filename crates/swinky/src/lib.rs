//! # Swinky
//!
//! A builder DSL over a retained widget tree, with CSS-like stylesheets.
//!
//! - [`builders`]: one function per widget type that creates, initializes and
//!   attaches a widget to its parent.
//! - [`Stylesheet`]: styles made of a selector (see [`wcss`]), a target widget
//!   type and a mutation, applied top-down in registration order.
//! - [`ChainableStyle`]: styles scoped to the subtrees other styles matched.
//! - [`UiDispatcher`]: queues work onto the thread that owns the tree.
//!
//! ```
//! use swinky::builders::{button, label, panel};
//! use swinky::types::Color;
//! use swinky::{Panel, Stylesheet};
//!
//! let root = Panel::new();
//! panel(&root, |p| {
//!     p.add_class("super-panel");
//!     label(p, |l| l.set_text("Hello"));
//!     button(p, |b| {
//!         b.set_text("Go");
//!         b.add_class("green");
//!     });
//! });
//!
//! let mut sheet = Stylesheet::new();
//! sheet.button(".green", |b| b.set_foreground(Color::GREEN)).unwrap();
//! sheet.label(".super-panel > *", |l| l.set_font_size(20.0)).unwrap();
//! sheet.apply(&root);
//!
//! let row = root.child(0).unwrap();
//! assert_eq!(row.child(0).unwrap().font().size, 20.0);
//! assert_eq!(row.child(1).unwrap().foreground(), Some(Color::GREEN));
//! ```

#[macro_use]
mod macros;

pub mod builders;
pub mod containers;
pub mod dispatch;
pub mod error;
mod log_init;
pub mod mouse;
pub mod style;
pub mod stylesheet;
pub mod types;
pub mod widget;

pub use dispatch::{UiDispatcher, UiHandle};
pub use error::{Result, SwinkyError};
pub use log_init::init_logger;
pub use mouse::{MouseEvent, MouseEventKind};
pub use style::{ChainableStyle, FnStyle, Style, StyleRef, StyleTarget, TargetType};
pub use stylesheet::Stylesheet;
pub use widget::border_pane::BorderPane;
pub use widget::button::Button;
pub use widget::combo_box::ComboBox;
pub use widget::frame::Frame;
pub use widget::label::Label;
pub use widget::panel::Panel;
pub use widget::scroll_pane::ScrollPane;
pub use widget::split_pane::SplitPane;
pub use widget::text_field::TextField;
pub use widget::{Ancestors, Capabilities, ClassList, WeakWidget, Widget, WidgetKind};

// Re-export the log crate so users can use swinky::log::info!, etc.
pub use log;
pub use wcss;
