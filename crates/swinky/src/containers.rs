//! Container policy: layouts, the auto-add rule, per-container widget
//! factories and the pending-container protocol used by [`Widget::at`].
//!
//! Builders ask the parent two questions:
//!
//! - **Which instance?** [`Widget::create`] looks for a factory registered for
//!   the view type on the parent or one of its ancestors, falling back to the
//!   view's default.
//! - **Attach now?** [`Widget::is_auto_add_enabled`] is false for containers
//!   whose children need a placement constraint. Widgets built there are
//!   remembered as pending and placed later with [`Widget::at`].

use std::any::TypeId;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use crate::builders::Buildable;
use crate::error::{Result, SwinkyError};
use crate::types::{Constraint, Layout};
use crate::{Widget, WidgetKind};

type Factory = Rc<dyn Fn() -> Widget>;

/// Factories keyed by the view type they produce.
#[derive(Default)]
pub(crate) struct FactoryRegistry {
    factories: HashMap<TypeId, Factory>,
}

impl FactoryRegistry {
    fn get(&self, key: TypeId) -> Option<Factory> {
        self.factories.get(&key).cloned()
    }
}

impl fmt::Debug for FactoryRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FactoryRegistry")
            .field("len", &self.factories.len())
            .finish()
    }
}

impl Widget {
    pub fn layout(&self) -> Layout {
        self.state().layout
    }

    /// Sets the layout. Has no effect on widgets that cannot hold children.
    pub fn set_layout(&self, layout: Layout) {
        if self.is_container() {
            self.state_mut().layout = layout;
        }
    }

    /// Whether builders attach new children to this widget on their own.
    ///
    /// ```
    /// use swinky::types::Layout;
    /// use swinky::{BorderPane, Panel, SplitPane};
    ///
    /// assert!(Panel::new().is_auto_add_enabled());
    /// assert!(!Panel::with_layout(Layout::GridBag).is_auto_add_enabled());
    /// assert!(!BorderPane::new().is_auto_add_enabled());
    /// assert!(!SplitPane::new().is_auto_add_enabled());
    /// ```
    pub fn is_auto_add_enabled(&self) -> bool {
        if !self.is_container() {
            return false;
        }
        match self.kind() {
            WidgetKind::SplitPane | WidgetKind::Frame => false,
            _ => !self.layout().requires_constraints(),
        }
    }

    // =========================================================================
    // Factories
    // =========================================================================

    /// Makes builders inside this container (and its descendants) create `T`
    /// through `factory`.
    pub fn set_factory<T: Buildable>(&self, factory: impl Fn() -> T + 'static) {
        let factory: Factory = Rc::new(move || factory().as_widget().clone());
        self.state_mut()
            .factories
            .factories
            .insert(TypeId::of::<T>(), factory);
        log::debug!(
            "{}: factory registered for {}",
            self.describe(),
            T::TYPE_NAME
        );
    }

    /// Removes the factory for `T` registered on this container. Factories
    /// on ancestors are unaffected.
    pub fn remove_factory<T: Buildable>(&self) -> bool {
        self.state_mut()
            .factories
            .factories
            .remove(&TypeId::of::<T>())
            .is_some()
    }

    /// The factory for `T` on this widget or the nearest ancestor that has
    /// one. A widget still being built has no parent yet; the search then
    /// continues through the container it is being built in.
    pub fn factory_for<T: Buildable>(&self) -> Option<Rc<dyn Fn() -> Widget>> {
        let key = TypeId::of::<T>();
        let mut seen: Vec<Widget> = Vec::new();
        let mut next = Some(self.clone());
        while let Some(widget) = next {
            if seen.iter().any(|w| w.ptr_eq(&widget)) {
                log::warn!("{}: container loop in factory lookup", widget.describe());
                return None;
            }
            if let Some(factory) = widget.state().factories.get(key) {
                return Some(factory);
            }
            next = widget.parent().or_else(|| widget.pending_container());
            seen.push(widget);
        }
        None
    }

    /// A fresh `T` for a builder running inside this container.
    pub fn create<T: Buildable>(&self) -> T {
        if let Some(factory) = self.factory_for::<T>() {
            let widget = factory();
            match T::cast(&widget) {
                Some(view) => return view,
                None => log::warn!(
                    "factory for {} produced {}; using the default",
                    T::TYPE_NAME,
                    widget.describe()
                ),
            }
        }
        T::build_default()
    }

    // =========================================================================
    // Pending placement
    // =========================================================================

    pub(crate) fn set_pending_container(&self, container: &Widget) {
        self.state_mut().pending_container = Rc::downgrade(&container.0);
    }

    /// The container this widget was built in but not yet added to.
    pub fn pending_container(&self) -> Option<Widget> {
        self.state().pending_container.upgrade().map(Widget)
    }

    /// Adds this widget to its pending container with `constraint`.
    ///
    /// ```
    /// use swinky::builders::{border_pane, label};
    /// use swinky::types::Constraint;
    /// use swinky::Panel;
    ///
    /// let root = Panel::new();
    /// let pane = border_pane(&root, |_| {});
    /// let title = label(&pane, |l| l.set_text("Title"));
    /// assert_eq!(pane.child_count(), 0);
    ///
    /// title.at(Constraint::North).unwrap();
    /// assert!(pane.north().unwrap().ptr_eq(&title));
    /// ```
    pub fn at(&self, constraint: Constraint) -> Result<()> {
        let container = self
            .pending_container()
            .ok_or(SwinkyError::NoPendingContainer {
                kind: self.type_name(),
            })?;
        if let Some(existing) = container.child_at(&constraint) {
            if !existing.ptr_eq(self) {
                container.remove(&existing);
            }
        }
        container.add_with(self, constraint)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Button, Label, Panel};

    #[test]
    fn auto_add_follows_layout() {
        let panel = Panel::new();
        assert!(panel.is_auto_add_enabled());
        panel.set_layout(Layout::Card);
        assert!(!panel.is_auto_add_enabled());
        panel.set_layout(Layout::Grid { rows: 2, columns: 1 });
        assert!(panel.is_auto_add_enabled());
    }

    #[test]
    fn leaves_never_auto_add() {
        let button = Button::new("x");
        button.set_layout(Layout::Flow);
        assert!(!button.is_auto_add_enabled());
        assert_eq!(button.layout(), Layout::Flow);
    }

    #[test]
    fn factory_lookup_walks_up() {
        let outer = Panel::new();
        let inner = Panel::new();
        outer.add(&inner).unwrap();
        outer.set_factory(|| Label::new("from outer"));

        assert_eq!(inner.create::<Label>().text(), "from outer");

        inner.set_factory(|| Label::new("from inner"));
        assert_eq!(inner.create::<Label>().text(), "from inner");
        assert_eq!(outer.create::<Label>().text(), "from outer");

        assert!(inner.remove_factory::<Label>());
        assert!(!inner.remove_factory::<Label>());
        assert_eq!(inner.create::<Label>().text(), "from outer");
    }

    #[test]
    fn factory_lookup_follows_pending_container() {
        let outer = Panel::new();
        outer.set_factory(|| Label::new("from outer"));
        let building = Panel::new();
        building.set_pending_container(&outer);

        assert_eq!(building.create::<Label>().text(), "from outer");
    }

    #[test]
    fn factories_are_per_type() {
        let panel = Panel::new();
        panel.set_factory(|| Label::new("custom"));
        assert!(panel.factory_for::<Button>().is_none());
        assert_eq!(panel.create::<Button>().text(), "");
    }

    #[test]
    fn at_without_pending_container_fails() {
        let label = Label::new("x");
        assert!(matches!(
            label.at(Constraint::North),
            Err(SwinkyError::NoPendingContainer { kind: "Label" })
        ));
    }
}
