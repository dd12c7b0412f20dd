//! Ordered style registration and application over widget trees.
//!
//! ## Cascade
//!
//! There is no specificity: styles run in registration order, and a later
//! style sees (and may overwrite) what earlier styles did. [`Stylesheet::apply`]
//! walks the tree pre-order, parent before children, evaluating every style on
//! every widget exactly once per call.
//!
//! ## Revalidation
//!
//! Roots passed to `apply` are remembered weakly. After a widget changes (new
//! classes, a new child), [`Stylesheet::revalidate`] finds the nearest
//! remembered root above it and re-applies the whole sheet there.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use wcss::Selector;

use crate::error::Result;
use crate::style::{same_style, ChainableStyle, FnStyle, Style, StyleRef, StyleTarget};
use crate::{
    BorderPane, Button, ComboBox, Label, Panel, ScrollPane, SplitPane, TextField, WeakWidget,
    Widget,
};

/// An ordered list of styles.
///
/// ```
/// use swinky::builders::button;
/// use swinky::types::Color;
/// use swinky::{Panel, Stylesheet};
///
/// let mut sheet = Stylesheet::new();
/// sheet.button(".green", |b| b.set_foreground(Color::GREEN)).unwrap();
///
/// let root = Panel::new();
/// let ok = button(&root, |b| {
///     b.add_class("green");
/// });
/// let cancel = button(&root, |_| {});
///
/// sheet.apply(&root);
/// assert_eq!(ok.foreground(), Some(Color::GREEN));
/// assert_eq!(cancel.foreground(), None);
/// ```
#[derive(Default)]
pub struct Stylesheet {
    styles: Vec<StyleRef>,
    applied_roots: RefCell<Vec<WeakWidget>>,
}

impl Stylesheet {
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Registration
    // =========================================================================

    /// Appends `style`. It applies on the next `apply`.
    pub fn register(&mut self, style: StyleRef) -> StyleRef {
        log::debug!(
            "registered `{}` for {}",
            style.selector(),
            style.target_type().name()
        );
        self.styles.push(style.clone());
        style
    }

    pub fn register_style<S: Style + 'static>(&mut self, style: S) -> StyleRef {
        self.register(Rc::new(style))
    }

    /// Registers `mutation` for `T` widgets matching `selector`.
    pub fn register_fn<T: StyleTarget>(
        &mut self,
        selector: &str,
        mutation: impl Fn(&T) + 'static,
    ) -> Result<StyleRef> {
        let selector = Selector::parse(selector)?;
        Ok(self.register_style(FnStyle::<T>::new(selector, mutation)))
    }

    /// Registers `mutation` for every `T` widget.
    pub fn register_all<T: StyleTarget>(&mut self, mutation: impl Fn(&T) + 'static) -> StyleRef {
        self.register_style(FnStyle::<T>::new(Selector::glob(), mutation))
    }

    /// Scopes `child` to the subtree of widgets `parent` matches.
    ///
    /// A plain `parent` registered at top level is replaced in place by its
    /// chainable wrapper, so it keeps its position. `child` stops being a
    /// top-level style. The returned handle is `child`'s chainable form, so
    /// chaining onto it nests further down:
    ///
    /// ```
    /// use swinky::{Label, Panel, Stylesheet};
    ///
    /// let mut sheet = Stylesheet::new();
    /// let a = sheet.register_fn::<Panel>(".a", |_| {}).unwrap();
    /// let b = sheet.register_fn::<Panel>(".b", |_| {}).unwrap();
    /// let c = sheet.register_fn::<Label>(".c", |_| {}).unwrap();
    ///
    /// let b = sheet.chain(&a, &b);
    /// sheet.chain(&b, &c);
    /// assert_eq!(sheet.len(), 1);
    /// ```
    pub fn chain(&mut self, parent: &StyleRef, child: &StyleRef) -> StyleRef {
        if same_style(parent, child) {
            log::warn!("cannot chain `{}` below itself", child.selector());
            return child.clone();
        }

        // Nothing is removed from `styles` until the chain is known to be valid.
        let child_chain = child
            .clone()
            .into_chainable()
            .or_else(|| self.find_wrapper(child));
        let parent_chain = parent
            .clone()
            .into_chainable()
            .or_else(|| self.find_wrapper(parent));
        if let Some(parent_chain) = &parent_chain {
            let cycle = parent_chain.wraps(child)
                || child_chain.as_ref().is_some_and(|child_chain| {
                    Rc::ptr_eq(child_chain, parent_chain) || child_chain.reaches(parent_chain)
                });
            if cycle {
                log::warn!(
                    "refusing to chain `{}` below `{}`: cycle",
                    child.selector(),
                    parent.selector()
                );
                return child_chain.map_or_else(|| child.clone(), |chain| chain as StyleRef);
            }
        }

        let child = match (self.take_top_level(child), child_chain) {
            (Some(top), _) => top,
            (None, Some(nested)) => {
                // A style lives under one parent; chaining it again moves it.
                self.detach(&nested);
                nested as StyleRef
            }
            (None, None) => child.clone(),
        };
        self.chainable_for(parent).add(child)
    }

    /// Unhooks `chain` from whichever chainable style holds it.
    fn detach(&self, chain: &ChainableStyle) -> bool {
        self.styles
            .iter()
            .filter_map(|top| top.clone().into_chainable())
            .any(|top| top.detach(chain))
    }

    /// Removes `style` (or its top-level wrapper) from the top-level list and
    /// returns what was removed.
    fn take_top_level(&mut self, style: &StyleRef) -> Option<StyleRef> {
        let index = self
            .styles
            .iter()
            .position(|s| same_style(s, style) || wraps(s, style))?;
        Some(self.styles.remove(index))
    }

    /// The chainable to hang children of `parent` on, creating and
    /// registering a wrapper if needed.
    fn chainable_for(&mut self, parent: &StyleRef) -> Rc<ChainableStyle> {
        if let Some(chain) = parent.clone().into_chainable() {
            return chain;
        }
        if let Some(chain) = self.find_wrapper(parent) {
            return chain;
        }

        let chain = Rc::new(ChainableStyle::wrap(parent.clone()));
        match self.styles.iter().position(|s| same_style(s, parent)) {
            Some(index) => self.styles[index] = chain.clone() as StyleRef,
            None => {
                log::debug!("`{}` was not registered; appending", parent.selector());
                self.styles.push(chain.clone());
            }
        }
        chain
    }

    fn find_wrapper(&self, style: &StyleRef) -> Option<Rc<ChainableStyle>> {
        for top in &self.styles {
            if let Some(chain) = top.clone().into_chainable() {
                if chain.wraps(style) {
                    return Some(chain);
                }
                if let Some(found) = chain.find_wrapper(style) {
                    return Some(found);
                }
            }
        }
        None
    }

    // =========================================================================
    // Application
    // =========================================================================

    /// Applies every style to `root` and its descendants and remembers `root`
    /// for [`revalidate`](Self::revalidate).
    pub fn apply(&self, root: &Widget) {
        self.record_root(root);
        log::debug!("applying {} styles to {}", self.styles.len(), root.describe());
        self.cascade(root);
    }

    /// Like [`apply`](Self::apply) without remembering `root`. Used for the
    /// child stylesheets of a chainable style.
    pub(crate) fn apply_scoped(&self, root: &Widget) {
        self.cascade(root);
    }

    fn cascade(&self, widget: &Widget) {
        for style in &self.styles {
            if style.target_type().accepts(widget) && style.selector().matches(widget) {
                log::trace!("`{}` -> {}", style.selector(), widget.describe());
                style.apply(widget);
            }
        }
        // Snapshot: mutations may add or remove children.
        for child in widget.children() {
            self.cascade(&child);
        }
    }

    /// Re-applies the sheet at the nearest applied root at or above `widget`.
    /// Returns false, doing nothing, if there is none.
    pub fn revalidate(&self, widget: &Widget) -> bool {
        let root = {
            let mut roots = self.applied_roots.borrow_mut();
            roots.retain(WeakWidget::is_alive);
            std::iter::once(widget.clone())
                .chain(widget.ancestors())
                .find(|candidate| roots.iter().any(|root| root.points_to(candidate)))
        };
        match root {
            Some(root) => {
                log::debug!("revalidating {} at {}", widget.describe(), root.describe());
                self.apply(&root);
                true
            }
            None => {
                log::debug!("revalidate: {} is not under an applied root", widget.describe());
                false
            }
        }
    }

    /// Stops remembering `root`. Returns whether it was remembered.
    pub fn forget(&self, root: &Widget) -> bool {
        let mut roots = self.applied_roots.borrow_mut();
        let before = roots.len();
        roots.retain(|r| r.is_alive() && !r.points_to(root));
        before != roots.len()
    }

    /// The remembered roots that are still alive.
    pub fn applied_roots(&self) -> Vec<Widget> {
        self.applied_roots
            .borrow()
            .iter()
            .filter_map(WeakWidget::upgrade)
            .collect()
    }

    fn record_root(&self, root: &Widget) {
        let mut roots = self.applied_roots.borrow_mut();
        roots.retain(WeakWidget::is_alive);
        if !roots.iter().any(|r| r.points_to(root)) {
            roots.push(root.downgrade());
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn styles(&self) -> &[StyleRef] {
        &self.styles
    }

    pub fn len(&self) -> usize {
        self.styles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }
}

fn wraps(style: &StyleRef, inner: &StyleRef) -> bool {
    style
        .clone()
        .into_chainable()
        .is_some_and(|chain| chain.wraps(inner))
}

impl fmt::Debug for Stylesheet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stylesheet")
            .field(
                "styles",
                &self
                    .styles
                    .iter()
                    .map(|s| format!("{} {}", s.target_type().name(), s.selector()))
                    .collect::<Vec<_>>(),
            )
            .field("applied_roots", &self.applied_roots.borrow().len())
            .finish()
    }
}

stylesheet_shorthands! {
    button => Button;
    label => Label;
    panel => Panel;
    text_field => TextField;
    combo_box => ComboBox;
    border_pane => BorderPane;
    split_pane => SplitPane;
    scroll_pane => ScrollPane;
}
