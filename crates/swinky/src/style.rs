//! Styles: a selector, a target widget type and a mutation.
//!
//! A [`Style`] applies to a widget when its [`TargetType`] accepts the widget
//! and its selector matches. Most styles are [`FnStyle`]s registered through
//! [`Stylesheet`](crate::Stylesheet) helpers. A [`ChainableStyle`] also
//! carries child stylesheets that are applied to the subtree of every widget
//! the style matched, which is how scoped rules ("labels inside panels that
//! matched `.card`") are expressed.

use std::cell::RefCell;
use std::fmt;
use std::marker::PhantomData;
use std::rc::Rc;

use wcss::Selector;

use crate::stylesheet::Stylesheet;
use crate::Widget;

/// Shared handle to a registered style.
pub type StyleRef = Rc<dyn Style>;

pub trait Style {
    fn selector(&self) -> &Selector;

    fn target_type(&self) -> TargetType;

    /// Runs the mutation. Callers have already checked the target type and
    /// the selector.
    fn apply(&self, widget: &Widget);

    /// This style as a [`ChainableStyle`], if it is one.
    fn into_chainable(self: Rc<Self>) -> Option<Rc<ChainableStyle>> {
        None
    }
}

/// True if both handles point at the same style object.
pub(crate) fn same_style(a: &StyleRef, b: &StyleRef) -> bool {
    std::ptr::addr_eq(Rc::as_ptr(a), Rc::as_ptr(b))
}

/// A typed view over [`Widget`] that styles can target.
///
/// Implemented by every view type (through `widget_view!`) and by [`Widget`]
/// itself, which accepts everything.
pub trait StyleTarget: Sized + 'static {
    const TYPE_NAME: &'static str;

    fn accepts(widget: &Widget) -> bool;

    fn cast(widget: &Widget) -> Option<Self>;
}

impl StyleTarget for Widget {
    const TYPE_NAME: &'static str = "Component";

    fn accepts(_widget: &Widget) -> bool {
        true
    }

    fn cast(widget: &Widget) -> Option<Self> {
        Some(widget.clone())
    }
}

/// Runtime descriptor of a [`StyleTarget`].
#[derive(Clone, Copy)]
pub struct TargetType {
    name: &'static str,
    accepts: fn(&Widget) -> bool,
}

impl TargetType {
    pub fn of<T: StyleTarget>() -> Self {
        Self {
            name: T::TYPE_NAME,
            accepts: T::accepts,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn accepts(&self, widget: &Widget) -> bool {
        (self.accepts)(widget)
    }
}

impl PartialEq for TargetType {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for TargetType {}

impl fmt::Debug for TargetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TargetType({})", self.name)
    }
}

/// A style whose mutation is a closure over the typed view `T`.
pub struct FnStyle<T: StyleTarget> {
    selector: Selector,
    mutation: Box<dyn Fn(&T)>,
    _target: PhantomData<fn(&T)>,
}

impl<T: StyleTarget> FnStyle<T> {
    pub fn new(selector: Selector, mutation: impl Fn(&T) + 'static) -> Self {
        Self {
            selector,
            mutation: Box::new(mutation),
            _target: PhantomData,
        }
    }
}

impl<T: StyleTarget> Style for FnStyle<T> {
    fn selector(&self) -> &Selector {
        &self.selector
    }

    fn target_type(&self) -> TargetType {
        TargetType::of::<T>()
    }

    fn apply(&self, widget: &Widget) {
        match T::cast(widget) {
            Some(view) => (self.mutation)(&view),
            None => log::trace!("{} is not a {}", widget.describe(), T::TYPE_NAME),
        }
    }
}

impl<T: StyleTarget> fmt::Debug for FnStyle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnStyle")
            .field("selector", &self.selector.to_string())
            .field("target", &T::TYPE_NAME)
            .finish()
    }
}

/// A style with child stylesheets scoped to the widgets it matches.
///
/// Applying it to a widget runs the wrapped style (if any), then applies each
/// child stylesheet to the widget and everything below it. Child stylesheets
/// hold exactly one style each and never record applied roots.
///
/// ```
/// use std::rc::Rc;
/// use swinky::{ChainableStyle, FnStyle, Label, Panel, Stylesheet};
/// use swinky::types::Color;
/// use swinky::wcss::Selector;
///
/// let cards = Rc::new(ChainableStyle::scope(Selector::parse(".card").unwrap()));
/// cards.add(Rc::new(FnStyle::<Label>::new(Selector::glob(), |l| {
///     l.set_foreground(Color::RED)
/// })));
///
/// let mut sheet = Stylesheet::new();
/// sheet.register(cards);
///
/// let root = Panel::new();
/// let card = Panel::new().with_classes("card");
/// let inside = Label::new("in");
/// let outside = Label::new("out");
/// card.add(&inside).unwrap();
/// root.add(&card).unwrap();
/// root.add(&outside).unwrap();
///
/// sheet.apply(&root);
/// assert_eq!(inside.foreground(), Some(Color::RED));
/// assert_eq!(outside.foreground(), None);
/// ```
pub struct ChainableStyle {
    selector: Selector,
    target: TargetType,
    wrapped: Option<StyleRef>,
    children: RefCell<Vec<Rc<Stylesheet>>>,
}

impl ChainableStyle {
    /// Wraps `style`, taking over its selector and target type.
    pub fn wrap(style: StyleRef) -> Self {
        Self {
            selector: style.selector().clone(),
            target: style.target_type(),
            wrapped: Some(style),
            children: RefCell::new(Vec::new()),
        }
    }

    /// A chainable style with no mutation of its own. It only scopes its
    /// children to widgets matching `selector`.
    pub fn scope(selector: Selector) -> Self {
        Self {
            selector,
            target: TargetType::of::<Widget>(),
            wrapped: None,
            children: RefCell::new(Vec::new()),
        }
    }

    pub fn wrapped(&self) -> Option<&StyleRef> {
        self.wrapped.as_ref()
    }

    /// True if this style wraps exactly `style`.
    pub fn wraps(&self, style: &StyleRef) -> bool {
        self.wrapped
            .as_ref()
            .is_some_and(|wrapped| same_style(wrapped, style))
    }

    /// The styles of the child stylesheets, in order.
    pub fn children(&self) -> Vec<StyleRef> {
        self.children
            .borrow()
            .iter()
            .flat_map(|sheet| sheet.styles().to_vec())
            .collect()
    }

    /// Appends `child` in a stylesheet of its own and returns its chainable
    /// form, so a further `add` nests below `child` rather than next to it.
    ///
    /// Adding a style that already contains this one is refused with a
    /// warning; the chain would never terminate.
    pub fn add(&self, child: StyleRef) -> Rc<ChainableStyle> {
        let child = Self::chainable(child);
        if std::ptr::eq(Rc::as_ptr(&child), self) || child.reaches(self) {
            log::warn!(
                "refusing to chain `{}` below `{}`: cycle",
                child.selector,
                self.selector
            );
            return child;
        }

        let mut sheet = Stylesheet::new();
        sheet.register(child.clone());
        self.children.borrow_mut().push(Rc::new(sheet));
        log::debug!("chained `{}` below `{}`", child.selector, self.selector);
        child
    }

    /// The chainable form of `style`: itself if it already is one, otherwise
    /// a new wrapper.
    pub fn chainable(style: StyleRef) -> Rc<ChainableStyle> {
        match style.clone().into_chainable() {
            Some(chainable) => chainable,
            None => Rc::new(ChainableStyle::wrap(style)),
        }
    }

    /// Finds the chainable wrapping `style` anywhere below this one.
    pub(crate) fn find_wrapper(&self, style: &StyleRef) -> Option<Rc<ChainableStyle>> {
        for child in self.child_chainables() {
            if child.wraps(style) {
                return Some(child);
            }
            if let Some(found) = child.find_wrapper(style) {
                return Some(found);
            }
        }
        None
    }

    fn child_chainables(&self) -> Vec<Rc<ChainableStyle>> {
        self.children()
            .into_iter()
            .filter_map(|style| style.into_chainable())
            .collect()
    }

    /// Removes the child stylesheet holding `target`, searching the whole
    /// chain below this style.
    pub(crate) fn detach(&self, target: &ChainableStyle) -> bool {
        let ptr: *const ChainableStyle = target;
        let index = self.children.borrow().iter().position(|sheet| {
            sheet
                .styles()
                .iter()
                .any(|style| std::ptr::addr_eq(Rc::as_ptr(style), ptr))
        });
        if let Some(index) = index {
            self.children.borrow_mut().remove(index);
            return true;
        }
        self.child_chainables()
            .iter()
            .any(|child| child.detach(target))
    }

    pub(crate) fn reaches(&self, target: &ChainableStyle) -> bool {
        self.child_chainables()
            .iter()
            .any(|child| std::ptr::eq(Rc::as_ptr(child), target) || child.reaches(target))
    }
}

impl Style for ChainableStyle {
    fn selector(&self) -> &Selector {
        &self.selector
    }

    fn target_type(&self) -> TargetType {
        self.target
    }

    fn apply(&self, widget: &Widget) {
        if let Some(wrapped) = &self.wrapped {
            wrapped.apply(widget);
        }
        // Snapshot so the wrapped mutation may extend the chain.
        let children = self.children.borrow().clone();
        for sheet in children {
            sheet.apply_scoped(widget);
        }
    }

    fn into_chainable(self: Rc<Self>) -> Option<Rc<ChainableStyle>> {
        Some(self)
    }
}

impl fmt::Debug for ChainableStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChainableStyle")
            .field("selector", &self.selector.to_string())
            .field("target", &self.target)
            .field("wrapped", &self.wrapped.is_some())
            .field("children", &self.children.borrow().len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Button, Label, Panel, WidgetKind};

    fn noop<T: StyleTarget>(selector: &str) -> StyleRef {
        Rc::new(FnStyle::<T>::new(Selector::parse(selector).unwrap(), |_| {}))
    }

    #[test]
    fn target_types() {
        let button = Widget::new(WidgetKind::Button);
        let pane = Widget::new(WidgetKind::BorderPane);

        assert!(TargetType::of::<Button>().accepts(&button));
        assert!(!TargetType::of::<Label>().accepts(&button));
        assert!(TargetType::of::<Panel>().accepts(&pane));
        assert!(TargetType::of::<Widget>().accepts(&pane));
        assert_eq!(TargetType::of::<Widget>().name(), "Component");
    }

    #[test]
    fn wrap_keeps_selector_and_target() {
        let inner = noop::<Label>(".title");
        let chain = ChainableStyle::wrap(inner.clone());
        assert_eq!(chain.selector().to_string(), ".title");
        assert_eq!(chain.target_type(), TargetType::of::<Label>());
        assert!(chain.wraps(&inner));
    }

    #[test]
    fn chainable_reuses_existing_wrapper() {
        let chain: StyleRef = Rc::new(ChainableStyle::wrap(noop::<Label>("*")));
        let again = ChainableStyle::chainable(chain.clone());
        assert!(same_style(&chain, &(again as StyleRef)));
    }

    #[test]
    fn add_returns_the_registered_child() {
        let parent = ChainableStyle::wrap(noop::<Panel>(".a"));
        let child = noop::<Label>(".b");
        let handle = parent.add(child.clone());

        assert!(handle.wraps(&child));
        let children = parent.children();
        assert_eq!(children.len(), 1);
        assert!(same_style(&children[0], &(handle as StyleRef)));
    }

    #[test]
    fn add_refuses_cycles() {
        let a = Rc::new(ChainableStyle::wrap(noop::<Panel>(".a")));
        let b = a.add(noop::<Panel>(".b"));
        b.add(a.clone());
        a.add(a.clone());

        assert!(b.children().is_empty());
        assert_eq!(a.children().len(), 1);
    }
}
