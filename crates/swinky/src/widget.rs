pub mod border_pane;
pub mod button;
pub mod combo_box;
pub mod frame;
pub mod label;
pub mod panel;
pub mod scroll_pane;
pub mod split_pane;
pub mod text_field;

use std::cell::{Ref, RefCell, RefMut};
use std::fmt;
use std::rc::{Rc, Weak};

use bitflags::bitflags;
use smallvec::SmallVec;
use wcss::Element;

use crate::containers::FactoryRegistry;
use crate::error::{Result, SwinkyError};
use crate::mouse::MouseListeners;
use crate::types::{Border, Color, Constraint, Font, Layout};

bitflags! {
    /// What a widget kind can do beyond the basics every widget has.
    ///
    /// ```
    /// use swinky::{Capabilities, WidgetKind};
    ///
    /// assert!(WidgetKind::Panel.capabilities().contains(Capabilities::CONTAINER));
    /// assert!(!WidgetKind::Component.capabilities().contains(Capabilities::CLASS_LIST));
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Capabilities: u8 {
        /// Carries a class list, so class selectors can match it.
        const CLASS_LIST = 0b0000_0001;
        /// Holds an ordered list of child widgets.
        const CONTAINER  = 0b0000_0010;
    }
}

/// The closed set of widget variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WidgetKind {
    /// A bare widget: no class list, no children.
    Component,
    /// A top-level window. Owns a content pane.
    Frame,
    Panel,
    /// A panel with a border layout and named regions.
    BorderPane,
    /// A container showing a single view.
    ScrollPane,
    /// A container with a leading and a trailing side.
    SplitPane,
    Button,
    Label,
    TextField,
    ComboBox,
}

impl WidgetKind {
    pub fn type_name(&self) -> &'static str {
        match self {
            WidgetKind::Component => "Component",
            WidgetKind::Frame => "Frame",
            WidgetKind::Panel => "Panel",
            WidgetKind::BorderPane => "BorderPane",
            WidgetKind::ScrollPane => "ScrollPane",
            WidgetKind::SplitPane => "SplitPane",
            WidgetKind::Button => "Button",
            WidgetKind::Label => "Label",
            WidgetKind::TextField => "TextField",
            WidgetKind::ComboBox => "ComboBox",
        }
    }

    pub fn capabilities(&self) -> Capabilities {
        match self {
            WidgetKind::Component => Capabilities::empty(),
            WidgetKind::Frame => Capabilities::CONTAINER,
            WidgetKind::Panel
            | WidgetKind::BorderPane
            | WidgetKind::ScrollPane
            | WidgetKind::SplitPane => Capabilities::CLASS_LIST | Capabilities::CONTAINER,
            WidgetKind::Button | WidgetKind::Label | WidgetKind::TextField | WidgetKind::ComboBox => {
                Capabilities::CLASS_LIST
            }
        }
    }

    fn default_layout(&self) -> Layout {
        match self {
            WidgetKind::Frame | WidgetKind::BorderPane => Layout::Border,
            _ => Layout::Flow,
        }
    }
}

pub type ClassList = SmallVec<[String; 4]>;

/// Mutable per-node state. Always borrowed briefly and never across user
/// callbacks.
pub(crate) struct NodeState {
    pub(crate) name: Option<String>,
    pub(crate) parent: Weak<Node>,
    pub(crate) children: Vec<Widget>,
    pub(crate) constraint: Option<Constraint>,
    pub(crate) classes: ClassList,
    pub(crate) layout: Layout,

    pub(crate) foreground: Option<Color>,
    pub(crate) background: Option<Color>,
    pub(crate) font: Font,
    pub(crate) border: Option<Border>,
    pub(crate) visible: bool,
    pub(crate) enabled: bool,
    pub(crate) tooltip: Option<String>,

    // Kind-specific data, exposed through the typed views.
    pub(crate) text: Option<String>,
    pub(crate) columns: u16,
    pub(crate) items: Vec<String>,
    pub(crate) selected: Option<usize>,
    pub(crate) actions: Vec<Rc<dyn Fn(&Widget)>>,

    /// Container a builder created this widget in without adding it.
    pub(crate) pending_container: Weak<Node>,
    pub(crate) factories: FactoryRegistry,
    pub(crate) mouse: MouseListeners,
}

impl NodeState {
    fn new(kind: WidgetKind) -> Self {
        Self {
            name: None,
            parent: Weak::new(),
            children: Vec::new(),
            constraint: None,
            classes: ClassList::new(),
            layout: kind.default_layout(),
            foreground: None,
            background: None,
            font: Font::default(),
            border: None,
            visible: true,
            enabled: true,
            tooltip: None,
            text: None,
            columns: 0,
            items: Vec::new(),
            selected: None,
            actions: Vec::new(),
            pending_container: Weak::new(),
            factories: FactoryRegistry::default(),
            mouse: MouseListeners::default(),
        }
    }
}

pub(crate) struct Node {
    kind: WidgetKind,
    state: RefCell<NodeState>,
}

/// A shared handle to a node of the widget tree.
///
/// Cloning the handle is cheap and yields another reference to the *same*
/// widget; use [`Widget::ptr_eq`] for identity. Parents own their children,
/// children only hold weak back-references, so dropping every handle to a
/// detached subtree frees it.
#[derive(Clone)]
pub struct Widget(pub(crate) Rc<Node>);

/// A non-owning reference to a [`Widget`].
#[derive(Clone, Default)]
pub struct WeakWidget(Weak<Node>);

impl WeakWidget {
    pub fn upgrade(&self) -> Option<Widget> {
        self.0.upgrade().map(Widget)
    }

    pub fn is_alive(&self) -> bool {
        self.0.strong_count() > 0
    }

    pub fn points_to(&self, widget: &Widget) -> bool {
        std::ptr::eq(self.0.as_ptr(), Rc::as_ptr(&widget.0))
    }
}

impl fmt::Debug for WeakWidget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.upgrade() {
            Some(widget) => write!(f, "WeakWidget({widget:?})"),
            None => f.write_str("WeakWidget(<dropped>)"),
        }
    }
}

impl Widget {
    pub fn new(kind: WidgetKind) -> Self {
        Widget(Rc::new(Node {
            kind,
            state: RefCell::new(NodeState::new(kind)),
        }))
    }

    pub(crate) fn state(&self) -> Ref<'_, NodeState> {
        self.0.state.borrow()
    }

    pub(crate) fn state_mut(&self) -> RefMut<'_, NodeState> {
        self.0.state.borrow_mut()
    }

    // =========================================================================
    // Identity
    // =========================================================================

    pub fn kind(&self) -> WidgetKind {
        self.0.kind
    }

    pub fn type_name(&self) -> &'static str {
        self.0.kind.type_name()
    }

    pub fn capabilities(&self) -> Capabilities {
        self.0.kind.capabilities()
    }

    pub fn is_container(&self) -> bool {
        self.capabilities().contains(Capabilities::CONTAINER)
    }

    pub fn supports_class_list(&self) -> bool {
        self.capabilities().contains(Capabilities::CLASS_LIST)
    }

    /// True if both handles refer to the same widget.
    pub fn ptr_eq(&self, other: &Widget) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    pub fn downgrade(&self) -> WeakWidget {
        WeakWidget(Rc::downgrade(&self.0))
    }

    /// The stable name selectors match `#id` clauses against.
    pub fn name(&self) -> Option<String> {
        self.state().name.clone()
    }

    pub fn set_name(&self, name: impl Into<String>) {
        self.state_mut().name = Some(name.into());
    }

    pub fn clear_name(&self) {
        self.state_mut().name = None;
    }

    pub fn with_name(self, name: impl Into<String>) -> Self {
        self.set_name(name);
        self
    }

    // =========================================================================
    // Tree structure
    // =========================================================================

    pub fn parent(&self) -> Option<Widget> {
        self.state().parent.upgrade().map(Widget)
    }

    /// Iterates strictly upward: parent, grandparent, and so on to the root.
    pub fn ancestors(&self) -> Ancestors {
        Ancestors {
            next: self.parent(),
        }
    }

    /// True if `self` sits somewhere below `other`.
    pub fn is_descendant_of(&self, other: &Widget) -> bool {
        self.ancestors().any(|ancestor| ancestor.ptr_eq(other))
    }

    /// A snapshot of the children, in order.
    pub fn children(&self) -> Vec<Widget> {
        self.state().children.clone()
    }

    pub fn child_count(&self) -> usize {
        self.state().children.len()
    }

    pub fn child(&self, index: usize) -> Option<Widget> {
        self.state().children.get(index).cloned()
    }

    /// The child placed with `constraint`, if any.
    pub fn child_at(&self, constraint: &Constraint) -> Option<Widget> {
        self.state()
            .children
            .iter()
            .find(|child| child.state().constraint.as_ref() == Some(constraint))
            .cloned()
    }

    /// The constraint this widget was added to its parent with.
    pub fn constraint(&self) -> Option<Constraint> {
        self.state().constraint.clone()
    }

    /// All widgets below this one, in pre-order.
    pub fn descendants(&self) -> Vec<Widget> {
        let mut out = Vec::new();
        let mut stack: Vec<Widget> = self.children().into_iter().rev().collect();
        while let Some(widget) = stack.pop() {
            stack.extend(widget.children().into_iter().rev());
            out.push(widget);
        }
        out
    }

    /// Appends `child`. Fails if this widget cannot hold children, if the
    /// layout needs a placement constraint, or if `child` is an ancestor of
    /// (or the same as) this widget.
    pub fn add(&self, child: &Widget) -> Result<()> {
        let layout = self.layout();
        if self.is_container() && layout.requires_constraints() {
            return Err(SwinkyError::ConstraintRequired {
                kind: self.type_name(),
                layout,
            });
        }
        self.insert_child(child, None)
    }

    /// Adds `child` with a placement constraint.
    pub fn add_with(&self, child: &Widget, constraint: Constraint) -> Result<()> {
        self.insert_child(child, Some(constraint))
    }

    pub(crate) fn insert_child(&self, child: &Widget, constraint: Option<Constraint>) -> Result<()> {
        if !self.is_container() {
            return Err(SwinkyError::NotAContainer {
                kind: self.type_name(),
            });
        }
        if child.ptr_eq(self) || self.is_descendant_of(child) {
            return Err(SwinkyError::WouldCreateCycle {
                parent: self.describe(),
                child: child.describe(),
            });
        }

        child.detach();
        if self.kind() == WidgetKind::ScrollPane {
            // A scroll pane shows exactly one view.
            self.remove_all();
        }

        {
            let mut state = child.state_mut();
            state.parent = Rc::downgrade(&self.0);
            state.constraint = constraint;
            state.pending_container = Weak::new();
        }
        self.state_mut().children.push(child.clone());
        log::trace!("added {} to {}", child.describe(), self.describe());
        Ok(())
    }

    /// Removes `child` if it is a direct child. Returns whether it was.
    pub fn remove(&self, child: &Widget) -> bool {
        let removed = {
            let mut state = self.state_mut();
            let before = state.children.len();
            state.children.retain(|c| !c.ptr_eq(child));
            before != state.children.len()
        };
        if removed {
            let mut state = child.state_mut();
            state.parent = Weak::new();
            state.constraint = None;
        }
        removed
    }

    pub fn remove_all(&self) {
        let children = std::mem::take(&mut self.state_mut().children);
        for child in children {
            let mut state = child.state_mut();
            state.parent = Weak::new();
            state.constraint = None;
        }
    }

    /// Removes this widget from its parent, if it has one.
    pub fn detach(&self) -> bool {
        match self.parent() {
            Some(parent) => parent.remove(self),
            None => false,
        }
    }

    // =========================================================================
    // Class list
    // =========================================================================

    /// The class list. Empty for widgets without the capability.
    pub fn classes(&self) -> Vec<String> {
        self.state().classes.to_vec()
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.supports_class_list() && self.state().classes.iter().any(|c| c == class)
    }

    /// Adds `class`; returns false if it was already present, empty, or the
    /// widget has no class list.
    pub fn add_class(&self, class: &str) -> bool {
        let class = class.trim();
        if class.is_empty() || !self.supports_class_list() || self.has_class(class) {
            return false;
        }
        self.state_mut().classes.push(class.to_string());
        true
    }

    pub fn remove_class(&self, class: &str) -> bool {
        let mut state = self.state_mut();
        let before = state.classes.len();
        state.classes.retain(|c| c != class);
        before != state.classes.len()
    }

    /// Flips `class` and returns whether it is now present.
    pub fn toggle_class(&self, class: &str) -> bool {
        if self.remove_class(class) {
            false
        } else {
            self.add_class(class)
        }
    }

    /// Replaces the class list from a whitespace separated string.
    pub fn set_classes(&self, classes: &str) {
        self.state_mut().classes.clear();
        for class in classes.split_whitespace() {
            self.add_class(class);
        }
    }

    pub fn with_classes(self, classes: &str) -> Self {
        self.set_classes(classes);
        self
    }

    // =========================================================================
    // Display properties
    // =========================================================================

    pub fn foreground(&self) -> Option<Color> {
        self.state().foreground
    }

    pub fn set_foreground(&self, color: Color) {
        self.state_mut().foreground = Some(color);
    }

    pub fn background(&self) -> Option<Color> {
        self.state().background
    }

    pub fn set_background(&self, color: Color) {
        self.state_mut().background = Some(color);
    }

    pub fn font(&self) -> Font {
        self.state().font.clone()
    }

    pub fn set_font(&self, font: Font) {
        self.state_mut().font = font;
    }

    /// Shorthand for `set_font(font().derive_size(size))`.
    pub fn set_font_size(&self, size: f32) {
        let mut state = self.state_mut();
        state.font = state.font.derive_size(size);
    }

    pub fn border(&self) -> Option<Border> {
        self.state().border
    }

    pub fn set_border(&self, border: Border) {
        self.state_mut().border = Some(border);
    }

    pub fn clear_border(&self) {
        self.state_mut().border = None;
    }

    pub fn is_visible(&self) -> bool {
        self.state().visible
    }

    pub fn set_visible(&self, visible: bool) {
        self.state_mut().visible = visible;
    }

    pub fn is_enabled(&self) -> bool {
        self.state().enabled
    }

    pub fn set_enabled(&self, enabled: bool) {
        self.state_mut().enabled = enabled;
    }

    pub fn tooltip(&self) -> Option<String> {
        self.state().tooltip.clone()
    }

    pub fn set_tooltip(&self, tooltip: impl Into<String>) {
        self.state_mut().tooltip = Some(tooltip.into());
    }

    // =========================================================================
    // Debugging
    // =========================================================================

    /// `Type#name.class.class`, the way a selector would address it.
    pub fn describe(&self) -> String {
        let state = self.state();
        let mut out = self.type_name().to_string();
        if let Some(name) = &state.name {
            out.push('#');
            out.push_str(name);
        }
        for class in &state.classes {
            out.push('.');
            out.push_str(class);
        }
        out
    }

    /// An indented outline of this subtree, one widget per line.
    pub fn dump(&self) -> String {
        let mut out = String::new();
        self.dump_into(&mut out, 0);
        out
    }

    fn dump_into(&self, out: &mut String, depth: usize) {
        use std::fmt::Write;

        for _ in 0..depth {
            out.push_str("  ");
        }
        out.push_str(&self.describe());
        {
            let state = self.state();
            if let Some(constraint) = &state.constraint {
                let _ = write!(out, " @{constraint}");
            }
            if let Some(text) = &state.text {
                let _ = write!(out, " {text:?}");
            }
            if let Some(color) = state.foreground {
                let _ = write!(out, " fg={color}");
            }
            if let Some(color) = state.background {
                let _ = write!(out, " bg={color}");
            }
            if state.font.size != Font::DEFAULT_SIZE {
                let _ = write!(out, " size={}", state.font.size);
            }
            if !state.visible {
                out.push_str(" hidden");
            }
        }
        out.push('\n');
        for child in self.children() {
            child.dump_into(out, depth + 1);
        }
    }
}

impl fmt::Debug for Widget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Widget({})", self.describe())
    }
}

impl Element for Widget {
    fn has_name(&self, name: &str) -> bool {
        self.state().name.as_deref() == Some(name)
    }

    fn supports_class_list(&self) -> bool {
        Widget::supports_class_list(self)
    }

    fn has_class(&self, class: &str) -> bool {
        Widget::has_class(self, class)
    }

    fn parent_element(&self) -> Option<Self> {
        self.parent()
    }
}

/// Iterator returned by [`Widget::ancestors`].
#[derive(Debug)]
pub struct Ancestors {
    next: Option<Widget>,
}

impl Iterator for Ancestors {
    type Item = Widget;

    fn next(&mut self) -> Option<Widget> {
        let current = self.next.take()?;
        self.next = current.parent();
        Some(current)
    }
}
