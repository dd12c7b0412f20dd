//! Mouse listener bookkeeping.
//!
//! Listeners are stored per widget and per [`MouseEventKind`]. A listener may
//! be registered under a key; registering again under the same key replaces
//! the previous listener instead of stacking a second one, which lets
//! stylesheet mutations that run on every apply install hover effects safely.
//!
//! Events are delivered only to the widget they are fired on. Hit testing and
//! propagation are left to the host.

use std::fmt;
use std::rc::Rc;

use crate::Widget;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MouseEventKind {
    Entered,
    Exited,
    Pressed,
    Released,
    Clicked,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MouseEvent {
    pub kind: MouseEventKind,
    pub x: i32,
    pub y: i32,
    pub click_count: u32,
}

impl MouseEvent {
    pub fn new(kind: MouseEventKind) -> Self {
        Self {
            kind,
            x: 0,
            y: 0,
            click_count: 0,
        }
    }

    pub fn at(kind: MouseEventKind, x: i32, y: i32) -> Self {
        Self {
            x,
            y,
            ..Self::new(kind)
        }
    }

    pub fn clicked(click_count: u32) -> Self {
        Self {
            click_count,
            ..Self::new(MouseEventKind::Clicked)
        }
    }
}

type Handler = Rc<dyn Fn(&MouseEvent)>;

struct Entry {
    kind: MouseEventKind,
    key: Option<String>,
    handler: Handler,
}

#[derive(Default)]
pub(crate) struct MouseListeners {
    entries: Vec<Entry>,
}

impl MouseListeners {
    fn remove(&mut self, kind: MouseEventKind, key: &str) -> bool {
        let before = self.entries.len();
        self.entries
            .retain(|entry| !(entry.kind == kind && entry.key.as_deref() == Some(key)));
        before != self.entries.len()
    }

    fn handlers(&self, kind: MouseEventKind) -> Vec<Handler> {
        self.entries
            .iter()
            .filter(|entry| entry.kind == kind)
            .map(|entry| entry.handler.clone())
            .collect()
    }
}

impl fmt::Debug for MouseListeners {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.entries.iter().map(|entry| (entry.kind, &entry.key)))
            .finish()
    }
}

impl Widget {
    /// Appends an anonymous listener for `kind`.
    pub fn on_mouse(&self, kind: MouseEventKind, handler: impl Fn(&MouseEvent) + 'static) {
        self.state_mut().mouse.entries.push(Entry {
            kind,
            key: None,
            handler: Rc::new(handler),
        });
    }

    /// Registers a listener for `kind` under `key`, replacing any listener
    /// already registered for the same kind and key. The new listener runs
    /// after the remaining ones.
    pub fn on_mouse_keyed(
        &self,
        kind: MouseEventKind,
        key: impl Into<String>,
        handler: impl Fn(&MouseEvent) + 'static,
    ) {
        let key = key.into();
        let mut state = self.state_mut();
        if state.mouse.remove(kind, &key) {
            log::trace!("replacing {kind:?} listener `{key}`");
        }
        state.mouse.entries.push(Entry {
            kind,
            key: Some(key),
            handler: Rc::new(handler),
        });
    }

    pub fn on_mouse_clicked(&self, handler: impl Fn(&MouseEvent) + 'static) {
        self.on_mouse(MouseEventKind::Clicked, handler);
    }

    pub fn on_mouse_pressed(&self, handler: impl Fn(&MouseEvent) + 'static) {
        self.on_mouse(MouseEventKind::Pressed, handler);
    }

    pub fn on_mouse_released(&self, handler: impl Fn(&MouseEvent) + 'static) {
        self.on_mouse(MouseEventKind::Released, handler);
    }

    pub fn on_mouse_entered(&self, handler: impl Fn(&MouseEvent) + 'static) {
        self.on_mouse(MouseEventKind::Entered, handler);
    }

    pub fn on_mouse_exited(&self, handler: impl Fn(&MouseEvent) + 'static) {
        self.on_mouse(MouseEventKind::Exited, handler);
    }

    pub fn remove_mouse_listener(&self, kind: MouseEventKind, key: &str) -> bool {
        self.state_mut().mouse.remove(kind, key)
    }

    pub fn mouse_listener_count(&self, kind: MouseEventKind) -> usize {
        self.state()
            .mouse
            .entries
            .iter()
            .filter(|entry| entry.kind == kind)
            .count()
    }

    /// Delivers `event` to this widget's listeners for `event.kind`, in
    /// registration order. Returns how many ran.
    pub fn fire_mouse(&self, event: &MouseEvent) -> usize {
        // Snapshot so handlers may add or remove listeners.
        let handlers = self.state().mouse.handlers(event.kind);
        for handler in &handlers {
            handler(event);
        }
        handlers.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::WidgetKind;
    use std::cell::RefCell;

    #[test]
    fn keyed_listener_replaces_and_moves_to_end() {
        let label = Widget::new(WidgetKind::Label);
        let log = Rc::new(RefCell::new(Vec::new()));

        for tag in ["hover-1", "plain", "hover-2"] {
            let log = log.clone();
            let handler = move |_: &MouseEvent| log.borrow_mut().push(tag);
            if tag == "plain" {
                label.on_mouse(MouseEventKind::Entered, handler);
            } else {
                label.on_mouse_keyed(MouseEventKind::Entered, "hover", handler);
            }
        }

        assert_eq!(label.mouse_listener_count(MouseEventKind::Entered), 2);
        assert_eq!(label.fire_mouse(&MouseEvent::new(MouseEventKind::Entered)), 2);
        assert_eq!(*log.borrow(), ["plain", "hover-2"]);
    }

    #[test]
    fn kinds_are_independent() {
        let label = Widget::new(WidgetKind::Label);
        label.on_mouse_keyed(MouseEventKind::Entered, "k", |_| {});
        label.on_mouse_keyed(MouseEventKind::Exited, "k", |_| {});

        assert!(label.remove_mouse_listener(MouseEventKind::Entered, "k"));
        assert!(!label.remove_mouse_listener(MouseEventKind::Entered, "k"));
        assert_eq!(label.mouse_listener_count(MouseEventKind::Exited), 1);
        assert_eq!(label.fire_mouse(&MouseEvent::clicked(1)), 0);
    }
}
