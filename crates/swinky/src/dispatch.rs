//! Running work on the UI thread.
//!
//! Widgets are `!Send`; everything that touches them happens on the thread
//! that owns the tree. [`UiDispatcher`] is created on that thread and hands
//! out [`UiHandle`]s that other threads (or async tasks) use to queue
//! closures for it. A handle used on the UI thread itself runs the closure
//! immediately.
//!
//! ```
//! use std::sync::atomic::{AtomicUsize, Ordering};
//! use std::sync::Arc;
//! use swinky::UiDispatcher;
//!
//! let mut dispatcher = UiDispatcher::new();
//! let handle = dispatcher.handle();
//! let hits = Arc::new(AtomicUsize::new(0));
//!
//! let worker = {
//!     let hits = hits.clone();
//!     std::thread::spawn(move || {
//!         handle.dispatch(move || {
//!             hits.fetch_add(1, Ordering::SeqCst);
//!         })
//!     })
//! };
//! worker.join().unwrap().unwrap();
//!
//! assert_eq!(hits.load(Ordering::SeqCst), 0);
//! assert_eq!(dispatcher.run_pending(), 1);
//! assert_eq!(hits.load(Ordering::SeqCst), 1);
//! ```

use std::thread::{self, ThreadId};

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::error::{Result, SwinkyError};

type Job = Box<dyn FnOnce() + Send>;

/// The receiving end, owned by the UI thread.
pub struct UiDispatcher {
    thread: ThreadId,
    sender: UnboundedSender<Job>,
    receiver: UnboundedReceiver<Job>,
}

/// A cloneable, `Send` handle for queueing work on the UI thread.
#[derive(Clone)]
pub struct UiHandle {
    thread: ThreadId,
    sender: UnboundedSender<Job>,
}

impl UiDispatcher {
    /// Binds a dispatcher to the current thread.
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();
        Self {
            thread: thread::current().id(),
            sender,
            receiver,
        }
    }

    pub fn handle(&self) -> UiHandle {
        UiHandle {
            thread: self.thread,
            sender: self.sender.clone(),
        }
    }

    pub fn is_ui_thread(&self) -> bool {
        thread::current().id() == self.thread
    }

    /// Runs every job queued so far, in order, and returns how many ran.
    /// Jobs queued by those jobs run in the same call.
    pub fn run_pending(&mut self) -> usize {
        let mut ran = 0;
        while let Ok(job) = self.receiver.try_recv() {
            job();
            ran += 1;
        }
        if ran > 0 {
            log::trace!("ran {ran} queued UI jobs");
        }
        ran
    }

    /// Runs jobs as they arrive until every [`UiHandle`] has been dropped.
    /// Returns how many ran.
    pub async fn run(self) -> usize {
        let Self {
            sender,
            mut receiver,
            ..
        } = self;
        drop(sender);

        let mut ran = 0;
        while let Some(job) = receiver.recv().await {
            job();
            ran += 1;
        }
        log::debug!("UI dispatcher stopped after {ran} jobs");
        ran
    }
}

impl Default for UiDispatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for UiDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UiDispatcher")
            .field("thread", &self.thread)
            .finish_non_exhaustive()
    }
}

impl UiHandle {
    pub fn is_ui_thread(&self) -> bool {
        thread::current().id() == self.thread
    }

    /// Runs `job` now if called on the UI thread, otherwise queues it.
    pub fn dispatch(&self, job: impl FnOnce() + Send + 'static) -> Result<()> {
        if self.is_ui_thread() {
            job();
            return Ok(());
        }
        self.sender
            .send(Box::new(job))
            .map_err(|_| SwinkyError::DispatcherClosed)
    }

    /// Always queues `job`, even on the UI thread.
    pub fn dispatch_later(&self, job: impl FnOnce() + Send + 'static) -> Result<()> {
        self.sender
            .send(Box::new(job))
            .map_err(|_| SwinkyError::DispatcherClosed)
    }
}

impl std::fmt::Debug for UiHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UiHandle")
            .field("thread", &self.thread)
            .finish_non_exhaustive()
    }
}
