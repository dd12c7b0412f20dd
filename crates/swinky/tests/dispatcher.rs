//! Integration tests for the UI dispatcher.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use swinky::{SwinkyError, UiDispatcher};

#[tokio::test]
async fn run_drains_jobs_from_other_threads_in_order() {
    let dispatcher = UiDispatcher::new();
    let handle = dispatcher.handle();
    let seen = Arc::new(Mutex::new(Vec::new()));

    let worker = {
        let seen = seen.clone();
        std::thread::spawn(move || {
            for i in 0..5 {
                let seen = seen.clone();
                handle
                    .dispatch(move || seen.lock().unwrap().push(i))
                    .unwrap();
            }
            assert!(!handle.is_ui_thread());
            // Dropping the last handle lets `run` finish.
        })
    };

    let ran = dispatcher.run().await;
    worker.join().unwrap();

    assert_eq!(ran, 5);
    assert_eq!(*seen.lock().unwrap(), [0, 1, 2, 3, 4]);
}

#[tokio::test]
async fn async_tasks_can_queue_work() {
    let mut dispatcher = UiDispatcher::new();
    let handle = dispatcher.handle();
    let seen = Arc::new(Mutex::new(None));

    let task = {
        let seen = seen.clone();
        tokio::task::spawn_blocking(move || {
            std::thread::sleep(Duration::from_millis(5));
            handle.dispatch(move || *seen.lock().unwrap() = Some("done"))
        })
    };
    task.await.unwrap().unwrap();

    assert_eq!(*seen.lock().unwrap(), None);
    assert_eq!(dispatcher.run_pending(), 1);
    assert_eq!(*seen.lock().unwrap(), Some("done"));
}

#[test]
fn jobs_may_queue_more_jobs() {
    let mut dispatcher = UiDispatcher::new();
    let handle = dispatcher.handle();
    let seen = Arc::new(Mutex::new(Vec::new()));

    let inner_handle = handle.clone();
    let outer_seen = seen.clone();
    handle
        .dispatch_later(move || {
            outer_seen.lock().unwrap().push("outer");
            let inner_seen = outer_seen.clone();
            inner_handle
                .dispatch_later(move || inner_seen.lock().unwrap().push("inner"))
                .unwrap();
        })
        .unwrap();

    assert_eq!(dispatcher.run_pending(), 2);
    assert_eq!(*seen.lock().unwrap(), ["outer", "inner"]);
}

#[test]
fn handles_fail_after_shutdown() {
    let dispatcher = UiDispatcher::new();
    let handle = dispatcher.handle();
    drop(dispatcher);

    let result = std::thread::spawn(move || handle.dispatch(|| {}))
        .join()
        .unwrap();
    assert!(matches!(result, Err(SwinkyError::DispatcherClosed)));
}
