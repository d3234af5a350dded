//! Global subscriber installation.  Lives in its own binary because the
//! subscriber is process-wide.

use std::sync::{Arc, Barrier};
use std::thread;

use nativewifi_core::logging::{LogConfig, LogError, init_logging, is_logging_initialized};

#[test]
fn concurrent_callers_install_exactly_once() {
    let barrier = Arc::new(Barrier::new(4));
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                init_logging(&LogConfig::default())
            })
        })
        .collect();
    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    assert_eq!(results.iter().filter(|r| r.is_ok()).count(), 1);
    for result in results.iter().filter(|r| r.is_err()) {
        assert!(matches!(result, Err(LogError::AlreadyInitialized)));
    }
    assert!(is_logging_initialized());
    assert!(matches!(
        init_logging(&LogConfig::default()),
        Err(LogError::AlreadyInitialized)
    ));
}
