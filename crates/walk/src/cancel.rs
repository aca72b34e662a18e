use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Shared flag used to stop a traversal from another thread.
///
/// Cloning the token yields a handle to the same flag. Once cancelled, a
/// walker stops descending and emitting; everything collected up to that
/// point is still returned.
///
/// # Examples
///
/// ```
/// use walk::CancelToken;
///
/// let token = CancelToken::new();
/// let handle = token.clone();
/// assert!(!token.is_cancelled());
/// handle.cancel();
/// assert!(token.is_cancelled());
/// ```
#[derive(Clone, Debug, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    /// Creates a token that has not been cancelled.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests cancellation.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
    }

    /// Reports whether cancellation was requested.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }
}
