use crate::{TraversalError, WalkEntry};

/// Everything a finished traversal produced.
#[derive(Debug, Default)]
pub struct WalkOutcome {
    /// Emitted files in depth-first pre-order.
    pub entries: Vec<WalkEntry>,
    /// Failures absorbed while walking, in the order they happened.
    pub soft_errors: Vec<TraversalError>,
    /// Whether the traversal stopped because its token was cancelled.
    pub cancelled: bool,
}

impl WalkOutcome {
    /// Reports whether the whole tree was walked without absorbed failures.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.cancelled && self.soft_errors.is_empty()
    }
}
