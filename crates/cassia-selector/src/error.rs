//! Error type for selector construction.

use thiserror::Error;

/// A rejected builder operation.
///
/// Every variant is fatal to the call that produced it; the builder never
/// recovers internally. A rejected fragment is not recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SelectorError {
    /// A second element, id, or pseudo-element fragment was appended to the
    /// compound selector under construction.
    #[error("element, id and pseudo-element should not occur more than once inside one selector")]
    DuplicateFragment,

    /// A fragment was appended after a kind that must not precede it.
    ///
    /// Returning this error also clears the builder's kind tracker, so
    /// validation of the next appended fragment starts from a clean slate;
    /// fragments already recorded are untouched.
    #[error(
        "selector fragments should be arranged in the following order: element, id, class, attribute, pseudo-class, pseudo-element"
    )]
    OrderViolation,
}
