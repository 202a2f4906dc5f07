use thiserror::Error;

use crate::selector::PartKind;

/// A rejected selector-building step.
///
/// The builder is left exactly as it was before the failing call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectorError {
    /// An element, id or pseudo-element was added to a selector that already has one.
    #[error(
        "Element, id and pseudo-element should not occur more than one time inside the selector (repeated {kind})"
    )]
    DuplicateFragment {
        /// The singleton kind that was repeated.
        kind: PartKind,
    },

    /// A fragment was added after a fragment that must follow it.
    #[error(
        "Selector parts should be arranged in the following order: element, id, class, attribute, pseudo-class, pseudo-element ({attempted} after {last})"
    )]
    OrderViolation {
        /// The kind the caller tried to add.
        attempted: PartKind,
        /// The kind added last, which ranks after `attempted`.
        last: PartKind,
    },

    /// `combine` was given something other than `" "`, `">"`, `"+"` or `"~"`.
    #[error("unknown combinator {0:?}, expected one of \" \", \">\", \"+\", \"~\"")]
    InvalidConnector(String),
}
