//! Fluent construction of CSS selector strings.
//!
//! # Scope
//!
//! This crate implements:
//! - **Compound selectors** ([§ 4.2 Compound selectors](https://www.w3.org/TR/selectors-4/#compound))
//!   - Type, ID, class, attribute, pseudo-class and pseudo-element fragments
//!   - Canonical fragment ordering and singleton checks
//!
//! - **Complex selectors** ([§ 4.3 Complex selectors](https://www.w3.org/TR/selectors-4/#complex))
//!   - Joining two selectors with a combinator (descendant, child, sibling)
//!
//! # Not Implemented
//!
//! - Parsing or matching selectors against a document
//! - Validating the text of individual fragments

/// Errors reported while building selectors.
pub mod error;
/// The selector builder per [Selectors Level 4](https://www.w3.org/TR/selectors-4/).
pub mod selector;

pub use error::SelectorError;
pub use selector::combinator::{Combinator, CombinedSelector, IntoSelectorString, combine};
pub use selector::{PartKind, SelectorBuilder};
