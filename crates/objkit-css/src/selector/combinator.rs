//! [§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators)
//!
//! "A combinator is punctuation that represents a particular kind of
//! relationship between the selectors on either side."

use std::fmt;
use std::str::FromStr;

use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

use super::SelectorBuilder;
use crate::error::SelectorError;

/// [§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators)
///
/// The connector placed between two selectors. `Display` and `FromStr`
/// use the bare token, without padding.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumIter, EnumString,
)]
pub enum Combinator {
    /// [§ 16.1 Descendant combinator](https://www.w3.org/TR/selectors-4/#descendant-combinators)
    /// "A selector of the form 'A B' represents an element B that is an
    /// arbitrary descendant of some ancestor element A."
    #[strum(serialize = " ")]
    Descendant,

    /// [§ 16.2 Child combinator](https://www.w3.org/TR/selectors-4/#child-combinators)
    /// "A selector of the form 'A > B' represents an element B that is a
    /// direct child of element A."
    #[strum(serialize = ">")]
    Child,

    /// [§ 16.3 Next-sibling combinator](https://www.w3.org/TR/selectors-4/#adjacent-sibling-combinators)
    /// "A selector of the form 'A + B' represents an element B that
    /// immediately follows element A."
    #[strum(serialize = "+")]
    NextSibling,

    /// [§ 16.4 Subsequent-sibling combinator](https://www.w3.org/TR/selectors-4/#general-sibling-combinators)
    /// "A selector of the form 'A ~ B' represents an element B that
    /// follows element A, not necessarily immediately."
    #[strum(serialize = "~")]
    SubsequentSibling,
}

impl Combinator {
    /// Parse a connector token.
    ///
    /// # Errors
    ///
    /// [`SelectorError::InvalidConnector`] for anything but `" "`, `">"`,
    /// `"+"` or `"~"`.
    pub fn parse(token: &str) -> Result<Self, SelectorError> {
        Self::from_str(token).map_err(|_| SelectorError::InvalidConnector(token.to_string()))
    }
}

/// A value that can be turned into a finished selector string.
///
/// Builders are finalized with [`SelectorBuilder::stringify`], so passing
/// `&mut builder` clears it.
pub trait IntoSelectorString {
    /// Resolve to the selector text.
    fn into_selector_string(self) -> String;
}

impl IntoSelectorString for String {
    fn into_selector_string(self) -> String {
        self
    }
}

impl IntoSelectorString for &str {
    fn into_selector_string(self) -> String {
        self.to_string()
    }
}

impl IntoSelectorString for SelectorBuilder {
    fn into_selector_string(mut self) -> String {
        self.stringify()
    }
}

impl IntoSelectorString for &mut SelectorBuilder {
    fn into_selector_string(self) -> String {
        self.stringify()
    }
}

impl IntoSelectorString for CombinedSelector {
    fn into_selector_string(self) -> String {
        self.stringify()
    }
}

impl IntoSelectorString for &CombinedSelector {
    fn into_selector_string(self) -> String {
        self.stringify()
    }
}

/// [§ 4.3 Complex selectors](https://www.w3.org/TR/selectors-4/#complex)
///
/// Two resolved selectors joined by a combinator. The operands are plain
/// text; nothing about their structure is checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CombinedSelector {
    left: String,
    combinator: Combinator,
    right: String,
}

impl CombinedSelector {
    /// The selector left of the combinator.
    #[must_use]
    pub fn left(&self) -> &str {
        &self.left
    }

    /// The combinator joining the operands.
    #[must_use]
    pub const fn combinator(&self) -> Combinator {
        self.combinator
    }

    /// The selector right of the combinator.
    #[must_use]
    pub fn right(&self) -> &str {
        &self.right
    }

    /// Render as `left`, combinator token, `right`, with no added whitespace.
    #[must_use]
    pub fn stringify(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for CombinedSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.left, self.combinator, self.right)
    }
}

/// Join two selectors with a connector token.
///
/// The connector is validated before either operand is resolved, so a
/// rejected call leaves builder operands untouched.
///
/// # Example
///
/// ```
/// use objkit_css::{SelectorBuilder, combine};
///
/// let mut div = SelectorBuilder::new();
/// div.element("div")?.id("main")?;
/// let mut table = SelectorBuilder::new();
/// table.element("table")?.id("data")?;
///
/// let combined = combine(&mut div, "+", &mut table)?;
/// assert_eq!(combined.stringify(), "div#main+table#data");
/// # Ok::<(), objkit_css::SelectorError>(())
/// ```
///
/// # Errors
///
/// [`SelectorError::InvalidConnector`] if `connector` is not a combinator.
pub fn combine(
    left: impl IntoSelectorString,
    connector: &str,
    right: impl IntoSelectorString,
) -> Result<CombinedSelector, SelectorError> {
    let combinator = Combinator::parse(connector)?;
    Ok(CombinedSelector {
        left: left.into_selector_string(),
        combinator,
        right: right.into_selector_string(),
    })
}

impl SelectorBuilder {
    /// Join two selectors with a connector token. See [`combine`].
    ///
    /// # Errors
    ///
    /// [`SelectorError::InvalidConnector`] if `connector` is not a combinator.
    pub fn combine(
        left: impl IntoSelectorString,
        connector: &str,
        right: impl IntoSelectorString,
    ) -> Result<CombinedSelector, SelectorError> {
        combine(left, connector, right)
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn test_combinator_tokens_round_trip() {
        for combinator in Combinator::iter() {
            assert_eq!(Combinator::parse(combinator.as_ref()), Ok(combinator));
        }
    }

    #[test]
    fn test_padded_token_is_rejected() {
        assert_eq!(
            Combinator::parse(" + "),
            Err(SelectorError::InvalidConnector(" + ".to_string()))
        );
    }
}
