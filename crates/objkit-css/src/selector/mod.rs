//! CSS selector building
//!
//! A [`SelectorBuilder`] accumulates the simple selectors of one compound
//! selector and renders them in canonical order:
//!
//! ```text
//! element#id.class[attr]:pseudo-class::pseudo-element
//!           \----/\----/\----------/
//!           may occur several times
//! ```

use std::fmt;

use strum_macros::{Display, EnumIter, EnumString};

use crate::error::SelectorError;

/// Joining built selectors with combinators.
pub mod combinator;

/// [§ 4.2 Compound selectors](https://www.w3.org/TR/selectors-4/#compound)
///
/// The kind of a fragment in a compound selector.
///
/// Variants are declared in the order they must appear, so the derived
/// `Ord` is the ordering the builder enforces. `FromStr` accepts the
/// kebab-case names, plus `attr` for attributes.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumIter, EnumString,
)]
#[strum(serialize_all = "kebab-case")]
pub enum PartKind {
    /// [§ 5.1 Type selector](https://www.w3.org/TR/selectors-4/#type-selectors)
    ///
    /// Example: `div`
    Element,

    /// [§ 6.7 ID selector](https://www.w3.org/TR/selectors-4/#id-selectors)
    ///
    /// Example: `#main`
    Id,

    /// [§ 6.6 Class selector](https://www.w3.org/TR/selectors-4/#class-html)
    ///
    /// Example: `.container`
    Class,

    /// [§ 6 Attribute selectors](https://www.w3.org/TR/selectors-4/#attribute-selectors)
    ///
    /// Example: `[href$=".png"]`
    #[strum(to_string = "attribute", serialize = "attr")]
    Attribute,

    /// [§ 3.6 Pseudo-classes](https://www.w3.org/TR/selectors-4/#pseudo-classes)
    ///
    /// Example: `:nth-of-type(even)`
    PseudoClass,

    /// [§ 3.6.1 Pseudo-elements](https://www.w3.org/TR/selectors-4/#pseudo-elements)
    ///
    /// Example: `::before`
    PseudoElement,
}

impl PartKind {
    /// Whether a compound selector may contain at most one fragment of this kind.
    #[must_use]
    pub const fn is_singleton(self) -> bool {
        matches!(self, Self::Element | Self::Id | Self::PseudoElement)
    }
}

/// Accumulates the fragments of one compound selector.
///
/// Every add operation checks two rules before touching any state:
///
/// 1. Element, id and pseudo-element may each be added once
///    ([`SelectorError::DuplicateFragment`]).
/// 2. Kinds must be added in [`PartKind`] order; consecutive classes,
///    attributes or pseudo-classes are fine
///    ([`SelectorError::OrderViolation`]).
///
/// # Example
///
/// ```
/// use objkit_css::SelectorBuilder;
///
/// let mut builder = SelectorBuilder::new();
/// builder.element("a")?.attr(r#"href$=".png""#)?.pseudo_class("focus")?;
/// assert_eq!(builder.stringify(), r#"a[href$=".png"]:focus"#);
///
/// // stringify() cleared the builder.
/// assert!(builder.is_empty());
/// # Ok::<(), objkit_css::SelectorError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectorBuilder {
    element: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
    attributes: Vec<String>,
    pseudo_classes: Vec<String>,
    pseudo_element: Option<String>,
    last_part: Option<PartKind>,
}

impl SelectorBuilder {
    /// Create an empty builder. Use one builder per selector.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// [§ 5.1 Type selector](https://www.w3.org/TR/selectors-4/#type-selectors)
    ///
    /// Set the element name, e.g. `div`.
    ///
    /// # Errors
    ///
    /// [`SelectorError::DuplicateFragment`] if an element was already set,
    /// [`SelectorError::OrderViolation`] if any other fragment came first.
    pub fn element(&mut self, value: impl Into<String>) -> Result<&mut Self, SelectorError> {
        self.add(PartKind::Element, value.into())
    }

    /// [§ 6.7 ID selector](https://www.w3.org/TR/selectors-4/#id-selectors)
    ///
    /// Set the id, rendered as `#value`.
    ///
    /// # Errors
    ///
    /// [`SelectorError::DuplicateFragment`] if an id was already set,
    /// [`SelectorError::OrderViolation`] if a later kind came first.
    pub fn id(&mut self, value: impl Into<String>) -> Result<&mut Self, SelectorError> {
        self.add(PartKind::Id, value.into())
    }

    /// [§ 6.6 Class selector](https://www.w3.org/TR/selectors-4/#class-html)
    ///
    /// Append a class, rendered as `.value`.
    ///
    /// # Errors
    ///
    /// [`SelectorError::OrderViolation`] if an attribute, pseudo-class or
    /// pseudo-element came first.
    pub fn class(&mut self, value: impl Into<String>) -> Result<&mut Self, SelectorError> {
        self.add(PartKind::Class, value.into())
    }

    /// [§ 6 Attribute selectors](https://www.w3.org/TR/selectors-4/#attribute-selectors)
    ///
    /// Append an attribute condition, rendered as `[value]`. The expression
    /// is taken verbatim, e.g. `href$=".png"`.
    ///
    /// # Errors
    ///
    /// [`SelectorError::OrderViolation`] if a pseudo-class or pseudo-element
    /// came first.
    pub fn attr(&mut self, value: impl Into<String>) -> Result<&mut Self, SelectorError> {
        self.add(PartKind::Attribute, value.into())
    }

    /// [§ 3.6 Pseudo-classes](https://www.w3.org/TR/selectors-4/#pseudo-classes)
    ///
    /// Append a pseudo-class, rendered as `:value`.
    ///
    /// # Errors
    ///
    /// [`SelectorError::OrderViolation`] if a pseudo-element came first.
    pub fn pseudo_class(&mut self, value: impl Into<String>) -> Result<&mut Self, SelectorError> {
        self.add(PartKind::PseudoClass, value.into())
    }

    /// [§ 3.6.1 Pseudo-elements](https://www.w3.org/TR/selectors-4/#pseudo-elements)
    ///
    /// Set the pseudo-element, rendered as `::value`.
    ///
    /// # Errors
    ///
    /// [`SelectorError::DuplicateFragment`] if a pseudo-element was already set.
    pub fn pseudo_element(&mut self, value: impl Into<String>) -> Result<&mut Self, SelectorError> {
        self.add(PartKind::PseudoElement, value.into())
    }

    /// Add a fragment of the given kind.
    ///
    /// This is the dynamic form of the named add operations, for callers
    /// that decide the kind at runtime.
    ///
    /// # Errors
    ///
    /// Same as the named operation for `kind`.
    pub fn add(&mut self, kind: PartKind, value: String) -> Result<&mut Self, SelectorError> {
        self.check(kind)?;

        #[cfg(feature = "selector-trace")]
        eprintln!(
            "[SELECTOR] {} -> {kind} {value:?}",
            self.last_part
                .map_or_else(|| "start".to_string(), |last| last.to_string())
        );

        match kind {
            PartKind::Element => self.element = Some(value),
            PartKind::Id => self.id = Some(value),
            PartKind::Class => self.classes.push(value),
            PartKind::Attribute => self.attributes.push(value),
            PartKind::PseudoClass => self.pseudo_classes.push(value),
            PartKind::PseudoElement => self.pseudo_element = Some(value),
        }
        self.last_part = Some(kind);
        Ok(self)
    }

    /// Check whether `kind` may be added in the current state.
    fn check(&self, kind: PartKind) -> Result<(), SelectorError> {
        if kind.is_singleton() && self.has(kind) {
            return Err(SelectorError::DuplicateFragment { kind });
        }
        match self.last_part {
            Some(last) if last > kind => Err(SelectorError::OrderViolation {
                attempted: kind,
                last,
            }),
            _ => Ok(()),
        }
    }

    /// Whether a fragment of `kind` has been added since the last reset.
    #[must_use]
    pub fn has(&self, kind: PartKind) -> bool {
        match kind {
            PartKind::Element => self.element.is_some(),
            PartKind::Id => self.id.is_some(),
            PartKind::Class => !self.classes.is_empty(),
            PartKind::Attribute => !self.attributes.is_empty(),
            PartKind::PseudoClass => !self.pseudo_classes.is_empty(),
            PartKind::PseudoElement => self.pseudo_element.is_some(),
        }
    }

    /// The kind of the most recently added fragment, `None` when empty.
    #[must_use]
    pub const fn last_part(&self) -> Option<PartKind> {
        self.last_part
    }

    /// Whether nothing has been added since creation or the last `stringify`.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.last_part.is_none()
    }

    /// Render the selector and clear the builder.
    ///
    /// After this call the builder is back in its initial state and can
    /// build an unrelated selector. Use the `Display` impl to render
    /// without clearing.
    pub fn stringify(&mut self) -> String {
        #[cfg(feature = "selector-trace")]
        eprintln!("[SELECTOR] stringify, reset");

        std::mem::take(self).to_string()
    }
}

impl fmt::Display for SelectorBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(element) = &self.element {
            f.write_str(element)?;
        }
        if let Some(id) = &self.id {
            write!(f, "#{id}")?;
        }
        for class in &self.classes {
            write!(f, ".{class}")?;
        }
        for attribute in &self.attributes {
            write!(f, "[{attribute}]")?;
        }
        for pseudo_class in &self.pseudo_classes {
            write!(f, ":{pseudo_class}")?;
        }
        if let Some(pseudo_element) = &self.pseudo_element {
            write!(f, "::{pseudo_element}")?;
        }
        Ok(())
    }
}
