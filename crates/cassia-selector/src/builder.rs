//! Validating construction of compound selectors.
//!
//! [`SelectorBuilder`] accumulates fragments for one build session and
//! enforces, fragment by fragment, the multiplicity and ordering rules of
//! [§ 4.2 Compound selectors](https://www.w3.org/TR/selectors-4/#compound):
//! fragments appear in the order element, id, class, attribute,
//! pseudo-class, pseudo-element, and the element, id, and pseudo-element
//! fragments appear at most once. Each build session uses its own builder
//! instance; there is no shared accumulator between sessions.
//!
//! Validation is pairwise: every append is checked against the kind of the
//! most recently appended fragment only. Class, attribute, and pseudo-class
//! fragments may repeat consecutively.

use cassia_common::warning::warn_once;

use crate::combinator::Combinator;
use crate::error::SelectorError;
use crate::fragment::{FragmentKind, SimpleSelector};
use crate::selector::{CompoundSelector, Selector};

/// Tag names tolerated directly after an id fragment.
///
/// Kept for legacy call sites that begin a combined chain's right-hand
/// compound while the left-hand one ends in an id. Exercising the tolerance
/// emits a deduplicated warning.
const LEGACY_ID_ELEMENT_TAGS: [&str; 2] = ["img", "tr"];

/// A mutable builder scoped to one construction session.
///
/// Fragment-appending operations return `Result<&mut Self, _>` so calls
/// chain with `?`; [`SelectorBuilder::build`] finalizes the accumulated
/// state into an immutable [`Selector`] and resets the builder to empty.
///
/// # Example
///
/// ```
/// use cassia_selector::SelectorBuilder;
///
/// # fn main() -> Result<(), cassia_selector::SelectorError> {
/// let mut builder = SelectorBuilder::new();
/// let selector = builder.element("a")?.pseudo_class("focus")?.build();
/// assert_eq!(selector.to_string(), "a:focus");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct SelectorBuilder {
    /// Compound selectors finalized when `element` started a new compound.
    completed: Vec<CompoundSelector>,
    /// The in-progress compound selector.
    fragments: Vec<SimpleSelector>,
    /// Kind of the most recently appended fragment; `None` when empty or
    /// after a reset.
    last_kind: Option<FragmentKind>,
}

impl SelectorBuilder {
    /// Create an empty builder for one construction session.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a type fragment, e.g. `div`.
    ///
    /// Calling this on a non-empty builder finalizes the in-progress
    /// compound selector and starts a new one; at build time successive
    /// compounds are joined as descendants.
    ///
    /// # Errors
    ///
    /// [`SelectorError::DuplicateFragment`] if the last appended fragment
    /// is already a type fragment. [`SelectorError::OrderViolation`] if the
    /// last appended fragment is an id - except for the legacy-tolerated
    /// tag names `img` and `tr`, which are accepted with a warning.
    pub fn element(&mut self, name: &str) -> Result<&mut Self, SelectorError> {
        match self.last_kind {
            Some(FragmentKind::Element) => return Err(SelectorError::DuplicateFragment),
            Some(kind @ FragmentKind::Id) => {
                if LEGACY_ID_ELEMENT_TAGS.contains(&name) {
                    warn_once(
                        "Selector",
                        &format!(
                            "type fragment '{name}' after {kind} fragment is tolerated for legacy call sites"
                        ),
                    );
                } else {
                    return Err(self.order_violation());
                }
            }
            _ => {}
        }

        if !self.fragments.is_empty() {
            self.completed.push(CompoundSelector {
                simple_selectors: std::mem::take(&mut self.fragments),
            });
        }
        self.record(SimpleSelector::Type(name.to_string()));
        Ok(self)
    }

    /// Append an id fragment, rendered as `#value`.
    ///
    /// # Errors
    ///
    /// [`SelectorError::DuplicateFragment`] if the last appended fragment
    /// is already an id. [`SelectorError::OrderViolation`] if the last
    /// appended fragment is a class or a pseudo-element.
    pub fn id(&mut self, value: &str) -> Result<&mut Self, SelectorError> {
        match self.last_kind {
            Some(FragmentKind::Id) => return Err(SelectorError::DuplicateFragment),
            Some(FragmentKind::Class | FragmentKind::PseudoElement) => {
                return Err(self.order_violation());
            }
            _ => {}
        }
        self.record(SimpleSelector::Id(value.to_string()));
        Ok(self)
    }

    /// Append a class fragment, rendered as `.value`. May repeat.
    ///
    /// # Errors
    ///
    /// [`SelectorError::OrderViolation`] if the last appended fragment is
    /// an attribute.
    pub fn class(&mut self, value: &str) -> Result<&mut Self, SelectorError> {
        if self.last_kind == Some(FragmentKind::Attribute) {
            return Err(self.order_violation());
        }
        self.record(SimpleSelector::Class(value.to_string()));
        Ok(self)
    }

    /// Append an attribute fragment. May repeat.
    ///
    /// The expression is rendered verbatim inside brackets, so
    /// `attr(r#"href$=".png""#)` renders as `[href$=".png"]`.
    ///
    /// # Errors
    ///
    /// [`SelectorError::OrderViolation`] if the last appended fragment is
    /// a pseudo-class.
    pub fn attr(&mut self, expr: &str) -> Result<&mut Self, SelectorError> {
        if self.last_kind == Some(FragmentKind::PseudoClass) {
            return Err(self.order_violation());
        }
        self.record(SimpleSelector::Attribute(expr.to_string()));
        Ok(self)
    }

    /// Append a pseudo-class fragment, rendered as `:value`. May repeat.
    ///
    /// # Errors
    ///
    /// [`SelectorError::OrderViolation`] if the last appended fragment is
    /// a pseudo-element.
    pub fn pseudo_class(&mut self, value: &str) -> Result<&mut Self, SelectorError> {
        if self.last_kind == Some(FragmentKind::PseudoElement) {
            return Err(self.order_violation());
        }
        self.record(SimpleSelector::PseudoClass(value.to_string()));
        Ok(self)
    }

    /// Append a pseudo-element fragment, rendered as `::value`.
    ///
    /// # Errors
    ///
    /// [`SelectorError::DuplicateFragment`] if the last appended fragment
    /// is already a pseudo-element.
    pub fn pseudo_element(&mut self, value: &str) -> Result<&mut Self, SelectorError> {
        if self.last_kind == Some(FragmentKind::PseudoElement) {
            return Err(SelectorError::DuplicateFragment);
        }
        self.record(SimpleSelector::PseudoElement(value.to_string()));
        Ok(self)
    }

    /// Finalize the session into an immutable [`Selector`] and reset.
    ///
    /// Drains every accumulated compound selector; compounds started by
    /// repeated `element` calls are joined with the descendant combinator,
    /// left to right. Afterwards the builder is empty and may be reused for
    /// a fresh session. Building an empty session yields an empty compound
    /// selector that renders as `""`.
    pub fn build(&mut self) -> Selector {
        let compounds = std::mem::take(&mut self.completed);
        let current = CompoundSelector {
            simple_selectors: std::mem::take(&mut self.fragments),
        };
        self.last_kind = None;

        compounds
            .into_iter()
            .rev()
            .fold(Selector::Compound(current), |right, left| {
                Selector::combine(Selector::Compound(left), Combinator::Descendant, right)
            })
    }

    /// Record an accepted fragment and advance the kind tracker.
    fn record(&mut self, fragment: SimpleSelector) {
        self.last_kind = Some(fragment.kind());
        self.fragments.push(fragment);
    }

    /// Clear the kind tracker and produce the ordering error.
    ///
    /// The tracker reset is observable: a caller that swallows the error
    /// sees the next append validated against a clean slate, while the
    /// fragments recorded so far stay as they are.
    fn order_violation(&mut self) -> SelectorError {
        self.last_kind = None;
        SelectorError::OrderViolation
    }
}
