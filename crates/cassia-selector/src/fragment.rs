//! Selector fragments per
//! [Selectors Level 4](https://www.w3.org/TR/selectors-4/).
//!
//! A fragment is one simple selector inside a compound selector: the
//! element name, an id, a class, an attribute expression, a pseudo-class,
//! or a pseudo-element. Fragments render to their CSS text via [`Display`]
//! and report their [`FragmentKind`] so the builder can validate ordering.

use std::fmt::{self, Display};

use serde::Serialize;

/// The category of one fragment.
///
/// [§ 4.2 Compound selectors](https://www.w3.org/TR/selectors-4/#compound)
/// constrain which categories may follow which; the builder tracks the kind
/// of the most recently appended fragment to enforce that.
///
/// Renders in kebab-case (`pseudo-class`, `pseudo-element`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, strum_macros::Display)]
#[strum(serialize_all = "kebab-case")]
pub enum FragmentKind {
    /// A type selector naming a document element.
    Element,
    /// An id selector.
    Id,
    /// A class selector.
    Class,
    /// An attribute selector.
    Attribute,
    /// A pseudo-class.
    PseudoClass,
    /// A pseudo-element.
    PseudoElement,
}

/// A simple selector holding its raw text payload.
///
/// [§ 5 Elemental selectors](https://www.w3.org/TR/selectors-4/#elemental-selectors)
/// [§ 6 Attribute selectors](https://www.w3.org/TR/selectors-4/#attribute-selectors)
///
/// Payloads are stored without their CSS punctuation; [`Display`] adds it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum SimpleSelector {
    /// [§ 5.1 Type selector](https://www.w3.org/TR/selectors-4/#type-selectors)
    /// "A type selector is the name of a document language element type."
    ///
    /// Renders as the bare name: `div`, `table`.
    Type(String),

    /// [§ 6.7 ID selector](https://www.w3.org/TR/selectors-4/#id-selectors)
    /// "An ID selector is a hash (#, U+0023) immediately followed by the
    /// ID value."
    ///
    /// Renders as `#value`.
    Id(String),

    /// [§ 6.6 Class selector](https://www.w3.org/TR/selectors-4/#class-html)
    /// "The class selector is given as a full stop (. U+002E) immediately
    /// followed by an identifier."
    ///
    /// Renders as `.value`.
    Class(String),

    /// [§ 6.4 Attribute selectors](https://www.w3.org/TR/selectors-4/#attribute-selectors)
    ///
    /// Holds the raw attribute expression, e.g. `href$=".png"`, which is
    /// rendered verbatim inside brackets: `[href$=".png"]`.
    Attribute(String),

    /// [§ 4 Pseudo-classes](https://www.w3.org/TR/selectors-4/#pseudo-classes)
    ///
    /// Renders as `:value`, e.g. `:focus`, `:nth-of-type(even)`.
    PseudoClass(String),

    /// [§ 11 Pseudo-elements](https://www.w3.org/TR/selectors-4/#pseudo-elements)
    ///
    /// Renders as `::value`, e.g. `::first-letter`.
    PseudoElement(String),
}

impl SimpleSelector {
    /// The category this fragment belongs to.
    #[must_use]
    pub const fn kind(&self) -> FragmentKind {
        match self {
            Self::Type(_) => FragmentKind::Element,
            Self::Id(_) => FragmentKind::Id,
            Self::Class(_) => FragmentKind::Class,
            Self::Attribute(_) => FragmentKind::Attribute,
            Self::PseudoClass(_) => FragmentKind::PseudoClass,
            Self::PseudoElement(_) => FragmentKind::PseudoElement,
        }
    }
}

impl Display for SimpleSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Type(name) => f.write_str(name),
            Self::Id(value) => write!(f, "#{value}"),
            Self::Class(value) => write!(f, ".{value}"),
            Self::Attribute(expr) => write!(f, "[{expr}]"),
            Self::PseudoClass(value) => write!(f, ":{value}"),
            Self::PseudoElement(value) => write!(f, "::{value}"),
        }
    }
}
