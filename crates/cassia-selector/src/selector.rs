//! Built selector values.
//!
//! [§ 4.2 Compound selectors](https://www.w3.org/TR/selectors-4/#compound)
//! [§ 4.3 Complex selectors](https://www.w3.org/TR/selectors-4/#complex)
//!
//! A built selector is an immutable value: either one compound selector, or
//! a node joining two built selectors with a combinator. Chains of any depth
//! are trees of such nodes, and rendering is a recursive
//! left/combinator/right join.

use std::fmt::{self, Display};

use serde::Serialize;

use crate::combinator::Combinator;
use crate::fragment::{FragmentKind, SimpleSelector};

/// [§ 4.2 Compound selectors](https://www.w3.org/TR/selectors-4/#compound)
///
/// "A compound selector is a sequence of simple selectors that are not
/// separated by a combinator."
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CompoundSelector {
    /// The fragments of this compound selector, in append order.
    pub simple_selectors: Vec<SimpleSelector>,
}

impl CompoundSelector {
    /// [§ 17 Calculating Specificity](https://www.w3.org/TR/selectors-4/#specificity-rules)
    ///
    /// Count id fragments into A, class/attribute/pseudo-class fragments
    /// into B, and type/pseudo-element fragments into C.
    #[must_use]
    pub fn specificity(&self) -> Specificity {
        let mut spec = Specificity::default();
        for simple in &self.simple_selectors {
            match simple.kind() {
                FragmentKind::Id => spec.0 += 1,
                FragmentKind::Class | FragmentKind::Attribute | FragmentKind::PseudoClass => {
                    spec.1 += 1;
                }
                FragmentKind::Element | FragmentKind::PseudoElement => spec.2 += 1,
            }
        }
        spec
    }
}

impl Display for CompoundSelector {
    /// Fragments concatenate with no separator; each carries its own
    /// punctuation.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for simple in &self.simple_selectors {
            write!(f, "{simple}")?;
        }
        Ok(())
    }
}

/// A node joining two built selectors with a combinator.
///
/// [§ 4.3 Complex selectors](https://www.w3.org/TR/selectors-4/#complex)
/// "A complex selector is a chain of one or more compound selectors
/// separated by combinators." Here the chain is held as a binary tree, so
/// either side may itself be a joined chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComplexSelector {
    /// The left operand.
    pub left: Selector,
    /// The relationship between the operands.
    pub combinator: Combinator,
    /// The right operand.
    pub right: Selector,
}

/// An immutable built selector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Selector {
    /// A single compound selector.
    Compound(CompoundSelector),
    /// Two selectors joined by a combinator.
    Complex(Box<ComplexSelector>),
}

impl Selector {
    /// Join two built selectors with a combinator.
    ///
    /// Returns a new node wrapping both operands; neither operand is
    /// inspected or modified, so any previously built value can appear on
    /// either side of any number of joins.
    #[must_use]
    pub fn combine(left: Self, combinator: Combinator, right: Self) -> Self {
        Self::Complex(Box::new(ComplexSelector {
            left,
            combinator,
            right,
        }))
    }

    /// Whether this selector is a single compound with no combinators.
    #[must_use]
    pub const fn is_compound(&self) -> bool {
        matches!(self, Self::Compound(_))
    }

    /// [§ 17 Calculating Specificity](https://www.w3.org/TR/selectors-4/#specificity-rules)
    ///
    /// Specificity of the whole tree: compound selectors count their
    /// fragments, joined selectors sum both sides component-wise.
    #[must_use]
    pub fn specificity(&self) -> Specificity {
        match self {
            Self::Compound(compound) => compound.specificity(),
            Self::Complex(node) => {
                let left = node.left.specificity();
                let right = node.right.specificity();
                Specificity(left.0 + right.0, left.1 + right.1, left.2 + right.2)
            }
        }
    }
}

impl From<CompoundSelector> for Selector {
    fn from(compound: CompoundSelector) -> Self {
        Self::Compound(compound)
    }
}

impl Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Compound(compound) => write!(f, "{compound}"),
            Self::Complex(node) => write!(f, "{}{}{}", node.left, node.combinator, node.right),
        }
    }
}

/// [§ 17 Calculating Specificity](https://www.w3.org/TR/selectors-4/#specificity-rules)
/// "A selector's specificity is calculated for a given element as follows:
///  - count the number of ID selectors in the selector (= A)
///  - count the number of class selectors, attributes selectors, and pseudo-classes in the selector (= B)
///  - count the number of type selectors and pseudo-elements in the selector (= C)
///
/// Specificities are compared by comparing the three components in order."
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize)]
pub struct Specificity(pub u32, pub u32, pub u32);

impl Specificity {
    /// Create a new specificity with (A, B, C) components.
    #[must_use]
    pub const fn new(a: u32, b: u32, c: u32) -> Self {
        Self(a, b, c)
    }
}
