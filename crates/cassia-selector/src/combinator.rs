//! Combinators per
//! [§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators).
//!
//! "A combinator is punctuation that represents a particular kind of
//! relationship between the selectors on either side."

use std::fmt::{self, Display};

use serde::Serialize;

/// The relationship joining two selectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Combinator {
    /// [§ 16.1 Descendant combinator](https://www.w3.org/TR/selectors-4/#descendant-combinators)
    /// "A descendant combinator is whitespace that separates two compound
    /// selectors."
    Descendant,

    /// [§ 16.2 Child combinator](https://www.w3.org/TR/selectors-4/#child-combinators)
    /// "A child combinator is a greater-than sign (>) that separates two
    /// compound selectors."
    Child,

    /// [§ 16.3 Next-sibling combinator](https://www.w3.org/TR/selectors-4/#adjacent-sibling-combinators)
    /// "A next-sibling combinator is a plus sign (+) that separates two
    /// compound selectors."
    NextSibling,

    /// [§ 16.4 Subsequent-sibling combinator](https://www.w3.org/TR/selectors-4/#general-sibling-combinators)
    /// "A subsequent-sibling combinator is a tilde (~) that separates two
    /// compound selectors."
    SubsequentSibling,
}

impl Combinator {
    /// The punctuation character for this combinator.
    ///
    /// The descendant combinator's token is the space character itself.
    #[must_use]
    pub const fn token(self) -> char {
        match self {
            Self::Descendant => ' ',
            Self::Child => '>',
            Self::NextSibling => '+',
            Self::SubsequentSibling => '~',
        }
    }
}

impl Display for Combinator {
    /// Renders the token padded with exactly one space on each side.
    ///
    /// Every combinator gets the same padding, including the descendant
    /// combinator, whose token is itself a space.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, " {} ", self.token())
    }
}
