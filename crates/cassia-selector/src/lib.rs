//! Typed construction of CSS selectors for the Cassia toolkit.
//!
//! # Scope
//!
//! This crate implements:
//! - **Selector Model** ([Selectors Level 4](https://www.w3.org/TR/selectors-4/))
//!   - Simple selector fragments: type, id, class, attribute, pseudo-class,
//!     pseudo-element
//!   - Compound selectors and combinator-joined selector trees
//!   - Specificity calculation per [§ 17](https://www.w3.org/TR/selectors-4/#specificity-rules)
//!
//! - **Validating Builder**
//!   - Fluent, per-session accumulation of one compound selector
//!   - Fragment ordering and multiplicity rules enforced on every append,
//!     with typed errors
//!   - Destructive finalize into an immutable selector value
//!
//! - **Composition and Rendering**
//!   - Joining built selectors with descendant, child, next-sibling, and
//!     subsequent-sibling combinators
//!   - Recursive rendering of the resulting tree to CSS text via `Display`
//!
//! # Not Implemented
//!
//! - Selector parsing from text
//! - Matching selectors against a document tree
//! - Namespaces, `:is()`/`:where()`/`:not()` argument grammars
//!
//! # Example
//!
//! ```
//! use cassia_selector::{Combinator, Selector, SelectorBuilder};
//!
//! # fn main() -> Result<(), cassia_selector::SelectorError> {
//! let heading = SelectorBuilder::new().element("h1")?.class("title")?.build();
//! let paragraph = SelectorBuilder::new().element("p")?.build();
//!
//! let joined = Selector::combine(heading, Combinator::NextSibling, paragraph);
//! assert_eq!(joined.to_string(), "h1.title + p");
//! # Ok(())
//! # }
//! ```

/// Validating construction of compound selectors.
pub mod builder;
/// Combinators per [§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators).
pub mod combinator;
/// Error type for selector construction.
pub mod error;
/// Selector fragments per [Selectors Level 4](https://www.w3.org/TR/selectors-4/).
pub mod fragment;
/// Built selector values and specificity.
pub mod selector;

// Re-exports for convenience
pub use builder::SelectorBuilder;
pub use combinator::Combinator;
pub use error::SelectorError;
pub use fragment::{FragmentKind, SimpleSelector};
pub use selector::{ComplexSelector, CompoundSelector, Selector, Specificity};
