//! The extraction pattern DSL and its compiled form.
//!
//! A pattern is compiled once into an [`Op`] tree plus the schemas of the
//! tables its `Collect` leaves write into. Exactly one operator in the tree
//! is the *root*: the shallowest one that branches (an array over scalars,
//! or an object with more than one property). Completing the root triggers
//! the emission of all accumulated rows.

mod compiler;
mod ops;


pub use compiler::{Pattern, PatternError};
pub use ops::{Op, Prop, TableId};
