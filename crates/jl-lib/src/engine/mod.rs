//! Pattern interpretation over token streams.

mod emit;
mod runtime;


pub use runtime::Runtime;
