//! Strassen's divide-and-conquer multiplication.
//!
//! Each level splits both operands into quadrants (views, no copies), forms
//! seven half-size products instead of the eight a blocked product needs,
//! and recombines them. That trades one multiplication for a handful of
//! O(n²) additions per level, giving O(n^log2(7)) ≈ O(n^2.81) overall.
//!
//! - `multiplier`: the [`Strassen`] engine, its leaf-size setting and
//!   input validation
//! - `quadrant`: the combination step that writes the seven products back
//!   into one output buffer

pub mod multiplier;
mod quadrant;

pub use multiplier::Strassen;
