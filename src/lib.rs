//! # qmc-rs: two-level Boolean minimization in Rust
//!
//! **`qmc-rs`** turns empirically sampled truth-table and state-transition data
//! into minimal sum-of-products expressions and flip-flop excitation equations.
//! It is designed for reverse-engineering and documenting the logic of unknown
//! digital circuits from observed behavior.
//!
//! ## How it works
//!
//! - Rows of a tri-state [`Table`][crate::table::Table] (`0`, `1`, don't-care)
//!   describe the observed behavior of one target column.
//! - The [`join`] engine runs an adapted Quine-McCluskey pass: minterms are
//!   joined level by level into larger implicants, duplicates merge their
//!   minterm lineage, and a cover-count heuristic subtracts out implicants
//!   that are redundantly covered, yielding the essential prime implicants.
//! - The [`expr`] module builds a sum-of-products tree from the implicants,
//!   [`simplify`] factors shared literals out to a fixpoint, and [`render`]
//!   prints the result with caller-supplied signal names.
//! - For sequential circuits, [`excitation`] first rewrites every observed
//!   state transition into the J/K inputs a flip-flop would need, injecting
//!   the don't-cares that make excitation equations small.
//!
//! The returned cover is sound and deterministic but not guaranteed to be a
//! global minimum: redundancy elimination is heuristic, not exact covering.
//! Cost grows with `2^N` in the number of free variables; around 20 variables
//! is the practical ceiling.
//!
//! ## Example
//!
//! Reverse-engineering a toggle flip-flop from four observed transitions:
//!
//! ```rust
//! use qmc_rs::solve::{solve_system, Column, SystemSpec};
//! use qmc_rs::table::Table;
//!
//! # fn main() -> qmc_rs::error::Result<()> {
//! // Columns: input e, current state q, next state.
//! let mut table = Table::new(3);
//! table.push_pattern("000")?;
//! table.push_pattern("011")?;
//! table.push_pattern("101")?;
//! table.push_pattern("110")?;
//!
//! let spec = SystemSpec {
//!     inputs: vec![Column::new("e", 0)],
//!     outputs: vec![],
//!     states: vec![Column::new("q", 1)],
//!     next_states: vec![2],
//! };
//!
//! let equations = solve_system(&table, &spec)?;
//! assert_eq!(equations[0], ("q_J".to_string(), "e".to_string()));
//! assert_eq!(equations[1], ("q_K".to_string(), "e".to_string()));
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod excitation;
pub mod expr;
pub mod implicant;
pub mod join;
pub mod render;
pub mod simplify;
pub mod solve;
pub mod table;
pub mod types;
