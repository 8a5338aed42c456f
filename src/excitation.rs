//! JK flip-flop excitation encoding.
//!
//! Sequential behavior is reverse-engineered by turning every observed
//! state transition into the inputs a JK (set/reset style) flip-flop would
//! need to realize it. Half of each excitation pair is a don't-care, and
//! those don't-cares are exactly what lets the join engine find small
//! excitation equations.
//!
//! The encoder is a pure per-row transcription: it builds a new solving
//! table laid out as `[inputs | current states | outputs | J0,K0,J1,K1,...]`
//! from the raw observation table.

use log::debug;

use crate::error::{Error, Result};
use crate::table::Table;
use crate::types::Literal;

/// Excitation pair for one observed state-bit transition.
///
/// ```text
/// current -> next    J  K
///    0    ->  1      1  -
///    0    ->  0      0  -
///    1    ->  0      -  1
///    1    ->  1      -  0
/// ```
pub fn jk_for_transition(current: bool, next: bool) -> (Literal, Literal) {
    match (current, next) {
        (false, true) => (Literal::One, Literal::DontCare),
        (false, false) => (Literal::Zero, Literal::DontCare),
        (true, false) => (Literal::DontCare, Literal::One),
        (true, true) => (Literal::DontCare, Literal::Zero),
    }
}

/// Build the solving table for a sequential system.
///
/// `states` and `next_states` are parallel lists of column indices into the
/// observation table; position `i` of each refers to the same physical state
/// bit. The output table has one row per observation row, with
/// `inputs.len() + states.len() + outputs.len() + 2 * states.len()` columns.
///
/// All configuration errors (unpaired state lists, out-of-range columns,
/// non-binary state cells) are raised here, before any minimization begins.
pub fn encode_system(
    table: &Table,
    inputs: &[usize],
    states: &[usize],
    outputs: &[usize],
    next_states: &[usize],
) -> Result<Table> {
    if states.len() != next_states.len() {
        return Err(Error::StateColumnMismatch {
            states: states.len(),
            next_states: next_states.len(),
        });
    }
    for &col in inputs.iter().chain(states).chain(outputs).chain(next_states) {
        table.check_column(col)?;
    }

    let width = inputs.len() + states.len() + outputs.len() + 2 * states.len();
    debug!(
        "encoding solving table: {} inputs, {} states, {} outputs -> width {}",
        inputs.len(),
        states.len(),
        outputs.len(),
        width
    );

    let mut encoded = Table::new(width);
    for (row_n, row) in table.rows().enumerate() {
        let mut new_row = Vec::with_capacity(width);
        for &col in inputs {
            new_row.push(row[col]);
        }
        for &col in states {
            new_row.push(row[col]);
        }
        for &col in outputs {
            new_row.push(row[col]);
        }
        for (&cur_col, &next_col) in states.iter().zip(next_states) {
            let current = row[cur_col].as_bool().ok_or(Error::NonBinaryState {
                row: row_n,
                col: cur_col,
            })?;
            let next = row[next_col].as_bool().ok_or(Error::NonBinaryState {
                row: row_n,
                col: next_col,
            })?;
            let (j, k) = jk_for_transition(current, next);
            new_row.push(j);
            new_row.push(k);
        }
        encoded.push_row(new_row)?;
    }
    Ok(encoded)
}
