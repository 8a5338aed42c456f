//! The solving pipeline: table column -> minimized, factored equation.
//!
//! The per-column path is minterm extraction, the prime-implicant join,
//! expression building, and factoring. [`solve_system`] drives the whole
//! reverse-engineering flow of a sequential circuit: it encodes the JK
//! excitation table and solves every output and excitation column in the
//! caller's order, yielding `(label, equation)` pairs.
//!
//! Cost is combinatorial in the number of free variables (worst case `2^N`
//! minterms); callers should keep `N` at or below roughly 20. Everything
//! here is synchronous and reads the table immutably, so different target
//! columns of one table may be solved from independent threads.

use log::debug;

use crate::error::Result;
use crate::excitation::encode_system;
use crate::expr::Expr;
use crate::implicant::Implicant;
use crate::join::essential_prime_implicants;
use crate::render::render;
use crate::simplify::simplify;
use crate::table::Table;
use crate::types::Literal;

/// A named table column.
#[derive(Debug, Clone)]
pub struct Column {
    pub name: String,
    pub index: usize,
}

impl Column {
    pub fn new(name: impl Into<String>, index: usize) -> Self {
        Self {
            name: name.into(),
            index,
        }
    }
}

/// Which observation-table columns play which role.
///
/// `states` and `next_states` are parallel: entry `i` of each refers to the
/// same physical state bit, sampled before and after the clock edge. Output
/// expressions are written over the inputs followed by the current-state
/// bits, in the order given here.
#[derive(Debug, Clone, Default)]
pub struct SystemSpec {
    pub inputs: Vec<Column>,
    pub outputs: Vec<Column>,
    pub states: Vec<Column>,
    pub next_states: Vec<usize>,
}

/// Compute the essential prime implicants of one target column.
///
/// A row whose target cell is `One` contributes a required minterm; a
/// `DontCare` cell contributes an optional one; `Zero` rows contribute
/// nothing. The minterm values are taken from `free_vars`, in order.
pub fn minimize(table: &Table, target: usize, free_vars: &[usize]) -> Result<Vec<Implicant>> {
    table.check_column(target)?;
    for &col in free_vars {
        table.check_column(col)?;
    }

    let mut minterms = Vec::new();
    for row in table.rows() {
        let optional = match row[target] {
            Literal::One => false,
            Literal::DontCare => true,
            Literal::Zero => continue,
        };
        let values = free_vars.iter().map(|&col| row[col]).collect();
        minterms.push(Implicant::new(values, optional));
    }
    debug!(
        "column {}: {} minterms over {} variables",
        target,
        minterms.len(),
        free_vars.len()
    );
    essential_prime_implicants(minterms, free_vars.len())
}

/// Build the factored expression for one target column.
///
/// Degenerate targets short-circuit to a constant without entering the join
/// loop: a column that is never asserted is `0`, and a target over zero
/// free variables is `1` exactly when some row requires it.
pub fn column_expression(table: &Table, target: usize, free_vars: &[usize]) -> Result<Expr> {
    table.check_column(target)?;
    if free_vars.is_empty() {
        let required = table.rows().any(|row| row[target] == Literal::One);
        return Ok(Expr::Constant(required));
    }
    let epis = minimize(table, target, free_vars)?;
    Ok(simplify(&Expr::from_implicants(&epis)))
}

/// Solve one target column to its rendered equation.
pub fn solve_column<S: AsRef<str>>(
    table: &Table,
    target: usize,
    free_vars: &[usize],
    names: &[S],
) -> Result<String> {
    let expr = column_expression(table, target, free_vars)?;
    Ok(render(&expr, names))
}

/// Solve a whole observed system.
///
/// Encodes the JK excitation table and returns one `(label, equation)` pair
/// per output column, followed by `<state>_J` and `<state>_K` pairs for
/// every state bit, all in the order the spec lists them. All equations are
/// over the input and current-state variables. The first validation failure
/// aborts the call; there are no partial results.
pub fn solve_system(table: &Table, spec: &SystemSpec) -> Result<Vec<(String, String)>> {
    let input_cols: Vec<usize> = spec.inputs.iter().map(|c| c.index).collect();
    let state_cols: Vec<usize> = spec.states.iter().map(|c| c.index).collect();
    let output_cols: Vec<usize> = spec.outputs.iter().map(|c| c.index).collect();

    let solving = encode_system(table, &input_cols, &state_cols, &output_cols, &spec.next_states)?;

    // Layout of the solving table: [inputs | states | outputs | J,K...].
    let num_free = input_cols.len() + state_cols.len();
    let free_vars: Vec<usize> = (0..num_free).collect();
    let names: Vec<&str> = spec
        .inputs
        .iter()
        .chain(&spec.states)
        .map(|c| c.name.as_str())
        .collect();

    let mut results = Vec::new();
    for (i, output) in spec.outputs.iter().enumerate() {
        let target = num_free + i;
        let equation = solve_column(&solving, target, &free_vars, &names)?;
        debug!("{} = {}", output.name, equation);
        results.push((output.name.clone(), equation));
    }
    for (i, state) in spec.states.iter().enumerate() {
        let j_col = num_free + output_cols.len() + 2 * i;
        let j = solve_column(&solving, j_col, &free_vars, &names)?;
        debug!("{}_J = {}", state.name, j);
        results.push((format!("{}_J", state.name), j));

        let k = solve_column(&solving, j_col + 1, &free_vars, &names)?;
        debug!("{}_K = {}", state.name, k);
        results.push((format!("{}_K", state.name), k));
    }
    Ok(results)
}
