//! Reverse-engineer a 2-bit enabled counter from its observed transitions.
//!
//! Builds the full observation table of the counter (input `e`, state bits
//! `q1 q0`, carry output `c`) and prints the minimized output and JK
//! excitation equations.

use clap::Parser;

use qmc_rs::solve::{solve_system, Column, SystemSpec};
use qmc_rs::table::Table;
use qmc_rs::types::Literal;

#[derive(Parser)]
#[command(about = "Solve a 2-bit enabled counter from sampled transitions")]
struct Args {
    /// Show join-engine and factoring progress.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    simplelog::TermLogger::init(
        if args.verbose {
            simplelog::LevelFilter::Debug
        } else {
            simplelog::LevelFilter::Info
        },
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    // Columns: e, q1, q0, c, next(q1), next(q0).
    let mut table = Table::new(6);
    for bits in 0..8u32 {
        let e = bits & 4 != 0;
        let q1 = bits & 2 != 0;
        let q0 = bits & 1 != 0;

        let state = (q1 as u32) << 1 | q0 as u32;
        let next = if e { (state + 1) % 4 } else { state };
        let carry = e && q1 && q0;

        table.push_row(vec![
            Literal::from(e),
            Literal::from(q1),
            Literal::from(q0),
            Literal::from(carry),
            Literal::from(next & 2 != 0),
            Literal::from(next & 1 != 0),
        ])?;
    }

    log::info!("observation table (e q1 q0 c nq1 nq0):\n{}", table);

    let spec = SystemSpec {
        inputs: vec![Column::new("e", 0)],
        outputs: vec![Column::new("c", 3)],
        states: vec![Column::new("q1", 1), Column::new("q0", 2)],
        next_states: vec![4, 5],
    };

    for (label, equation) in solve_system(&table, &spec)? {
        println!("{} = {}", label, equation);
    }

    Ok(())
}
