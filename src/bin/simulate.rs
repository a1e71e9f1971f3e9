//! Replays a scenario file against a fresh facility.
//!
//! # Usage
//!
//! ```bash
//! # Replay a scenario and print the final grid and ledger
//! cargo run --bin simulate -- scenario.txt
//!
//! # Read the scenario from stdin, stop at the first rejected request
//! cat scenario.txt | cargo run --bin simulate -- - --strict
//! ```
//!
//! See [`parking_facility::scenario`] for the file format.

use parking_facility::domain::Facility;
use parking_facility::domain::entities::{Slot, SlotKind, Transaction};
use parking_facility::scenario::{self, Command, Outcome, Step};
use parking_facility::utils::timestamp::format_timestamp;

use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Replay parking entries and exits from a scenario file.
#[derive(Parser)]
#[command(name = "simulate")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Scenario file, or `-` for stdin
    scenario: PathBuf,

    /// Stop at the first rejected request
    #[arg(short, long)]
    strict: bool,

    /// Skip the final grid
    #[arg(long)]
    no_grid: bool,

    /// Skip the final ledger
    #[arg(long)]
    no_ledger: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let source = read_source(&cli.scenario)?;
    let steps = scenario::parse(&source)
        .with_context(|| format!("Invalid scenario {}", cli.scenario.display()))?;

    let mut facility = Facility::default();

    println!("{}", "🚗 Parking simulation".bright_blue().bold());
    println!();

    let mut rejected = 0;
    for step in &steps {
        let outcome = scenario::apply(&mut facility, step);
        print_outcome(step, &outcome);

        if outcome.is_rejected() {
            rejected += 1;
            if cli.strict {
                println!();
                println!("{}", "❌ Stopped at first rejection".red().bold());
                break;
            }
        }
    }

    if !cli.no_grid {
        println!();
        print_grid(facility.slots());
    }

    if !cli.no_ledger {
        println!();
        print_ledger(facility.transactions());
    }

    let occupancy = facility.occupancy();
    println!();
    println!(
        "{} {} requests, {} rejected, {} of {} slots occupied",
        "Summary:".bright_white().bold(),
        steps.len(),
        rejected,
        occupancy.vacant,
        occupancy.capacity()
    );

    Ok(())
}

fn read_source(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read scenario from stdin")?;
        return Ok(buf);
    }

    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

fn print_outcome(step: &Step, outcome: &Outcome) {
    let line = format!("{:>4}", step.line).bright_black();

    let request = match &step.command {
        Command::Entry(r) => format!(
            "entry {} {} {} {}",
            r.car_size,
            r.entrance,
            r.plate_number,
            format_timestamp(r.start)
        ),
        Command::Exit(r) => format!("exit {} {}", r.plate_number, format_timestamp(r.end)),
    };

    match outcome {
        Outcome::Parked(receipt) => {
            let note = if receipt.merged { " (continued stay)" } else { "" };
            println!(
                "{} {:<40} {} slot {} {}{}",
                line,
                request,
                "✔".green(),
                receipt.slot.to_string().cyan(),
                receipt.slot_size,
                note.yellow()
            );
        }
        Outcome::Left(receipt) => {
            println!(
                "{} {:<40} {} paid {}",
                line,
                request,
                "✔".green(),
                format!("₱{}", receipt.transaction.payment).bright_yellow().bold()
            );
        }
        Outcome::Rejected(err) => {
            println!("{} {:<40} {} {}", line, request, "✘".red(), err.to_string().red());
        }
    }
}

fn print_grid(slots: &[Slot]) {
    println!("{}", "Grid".bright_white().bold());
    println!(
        "  {} open  {} vacant  {} road",
        "■".green(),
        "■".red(),
        "■".bright_black()
    );
    println!();

    for row in slots.chunk_by(|a, b| a.position().y == b.position().y) {
        let cells: Vec<String> = row
            .iter()
            .map(|slot| {
                let label = match slot.occupant_plate() {
                    Some(plate) => format!("{:^5}", plate),
                    None if slot.is_road() => "     ".to_string(),
                    None => format!("{:^5}", slot.size().code()),
                };
                match slot.kind() {
                    SlotKind::Open => label.on_green().black().to_string(),
                    SlotKind::Vacant => label.on_red().white().to_string(),
                    SlotKind::Road => label.on_bright_black().to_string(),
                }
            })
            .collect();
        println!("  {}", cells.join(" "));
    }
}

fn print_ledger(transactions: &[Transaction]) {
    println!("{}", "Ledger (newest first)".bright_white().bold());

    if transactions.is_empty() {
        println!("{}", "  No transactions".yellow());
        return;
    }

    println!(
        "  {:<10} {:<18} {:<18} {}",
        "Plate".bright_white().bold(),
        "Start".bright_white().bold(),
        "End".bright_white().bold(),
        "Payment".bright_white().bold()
    );
    println!("  {}", "─".repeat(60).bright_black());

    for tx in transactions {
        let end = tx
            .end
            .map(format_timestamp)
            .unwrap_or_else(|| "parking".to_string());
        let payment = if tx.is_open() {
            "parking".yellow()
        } else {
            format!("₱{}", tx.payment).green()
        };

        println!(
            "  {:<10} {:<18} {:<18} {}",
            tx.plate_number,
            format_timestamp(tx.start),
            end,
            payment
        );
    }
}
