use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use dumbbell_rs::{answer::Answer, inventory::Inventory, plate_type::PlateType, task::Task};
use log::{LevelFilter, info};

#[derive(Parser)]
#[command(author, version, about = "Dumbbell weight set combinator")]
struct Args {
    /// Where the plate inventory is kept.
    #[arg(short, long, env = "DUMBBELL_INVENTORY", default_value = "inventory.json")]
    inventory: PathBuf,
    #[arg(
        short,
        long,
        value_name = "[off, error, warn, info, debug, trace]",
        default_value = "warn"
    )]
    log_level: LevelFilter,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Lists ways to load dumbbells to at least TARGET kg each.
    Search {
        target: f64,
        /// Weight of an empty dumbbell.
        #[arg(short, long, default_value_t = 2.0)]
        base: f64,
        /// How many identical dumbbells to load.
        #[arg(short, long, default_value_t = 1)]
        dumbbells: u32,
        /// Search these plates instead of the inventory, as COUNTxWEIGHT.
        #[arg(short, long = "plate", value_parser = clap::value_parser!(PlateType))]
        plates: Vec<PlateType>,
    },
    /// Lists the plates in the inventory.
    Plates,
    /// Adds plates as COUNTxWEIGHT, or a single 1kg plate to edit later.
    Add { plate: Option<PlateType> },
    /// Removes plate set ROW.
    Remove { row: usize },
    /// Changes how many plates set ROW has.
    SetCount { row: usize, count: u32 },
    /// Changes the weight of the plates in set ROW.
    SetWeight { row: usize, weight: f64 },
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    env_logger::Builder::from_default_env()
        .filter_level(args.log_level)
        .init();

    let mut inventory = Inventory::load(&args.inventory)?;

    match args.command {
        Command::Search {
            target,
            base,
            dumbbells,
            plates,
        } => {
            let plates = match plates.is_empty() {
                true => inventory.plates().to_vec(),
                false => plates,
            };

            let answer = Answer::search(plates, &Task::new(target, base, dumbbells));
            if let Some(reason) = answer.reason() {
                info!("{reason}");
            }
            print!("{answer}");

            return Ok(());
        }
        Command::Plates => {
            for (i, plate) in inventory.plates().iter().enumerate() {
                println!("{}) {plate}", i + 1);
            }

            return Ok(());
        }
        Command::Add { plate } => match plate {
            Some(plate) => inventory.add(plate),
            None => inventory.add_default(),
        },
        Command::Remove { row } => {
            let plate = inventory.remove(index(row)?)?;
            info!("Removed {plate}");
        }
        Command::SetCount { row, count } => inventory.set_count(index(row)?, count)?,
        Command::SetWeight { row, weight } => inventory.set_weight(index(row)?, weight)?,
    }

    inventory.save(&args.inventory)?;

    Ok(())
}

fn index(row: usize) -> anyhow::Result<usize> {
    row.checked_sub(1).context("Plate sets are numbered from 1.")
}
