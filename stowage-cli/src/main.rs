use anyhow::{anyhow, Result};
use clap::{arg, Command};
use std::{fs, io::Read};
use stowage_core::{json, Instance, Solution};
use stowage_solvers::Strategy;

fn cli() -> Command {
    Command::new("stowage")
        .about("Solves and verifies 0/1 knapsack loading plans")
        .arg_required_else_help(true)
        .subcommand(
            Command::new("solve")
                .about("Solves an instance with the chosen strategy")
                .arg(
                    arg!(<INSTANCE> "Instance json string, path to json file, or '-' for stdin")
                        .value_parser(clap::value_parser!(String)),
                )
                .arg(
                    arg!(--strategy [STRATEGY] "One of dp, greedy, memo, pure, bnb (default dp)")
                        .default_value("dp")
                        .value_parser(clap::value_parser!(String)),
                ),
        )
        .subcommand(
            Command::new("verify")
                .about("Verifies a solution against an instance")
                .arg(
                    arg!(<INSTANCE> "Instance json string, path to json file, or '-' for stdin")
                        .value_parser(clap::value_parser!(String)),
                )
                .arg(
                    arg!(<SOLUTION> "Solution json string, path to json file, or '-' for stdin")
                        .value_parser(clap::value_parser!(String)),
                ),
        )
        .subcommand(
            Command::new("generate")
                .about("Generates a deterministic random instance")
                .arg(arg!(<SEED> "Seed value").value_parser(clap::value_parser!(u64)))
                .arg(arg!(<NUM_ITEMS> "Number of items").value_parser(clap::value_parser!(usize)))
                .arg(
                    arg!(--budget [BUDGET] "Capacity as a percent of total weight")
                        .default_value("50")
                        .value_parser(clap::value_parser!(u32)),
                ),
        )
}

fn main() {
    let matches = cli().get_matches();

    if let Err(e) = match matches.subcommand() {
        Some(("solve", sub_m)) => solve(
            sub_m.get_one::<String>("INSTANCE").unwrap().clone(),
            sub_m.get_one::<String>("strategy").unwrap().clone(),
        ),
        Some(("verify", sub_m)) => verify(
            sub_m.get_one::<String>("INSTANCE").unwrap().clone(),
            sub_m.get_one::<String>("SOLUTION").unwrap().clone(),
        ),
        Some(("generate", sub_m)) => generate(
            *sub_m.get_one::<u64>("SEED").unwrap(),
            *sub_m.get_one::<usize>("NUM_ITEMS").unwrap(),
            *sub_m.get_one::<u32>("budget").unwrap(),
        ),
        _ => Err(anyhow!("Invalid subcommand")),
    } {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn solve(instance: String, strategy_id: String) -> Result<()> {
    let instance: Instance = load_json(&instance)?;
    let strategy = Strategy::from_id(&strategy_id);
    let solution = stowage_solvers::solve(strategy, &instance)?;
    println!("{}", json::jsonify_pretty(&solution));
    eprintln!(
        "{}: profit {}, weight {}/{}, {} of {} items",
        strategy.display_name(),
        solution.total_profit,
        solution.total_weight(),
        instance.capacity,
        solution.selection.len(),
        instance.num_items(),
    );
    Ok(())
}

fn verify(instance: String, solution: String) -> Result<()> {
    let instance: Instance = load_json(&instance)?;
    let solution: Solution = load_json(&solution)?;
    match instance.verify_solution(&solution) {
        Ok(_) => {
            println!("Solution is valid");
            Ok(())
        }
        Err(e) => Err(anyhow!("Invalid solution: {}", e)),
    }
}

fn generate(seed: u64, num_items: usize, budget_percent: u32) -> Result<()> {
    let mut seed_bytes = [0u8; 32];
    seed_bytes[..8].copy_from_slice(&seed.to_le_bytes());
    let instance = Instance::generate(&seed_bytes, num_items, budget_percent);
    println!("{}", json::jsonify_pretty(&instance));
    Ok(())
}

/// Accepts a json string, a path to a json file, or '-' for stdin.
fn load_json<T: serde::de::DeserializeOwned>(input: &str) -> Result<T> {
    let raw = if input == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .map_err(|e| anyhow!("Failed to read from stdin: {}", e))?;
        buffer
    } else if input.ends_with(".json") {
        fs::read_to_string(input).map_err(|e| anyhow!("Failed to read file {}: {}", input, e))?
    } else {
        input.to_string()
    };

    json::dejsonify(&raw).map_err(|e| anyhow!("Failed to parse json: {}", e))
}
