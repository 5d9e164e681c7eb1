use anyhow::{anyhow, Result};
use clap::{arg, Command};
use serde_json::{Map, Value};
use std::{fs, path::PathBuf};

use evotsp_challenge::{Challenge, Solution};
use evotsp_solver::solve_challenge;

fn cli() -> Command {
    Command::new("evotsp-worker")
        .about("Generates TSP instances, computes and verifies tours")
        .arg_required_else_help(true)
        .subcommand(
            Command::new("generate_instance")
                .about("Generates a random challenge instance")
                .arg(arg!(<SEED> "Seed value").value_parser(clap::value_parser!(u64)))
                .arg(
                    arg!(<NUM_CITIES> "Number of cities")
                        .value_parser(clap::value_parser!(usize)),
                )
                .arg(
                    arg!(--start [START] "Index of the fixed start city")
                        .value_parser(clap::value_parser!(usize)),
                )
                .arg(
                    arg!(--output [PATH] "Path to write the challenge json")
                        .value_parser(clap::value_parser!(PathBuf)),
                ),
        )
        .subcommand(
            Command::new("compute_solution")
                .about("Computes a solution")
                .arg(
                    arg!(<CHALLENGE> "Challenge json string or path to json file")
                        .value_parser(clap::value_parser!(String)),
                )
                .arg(
                    arg!(--params [PARAMS] "Solver hyperparameters json string or path to json file")
                        .value_parser(clap::value_parser!(String)),
                )
                .arg(
                    arg!(--output [PATH] "Path to write the solution json")
                        .value_parser(clap::value_parser!(PathBuf)),
                ),
        )
        .subcommand(
            Command::new("verify_solution")
                .about("Verifies a solution")
                .arg(
                    arg!(<CHALLENGE> "Challenge json string or path to json file")
                        .value_parser(clap::value_parser!(String)),
                )
                .arg(
                    arg!(<SOLUTION> "Solution json string or path to json file")
                        .value_parser(clap::value_parser!(String)),
                ),
        )
}

fn main() {
    let matches = cli().get_matches();

    if let Err(e) = match matches.subcommand() {
        Some(("generate_instance", sub_m)) => generate_instance(
            *sub_m.get_one::<u64>("SEED").unwrap(),
            *sub_m.get_one::<usize>("NUM_CITIES").unwrap(),
            sub_m.get_one::<usize>("start").cloned(),
            sub_m.get_one::<PathBuf>("output").cloned(),
        ),
        Some(("compute_solution", sub_m)) => compute_solution(
            sub_m.get_one::<String>("CHALLENGE").unwrap().clone(),
            sub_m.get_one::<String>("params").cloned(),
            sub_m.get_one::<PathBuf>("output").cloned(),
        ),
        Some(("verify_solution", sub_m)) => verify_solution(
            sub_m.get_one::<String>("CHALLENGE").unwrap().clone(),
            sub_m.get_one::<String>("SOLUTION").unwrap().clone(),
        ),
        _ => Err(anyhow!("Invalid subcommand")),
    } {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn generate_instance(
    seed: u64,
    num_cities: usize,
    start_city: Option<usize>,
    output: Option<PathBuf>,
) -> Result<()> {
    let challenge = Challenge::generate_instance(&expand_seed(seed), num_cities, start_city)?;
    let json = serde_json::to_string(&challenge)?;
    match output {
        Some(path) => fs::write(&path, &json)
            .map_err(|e| anyhow!("Failed to write {}: {}", path.display(), e))?,
        None => println!("{}", json),
    }
    Ok(())
}

fn compute_solution(
    challenge: String,
    params: Option<String>,
    output: Option<PathBuf>,
) -> Result<()> {
    let challenge: Challenge = serde_json::from_str(&load_json(&challenge))?;
    let hyperparameters = match params {
        Some(params) => Some(serde_json::from_str::<Map<String, Value>>(&load_json(&params))?),
        None => None,
    };

    let solution = solve_challenge(&challenge, &hyperparameters)?;
    println!("{}", serde_json::to_string(&solution)?);

    if solution.route.is_empty() {
        return Err(anyhow!("No route found: instance has fewer than 3 cities"));
    }
    challenge
        .verify_solution(&solution)
        .map_err(|e| anyhow!("Invalid solution: {}", e))?;

    if let Some(path) = output {
        let json = serde_json::to_string(&solution)?;
        fs::write(&path, json).map_err(|e| anyhow!("Failed to write {}: {}", path.display(), e))?;
    }
    Ok(())
}

fn verify_solution(challenge: String, solution: String) -> Result<()> {
    let challenge: Challenge = serde_json::from_str(&load_json(&challenge))?;
    let solution: Solution = serde_json::from_str(&load_json(&solution))?;

    challenge.validate()?;
    match challenge.verify_solution(&solution) {
        Ok(()) => {
            println!("Solution is valid");
            Ok(())
        }
        Err(e) => Err(anyhow!("Invalid solution: {}", e)),
    }
}

fn expand_seed(seed: u64) -> [u8; 32] {
    let mut expanded = [0u8; 32];
    expanded[..8].copy_from_slice(&seed.to_le_bytes());
    expanded
}

fn load_json(arg: &str) -> String {
    if arg.ends_with(".json") {
        fs::read_to_string(arg).unwrap_or_else(|_| {
            eprintln!("Failed to read json file: {}", arg);
            std::process::exit(1);
        })
    } else {
        arg.to_string()
    }
}
