// src/main.rs

use std::env;
use std::process::ExitCode;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use stochastic_diffusion::input::{parse_input_deck, InputDeck};
use stochastic_diffusion::sampling::{draw_uncertainties, sample_multi_fidelity};
use stochastic_diffusion::DiffusionResult;

fn run(input_path: Option<&str>) -> DiffusionResult<()> {
    let deck = match input_path {
        Some(path) => {
            info!(path, "reading input deck");
            parse_input_deck(path)?
        }
        None => InputDeck::default(),
    };

    let mut rng = match deck.sampling.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let xi_uncertainties = draw_uncertainties(&mut rng, deck.sampling.num_uncertainties);

    let sample = sample_multi_fidelity(&deck.problem, &deck.sampling, &xi_uncertainties)?;
    println!("{:.6}", sample.high_fidelity);
    println!("{:.6}", sample.low_fidelity);
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();
    if args.len() > 2 {
        eprintln!("Usage: stochastic-diffusion [input.yaml]");
        return ExitCode::FAILURE;
    }

    match run(args.get(1).map(String::as_str)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
