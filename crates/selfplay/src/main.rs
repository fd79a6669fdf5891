//! Self-play CLI
//!
//! Play capture-first random games against each other and report the results.

use std::env;
use std::path::PathBuf;

use anyhow::{bail, Context};
use selfplay::{MatchRunner, SelfPlayConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn print_usage() {
    println!("Chess rules self-play runner");
    println!();
    println!("Usage:");
    println!("  selfplay [--config FILE] [--games N] [--max-plies N] [--seed S] [--out FILE]");
    println!();
    println!("Options:");
    println!("  --config, -c   TOML file with games, max_plies, seed and output");
    println!("  --games, -g    Number of games to play (default 10)");
    println!("  --max-plies    Abandon a game after this many plies (default 400)");
    println!("  --seed, -s     Seed both players for a reproducible run");
    println!("  --out, -o      Write the JSON summary to FILE");
    println!();
    println!("Set RUST_LOG=debug to see every ply.");
}

fn value<'a>(args: &'a [String], i: usize, flag: &str) -> anyhow::Result<&'a str> {
    match args.get(i + 1) {
        Some(v) => Ok(v.as_str()),
        None => bail!("{flag} needs a value"),
    }
}

fn parse_args(args: &[String]) -> anyhow::Result<Option<SelfPlayConfig>> {
    // A config file is the base layer; flags override it
    let mut config = SelfPlayConfig::default();
    if let Some(pos) = args.iter().position(|a| a == "--config" || a == "-c") {
        let path = value(args, pos, "--config")?;
        config = SelfPlayConfig::load(path.as_ref())?;
    }

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => return Ok(None),
            "--config" | "-c" => i += 1,
            "--games" | "-g" => {
                let v = value(args, i, "--games")?;
                config.games = v.parse().with_context(|| format!("bad game count {v:?}"))?;
                i += 1;
            }
            "--max-plies" => {
                let v = value(args, i, "--max-plies")?;
                config.max_plies = v.parse().with_context(|| format!("bad ply cap {v:?}"))?;
                i += 1;
            }
            "--seed" | "-s" => {
                let v = value(args, i, "--seed")?;
                config.seed = Some(v.parse().with_context(|| format!("bad seed {v:?}"))?);
                i += 1;
            }
            "--out" | "-o" => {
                config.output = Some(PathBuf::from(value(args, i, "--out")?));
                i += 1;
            }
            other => bail!("unknown argument {other:?}"),
        }
        i += 1;
    }

    Ok(Some(config))
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    let Some(config) = parse_args(&args)? else {
        print_usage();
        return Ok(());
    };

    info!(
        games = config.games,
        max_plies = config.max_plies,
        seed = ?config.seed,
        "starting self-play"
    );

    let runner = MatchRunner::new(config.clone());
    let results = runner.run()?;
    results.print_report();

    if let Some(path) = &config.output {
        results
            .save(path)
            .with_context(|| format!("failed to write {}", path.display()))?;
        info!(path = %path.display(), "results saved");
    }

    Ok(())
}
