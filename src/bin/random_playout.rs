//! Seeded random-playout series runner.
//!
//! Run with:
//! `cargo run --release --bin random_playout`
//! `cargo run --release --bin random_playout -- --games 50 --seed 1234 --verbose`

use plum_rules::utils::random_playout::{play_random_series, PlayoutConfig, PlayoutSeriesConfig};

fn parse_value<T: std::str::FromStr>(flag: &str, value: Option<String>) -> Result<T, String> {
    let raw = value.ok_or_else(|| format!("missing value for {flag}"))?;
    raw.parse()
        .map_err(|_| format!("invalid value for {flag}: {raw}"))
}

fn main() -> Result<(), String> {
    let mut config = PlayoutSeriesConfig {
        games: 10,
        base_seed: 1234,
        per_game: PlayoutConfig::default(),
        verbose: false,
    };

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--games" | "-g" => config.games = parse_value(&arg, args.next())?,
            "--seed" | "-s" => config.base_seed = parse_value(&arg, args.next())?,
            "--max-plies" => config.per_game.max_plies = parse_value(&arg, args.next())?,
            "--verbose" | "-v" => config.verbose = true,
            other => return Err(format!("unknown argument: {other}")),
        }
    }

    let stats = play_random_series(&config).map_err(|e| e.to_string())?;
    println!("{}", stats.report());
    Ok(())
}
