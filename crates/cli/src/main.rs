use std::env;
use std::io;
use std::process;

use chess_flash_core::config::{self, Environment, Settings};
use chess_flash_core::Result;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("chess-flash");

    let environment = match parse_env_flag(args.get(1..).unwrap_or(&[])) {
        Ok(environment) => environment,
        Err(message) => {
            eprintln!("Error: {}", message);
            print_usage(program);
            process::exit(1);
        }
    };

    if let Err(e) = run(environment) {
        eprintln!("[ERROR] {}", e);
        process::exit(1);
    }
}

fn run(environment: Environment) -> Result<()> {
    let path = config::config_path();
    let settings = Settings::load(&path, environment)?;
    tracing::debug!(env = %environment, ?settings, "configuration loaded");

    let mut rng = rand::rng();
    let mut stdout = io::stdout().lock();
    chess_flash_core::run(&settings, &mut rng, &mut stdout)?;
    Ok(())
}

/// Accepts exactly `--env <name>` or `--env=<name>`
fn parse_env_flag(args: &[String]) -> std::result::Result<Environment, String> {
    let value = match args {
        [flag, value] if flag == "--env" => value.as_str(),
        [flag] if flag.starts_with("--env=") => &flag["--env=".len()..],
        [] => return Err("missing required flag --env".to_string()),
        [flag] if flag == "--env" => return Err("--env needs a value".to_string()),
        _ => return Err(format!("unexpected arguments: {}", args.join(" "))),
    };

    value.parse().map_err(|e: chess_flash_core::Error| e.to_string())
}

fn print_usage(program: &str) {
    println!("Usage: {} --env <environment>", program);
    println!();
    println!("Environments:");
    for environment in Environment::ALL {
        println!("  {}", environment);
    }
    println!();
    println!(
        "The configuration is read from {} (override with {}).",
        config::DEFAULT_CONFIG_PATH,
        config::CONFIG_PATH_VAR
    );
}
