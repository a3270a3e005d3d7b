use clap::Parser;
use colored::*;
use std::io::{self, Write};
use std::process;
use tokio::io::{AsyncBufReadExt, BufReader};

use toolrouter::cli::Args;
use toolrouter::config::{Config, JsonConfig};
use toolrouter::ui::{display_banner, display_result, display_tools};
use toolrouter::{Dispatcher, ToolRegistry};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // A missing .env file is fine, the variables may come from the shell
    dotenvy::dotenv().ok();

    let args = Args::parse();

    if args.config_init {
        init_config(&args);
        return Ok(());
    }

    let config = match Config::from_env_and_args(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e.to_string().red());
            process::exit(1);
        }
    };

    init_logging(config.verbose);

    let registry = match ToolRegistry::new(config.tools.clone()) {
        Ok(registry) => registry,
        Err(e) => {
            eprintln!("{} {}", "Error:".red(), e);
            process::exit(1);
        }
    };

    let dispatcher = Dispatcher::from_config(&registry, &config)?;

    if args.list_tools {
        display_tools(dispatcher.tools());
        return Ok(());
    }

    if config.verbose {
        display_tools(dispatcher.tools());
    }

    if !args.query.is_empty() {
        let result = dispatcher.run(&args.query.join(" ")).await;
        display_result(&result);
        return Ok(());
    }

    run_interactive(&dispatcher).await?;
    Ok(())
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(format!("warn,toolrouter={}", level)),
    )
    .format_timestamp(None)
    .init();
}

fn init_config(args: &Args) {
    let path = match args.config.clone().or_else(|| {
        JsonConfig::user_config_dir().map(|dir| dir.join("toolrouter.yaml"))
    }) {
        Some(path) => path,
        None => {
            eprintln!("{}", "Error: could not determine a config directory".red());
            process::exit(1);
        }
    };

    match JsonConfig::init_file(&path) {
        Ok(()) => println!(
            "{}",
            format!("Wrote example config to {}", path.display()).green()
        ),
        Err(e) => {
            eprintln!("{} {:#}", "Error:".red(), e);
            process::exit(1);
        }
    }
}

async fn run_interactive(dispatcher: &Dispatcher) -> io::Result<()> {
    display_banner(dispatcher.tools().len());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        print!("\n{} ", "You:".green().bold());
        io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            // EOF
            println!();
            break;
        };

        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        if input.eq_ignore_ascii_case("exit") {
            break;
        }

        let result = dispatcher.run(input).await;
        display_result(&result);
    }

    Ok(())
}
