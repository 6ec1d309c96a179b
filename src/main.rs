use anyhow::Result;
use clap::{CommandFactory, Parser};
use owo_colors::OwoColorize;
use voxbrief::app::{BriefOptions, run_brief};
use voxbrief::cli::{Cli, Commands};
use voxbrief::config::Config;
use voxbrief::diagnostics::check_dependencies;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        None => {
            let Some(path) = cli.path else {
                Cli::command().print_help()?;
                std::process::exit(2);
            };

            let mut config = load_config(cli.config.as_deref())?;
            if let Some(mib) = cli.max_chunk_mib {
                config.chunking.max_chunk_mib = mib;
            }
            if let Some(budget) = cli.token_budget {
                config.merge.token_budget = budget;
            }

            let options = BriefOptions {
                destination: cli.destination,
                force_video: cli.video,
                quiet: cli.quiet,
                verbosity: cli.verbose,
            };

            match run_brief(&config, &path, &options).await {
                Ok(result) => {
                    println!(
                        "{} {}",
                        "Report written to:".green(),
                        result.report.path.display()
                    );
                }
                Err(e) => {
                    eprintln!("{}", format!("Error: {}", e).red());
                    std::process::exit(1);
                }
            }
        }
        Some(Commands::Check) => {
            let config = load_config(cli.config.as_deref())?;
            if !check_dependencies(&config) {
                std::process::exit(1);
            }
        }
        Some(Commands::Completions { shell }) => {
            clap_complete::generate(
                shell,
                &mut Cli::command(),
                "voxbrief",
                &mut std::io::stdout(),
            );
        }
    }

    Ok(())
}

/// Load configuration from file or use defaults.
///
/// Priority order:
/// 1. Custom config path from CLI (--config)
/// 2. Default config path (~/.config/voxbrief/config.toml)
/// 3. Built-in defaults
///
/// Environment variable overrides are applied last in every case.
fn load_config(custom_path: Option<&std::path::Path>) -> Result<Config> {
    let config = if let Some(path) = custom_path {
        Config::load(path)?
    } else {
        Config::load_or_default(&Config::default_path())?
    };

    Ok(config.with_env_overrides())
}
