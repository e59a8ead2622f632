use clap::Parser;
use funky_finance::cli::commands::{init, solve};
use funky_finance::cli::{Cli, Commands};
use funky_finance::{Settings, logging};

fn main() {
    let cli = Cli::parse();

    let loaded = match &cli.config {
        Some(path) => Settings::load_from(path),
        None => Settings::load(),
    };
    let mut config = loaded.unwrap_or_else(|e| {
        eprintln!("Configuration error: {e}");
        Settings::default()
    });

    // CLI overrides config
    if let Some(path) = cli.glyphs {
        config.glyphs.path = Some(path);
    }

    logging::init_with_config(&config.logging);

    let code = match cli.command {
        Some(Commands::Init { force }) => init::run_init(force),
        Some(Commands::Config) => init::run_config(&config),
        None => solve::run(&config),
    };
    std::process::exit(code.into());
}
