use clap::Parser;
use foryou_cli::args::Cli;
use foryou_cli::commands::{self, Commands};
use foryou_cli::output::output_error;
use tracing::Level;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // JSON output keeps stdout clean, so logs always go to stderr
    let log_level = if cli.quiet {
        Level::ERROR
    } else if cli.verbose {
        Level::DEBUG
    } else {
        Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    if let Err(e) = run(&cli).await {
        output_error(&e, cli.output.is_json());
        std::process::exit(1);
    }
}

async fn run(cli: &Cli) -> anyhow::Result<()> {
    let config_file = cli.config.as_deref();

    match &cli.command {
        Commands::Recommend(args) => commands::handle_recommend(args, config_file, cli.output).await,
        Commands::Profile(args) => commands::handle_profile(args, cli.output),
        Commands::Config => commands::handle_config(config_file, cli.output),
        Commands::Version => {
            commands::handle_version(cli.output);
            Ok(())
        }
    }
}
