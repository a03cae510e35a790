use clap::Parser;
use placeholder_field::app::App;
use placeholder_field::cli::{self, Cli, CliCommand};
use placeholder_field::config::{AppConfig, load_config};

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    // Initialize tracing (logs to stderr if RUST_LOG is set).
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config();

    match cli.command {
        // No subcommand or explicit `tui` → launch the interactive demo.
        None => run_tui(config).await,
        Some(CliCommand::Tui { placeholder }) => {
            let config = AppConfig {
                search_placeholder: placeholder.or(config.search_placeholder),
                ..config
            };
            run_tui(config).await
        }
        // All other subcommands → non-interactive output.
        Some(cmd) => cli::run_command(cmd, &config),
    }
}

/// Launch the interactive demo.
async fn run_tui(config: AppConfig) -> color_eyre::Result<()> {
    tracing::info!(tick_rate_fps = config.tick_rate_fps, "starting demo");

    let terminal = ratatui::init();
    let result = App::new(config).run(terminal).await;
    ratatui::restore();
    result
}
