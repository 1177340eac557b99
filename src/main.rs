// ABOUTME: CLI entrypoint for mesh2hugo command
// ABOUTME: Handles usage, configuration echo, error exit codes and the export run

use clap::{CommandFactory, Parser};
use mesh2hugo::{
    api::ApiClient,
    cli::Cli,
    config::ExportConfig,
    export::export_project,
    storage::OutputDir,
    util::mask_secret,
    Result,
};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    if std::env::args_os().len() <= 1 {
        let _ = Cli::command().write_help(&mut std::io::stderr());
        std::process::exit(2);
    }

    if let Err(e) = run() {
        tracing::debug!(error = ?e, "export failed");
        eprintln!("mesh2hugo: [E{}] {}", e.exit_code(), e);
        std::process::exit(e.exit_code());
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    println!("Using output: {}", cli.output.display());

    let config = ExportConfig::from_cli(cli)?;
    println!("Using url: {}", config.base_url);
    match &config.api_key {
        Some(key) => println!("Using key: {}", mask_secret(key)),
        None => println!("No key specified. Using anonymous access"),
    }
    println!("Using project: {}", config.project);

    let output = OutputDir::new(&config.output);
    if config.clean {
        println!("Cleaning output directory: {}", output.root.display());
        output.clean()?;
    }

    println!("-----");
    let client = ApiClient::new(config.base_url_str(), config.api_key.clone())?;
    let report = export_project(&client, &config.project, &output)?;
    tracing::info!(?report, "export finished");

    println!("-----");
    println!("All done...");
    Ok(())
}
