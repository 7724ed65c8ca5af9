use clap::Parser;
use color_eyre::eyre;

fn main() -> eyre::Result<()> {
    color_eyre::install()?;

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let cli = refsweep_cli::Cli::parse();
    refsweep_cli::run(cli)?;
    Ok(())
}
