//! aap-inspect - Main entry point

use clap::Parser;
use log::{debug, info};
use std::process::ExitCode;

use aap_inspect::{run_inspect_command, AapClient, Cli, LoginResolver, Result};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&cli.log_level))
        .init();

    info!("Starting aap-inspect v{}", env!("CARGO_PKG_VERSION"));
    debug!(
        "CLI args: organization={:?}, url={}, no_verify_ssl={}, export={:?}, output={}, batch={}",
        cli.organization, cli.url, cli.no_verify_ssl, cli.export, cli.output, cli.batch
    );

    match run(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if e.is_not_found() => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: &Cli) -> Result<()> {
    let resolver = LoginResolver::new(cli.batch);
    let auth = resolver.resolve(cli.username.as_deref(), cli.password.as_deref())?;

    let client = AapClient::new(&cli.url, auth, !cli.no_verify_ssl)?;
    run_inspect_command(&client, cli).await
}
