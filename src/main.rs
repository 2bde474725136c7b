//! arkidctl - Main entry point

use clap::Parser;
use log::{debug, info};

use arkid_client::{
    run_invite_command, run_member_command, run_org_command, BaseUrlResolver, BasicAuthorizer,
    Cli, Command, OrgClient, TokenResolver,
};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&cli.log_level))
        .init();

    if let Err(e) = run(&cli).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    info!("Starting arkidctl v{}", env!("CARGO_PKG_VERSION"));
    debug!(
        "CLI args: base_url={:?}, output={}, batch={}",
        cli.base_url, cli.output, cli.batch
    );

    let base_url = BaseUrlResolver::new().resolve(cli.base_url.as_deref(), cli.batch)?;
    let token = TokenResolver::new(&base_url).resolve_required(cli.token.as_deref())?;

    let client = OrgClient::new(&base_url, Some(Box::new(BasicAuthorizer::new(token))))?;

    match &cli.command {
        Command::Org { action } => run_org_command(&client, cli, action).await,
        Command::Member { action } => run_member_command(&client, cli, action).await,
        Command::Invite { action } => run_invite_command(&client, cli, action).await,
    }
}
