use anyhow::Context;
use clap::Parser;
use decl_config::DeclConfig;

mod cli;
mod commands;
mod context;
mod output;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = match cli::Cli::try_parse() {
        Ok(cli) => cli,
        Err(error) => {
            // --help and --version land here too and are not failures.
            let code = i32::from(error.use_stderr());
            let _ = error.print();
            std::process::exit(code);
        }
    };

    if let Err(error) = run(cli).await {
        eprintln!("declmgr error: {error:#}");
        std::process::exit(1);
    }
}

async fn run(cli: cli::Cli) -> anyhow::Result<()> {
    init_tracing(cli.quiet, cli.verbose)?;

    let flags = cli.global_flags();
    if let cli::Commands::Schema(args) = &cli.command {
        return commands::schema::handle(args);
    }
    cli.command.check_usage()?;

    let project_root = context::resolve_project_root(&flags.path)?;
    let config = DeclConfig::load(&project_root).context("failed to load declmgr configuration")?;
    let ctx = context::AppContext::init(project_root, config)?;

    commands::dispatch::dispatch(cli.command, &ctx, &flags).await
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("DECLMGR_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
