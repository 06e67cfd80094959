mod cli;
mod config;
mod generate;
mod init;
mod output;
mod queries;
mod schema;

use tracing_subscriber::EnvFilter;

pub async fn run(args: Vec<String>) -> anyhow::Result<()> {
    let cli = cli::parse_args(&args)?;
    init_logging(cli.verbose);

    match cli.command {
        cli::Command::Help(topic) => {
            cli::print_help(topic);
            Ok(())
        }
        cli::Command::Generate(args) => generate::run(args),
        cli::Command::Run(args) => generate::run_simulated(args).await,
        cli::Command::Queries(cmd) => match cmd {
            cli::QueriesCommand::List => queries::list(),
            cli::QueriesCommand::Run(args) => queries::run(args).await,
        },
        cli::Command::Schema(args) => schema::run(args),
        cli::Command::Init(args) => init::run(args),
    }
}

/// Logs go to stderr so SQL and tables on stdout stay pipeable.
fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init();
}
