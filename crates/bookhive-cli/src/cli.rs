use bookhive::{QueryKind, SourceSystem, TimeFrame};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HelpTopic {
    Root,
    Generate,
    Run,
    Queries,
    QueriesList,
    QueriesRun,
    Schema,
    Init,
}

#[derive(Debug, Clone)]
pub struct Cli {
    pub verbose: bool,
    pub command: Command,
}

#[derive(Debug, Clone)]
pub enum Command {
    Help(HelpTopic),
    Generate(GenerateArgs),
    Run(RunArgs),
    Queries(QueriesCommand),
    Schema(SchemaArgs),
    Init(InitArgs),
}

/// Form choices given on the command line. `None` keeps the config value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryArgs {
    pub config: Option<PathBuf>,
    pub kind: Option<QueryKind>,
    pub time_frame: Option<TimeFrame>,
    pub year: Option<String>,
    pub month: Option<String>,
    pub quarter: Option<String>,
    pub source: Option<SourceSystem>,
    pub limit: Option<u32>,
    pub author: bool,
    pub genre: bool,
    pub publisher: bool,
}

#[derive(Debug, Clone)]
pub struct GenerateArgs {
    pub query: QueryArgs,
    pub json: bool,
}

#[derive(Debug, Clone)]
pub struct RunArgs {
    pub query: QueryArgs,
    pub delay_ms: Option<u64>,
}

#[derive(Debug, Clone)]
pub enum QueriesCommand {
    List,
    Run(QueriesRunArgs),
}

#[derive(Debug, Clone)]
pub struct QueriesRunArgs {
    pub id: String,
    pub config: Option<PathBuf>,
    pub delay_ms: Option<u64>,
}

#[derive(Debug, Clone)]
pub struct SchemaArgs {
    pub database: Option<String>,
}

#[derive(Debug, Clone)]
pub struct InitArgs {
    pub config: PathBuf,
}

pub fn parse_args(args: &[String]) -> anyhow::Result<Cli> {
    let mut verbose = false;
    let rest: Vec<&str> = args
        .iter()
        .skip(1)
        .map(|s| s.as_str())
        .filter(|s| {
            let flag = matches!(*s, "-v" | "--verbose");
            verbose |= flag;
            !flag
        })
        .collect();

    let mut it = rest.into_iter();
    let command = match it.next() {
        None | Some("-h" | "--help") => Command::Help(HelpTopic::Root),
        Some("generate") => parse_generate(it)?,
        Some("run") => parse_run(it)?,
        Some("queries") => parse_queries(it)?,
        Some("schema") => parse_schema(it)?,
        Some("init") => parse_init(it)?,
        Some(other) => anyhow::bail!("unknown command: {other}"),
    };

    Ok(Cli { verbose, command })
}

fn next_value<'a>(it: &mut impl Iterator<Item = &'a str>, flag: &str) -> anyhow::Result<&'a str> {
    match it.next() {
        Some(v) => Ok(v),
        None => anyhow::bail!("{flag} requires a value"),
    }
}

fn take_value<'a>(
    inline: Option<&'a str>,
    flag: &str,
    it: &mut impl Iterator<Item = &'a str>,
) -> anyhow::Result<&'a str> {
    match inline {
        Some(v) => Ok(v),
        None => next_value(it, flag),
    }
}

/// Split `--flag=value` into its parts.
fn split_inline(token: &str) -> (&str, Option<&str>) {
    match token.split_once('=') {
        Some((flag, value)) if flag.starts_with("--") => (flag, Some(value)),
        _ => (token, None),
    }
}

fn parse_number<T: std::str::FromStr>(flag: &str, v: &str) -> anyhow::Result<T> {
    v.parse()
        .map_err(|_| anyhow::anyhow!("{flag} expects a number, got '{v}'"))
}

/// Try to consume one query-form flag. Returns `Ok(false)` for tokens that
/// are not query flags.
fn parse_query_flag<'a>(
    query: &mut QueryArgs,
    token: &'a str,
    it: &mut impl Iterator<Item = &'a str>,
) -> anyhow::Result<bool> {
    let (flag, inline) = split_inline(token);
    match flag {
        "--config" => query.config = Some(PathBuf::from(take_value(inline, flag, it)?)),
        "--kind" => query.kind = Some(take_value(inline, flag, it)?.parse()?),
        "--time-frame" => query.time_frame = Some(take_value(inline, flag, it)?.parse()?),
        "--year" => query.year = Some(take_value(inline, flag, it)?.to_string()),
        "--month" => query.month = Some(take_value(inline, flag, it)?.to_string()),
        "--quarter" => query.quarter = Some(take_value(inline, flag, it)?.to_string()),
        "--source" => query.source = Some(take_value(inline, flag, it)?.parse()?),
        "--limit" => query.limit = Some(parse_number(flag, take_value(inline, flag, it)?)?),
        "--author" if inline.is_none() => query.author = true,
        "--genre" if inline.is_none() => query.genre = true,
        "--publisher" if inline.is_none() => query.publisher = true,
        _ => return Ok(false),
    }
    Ok(true)
}

fn parse_generate<'a>(mut it: impl Iterator<Item = &'a str>) -> anyhow::Result<Command> {
    let mut query = QueryArgs::default();
    let mut json = false;

    while let Some(token) = it.next() {
        match token {
            "-h" | "--help" => return Ok(Command::Help(HelpTopic::Generate)),
            "--json" => json = true,
            _ if parse_query_flag(&mut query, token, &mut it)? => {}
            _ => anyhow::bail!("unknown argument: {token}"),
        }
    }

    Ok(Command::Generate(GenerateArgs { query, json }))
}

fn parse_run<'a>(mut it: impl Iterator<Item = &'a str>) -> anyhow::Result<Command> {
    let mut query = QueryArgs::default();
    let mut delay_ms = None;

    while let Some(token) = it.next() {
        match token {
            "-h" | "--help" => return Ok(Command::Help(HelpTopic::Run)),
            "--delay-ms" => {
                delay_ms = Some(parse_number("--delay-ms", next_value(&mut it, token)?)?);
            }
            _ if token.starts_with("--delay-ms=") => {
                delay_ms = Some(parse_number(
                    "--delay-ms",
                    token.trim_start_matches("--delay-ms="),
                )?);
            }
            _ if parse_query_flag(&mut query, token, &mut it)? => {}
            _ => anyhow::bail!("unknown argument: {token}"),
        }
    }

    Ok(Command::Run(RunArgs { query, delay_ms }))
}

fn parse_queries<'a>(mut it: impl Iterator<Item = &'a str>) -> anyhow::Result<Command> {
    let mut subcmd: Option<&str> = None;
    let mut id: Option<String> = None;
    let mut config: Option<PathBuf> = None;
    let mut delay_ms: Option<u64> = None;

    while let Some(token) = it.next() {
        match token {
            "-h" | "--help" => {
                return Ok(Command::Help(match subcmd {
                    None => HelpTopic::Queries,
                    Some("list") => HelpTopic::QueriesList,
                    Some("run") => HelpTopic::QueriesRun,
                    Some(other) => anyhow::bail!("unknown subcommand: {other}"),
                }));
            }
            "list" | "run" if subcmd.is_none() => subcmd = Some(token),
            "--config" => config = Some(PathBuf::from(next_value(&mut it, token)?)),
            _ if token.starts_with("--config=") => {
                config = Some(PathBuf::from(token.trim_start_matches("--config=")));
            }
            "--delay-ms" => {
                delay_ms = Some(parse_number("--delay-ms", next_value(&mut it, token)?)?);
            }
            _ if token.starts_with("--delay-ms=") => {
                delay_ms = Some(parse_number(
                    "--delay-ms",
                    token.trim_start_matches("--delay-ms="),
                )?);
            }
            _ if token.starts_with('-') => anyhow::bail!("unknown flag: {token}"),
            _ if subcmd == Some("run") && id.is_none() => id = Some(token.to_string()),
            _ => anyhow::bail!("unexpected argument: {token}"),
        }
    }

    match subcmd {
        None => Ok(Command::Help(HelpTopic::Queries)),
        Some("list") => Ok(Command::Queries(QueriesCommand::List)),
        Some("run") => {
            let Some(id) = id else {
                anyhow::bail!("queries run requires a query id (see `bookhive queries list`)");
            };
            Ok(Command::Queries(QueriesCommand::Run(QueriesRunArgs {
                id,
                config,
                delay_ms,
            })))
        }
        Some(other) => anyhow::bail!("unknown subcommand: {other}"),
    }
}

fn parse_schema<'a>(it: impl Iterator<Item = &'a str>) -> anyhow::Result<Command> {
    let mut database: Option<String> = None;

    for token in it {
        match token {
            "-h" | "--help" => return Ok(Command::Help(HelpTopic::Schema)),
            _ if token.starts_with('-') => anyhow::bail!("unknown flag: {token}"),
            _ if database.is_none() => database = Some(token.to_string()),
            _ => anyhow::bail!("unexpected argument: {token}"),
        }
    }

    Ok(Command::Schema(SchemaArgs { database }))
}

fn parse_init<'a>(mut it: impl Iterator<Item = &'a str>) -> anyhow::Result<Command> {
    let mut config = PathBuf::from(crate::config::DEFAULT_CONFIG);

    while let Some(token) = it.next() {
        match token {
            "-h" | "--help" => return Ok(Command::Help(HelpTopic::Init)),
            "--config" => config = PathBuf::from(next_value(&mut it, token)?),
            _ if token.starts_with("--config=") => {
                config = PathBuf::from(token.trim_start_matches("--config="));
            }
            _ => anyhow::bail!("unknown argument: {token}"),
        }
    }

    Ok(Command::Init(InitArgs { config }))
}

const QUERY_OPTIONS: &str = "\
  --config <FILE>       Config file path (default: bookhive.toml if present)
  --kind <KIND>         popular_books | active_members | loan_trends
  --time-frame <TF>     all_time | current_year | current_month | current_quarter |
                        custom_year | custom_month | custom_quarter |
                        by_month | by_quarter | by_year (loan_trends)
  --year <YEAR>         Custom year (default: current year)
  --month <MONTH>       Custom month
  --quarter <QUARTER>   Custom quarter
  --source <SYSTEM>     all | UWindsor_Library | Windsor_PLibrary
  --limit <N>           Result row limit
  --author              Include author (popular_books)
  --genre               Include genre (popular_books)
  --publisher           Include publisher (popular_books)";

pub fn print_help(topic: HelpTopic) {
    match topic {
        HelpTopic::Root => {
            println!(
                "\
bookhive - library data warehouse query workbench

USAGE:
  bookhive [-v] <COMMAND> [OPTIONS]

COMMANDS:
  generate              Build SQL text from query builder choices
  run                   Build SQL text and run it against the mock backend
  queries               List or run predefined queries
  schema                Print mock database schemas
  init                  Write a bookhive.toml template

GLOBAL OPTIONS:
  -v, --verbose         Debug logging (RUST_LOG overrides)
  -h, --help            Print help

Run `bookhive <command> --help` for more."
            );
        }
        HelpTopic::Generate => {
            println!(
                "\
USAGE:
  bookhive generate [OPTIONS]

OPTIONS:
{QUERY_OPTIONS}
  --json                Print the configuration and SQL as JSON
  -h, --help            Print help"
            );
        }
        HelpTopic::Run => {
            println!(
                "\
USAGE:
  bookhive run [OPTIONS]

OPTIONS:
{QUERY_OPTIONS}
  --delay-ms <MS>       Simulated latency (default: from config or 800)
  -h, --help            Print help"
            );
        }
        HelpTopic::Queries => {
            println!(
                "\
USAGE:
  bookhive queries <SUBCOMMAND> [OPTIONS]

SUBCOMMANDS:
  list                  List predefined queries
  run <id>              Run a predefined query against the mock backend

Run `bookhive queries <subcommand> --help` for more."
            );
        }
        HelpTopic::QueriesList => {
            println!(
                "\
USAGE:
  bookhive queries list

OPTIONS:
  -h, --help            Print help"
            );
        }
        HelpTopic::QueriesRun => {
            println!(
                "\
USAGE:
  bookhive queries run <id> [OPTIONS]

OPTIONS:
  --config <FILE>       Config file path (default: bookhive.toml if present)
  --delay-ms <MS>       Simulated latency (default: from config or 800)
  -h, --help            Print help"
            );
        }
        HelpTopic::Schema => {
            println!(
                "\
USAGE:
  bookhive schema [<database>]

DATABASES:
  uwindsor_library | windsor_plibrary | data_warehouse (default: all)

OPTIONS:
  -h, --help            Print help"
            );
        }
        HelpTopic::Init => {
            println!(
                "\
USAGE:
  bookhive init [--config <FILE>]

OPTIONS:
  --config <FILE>       Config file path (default: bookhive.toml)
  -h, --help            Print help"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        std::iter::once("bookhive")
            .chain(list.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn no_args_prints_root_help() {
        let cli = parse_args(&args(&[])).unwrap();
        assert!(matches!(cli.command, Command::Help(HelpTopic::Root)));
        assert!(!cli.verbose);
    }

    #[test]
    fn parse_generate_flags() {
        let cli = parse_args(&args(&[
            "-v",
            "generate",
            "--kind",
            "popular_books",
            "--time-frame=custom_quarter",
            "--year",
            "2022",
            "--quarter",
            "3",
            "--source",
            "UWindsor_Library",
            "--limit=25",
            "--author",
            "--publisher",
            "--json",
        ]))
        .unwrap();

        assert!(cli.verbose);
        let Command::Generate(g) = cli.command else {
            panic!("expected generate");
        };
        assert!(g.json);
        assert_eq!(g.query.kind, Some(QueryKind::PopularBooks));
        assert_eq!(g.query.time_frame, Some(TimeFrame::CustomQuarter));
        assert_eq!(g.query.year.as_deref(), Some("2022"));
        assert_eq!(g.query.quarter.as_deref(), Some("3"));
        assert_eq!(g.query.source, Some(SourceSystem::UWindsorLibrary));
        assert_eq!(g.query.limit, Some(25));
        assert!(g.query.author && g.query.publisher && !g.query.genre);
    }

    #[test]
    fn parse_generate_rejects_bad_values() {
        assert!(parse_args(&args(&["generate", "--kind", "top_books"])).is_err());
        assert!(parse_args(&args(&["generate", "--limit", "ten"])).is_err());
        assert!(parse_args(&args(&["generate", "--year"])).is_err());
        assert!(parse_args(&args(&["generate", "--bogus"])).is_err());
    }

    #[test]
    fn parse_run_with_delay() {
        let cli = parse_args(&args(&["run", "--kind", "loan_trends", "--delay-ms=0"])).unwrap();
        let Command::Run(r) = cli.command else {
            panic!("expected run");
        };
        assert_eq!(r.delay_ms, Some(0));
        assert_eq!(r.query.kind, Some(QueryKind::LoanTrends));
    }

    #[test]
    fn parse_queries_run() {
        let cli = parse_args(&args(&["queries", "run", "monthly_loans", "--delay-ms", "5"])).unwrap();
        let Command::Queries(QueriesCommand::Run(q)) = cli.command else {
            panic!("expected queries run");
        };
        assert_eq!(q.id, "monthly_loans");
        assert_eq!(q.delay_ms, Some(5));
        assert_eq!(q.config, None);
    }

    #[test]
    fn parse_queries_run_requires_id() {
        assert!(parse_args(&args(&["queries", "run"])).is_err());
    }

    #[test]
    fn parse_queries_sub_help() {
        let cli = parse_args(&args(&["queries", "run", "--help"])).unwrap();
        assert!(matches!(cli.command, Command::Help(HelpTopic::QueriesRun)));
    }

    #[test]
    fn parse_schema_and_init() {
        let cli = parse_args(&args(&["schema", "data_warehouse"])).unwrap();
        let Command::Schema(s) = cli.command else {
            panic!("expected schema");
        };
        assert_eq!(s.database.as_deref(), Some("data_warehouse"));

        let cli = parse_args(&args(&["init", "--config", "conf/bookhive.toml"])).unwrap();
        let Command::Init(i) = cli.command else {
            panic!("expected init");
        };
        assert_eq!(i.config, PathBuf::from("conf/bookhive.toml"));
    }

    #[test]
    fn unknown_command() {
        let err = parse_args(&args(&["migrate"])).unwrap_err();
        assert_eq!(err.to_string(), "unknown command: migrate");
    }
}
