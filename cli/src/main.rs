use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use cmdline_args_core::{
    ArgParser, ArgSource, OutputFormat, ParserConfig, format_result, get_boolean, parse_with,
};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "argv-inspect")]
#[command(about = "Inspect how raw command-line tokens are classified")]
struct Cli {
    /// Enable debug logging on stderr (RUST_LOG overrides).
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Parse tokens and print the classified result.
    Parse(ParseArgs),
    /// Parse tokens and coerce one option to a boolean.
    GetBool(GetBoolArgs),
    /// Write the default parser configuration as YAML.
    InitConfig(InitConfigArgs),
}

#[derive(Debug, Args)]
struct InputArgs {
    /// Parse a single line split on spaces instead of the trailing tokens.
    #[arg(long, conflicts_with = "tokens", allow_hyphen_values = true)]
    line: Option<String>,
    /// Parser configuration YAML file.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Tokens to parse (pass them after `--`).
    #[arg(last = true, allow_hyphen_values = true)]
    tokens: Vec<String>,
}

#[derive(Debug, Args)]
struct ParseArgs {
    #[command(flatten)]
    input: InputArgs,
    /// Output format.
    #[arg(long, default_value = "json")]
    format: OutputFormat,
}

#[derive(Debug, Args)]
struct GetBoolArgs {
    /// Option name to look up (long options first).
    key: String,
    /// Value returned when the option is absent or not a boolean word.
    #[arg(long)]
    default: bool,
    #[command(flatten)]
    input: InputArgs,
}

#[derive(Debug, Args)]
struct InitConfigArgs {
    /// Destination YAML path.
    #[arg(long)]
    output: PathBuf,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Command::Parse(args) => run_parse(args),
        Command::GetBool(args) => run_get_bool(args),
        Command::InitConfig(args) => run_init_config(args),
    };

    if let Err(err) = result {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

impl InputArgs {
    fn parser(&self) -> Result<ArgParser, String> {
        let config = match &self.config {
            Some(path) => ParserConfig::load(path)
                .map_err(|err| format!("Failed to load config '{}': {err}", path.display()))?,
            None => ParserConfig::default(),
        };
        debug!(?config, "parser configuration");
        Ok(ArgParser::new(config))
    }

    fn into_source(self) -> ArgSource {
        match self.line {
            Some(line) => ArgSource::Line(line),
            None => ArgSource::Tokens(self.tokens),
        }
    }
}

fn run_parse(args: ParseArgs) -> Result<(), String> {
    let parser = args.input.parser()?;
    let tokens = args.input.into_source().into_tokens();
    let result = parser.parse(&tokens);
    let rendered = format_result(&result, args.format).map_err(|err| err.to_string())?;
    print!("{rendered}");
    if !rendered.ends_with('\n') {
        println!();
    }
    Ok(())
}

fn run_get_bool(args: GetBoolArgs) -> Result<(), String> {
    let parser = args.input.parser()?;
    parse_with(&parser, args.input.into_source());
    println!("{}", get_boolean(&args.key, args.default));
    Ok(())
}

fn run_init_config(args: InitConfigArgs) -> Result<(), String> {
    ParserConfig::default()
        .save(&args.output)
        .map_err(|err| format!("Failed to write '{}': {err}", args.output.display()))?;
    eprintln!("Wrote {}", args.output.display());
    Ok(())
}
