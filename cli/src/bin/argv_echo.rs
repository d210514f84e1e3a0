//! Prints how this process's own arguments are classified.
//!
//! Handy for checking what a shell actually hands over:
//! `argv-echo --name=Jan\ Kowalski -xv file`.

use cmdline_args_core::{OutputFormat, format_result, parse_env};
use tracing_subscriber::EnvFilter;

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = parse_env();
    match format_result(&result, OutputFormat::Json) {
        Ok(json) => println!("{json}"),
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    }
}
