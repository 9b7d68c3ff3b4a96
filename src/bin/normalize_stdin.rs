//! Reads Sitecore content JSON from stdin and writes the normalized JSON to
//! stdout. Diagnostics go to stderr (filter with `RUST_LOG`).
//!
//! Usage: `normalize_stdin [--mode jss|layout|gql|gql-response] [--host <prefix>]`

use std::env;
use std::io::{self, Read};
use std::process;

use rs_jss_data::types::GqlItemResponse;
use rs_jss_data::{parse_gql_item, parse_jss_item, parse_layout, DataProcessor, Options, Result};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    /// A single JSS item or rendering.
    Jss,
    /// A full layout service response; the route is normalized.
    Layout,
    /// A bare GraphQL item.
    Gql,
    /// A GraphQL response envelope, `{ "data": { "item": ... } }`.
    GqlResponse,
}

struct Args {
    mode: Mode,
    options: Options,
}

fn parse_args() -> std::result::Result<Args, String> {
    let mut mode = Mode::Jss;
    let mut options = Options::default();
    let mut args = env::args().skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--mode" => {
                let value = args.next().ok_or("--mode needs a value")?;
                mode = match value.as_str() {
                    "jss" => Mode::Jss,
                    "layout" => Mode::Layout,
                    "gql" => Mode::Gql,
                    "gql-response" => Mode::GqlResponse,
                    other => return Err(format!("unknown mode {other:?}")),
                };
            }
            "--host" => {
                options.host = args.next().ok_or("--host needs a value")?;
            }
            "--keep-system-fields" => options.skip_system_fields = false,
            other => return Err(format!("unknown argument {other:?}")),
        }
    }

    Ok(Args { mode, options })
}

fn run(input: &str, args: &Args) -> Result<String> {
    args.options.validate()?;
    let processor = DataProcessor::new(args.options.clone());

    let output = match args.mode {
        Mode::Jss => {
            let item = parse_jss_item(input)?;
            serde_json::to_string_pretty(&processor.process_jss_item(Some(&item)))?
        }
        Mode::Layout => {
            let layout = parse_layout(input)?;
            let route = layout.sitecore.route.as_ref().map(|route| processor.process_jss_route(route));
            serde_json::to_string_pretty(&route)?
        }
        Mode::Gql => {
            let item = parse_gql_item(input)?;
            serde_json::to_string_pretty(&processor.process_gql_data(&item))?
        }
        Mode::GqlResponse => {
            let response: GqlItemResponse = serde_json::from_str(input)?;
            let item = response.data.item.as_ref().map(|item| processor.process_gql_data(item));
            serde_json::to_string_pretty(&item)?
        }
    };

    Ok(output)
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    let args = match parse_args() {
        Ok(args) => args,
        Err(msg) => {
            eprintln!("normalize_stdin: {msg}");
            eprintln!("usage: normalize_stdin [--mode jss|layout|gql|gql-response] [--host <prefix>] [--keep-system-fields]");
            process::exit(2);
        }
    };

    // Read JSON from stdin
    let mut input = String::new();
    if io::stdin().read_to_string(&mut input).is_err() {
        eprintln!("Failed to read from stdin");
        process::exit(1);
    }

    match run(&input, &args) {
        Ok(output) => println!("{output}"),
        Err(err) => {
            eprintln!("normalize_stdin: {err}");
            process::exit(1);
        }
    }
}
