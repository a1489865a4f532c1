use clap::{Parser, Subcommand};
use shimkit::outcome::Outcome;
use shimkit::params::Params;
use shimkit::{output, registry};
use std::io::{Read, Write};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "shimkit")]
#[command(about = "Run named shim operations from the command line")]
#[command(long_about = "\
Run named shim operations from the command line

Parameters are key=value pairs; values stay strings, exactly like template
tag attributes. Raw body content (for shims that accept it, like
json_response) comes from --body or stdin via --body-stdin.

Examples:

  shimkit run crop_image in=raw.jpg out=cropped.jpg scale=50
  shimkit run json_response addon=shimkit
  echo '{\"a\": 1}' | shimkit run json_response --body-stdin

Exit codes: 0 on success, 1 when the shim reports errors, 2 for an unknown
shim name.")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run a shim by name with key=value parameters
    Run {
        /// Shim name, with or without the shim_ prefix
        name: String,
        /// Parameters as key=value (values are strings, like tag attributes)
        #[arg(value_name = "KEY=VALUE")]
        params: Vec<String>,
        /// Raw body content passed to shims that accept it
        #[arg(long)]
        body: Option<String>,
        /// Read raw body content from stdin
        #[arg(long, conflicts_with = "body")]
        body_stdin: bool,
        /// Print status and content-type lines before a response body
        #[arg(long)]
        include_headers: bool,
    },
    /// List registered shims
    List,
}

fn main() -> ExitCode {
    match Cli::parse().command {
        Command::Run {
            name,
            params,
            body,
            body_stdin,
            include_headers,
        } => run_shim(&name, &params, body, body_stdin, include_headers),
        Command::List => {
            for name in registry::global().names() {
                println!("{name}");
            }
            ExitCode::SUCCESS
        }
    }
}

fn run_shim(
    name: &str,
    pairs: &[String],
    body: Option<String>,
    body_stdin: bool,
    include_headers: bool,
) -> ExitCode {
    let mut params = Params::new();
    for pair in pairs {
        match Params::parse_pair(pair) {
            Some((key, value)) => params.insert(key, value),
            None => {
                eprintln!("Ignoring malformed parameter (expected key=value): {pair}");
            }
        }
    }

    let Some(mut handle) = registry::global().resolve(name, params, None, None) else {
        eprintln!("Unknown shim: {name}");
        return ExitCode::from(2);
    };

    let body = if body_stdin { read_stdin() } else { body };
    if let Some(body) = body {
        handle.set_body(body);
    }

    match handle.execute() {
        Outcome::Respond(response) => {
            if include_headers {
                output::print_response_headers(&response);
                println!();
            }
            let mut stdout = std::io::stdout();
            if stdout.write_all(&response.body).is_err() {
                return ExitCode::FAILURE;
            }
            let _ = stdout.write_all(b"\n");
            if (200..300).contains(&response.status) {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        Outcome::Completed => {
            if handle.has_errors() {
                output::print_errors(handle.errors());
                ExitCode::FAILURE
            } else {
                println!("{}", output::format_success(handle.success_data()));
                ExitCode::SUCCESS
            }
        }
    }
}

fn read_stdin() -> Option<String> {
    let mut buffer = String::new();
    match std::io::stdin().read_to_string(&mut buffer) {
        Ok(_) => Some(buffer),
        Err(e) => {
            eprintln!("Failed to read body from stdin: {e}");
            None
        }
    }
}
