//! Purpose: `arith` CLI entry point.
//! Role: Binary crate root; parses args, runs the demo or one operation, prints results on stdout.
//! Invariants: Bare `arith` prints the fixed demo and exits 0.
//! Invariants: Non-interactive errors are emitted as JSON on stderr.
//! Invariants: Process exit code is derived from `arith::to_exit_code`.
use std::error::Error as StdError;
use std::ffi::OsString;
use std::io::{self, IsTerminal};

use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum, error::ErrorKind as ClapErrorKind};
use clap_complete::aot::Shell;
use serde::Serialize;
use serde_json::{Map, Value, json};
use tracing_subscriber::EnvFilter;

use arith::{Error, ErrorKind, to_exit_code};

mod command_dispatch;
mod demo;

fn main() {
    init_tracing();
    let exit_code = match run(std::env::args_os()) {
        Ok(()) => 0,
        Err((err, color_mode)) => {
            emit_error(&err, color_mode);
            to_exit_code(err.kind())
        }
    };
    std::process::exit(exit_code);
}

fn run<I>(args: I) -> Result<(), (Error, ColorMode)>
where
    I: IntoIterator<Item = OsString>,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(err) => match err.kind() {
            ClapErrorKind::DisplayHelp | ClapErrorKind::DisplayVersion => {
                err.print().map_err(|io_err| {
                    (
                        Error::new(ErrorKind::Io)
                            .with_message("failed to write help")
                            .with_source(io_err),
                        ColorMode::Auto,
                    )
                })?;
                return Ok(());
            }
            _ => {
                return Err((
                    Error::new(ErrorKind::Usage)
                        .with_message(usage_message(&err))
                        .with_hint("Try `arith --help`."),
                    ColorMode::Auto,
                ));
            }
        },
    };

    command_dispatch::dispatch_command(cli.command.unwrap_or(Command::Demo))
        .map_err(|err| (err, cli.color))
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

#[derive(Parser)]
#[command(
    name = "arith",
    version,
    about = "Basic arithmetic and a greeting",
    long_about = None,
    after_help = r#"EXAMPLES
  $ arith                      # print the demo
  $ arith add 5 3
  $ arith divide 5 3 --json
  $ arith divide 5 0           # exits 3"#
)]
struct Cli {
    #[arg(
        long,
        global = true,
        default_value = "auto",
        help = "Colorize human error output: auto, always, never"
    )]
    color: ColorMode,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum ColorMode {
    Auto,
    Always,
    Never,
}

impl ColorMode {
    fn use_color(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

#[derive(Subcommand)]
enum Command {
    #[command(about = "Print the demonstration output (default)")]
    Demo,
    #[command(about = "Print the greeting")]
    Greet {
        #[arg(long, help = "Emit JSON instead of plain text")]
        json: bool,
    },
    #[command(about = "Add two numbers")]
    Add(Operands),
    #[command(about = "Subtract B from A")]
    Subtract(Operands),
    #[command(about = "Multiply two numbers")]
    Multiply(Operands),
    #[command(about = "Divide A by B (real division; B must be non-zero)")]
    Divide(Operands),
    #[command(about = "Generate shell completion scripts")]
    Completion {
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Args, Debug, Clone, Copy)]
struct Operands {
    #[arg(allow_negative_numbers = true, help = "Left operand")]
    a: f64,
    #[arg(allow_negative_numbers = true, help = "Right operand")]
    b: f64,
    #[arg(long, help = "Emit JSON instead of plain text")]
    json: bool,
}

#[derive(Debug, Serialize)]
struct OperationOutput {
    op: &'static str,
    a: f64,
    b: f64,
    result: f64,
}

// Pretty when a person is reading; one compact line for pipes.
fn emit_json(value: Value) {
    let encoded = if io::stdout().is_terminal() {
        serde_json::to_string_pretty(&value)
    } else {
        serde_json::to_string(&value)
    };
    let json = encoded.unwrap_or_else(|_| "{\"error\":\"json encode failed\"}".to_string());
    println!("{json}");
}

fn emit_operation(output: OperationOutput, json: bool) -> Result<(), Error> {
    if !json {
        println!("{}", output.result);
        return Ok(());
    }
    let value = serde_json::to_value(&output).map_err(|err| {
        Error::new(ErrorKind::Internal)
            .with_message("failed to encode result")
            .with_operation(output.op)
            .with_source(err)
    })?;
    emit_json(value);
    Ok(())
}

fn paint(label: &str, code: &str, enabled: bool) -> String {
    if enabled {
        format!("\u{1b}[{code}m{label}\u{1b}[0m")
    } else {
        label.to_string()
    }
}

fn emit_error(err: &Error, color_mode: ColorMode) {
    let is_tty = io::stderr().is_terminal();
    let rendered = if is_tty {
        error_text(err, color_mode.use_color(is_tty))
    } else {
        serde_json::to_string(&error_json(err)).unwrap_or_else(|_| {
            "{\"error\":{\"kind\":\"Internal\",\"message\":\"json encode failed\"}}".to_string()
        })
    };
    eprintln!("{rendered}");
}

fn error_message(err: &Error) -> &str {
    err.message().unwrap_or(match err.kind() {
        ErrorKind::Internal => "internal error",
        ErrorKind::Usage => "usage error",
        ErrorKind::DivisionByZero => "division by zero",
        ErrorKind::Io => "i/o error",
    })
}

// Errors here wrap at most one underlying failure (a clap, serde_json, or io error).
fn error_cause(err: &Error) -> Option<String> {
    err.source().map(|source| source.to_string())
}

fn error_json(err: &Error) -> Value {
    let mut inner = Map::new();
    inner.insert("kind".to_string(), json!(format!("{:?}", err.kind())));
    inner.insert("message".to_string(), json!(error_message(err)));
    if let Some(hint) = err.hint() {
        inner.insert("hint".to_string(), json!(hint));
    }
    if let Some(operation) = err.operation() {
        inner.insert("op".to_string(), json!(operation));
    }
    if let Some(cause) = error_cause(err) {
        inner.insert("cause".to_string(), json!(cause));
    }
    json!({ "error": inner })
}

fn error_text(err: &Error, use_color: bool) -> String {
    let mut text = format!("{} {}", paint("error:", "31", use_color), error_message(err));
    if let Some(hint) = err.hint() {
        text.push_str(&format!("\n{} {hint}", paint("hint:", "33", use_color)));
    }
    if let Some(cause) = error_cause(err) {
        text.push_str(&format!("\n{} {cause}", paint("caused by:", "33", use_color)));
    }
    text
}

/// First non-empty line of a clap error, without its `error:` prefix.
fn usage_message(err: &clap::Error) -> String {
    err.to_string()
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .map(|line| line.strip_prefix("error:").unwrap_or(line).trim().to_string())
        .unwrap_or_else(|| "invalid arguments".to_string())
}
