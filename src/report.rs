//! Console output shared by the example binaries.

use crate::shape::Shape;
use crate::value::Value;
use crate::Transcript;
use colored::Colorize;
use log::LevelFilter;

/// Initialises `env_logger`. `RUST_LOG` still overrides the chosen level.
pub fn init_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    // A second call (e.g. from tests) keeps the first logger.
    let _ = env_logger::builder()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .try_init();
}

pub fn verbose_requested<I, S>(args: I) -> bool
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    args.into_iter()
        .any(|arg| matches!(arg.as_ref(), "-v" | "--verbose"))
}

pub fn heading(title: &str) -> String {
    format!("=== {} ===", title).bold().cyan().to_string()
}

/// One line per shape, e.g. `Shallow Copy: {"type":...}`.
///
/// `watched` is highlighted green when it still matches `expected`, red otherwise.
pub fn shape_line(label: &str, shape: &Shape, watched: &str, expected: f64) -> String {
    let marker = match shape.dimension(watched) {
        Some(actual) if actual == expected => format!("{watched} = {actual}").green(),
        Some(actual) => format!("{watched} = {actual}").red(),
        None => format!("{watched} missing").yellow(),
    };
    format!("{} {}  ({})", label_cell(label), shape, marker)
}

pub fn value_line(label: &str, value: &Value) -> String {
    format!("{} {}", label_cell(label), value)
}

fn label_cell(label: &str) -> String {
    format!("{:<14}", format!("{label}:")).bold().to_string()
}

pub fn print_transcript(title: &str, transcript: &Transcript) {
    println!("{}", heading(title));
    for line in transcript {
        println!("{}", line);
    }
    println!();
}
