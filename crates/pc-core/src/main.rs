//! problem-courier - ships crash reports into the systemd journal.
//!
//! The pipeline, in order:
//! - load the problem directory into a problem-data store
//! - resolve and render the report template (summary + description)
//! - reshape the data for journal consumption
//! - assemble the `KEY=value` records for one structured entry
//! - deliver the records atomically over the native journal socket

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, info};

use pc_journal::{DumpMode, EntryAssembler, JournalSink, JournalSocket, Record, RecordBuffer};
use pc_problem::ProblemData;
use pc_report::{load_resolved, Report};

mod error;
mod logging;
mod output;
mod prepare;

use error::CourierError;
use logging::{generate_run_id, init_logging, LogLevel};
use output::OutputFormat;

/// Ship a problem report into the systemd journal as one structured entry
#[derive(Parser, Debug)]
#[command(name = "problem-courier")]
#[command(author, version, long_about = None)]
struct Cli {
    /// Problem directory to report
    #[arg(short = 'd', long, value_name = "DIR", default_value = ".")]
    problem_dir: PathBuf,

    /// Catalog message id attached to the entry
    #[arg(short = 'm', long, value_name = "ID")]
    message_id: Option<String>,

    /// Format file describing the report layout
    #[arg(short = 'F', long, value_name = "FILE")]
    format_file: Option<PathBuf>,

    /// Problem elements mirrored into the entry: NONE, ESSENTIAL, or FULL
    #[arg(
        short = 'p',
        long = "dump",
        value_name = "MODE",
        default_value = "NONE",
        env = "PROBLEM_COURIER_DUMP"
    )]
    dump: DumpMode,

    /// Print the rendered report to stdout and send nothing
    #[arg(short = 'D', long)]
    debug: bool,

    /// Assemble the entry and print it to stdout instead of sending
    #[arg(long)]
    dry_run: bool,

    /// Output format for --debug and --dry-run payloads
    #[arg(short = 'f', long, default_value = "text")]
    format: OutputFormat,

    /// Alternate journal socket (e.g. a journal namespace)
    #[arg(long, value_name = "PATH", env = "PROBLEM_COURIER_SOCKET")]
    socket: Option<PathBuf>,

    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(LogLevel::from_verbosity(cli.verbose));

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("problem-courier: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), CourierError> {
    let run_id = generate_run_id();
    info!(run_id = %run_id, dir = %cli.problem_dir.display(), "starting problem report");

    let mut data = ProblemData::load_dir(&cli.problem_dir)?;

    let (template, source) = load_resolved(cli.format_file.as_deref())?;
    debug!(source = %source, "format template resolved");

    prepare::adjust_for_journal(&mut data);
    let report = template.render(&data, &prepare::journal_settings());

    if cli.debug {
        print_report(&report, cli.format);
        return Ok(());
    }

    let mut assembler = EntryAssembler::new(&data, &report).with_dump_mode(cli.dump);
    if let Some(message_id) = &cli.message_id {
        assembler = assembler.with_message_id(message_id);
    }
    let buffer = assembler.assemble();

    if cli.dry_run {
        print_entry(&buffer, cli.format);
        return Ok(());
    }

    let sink = match &cli.socket {
        Some(path) => JournalSocket::at(path),
        None => JournalSocket::system(),
    };
    sink.send(&buffer)?;
    info!(records = buffer.len(), "problem report sent to journal");
    Ok(())
}

fn print_report(report: &Report, format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(report).unwrap());
        }
        OutputFormat::Text => {
            println!("Message: {}", report.summary);
            if let Some(description) = &report.description {
                println!();
                println!("{description}");
            }
        }
    }
}

fn print_entry(buffer: &RecordBuffer, format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            let records: Vec<&str> = buffer.iter().map(Record::as_str).collect();
            let payload = serde_json::json!({
                "count": buffer.len(),
                "records": records,
            });
            println!("{}", serde_json::to_string_pretty(&payload).unwrap());
        }
        OutputFormat::Text => {
            for record in buffer {
                println!("{record}");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["problem-courier"]);
        assert_eq!(cli.problem_dir, PathBuf::from("."));
        assert_eq!(cli.dump, DumpMode::None);
        assert_eq!(cli.format, OutputFormat::Text);
        assert!(!cli.debug);
        assert!(!cli.dry_run);
    }

    #[test]
    fn test_dump_mode_parsing_is_case_sensitive() {
        let ok = Cli::try_parse_from(["problem-courier", "--dump", "FULL"]);
        assert!(ok.is_ok());
        let err = Cli::try_parse_from(["problem-courier", "--dump", "full"]);
        assert!(err.is_err());
    }
}
