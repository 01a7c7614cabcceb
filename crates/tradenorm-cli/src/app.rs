use std::ffi::OsString;
use std::io::{Read, Write};

use clap::error::ErrorKind;
use clap::Parser;
use tradenorm_core::{
    write_records, Currency, ExchangeRegistry, NormalizeReport, OrderBook, Pipeline,
    PipelineError,
};

use crate::cli::{self, Cli};
use crate::error::CliError;
use crate::logging;

pub const PROGRAM: &str = "tradenorm";

pub fn invalid_usage(registry: &ExchangeRegistry) -> CliError {
    CliError::InvalidUsage {
        usage: cli::usage(PROGRAM, &registry.names()),
    }
}

/// Parses the command line. Any argument error is reported as the usage error
/// rather than clap's own message.
pub fn parse_args<I, T>(args: I, registry: &ExchangeRegistry) -> Result<Cli, CliError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    Cli::try_parse_from(args).map_err(|error| match error.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => CliError::Informational(error),
        _ => invalid_usage(registry),
    })
}

/// Full invocation: parse `args`, install logging, run, and report failures to `stderr`.
///
/// Returns the process exit status.
pub fn execute<I, T, R, W, E>(
    args: I,
    pipeline: &Pipeline,
    input: R,
    output: W,
    mut stderr: E,
) -> u8
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    R: Read,
    W: Write,
    E: Write,
{
    let cli = match parse_args(args, pipeline.registry()) {
        Ok(cli) => cli,
        Err(error) => return report_failure(&error, &mut stderr),
    };

    logging::init(cli.log_level);

    match run(&cli, pipeline, input, output) {
        Ok(report) => {
            tracing::info!(
                records = report.records.len(),
                skipped = report.skipped(),
                "completed successfully"
            );
            0
        }
        Err(error) => report_failure(&error, &mut stderr),
    }
}

fn report_failure<E: Write>(error: &CliError, stderr: &mut E) -> u8 {
    match (error, error.usage()) {
        (CliError::Informational(info), _) => {
            let _ = info.print();
        }
        (_, Some(usage)) => {
            let _ = writeln!(stderr, "error: {error}");
            let _ = writeln!(stderr, "{usage}");
        }
        (_, None) => tracing::error!(%error, "aborting"),
    }

    error.exit_code()
}

/// Validates the arguments, normalizes `input` and writes the CSV to `output`.
///
/// Nothing is written when the arguments are rejected.
pub fn run<R: Read, W: Write>(
    cli: &Cli,
    pipeline: &Pipeline,
    input: R,
    output: W,
) -> Result<NormalizeReport, CliError> {
    let registry = pipeline.registry();
    if !registry.contains(&cli.exchange) {
        return Err(CliError::InvalidExchange {
            exchange: cli.exchange.clone(),
            usage: cli::usage(PROGRAM, &registry.names()),
        });
    }

    let book = OrderBook::new(
        Currency::parse(&cli.base_currency)?,
        Currency::parse(&cli.quote_currency)?,
    );
    tracing::debug!(
        exchange = %cli.exchange,
        base = %book.base_currency,
        quote = %book.quote_currency,
        "normalizing export"
    );

    let report = pipeline.run(&cli.exchange, &book, input)?;
    write_records(output, &report.records).map_err(PipelineError::Write)?;

    Ok(report)
}
