use std::io::{self, BufRead};

use annexb::{MappedStream, NalUnitScanner};
use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use crate::report::{JsonReport, Report, Row, TableReport};

mod report;

/// Lists the NAL units of an H.264 Annex B elementary stream.
#[derive(Parser, Debug)]
#[command(version)]
struct Args {
    /// Elementary stream to scan, or `-` for stdin.
    #[arg(short, long)]
    file_path: String,

    /// Print a JSON array instead of the table.
    #[arg(long)]
    json: bool,

    /// Stop after this many units.
    #[arg(short = 'n', long)]
    limit: Option<usize>,

    /// Print per-type counts after the table.
    #[arg(long, conflicts_with = "json")]
    summary: bool,
}

fn dump<R: BufRead>(
    scanner: NalUnitScanner<R>,
    limit: Option<usize>,
    report: &mut dyn Report,
) -> Result<usize> {
    let mut count = 0;

    for (index, unit) in scanner.take(limit.unwrap_or(usize::MAX)).enumerate() {
        let unit = match unit {
            Ok(unit) => unit,
            Err(err) => {
                report.finish()?;
                return Err(err).with_context(|| format!("failed to scan nal unit {index}"));
            }
        };

        report.row(Row::new(index, &unit))?;
        count += 1;
    }

    report.finish()?;
    Ok(count)
}

fn main() -> Result<()> {
    env_logger::init();

    let Args {
        file_path,
        json,
        limit,
        summary,
    } = Args::parse();

    let stdout = io::stdout().lock();
    let mut report: Box<dyn Report> = match json {
        true => Box::new(JsonReport::new(stdout)),
        false => Box::new(TableReport::new(stdout, summary)),
    };

    let count = if file_path == "-" {
        dump(NalUnitScanner::new(io::stdin().lock()), limit, report.as_mut())?
    } else {
        let stream = MappedStream::from_file_path(&file_path)
            .with_context(|| format!("unable to open {file_path}"))?;
        dump(stream.units(), limit, report.as_mut())?
    };

    info!("{count} nal units listed from {file_path}");
    Ok(())
}
