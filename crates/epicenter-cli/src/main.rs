use std::io::{self, Read, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use epicenter::{convert, convert_filtered, Continent, EventFilter};

#[derive(Debug, Parser)]
#[command(
    name = "epicenter",
    version,
    about = "Convert QuakeML seismic event feeds to map-ready JSON"
)]
struct Args {
    /// Input file (defaults to stdin)
    #[arg(value_name = "INPUT")]
    input: Option<PathBuf>,
    /// Output file (defaults to stdout)
    #[arg(short, long, value_name = "OUTPUT")]
    output: Option<PathBuf>,
    /// Keep only events with magnitude >= this value
    #[arg(long, value_name = "MAG")]
    min_magnitude: Option<f64>,
    /// Keep only events with magnitude <= this value
    #[arg(long, value_name = "MAG")]
    max_magnitude: Option<f64>,
    /// Keep only events whose epicenter falls on this continent
    #[arg(long, value_enum, value_name = "CONTINENT")]
    continent: Option<ContinentArg>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ContinentArg {
    Africa,
    Antarctica,
    Asia,
    Oceania,
    Europe,
    America,
}

impl From<ContinentArg> for Continent {
    fn from(value: ContinentArg) -> Self {
        match value {
            ContinentArg::Africa => Self::Africa,
            ContinentArg::Antarctica => Self::Antarctica,
            ContinentArg::Asia => Self::Asia,
            ContinentArg::Oceania => Self::Oceania,
            ContinentArg::Europe => Self::Europe,
            ContinentArg::America => Self::America,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .without_time()
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let input = read_input(&args.input)?;
    let filter = EventFilter {
        min_magnitude: args.min_magnitude,
        max_magnitude: args.max_magnitude,
        continent: args.continent.map(Continent::from),
    };

    // Malformed XML still produces the `{}` sentinel on stdout with a
    // zero exit code; only I/O failures are reported as errors.
    let json = if filter.is_active() {
        convert_filtered(&input, &filter)
    } else {
        convert(&input)
    };

    write_output(&args.output, json.as_bytes())?;
    Ok(())
}

fn read_input(path: &Option<PathBuf>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read input file {}", path.display())),
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read stdin")?;
            Ok(buffer)
        }
    }
}

fn write_output(path: &Option<PathBuf>, data: &[u8]) -> Result<()> {
    match path {
        Some(path) => std::fs::write(path, data)
            .with_context(|| format!("failed to write output file {}", path.display())),
        None => {
            let mut stdout = io::stdout();
            stdout.write_all(data).context("failed to write stdout")?;
            Ok(())
        }
    }
}
