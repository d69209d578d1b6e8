//! Command-line interface for fixturegen
//!
//! # Usage Examples
//!
//! ## Sampling
//! ```bash
//! # Ten values from the default integer pool
//! fixturegen sample integer --count 10
//!
//! # Zoned values from a config file, shown in a named zone
//! fixturegen --config pools.yaml sample zoned-date-time --zone Europe/Berlin
//! ```
//!
//! ## Strings
//! ```bash
//! # Reproducible strings of 4 to 8 characters from a custom alphabet
//! fixturegen --seed 7 string --length 4..8 --chars ACGT --count 3
//! ```
//!
//! ## Config File Format
//! ```yaml
//! integer:
//!   type: between
//!   lower: 18
//!   upper: 65
//! boolean:
//!   type: exactly
//!   value: true
//! ```

use anyhow::Context;
use chrono_tz::Tz;
use clap::{Parser, Subcommand, ValueEnum};
use fixturegen::config::range::parse_length_range;
use fixturegen::{Domain, FixtureRandom, RandomConfig};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "fixturegen")]
#[command(about = "Generate randomized fixture values from configurable pools")]
#[command(long_about = None)]
struct Cli {
    /// YAML file with per-domain pools (unspecified domains keep their defaults)
    #[arg(long, global = true, value_name = "PATH", env = "FIXTUREGEN_CONFIG")]
    config: Option<PathBuf>,

    /// Seed for reproducible output
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sample values from a domain's configured pool
    Sample {
        /// Domain to sample
        #[arg(value_enum)]
        domain: DomainArg,

        /// Number of values to print
        #[arg(long, default_value = "1")]
        count: usize,

        /// IANA zone for zoned-date-time values (e.g. "America/New_York")
        #[arg(long)]
        zone: Option<String>,
    },

    /// Generate strings
    String {
        /// Length range, e.g. "8", "2..8" or "2..=8" (default: configured pool)
        #[arg(long)]
        length: Option<String>,

        /// Characters to draw from (default: configured pool)
        #[arg(long)]
        chars: Option<String>,

        /// Number of strings to print
        #[arg(long, default_value = "1")]
        count: usize,
    },

    /// Generate version 4 UUIDs
    Uuid {
        /// Number of UUIDs to print
        #[arg(long, default_value = "1")]
        count: usize,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum DomainArg {
    StringLength,
    Character,
    Integer,
    Long,
    Float,
    Double,
    Boolean,
    Time,
    Date,
    DateTime,
    Instant,
    ZonedDateTime,
}

impl From<DomainArg> for Domain {
    fn from(arg: DomainArg) -> Self {
        match arg {
            DomainArg::StringLength => Domain::StringLength,
            DomainArg::Character => Domain::Character,
            DomainArg::Integer => Domain::Integer,
            DomainArg::Long => Domain::Long,
            DomainArg::Float => Domain::Float,
            DomainArg::Double => Domain::Double,
            DomainArg::Boolean => Domain::Boolean,
            DomainArg::Time => Domain::Time,
            DomainArg::Date => Domain::Date,
            DomainArg::DateTime => Domain::DateTime,
            DomainArg::Instant => Domain::Instant,
            DomainArg::ZonedDateTime => Domain::ZonedDateTime,
        }
    }
}

fn sample_domain(random: &FixtureRandom, domain: Domain, zone: Option<Tz>) -> String {
    let config = random.config();
    match domain {
        Domain::StringLength => random.sample(config.string_length()).to_string(),
        Domain::Character => random.character().to_string(),
        Domain::Integer => random.integer().to_string(),
        Domain::Long => random.long().to_string(),
        Domain::Float => random.float().to_string(),
        Domain::Double => random.double().to_string(),
        Domain::Boolean => random.boolean().to_string(),
        Domain::Time => random.time().to_string(),
        Domain::Date => random.date().to_string(),
        Domain::DateTime => random.date_time().to_string(),
        Domain::Instant => random.instant().to_rfc3339(),
        Domain::ZonedDateTime => match zone {
            Some(zone) => random.zoned_date_time_in(&zone).to_rfc3339(),
            None => random.zoned_date_time().to_rfc3339(),
        },
    }
}

fn main() -> anyhow::Result<()> {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

fn run() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => RandomConfig::from_file(path)
            .with_context(|| format!("Failed to load config from {path:?}"))?,
        None => RandomConfig::default(),
    };
    let mut random = FixtureRandom::with_config(config);
    if let Some(seed) = cli.seed {
        random = random.seeded(seed);
    }
    tracing::debug!(seed = ?random.seed(), "starting fixturegen");

    match cli.command {
        Commands::Sample {
            domain,
            count,
            zone,
        } => {
            let domain = Domain::from(domain);
            if zone.is_some() && domain != Domain::ZonedDateTime {
                anyhow::bail!("--zone only applies to zoned-date-time, not {domain}");
            }
            let zone = zone
                .map(|name| {
                    name.parse::<Tz>()
                        .map_err(|e| anyhow::anyhow!("Invalid --zone {name:?}: {e}"))
                })
                .transpose()?;
            for _ in 0..count {
                println!("{}", sample_domain(&random, domain, zone));
            }
        }
        Commands::String {
            length,
            chars,
            count,
        } => {
            let length = length
                .as_deref()
                .map(parse_length_range)
                .transpose()
                .context("Invalid --length")?;
            let chars: Option<Vec<char>> = chars.map(|c| c.chars().collect());

            for _ in 0..count {
                let value = random
                    .string_with(
                        |b| {
                            if let Some((min, max)) = length {
                                b.between(min..=max);
                            }
                        },
                        |b| {
                            if let Some(chars) = &chars {
                                b.one_of(chars.iter().copied());
                            }
                        },
                    )
                    .context("Failed to generate string")?;
                println!("{value}");
            }
        }
        Commands::Uuid { count } => {
            for _ in 0..count {
                println!("{}", random.uuid());
            }
        }
    }

    Ok(())
}
