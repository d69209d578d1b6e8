//! Per-domain default pools.
//!
//! A [`RandomConfig`] holds one [`Pool`] for each of the twelve [`Domain`]s.
//! It is built once, either programmatically through [`RandomConfigBuilder`]
//! or from a YAML file, and is immutable afterwards. Any domain left
//! unspecified falls back to the platform default:
//!
//! | domain | default |
//! |---|---|
//! | string length | `1..=10` |
//! | character | `a-z`, `A-Z`, `0-9` |
//! | integer, long | `0..=100` |
//! | float, double | `0.0..100.0` |
//! | boolean | `true`, `false` |
//! | time | `00:00:00..=23:59:59` |
//! | date, date-time, instant, zoned | 1970-01-01 to 2100-12-31 |
//!
//! ```yaml
//! integer:
//!   type: between
//!   lower: 18
//!   upper: 65
//! character:
//!   type: one_of_multiple
//!   sets: [["a", "b"], ["x"]]
//! ```

mod file;
pub mod range;

pub use file::RandomConfigFile;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use fixture_core::{Domain, Pool, PoolBuilder, PoolError, PoolValue};
use fixture_generator::generators::temporal;
use fixture_generator::TypeOverrides;
use std::path::Path;
use tracing::debug;

/// Errors raised while building a [`RandomConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid pool for domain '{domain}': {source}")]
    Pool {
        domain: Domain,
        #[source]
        source: PoolError,
    },
}

/// Immutable set of default pools, one per domain.
#[derive(Debug, Clone, PartialEq)]
pub struct RandomConfig {
    string_length: Pool<usize>,
    character: Pool<char>,
    integer: Pool<i32>,
    long: Pool<i64>,
    float: Pool<f32>,
    double: Pool<f64>,
    boolean: Pool<bool>,
    time: Pool<NaiveTime>,
    date: Pool<NaiveDate>,
    date_time: Pool<NaiveDateTime>,
    instant: Pool<DateTime<Utc>>,
    zoned_date_time: Pool<DateTime<FixedOffset>>,
}

// Bounds passed here are constants known to be ordered.
fn default_range<T: PoolValue>(lower: T, upper: T) -> Pool<T> {
    Pool::between(lower.clone(), upper).unwrap_or_else(|_| Pool::unique(lower))
}

impl Default for RandomConfig {
    fn default() -> Self {
        let (time_lower, time_upper) = temporal::time_bounds();
        let (date_lower, date_upper) = temporal::date_bounds();
        let (date_time_lower, date_time_upper) = temporal::date_time_bounds();
        let (instant_lower, instant_upper) = temporal::instant_bounds();
        let (zoned_lower, zoned_upper) = temporal::zoned_bounds();

        Self {
            string_length: default_range(1, 10),
            character: Pool::one_of_multiple(['a'..='z', 'A'..='Z', '0'..='9'])
                .unwrap_or_else(|_| Pool::unique('a')),
            integer: default_range(0, 100),
            long: default_range(0, 100),
            float: default_range(0.0, 100.0),
            double: default_range(0.0, 100.0),
            boolean: Pool::one_of([true, false]).unwrap_or_else(|_| Pool::unique(false)),
            time: default_range(time_lower, time_upper),
            date: default_range(date_lower, date_upper),
            date_time: default_range(date_time_lower, date_time_upper),
            instant: default_range(instant_lower, instant_upper),
            zoned_date_time: default_range(zoned_lower, zoned_upper),
        }
    }
}

impl RandomConfig {
    pub fn builder() -> RandomConfigBuilder {
        RandomConfigBuilder::default()
    }

    /// Parse a YAML document of per-domain pool specs.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let file: RandomConfigFile = serde_yaml::from_str(yaml)?;
        file.into_builder().build()
    }

    /// Read and parse a YAML config file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_yaml(&content)
    }

    pub fn string_length(&self) -> &Pool<usize> {
        &self.string_length
    }

    pub fn character(&self) -> &Pool<char> {
        &self.character
    }

    pub fn integer(&self) -> &Pool<i32> {
        &self.integer
    }

    pub fn long(&self) -> &Pool<i64> {
        &self.long
    }

    pub fn float(&self) -> &Pool<f32> {
        &self.float
    }

    pub fn double(&self) -> &Pool<f64> {
        &self.double
    }

    pub fn boolean(&self) -> &Pool<bool> {
        &self.boolean
    }

    pub fn time(&self) -> &Pool<NaiveTime> {
        &self.time
    }

    pub fn date(&self) -> &Pool<NaiveDate> {
        &self.date
    }

    pub fn date_time(&self) -> &Pool<NaiveDateTime> {
        &self.date_time
    }

    pub fn instant(&self) -> &Pool<DateTime<Utc>> {
        &self.instant
    }

    pub fn zoned_date_time(&self) -> &Pool<DateTime<FixedOffset>> {
        &self.zoned_date_time
    }

    /// Per-type overrides for the object randomizer, one per scalar domain.
    ///
    /// The string-length pool has no scalar type of its own and is not
    /// included.
    pub fn to_type_overrides(&self) -> TypeOverrides {
        let mut overrides = TypeOverrides::new();
        overrides
            .register(self.character.clone())
            .register(self.integer.clone())
            .register(self.long.clone())
            .register(self.float.clone())
            .register(self.double.clone())
            .register(self.boolean.clone())
            .register(self.time.clone())
            .register(self.date.clone())
            .register(self.date_time.clone())
            .register(self.instant.clone())
            .register(self.zoned_date_time.clone());
        overrides
    }
}

/// Collects an optional [`PoolBuilder`] block per domain.
///
/// Calling a domain method again replaces that domain's earlier block.
///
/// ```rust
/// use fixturegen::RandomConfig;
///
/// let mut builder = RandomConfig::builder();
/// builder
///     .integer(|b| {
///         b.between(1..=6);
///     })
///     .boolean(|b| {
///         b.exactly(true);
///     });
/// let config = builder.build().unwrap();
/// assert!((1..=6).contains(&config.integer().random()));
/// assert!(config.boolean().random());
/// ```
#[derive(Debug, Clone, Default)]
pub struct RandomConfigBuilder {
    string_length: PoolBuilder<usize>,
    character: PoolBuilder<char>,
    integer: PoolBuilder<i32>,
    long: PoolBuilder<i64>,
    float: PoolBuilder<f32>,
    double: PoolBuilder<f64>,
    boolean: PoolBuilder<bool>,
    time: PoolBuilder<NaiveTime>,
    date: PoolBuilder<NaiveDate>,
    date_time: PoolBuilder<NaiveDateTime>,
    instant: PoolBuilder<DateTime<Utc>>,
    zoned_date_time: PoolBuilder<DateTime<FixedOffset>>,
}

fn configured<T: PoolValue>(block: impl FnOnce(&mut PoolBuilder<T>)) -> PoolBuilder<T> {
    let mut builder = PoolBuilder::new();
    block(&mut builder);
    builder
}

fn resolve_or_default<T: PoolValue>(
    domain: Domain,
    builder: PoolBuilder<T>,
    default: Pool<T>,
) -> Result<Pool<T>, ConfigError> {
    match builder
        .resolve()
        .map_err(|source| ConfigError::Pool { domain, source })?
    {
        Some(pool) => Ok(pool),
        None => {
            debug!(%domain, "using default pool");
            Ok(default)
        }
    }
}

impl RandomConfigBuilder {
    pub fn string_length(&mut self, block: impl FnOnce(&mut PoolBuilder<usize>)) -> &mut Self {
        self.string_length = configured(block);
        self
    }

    pub fn character(&mut self, block: impl FnOnce(&mut PoolBuilder<char>)) -> &mut Self {
        self.character = configured(block);
        self
    }

    pub fn integer(&mut self, block: impl FnOnce(&mut PoolBuilder<i32>)) -> &mut Self {
        self.integer = configured(block);
        self
    }

    pub fn long(&mut self, block: impl FnOnce(&mut PoolBuilder<i64>)) -> &mut Self {
        self.long = configured(block);
        self
    }

    pub fn float(&mut self, block: impl FnOnce(&mut PoolBuilder<f32>)) -> &mut Self {
        self.float = configured(block);
        self
    }

    pub fn double(&mut self, block: impl FnOnce(&mut PoolBuilder<f64>)) -> &mut Self {
        self.double = configured(block);
        self
    }

    pub fn boolean(&mut self, block: impl FnOnce(&mut PoolBuilder<bool>)) -> &mut Self {
        self.boolean = configured(block);
        self
    }

    pub fn time(&mut self, block: impl FnOnce(&mut PoolBuilder<NaiveTime>)) -> &mut Self {
        self.time = configured(block);
        self
    }

    pub fn date(&mut self, block: impl FnOnce(&mut PoolBuilder<NaiveDate>)) -> &mut Self {
        self.date = configured(block);
        self
    }

    pub fn date_time(&mut self, block: impl FnOnce(&mut PoolBuilder<NaiveDateTime>)) -> &mut Self {
        self.date_time = configured(block);
        self
    }

    pub fn instant(&mut self, block: impl FnOnce(&mut PoolBuilder<DateTime<Utc>>)) -> &mut Self {
        self.instant = configured(block);
        self
    }

    pub fn zoned_date_time(
        &mut self,
        block: impl FnOnce(&mut PoolBuilder<DateTime<FixedOffset>>),
    ) -> &mut Self {
        self.zoned_date_time = configured(block);
        self
    }

    /// Resolve every block, substituting the default for unspecified domains.
    pub fn build(self) -> Result<RandomConfig, ConfigError> {
        let defaults = RandomConfig::default();
        Ok(RandomConfig {
            string_length: resolve_or_default(
                Domain::StringLength,
                self.string_length,
                defaults.string_length,
            )?,
            character: resolve_or_default(Domain::Character, self.character, defaults.character)?,
            integer: resolve_or_default(Domain::Integer, self.integer, defaults.integer)?,
            long: resolve_or_default(Domain::Long, self.long, defaults.long)?,
            float: resolve_or_default(Domain::Float, self.float, defaults.float)?,
            double: resolve_or_default(Domain::Double, self.double, defaults.double)?,
            boolean: resolve_or_default(Domain::Boolean, self.boolean, defaults.boolean)?,
            time: resolve_or_default(Domain::Time, self.time, defaults.time)?,
            date: resolve_or_default(Domain::Date, self.date, defaults.date)?,
            date_time: resolve_or_default(Domain::DateTime, self.date_time, defaults.date_time)?,
            instant: resolve_or_default(Domain::Instant, self.instant, defaults.instant)?,
            zoned_date_time: resolve_or_default(
                Domain::ZonedDateTime,
                self.zoned_date_time,
                defaults.zoned_date_time,
            )?,
        })
    }
}
