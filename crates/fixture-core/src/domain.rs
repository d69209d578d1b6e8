//! Semantic domains that carry a configurable default pool.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the twelve semantic categories of randomized value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Domain {
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

impl Domain {
    /// All domains, in configuration order.
    pub const ALL: [Domain; 12] = [
        Domain::StringLength,
        Domain::Character,
        Domain::Integer,
        Domain::Long,
        Domain::Float,
        Domain::Double,
        Domain::Boolean,
        Domain::Time,
        Domain::Date,
        Domain::DateTime,
        Domain::Instant,
        Domain::ZonedDateTime,
    ];

    /// Name used in configuration files and log output.
    pub fn as_str(&self) -> &'static str {
        match self {
            Domain::StringLength => "string_length",
            Domain::Character => "character",
            Domain::Integer => "integer",
            Domain::Long => "long",
            Domain::Float => "float",
            Domain::Double => "double",
            Domain::Boolean => "boolean",
            Domain::Time => "time",
            Domain::Date => "date",
            Domain::DateTime => "date_time",
            Domain::Instant => "instant",
            Domain::ZonedDateTime => "zoned_date_time",
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_matches_serde_name() {
        for domain in Domain::ALL {
            let yaml = serde_yaml::to_string(&domain).unwrap();
            assert_eq!(yaml.trim(), domain.to_string());
        }
    }

    #[test]
    fn test_all_domains_distinct() {
        let mut names: Vec<&str> = Domain::ALL.iter().map(Domain::as_str).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), 12);
    }
}
