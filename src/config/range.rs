//! Range argument parsing.

use anyhow::Context;

/// Parse a length range like "5", "2..8" or "2..=8" into inclusive bounds.
/// Supports:
/// - A single number (both bounds): "5"
/// - Inclusive range: "2..8" or "2..=8"
pub fn parse_length_range(s: &str) -> anyhow::Result<(usize, usize)> {
    let s = s.trim();
    if s.is_empty() {
        anyhow::bail!("Empty range string");
    }

    let Some((lower, upper)) = s.split_once("..") else {
        let exact: usize = s
            .parse()
            .with_context(|| format!("Invalid length value: {s}"))?;
        return Ok((exact, exact));
    };
    let upper = upper.strip_prefix('=').unwrap_or(upper);

    let lower: usize = lower
        .trim()
        .parse()
        .with_context(|| format!("Invalid lower bound: {lower}"))?;
    let upper: usize = upper
        .trim()
        .parse()
        .with_context(|| format!("Invalid upper bound: {upper}"))?;
    if lower > upper {
        anyhow::bail!("Lower bound {lower} exceeds upper bound {upper}");
    }
    Ok((lower, upper))
}
