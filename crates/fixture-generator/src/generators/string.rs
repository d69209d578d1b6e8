//! String value generators.

use fixture_core::{Pool, PoolError};
use rand::Rng;

/// `a-z` followed by `A-Z`.
pub fn alphabetic() -> Vec<char> {
    ('a'..='z').chain('A'..='Z').collect()
}

/// `a-z`, `A-Z`, then `0-9`.
pub fn alphanumeric() -> Vec<char> {
    ('a'..='z').chain('A'..='Z').chain('0'..='9').collect()
}

/// `0-9`.
pub fn numeric() -> Vec<char> {
    ('0'..='9').collect()
}

/// Generate a string whose length is drawn from `length` and whose
/// characters are drawn independently from `chars`.
pub fn generate_string<R: Rng + ?Sized>(
    rng: &mut R,
    length: &Pool<usize>,
    chars: &Pool<char>,
) -> String {
    let length = length.random_with(rng);
    (0..length).map(|_| chars.random_with(rng)).collect()
}

/// Generate a string of `min..=max` characters taken from `charset`.
pub fn generate_string_between<R: Rng + ?Sized>(
    rng: &mut R,
    min_length: usize,
    max_length: usize,
    charset: &[char],
) -> Result<String, PoolError> {
    let length = Pool::between(min_length, max_length)?;
    let chars = Pool::one_of(charset.iter().copied())?;
    Ok(generate_string(rng, &length, &chars))
}
