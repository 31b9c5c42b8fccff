//! Password generation for passgen.
//!
//! This module owns the character pool and the sampling routine. It performs
//! no I/O and no validation: callers pick the options, the generator draws
//! characters.
//!
//! The pool is always seeded with lowercase letters, so it can never be
//! empty and sampling has no failure path.

use rand::Rng;
use serde::Serialize;

/// Shortest password the option layer will accept.
pub const MIN_LENGTH: usize = 6;

/// Longest password the option layer will accept.
pub const MAX_LENGTH: usize = 100;

/// Length used when the user does not pick one.
pub const DEFAULT_LENGTH: usize = 8;

const LOWER: &str = "abcdefghijklmnopqrstuvwxyz";
const DIGITS: &str = "0123456789";
const SYMBOLS: &str = "+-(){}*&^%$#@!";

/// The three user-controlled generation parameters.
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct GenerationOptions {
    /// Number of characters to draw
    pub length: usize,

    /// Append `0-9` to the pool
    pub include_digits: bool,

    /// Append `+-(){}*&^%$#@!` to the pool
    pub include_symbols: bool,
}

impl GenerationOptions {
    /// Build options with `length` clamped into `[MIN_LENGTH, MAX_LENGTH]`.
    pub fn new(length: usize, include_digits: bool, include_symbols: bool) -> Self {
        Self {
            length: clamp_length(length),
            include_digits,
            include_symbols,
        }
    }
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            include_digits: false,
            include_symbols: false,
        }
    }
}

pub fn clamp_length(length: usize) -> usize {
    length.clamp(MIN_LENGTH, MAX_LENGTH)
}

/// Characters eligible for selection, lowercase letters first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CharacterPool {
    chars: Vec<char>,
}

impl CharacterPool {
    pub fn for_options(options: &GenerationOptions) -> Self {
        let mut charset = String::from(LOWER);
        if options.include_digits {
            charset.push_str(DIGITS);
        }
        if options.include_symbols {
            charset.push_str(SYMBOLS);
        }

        Self {
            chars: charset.chars().collect(),
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.chars.len()
    }

    #[cfg(test)]
    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }

    /// Draw one character uniformly from the pool.
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> char {
        self.chars[rng.gen_range(0..self.chars.len())]
    }
}

/// Generate a password using the thread-local RNG.
///
/// The result has exactly `options.length` characters. Nothing guarantees
/// that an enabled class actually shows up in the output.
pub fn generate(options: &GenerationOptions) -> String {
    generate_with(options, &mut rand::thread_rng())
}

/// Generate a password drawing from the supplied RNG.
pub fn generate_with<R: Rng + ?Sized>(options: &GenerationOptions, rng: &mut R) -> String {
    let pool = CharacterPool::for_options(options);

    let mut out = String::with_capacity(options.length);
    for _ in 0..options.length {
        out.push(pool.sample(rng));
    }

    log::trace!(
        "generated {} characters from a pool of {}",
        options.length,
        pool.len()
    );
    out
}
