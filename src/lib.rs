pub mod aoc_tools;
pub mod solutions;

use std::path::Path;

use anyhow::{Context, Result};

pub use solutions::{Day, Part, ALL_SOLUTIONS};

/// Result is only correct if bytes represents a valid positive number without any additional
/// characters!
pub fn parse_digits(bytes: &[u8]) -> usize {
    let mut ret = 0;
    for b in bytes {
        ret = ret * 10 + (b - b'0') as usize;
    }
    ret
}

pub fn load_input(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

pub fn default_input(n: usize) -> Result<String> {
    load_input(format!("inputs/{}.txt", n))
}
