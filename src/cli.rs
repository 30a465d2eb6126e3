//! Command-line options for the terminal binary.

use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{anyhow, Result};

use crate::core::Rules;
use crate::types::MIN_GRID_SIZE;

pub const USAGE: &str = "usage: block-blast [--size <4-10>] [--seed <u32>] [--blocks <1-5>]";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayConfig {
    pub rules: Rules,
    pub seed: u32,
}

/// Parse arguments (without the program name).
///
/// Returns `Ok(None)` when help was requested.
pub fn parse_play_args(args: &[String]) -> Result<Option<PlayConfig>> {
    let mut rules = Rules::default();
    let mut seed = None;
    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => return Ok(None),
            "--size" => {
                i += 1;
                let v = args.get(i).ok_or_else(|| anyhow!("missing value for --size"))?;
                let size = v
                    .parse::<u8>()
                    .map_err(|_| anyhow!("invalid --size value: {}", v))?;
                if size < MIN_GRID_SIZE {
                    return Err(anyhow!("--size must be at least {}, got {}", MIN_GRID_SIZE, size));
                }
                rules = rules.with_grid_size(size);
            }
            "--seed" => {
                i += 1;
                let v = args.get(i).ok_or_else(|| anyhow!("missing value for --seed"))?;
                seed = Some(
                    v.parse::<u32>()
                        .map_err(|_| anyhow!("invalid --seed value: {}", v))?,
                );
            }
            "--blocks" => {
                i += 1;
                let v = args.get(i).ok_or_else(|| anyhow!("missing value for --blocks"))?;
                let count = v
                    .parse::<usize>()
                    .map_err(|_| anyhow!("invalid --blocks value: {}", v))?;
                rules = rules.with_blocks_per_set(count);
            }
            other => return Err(anyhow!("unknown argument: {}", other)),
        }
        i += 1;
    }

    rules.validate()?;
    Ok(Some(PlayConfig {
        rules,
        seed: seed.unwrap_or_else(clock_seed),
    }))
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn defaults() {
        let config = parse_play_args(&args(&["--seed", "5"])).unwrap().unwrap();
        assert_eq!(config.rules, Rules::default());
        assert_eq!(config.seed, 5);
    }

    #[test]
    fn size_and_blocks() {
        let config = parse_play_args(&args(&["--size", "10", "--blocks", "4"]))
            .unwrap()
            .unwrap();
        assert_eq!(config.rules.grid_size, 10);
        assert_eq!(config.rules.blocks_per_set, 4);
    }

    #[test]
    fn help() {
        assert!(parse_play_args(&args(&["--help"])).unwrap().is_none());
    }

    #[test]
    fn rejects_bad_input() {
        assert!(parse_play_args(&args(&["--size"])).is_err());
        assert!(parse_play_args(&args(&["--size", "3"])).is_err());
        assert!(parse_play_args(&args(&["--size", "11"])).is_err());
        assert!(parse_play_args(&args(&["--seed", "-1"])).is_err());
        assert!(parse_play_args(&args(&["--blocks", "0"])).is_err());
        assert!(parse_play_args(&args(&["--fast"])).is_err());
    }
}
