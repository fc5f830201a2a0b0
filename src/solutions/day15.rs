use anyhow::{bail, Context, Result};
use indexmap::IndexMap;

/// The Holiday ASCII String Helper algorithm.
fn hash(s: &str) -> usize {
    s.bytes()
        .fold(0, |acc, b| ((acc + b as usize) * 17) % 256)
}

fn steps(input: &str) -> impl Iterator<Item = &str> {
    input
        .split(',')
        .map(|s| s.trim_matches(|c: char| c.is_ascii_whitespace()))
        .filter(|s| !s.is_empty())
}

pub fn part1(input: &str) -> Result<i64> {
    Ok(steps(input).map(|s| hash(s) as i64).sum())
}

pub fn part2(input: &str) -> Result<i64> {
    // Each box keeps its lenses in insertion order; replacing a lens keeps its slot.
    let mut boxes: Vec<IndexMap<&str, usize>> = vec![IndexMap::new(); 256];
    for step in steps(input) {
        if let Some(label) = step.strip_suffix('-') {
            boxes[hash(label)].shift_remove(label);
        } else if let Some((label, focal)) = step.split_once('=') {
            let focal = focal
                .parse::<usize>()
                .with_context(|| format!("bad focal length in {:?}", step))?;
            boxes[hash(label)].insert(label, focal);
        } else {
            bail!("unknown step {:?}", step);
        }
    }

    Ok(boxes
        .iter()
        .enumerate()
        .flat_map(|(b, lenses)| {
            lenses
                .values()
                .enumerate()
                .map(move |(slot, focal)| (b + 1) * (slot + 1) * focal)
        })
        .sum::<usize>() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "rn=1,cm-,qp=3,cm=2,qp-,pc=4,ot=9,ab=5,pc-,pc=6,ot=7\n";

    #[test]
    fn test_part1() -> Result<()> {
        assert_eq!(hash("HASH"), 52);
        assert_eq!(part1(EXAMPLE)?, 1320);
        Ok(())
    }

    #[test]
    fn test_part2() -> Result<()> {
        assert_eq!(part2(EXAMPLE)?, 145);
        assert!(part2("rn?1").is_err());
        Ok(())
    }
}
