use anyhow::{Context, Result};
use rustc_hash::FxHashSet;

/// Number of winning numbers present on each card, in card order.
fn matches(input: &str) -> Result<Vec<usize>> {
    input
        .lines()
        .filter(|l| !l.trim().is_empty())
        .map(|line| {
            let (_, numbers) = line
                .split_once(':')
                .with_context(|| format!("missing card header: {:?}", line))?;
            let (winning, have) = numbers
                .split_once('|')
                .with_context(|| format!("missing '|' separator: {:?}", line))?;
            let winning = winning
                .split_whitespace()
                .map(str::parse)
                .collect::<Result<FxHashSet<u32>, _>>()?;
            let mut count = 0;
            for n in have.split_whitespace() {
                if winning.contains(&n.parse::<u32>()?) {
                    count += 1;
                }
            }
            Ok(count)
        })
        .collect()
}

pub fn part1(input: &str) -> Result<i64> {
    Ok(matches(input)?
        .into_iter()
        .filter(|&m| m > 0)
        .map(|m| 1 << (m - 1))
        .sum())
}

pub fn part2(input: &str) -> Result<i64> {
    let matches = matches(input)?;
    let mut copies = vec![1i64; matches.len()];
    for (i, &m) in matches.iter().enumerate() {
        let won = copies[i];
        for c in copies.iter_mut().skip(i + 1).take(m) {
            *c += won;
        }
    }
    Ok(copies.iter().sum())
}

#[cfg(test)]
mod tests {
    use super::*;

    use indoc::indoc;

    const EXAMPLE: &str = indoc! {"
        Card 1: 41 48 83 86 17 | 83 86  6 31 17  9 48 53
        Card 2: 13 32 20 16 61 | 61 30 68 82 17 32 24 19
        Card 3:  1 21 53 59 44 | 69 82 63 72 16 21 14  1
        Card 4: 41 92 73 84 69 | 59 84 76 51 58  5 54 83
        Card 5: 87 83 26 28 32 | 88 30 70 12 93 22 82 36
        Card 6: 31 18 13 56 72 | 74 77 10 23 35 67 36 11
    "};

    #[test]
    fn test_part1() -> Result<()> {
        assert_eq!(matches(EXAMPLE)?, [4, 2, 2, 1, 0, 0]);
        assert_eq!(part1(EXAMPLE)?, 13);
        Ok(())
    }

    #[test]
    fn test_part2() -> Result<()> {
        assert_eq!(part2(EXAMPLE)?, 30);
        Ok(())
    }
}
