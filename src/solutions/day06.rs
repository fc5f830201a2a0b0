use anyhow::{bail, Context, Result};

fn parse_line<'a>(line: Option<&'a str>, label: &str) -> Result<&'a str> {
    line.and_then(|l| l.trim().strip_prefix(label))
        .with_context(|| format!("missing {:?} line", label))
}

fn parse(input: &str) -> Result<(&str, &str)> {
    let mut lines = input.lines();
    let time = parse_line(lines.next(), "Time:")?;
    let distance = parse_line(lines.next(), "Distance:")?;
    Ok((time, distance))
}

/// Number of hold times that beat the record distance.
fn ways_to_win(time: i64, record: i64) -> i64 {
    let travelled = |hold: i64| hold * (time - hold);
    if travelled(time / 2) <= record {
        return 0;
    }
    // Smaller root of hold^2 - time*hold + record = 0, then fix up float rounding.
    let t = time as f64;
    let root = (t - (t * t - 4.0 * record as f64).sqrt()) / 2.0;
    let mut lo = (root.floor() as i64).clamp(0, time / 2);
    while travelled(lo) <= record {
        lo += 1;
    }
    while lo > 0 && travelled(lo - 1) > record {
        lo -= 1;
    }
    time - 2 * lo + 1
}

pub fn part1(input: &str) -> Result<i64> {
    let (times, distances) = parse(input)?;
    let times = times
        .split_whitespace()
        .map(str::parse)
        .collect::<Result<Vec<i64>, _>>()?;
    let distances = distances
        .split_whitespace()
        .map(str::parse)
        .collect::<Result<Vec<i64>, _>>()?;
    if times.len() != distances.len() {
        bail!("{} times but {} distances", times.len(), distances.len());
    }
    Ok(times
        .iter()
        .zip(&distances)
        .map(|(&t, &d)| ways_to_win(t, d))
        .product())
}

pub fn part2(input: &str) -> Result<i64> {
    let (time, distance) = parse(input)?;
    let join = |s: &str| s.split_whitespace().collect::<String>().parse::<i64>();
    Ok(ways_to_win(join(time)?, join(distance)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    use indoc::indoc;

    const EXAMPLE: &str = indoc! {"
        Time:      7  15   30
        Distance:  9  40  200
    "};

    #[test]
    fn test_part1() -> Result<()> {
        assert_eq!(ways_to_win(7, 9), 4);
        assert_eq!(ways_to_win(30, 200), 9);
        assert_eq!(ways_to_win(4, 4), 0);
        assert_eq!(part1(EXAMPLE)?, 288);
        Ok(())
    }

    #[test]
    fn test_part2() -> Result<()> {
        assert_eq!(part2(EXAMPLE)?, 71503);
        Ok(())
    }
}
