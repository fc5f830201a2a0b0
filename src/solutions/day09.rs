use anyhow::Result;

fn parse(input: &str) -> Result<Vec<Vec<i64>>> {
    input
        .lines()
        .filter(|l| !l.trim().is_empty())
        .map(|line| {
            Ok(line
                .split_whitespace()
                .map(str::parse)
                .collect::<Result<Vec<i64>, _>>()?)
        })
        .collect()
}

/// Next value of the sequence: the sum of the last entry of every difference row.
fn extrapolate(mut values: Vec<i64>) -> i64 {
    let mut next = 0;
    while values.iter().any(|&v| v != 0) {
        next += values.last().copied().unwrap_or_default();
        values = values.windows(2).map(|w| w[1] - w[0]).collect();
    }
    next
}

pub fn part1(input: &str) -> Result<i64> {
    Ok(parse(input)?.into_iter().map(extrapolate).sum())
}

pub fn part2(input: &str) -> Result<i64> {
    Ok(parse(input)?
        .into_iter()
        .map(|mut values| {
            values.reverse();
            extrapolate(values)
        })
        .sum())
}
