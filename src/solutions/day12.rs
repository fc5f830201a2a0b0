use anyhow::{bail, Context, Result};
use rayon::prelude::*;

struct Row {
    springs: Vec<u8>,
    groups: Vec<usize>,
}

impl Row {
    fn unfold(&self, times: usize) -> Row {
        let mut springs = self.springs.clone();
        for _ in 1..times {
            springs.push(b'?');
            springs.extend_from_slice(&self.springs);
        }
        Row {
            springs,
            groups: self.groups.repeat(times),
        }
    }

    /// Number of ways to fill in the unknown springs consistent with the damaged groups.
    fn arrangements(&self) -> i64 {
        let s = &self.springs;
        let (n, m) = (s.len(), self.groups.len());
        // ways[i][j]: arrangements of springs[i..] matching groups[j..]
        let mut ways = vec![vec![0i64; m + 1]; n + 2];
        ways[n][m] = 1;
        ways[n + 1][m] = 1;
        for i in (0..n).rev() {
            for j in 0..=m {
                let mut count = 0;
                if s[i] != b'#' {
                    count += ways[i + 1][j];
                }
                if s[i] != b'.' && j < m {
                    let end = i + self.groups[j];
                    if end <= n
                        && !s[i..end].contains(&b'.')
                        && s.get(end) != Some(&b'#')
                    {
                        count += ways[end + 1][j + 1];
                    }
                }
                ways[i][j] = count;
            }
        }
        ways[0][0]
    }
}

fn parse(input: &str) -> Result<Vec<Row>> {
    input
        .lines()
        .filter(|l| !l.trim().is_empty())
        .map(|line| {
            let (springs, groups) = line
                .trim()
                .split_once(' ')
                .with_context(|| format!("bad row: {:?}", line))?;
            if let Some(b) = springs.bytes().find(|b| !b"?#.".contains(b)) {
                bail!("unknown spring {:?}", b as char);
            }
            Ok(Row {
                springs: springs.as_bytes().to_vec(),
                groups: groups
                    .split(',')
                    .map(str::parse)
                    .collect::<Result<Vec<usize>, _>>()?,
            })
        })
        .collect()
}

pub fn part1(input: &str) -> Result<i64> {
    Ok(parse(input)?.iter().map(Row::arrangements).sum())
}

pub fn part2(input: &str) -> Result<i64> {
    Ok(parse(input)?
        .par_iter()
        .map(|row| row.unfold(5).arrangements())
        .sum())
}
