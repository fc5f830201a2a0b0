use anyhow::{bail, Context, Result};
use regex::Regex;

/// Largest number of cubes of each color seen in a game.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct Cubes {
    red: u32,
    green: u32,
    blue: u32,
}

impl Cubes {
    fn power(self) -> u32 {
        self.red * self.green * self.blue
    }
}

fn parse_games(input: &str) -> Result<Vec<(u32, Cubes)>> {
    let header = Regex::new(r"^Game (\d+): (.*)$")?;
    let draw = Regex::new(r"(\d+) (red|green|blue)")?;

    input
        .lines()
        .filter(|l| !l.trim().is_empty())
        .map(|line| {
            let caps = header
                .captures(line.trim())
                .with_context(|| format!("bad game line: {:?}", line))?;
            let id = caps[1].parse()?;
            let mut max = Cubes::default();
            for set in caps[2].split(';') {
                for cube in set.split(',') {
                    let Some(c) = draw.captures(cube) else {
                        bail!("bad cube count {:?} in game {}", cube, id);
                    };
                    let n: u32 = c[1].parse()?;
                    let slot = match &c[2] {
                        "red" => &mut max.red,
                        "green" => &mut max.green,
                        _ => &mut max.blue,
                    };
                    *slot = (*slot).max(n);
                }
            }
            Ok((id, max))
        })
        .collect()
}

pub fn part1(input: &str) -> Result<i64> {
    let bag = Cubes {
        red: 12,
        green: 13,
        blue: 14,
    };
    Ok(parse_games(input)?
        .into_iter()
        .filter(|(_, c)| c.red <= bag.red && c.green <= bag.green && c.blue <= bag.blue)
        .map(|(id, _)| id as i64)
        .sum())
}

pub fn part2(input: &str) -> Result<i64> {
    Ok(parse_games(input)?
        .into_iter()
        .map(|(_, c)| c.power() as i64)
        .sum())
}
