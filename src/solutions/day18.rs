use anyhow::{bail, Context, Result};

use crate::aoc_tools::{Dir, Point, Polygon};

/// One line of the dig plan: `R 6 (#70c710)`.
struct Instruction<'a> {
    dir: Dir,
    meters: i64,
    color: &'a str,
}

impl Instruction<'_> {
    /// The real instruction hidden in the color: five hex digits of distance, then the
    /// direction (0 = R, 1 = D, 2 = L, 3 = U).
    fn decode_color(&self) -> Result<(Dir, i64)> {
        if self.color.len() != 6 {
            bail!("color {:?} should have six hex digits", self.color);
        }
        let (meters, dir) = self.color.split_at(5);
        let meters = i64::from_str_radix(meters, 16)?;
        let dir = match dir {
            "0" => Dir::Right,
            "1" => Dir::Down,
            "2" => Dir::Left,
            "3" => Dir::Up,
            _ => bail!("bad direction digit {:?}", dir),
        };
        Ok((dir, meters))
    }
}

fn parse(input: &str) -> Result<Vec<Instruction<'_>>> {
    input
        .lines()
        .filter(|l| !l.trim().is_empty())
        .map(|line| {
            let mut parts = line.split_whitespace();
            let (Some(dir), Some(meters), Some(color)) = (parts.next(), parts.next(), parts.next())
            else {
                bail!("bad dig instruction {:?}", line);
            };
            let color = color
                .strip_prefix("(#")
                .and_then(|c| c.strip_suffix(')'))
                .with_context(|| format!("bad color in {:?}", line))?;
            Ok(Instruction {
                dir: dir.parse()?,
                meters: meters.parse()?,
                color,
            })
        })
        .collect()
}

/// Cubic meters of lava the lagoon holds: the trench itself plus everything inside it.
fn lagoon_volume(steps: impl IntoIterator<Item = (Dir, i64)>) -> i64 {
    let mut pos = Point::default();
    let polygon: Polygon = steps
        .into_iter()
        .map(|(dir, meters)| {
            pos = pos.go(dir, meters);
            pos
        })
        .collect();
    polygon.count_enclosed_points() + polygon.boundary_points()
}

pub fn part1(input: &str) -> Result<i64> {
    Ok(lagoon_volume(parse(input)?.iter().map(|i| (i.dir, i.meters))))
}

pub fn part2(input: &str) -> Result<i64> {
    let steps = parse(input)?
        .iter()
        .map(Instruction::decode_color)
        .collect::<Result<Vec<_>>>()?;
    Ok(lagoon_volume(steps))
}

#[cfg(test)]
mod tests {
    use super::*;

    use indoc::indoc;

    const EXAMPLE: &str = indoc! {"
        R 6 (#70c710)
        D 5 (#0dc571)
        L 2 (#5713f0)
        D 2 (#d2c081)
        R 2 (#59c680)
        D 2 (#411b91)
        L 5 (#8ceee2)
        U 2 (#caa173)
        L 1 (#1b58a2)
        U 2 (#caa171)
        R 2 (#7807d2)
        U 3 (#a77fa3)
        L 2 (#015232)
        U 2 (#7a21e3)
    "};

    #[test]
    fn test_part1() -> Result<()> {
        assert_eq!(part1(EXAMPLE)?, 62);
        Ok(())
    }

    #[test]
    fn test_part2() -> Result<()> {
        assert_eq!(part2(EXAMPLE)?, 952408144115);
        Ok(())
    }
}
