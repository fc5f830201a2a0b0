use anyhow::{bail, Context, Result};

use crate::aoc_tools::{Dir, Grid, Point, Polygon};

/// The two openings of a pipe tile, if it is one.
fn openings(tile: u8) -> Option<[Dir; 2]> {
    Some(match tile {
        b'|' => [Dir::Up, Dir::Down],
        b'-' => [Dir::Left, Dir::Right],
        b'L' => [Dir::Up, Dir::Right],
        b'J' => [Dir::Up, Dir::Left],
        b'7' => [Dir::Down, Dir::Left],
        b'F' => [Dir::Down, Dir::Right],
        _ => return None,
    })
}

/// Tiles of the main loop in walking order, starting at `S`.
fn find_loop(input: &str) -> Result<Vec<Point>> {
    let grid = Grid::parse(input)?;
    let start = grid.find(b'S').context("no start tile")?;

    // The tile under S connects to exactly those neighbors that point back at it.
    let connected: Vec<Dir> = Dir::ALL
        .into_iter()
        .filter(|&d| {
            grid.get_point(start.step(d))
                .and_then(openings)
                .is_some_and(|o| o.contains(&d.reverse()))
        })
        .collect();
    if connected.len() != 2 {
        bail!("start tile connects to {} pipes, expected 2", connected.len());
    }

    let mut path = vec![start];
    let mut dir = connected[0];
    let mut pos = start.step(dir);
    while pos != start {
        path.push(pos);
        let tile = grid.get_point(pos).unwrap_or(b'.');
        let [a, b] = openings(tile)
            .with_context(|| format!("loop broken at {:?} ({:?})", pos, tile as char))?;
        dir = if a == dir.reverse() {
            b
        } else if b == dir.reverse() {
            a
        } else {
            bail!("pipe at {:?} doesn't connect back", pos);
        };
        pos = pos.step(dir);
    }
    log::debug!("loop has {} tiles", path.len());
    Ok(path)
}

pub fn part1(input: &str) -> Result<i64> {
    Ok(find_loop(input)?.len() as i64 / 2)
}

pub fn part2(input: &str) -> Result<i64> {
    Ok(Polygon::new(find_loop(input)?).count_enclosed_points())
}

#[cfg(test)]
mod tests {
    use super::*;

    use indoc::indoc;

    #[test]
    fn test_part1() -> Result<()> {
        let simple = indoc! {"
            -L|F7
            7S-7|
            L|7||
            -L-J|
            L|-JF
        "};
        assert_eq!(part1(simple)?, 4);

        let complex = indoc! {"
            7-F7-
            .FJ|7
            SJLL7
            |F--J
            LJ.LJ
        "};
        assert_eq!(part1(complex)?, 8);
        Ok(())
    }

    #[test]
    fn test_part2() -> Result<()> {
        let example = indoc! {"
            ...........
            .S-------7.
            .|F-----7|.
            .||.....||.
            .||.....||.
            .|L-7.F-J|.
            .|..|.|..|.
            .L--J.L--J.
            ...........
        "};
        assert_eq!(part2(example)?, 4);

        let larger = indoc! {"
            .F----7F7F7F7F-7....
            .|F--7||||||||FJ....
            .||.FJ||||||||L7....
            FJL7L7LJLJ||LJ.L-7..
            L--J.L7...LJS7F-7L7.
            ....F-J..F7FJ|L7L7L7
            ....L7.F7||L7|.L7L7|
            .....|FJLJ|FJ|F7|.LJ
            ....FJL-7.||.||||...
            ....L---J.LJ.LJLJ...
        "};
        assert_eq!(part2(larger)?, 8);
        Ok(())
    }

    #[test]
    fn missing_start() {
        assert!(part1("F7\nLJ").is_err());
    }
}
