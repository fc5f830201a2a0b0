use anyhow::{Context, Result};
use rayon::prelude::*;

use crate::aoc_tools::{Dir, Grid, Point};

fn dir_bit(dir: Dir) -> u8 {
    1 << dir as u8
}

/// Number of tiles a beam entering at `start` heading `dir` passes through.
fn energized(grid: &Grid, start: Point, dir: Dir) -> usize {
    let mut seen = vec![0u8; grid.width() * grid.height()];
    let mut beams = vec![(start, dir)];
    while let Some((pos, dir)) = beams.pop() {
        let Some(tile) = grid.get_point(pos) else {
            continue;
        };
        let idx = pos.row as usize * grid.width() + pos.col as usize;
        if seen[idx] & dir_bit(dir) != 0 {
            continue;
        }
        seen[idx] |= dir_bit(dir);

        let mut go = |d: Dir| beams.push((pos.step(d), d));
        match (tile, dir) {
            (b'/', Dir::Right | Dir::Left) | (b'\\', Dir::Up | Dir::Down) => go(dir.turn_left()),
            (b'/', _) | (b'\\', _) => go(dir.turn_right()),
            (b'|', Dir::Left | Dir::Right) => {
                go(Dir::Up);
                go(Dir::Down);
            }
            (b'-', Dir::Up | Dir::Down) => {
                go(Dir::Left);
                go(Dir::Right);
            }
            _ => go(dir),
        }
    }
    seen.iter().filter(|&&s| s != 0).count()
}

pub fn part1(input: &str) -> Result<i64> {
    let grid = Grid::parse(input)?;
    Ok(energized(&grid, Point::new(0, 0), Dir::Right) as i64)
}

pub fn part2(input: &str) -> Result<i64> {
    let grid = Grid::parse(input)?;
    let (h, w) = (grid.height() as i64, grid.width() as i64);
    let mut entries = Vec::new();
    for r in 0..h {
        entries.push((Point::new(r, 0), Dir::Right));
        entries.push((Point::new(r, w - 1), Dir::Left));
    }
    for c in 0..w {
        entries.push((Point::new(0, c), Dir::Down));
        entries.push((Point::new(h - 1, c), Dir::Up));
    }
    entries
        .par_iter()
        .map(|&(p, d)| energized(&grid, p, d) as i64)
        .max()
        .context("empty grid")
}

#[cfg(test)]
mod tests {
    use super::*;

    use indoc::indoc;

    const EXAMPLE: &str = indoc! {r"
        .|...\....
        |.-.\.....
        .....|-...
        ........|.
        ..........
        .........\
        ..../.\\..
        .-.-/..|..
        .|....-|.\
        ..//.|....
    "};

    #[test]
    fn test_part1() -> Result<()> {
        assert_eq!(part1(EXAMPLE)?, 46);
        Ok(())
    }

    #[test]
    fn test_part2() -> Result<()> {
        assert_eq!(part2(EXAMPLE)?, 51);
        Ok(())
    }
}
