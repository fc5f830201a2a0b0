use anyhow::Result;
use rustc_hash::FxHashMap;

use crate::aoc_tools::{Dir, Grid};

const SPIN_CYCLES: usize = 1_000_000_000;

/// Rolls every round rock as far as it goes in `dir`.
fn tilt(grid: &mut Grid, dir: Dir) {
    let (h, w) = (grid.height(), grid.width());
    // Lines perpendicular to the tilt, and the cells along each line starting at the wall
    // the rocks roll towards.
    let (lines, len) = if dir.is_horizontal() { (h, w) } else { (w, h) };
    for line in 0..lines {
        let cell = |k: usize| match dir {
            Dir::Up => (k, line),
            Dir::Down => (h - 1 - k, line),
            Dir::Left => (line, k),
            Dir::Right => (line, w - 1 - k),
        };
        let mut free = 0;
        for k in 0..len {
            let (r, c) = cell(k);
            match grid.get(r, c) {
                Some(b'#') => free = k + 1,
                Some(b'O') => {
                    grid.set(r, c, b'.');
                    let (fr, fc) = cell(free);
                    grid.set(fr, fc, b'O');
                    free += 1;
                }
                _ => {}
            }
        }
    }
}

fn north_load(grid: &Grid) -> i64 {
    grid.positions(b'O')
        .map(|p| grid.height() as i64 - p.row)
        .sum()
}

pub fn part1(input: &str) -> Result<i64> {
    let mut grid = Grid::parse(input)?;
    tilt(&mut grid, Dir::Up);
    Ok(north_load(&grid))
}

pub fn part2(input: &str) -> Result<i64> {
    let mut grid = Grid::parse(input)?;
    let mut seen = FxHashMap::default();
    let mut cycle = 0;
    while cycle < SPIN_CYCLES {
        if let Some(start) = seen.insert(grid.clone(), cycle) {
            let period = cycle - start;
            log::debug!("spin cycle repeats every {} cycles from {}", period, start);
            let remaining = (SPIN_CYCLES - cycle) % period;
            cycle = SPIN_CYCLES - remaining;
            seen.clear();
            continue;
        }
        for dir in [Dir::Up, Dir::Left, Dir::Down, Dir::Right] {
            tilt(&mut grid, dir);
        }
        cycle += 1;
    }
    Ok(north_load(&grid))
}

#[cfg(test)]
mod tests {
    use super::*;

    use indoc::indoc;

    const EXAMPLE: &str = indoc! {"
        O....#....
        O.OO#....#
        .....##...
        OO.#O....O
        .O.....O#.
        O.#..O.#.#
        ..O..#O..O
        .......O..
        #....###..
        #OO..#....
    "};

    #[test]
    fn test_part1() -> Result<()> {
        assert_eq!(part1(EXAMPLE)?, 136);
        Ok(())
    }

    #[test]
    fn test_part2() -> Result<()> {
        assert_eq!(part2(EXAMPLE)?, 64);
        Ok(())
    }

    #[test]
    fn one_spin_cycle() -> Result<()> {
        let mut grid = Grid::parse(EXAMPLE)?;
        for dir in [Dir::Up, Dir::Left, Dir::Down, Dir::Right] {
            tilt(&mut grid, dir);
        }
        let expected = Grid::parse(indoc! {"
            .....#....
            ....#...O#
            ...OO##...
            .OO#......
            .....OOO#.
            .O#...O#.#
            ....O#....
            ......OOOO
            #...O###..
            #..OO#....
        "})?;
        assert_eq!(grid, expected);
        Ok(())
    }
}
