use anyhow::{bail, Context, Result};
use rustc_hash::FxHashSet;

use crate::aoc_tools::{Grid, Point};

const PART1_STEPS: i64 = 64;
const PART2_STEPS: i64 = 26_501_365;

/// Garden plots the elf can stand on after exactly `steps` steps.
///
/// A plot reachable in `d <= steps` steps is reachable in exactly `steps` if `d` has the same
/// parity, since the elf can step back and forth. With `infinite`, the map repeats in every
/// direction.
pub fn reachable_plots(grid: &Grid, steps: i64, infinite: bool) -> Result<i64> {
    let start = grid.find(b'S').context("no starting position")?;
    let (h, w) = (grid.height() as i64, grid.width() as i64);
    let is_plot = |p: Point| {
        let p = if infinite {
            Point::new(p.row.rem_euclid(h), p.col.rem_euclid(w))
        } else {
            p
        };
        grid.get_point(p).is_some_and(|b| b != b'#')
    };

    let mut seen = FxHashSet::from_iter([start]);
    let mut frontier = vec![start];
    let mut count = i64::from(steps % 2 == 0);
    for d in 1..=steps {
        let mut next = Vec::new();
        for p in frontier {
            for n in p.neighbors() {
                if is_plot(n) && seen.insert(n) {
                    next.push(n);
                }
            }
        }
        if d % 2 == steps % 2 {
            count += next.len() as i64;
        }
        frontier = next;
    }
    Ok(count)
}

pub fn part1(input: &str) -> Result<i64> {
    reachable_plots(&Grid::parse(input)?, PART1_STEPS, false)
}

/// The start sits in the middle of a square map with a clear row and column through it, so the
/// reachable count grows quadratically in the number of whole maps walked. Sample it after
/// 0, 1 and 2 map widths past the edge and extrapolate.
pub fn part2(input: &str) -> Result<i64> {
    let grid = Grid::parse(input)?;
    let size = grid.width() as i64;
    if grid.height() as i64 != size {
        bail!("the map must be square");
    }
    let half = size / 2;
    if grid.find(b'S') != Some(Point::new(half, half)) {
        bail!("the start must be in the middle of the map");
    }

    let f0 = reachable_plots(&grid, half, true)?;
    let f1 = reachable_plots(&grid, half + size, true)?;
    let f2 = reachable_plots(&grid, half + 2 * size, true)?;
    log::debug!("quadratic samples: {} {} {}", f0, f1, f2);

    let n = (PART2_STEPS - half) / size;
    // Newton forward differences.
    Ok(f0 + n * (f1 - f0) + n * (n - 1) / 2 * (f2 - 2 * f1 + f0))
}

#[cfg(test)]
mod tests {
    use super::*;

    use indoc::indoc;

    const EXAMPLE: &str = indoc! {"
        ...........
        .....###.#.
        .###.##..#.
        ..#.#...#..
        ....#.#....
        .##..S####.
        .##..#...#.
        .......##..
        .##.#.####.
        .##..##.##.
        ...........
    "};

    #[test]
    fn test_part1() -> Result<()> {
        let grid = Grid::parse(EXAMPLE)?;
        assert_eq!(reachable_plots(&grid, 1, false)?, 2);
        assert_eq!(reachable_plots(&grid, 2, false)?, 4);
        assert_eq!(reachable_plots(&grid, 6, false)?, 16);
        Ok(())
    }

    #[test]
    fn test_part2() -> Result<()> {
        let grid = Grid::parse(EXAMPLE)?;
        assert_eq!(reachable_plots(&grid, 6, true)?, 16);
        assert_eq!(reachable_plots(&grid, 10, true)?, 50);
        assert_eq!(reachable_plots(&grid, 50, true)?, 1594);
        assert_eq!(reachable_plots(&grid, 100, true)?, 6536);
        Ok(())
    }

    #[test]
    fn extrapolation_needs_centered_square_map() {
        assert!(part2("....\n.S..\n....\n").is_err());
        assert!(part2("...\nS..\n...\n").is_err());
    }

    #[test]
    fn quadratic_growth_on_open_map() -> Result<()> {
        // With no rocks the reachable plots form a diamond of (steps + 1)^2 plots.
        let open = "...\n.S.\n...\n";
        let grid = Grid::parse(open)?;
        assert_eq!(reachable_plots(&grid, 7, true)?, 64);
        assert_eq!(part2(open)?, (PART2_STEPS + 1) * (PART2_STEPS + 1));
        Ok(())
    }
}
