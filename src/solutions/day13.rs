use anyhow::{bail, Result};

use crate::aoc_tools::Grid;

/// Rows above a horizontal mirror line whose reflection differs in exactly `smudges` cells.
fn mirror_row(grid: &Grid, smudges: usize) -> Option<usize> {
    (1..grid.height()).find(|&above| {
        let mismatches: usize = (0..above.min(grid.height() - above))
            .map(|k| {
                grid.row(above - 1 - k)
                    .iter()
                    .zip(grid.row(above + k))
                    .filter(|(a, b)| a != b)
                    .count()
            })
            .sum();
        mismatches == smudges
    })
}

fn summarize(input: &str, smudges: usize) -> Result<i64> {
    let input = input.replace('\r', "");
    let mut total = 0;
    for block in input.trim().split("\n\n") {
        let grid = Grid::parse(block)?;
        total += if let Some(rows) = mirror_row(&grid, smudges) {
            100 * rows
        } else if let Some(cols) = mirror_row(&grid.transpose(), smudges) {
            cols
        } else {
            bail!("no reflection in pattern:\n{:?}", grid);
        };
    }
    Ok(total as i64)
}

pub fn part1(input: &str) -> Result<i64> {
    summarize(input, 0)
}

pub fn part2(input: &str) -> Result<i64> {
    summarize(input, 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    use indoc::indoc;

    const EXAMPLE: &str = indoc! {"
        #.##..##.
        ..#.##.#.
        ##......#
        ##......#
        ..#.##.#.
        ..##..##.
        #.##..##.

        #...##..#
        #....#..#
        ..##..###
        #####.##.
        #####.##.
        ..##..###
        #....#..#
    "};

    #[test]
    fn test_part1() -> Result<()> {
        assert_eq!(part1(EXAMPLE)?, 405);
        Ok(())
    }

    #[test]
    fn test_part2() -> Result<()> {
        assert_eq!(part2(EXAMPLE)?, 400);
        Ok(())
    }
}
