use anyhow::Result;

use crate::aoc_tools::Grid;

/// Sum of pairwise distances along one axis, where every empty line counts `expansion` times.
fn axis_distance_sum(mut coords: Vec<i64>, occupied: &[bool], expansion: i64) -> i64 {
    // Coordinate after expansion: shift by the number of empty lines before it.
    let mut shift = Vec::with_capacity(occupied.len());
    let mut empty = 0;
    for &o in occupied {
        shift.push(empty * (expansion - 1));
        if !o {
            empty += 1;
        }
    }
    for c in &mut coords {
        *c += shift[*c as usize];
    }
    coords.sort_unstable();

    let mut total = 0;
    let mut prefix = 0;
    for (i, &c) in coords.iter().enumerate() {
        total += c * i as i64 - prefix;
        prefix += c;
    }
    total
}

pub fn galaxy_distances(input: &str, expansion: i64) -> Result<i64> {
    let grid = Grid::parse(input)?;
    let galaxies: Vec<_> = grid.positions(b'#').collect();

    let mut occupied_rows = vec![false; grid.height()];
    let mut occupied_cols = vec![false; grid.width()];
    for g in &galaxies {
        occupied_rows[g.row as usize] = true;
        occupied_cols[g.col as usize] = true;
    }

    let rows = galaxies.iter().map(|g| g.row).collect();
    let cols = galaxies.iter().map(|g| g.col).collect();
    Ok(axis_distance_sum(rows, &occupied_rows, expansion)
        + axis_distance_sum(cols, &occupied_cols, expansion))
}

pub fn part1(input: &str) -> Result<i64> {
    galaxy_distances(input, 2)
}

pub fn part2(input: &str) -> Result<i64> {
    galaxy_distances(input, 1_000_000)
}
