use anyhow::Result;
use rustc_hash::FxHashMap;

use crate::{aoc_tools::Grid, parse_digits};

/// A run of digits in the schematic.
struct PartNumber {
    value: usize,
    row: usize,
    start: usize,
    end: usize,
}

fn part_numbers(grid: &Grid) -> Vec<PartNumber> {
    let mut numbers = Vec::new();
    for (row, line) in grid.rows().enumerate() {
        let mut col = 0;
        while col < line.len() {
            if !line[col].is_ascii_digit() {
                col += 1;
                continue;
            }
            let start = col;
            while col < line.len() && line[col].is_ascii_digit() {
                col += 1;
            }
            numbers.push(PartNumber {
                value: parse_digits(&line[start..col]),
                row,
                start,
                end: col,
            });
        }
    }
    numbers
}

fn is_symbol(b: u8) -> bool {
    b != b'.' && !b.is_ascii_digit()
}

/// Cells surrounding a number, clipped to the grid.
fn surrounding(grid: &Grid, n: &PartNumber) -> impl Iterator<Item = (usize, usize)> {
    let rows = n.row.saturating_sub(1)..=(n.row + 1).min(grid.height() - 1);
    let cols = n.start.saturating_sub(1)..=n.end.min(grid.width() - 1);
    rows.flat_map(move |r| cols.clone().map(move |c| (r, c)))
}

pub fn part1(input: &str) -> Result<i64> {
    let grid = Grid::parse(input)?;
    Ok(part_numbers(&grid)
        .iter()
        .filter(|n| {
            surrounding(&grid, n).any(|(r, c)| grid.get(r, c).is_some_and(is_symbol))
        })
        .map(|n| n.value as i64)
        .sum())
}

pub fn part2(input: &str) -> Result<i64> {
    let grid = Grid::parse(input)?;
    let mut gears: FxHashMap<(usize, usize), Vec<usize>> = FxHashMap::default();
    for n in part_numbers(&grid) {
        for (r, c) in surrounding(&grid, &n) {
            if grid.get(r, c) == Some(b'*') {
                gears.entry((r, c)).or_default().push(n.value);
            }
        }
    }
    Ok(gears
        .values()
        .filter(|adjacent| adjacent.len() == 2)
        .map(|adjacent| (adjacent[0] * adjacent[1]) as i64)
        .sum())
}
