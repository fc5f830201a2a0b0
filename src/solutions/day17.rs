use anyhow::{bail, Context, Result};

use crate::aoc_tools::{dijkstra, Dir, Grid, Point};

/// Least heat loss from the top-left to the bottom-right block for a crucible that must move
/// between `min` and `max` blocks in a straight line before turning.
fn least_heat_loss(input: &str, min: i64, max: i64) -> Result<i64> {
    let grid = Grid::parse(input)?;
    if let Some(&b) = grid.as_bytes().iter().find(|b| !b.is_ascii_digit()) {
        bail!("unexpected block {:?}", b as char);
    }
    let end = Point::new(grid.height() as i64 - 1, grid.width() as i64 - 1);

    // A state is a block plus the axis of the move that reached it; the next move must turn.
    let successors = |&(pos, horizontal): &(Point, bool)| {
        let turns = if horizontal {
            [Dir::Up, Dir::Down]
        } else {
            [Dir::Left, Dir::Right]
        };
        let mut next = Vec::new();
        for dir in turns {
            let mut cost = 0;
            for n in 1..=max {
                let p = pos.go(dir, n);
                let Some(heat) = grid.get_point(p) else {
                    break;
                };
                cost += u64::from(heat - b'0');
                if n >= min {
                    next.push(((p, !horizontal), cost));
                }
            }
        }
        next
    };

    let start = Point::new(0, 0);
    let loss = dijkstra([(start, true), (start, false)], successors, |&(p, _)| p == end)
        .context("no path to the factory")?;
    Ok(loss as i64)
}

pub fn part1(input: &str) -> Result<i64> {
    least_heat_loss(input, 1, 3)
}

pub fn part2(input: &str) -> Result<i64> {
    least_heat_loss(input, 4, 10)
}
