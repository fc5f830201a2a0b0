use anyhow::{Context, Result};
use rayon::prelude::*;
use rustc_hash::FxHashMap;

use crate::aoc_tools::Point3;

struct Brick {
    lo: Point3,
    hi: Point3,
}

fn parse(input: &str) -> Result<Vec<Brick>> {
    input
        .lines()
        .filter(|l| !l.trim().is_empty())
        .map(|line| {
            let (a, b) = line
                .split_once('~')
                .with_context(|| format!("bad brick {:?}", line))?;
            let (a, b): (Point3, Point3) = (a.parse()?, b.parse()?);
            Ok(Brick {
                lo: Point3::new(a.x.min(b.x), a.y.min(b.y), a.z.min(b.z)),
                hi: Point3::new(a.x.max(b.x), a.y.max(b.y), a.z.max(b.z)),
            })
        })
        .collect()
}

/// Lets every brick fall and returns, for each brick in settling order, the bricks directly
/// beneath it. A brick's supporters always come earlier in the order.
fn settle(mut bricks: Vec<Brick>) -> Vec<Vec<usize>> {
    bricks.sort_by_key(|b| b.lo.z);
    // (x, y) -> (height of the top surface, brick forming it)
    let mut top: FxHashMap<(i64, i64), (i64, usize)> = FxHashMap::default();
    let mut supporters = Vec::with_capacity(bricks.len());

    for (i, brick) in bricks.iter().enumerate() {
        let footprint: Vec<_> = (brick.lo.x..=brick.hi.x)
            .flat_map(|x| (brick.lo.y..=brick.hi.y).map(move |y| (x, y)))
            .collect();
        let rest = footprint
            .iter()
            .filter_map(|xy| top.get(xy))
            .map(|&(z, _)| z)
            .max()
            .unwrap_or(0);

        let mut below: Vec<usize> = footprint
            .iter()
            .filter_map(|xy| top.get(xy))
            .filter(|&&(z, _)| z == rest && rest > 0)
            .map(|&(_, id)| id)
            .collect();
        below.sort_unstable();
        below.dedup();
        supporters.push(below);

        let height = rest + 1 + brick.hi.z - brick.lo.z;
        for xy in footprint {
            top.insert(xy, (height, i));
        }
    }
    supporters
}

pub fn part1(input: &str) -> Result<i64> {
    let supporters = settle(parse(input)?);
    let mut load_bearing = vec![false; supporters.len()];
    for below in &supporters {
        if let &[only] = below.as_slice() {
            load_bearing[only] = true;
        }
    }
    Ok(load_bearing.iter().filter(|&&b| !b).count() as i64)
}

pub fn part2(input: &str) -> Result<i64> {
    let supporters = settle(parse(input)?);
    let chain_reaction = |removed: usize| {
        let mut falling = vec![false; supporters.len()];
        falling[removed] = true;
        let mut count = 0i64;
        for (j, below) in supporters.iter().enumerate().skip(removed + 1) {
            if !below.is_empty() && below.iter().all(|&s| falling[s]) {
                falling[j] = true;
                count += 1;
            }
        }
        count
    };
    Ok((0..supporters.len())
        .into_par_iter()
        .map(chain_reaction)
        .sum())
}

#[cfg(test)]
mod tests {
    use super::*;

    use indoc::indoc;

    const EXAMPLE: &str = indoc! {"
        1,0,1~1,2,1
        0,0,2~2,0,2
        0,2,3~2,2,3
        0,0,4~0,2,4
        2,0,5~2,2,5
        0,1,6~2,1,6
        1,1,8~1,1,9
    "};

    #[test]
    fn test_part1() -> Result<()> {
        assert_eq!(part1(EXAMPLE)?, 5);
        Ok(())
    }

    #[test]
    fn test_part2() -> Result<()> {
        assert_eq!(part2(EXAMPLE)?, 7);
        Ok(())
    }

    #[test]
    fn vertical_stack() -> Result<()> {
        let stack = "0,0,5~0,0,6\n0,0,1~0,0,1\n0,0,3~0,0,3\n";
        assert_eq!(settle(parse(stack)?), [vec![], vec![0], vec![1]]);
        assert_eq!(part1(stack)?, 1);
        assert_eq!(part2(stack)?, 3);
        Ok(())
    }
}
