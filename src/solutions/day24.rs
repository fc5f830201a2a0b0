use anyhow::{bail, Context, Result};
use nalgebra::{Matrix2, Vector2};
use num::{BigInt, BigRational, ToPrimitive, Zero};

use crate::aoc_tools::{between, Point3};

const TEST_AREA: (f64, f64) = (200_000_000_000_000.0, 400_000_000_000_000.0);

#[derive(Debug, Clone, Copy)]
struct Hailstone {
    pos: Point3,
    vel: Point3,
}

fn parse(input: &str) -> Result<Vec<Hailstone>> {
    input
        .lines()
        .filter(|l| !l.trim().is_empty())
        .map(|line| {
            let (pos, vel) = line
                .split_once('@')
                .with_context(|| format!("bad hailstone {:?}", line))?;
            Ok(Hailstone {
                pos: pos.parse()?,
                vel: vel.parse()?,
            })
        })
        .collect()
}

/// Where the XY paths of two hailstones cross, if both get there in the future.
fn future_crossing(a: &Hailstone, b: &Hailstone) -> Option<Vector2<f64>> {
    // a.pos + t * a.vel = b.pos + s * b.vel
    let m = Matrix2::new(
        a.vel.x as f64,
        -b.vel.x as f64,
        a.vel.y as f64,
        -b.vel.y as f64,
    );
    let rhs = Vector2::new((b.pos.x - a.pos.x) as f64, (b.pos.y - a.pos.y) as f64);
    let ts = m.try_inverse()? * rhs;
    if ts.x < 0.0 || ts.y < 0.0 {
        return None;
    }
    Some(Vector2::new(
        a.pos.x as f64 + ts.x * a.vel.x as f64,
        a.pos.y as f64 + ts.x * a.vel.y as f64,
    ))
}

pub fn crossings_in_area(input: &str, lo: f64, hi: f64) -> Result<i64> {
    let stones = parse(input)?;
    let mut count = 0;
    for (i, a) in stones.iter().enumerate() {
        for b in &stones[i + 1..] {
            if let Some(p) = future_crossing(a, b) {
                if between(p.x, lo, hi) && between(p.y, lo, hi) {
                    count += 1;
                }
            }
        }
    }
    Ok(count)
}

pub fn part1(input: &str) -> Result<i64> {
    crossings_in_area(input, TEST_AREA.0, TEST_AREA.1)
}

fn cross(a: [i64; 3], b: [i64; 3]) -> [i128; 3] {
    let [a0, a1, a2] = a.map(i128::from);
    let [b0, b1, b2] = b.map(i128::from);
    [a1 * b2 - a2 * b1, a2 * b0 - a0 * b2, a0 * b1 - a1 * b0]
}

fn coords(p: Point3) -> [i64; 3] {
    [p.x, p.y, p.z]
}

/// Three linear equations in the rock's position `P` and velocity `V`.
///
/// The rock hits stone `i` iff `(P - p_i) x (V - v_i) = 0`. Subtracting that equation for two
/// stones cancels the non-linear `P x V` term, leaving
/// `P x (v_i - v_j) + (p_i - p_j) x V = p_i x v_i - p_j x v_j`.
fn rock_equations(a: &Hailstone, b: &Hailstone) -> [[i128; 7]; 3] {
    let (pa, va, pb, vb) = (coords(a.pos), coords(a.vel), coords(b.pos), coords(b.vel));
    let dv: [i128; 3] = std::array::from_fn(|k| i128::from(va[k] - vb[k]));
    let dp: [i128; 3] = std::array::from_fn(|k| i128::from(pa[k] - pb[k]));
    let (ca, cb) = (cross(pa, va), cross(pb, vb));
    let r: [i128; 3] = std::array::from_fn(|k| ca[k] - cb[k]);
    [
        [0, dv[2], -dv[1], 0, -dp[2], dp[1], r[0]],
        [-dv[2], 0, dv[0], dp[2], 0, -dp[0], r[1]],
        [dv[1], -dv[0], 0, -dp[1], dp[0], 0, r[2]],
    ]
}

/// Solves an augmented linear system exactly, `None` if it is singular.
fn solve(rows: Vec<[i128; 7]>) -> Option<Vec<BigRational>> {
    let mut m: Vec<Vec<BigRational>> = rows
        .iter()
        .map(|row| {
            row.iter()
                .map(|&v| BigRational::from_integer(BigInt::from(v)))
                .collect()
        })
        .collect();
    let n = m.len();
    for col in 0..n {
        let pivot = (col..n).find(|&r| !m[r][col].is_zero())?;
        m.swap(col, pivot);
        for r in 0..n {
            if r == col || m[r][col].is_zero() {
                continue;
            }
            let factor = &m[r][col] / &m[col][col];
            for k in col..=n {
                let delta = &factor * &m[col][k];
                m[r][k] -= delta;
            }
        }
    }
    Some((0..n).map(|i| &m[i][n] / &m[i][i]).collect())
}

pub fn part2(input: &str) -> Result<i64> {
    let stones = parse(input)?;
    for (i, a) in stones.iter().enumerate() {
        for (j, b) in stones.iter().enumerate().skip(i + 1) {
            for c in &stones[j + 1..] {
                let mut rows = rock_equations(a, b).to_vec();
                rows.extend(rock_equations(a, c));
                let Some(rock) = solve(rows) else {
                    continue;
                };
                log::debug!("rock thrown from {}, {}, {}", rock[0], rock[1], rock[2]);
                let sum: BigRational = rock[..3].iter().sum();
                if !sum.is_integer() {
                    bail!("rock starts at a fractional position {}", sum);
                }
                return sum
                    .to_integer()
                    .to_i64()
                    .context("rock position out of range");
            }
        }
    }
    bail!("no three hailstones pin down the rock's path")
}

#[cfg(test)]
mod tests {
    use super::*;

    use indoc::indoc;

    const EXAMPLE: &str = indoc! {"
        19, 13, 30 @ -2,  1, -2
        18, 19, 22 @ -1, -1, -2
        20, 25, 34 @ -2, -2, -4
        12, 31, 28 @ -1, -2, -1
        20, 19, 15 @  1, -5, -3
    "};

    #[test]
    fn test_part1() -> Result<()> {
        assert_eq!(crossings_in_area(EXAMPLE, 7.0, 27.0)?, 2);
        Ok(())
    }

    #[test]
    fn test_part2() -> Result<()> {
        assert_eq!(part2(EXAMPLE)?, 47);
        Ok(())
    }

    #[test]
    fn skips_singular_triples() -> Result<()> {
        // The first two stones are identical, so every triple using both is singular.
        let duplicated = format!("19, 13, 30 @ -2,  1, -2\n{}", EXAMPLE);
        assert_eq!(part2(&duplicated)?, 47);
        Ok(())
    }

    #[test]
    fn parallel_paths_never_cross() -> Result<()> {
        let stones = parse("0, 0, 0 @ 1, 1, 0\n0, 1, 0 @ 2, 2, 0\n")?;
        assert_eq!(future_crossing(&stones[0], &stones[1]), None);
        Ok(())
    }
}
