use std::ops::Range;

use anyhow::{bail, Context, Result};

/// One `destination source length` line of a map.
#[derive(Debug, Clone, Copy)]
struct MapRange {
    dst: i64,
    src: i64,
    len: i64,
}

impl MapRange {
    fn source(&self) -> Range<i64> {
        self.src..self.src + self.len
    }
}

/// A `x-to-y map:` block. Numbers not covered by any range map to themselves.
#[derive(Debug)]
struct Map {
    ranges: Vec<MapRange>,
}

impl Map {
    fn convert(&self, n: i64) -> i64 {
        self.ranges
            .iter()
            .find(|r| r.source().contains(&n))
            .map_or(n, |r| n - r.src + r.dst)
    }

    /// Maps a whole range of numbers, splitting it where it straddles map ranges.
    fn convert_ranges(&self, mut pending: Vec<Range<i64>>) -> Vec<Range<i64>> {
        let mut done = Vec::new();
        for r in &self.ranges {
            let src = r.source();
            let mut rest = Vec::new();
            for range in pending {
                let lo = range.start.max(src.start);
                let hi = range.end.min(src.end);
                if lo >= hi {
                    rest.push(range);
                    continue;
                }
                done.push(lo - r.src + r.dst..hi - r.src + r.dst);
                if range.start < lo {
                    rest.push(range.start..lo);
                }
                if hi < range.end {
                    rest.push(hi..range.end);
                }
            }
            pending = rest;
        }
        done.extend(pending);
        done
    }
}

struct Almanac {
    seeds: Vec<i64>,
    maps: Vec<Map>,
}

fn parse(input: &str) -> Result<Almanac> {
    let mut blocks = input.trim().split("\n\n");
    let seeds = blocks
        .next()
        .and_then(|l| l.strip_prefix("seeds:"))
        .context("missing seeds line")?
        .split_whitespace()
        .map(str::parse)
        .collect::<Result<Vec<i64>, _>>()?;

    let maps = blocks
        .map(|block| {
            let mut lines = block.lines();
            let header = lines.next().unwrap_or_default();
            if !header.trim_end().ends_with("map:") {
                bail!("unexpected map header {:?}", header);
            }
            let ranges = lines
                .map(|line| {
                    let nums = line
                        .split_whitespace()
                        .map(str::parse)
                        .collect::<Result<Vec<i64>, _>>()?;
                    let &[dst, src, len] = nums.as_slice() else {
                        bail!("expected three numbers, got {:?}", line);
                    };
                    Ok(MapRange { dst, src, len })
                })
                .collect::<Result<Vec<_>>>()?;
            Ok(Map { ranges })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(Almanac { seeds, maps })
}

pub fn part1(input: &str) -> Result<i64> {
    let almanac = parse(&input.replace('\r', ""))?;
    almanac
        .seeds
        .iter()
        .map(|&seed| almanac.maps.iter().fold(seed, |n, map| map.convert(n)))
        .min()
        .context("no seeds")
}

pub fn part2(input: &str) -> Result<i64> {
    let almanac = parse(&input.replace('\r', ""))?;
    if almanac.seeds.len() % 2 != 0 {
        bail!("seed ranges must come in pairs");
    }
    let seeds: Vec<Range<i64>> = almanac
        .seeds
        .chunks_exact(2)
        .map(|pair| pair[0]..pair[0] + pair[1])
        .collect();
    let locations = almanac
        .maps
        .iter()
        .fold(seeds, |ranges, map| map.convert_ranges(ranges));
    locations
        .iter()
        .filter(|r| !r.is_empty())
        .map(|r| r.start)
        .min()
        .context("no seeds")
}

#[cfg(test)]
mod tests {
    use super::*;

    use indoc::indoc;

    const EXAMPLE: &str = indoc! {"
        seeds: 79 14 55 13

        seed-to-soil map:
        50 98 2
        52 50 48

        soil-to-fertilizer map:
        0 15 37
        37 52 2
        39 0 15

        fertilizer-to-water map:
        49 53 8
        0 11 42
        42 0 7
        57 7 4

        water-to-light map:
        88 18 7
        18 25 70

        light-to-temperature map:
        45 77 23
        81 45 19
        68 64 13

        temperature-to-humidity map:
        0 69 1
        1 0 69

        humidity-to-location map:
        60 56 37
        56 93 4
    "};

    #[test]
    fn test_part1() -> Result<()> {
        assert_eq!(part1(EXAMPLE)?, 35);
        Ok(())
    }

    #[test]
    fn test_part2() -> Result<()> {
        assert_eq!(part2(EXAMPLE)?, 46);
        Ok(())
    }

    #[test]
    fn splits_straddling_ranges() {
        let map = Map {
            ranges: vec![MapRange {
                dst: 100,
                src: 10,
                len: 5,
            }],
        };
        let mut out = map.convert_ranges(vec![8..12, 14..20]);
        out.sort_by_key(|r| r.start);
        assert_eq!(out, vec![8..10, 15..20, 100..102, 104..105]);
    }
}
