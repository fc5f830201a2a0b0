use anyhow::{Context, Result};
use petgraph::{
    graph::{DiGraph, NodeIndex},
    visit::EdgeRef,
};
use rustc_hash::FxHashMap;

use crate::aoc_tools::{Dir, Grid, Point};

fn is_open(grid: &Grid, p: Point) -> bool {
    grid.get_point(p).is_some_and(|b| b != b'#')
}

/// Whether stepping onto `tile` while moving in `dir` is allowed.
fn can_enter(tile: u8, dir: Dir, slippery: bool) -> bool {
    if !slippery {
        return true;
    }
    match tile {
        b'>' => dir == Dir::Right,
        b'<' => dir == Dir::Left,
        b'^' => dir == Dir::Up,
        b'v' => dir == Dir::Down,
        _ => true,
    }
}

/// The trail map with every corridor collapsed into a single weighted edge between junctions.
struct Trails {
    graph: DiGraph<Point, usize>,
    start: NodeIndex,
    end: NodeIndex,
}

impl Trails {
    fn build(grid: &Grid, slippery: bool) -> Result<Self> {
        let gap = |row: usize| {
            grid.row(row)
                .iter()
                .position(|&b| b == b'.')
                .map(|col| Point::new(row as i64, col as i64))
        };
        let start = gap(0).context("no gap in the top row")?;
        let end = gap(grid.height() - 1).context("no gap in the bottom row")?;

        let mut graph = DiGraph::new();
        let mut junctions = FxHashMap::default();
        for p in (0..grid.height() as i64)
            .flat_map(|r| (0..grid.width() as i64).map(move |c| Point::new(r, c)))
        {
            let exits = p.neighbors().into_iter().filter(|&n| is_open(grid, n)).count();
            if p == start || p == end || (is_open(grid, p) && exits > 2) {
                junctions.insert(p, graph.add_node(p));
            }
        }

        for (&from, &from_idx) in &junctions {
            for dir in Dir::ALL {
                if let Some((to, len)) = Self::follow(grid, &junctions, from, dir, slippery) {
                    graph.add_edge(from_idx, junctions[&to], len);
                }
            }
        }
        log::debug!(
            "trail graph has {} junctions and {} corridors",
            graph.node_count(),
            graph.edge_count()
        );

        Ok(Self {
            start: junctions[&start],
            end: junctions[&end],
            graph,
        })
    }

    /// Walks the corridor leaving `from` in `dir` up to the next junction.
    fn follow(
        grid: &Grid,
        junctions: &FxHashMap<Point, NodeIndex>,
        from: Point,
        mut dir: Dir,
        slippery: bool,
    ) -> Option<(Point, usize)> {
        let mut pos = from;
        let mut len = 0;
        loop {
            let next = pos.step(dir);
            if !can_enter(grid.get_point(next).filter(|&b| b != b'#')?, dir, slippery) {
                return None;
            }
            pos = next;
            len += 1;
            if junctions.contains_key(&pos) {
                return Some((pos, len));
            }
            dir = Dir::ALL
                .into_iter()
                .find(|&d| d != dir.reverse() && is_open(grid, pos.step(d)))?;
        }
    }

    fn longest_hike(&self) -> Option<usize> {
        let mut visited = vec![false; self.graph.node_count()];
        self.longest_from(self.start, &mut visited)
    }

    fn longest_from(&self, node: NodeIndex, visited: &mut [bool]) -> Option<usize> {
        if node == self.end {
            return Some(0);
        }
        visited[node.index()] = true;
        let mut best = None;
        for edge in self.graph.edges(node) {
            if visited[edge.target().index()] {
                continue;
            }
            if let Some(rest) = self.longest_from(edge.target(), visited) {
                best = best.max(Some(rest + edge.weight()));
            }
        }
        visited[node.index()] = false;
        best
    }
}

fn longest_hike(input: &str, slippery: bool) -> Result<i64> {
    let grid = Grid::parse(input)?;
    let trails = Trails::build(&grid, slippery)?;
    let steps = trails.longest_hike().context("no hike reaches the bottom row")?;
    Ok(steps as i64)
}

pub fn part1(input: &str) -> Result<i64> {
    longest_hike(input, true)
}

pub fn part2(input: &str) -> Result<i64> {
    longest_hike(input, false)
}

#[cfg(test)]
mod tests {
    use super::*;

    use indoc::indoc;

    const EXAMPLE: &str = indoc! {"
        #.#####################
        #.......#########...###
        #######.#########.#.###
        ###.....#.>.>.###.#.###
        ###v#####.#v#.###.#.###
        ###.>...#.#.#.....#...#
        ###v###.#.#.#########.#
        ###...#.#.#.......#...#
        #####.#.#.#######.#.###
        #.....#.#.#.......#...#
        #.#####.#.#.#########v#
        #.#...#...#...###...>.#
        #.#.#v#######v###.###v#
        #...#.>.#...>.>.#.###.#
        #####v#.#.###v#.#.###.#
        #.....#...#...#.#.#...#
        #.#########.###.#.#.###
        #...###...#...#...#.###
        ###.###.#.###v#####v###
        #...#...#.#.>.>.#.>.###
        #.###.###.#.###.#.#v###
        #.....###...###...#...#
        #####################.#
    "};

    #[test]
    fn test_part1() -> Result<()> {
        assert_eq!(part1(EXAMPLE)?, 94);
        Ok(())
    }

    #[test]
    fn test_part2() -> Result<()> {
        assert_eq!(part2(EXAMPLE)?, 154);
        Ok(())
    }

    #[test]
    fn slopes_block_uphill() {
        assert!(can_enter(b'>', Dir::Right, true));
        assert!(!can_enter(b'>', Dir::Left, true));
        assert!(can_enter(b'>', Dir::Left, false));
    }
}
