//! Shortest-path searches over implicit and explicit graphs.

use std::{cmp::Reverse, collections::BinaryHeap, hash::Hash};

use anyhow::{bail, Result};
use rustc_hash::FxHashMap;

/// Lowest total cost from any of `starts` to a node accepted by `is_goal`.
///
/// The graph is given implicitly through `successors`, which yields each neighbor together
/// with the (non-negative) cost of the step. Returns `None` when no goal is reachable.
pub fn dijkstra<N, S, I>(
    starts: impl IntoIterator<Item = N>,
    mut successors: S,
    mut is_goal: impl FnMut(&N) -> bool,
) -> Option<u64>
where
    N: Clone + Eq + Hash + Ord,
    S: FnMut(&N) -> I,
    I: IntoIterator<Item = (N, u64)>,
{
    let mut best: FxHashMap<N, u64> = FxHashMap::default();
    let mut queue = BinaryHeap::new();
    for start in starts {
        best.insert(start.clone(), 0);
        queue.push(Reverse((0, start)));
    }

    while let Some(Reverse((cost, node))) = queue.pop() {
        if is_goal(&node) {
            return Some(cost);
        }
        if best.get(&node).is_some_and(|&b| b < cost) {
            continue;
        }
        for (next, step) in successors(&node) {
            let next_cost = cost + step;
            if best.get(&next).map_or(true, |&b| next_cost < b) {
                best.insert(next.clone(), next_cost);
                queue.push(Reverse((next_cost, next)));
            }
        }
    }
    None
}

/// All-pairs shortest paths between nodes `0..node_count`.
///
/// `result[i][j]` is `None` when `j` can't be reached from `i`. Fails if the graph contains a
/// negative cycle.
pub fn floyd_warshall(
    node_count: usize,
    edges: impl IntoIterator<Item = (usize, usize, i64)>,
) -> Result<Vec<Vec<Option<i64>>>> {
    let mut dist = vec![vec![None; node_count]; node_count];
    for (i, row) in dist.iter_mut().enumerate() {
        row[i] = Some(0);
    }
    for (from, to, cost) in edges {
        let slot = &mut dist[from][to];
        if slot.map_or(true, |c| cost < c) {
            *slot = Some(cost);
        }
    }

    for k in 0..node_count {
        for i in 0..node_count {
            let Some(ik) = dist[i][k] else { continue };
            for j in 0..node_count {
                let Some(kj) = dist[k][j] else { continue };
                if dist[i][j].map_or(true, |ij| ik + kj < ij) {
                    dist[i][j] = Some(ik + kj);
                }
            }
        }
    }

    if (0..node_count).any(|i| dist[i][i].is_some_and(|c| c < 0)) {
        bail!("graph has a negative cycle so there is no shortest path");
    }
    Ok(dist)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dijkstra_line_graph() {
        // 0 -2-> 1 -5-> 2
        let edges = [vec![(1, 2)], vec![(2, 5)], vec![]];
        let cost = dijkstra([0usize], |&n| edges[n].clone(), |&n| n == 2);
        assert_eq!(cost, Some(7));
    }

    #[test]
    fn dijkstra_prefers_cheaper_detour() {
        let edges = [vec![(1, 10), (2, 1)], vec![], vec![(1, 2)]];
        assert_eq!(dijkstra([0usize], |&n| edges[n].clone(), |&n| n == 1), Some(3));
        assert_eq!(dijkstra([1usize], |&n| edges[n].clone(), |&n| n == 0), None);
    }

    #[test]
    fn floyd_warshall_all_pairs() -> Result<()> {
        let dist = floyd_warshall(3, [(0, 1, 4), (1, 2, 1), (0, 2, 7), (2, 0, -2)])?;
        assert_eq!(dist[0][2], Some(5));
        assert_eq!(dist[2][1], Some(2));
        assert_eq!(dist[1][0], Some(-1));
        Ok(())
    }

    #[test]
    fn floyd_warshall_unreachable_and_negative_cycle() {
        let dist = floyd_warshall(2, [(0, 1, 3)]).ok();
        assert_eq!(dist, Some(vec![vec![Some(0), Some(3)], vec![None, Some(0)]]));
        assert!(floyd_warshall(2, [(0, 1, 1), (1, 0, -2)]).is_err());
    }
}
