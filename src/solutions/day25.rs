use std::collections::BinaryHeap;

use anyhow::{bail, Context, Result};
use petgraph::{
    algo::connected_components,
    graph::{NodeIndex, UnGraph},
    visit::EdgeRef,
};
use rustc_hash::FxHashMap;

fn component<'a>(
    graph: &mut UnGraph<&'a str, ()>,
    ids: &mut FxHashMap<&'a str, NodeIndex>,
    name: &'a str,
) -> NodeIndex {
    *ids.entry(name).or_insert_with(|| graph.add_node(name))
}

fn parse(input: &str) -> Result<UnGraph<&str, ()>> {
    let mut graph = UnGraph::new_undirected();
    let mut ids = FxHashMap::default();
    for line in input.lines().filter(|l| !l.trim().is_empty()) {
        let (left, rights) = line
            .split_once(':')
            .with_context(|| format!("bad wiring line {:?}", line))?;
        let left = component(&mut graph, &mut ids, left.trim());
        for right in rights.split_whitespace() {
            let right = component(&mut graph, &mut ids, right);
            graph.add_edge(left, right, ());
        }
    }
    Ok(graph)
}

/// Global minimum cut of an undirected graph (Stoer–Wagner).
///
/// Returns the number of edges cut and how many nodes end up on one side.
fn min_cut(graph: &UnGraph<&str, ()>) -> Option<(i64, usize)> {
    let n = graph.node_count();
    let mut adj: Vec<FxHashMap<usize, i64>> = vec![FxHashMap::default(); n];
    for e in graph.edge_references() {
        let (a, b) = (e.source().index(), e.target().index());
        if a != b {
            *adj[a].entry(b).or_default() += 1;
            *adj[b].entry(a).or_default() += 1;
        }
    }
    let mut merged = vec![1usize; n];
    let mut active: Vec<usize> = (0..n).collect();
    let mut best: Option<(i64, usize)> = None;

    while active.len() > 1 {
        // Maximum adjacency order: repeatedly add the node most tightly connected to the set.
        let mut weight = vec![0i64; n];
        let mut added = vec![false; n];
        let mut queue = BinaryHeap::from([(0, active[0])]);
        let (mut s, mut t) = (active[0], active[0]);
        let mut cut = 0;
        while let Some((w, v)) = queue.pop() {
            if added[v] || w != weight[v] {
                continue;
            }
            added[v] = true;
            (s, t, cut) = (t, v, w);
            for (&u, &c) in &adj[v] {
                if !added[u] {
                    weight[u] += c;
                    queue.push((weight[u], u));
                }
            }
        }

        if best.map_or(true, |(b, _)| cut < b) {
            best = Some((cut, merged[t]));
        }

        // Merge t into s.
        for (u, c) in std::mem::take(&mut adj[t]) {
            adj[u].remove(&t);
            if u != s {
                *adj[s].entry(u).or_default() += c;
                *adj[u].entry(s).or_default() += c;
            }
        }
        merged[s] += merged[t];
        active.retain(|&v| v != t);
    }
    best
}

pub fn part1(input: &str) -> Result<i64> {
    let graph = parse(input)?;
    if connected_components(&graph) != 1 {
        bail!("the machine is already split apart");
    }
    let (cut, side) = min_cut(&graph).context("need at least two components")?;
    log::debug!("minimum cut of {} wires leaves {} components on one side", cut, side);
    if cut != 3 {
        bail!("expected to cut exactly 3 wires, minimum cut is {}", cut);
    }
    Ok((side * (graph.node_count() - side)) as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    use indoc::indoc;

    const EXAMPLE: &str = indoc! {"
        jqt: rhn xhk nvd
        rsh: frs pzl lsr
        xhk: hfx
        cmg: qnr nvd lhk bvb
        rhn: xhk bvb hfx
        bvb: xhk hfx
        pzl: lsr hfx nvd
        qnr: nvd
        ntq: jqt hfx bvb xhk
        nvd: lhk
        lsr: lhk
        rzs: qnr cmg lsr rsh
        frs: qnr lhk lsr
    "};

    #[test]
    fn test_part1() -> Result<()> {
        assert_eq!(part1(EXAMPLE)?, 54);
        Ok(())
    }

    #[test]
    fn min_cut_of_two_triangles() -> Result<()> {
        let graph = parse("a: b c\nb: c\nd: e f\ne: f\nc: d\n")?;
        assert_eq!(min_cut(&graph), Some((1, 3)));
        assert!(part1("a: b c\nb: c\nd: e f\ne: f\nc: d\n").is_err());
        Ok(())
    }
}
