use anyhow::{bail, Context, Result};
use regex::Regex;
use rustc_hash::FxHashMap;

struct Network<'a> {
    instructions: &'a [u8],
    nodes: FxHashMap<&'a str, (&'a str, &'a str)>,
}

impl<'a> Network<'a> {
    fn parse(input: &'a str) -> Result<Self> {
        let node_re = Regex::new(r"^(\w+) = \((\w+), (\w+)\)$")?;
        let mut lines = input.lines().map(str::trim).filter(|l| !l.is_empty());
        let instructions = lines.next().context("missing instructions")?.as_bytes();
        if let Some(b) = instructions.iter().find(|&&b| b != b'L' && b != b'R') {
            bail!("unknown instruction {:?}", *b as char);
        }

        let mut nodes = FxHashMap::default();
        for line in lines {
            let caps = node_re
                .captures(line)
                .with_context(|| format!("bad node line: {:?}", line))?;
            let (_, [name, left, right]) = caps.extract();
            if nodes.insert(name, (left, right)).is_some() {
                bail!("node {:?} is defined twice", name);
            }
        }
        Ok(Self {
            instructions,
            nodes,
        })
    }

    /// Steps from `start` until `is_end` holds for the current node.
    ///
    /// After `instructions * nodes` steps some (node, instruction) state has repeated, so the
    /// walk is going in circles.
    fn steps(&self, start: &'a str, is_end: impl Fn(&str) -> bool) -> Result<i64> {
        let limit = self.instructions.len() * self.nodes.len().max(1);
        let mut node = start;
        for (step, &dir) in self.instructions.iter().cycle().enumerate() {
            if step > limit {
                bail!("{:?} never reaches an end node", start);
            }
            if is_end(node) {
                return Ok(step as i64);
            }
            let &(left, right) = self
                .nodes
                .get(node)
                .with_context(|| format!("unknown node {:?}", node))?;
            node = if dir == b'L' { left } else { right };
        }
        bail!("no instructions")
    }
}

pub fn part1(input: &str) -> Result<i64> {
    let network = Network::parse(input)?;
    if !network.nodes.contains_key("AAA") {
        bail!("network has no AAA node");
    }
    network.steps("AAA", |n| n == "ZZZ")
}

/// Every ghost's path loops back to its `..Z` node after the same number of steps it took to
/// reach it first, so the ghosts meet at the least common multiple.
pub fn part2(input: &str) -> Result<i64> {
    let network = Network::parse(input)?;
    let starts: Vec<&str> = network
        .nodes
        .keys()
        .copied()
        .filter(|n| n.ends_with('A'))
        .collect();
    if starts.is_empty() {
        bail!("network has no start nodes ending in A");
    }
    let mut total = 1;
    for start in starts {
        let steps = network.steps(start, |n| n.ends_with('Z'))?;
        log::debug!("ghost {} reaches an end after {} steps", start, steps);
        total = num::integer::lcm(total, steps);
    }
    Ok(total)
}
