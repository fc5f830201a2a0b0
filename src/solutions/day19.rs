use std::ops::Range;

use anyhow::{bail, Context, Result};
use regex::Regex;
use rustc_hash::FxHashMap;

/// Rating categories, in the order they appear on a part: x, m, a, s.
fn category(name: &str) -> Result<usize> {
    Ok(match name {
        "x" => 0,
        "m" => 1,
        "a" => 2,
        "s" => 3,
        _ => bail!("unknown category {:?}", name),
    })
}

#[derive(Debug)]
struct Rule<'a> {
    /// `(category, is_less_than, value)`; `None` for the fallback rule.
    condition: Option<(usize, bool, u64)>,
    target: &'a str,
}

type Workflows<'a> = FxHashMap<&'a str, Vec<Rule<'a>>>;

fn parse(input: &str) -> Result<(Workflows<'_>, Vec<[u64; 4]>)> {
    let workflow_re = Regex::new(r"^(\w+)\{(.*)\}$")?;
    let rule_re = Regex::new(r"^([xmas])([<>])(\d+):(\w+)$")?;
    let part_re = Regex::new(r"^\{x=(\d+),m=(\d+),a=(\d+),s=(\d+)\}$")?;

    let mut workflows = FxHashMap::default();
    let mut parts = Vec::new();
    for line in input.lines().map(str::trim).filter(|l| !l.is_empty()) {
        if let Some(caps) = part_re.captures(line) {
            let (_, ratings) = caps.extract::<4>();
            let mut part = [0u64; 4];
            for (slot, r) in part.iter_mut().zip(ratings) {
                *slot = r.parse()?;
            }
            parts.push(part);
            continue;
        }

        let (_, [name, rules]) = workflow_re
            .captures(line)
            .with_context(|| format!("bad line {:?}", line))?
            .extract();
        let rules = rules
            .split(',')
            .map(|rule| {
                if let Some(caps) = rule_re.captures(rule) {
                    let (_, [cat, op, value, target]) = caps.extract();
                    Ok(Rule {
                        condition: Some((category(cat)?, op == "<", value.parse::<u64>()?)),
                        target,
                    })
                } else if rule.chars().all(|c| c.is_ascii_alphabetic()) {
                    Ok(Rule {
                        condition: None,
                        target: rule,
                    })
                } else {
                    bail!("bad rule {:?} in workflow {}", rule, name)
                }
            })
            .collect::<Result<Vec<_>>>()?;
        workflows.insert(name, rules);
    }
    if !workflows.contains_key("in") {
        bail!("no `in` workflow");
    }
    Ok((workflows, parts))
}

fn accepted(workflows: &Workflows<'_>, part: &[u64; 4]) -> Result<bool> {
    let mut current = "in";
    loop {
        let rules = workflows
            .get(current)
            .with_context(|| format!("unknown workflow {:?}", current))?;
        let rule = rules
            .iter()
            .find(|r| match r.condition {
                Some((cat, true, value)) => part[cat] < value,
                Some((cat, false, value)) => part[cat] > value,
                None => true,
            })
            .with_context(|| format!("workflow {:?} has no matching rule", current))?;
        match rule.target {
            "A" => return Ok(true),
            "R" => return Ok(false),
            next => current = next,
        }
    }
}

/// Number of rating combinations within `ranges` that end up accepted starting at `workflow`.
fn count_accepted(
    workflows: &Workflows<'_>,
    workflow: &str,
    mut ranges: [Range<u64>; 4],
) -> Result<u64> {
    match workflow {
        "A" => return Ok(ranges.iter().map(|r| r.end - r.start).product()),
        "R" => return Ok(0),
        _ => {}
    }
    let rules = workflows
        .get(workflow)
        .with_context(|| format!("unknown workflow {:?}", workflow))?;

    let mut total = 0;
    for rule in rules {
        let Some((cat, less, value)) = rule.condition else {
            return Ok(total + count_accepted(workflows, rule.target, ranges)?);
        };
        let r = ranges[cat].clone();
        let (matching, rest) = if less {
            (r.start..value.clamp(r.start, r.end), value.clamp(r.start, r.end)..r.end)
        } else {
            let split = (value + 1).clamp(r.start, r.end);
            (split..r.end, r.start..split)
        };
        if !matching.is_empty() {
            let mut sub = ranges.clone();
            sub[cat] = matching;
            total += count_accepted(workflows, rule.target, sub)?;
        }
        if rest.is_empty() {
            return Ok(total);
        }
        ranges[cat] = rest;
    }
    Ok(total)
}

pub fn part1(input: &str) -> Result<i64> {
    let (workflows, parts) = parse(input)?;
    let mut total = 0;
    for part in &parts {
        if accepted(&workflows, part)? {
            total += part.iter().sum::<u64>();
        }
    }
    Ok(total as i64)
}

pub fn part2(input: &str) -> Result<i64> {
    let (workflows, _) = parse(input)?;
    let all = [1..4001, 1..4001, 1..4001, 1..4001];
    Ok(count_accepted(&workflows, "in", all)? as i64)
}
