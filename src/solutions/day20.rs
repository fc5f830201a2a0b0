use std::collections::VecDeque;

use anyhow::{bail, Context, Result};
use rustc_hash::FxHashMap;

const BROADCASTER: &str = "broadcaster";
/// Give up looking for the `rx` period after this many button presses.
const MAX_PRESSES: u64 = 1 << 20;

#[derive(Debug, Clone)]
enum Module {
    Broadcaster,
    FlipFlop { on: bool },
    /// Remembers the last pulse received from each input.
    Conjunction { memory: FxHashMap<usize, bool> },
    /// Mentioned only as a destination.
    Untyped,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Pulse {
    from: usize,
    to: usize,
    high: bool,
}

struct Machine<'a> {
    names: Vec<&'a str>,
    modules: Vec<Module>,
    outputs: Vec<Vec<usize>>,
    broadcaster: usize,
}

impl<'a> Machine<'a> {
    fn parse(input: &'a str) -> Result<Self> {
        let mut ids: FxHashMap<&str, usize> = FxHashMap::default();
        let mut names = Vec::new();
        let mut id = |name: &'a str, names: &mut Vec<&'a str>| {
            *ids.entry(name).or_insert_with(|| {
                names.push(name);
                names.len() - 1
            })
        };

        let mut definitions = Vec::new();
        for line in input.lines().map(str::trim).filter(|l| !l.is_empty()) {
            let (module, targets) = line
                .split_once("->")
                .with_context(|| format!("bad module line {:?}", line))?;
            let module = module.trim();
            let (module, name) = match module.as_bytes().first() {
                Some(b'%') => (Module::FlipFlop { on: false }, &module[1..]),
                Some(b'&') => (
                    Module::Conjunction {
                        memory: FxHashMap::default(),
                    },
                    &module[1..],
                ),
                _ if module == BROADCASTER => (Module::Broadcaster, module),
                _ => bail!("unknown module type {:?}", module),
            };
            let idx = id(name, &mut names);
            let targets = targets
                .split(',')
                .map(|t| id(t.trim(), &mut names))
                .collect::<Vec<_>>();
            definitions.push((idx, module, targets));
        }

        let mut modules = vec![Module::Untyped; names.len()];
        let mut outputs = vec![Vec::new(); names.len()];
        for (idx, module, targets) in definitions {
            modules[idx] = module;
            outputs[idx] = targets;
        }
        for (from, targets) in outputs.iter().enumerate() {
            for &to in targets {
                if let Module::Conjunction { memory } = &mut modules[to] {
                    memory.insert(from, false);
                }
            }
        }
        let broadcaster = names
            .iter()
            .position(|&n| n == BROADCASTER)
            .context("no broadcaster module")?;

        Ok(Self {
            names,
            modules,
            outputs,
            broadcaster,
        })
    }

    fn index_of(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|&n| n == name)
    }

    /// Pushes the button once and feeds every pulse sent (including the button's) to `observe`.
    fn press(&mut self, mut observe: impl FnMut(Pulse)) {
        let mut queue = VecDeque::from([Pulse {
            from: usize::MAX,
            to: self.broadcaster,
            high: false,
        }]);
        while let Some(pulse) = queue.pop_front() {
            observe(pulse);
            let send = match &mut self.modules[pulse.to] {
                Module::Broadcaster => pulse.high,
                Module::FlipFlop { on } => {
                    if pulse.high {
                        continue;
                    }
                    *on = !*on;
                    *on
                }
                Module::Conjunction { memory } => {
                    memory.insert(pulse.from, pulse.high);
                    !memory.values().all(|&h| h)
                }
                Module::Untyped => continue,
            };
            for &to in &self.outputs[pulse.to] {
                queue.push_back(Pulse {
                    from: pulse.to,
                    to,
                    high: send,
                });
            }
        }
    }
}

pub fn part1(input: &str) -> Result<i64> {
    let mut machine = Machine::parse(input)?;
    let (mut low, mut high) = (0, 0);
    for _ in 0..1000 {
        machine.press(|p| {
            if p.high {
                high += 1;
            } else {
                low += 1;
            }
        });
    }
    Ok(low * high)
}

/// `rx` is fed by a single conjunction, which only sends a low pulse when all of its inputs
/// last sent high. Each of those inputs fires high periodically, so `rx` first sees a low
/// pulse at the least common multiple of their periods.
pub fn part2(input: &str) -> Result<i64> {
    let mut machine = Machine::parse(input)?;
    let rx = machine.index_of("rx").context("no rx module")?;
    let feeders: Vec<usize> = (0..machine.names.len())
        .filter(|&m| machine.outputs[m].contains(&rx))
        .collect();
    let &[feeder] = feeders.as_slice() else {
        bail!("rx should have exactly one input, found {}", feeders.len());
    };
    let Module::Conjunction { memory } = &machine.modules[feeder] else {
        bail!("rx input {} is not a conjunction", machine.names[feeder]);
    };
    if memory.is_empty() {
        bail!("rx input {} has no inputs of its own", machine.names[feeder]);
    }
    let mut periods: FxHashMap<usize, Option<u64>> = memory.keys().map(|&k| (k, None)).collect();

    let mut presses = 0;
    while periods.values().any(Option::is_none) {
        presses += 1;
        if presses > MAX_PRESSES {
            bail!("inputs of {} never all fired", machine.names[feeder]);
        }
        machine.press(|p| {
            if p.to == feeder && p.high {
                if let Some(period @ None) = periods.get_mut(&p.from) {
                    *period = Some(presses);
                }
            }
        });
    }

    let mut total = 1;
    for (&input, &period) in &periods {
        let period = period.unwrap_or(1);
        log::debug!("{} sends high every {} presses", machine.names[input], period);
        total = num::integer::lcm(total, period);
    }
    Ok(total as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    use indoc::indoc;

    #[test]
    fn test_part1() -> Result<()> {
        let example = indoc! {"
            broadcaster -> a, b, c
            %a -> b
            %b -> c
            %c -> inv
            &inv -> a
        "};
        assert_eq!(part1(example)?, 32000000);

        let interesting = indoc! {"
            broadcaster -> a
            %a -> inv, con
            &inv -> b
            %b -> con
            &con -> output
        "};
        assert_eq!(part1(interesting)?, 11687500);
        Ok(())
    }

    #[test]
    fn test_part2() -> Result<()> {
        // `ia` first fires high on press 2 and `ib` on press 4.
        let example = indoc! {"
            broadcaster -> a1, b1
            %a1 -> ia
            &ia -> hub
            %b1 -> b2
            %b2 -> ib
            &ib -> hub
            &hub -> rx
        "};
        assert_eq!(part2(example)?, 4);
        assert!(part2("broadcaster -> a\n%a -> b").is_err());
        assert!(part2("broadcaster -> a\n%a -> b\n&hub -> rx\n").is_err());
        Ok(())
    }
}
