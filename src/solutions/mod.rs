use anyhow::Result;

pub mod day01;
pub mod day02;
pub mod day03;
pub mod day04;
pub mod day05;
pub mod day06;
pub mod day07;
pub mod day08;
pub mod day09;
pub mod day10;
pub mod day11;
pub mod day12;
pub mod day13;
pub mod day14;
pub mod day15;
pub mod day16;
pub mod day17;
pub mod day18;
pub mod day19;
pub mod day20;
pub mod day21;
pub mod day22;
pub mod day23;
pub mod day24;
pub mod day25;

/// One half of a day's puzzle: takes the raw input and produces the answer.
pub type Part = fn(&str) -> Result<i64>;

/// Both halves of a day. The last day of the calendar only has a first half.
#[derive(Clone, Copy)]
pub struct Day {
    pub part1: Part,
    pub part2: Option<Part>,
}

impl Day {
    const fn both(part1: Part, part2: Part) -> Self {
        Self {
            part1,
            part2: Some(part2),
        }
    }

    pub fn parts(&self) -> impl Iterator<Item = (usize, Part)> {
        [Some(self.part1), self.part2]
            .into_iter()
            .enumerate()
            .filter_map(|(i, part)| Some((i + 1, part?)))
    }
}

pub const ALL_SOLUTIONS: [Day; 25] = [
    Day::both(day01::part1, day01::part2),
    Day::both(day02::part1, day02::part2),
    Day::both(day03::part1, day03::part2),
    Day::both(day04::part1, day04::part2),
    Day::both(day05::part1, day05::part2),
    Day::both(day06::part1, day06::part2),
    Day::both(day07::part1, day07::part2),
    Day::both(day08::part1, day08::part2),
    Day::both(day09::part1, day09::part2),
    Day::both(day10::part1, day10::part2),
    Day::both(day11::part1, day11::part2),
    Day::both(day12::part1, day12::part2),
    Day::both(day13::part1, day13::part2),
    Day::both(day14::part1, day14::part2),
    Day::both(day15::part1, day15::part2),
    Day::both(day16::part1, day16::part2),
    Day::both(day17::part1, day17::part2),
    Day::both(day18::part1, day18::part2),
    Day::both(day19::part1, day19::part2),
    Day::both(day20::part1, day20::part2),
    Day::both(day21::part1, day21::part2),
    Day::both(day22::part1, day22::part2),
    Day::both(day23::part1, day23::part2),
    Day::both(day24::part1, day24::part2),
    Day {
        part1: day25::part1,
        part2: None,
    },
];
