use anyhow::{bail, Context, Result};

const CARDS: &[u8] = b"23456789TJQKA";
const CARDS_WITH_JOKER: &[u8] = b"J23456789TQKA";

/// A hand reduced to something directly comparable: the group sizes (which encode the hand
/// type, largest first) followed by the card strengths in their original order.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
struct HandKey {
    groups: Vec<u8>,
    strengths: [u8; 5],
}

fn hand_key(hand: &[u8], jokers: bool) -> Result<HandKey> {
    let order = if jokers { CARDS_WITH_JOKER } else { CARDS };
    let mut strengths = [0; 5];
    let mut counts = [0u8; 13];
    for (slot, &card) in strengths.iter_mut().zip(hand) {
        let strength = order
            .iter()
            .position(|&c| c == card)
            .with_context(|| format!("unknown card {:?}", card as char))?;
        *slot = strength as u8;
        counts[strength] += 1;
    }

    let joker_count = if jokers { std::mem::take(&mut counts[0]) } else { 0 };
    let mut groups: Vec<u8> = counts.into_iter().filter(|&c| c > 0).collect();
    groups.sort_unstable_by(|a, b| b.cmp(a));
    match groups.first_mut() {
        Some(largest) => *largest += joker_count,
        None => groups.push(joker_count),
    }
    Ok(HandKey { groups, strengths })
}

fn total_winnings(input: &str, jokers: bool) -> Result<i64> {
    let mut hands = input
        .lines()
        .filter(|l| !l.trim().is_empty())
        .map(|line| {
            let (hand, bid) = line
                .split_once(' ')
                .with_context(|| format!("bad hand line: {:?}", line))?;
            if hand.len() != 5 {
                bail!("hand {:?} must have five cards", hand);
            }
            Ok((hand_key(hand.as_bytes(), jokers)?, bid.trim().parse::<i64>()?))
        })
        .collect::<Result<Vec<_>>>()?;
    hands.sort_unstable_by(|a, b| a.0.cmp(&b.0));
    Ok(hands
        .iter()
        .enumerate()
        .map(|(rank, (_, bid))| (rank as i64 + 1) * bid)
        .sum())
}

pub fn part1(input: &str) -> Result<i64> {
    total_winnings(input, false)
}

pub fn part2(input: &str) -> Result<i64> {
    total_winnings(input, true)
}

#[cfg(test)]
mod tests {
    use super::*;

    use indoc::indoc;

    const EXAMPLE: &str = indoc! {"
        32T3K 765
        T55J5 684
        KK677 28
        KTJJT 220
        QQQJA 483
    "};

    #[test]
    fn test_part1() -> Result<()> {
        assert_eq!(part1(EXAMPLE)?, 6440);
        Ok(())
    }

    #[test]
    fn test_part2() -> Result<()> {
        assert_eq!(part2(EXAMPLE)?, 5905);
        Ok(())
    }

    #[test]
    fn jokers_join_the_largest_group() -> Result<()> {
        assert_eq!(hand_key(b"JJJJJ", true)?.groups, [5]);
        assert_eq!(hand_key(b"KTJJT", true)?.groups, [4, 1]);
        assert_eq!(hand_key(b"KTJJT", false)?.groups, [2, 2, 1]);
        assert!(hand_key(b"KT1JT", false).is_err());
        Ok(())
    }
}
