use aho_corasick::AhoCorasick;
use anyhow::Result;

pub fn part1(input: &str) -> Result<i64> {
    calibration_sum(input, false)
}

pub fn part2(input: &str) -> Result<i64> {
    calibration_sum(input, true)
}

fn calibration_sum(input: &str, spelled: bool) -> Result<i64> {
    // NOTE: regex doesn't work since it doesn't support overlapping matches (look-around)
    let patterns = &[
        "\n", "1", "2", "3", "4", "5", "6", "7", "8", "9", "one", "two", "three", "four", "five",
        "six", "seven", "eight", "nine",
    ];
    let ac = AhoCorasick::new(patterns)?;

    let mut sum = 0;
    let mut first = 0;
    let mut last = 0;

    for mat in ac.find_overlapping_iter(input) {
        let digit = match mat.pattern().as_usize() {
            0 => {
                sum += first * 10 + last;
                first = 0;
                last = 0;
                continue;
            }
            d @ 1..=9 => d,
            d if spelled => d - 9,
            _ => continue,
        };

        if first == 0 {
            first = digit;
        }
        last = digit;
    }
    // Last line without a trailing newline.
    sum += first * 10 + last;

    Ok(sum as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    use indoc::indoc;

    #[test]
    fn test_part1() -> Result<()> {
        let example = indoc! {"
            1abc2
            pqr3stu8vwx
            a1b2c3d4e5f
            treb7uchet
        "};
        assert_eq!(part1(example)?, 142);
        assert_eq!(part1("1abc2")?, 12);
        Ok(())
    }

    #[test]
    fn test_part2() -> Result<()> {
        let example = indoc! {"
            two1nine
            eightwothree
            abcone2threexyz
            xtwone3four
            4nineeightseven2
            zoneight234
            7pqrstsixteen
        "};
        assert_eq!(part2(example)?, 281);
        assert_eq!(part2("twone\n")?, 21);
        assert_eq!(part1("twone\n")?, 0);
        Ok(())
    }
}
