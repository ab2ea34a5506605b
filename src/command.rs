//! Player input parsing.
//!
//! A line of input is trimmed and compared case-insensitively. It is either
//! one of the two command words or a two-character cell such as `D5`.
//! Parsing never fails: anything unrecognised becomes [`Command::Invalid`].

use crate::common::Coord;

/// Why a line was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidInput {
    /// Not a letter followed by a digit.
    BadFormat,
    /// Letter and digit, but outside `A1`..`H8`.
    OutOfBounds,
}

/// A parsed line of player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Exit,
    ShowResults,
    Shot(Coord),
    Invalid(InvalidInput),
}

pub const EXIT_WORD: &str = "EXIT";
pub const RESULTS_WORD: &str = "RESULTS";

pub fn parse(raw: &str) -> Command {
    let input = raw.trim();
    if input.eq_ignore_ascii_case(EXIT_WORD) {
        return Command::Exit;
    }
    if input.eq_ignore_ascii_case(RESULTS_WORD) {
        return Command::ShowResults;
    }

    let mut chars = input.chars();
    let (letter, digit) = match (chars.next(), chars.next(), chars.next()) {
        (Some(l), Some(d), None) if is_letter(l) && d.is_ascii_digit() => (l, d),
        _ => return Command::Invalid(InvalidInput::BadFormat),
    };

    let col = (letter.to_ascii_uppercase() as u32).checked_sub('A' as u32);
    let row = (digit as u32).checked_sub('1' as u32);
    match (row, col) {
        (Some(row), Some(col)) => {
            let coord = Coord::new(row as usize, col as usize);
            if coord.in_bounds() {
                Command::Shot(coord)
            } else {
                Command::Invalid(InvalidInput::OutOfBounds)
            }
        }
        _ => Command::Invalid(InvalidInput::OutOfBounds),
    }
}

/// Alphabetic, but not a letter-number such as `Ⅷ`.
fn is_letter(ch: char) -> bool {
    ch.is_alphabetic() && !ch.is_numeric()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercase_cell_is_accepted() {
        assert_eq!(parse("h8"), Command::Shot(Coord::new(7, 7)));
    }

    #[test]
    fn line_ending_is_ignored() {
        assert_eq!(parse("exit\r\n"), Command::Exit);
        assert_eq!(parse("  Results\n"), Command::ShowResults);
    }

    #[test]
    fn non_latin_letter_is_out_of_bounds() {
        assert_eq!(parse("Ж1"), Command::Invalid(InvalidInput::OutOfBounds));
    }

    #[test]
    fn numeric_symbols_are_bad_format() {
        for raw in ["A²", "A½", "BⅧ", "Ⅷ1", "C٣"] {
            assert_eq!(parse(raw), Command::Invalid(InvalidInput::BadFormat), "{}", raw);
        }
    }
}
