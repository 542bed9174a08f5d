//! Cell coordinate parsing and formatting.
//!
//! Coordinates are 1-based, matching what a user types. Two notations are
//! accepted:
//!
//! ```ignore
//! let c: Coord = "C2".parse().unwrap(); // column letters, row number
//! assert_eq!((c.row, c.col), (2, 3));
//! let c: Coord = "2, 3".parse().unwrap(); // row,col pair
//! assert_eq!(c.to_string(), "C2");
//! ```

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

static A1_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?<letters>[A-Za-z]+)(?<numbers>[0-9]+)$").expect("A1 pattern is valid")
});

static PAIR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?<row>[0-9]+)\s*[,;]\s*(?<col>[0-9]+)$").expect("pair pattern is valid")
});

/// A 1-based (row, col) position.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub fn new(row: usize, col: usize) -> Coord {
        Coord { row, col }
    }

    /// Parse "B3"-style or "3,2"-style input. Returns None if invalid.
    pub fn parse(input: &str) -> Option<Coord> {
        let input = input.trim();
        Self::parse_a1(input).or_else(|| Self::parse_pair(input))
    }

    fn parse_a1(name: &str) -> Option<Coord> {
        let caps = A1_RE.captures(name)?;
        let col = Self::letters_to_col(&caps["letters"])?;
        let row = caps["numbers"].parse::<usize>().ok()?;
        if row == 0 {
            return None;
        }
        Some(Coord::new(row, col))
    }

    fn parse_pair(input: &str) -> Option<Coord> {
        let caps = PAIR_RE.captures(input)?;
        let row = caps["row"].parse::<usize>().ok()?;
        let col = caps["col"].parse::<usize>().ok()?;
        Some(Coord::new(row, col))
    }

    /// Convert column letters to a 1-based column (A -> 1, Z -> 26, AA -> 27).
    pub fn letters_to_col(letters: &str) -> Option<usize> {
        let mut acc = 0usize;
        for c in letters.to_ascii_uppercase().bytes() {
            if !c.is_ascii_uppercase() {
                return None;
            }
            let digit = (c - b'A') as usize + 1;
            acc = acc.checked_mul(26)?.checked_add(digit)?;
        }
        (acc > 0).then_some(acc)
    }

    /// Convert a 1-based column to letters (1 -> A, 26 -> Z, 27 -> AA).
    /// Column 0 has no letter form and yields an empty string.
    pub fn col_to_letters(col: usize) -> String {
        let mut result = String::new();
        let mut n = col as u128;
        while n > 0 {
            n -= 1;
            result.insert(0, (b'A' + (n % 26) as u8) as char);
            n /= 26;
        }
        result
    }
}

impl std::str::FromStr for Coord {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Coord::parse(s).ok_or_else(|| format!("Invalid cell reference: {}", s))
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", Coord::col_to_letters(self.col), self.row)
    }
}

#[cfg(test)]
mod tests {
    use super::Coord;

    #[test]
    fn test_parse_a1() {
        assert_eq!(Coord::parse("A1"), Some(Coord::new(1, 1)));
        assert_eq!(Coord::parse("c2"), Some(Coord::new(2, 3)));
        assert_eq!(Coord::parse("AA10"), Some(Coord::new(10, 27)));
        assert_eq!(Coord::parse(" B3 "), Some(Coord::new(3, 2)));
    }

    #[test]
    fn test_parse_pair() {
        assert_eq!(Coord::parse("2,3"), Some(Coord::new(2, 3)));
        assert_eq!(Coord::parse("2 , 3"), Some(Coord::new(2, 3)));
        assert_eq!(Coord::parse("4;1"), Some(Coord::new(4, 1)));
    }

    #[test]
    fn test_parse_invalid() {
        assert!(Coord::parse("").is_none());
        assert!(Coord::parse("A0").is_none());
        assert!(Coord::parse("1A").is_none());
        assert!(Coord::parse("A 1").is_none());
        assert!(Coord::parse("12").is_none());
        assert!("x".parse::<Coord>().is_err());
    }

    #[test]
    fn test_parse_overflow_returns_none() {
        let huge = format!("{}1", "Z".repeat(40));
        assert!(Coord::parse(&huge).is_none());
    }

    #[test]
    fn test_letters_round_trip() {
        for col in [1, 2, 26, 27, 52, 53, 702, 703] {
            let letters = Coord::col_to_letters(col);
            assert_eq!(Coord::letters_to_col(&letters), Some(col));
        }
        assert_eq!(Coord::col_to_letters(0), "");
    }

    #[test]
    fn test_display() {
        assert_eq!(Coord::new(3, 2).to_string(), "B3");
        assert_eq!(Coord::new(1, 28).to_string(), "AB1");
    }
}
