//! Substring occurrence counting.

/// Options for [`count_occurrences`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchOptions {
    pub case_sensitive: bool,
    /// Resume scanning one character after a match instead of after the
    /// whole match
    pub allow_overlapping: bool,
}

impl Default for SearchOptions {
    fn default() -> Self {
        SearchOptions {
            case_sensitive: true,
            allow_overlapping: false,
        }
    }
}

/// Count how many times `text` occurs in `paragraph`.
///
/// Returns 0 when either string is empty or `text` is longer than
/// `paragraph`. Case-insensitive matching lowercases both sides first.
pub fn count_occurrences(paragraph: &str, text: &str, options: SearchOptions) -> usize {
    let (haystack, needle): (Vec<char>, Vec<char>) = if options.case_sensitive {
        (paragraph.chars().collect(), text.chars().collect())
    } else {
        (
            paragraph.to_lowercase().chars().collect(),
            text.to_lowercase().chars().collect(),
        )
    };

    let (n, m) = (haystack.len(), needle.len());
    if m == 0 || n == 0 || m > n {
        return 0;
    }

    let step = if options.allow_overlapping { 1 } else { m };
    let mut count = 0;
    let mut i = 0;
    while i <= n - m {
        if haystack[i..i + m] == needle[..] {
            count += 1;
            i += step;
        } else {
            i += 1;
        }
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opts(case_sensitive: bool, allow_overlapping: bool) -> SearchOptions {
        SearchOptions {
            case_sensitive,
            allow_overlapping,
        }
    }

    #[test]
    fn test_non_overlapping_by_default() {
        assert_eq!(count_occurrences("aaaa", "aa", SearchOptions::default()), 2);
        assert_eq!(count_occurrences("abababa", "aba", SearchOptions::default()), 2);
    }

    #[test]
    fn test_overlapping() {
        assert_eq!(count_occurrences("aaaa", "aa", opts(true, true)), 3);
        assert_eq!(count_occurrences("abababa", "aba", opts(true, true)), 3);
    }

    #[test]
    fn test_case_sensitivity() {
        let paragraph = "The cat saw another Cat";
        assert_eq!(count_occurrences(paragraph, "cat", opts(true, false)), 1);
        assert_eq!(count_occurrences(paragraph, "cat", opts(false, false)), 2);
        assert_eq!(count_occurrences(paragraph, "CAT", opts(false, false)), 2);
    }

    #[test]
    fn test_degenerate_inputs() {
        let o = SearchOptions::default();
        assert_eq!(count_occurrences("", "a", o), 0);
        assert_eq!(count_occurrences("abc", "", o), 0);
        assert_eq!(count_occurrences("ab", "abc", o), 0);
        assert_eq!(count_occurrences("abc", "abc", o), 1);
    }

    #[test]
    fn test_multibyte_characters() {
        assert_eq!(count_occurrences("año año", "ñ", SearchOptions::default()), 2);
        assert_eq!(count_occurrences("ÉTÉ été", "été", opts(false, false)), 2);
    }
}
