//! Commercial identifier validation (ISBN-10, ISBN-13, GTIN-13/EAN-13)

/// Return `identifier` unchanged if it is a valid ISBN-10 or ISBN-13/GTIN-13,
/// otherwise an empty string
///
/// Hyphens and inner spaces are treated as grouping separators and ignored
/// for the length and checksum checks. Surrounding whitespace is rejected;
/// trim first. The returned value is never rewritten.
pub fn validate(identifier: &str) -> String {
    if identifier.trim() != identifier {
        return String::new();
    }

    let normalized: Vec<char> = identifier
        .chars()
        .filter(|c| *c != '-' && *c != ' ')
        .collect();

    let valid = match normalized.len() {
        10 => is_valid_isbn10(&normalized),
        13 => is_valid_gtin13(&normalized),
        _ => false,
    };

    if valid {
        identifier.to_string()
    } else {
        String::new()
    }
}

/// Whether the identifier passes [`validate`]
pub fn is_valid(identifier: &str) -> bool {
    !validate(identifier).is_empty()
}

/// ISBN-10: weights 10..1, sum divisible by 11, `X` allowed as the check digit
fn is_valid_isbn10(chars: &[char]) -> bool {
    let mut sum = 0u32;

    for (i, &c) in chars.iter().enumerate() {
        let value = match c {
            '0'..='9' => c as u32 - '0' as u32,
            'X' | 'x' if i == 9 => 10,
            _ => return false,
        };
        sum += value * (10 - i as u32);
    }

    sum % 11 == 0
}

/// ISBN-13 / GTIN-13: alternating weights 1 and 3, sum divisible by 10
fn is_valid_gtin13(chars: &[char]) -> bool {
    let mut sum = 0u32;

    for (i, &c) in chars.iter().enumerate() {
        let Some(value) = c.to_digit(10) else {
            return false;
        };
        sum += if i % 2 == 0 { value } else { value * 3 };
    }

    sum % 10 == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_surrounding_whitespace_is_rejected() {
        assert_eq!(validate(" 0306406152"), "");
        assert_eq!(validate("9780306406157\n"), "");
        assert_eq!(validate("978 0 306 40615 7"), "978 0 306 40615 7");
    }

    #[test]
    fn test_valid_identifiers_round_trip() {
        for isbn in [
            "0-306-40615-2",
            "978-0-306-40615-7",
            "99921-58-10-7",
            "85-359-0277-5",
            "0306406152",
            "9780306406157",
            "080442957X",
        ] {
            assert_eq!(validate(isbn), isbn, "{} should be valid", isbn);
        }
    }

    #[test]
    fn test_invalid_identifiers_are_emptied() {
        for isbn in [
            "001234567890",
            "9504000059437 ",
            "0-306-40615-3",
            "978-0-306-40615-8",
            "X306406152",
            "97803064061X7",
            "",
            "abc",
        ] {
            assert_eq!(validate(isbn), "", "{:?} should be invalid", isbn);
        }
    }

    #[test]
    fn test_lowercase_check_symbol() {
        assert!(is_valid("080442957x"));
    }

    #[test]
    fn test_other_separators_are_rejected() {
        assert!(!is_valid("0.306.40615.2"));
        assert!(!is_valid("ISBN 0-306-40615-2"));
    }
}
