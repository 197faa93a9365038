//! Mask and username-template engines.
//!
//! Masks are filled character by character:
//! - `#` = random decimal digit
//! - `@` = random ASCII letter
//! - Any other character = literal (separator like `-`, `/`, space, etc.)
//!
//! Output length always equals mask length.
//!
//! Username templates are a separate, richer grammar: a symbolic key such as
//! `U-d` or `ld` selects word count, casing, and the separator placed before
//! the trailing digits.

use std::str::FromStr;

use rand::Rng;

use crate::constants::MASK_LETTERS;
use crate::error::Error;

/// Expand each mask token into a random character.
pub fn fill_mask<R: Rng>(mask: &str, rng: &mut R) -> String {
    let mut result = String::with_capacity(mask.len());

    for mask_char in mask.chars() {
        match mask_char {
            '#' => {
                result.push(char::from_digit(rng.random_range(0..10), 10).unwrap());
            }
            '@' => {
                result.push(MASK_LETTERS[rng.random_range(0..MASK_LETTERS.len())] as char);
            }
            c => {
                result.push(c);
            }
        }
    }

    result
}

/// A parsed username template: how many words, their casing, and the
/// separator (if any) before the digit suffix.
///
/// The supported keys are `U-d`, `U.d`, `U_d`, `Ud`, `UU-d`, `UU.d`, `UU_d`,
/// `l-d`, `l.d`, `l_d`, `ld`, and `default`. `U` = capitalized word, `l` =
/// lowercase word, `d` = digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UsernameTemplate {
    pub words: u8,
    pub capitalized: bool,
    pub separator: Option<char>,
}

impl UsernameTemplate {
    /// Template used when the caller passes none (`l_d`).
    pub const DEFAULT: UsernameTemplate = UsernameTemplate {
        words: 1,
        capitalized: false,
        separator: Some('_'),
    };

    /// Single lowercase word glued to the digits; used for email local parts.
    pub const LOWER_JOINED: UsernameTemplate = UsernameTemplate {
        words: 1,
        capitalized: false,
        separator: None,
    };
}

impl FromStr for UsernameTemplate {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (words, capitalized, separator) = match s {
            "U-d" => (1, true, Some('-')),
            "U.d" => (1, true, Some('.')),
            "U_d" => (1, true, Some('_')),
            "Ud" => (1, true, None),
            "UU-d" => (2, true, Some('-')),
            "UU.d" => (2, true, Some('.')),
            "UU_d" => (2, true, Some('_')),
            "l-d" => (1, false, Some('-')),
            "l.d" => (1, false, Some('.')),
            "l_d" => (1, false, Some('_')),
            "ld" => (1, false, None),
            "default" => return Ok(UsernameTemplate::DEFAULT),
            _ => {
                return Err(Error::InvalidTemplate {
                    template: s.to_string(),
                })
            }
        };
        Ok(UsernameTemplate {
            words,
            capitalized,
            separator,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_fill_mask_digits() {
        let mut rng = StdRng::seed_from_u64(42);
        let result = fill_mask("##-##/##", &mut rng);
        assert_eq!(result.len(), 8);
        assert_eq!(result.chars().nth(2), Some('-'));
        assert_eq!(result.chars().nth(5), Some('/'));
        for (i, c) in result.chars().enumerate() {
            if i != 2 && i != 5 {
                assert!(c.is_ascii_digit());
            }
        }
    }

    #[test]
    fn test_fill_mask_letters() {
        let mut rng = StdRng::seed_from_u64(42);
        let result = fill_mask("@@@", &mut rng);
        assert_eq!(result.len(), 3);
        assert!(result.chars().all(|c| c.is_ascii_alphabetic()));
    }

    #[test]
    fn test_fill_mask_literal_prefix() {
        let mut rng = StdRng::seed_from_u64(42);
        let result = fill_mask("+5 (###)-###-##-##", &mut rng);
        assert!(result.starts_with("+5 ("));
        assert_eq!(result.len(), "+5 (###)-###-##-##".len());
    }

    #[test]
    fn test_template_keys_parse() {
        for key in [
            "U-d", "U.d", "U_d", "Ud", "UU-d", "UU.d", "UU_d", "l-d", "l.d", "l_d", "ld",
            "default",
        ] {
            assert!(key.parse::<UsernameTemplate>().is_ok(), "key {}", key);
        }
    }

    #[test]
    fn test_unsupported_template_key() {
        let err = ":D".parse::<UsernameTemplate>().unwrap_err();
        assert_eq!(
            err,
            Error::InvalidTemplate {
                template: ":D".to_string()
            }
        );
    }
}
