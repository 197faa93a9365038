//! Supported locales and the enums validated at the API boundary.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Locales with embedded data files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Locale {
    /// English
    En,
    /// Russian
    Ru,
}

impl Locale {
    /// Two-letter code used in data file names and error messages.
    pub fn code(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Ru => "ru",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "en" => Ok(Locale::En),
            "ru" => Ok(Locale::Ru),
            _ => Err(Error::NonEnumerable {
                kind: "Locale",
                value: s.to_string(),
            }),
        }
    }
}

/// Gender selector for gender-partitioned tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gender {
    Female,
    Male,
}

impl Gender {
    /// Partition key used in the locale tables.
    pub fn as_key(&self) -> &'static str {
        match self {
            Gender::Female => "female",
            Gender::Male => "male",
        }
    }
}

impl FromStr for Gender {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "female" | "f" => Ok(Gender::Female),
            "male" | "m" => Ok(Gender::Male),
            _ => Err(Error::NonEnumerable {
                kind: "Gender",
                value: s.to_string(),
            }),
        }
    }
}

/// Title flavor for [`Person::title`](crate::Person::title).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TitleType {
    Typical,
    Academic,
}

impl TitleType {
    pub fn as_key(&self) -> &'static str {
        match self {
            TitleType::Typical => "typical",
            TitleType::Academic => "academic",
        }
    }
}

impl FromStr for TitleType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "typical" => Ok(TitleType::Typical),
            "academic" => Ok(TitleType::Academic),
            _ => Err(Error::NonEnumerable {
                kind: "TitleType",
                value: s.to_string(),
            }),
        }
    }
}

/// Social networks with profile URL templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SocialNetwork {
    Facebook,
    Instagram,
    Twitter,
    Vk,
}

impl SocialNetwork {
    /// All members, for random selection.
    pub const ALL: [SocialNetwork; 4] = [
        SocialNetwork::Facebook,
        SocialNetwork::Instagram,
        SocialNetwork::Twitter,
        SocialNetwork::Vk,
    ];

    /// Profile URL template; `{}` is replaced with a username.
    pub fn url_template(&self) -> &'static str {
        match self {
            SocialNetwork::Facebook => "https://facebook.com/{}",
            SocialNetwork::Instagram => "https://instagram.com/{}",
            SocialNetwork::Twitter => "https://twitter.com/{}",
            SocialNetwork::Vk => "https://vk.com/{}",
        }
    }
}

impl FromStr for SocialNetwork {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "facebook" => Ok(SocialNetwork::Facebook),
            "instagram" => Ok(SocialNetwork::Instagram),
            "twitter" => Ok(SocialNetwork::Twitter),
            "vk" => Ok(SocialNetwork::Vk),
            _ => Err(Error::NonEnumerable {
                kind: "SocialNetwork",
                value: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locale_roundtrip() {
        assert_eq!("en".parse::<Locale>().unwrap(), Locale::En);
        assert_eq!("RU".parse::<Locale>().unwrap(), Locale::Ru);
        assert_eq!(Locale::En.to_string(), "en");
    }

    #[test]
    fn test_gender_rejects_unknown_value() {
        let err = "not-a-gender".parse::<Gender>().unwrap_err();
        assert_eq!(
            err,
            Error::NonEnumerable {
                kind: "Gender",
                value: "not-a-gender".to_string()
            }
        );
    }

    #[test]
    fn test_title_type_rejects_unknown_value() {
        assert!("nil".parse::<TitleType>().is_err());
        assert_eq!("academic".parse::<TitleType>().unwrap(), TitleType::Academic);
    }

    #[test]
    fn test_social_network_parse() {
        assert_eq!("vk".parse::<SocialNetwork>().unwrap(), SocialNetwork::Vk);
        assert!("myspace".parse::<SocialNetwork>().is_err());
    }
}
