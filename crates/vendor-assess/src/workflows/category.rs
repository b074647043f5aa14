use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::locale::Language;

/// Scrutiny tier assigned to a vendor, from 1 (public data) to 5 (mission critical).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct Category(u8);

impl Category {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn new(value: u8) -> Result<Self, CategoryError> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(CategoryError::OutOfRange(i64::from(value)))
        }
    }

    pub const fn value(self) -> u8 {
        self.0
    }

    pub const fn ordered() -> [Self; 5] {
        [Self(1), Self(2), Self(3), Self(4), Self(5)]
    }

    pub const fn description(self, language: Language) -> &'static str {
        match language {
            Language::English => match self.0 {
                1 => "Public - Minimal business impact",
                2 => "Internal - Low business impact",
                3 => "Confidential - Medium business impact",
                4 => "Business Critical/PI - High business impact",
                _ => "Mission Critical/Customer PI - Critical business impact",
            },
            Language::Dutch => match self.0 {
                1 => "Public - Minimale bedrijfsimpact",
                2 => "Internal - Lage bedrijfsimpact",
                3 => "Confidential - Medium bedrijfsimpact",
                4 => "Business Critical/PI - Hoge bedrijfsimpact",
                _ => "Mission Critical/Customer PI - Kritieke bedrijfsimpact",
            },
        }
    }
}

impl TryFrom<i64> for Category {
    type Error = CategoryError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        u8::try_from(value)
            .map_err(|_| CategoryError::OutOfRange(value))
            .and_then(Self::new)
    }
}

impl From<Category> for u8 {
    fn from(value: Category) -> Self {
        value.0
    }
}

impl FromStr for Category {
    type Err = CategoryError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let trimmed = raw.trim();
        let parsed = trimmed
            .parse::<i64>()
            .map_err(|_| CategoryError::Invalid(trimmed.to_string()))?;
        Self::try_from(parsed)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CategoryError {
    #[error("category must be between 1 and 5, found {0}")]
    OutOfRange(i64),
    #[error("category must be an integer between 1 and 5, found '{0}'")]
    Invalid(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_tiers_one_through_five() {
        for value in 1..=5u8 {
            assert_eq!(Category::new(value).expect("valid tier").value(), value);
        }
    }

    #[test]
    fn rejects_out_of_range_tiers() {
        assert_eq!(Category::new(0), Err(CategoryError::OutOfRange(0)));
        assert_eq!(Category::new(6), Err(CategoryError::OutOfRange(6)));
        assert_eq!(Category::try_from(-3), Err(CategoryError::OutOfRange(-3)));
        assert_eq!(Category::try_from(700), Err(CategoryError::OutOfRange(700)));
    }

    #[test]
    fn parses_from_cli_strings() {
        assert_eq!(" 4 ".parse::<Category>(), Ok(Category(4)));
        assert_eq!(
            "four".parse::<Category>(),
            Err(CategoryError::Invalid("four".to_string()))
        );
    }

    #[test]
    fn serde_round_trips_through_plain_integers() {
        let category: Category = serde_json::from_str("3").expect("deserializes");
        assert_eq!(category.value(), 3);
        assert_eq!(serde_json::to_string(&category).expect("serializes"), "3");
        assert!(serde_json::from_str::<Category>("9").is_err());
    }

    #[test]
    fn descriptions_follow_language() {
        let tier = Category(4);
        assert_eq!(
            tier.description(Language::English),
            "Business Critical/PI - High business impact"
        );
        assert_eq!(
            tier.description(Language::Dutch),
            "Business Critical/PI - Hoge bedrijfsimpact"
        );
    }
}
