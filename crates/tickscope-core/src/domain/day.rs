use std::fmt::{Display, Formatter};

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use time::format_description::FormatItem;
use time::macros::format_description;
use time::{Date, Duration, Weekday};

use crate::ValidationError;

const DAY_FORMAT: &[FormatItem<'_>] = format_description!("[year]-[month]-[day]");

/// Calendar day a daily bar belongs to, serialized as `YYYY-MM-DD`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TradingDay(Date);

impl TradingDay {
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        Date::parse(input, DAY_FORMAT)
            .map(Self)
            .map_err(|_| ValidationError::InvalidTradingDay {
                value: input.to_owned(),
            })
    }

    pub fn from_date(date: Date) -> Self {
        Self(date)
    }

    pub fn year(self) -> i32 {
        self.0.year()
    }

    /// Calendar month, 1-12.
    pub fn month(self) -> u8 {
        self.0.month() as u8
    }

    pub fn is_weekend(self) -> bool {
        matches!(self.0.weekday(), Weekday::Saturday | Weekday::Sunday)
    }

    pub fn next_day(self) -> Self {
        Self(self.0 + Duration::days(1))
    }
}

impl Display for TradingDay {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let formatted = self
            .0
            .format(DAY_FORMAT)
            .expect("calendar date must format as YYYY-MM-DD");
        f.write_str(&formatted)
    }
}

impl Serialize for TradingDay {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for TradingDay {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Self::parse(&value).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_and_reformats() {
        let day = TradingDay::parse("2024-01-02").expect("must parse");
        assert_eq!(day.to_string(), "2024-01-02");
        assert_eq!(day.year(), 2024);
        assert_eq!(day.month(), 1);
    }

    #[test]
    fn rejects_non_calendar_input() {
        let err = TradingDay::parse("2024/01/02").expect_err("must fail");
        assert!(matches!(err, ValidationError::InvalidTradingDay { .. }));
    }

    #[test]
    fn orders_chronologically() {
        let early = TradingDay::parse("2023-12-29").expect("must parse");
        let late = TradingDay::parse("2024-01-02").expect("must parse");
        assert!(early < late);
    }
}
