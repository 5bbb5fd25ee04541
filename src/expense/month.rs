//! The twelve calendar months that expenses are recorded against.
//!
//! Expenses have no year, every month is implicitly "this year".

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::Error;

/// A month of the year, displayed as a three-letter token such as `JAN`.
///
/// The derived ordering is chronological, January first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Month {
    /// January.
    Jan,
    /// February.
    Feb,
    /// March.
    Mar,
    /// April.
    Apr,
    /// May.
    May,
    /// June.
    Jun,
    /// July.
    Jul,
    /// August.
    Aug,
    /// September.
    Sep,
    /// October.
    Oct,
    /// November.
    Nov,
    /// December.
    Dec,
}

impl Month {
    /// All months in calendar order.
    pub const ALL: [Month; 12] = [
        Month::Jan,
        Month::Feb,
        Month::Mar,
        Month::Apr,
        Month::May,
        Month::Jun,
        Month::Jul,
        Month::Aug,
        Month::Sep,
        Month::Oct,
        Month::Nov,
        Month::Dec,
    ];

    /// The zero-based position of the month in the year.
    pub fn index(self) -> usize {
        self as usize
    }

    /// The month at `index`, wrapping around after December.
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % Self::ALL.len()]
    }

    /// The month `months` after this one, wrapping around the year.
    pub fn offset(self, months: usize) -> Self {
        Self::from_index(self.index() + months)
    }

    /// The three-letter token for the month, e.g. "JAN".
    pub fn as_str(self) -> &'static str {
        match self {
            Month::Jan => "JAN",
            Month::Feb => "FEB",
            Month::Mar => "MAR",
            Month::Apr => "APR",
            Month::May => "MAY",
            Month::Jun => "JUN",
            Month::Jul => "JUL",
            Month::Aug => "AUG",
            Month::Sep => "SEP",
            Month::Oct => "OCT",
            Month::Nov => "NOV",
            Month::Dec => "DEC",
        }
    }
}

impl FromStr for Month {
    type Err = Error;

    /// Parse a three-letter month token, ignoring case and surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns an [Error::InvalidInput] for the field "month" if `s` is not
    /// one of the twelve tokens.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();

        Self::ALL
            .into_iter()
            .find(|month| month.as_str().eq_ignore_ascii_case(token))
            .ok_or_else(|| Error::invalid_input("month", format!("\"{token}\" is not a month")))
    }
}

impl Display for Month {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use crate::Error;

    use super::Month;

    #[test]
    fn index_round_trips_through_from_index() {
        for (index, month) in Month::ALL.into_iter().enumerate() {
            assert_eq!(month.index(), index);
            assert_eq!(Month::from_index(index), month);
        }
    }

    #[test]
    fn offset_wraps_around_the_year() {
        assert_eq!(Month::Jun.offset(0), Month::Jun);
        assert_eq!(Month::Jun.offset(6), Month::Dec);
        assert_eq!(Month::Jun.offset(7), Month::Jan);
        assert_eq!(Month::Jun.offset(11), Month::May);
        assert_eq!(Month::Dec.offset(12), Month::Dec);
    }

    #[test]
    fn parses_tokens_case_insensitively() {
        assert_eq!("JAN".parse::<Month>(), Ok(Month::Jan));
        assert_eq!("sep".parse::<Month>(), Ok(Month::Sep));
        assert_eq!(" Dec ".parse::<Month>(), Ok(Month::Dec));
    }

    #[test]
    fn rejects_unknown_month() {
        let result = "JANUARY".parse::<Month>();

        assert!(
            matches!(result, Err(Error::InvalidInput { field: "month", .. })),
            "got {result:?}"
        );
    }

    #[test]
    fn rejects_empty_month() {
        assert!("".parse::<Month>().is_err());
    }

    #[test]
    fn ordering_is_chronological() {
        let mut months = vec![Month::Dec, Month::Jan, Month::Jul, Month::Mar];
        months.sort();

        assert_eq!(months, vec![Month::Jan, Month::Mar, Month::Jul, Month::Dec]);
    }

    #[test]
    fn displays_three_letter_token() {
        assert_eq!(Month::Aug.to_string(), "AUG");
    }
}
