use chrono::NaiveTime;
use serde::Serialize;
use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

/// Error raised when a value cannot be read as military time
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum InvalidTimeValue {
    /// Negative or greater than 2359
    OutOfRange(i32),
    /// The last two digits are 60 or above
    InvalidMinute(i32),
    /// Not an integer at all
    NotAnInteger(String),
}

impl Display for InvalidTimeValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::OutOfRange(value) => write!(f, "Military time {value} is outside 0..=2359"),
            Self::InvalidMinute(value) => {
                write!(f, "Military time {value} has a minute above 59")
            }
            Self::NotAnInteger(value) => write!(f, "'{value}' is not a military time"),
        }
    }
}

impl std::error::Error for InvalidTimeValue {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Period {
    AM,
    PM,
}

impl Display for Period {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::AM => write!(f, "AM"),
            Self::PM => write!(f, "PM"),
        }
    }
}

/// A 3-4 digit military time integer (e.g. `830`, `1330`) broken into its parts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MilitaryTime {
    pub hour24: u8,
    pub hour12: u8,
    pub minute: u8,
    pub period: Period,
    /// Minutes since midnight
    pub total_minutes: u16,
}

impl MilitaryTime {
    /// Normalizes a military time integer.
    ///
    /// The minute is always the last two digits and the hour is whatever
    /// precedes them, so `830` is 8:30 AM and `5` is 12:05 AM.
    pub fn new(value: i32) -> Result<Self, InvalidTimeValue> {
        if !(0..=2359).contains(&value) {
            return Err(InvalidTimeValue::OutOfRange(value));
        }

        let hour24 = (value / 100) as u8;
        let minute = (value % 100) as u8;
        if minute > 59 {
            return Err(InvalidTimeValue::InvalidMinute(value));
        }

        Ok(Self::from_parts(hour24, minute))
    }

    fn from_parts(hour24: u8, minute: u8) -> Self {
        let period = if hour24 < 12 { Period::AM } else { Period::PM };
        let hour12 = match hour24 % 12 {
            0 => 12,
            hour => hour,
        };

        Self {
            hour24,
            hour12,
            minute,
            period,
            total_minutes: u16::from(hour24) * 60 + u16::from(minute),
        }
    }

    /// The original military integer
    pub fn value(&self) -> u16 {
        u16::from(self.hour24) * 100 + u16::from(self.minute)
    }

    pub fn to_naive_time(&self) -> NaiveTime {
        // hour24 <= 23 and minute <= 59 are checked in `new`
        NaiveTime::from_hms_opt(u32::from(self.hour24), u32::from(self.minute), 0)
            .unwrap_or_default()
    }
}

impl From<NaiveTime> for MilitaryTime {
    fn from(time: NaiveTime) -> Self {
        use chrono::Timelike;

        Self::from_parts(time.hour() as u8, time.minute() as u8)
    }
}

impl TryFrom<i32> for MilitaryTime {
    type Error = InvalidTimeValue;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl FromStr for MilitaryTime {
    type Err = InvalidTimeValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        // Only bare digits, so "8:30" and "+830" are rejected
        if s.is_empty() || !s.chars().all(|c| c.is_ascii_digit()) {
            return Err(InvalidTimeValue::NotAnInteger(s.to_string()));
        }

        s.parse::<i32>()
            .map_err(|_| InvalidTimeValue::NotAnInteger(s.to_string()))
            .and_then(Self::new)
    }
}

impl Display for MilitaryTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}:{:02} {}", self.hour12, self.minute, self.period)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_midnight() {
        let time = MilitaryTime::new(0).unwrap();
        assert_eq!(time.hour24, 0);
        assert_eq!(time.hour12, 12);
        assert_eq!(time.minute, 0);
        assert_eq!(time.period, Period::AM);
        assert_eq!(time.total_minutes, 0);
        assert_eq!(time.to_string(), "12:00 AM");
    }

    #[test]
    fn test_afternoon() {
        let time = MilitaryTime::new(1330).unwrap();
        assert_eq!(time.hour24, 13);
        assert_eq!(time.hour12, 1);
        assert_eq!(time.minute, 30);
        assert_eq!(time.period, Period::PM);
        assert_eq!(time.total_minutes, 810);
        assert_eq!(time.to_string(), "1:30 PM");
    }

    #[test]
    fn test_three_digit_values() {
        let time = MilitaryTime::new(830).unwrap();
        assert_eq!(time.hour24, 8);
        assert_eq!(time.minute, 30);
        assert_eq!(time.total_minutes, 510);
        assert_eq!(time.to_string(), "8:30 AM");
    }

    #[test]
    fn test_am_pm_boundary() {
        assert_eq!(MilitaryTime::new(1159).unwrap().period, Period::AM);
        assert_eq!(MilitaryTime::new(1100).unwrap().period, Period::AM);

        let noon = MilitaryTime::new(1200).unwrap();
        assert_eq!(noon.period, Period::PM);
        assert_eq!(noon.hour12, 12);
        assert_eq!(noon.to_string(), "12:00 PM");

        assert_eq!(MilitaryTime::new(1259).unwrap().period, Period::PM);
    }

    #[test]
    fn test_total_minutes_formula() {
        for value in 0..=2359_i32 {
            if value % 100 > 59 {
                assert!(MilitaryTime::new(value).is_err());
                continue;
            }
            let time = MilitaryTime::new(value).unwrap();
            assert_eq!(i32::from(time.total_minutes), (value / 100) * 60 + value % 100);
            assert_eq!(i32::from(time.value()), value);
        }
    }

    #[test]
    fn test_invalid_values() {
        assert_eq!(MilitaryTime::new(-1), Err(InvalidTimeValue::OutOfRange(-1)));
        assert_eq!(MilitaryTime::new(2400), Err(InvalidTimeValue::OutOfRange(2400)));
        assert_eq!(MilitaryTime::new(1275), Err(InvalidTimeValue::InvalidMinute(1275)));
    }

    #[test]
    fn test_from_str() {
        assert_eq!(MilitaryTime::from_str("1330").unwrap().total_minutes, 810);
        assert_eq!(MilitaryTime::from_str(" 830 ").unwrap().hour24, 8);
        assert!(matches!(
            MilitaryTime::from_str("8:30"),
            Err(InvalidTimeValue::NotAnInteger(_))
        ));
        assert!(matches!(
            MilitaryTime::from_str("13.5"),
            Err(InvalidTimeValue::NotAnInteger(_))
        ));
        assert!(matches!(
            MilitaryTime::from_str("9999"),
            Err(InvalidTimeValue::OutOfRange(9999))
        ));
    }

    #[test]
    fn test_naive_time_conversion() {
        let time = MilitaryTime::new(1345).unwrap();
        let naive = time.to_naive_time();
        assert_eq!(naive, NaiveTime::from_hms_opt(13, 45, 0).unwrap());
        assert_eq!(MilitaryTime::from(naive), time);
    }
}
