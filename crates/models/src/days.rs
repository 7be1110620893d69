use serde::{Deserialize, Serialize};
use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    ops::{BitAnd, BitOr, BitOrAssign},
    str::FromStr,
};
use strum::{EnumIter, EnumProperty, EnumString, IntoEnumIterator};

/// A single day of the week, Monday first
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    EnumString,
    EnumIter,
    EnumProperty,
)]
#[strum(ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum Weekday {
    #[strum(serialize = "monday", serialize = "M", props(name = "Monday"))]
    Monday,
    #[strum(serialize = "tuesday", serialize = "T", props(name = "Tuesday"))]
    Tuesday,
    #[strum(serialize = "wednesday", serialize = "W", props(name = "Wednesday"))]
    Wednesday,
    #[strum(serialize = "thursday", serialize = "R", props(name = "Thursday"))]
    Thursday,
    #[strum(serialize = "friday", serialize = "F", props(name = "Friday"))]
    Friday,
    #[strum(serialize = "saturday", serialize = "S", props(name = "Saturday"))]
    Saturday,
    #[strum(serialize = "sunday", serialize = "U", props(name = "Sunday"))]
    Sunday,
}

impl Weekday {
    pub fn all() -> Vec<Weekday> {
        Weekday::iter().collect()
    }

    pub fn name(&self) -> &'static str {
        self.get_str("name").unwrap_or_default()
    }
}

impl Display for Weekday {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.name())
    }
}

/// Represents the days of the week a meeting occurs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
#[repr(transparent)]
pub struct DaySet(u8);

impl DaySet {
    // Constants for individual days
    pub const MONDAY: Self = DaySet(1 << 0);
    pub const TUESDAY: Self = DaySet(1 << 1);
    pub const WEDNESDAY: Self = DaySet(1 << 2);
    pub const THURSDAY: Self = DaySet(1 << 3);
    pub const FRIDAY: Self = DaySet(1 << 4);
    pub const SATURDAY: Self = DaySet(1 << 5);
    pub const SUNDAY: Self = DaySet(1 << 6);

    pub const ALL: Self = DaySet(0b1111111);
    pub const NONE: Self = DaySet(0);

    /// Day-to-char mapping for parsing and display
    const DAY_CHARS: [(Self, char); 7] = [
        (Self::MONDAY, 'M'),
        (Self::TUESDAY, 'T'),
        (Self::WEDNESDAY, 'W'),
        (Self::THURSDAY, 'R'),
        (Self::FRIDAY, 'F'),
        (Self::SATURDAY, 'S'),
        (Self::SUNDAY, 'U'),
    ];

    /// Builds a set from raw bits, rejecting bits above Sunday
    pub fn from_bits(bits: u8) -> Option<Self> {
        (bits & !Self::ALL.0 == 0).then_some(DaySet(bits))
    }

    pub fn bits(self) -> u8 {
        self.0
    }

    /// True when every day in `day` is also in `self`
    pub fn contains(self, day: Self) -> bool {
        (self & day) == day
    }

    pub fn has(self, weekday: Weekday) -> bool {
        self.contains(weekday.into())
    }

    /// Number of days in the set
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// The days in the set, Monday first
    pub fn iter(self) -> impl Iterator<Item = Weekday> {
        Weekday::iter().filter(move |&day| self.has(day))
    }
}

impl From<Weekday> for DaySet {
    fn from(day: Weekday) -> Self {
        DaySet(1 << day as u8)
    }
}

impl FromIterator<Weekday> for DaySet {
    fn from_iter<I: IntoIterator<Item = Weekday>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::NONE, |set, day| set | DaySet::from(day))
    }
}

impl FromStr for DaySet {
    type Err = ();

    fn from_str(days: &str) -> Result<Self, Self::Err> {
        let mut result = Self::NONE;

        for c in days.chars().filter(|c| !c.is_whitespace()) {
            let (day, _) = Self::DAY_CHARS
                .iter()
                .find(|&&(_, day_char)| day_char == c.to_ascii_uppercase())
                .ok_or(())?;
            result |= *day;
        }

        Ok(result)
    }
}

impl TryFrom<String> for DaySet {
    type Error = String;

    fn try_from(days: String) -> Result<Self, Self::Error> {
        Self::from_str(&days).map_err(|_| format!("Invalid day pattern: {days}"))
    }
}

impl From<DaySet> for String {
    fn from(days: DaySet) -> Self {
        days.to_string()
    }
}

impl Display for DaySet {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let mut result = String::new();

        for &(day, day_char) in &Self::DAY_CHARS {
            if self.contains(day) {
                result.push(day_char);
            }
        }

        write!(f, "{result}")
    }
}

// Bitwise operators
impl BitOr for DaySet {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        DaySet(self.0 | rhs.0)
    }
}

impl BitAnd for DaySet {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        DaySet(self.0 & rhs.0)
    }
}

impl BitOrAssign for DaySet {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

#[cfg(feature = "database")]
impl_small_int_value!(DaySet);
