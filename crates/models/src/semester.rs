use serde::{Deserialize, Serialize};
use std::{
    fmt::{Display as FmtDisplay, Formatter, Result as FmtResult},
    ops::BitOr,
};
use strum::{AsRefStr, EnumIter, EnumProperty, EnumString, IntoEnumIterator};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumString,
    EnumIter,
    AsRefStr,
    EnumProperty,
)]
#[strum(ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum Semester {
    #[strum(to_string = "F", serialize = "fall", props(full = "fall"))]
    Fall,
    #[strum(to_string = "W", serialize = "winter", props(full = "winter"))]
    Winter,
    #[strum(to_string = "S", serialize = "spring", props(full = "spring"))]
    Spring,
    #[strum(to_string = "M", serialize = "summer", props(full = "summer"))]
    Summer,
}

impl Semester {
    /// Single-letter storage code
    pub fn as_str(&self) -> &str {
        self.as_ref()
    }

    pub fn as_full_str(&self) -> &'static str {
        self.get_str("full").unwrap_or_default()
    }
}

impl FmtDisplay for Semester {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.as_full_str())
    }
}

/// The semesters a guideline applies to
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "Vec<Semester>", from = "Vec<Semester>")]
#[repr(transparent)]
pub struct SemesterSet(u8);

impl SemesterSet {
    pub const NONE: Self = SemesterSet(0);
    pub const ALL: Self = SemesterSet(0b1111);

    pub fn from_bits(bits: u8) -> Option<Self> {
        (bits & !Self::ALL.0 == 0).then_some(SemesterSet(bits))
    }

    pub fn bits(self) -> u8 {
        self.0
    }

    pub fn contains(self, semester: Semester) -> bool {
        self.0 & Self::from(semester).0 != 0
    }

    pub fn iter(self) -> impl Iterator<Item = Semester> {
        Semester::iter().filter(move |&semester| self.contains(semester))
    }
}

impl From<Semester> for SemesterSet {
    fn from(semester: Semester) -> Self {
        SemesterSet(1 << semester as u8)
    }
}

impl FromIterator<Semester> for SemesterSet {
    fn from_iter<I: IntoIterator<Item = Semester>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::NONE, |set, semester| set | Self::from(semester))
    }
}

impl From<Vec<Semester>> for SemesterSet {
    fn from(semesters: Vec<Semester>) -> Self {
        semesters.into_iter().collect()
    }
}

impl From<SemesterSet> for Vec<Semester> {
    fn from(set: SemesterSet) -> Self {
        set.iter().collect()
    }
}

impl BitOr for SemesterSet {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        SemesterSet(self.0 | rhs.0)
    }
}

#[cfg(feature = "database")]
impl_small_int_value!(SemesterSet);

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_semester_codes() {
        assert_eq!(Semester::from_str("F").unwrap(), Semester::Fall);
        assert_eq!(Semester::from_str("spring").unwrap(), Semester::Spring);
        assert_eq!(Semester::from_str("Summer").unwrap(), Semester::Summer);
        assert!(Semester::from_str("autumn").is_err());

        assert_eq!(Semester::Winter.as_str(), "W");
        assert_eq!(Semester::Winter.to_string(), "winter");
    }

    #[test]
    fn test_semester_set() {
        let set: SemesterSet = [Semester::Fall, Semester::Spring].into_iter().collect();
        assert!(set.contains(Semester::Fall));
        assert!(set.contains(Semester::Spring));
        assert!(!set.contains(Semester::Summer));
        assert_eq!(set.iter().count(), 2);

        assert!(SemesterSet::ALL.contains(Semester::Winter));
        assert!(!SemesterSet::NONE.contains(Semester::Winter));
        assert_eq!(SemesterSet::from_bits(0b10000), None);
    }

    #[cfg(feature = "database")]
    #[test]
    fn test_semester_set_column_value() {
        use sea_orm::{Value, sea_query::ValueType};

        assert_eq!(Value::from(SemesterSet::ALL), Value::SmallInt(Some(15)));
        let spring = <SemesterSet as ValueType>::try_from(Value::SmallInt(Some(4))).unwrap();
        assert_eq!(spring, SemesterSet::from(Semester::Spring));
        assert!(<SemesterSet as ValueType>::try_from(Value::SmallInt(Some(16))).is_err());
    }
}
