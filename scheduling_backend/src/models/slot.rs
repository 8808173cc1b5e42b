//! Weekly recurring availability windows.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use super::time::TimeRange;
use super::{ProviderId, WeeklySlotId};

/// A recurring availability window for a service provider.
///
/// The window recurs on `weekday` every week; a concrete calendar date plus
/// a weekly slot yields the bookable range for that date. Slots are
/// configured by the administrative layer and are read-only to the
/// scheduling core. Slots sharing a provider and weekday may overlap in
/// storage; capacity logic treats each one independently.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklySlot {
    pub id: WeeklySlotId,
    pub provider_id: ProviderId,
    #[serde(with = "weekday_str")]
    pub weekday: Weekday,
    pub window: TimeRange,
    pub active: bool,
}

impl WeeklySlot {
    /// `true` iff `date` falls on this slot's weekday.
    pub fn matches_date(&self, date: NaiveDate) -> bool {
        date.weekday() == self.weekday
    }
}

/// Serde codec storing a [`Weekday`] as its short English name ("Mon".."Sun").
pub(crate) mod weekday_str {
    use chrono::Weekday;
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(day: &Weekday, ser: S) -> Result<S::Ok, S::Error> {
        ser.serialize_str(&day.to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(de: D) -> Result<Weekday, D::Error> {
        let s = String::deserialize(de)?;
        s.parse::<Weekday>()
            .map_err(|_| D::Error::custom(format!("unrecognized weekday: {s}")))
    }
}
