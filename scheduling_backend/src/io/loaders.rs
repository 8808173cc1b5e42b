//! Availability fixture loading.
//!
//! Parses the JSON export shape the administrative layer produces for a
//! provider's weekly availability and existing bookings, and turns it into
//! domain models ready to seed a repository. The raw serde structs are kept
//! separate from the domain types so the wire format can evolve without
//! touching scheduling logic.

use anyhow::{bail, Context, Result};
use chrono::{NaiveDate, NaiveTime, Weekday};
use serde::Deserialize;
use std::path::Path;

use crate::db::repositories::LocalRepository;
use crate::models::{
    Booking, BookingId, BookingStatus, ProviderId, TimeRange, WeeklySlot, WeeklySlotId,
};

/// Raw JSON structure for a weekly availability slot
#[derive(Debug, Deserialize)]
struct RawWeeklySlot {
    id: i64,
    provider_id: i64,
    weekday: String,
    start: String,
    end: String,
    #[serde(default = "default_active")]
    active: bool,
}

fn default_active() -> bool {
    true
}

/// Raw JSON structure for an existing booking
#[derive(Debug, Deserialize)]
struct RawBooking {
    id: i64,
    provider_id: i64,
    date: String,
    start: String,
    end: String,
    #[serde(default)]
    slot_ids: Vec<i64>,
    #[serde(default = "default_status")]
    status: String,
}

fn default_status() -> String {
    "scheduled".to_string()
}

/// Raw JSON structure for a whole availability export
#[derive(Debug, Deserialize)]
struct RawAvailabilityFile {
    #[serde(default)]
    weekly_slots: Vec<RawWeeklySlot>,
    #[serde(default)]
    bookings: Vec<RawBooking>,
}

/// Parsed availability data: validated domain models with file-supplied ids.
#[derive(Debug, Clone)]
pub struct AvailabilityData {
    pub slots: Vec<WeeklySlot>,
    pub bookings: Vec<Booking>,
}

impl AvailabilityData {
    /// Seed a local repository with this data, preserving the ids from the
    /// file so bookings keep their slot references.
    pub fn seed_local_repository(&self, repo: &LocalRepository) {
        for slot in &self.slots {
            repo.store_slot_impl(slot.clone());
        }
        for booking in &self.bookings {
            repo.store_booking_impl(booking.clone());
        }
    }
}

/// Loader for availability JSON exports.
pub struct AvailabilityLoader;

impl AvailabilityLoader {
    /// Load availability data from a JSON file.
    pub fn load_from_file(path: &Path) -> Result<AvailabilityData> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Self::load_from_json_str(&contents)
            .with_context(|| format!("failed to load {}", path.display()))
    }

    /// Load availability data from a JSON string.
    ///
    /// Deserialization errors report the exact JSON path of the offending
    /// field; bookings that no longer occupy time (cancelled or rejected)
    /// are dropped here, matching the repository contract.
    pub fn load_from_json_str(json: &str) -> Result<AvailabilityData> {
        let mut de = serde_json::Deserializer::from_str(json);
        let raw: RawAvailabilityFile = serde_path_to_error::deserialize(&mut de)
            .context("failed to parse availability JSON")?;

        let slots = raw
            .weekly_slots
            .into_iter()
            .map(convert_slot)
            .collect::<Result<Vec<_>>>()?;

        let mut bookings = Vec::with_capacity(raw.bookings.len());
        for raw_booking in raw.bookings {
            if let Some(booking) = convert_booking(raw_booking)? {
                bookings.push(booking);
            }
        }

        Ok(AvailabilityData { slots, bookings })
    }
}

fn convert_slot(raw: RawWeeklySlot) -> Result<WeeklySlot> {
    let weekday = parse_weekday(&raw.weekday)
        .with_context(|| format!("weekly slot {}", raw.id))?;
    let window = parse_window(&raw.start, &raw.end)
        .with_context(|| format!("weekly slot {}", raw.id))?;
    Ok(WeeklySlot {
        id: WeeklySlotId::new(raw.id),
        provider_id: ProviderId::new(raw.provider_id),
        weekday,
        window,
        active: raw.active,
    })
}

/// Returns `Ok(None)` for statuses that no longer occupy provider time.
fn convert_booking(raw: RawBooking) -> Result<Option<Booking>> {
    let status = match raw.status.as_str() {
        "scheduled" => BookingStatus::Scheduled,
        "in_progress" => BookingStatus::InProgress,
        "completed" => BookingStatus::Completed,
        "cancelled" | "rejected" => return Ok(None),
        other => bail!("booking {}: unrecognized status {:?}", raw.id, other),
    };
    let date = NaiveDate::parse_from_str(&raw.date, "%Y-%m-%d")
        .with_context(|| format!("booking {}: invalid date {:?}", raw.id, raw.date))?;
    let window =
        parse_window(&raw.start, &raw.end).with_context(|| format!("booking {}", raw.id))?;

    Ok(Some(Booking {
        id: BookingId::new(raw.id),
        provider_id: ProviderId::new(raw.provider_id),
        date,
        window,
        slot_ids: raw.slot_ids.into_iter().map(WeeklySlotId::new).collect(),
        status,
    }))
}

fn parse_weekday(s: &str) -> Result<Weekday> {
    s.parse::<Weekday>()
        .map_err(|_| anyhow::anyhow!("unrecognized weekday {:?}", s))
}

fn parse_window(start: &str, end: &str) -> Result<TimeRange> {
    let start = parse_time(start)?;
    let end = parse_time(end)?;
    TimeRange::new(start, end).context("invalid time range")
}

fn parse_time(s: &str) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(s, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M:%S"))
        .with_context(|| format!("invalid time {:?}", s))
}
