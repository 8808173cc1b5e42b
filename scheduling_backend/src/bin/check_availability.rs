//! Availability inspection tool.
//!
//! Loads an availability JSON export into the in-memory repository, prints
//! per-slot capacity for a date, and runs the multi-day auto-selection for a
//! requested duration:
//!
//! ```text
//! check_availability <availability.json> <provider_id> <date> <minutes> [config.toml]
//! ```

use anyhow::{Context, Result};
use chrono::{Datelike, NaiveDate};
use std::path::Path;

use fms_scheduling::config::SchedulingConfig;
use fms_scheduling::db::repositories::LocalRepository;
use fms_scheduling::db::repository::WeeklySlotRepository;
use fms_scheduling::io::loaders::AvailabilityLoader;
use fms_scheduling::models::ProviderId;
use fms_scheduling::services;

#[tokio::main]
async fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 5 {
        eprintln!(
            "usage: {} <availability.json> <provider_id> <date> <minutes> [config.toml]",
            args[0]
        );
        std::process::exit(2);
    }

    let fixture = Path::new(&args[1]);
    let provider_id = ProviderId::new(
        args[2]
            .parse::<i64>()
            .with_context(|| format!("invalid provider id {:?}", args[2]))?,
    );
    let date = NaiveDate::parse_from_str(&args[3], "%Y-%m-%d")
        .with_context(|| format!("invalid date {:?} (expected YYYY-MM-DD)", args[3]))?;
    let required_minutes = args[4]
        .parse::<i64>()
        .with_context(|| format!("invalid minutes {:?}", args[4]))?;

    let config = match args.get(5) {
        Some(path) => SchedulingConfig::from_file(path)
            .with_context(|| format!("failed to load config {path}"))?,
        None => SchedulingConfig::default(),
    };

    let data = AvailabilityLoader::load_from_file(fixture)?;
    let repo = LocalRepository::new();
    data.seed_local_repository(&repo);
    println!(
        "loaded {} weekly slot(s), {} booking(s) from {}",
        data.slots.len(),
        data.bookings.len(),
        fixture.display()
    );

    println!("\ncapacity for provider {provider_id} on {date} ({:?}):", date.weekday());
    let slots = repo.active_slots_for(provider_id, date.weekday()).await?;
    if slots.is_empty() {
        println!("  (no active slots)");
    }
    for slot in &slots {
        let next = services::calculate_next_available_time(
            &repo,
            slot,
            date,
            required_minutes,
            None,
        )
        .await?;
        let cap = services::get_slot_capacity(&repo, slot, date, None)
            .await?
            .with_next_available(next);
        print!(
            "  slot {} {}: total {} min, booked {} min, available {} min",
            slot.id, slot.window, cap.total_minutes, cap.booked_minutes, cap.available_minutes
        );
        match cap.next_available() {
            Some(gap) => println!(", next {required_minutes}-min gap at {gap}"),
            None => println!(", no {required_minutes}-min gap"),
        }
    }

    let horizon = config.scheduling.max_horizon_days;
    let selection =
        services::auto_select(&repo, provider_id, date, required_minutes, horizon).await?;

    println!("\nauto-selection for {required_minutes} min (horizon {horizon} days):");
    for fragment in &selection.fragments {
        println!(
            "  {} slot {}: {} - {} ({} min)",
            fragment.date, fragment.slot_id, fragment.start_time, fragment.end_time, fragment.minutes
        );
    }
    if let Some((start, end)) = selection.envelope() {
        println!("  envelope: {start} - {end}");
    }
    if selection.fully_satisfied {
        println!("  fully satisfied with {} min", selection.accumulated_minutes);
    } else {
        println!(
            "  WARNING: only {} of {} min available within {} day(s)",
            selection.accumulated_minutes, required_minutes, horizon
        );
    }

    Ok(())
}
