//! Multi-day greedy slot selection.
//!
//! Given a required duration, walks forward from a start date day by day,
//! filling the soonest available time first, until the duration is satisfied
//! or the horizon is exhausted.

use chrono::{Datelike, NaiveDate};
use log::{info, warn};

use crate::db::repository::SchedulingRepository;
use crate::models::{ProviderId, SelectionFragment, SelectionResult};

use super::capacity::{calculate_next_available_time, get_slot_capacity};
use super::error::SchedulingResult;

/// Default search horizon, in days, bounding the forward walk.
pub const DEFAULT_MAX_HORIZON_DAYS: u32 = 90;

/// Greedily select slot time for `required_minutes` of work, starting at
/// `start_date` and walking at most `max_horizon_days` forward.
///
/// Within each day, slots are taken in start-time order; from each usable
/// slot the algorithm takes `min(available, still missing)` minutes at the
/// slot's earliest contiguous gap. Slots with no availability, or whose free
/// time is too fragmented for the wanted contiguous piece, are skipped. The
/// walk stops the instant the duration is satisfied and never revisits a
/// chosen fragment — a deliberate trade of bin-packing optimality for
/// deterministic, operator-predictable behavior.
///
/// A result with `fully_satisfied == false` means the horizon was exhausted
/// first; the caller must surface the shortfall as a warning, never treat it
/// as success.
///
/// `span_days` counts the fully scanned days, clamped to at least 1 (the
/// stop on satisfaction skips the final day's count).
pub async fn auto_select<R: SchedulingRepository>(
    repo: &R,
    provider_id: ProviderId,
    start_date: NaiveDate,
    required_minutes: i64,
    max_horizon_days: u32,
) -> SchedulingResult<SelectionResult> {
    let mut fragments: Vec<SelectionFragment> = Vec::new();
    let mut accumulated: i64 = 0;
    let mut date = start_date;
    let mut days_processed: u32 = 0;

    'days: while accumulated < required_minutes && days_processed < max_horizon_days {
        let slots = repo.active_slots_for(provider_id, date.weekday()).await?;

        for slot in &slots {
            let cap = get_slot_capacity(repo, slot, date, None).await?;
            if cap.available_minutes <= 0 {
                continue;
            }

            let want = cap.available_minutes.min(required_minutes - accumulated);
            let Some(gap) =
                calculate_next_available_time(repo, slot, date, want, None).await?
            else {
                // Free minutes exist but not contiguously; this slot cannot
                // host the piece we want today.
                continue;
            };

            fragments.push(SelectionFragment::new(slot.id, date, gap, want));
            accumulated += want;
            if accumulated >= required_minutes {
                break 'days;
            }
        }

        match date.succ_opt() {
            Some(next) => date = next,
            None => break,
        }
        days_processed += 1;
    }

    let fully_satisfied = accumulated >= required_minutes;
    let result = SelectionResult {
        fragments,
        accumulated_minutes: accumulated,
        fully_satisfied,
        span_days: days_processed.max(1),
    };

    if fully_satisfied {
        info!(
            "auto-select provider={} start={}: {} fragment(s), {} min",
            provider_id,
            start_date,
            result.fragments.len(),
            accumulated
        );
    } else {
        warn!(
            "auto-select provider={} start={}: only {} of {} min within {} day horizon",
            provider_id, start_date, accumulated, required_minutes, max_horizon_days
        );
    }

    Ok(result)
}
