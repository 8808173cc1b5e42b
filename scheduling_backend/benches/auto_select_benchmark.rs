use std::hint::black_box;

use chrono::{Datelike, NaiveDate, NaiveTime, Weekday};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use tokio::runtime::Runtime;

use fms_scheduling::algorithms::intervals::find_free_subrange;
use fms_scheduling::db::repositories::LocalRepository;
use fms_scheduling::models::{
    Booking, BookingId, BookingStatus, ProviderId, TimeRange, WeeklySlot, WeeklySlotId,
};
use fms_scheduling::services::auto_select;

fn hm(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

fn range(s: (u32, u32), e: (u32, u32)) -> TimeRange {
    TimeRange::new(hm(s.0, s.1), hm(e.0, e.1)).unwrap()
}

/// A provider working 09:00-17:00 every weekday, with the first four weeks
/// partially booked in 45-minute pieces.
fn busy_repository() -> LocalRepository {
    let repo = LocalRepository::new();
    let weekdays = [
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
    ];
    for (i, weekday) in weekdays.iter().enumerate() {
        repo.store_slot_impl(WeeklySlot {
            id: WeeklySlotId::new(i as i64 + 1),
            provider_id: ProviderId::new(1),
            weekday: *weekday,
            window: range((9, 0), (17, 0)),
            active: true,
        });
    }

    let start = NaiveDate::from_ymd_opt(2026, 8, 10).unwrap();
    let mut booking_id = 1i64;
    for offset in 0..28 {
        let date = start + chrono::TimeDelta::days(offset);
        if matches!(date.weekday(), Weekday::Sat | Weekday::Sun) {
            continue;
        }
        // Three 45-minute bookings spread through each weekday.
        for (h, m) in [(9u32, 0u32), (11, 30), (14, 15)] {
            repo.store_booking_impl(Booking {
                id: BookingId::new(booking_id),
                provider_id: ProviderId::new(1),
                date,
                window: TimeRange::new(hm(h, m), hm(h, m) + chrono::TimeDelta::minutes(45))
                    .unwrap(),
                slot_ids: vec![],
                status: BookingStatus::Scheduled,
            });
            booking_id += 1;
        }
    }
    repo
}

fn bench_auto_select(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();
    let repo = busy_repository();
    let start = NaiveDate::from_ymd_opt(2026, 8, 10).unwrap();

    let mut group = c.benchmark_group("auto_select");
    for minutes in [60i64, 480, 2400] {
        group.bench_with_input(
            BenchmarkId::from_parameter(minutes),
            &minutes,
            |b, &minutes| {
                b.iter(|| {
                    let result = rt
                        .block_on(auto_select(
                            &repo,
                            ProviderId::new(1),
                            black_box(start),
                            black_box(minutes),
                            90,
                        ))
                        .unwrap();
                    black_box(result)
                });
            },
        );
    }
    group.finish();
}

fn bench_find_free_subrange(c: &mut Criterion) {
    let bounds = range((9, 0), (17, 0));
    let occupied: Vec<TimeRange> = (0..8)
        .map(|i| {
            let start = hm(9, 0) + chrono::TimeDelta::minutes(i * 55);
            TimeRange::new(start, start + chrono::TimeDelta::minutes(30)).unwrap()
        })
        .collect();

    c.bench_function("find_free_subrange/fragmented_day", |b| {
        b.iter(|| black_box(find_free_subrange(&bounds, black_box(&occupied), 45)));
    });
}

criterion_group!(benches, bench_auto_select, bench_find_free_subrange);
criterion_main!(benches);
