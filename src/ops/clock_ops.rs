use chrono::{DateTime, Local, NaiveTime, TimeZone, Utc};

use crate::model::clock::Clock;

/// Error type for clock operations
#[derive(Debug, thiserror::Error)]
pub enum ClockError {
    #[error("already clocked in since {0}")]
    AlreadyClockedIn(String),
    #[error("not clocked in")]
    NotClockedIn,
}

/// Reset the counter when the stored day has passed.
///
/// An open session survives the rollover but only counts from midnight
/// onward; the part before midnight belonged to a day whose counter is
/// gone. Returns true when the clock was reset.
pub fn roll_over(clock: &mut Clock, now: DateTime<Local>) -> bool {
    let today = now.date_naive();
    if clock.date == today {
        return false;
    }
    clock.date = today;
    clock.seconds = 0;
    if clock.clocked_in_at.is_some() {
        let midnight = today.and_time(NaiveTime::MIN);
        // A DST gap at midnight leaves the prior clock-in instant alone
        if let Some(start) = Local.from_local_datetime(&midnight).earliest() {
            clock.clocked_in_at = Some(start.with_timezone(&Utc));
        }
    }
    true
}

/// Open a session. Errors if one is already open.
pub fn clock_in(clock: &mut Clock, now: DateTime<Local>) -> Result<(), ClockError> {
    roll_over(clock, now);
    if let Some(at) = clock.clocked_in_at {
        let local = at.with_timezone(&Local);
        return Err(ClockError::AlreadyClockedIn(
            local.format("%H:%M:%S").to_string(),
        ));
    }
    clock.clocked_in_at = Some(now.with_timezone(&Utc));
    Ok(())
}

/// Close the open session, folding its seconds into today's total and
/// recording the total as the last clock-out. Returns the session length
/// in seconds.
pub fn clock_out(clock: &mut Clock, now: DateTime<Local>) -> Result<u64, ClockError> {
    roll_over(clock, now);
    let started = clock.clocked_in_at.take().ok_or(ClockError::NotClockedIn)?;
    let session = (now.with_timezone(&Utc) - started).num_seconds().max(0) as u64;
    clock.seconds += session;
    clock.last_clock_out = clock.seconds;
    Ok(session)
}

/// Today's running total at `now`: closed sessions plus the open one.
/// Callers should `roll_over` first so a stale date reads as zero.
pub fn total_today(clock: &Clock, now: DateTime<Local>) -> u64 {
    let open = clock
        .clocked_in_at
        .map(|at| (now.with_timezone(&Utc) - at).num_seconds().max(0) as u64)
        .unwrap_or(0);
    clock.seconds + open
}

/// Format a second count as `H:MM:SS` for display.
pub fn format_duration(total_seconds: u64) -> String {
    format!(
        "{}:{:02}:{:02}",
        total_seconds / 3_600,
        total_seconds / 60 % 60,
        total_seconds % 60
    )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn local(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> DateTime<Local> {
        Local.with_ymd_and_hms(y, m, d, h, min, s).single().unwrap()
    }

    fn fresh_clock(now: DateTime<Local>) -> Clock {
        Clock::new(now.date_naive())
    }

    #[test]
    fn test_in_out_accumulates() {
        let start = local(2025, 6, 15, 9, 0, 0);
        let mut clock = fresh_clock(start);

        clock_in(&mut clock, start).unwrap();
        assert!(clock.is_clocked_in());

        let session = clock_out(&mut clock, local(2025, 6, 15, 9, 25, 0)).unwrap();
        assert_eq!(session, 1500);
        assert_eq!(clock.seconds, 1500);
        assert_eq!(clock.last_clock_out, 1500);
        assert!(!clock.is_clocked_in());

        // Second session stacks on top
        clock_in(&mut clock, local(2025, 6, 15, 10, 0, 0)).unwrap();
        clock_out(&mut clock, local(2025, 6, 15, 10, 10, 0)).unwrap();
        assert_eq!(clock.seconds, 2100);
        assert_eq!(clock.last_clock_out, 2100);
    }

    #[test]
    fn test_double_clock_in_rejected() {
        let start = local(2025, 6, 15, 9, 0, 0);
        let mut clock = fresh_clock(start);
        clock_in(&mut clock, start).unwrap();

        let err = clock_in(&mut clock, local(2025, 6, 15, 9, 5, 0)).unwrap_err();
        assert!(matches!(err, ClockError::AlreadyClockedIn(_)));
    }

    #[test]
    fn test_clock_out_without_session_rejected() {
        let now = local(2025, 6, 15, 9, 0, 0);
        let mut clock = fresh_clock(now);
        let err = clock_out(&mut clock, now).unwrap_err();
        assert!(matches!(err, ClockError::NotClockedIn));
    }

    #[test]
    fn test_total_includes_open_session() {
        let start = local(2025, 6, 15, 9, 0, 0);
        let mut clock = fresh_clock(start);
        clock.seconds = 600;

        clock_in(&mut clock, start).unwrap();
        let total = total_today(&clock, local(2025, 6, 15, 9, 1, 40));
        assert_eq!(total, 700);
    }

    #[test]
    fn test_midnight_resets_counter() {
        let mut clock = Clock::new(local(2025, 6, 15, 9, 0, 0).date_naive());
        clock.seconds = 5400;
        clock.last_clock_out = 5400;

        let next_morning = local(2025, 6, 16, 8, 0, 0);
        assert!(roll_over(&mut clock, next_morning));
        assert_eq!(clock.date, next_morning.date_naive());
        assert_eq!(clock.seconds, 0);
        // The last clock-out figure is informational and survives the day
        assert_eq!(clock.last_clock_out, 5400);

        // Same-day call is a no-op
        assert!(!roll_over(&mut clock, local(2025, 6, 16, 9, 0, 0)));
    }

    #[test]
    fn test_session_spanning_midnight_counts_from_midnight() {
        let late = local(2025, 6, 15, 23, 0, 0);
        let mut clock = fresh_clock(late);
        clock_in(&mut clock, late).unwrap();

        // Clock out half an hour into the next day
        let session = clock_out(&mut clock, local(2025, 6, 16, 0, 30, 0)).unwrap();
        assert_eq!(session, 1800);
        assert_eq!(clock.date, local(2025, 6, 16, 0, 0, 0).date_naive());
        assert_eq!(clock.seconds, 1800);
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(0), "0:00:00");
        assert_eq!(format_duration(59), "0:00:59");
        assert_eq!(format_duration(3661), "1:01:01");
        assert_eq!(format_duration(86400), "24:00:00");
    }
}
