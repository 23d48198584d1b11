//! Per-task work-timer state machine.
//!
//! A task is `Idle` (no start instant recorded) or `Running`. Stopping adds
//! the rounded elapsed minutes to the task's accumulator and returns to
//! `Idle`. Elapsed time is wall-clock based; clock skew and system suspend
//! are not corrected for.

use chrono::{DateTime, Utc};

use crate::entities::Task;
use crate::errors::{TaskError, TaskResult};

/// Timer states derived from the task's fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerState {
    Idle,
    Running,
}

impl TimerState {
    pub fn of(task: &Task) -> Self {
        if task.timer_started_at.is_some() {
            Self::Running
        } else {
            Self::Idle
        }
    }
}

/// Start/stop transitions over a task's timer fields.
///
/// Pure with respect to time: the caller supplies `now`, so tests can drive
/// the machine with fixed instants.
pub struct WorkTimer;

impl WorkTimer {
    /// Record `now` as the start of a work interval.
    ///
    /// Starting while already running re-arms the timer: the previous start
    /// instant is overwritten and time since it is discarded.
    pub fn start(task: &mut Task, now: DateTime<Utc>) {
        task.timer_started_at = Some(now);
        task.updated_at = now;
    }

    /// Close the running interval, add its rounded minutes to the
    /// accumulator, and clear the start instant.
    ///
    /// Rounding is half-up on seconds (125s -> 2min, 30s -> 1min, 29s -> 0).
    /// A zero-minute interval still succeeds and clears the timer. Fails
    /// with [`TaskError::TimerNotStarted`] when idle, mutating nothing.
    pub fn stop(task: &mut Task, now: DateTime<Utc>) -> TaskResult<u64> {
        let Some(started_at) = task.timer_started_at else {
            return Err(TaskError::TimerNotStarted {
                task_id: task.id.clone(),
            });
        };

        // Clamp negative wall-clock deltas; the accumulator never decreases
        let elapsed_secs = (now - started_at).num_seconds().max(0);
        let elapsed_minutes = u64::try_from((elapsed_secs + 30) / 60).unwrap_or(0);

        task.time_spent_minutes += elapsed_minutes;
        task.timer_started_at = None;
        task.updated_at = now;

        Ok(elapsed_minutes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::TaskPriority;
    use chrono::Duration;

    fn task() -> Task {
        Task::new("Test", "", TaskPriority::Medium)
    }

    #[test]
    fn test_initial_state_is_idle() {
        assert_eq!(TimerState::of(&task()), TimerState::Idle);
    }

    #[test]
    fn test_start_transitions_to_running() {
        let mut task = task();
        let now = Utc::now();
        WorkTimer::start(&mut task, now);
        assert_eq!(TimerState::of(&task), TimerState::Running);
        assert_eq!(task.timer_started_at, Some(now));
    }

    #[test]
    fn test_stop_after_125_seconds_rounds_half_up_to_two() {
        let mut task = task();
        let t0 = Utc::now();
        WorkTimer::start(&mut task, t0);

        let elapsed = WorkTimer::stop(&mut task, t0 + Duration::seconds(125)).unwrap();
        assert_eq!(elapsed, 2);
        assert_eq!(task.time_spent_minutes, 2);
        assert_eq!(TimerState::of(&task), TimerState::Idle);
    }

    #[test]
    fn test_rounding_boundaries() {
        let cases = [(29, 0), (30, 1), (89, 1), (90, 2), (0, 0)];
        for (secs, expected) in cases {
            let mut task = task();
            let t0 = Utc::now();
            WorkTimer::start(&mut task, t0);
            let elapsed = WorkTimer::stop(&mut task, t0 + Duration::seconds(secs)).unwrap();
            assert_eq!(elapsed, expected, "{secs}s");
        }
    }

    #[test]
    fn test_immediate_stop_adds_zero_and_clears_timer() {
        let mut task = task();
        let t0 = Utc::now();
        WorkTimer::start(&mut task, t0);

        let elapsed = WorkTimer::stop(&mut task, t0).unwrap();
        assert_eq!(elapsed, 0);
        assert_eq!(task.time_spent_minutes, 0);
        assert!(task.timer_started_at.is_none());
    }

    #[test]
    fn test_stop_while_idle_fails_without_mutation() {
        let mut task = task();
        task.time_spent_minutes = 7;
        let before = task.clone();

        let err = WorkTimer::stop(&mut task, Utc::now()).unwrap_err();
        assert!(matches!(err, TaskError::TimerNotStarted { .. }));
        assert_eq!(task.time_spent_minutes, before.time_spent_minutes);
        assert_eq!(task.timer_started_at, before.timer_started_at);
        assert_eq!(task.updated_at, before.updated_at);
    }

    #[test]
    fn test_double_start_rearms_and_discards_earlier_interval() {
        let mut task = task();
        let t0 = Utc::now();
        WorkTimer::start(&mut task, t0);
        WorkTimer::start(&mut task, t0 + Duration::seconds(600));

        // Only the interval since the second start counts
        let elapsed = WorkTimer::stop(&mut task, t0 + Duration::seconds(660)).unwrap();
        assert_eq!(elapsed, 1);
        assert_eq!(task.time_spent_minutes, 1);
    }

    #[test]
    fn test_backwards_clock_clamps_to_zero() {
        let mut task = task();
        let t0 = Utc::now();
        WorkTimer::start(&mut task, t0);

        let elapsed = WorkTimer::stop(&mut task, t0 - Duration::seconds(90)).unwrap();
        assert_eq!(elapsed, 0);
        assert_eq!(task.time_spent_minutes, 0);
        assert_eq!(TimerState::of(&task), TimerState::Idle);
    }

    #[test]
    fn test_accumulation_across_intervals() {
        let mut task = task();
        let t0 = Utc::now();

        WorkTimer::start(&mut task, t0);
        WorkTimer::stop(&mut task, t0 + Duration::seconds(120)).unwrap();

        WorkTimer::start(&mut task, t0 + Duration::seconds(300));
        WorkTimer::stop(&mut task, t0 + Duration::seconds(480)).unwrap();

        assert_eq!(task.time_spent_minutes, 5);
    }
}
