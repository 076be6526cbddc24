//! Season aggregate statistics.

use crate::model::LaunchDay;

/// Summary numbers for one season of launch days. Derived data: recomputed
/// from the current collection on every render, never cached.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SeasonStats {
    /// Highest altitude reached by any attempt, in feet. 0 for an empty season.
    pub highest_altitude: f64,
    /// Best recorded TARC score, if any attempt carried one.
    pub best_tarc_score: Option<f64>,
    /// Most attempts flown on a single day.
    pub max_launches_in_day: usize,
    /// Attempt count across the whole season.
    pub total_launches: usize,
}

impl SeasonStats {
    /// Single pass over the season's days. A TARC score of exactly zero reads
    /// as "no score recorded", matching the data files' convention.
    #[must_use]
    pub fn compute(days: &[LaunchDay]) -> Self {
        let mut stats = Self::default();
        for day in days {
            let count = day.launches.len();
            stats.total_launches += count;
            stats.max_launches_in_day = stats.max_launches_in_day.max(count);

            for attempt in &day.launches {
                if attempt.altitude > stats.highest_altitude {
                    stats.highest_altitude = attempt.altitude;
                }
                if let Some(score) = attempt.tarc_score
                    && score != 0.0
                    && stats.best_tarc_score.is_none_or(|best| score > best)
                {
                    stats.best_tarc_score = Some(score);
                }
            }
        }
        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::LaunchAttempt;

    fn day(date: &str, attempts: Vec<LaunchAttempt>) -> LaunchDay {
        LaunchDay {
            date: date.to_string(),
            launches: attempts,
            ..LaunchDay::default()
        }
    }

    fn attempt(altitude: f64, tarc_score: Option<f64>) -> LaunchAttempt {
        LaunchAttempt {
            altitude,
            tarc_score,
            ..LaunchAttempt::default()
        }
    }

    #[test]
    fn empty_season_is_all_zeroes() {
        let stats = SeasonStats::compute(&[]);
        assert_eq!(stats.highest_altitude, 0.0);
        assert_eq!(stats.best_tarc_score, None);
        assert_eq!(stats.max_launches_in_day, 0);
        assert_eq!(stats.total_launches, 0);
    }

    #[test]
    fn totals_and_maxima_track_the_collection() {
        let days = [
            day(
                "2025-04-13",
                vec![attempt(2847.0, None), attempt(1200.0, None)],
            ),
            day("2025-03-15", vec![attempt(798.0, Some(95.8))]),
        ];
        let stats = SeasonStats::compute(&days);
        assert_eq!(stats.highest_altitude, 2847.0);
        assert_eq!(stats.best_tarc_score, Some(95.8));
        assert_eq!(stats.max_launches_in_day, 2);
        assert_eq!(stats.total_launches, 3);
    }

    #[test]
    fn adding_a_higher_day_only_raises_the_maximum() {
        let mut days = vec![day("2025-03-15", vec![attempt(798.0, None)])];
        let before = SeasonStats::compute(&days);
        days.push(day("2025-04-13", vec![attempt(2847.0, None)]));
        let after = SeasonStats::compute(&days);
        assert!(after.highest_altitude >= before.highest_altitude);
        assert_eq!(after.highest_altitude, 2847.0);
    }

    #[test]
    fn zero_tarc_score_counts_as_absent() {
        let days = [day("2025-05-01", vec![attempt(500.0, Some(0.0))])];
        assert_eq!(SeasonStats::compute(&days).best_tarc_score, None);

        let days = [day(
            "2025-05-01",
            vec![attempt(500.0, Some(0.0)), attempt(640.0, Some(88.2))],
        )];
        assert_eq!(SeasonStats::compute(&days).best_tarc_score, Some(88.2));
    }

    #[test]
    fn first_seen_maximum_wins_ties() {
        let days = [day(
            "2025-05-01",
            vec![attempt(900.0, Some(90.0)), attempt(900.0, Some(90.0))],
        )];
        let stats = SeasonStats::compute(&days);
        assert_eq!(stats.highest_altitude, 900.0);
        assert_eq!(stats.best_tarc_score, Some(90.0));
    }
}
