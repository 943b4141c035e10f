use crate::activity::{ActivityResult, ActivityType};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Per-type statistics keyed by the recognised activity types only
pub type ActivityStatsByType = BTreeMap<ActivityType, ActivityStats>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserStats {
    /// Whole minutes, truncated
    #[serde(rename = "total_study_time_minutes")]
    pub total_study_time: i64,
    pub total_activities: i64,
    pub completed_activities: i64,
    pub average_accuracy: f64,
    pub words_learned: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_study_date: Option<DateTime<Utc>>,
}

impl UserStats {
    pub fn empty() -> Self {
        UserStats {
            total_study_time: 0,
            total_activities: 0,
            completed_activities: 0,
            average_accuracy: 0.0,
            words_learned: 0,
            last_study_date: None,
        }
    }

    /// Study minutes per activity, 0 when there are no activities
    pub fn average_study_time(&self) -> f64 {
        if self.total_activities == 0 {
            return 0.0;
        }
        self.total_study_time as f64 / self.total_activities as f64
    }

    /// Percentage of activities completed, 0 when there are no activities
    pub fn completion_rate(&self) -> f64 {
        percentage(self.completed_activities, self.total_activities)
    }

    pub fn metrics(&self) -> StudyMetrics {
        StudyMetrics {
            average_study_time_minutes: self.average_study_time(),
            completion_rate_percent: self.completion_rate(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityStats {
    pub activity_type: ActivityType,
    pub completion_rate: f64,
    pub average_accuracy: f64,
    #[serde(rename = "total_time_minutes")]
    pub total_time: i64,
    pub last_attempt: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyProgress {
    pub date: NaiveDate,
    #[serde(rename = "minutes_studied")]
    pub minutes: i64,
    #[serde(rename = "activities_completed")]
    pub activities: i64,
}

impl DailyProgress {
    pub fn empty(date: NaiveDate) -> Self {
        DailyProgress {
            date,
            minutes: 0,
            activities: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudyProgress {
    pub daily_streak: i64,
    /// Seven days ending today, newest first
    pub weekly_progress: Vec<DailyProgress>,
    pub by_activity_type: ActivityStatsByType,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StudyMetrics {
    pub average_study_time_minutes: f64,
    pub completion_rate_percent: f64,
}

/// Vocabulary and review totals for the dashboard header
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuickStats {
    pub total_words: i64,
    /// Distinct words with at least one review, right or wrong
    pub words_studied: i64,
    pub study_sessions: i64,
    /// Percentage of review items answered correctly, 0 when there are none
    pub accuracy_rate: f64,
}

impl QuickStats {
    pub fn empty() -> Self {
        QuickStats {
            total_words: 0,
            words_studied: 0,
            study_sessions: 0,
            accuracy_rate: 0.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DashboardProgress {
    pub total_words_studied: i64,
}

/// `part / whole * 100`, 0 when `whole` is 0
pub fn percentage(part: i64, whole: i64) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    part as f64 / whole as f64 * 100.0
}

/// Mean of the results with pending activities counted as 0
pub fn mean_score<'a>(results: impl IntoIterator<Item = &'a ActivityResult>) -> f64 {
    let (sum, count) = results
        .into_iter()
        .fold((0.0, 0usize), |(sum, count), r| (sum + r.value_or_zero(), count + 1));
    if count == 0 {
        return 0.0;
    }
    sum / count as f64
}
