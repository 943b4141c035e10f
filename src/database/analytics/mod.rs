pub mod activity_stats;
pub mod dashboard;
pub mod streak;
pub mod user_stats;
pub mod weekly_progress;

use rusqlite::Connection;

pub use activity_stats::ActivityStatsRepository;
pub use dashboard::DashboardRepository;
pub use streak::StreakRepository;
pub use user_stats::UserStatsRepository;
pub use weekly_progress::WeeklyProgressRepository;

/// Analytics facade providing the read-side aggregations.
///
/// Each aggregation issues several independent queries without a shared snapshot, so
/// a write landing between two of them can be partially reflected in the result.
pub struct Analytics<'a> {
    pub conn: &'a Connection,
}

impl<'a> Analytics<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Analytics { conn }
    }

    pub fn user_stats(&self) -> UserStatsRepository<'a> {
        UserStatsRepository::new(self.conn)
    }

    pub fn activity_stats(&self) -> ActivityStatsRepository<'a> {
        ActivityStatsRepository::new(self.conn)
    }

    pub fn streak(&self) -> StreakRepository<'a> {
        StreakRepository::new(self.conn)
    }

    pub fn weekly_progress(&self) -> WeeklyProgressRepository<'a> {
        WeeklyProgressRepository::new(self.conn)
    }

    pub fn dashboard(&self) -> DashboardRepository<'a> {
        DashboardRepository::new(self.conn)
    }
}
