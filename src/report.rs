use crate::statistics::{DailyProgress, StudyProgress, UserStats};
use colored::Colorize;
use log::warn;
use std::fmt::{self, Write};

#[derive(Clone, Copy)]
enum Tone {
    Heading,
    Good,
    Fair,
    Poor,
}

fn paint(text: String, tone: Tone, use_color: bool) -> String {
    if !use_color {
        return text;
    }
    match tone {
        Tone::Heading => text.bold().to_string(),
        Tone::Good => text.green().to_string(),
        Tone::Fair => text.yellow().to_string(),
        Tone::Poor => text.red().to_string(),
    }
}

fn accuracy_tone(value: f64) -> Tone {
    if value >= 80.0 {
        Tone::Good
    } else if value >= 50.0 {
        Tone::Fair
    } else {
        Tone::Poor
    }
}

fn day_line(day: &DailyProgress) -> String {
    format!(
        "{}  {:>4} min  {:>2} activities",
        day.date.format("%Y-%m-%d"),
        day.minutes,
        day.activities
    )
}

/// Plain-text study report. Colour codes are emitted only when `use_color` is set.
pub fn render_report(stats: &UserStats, progress: &StudyProgress, use_color: bool) -> String {
    let mut out = String::new();
    if let Err(e) = write_report(&mut out, stats, progress, use_color) {
        warn!("Failed to render study report: {}", e);
    }
    out
}

pub fn write_report(
    out: &mut impl Write,
    stats: &UserStats,
    progress: &StudyProgress,
    use_color: bool,
) -> fmt::Result {
    writeln!(out, "{}", paint("Study Progress Report".to_string(), Tone::Heading, use_color))?;
    writeln!(out, "=====================")?;
    writeln!(out)?;

    if stats.total_activities == 0 {
        return writeln!(out, "No study activities recorded yet.");
    }

    write_overall(out, stats, progress, use_color)?;
    write_by_type(out, progress, use_color)?;
    write_week(out, progress)
}

fn section(out: &mut impl Write, title: &str) -> fmt::Result {
    writeln!(out, "{}", title)?;
    writeln!(out, "{}", "-".repeat(60))
}

fn write_overall(
    out: &mut impl Write,
    stats: &UserStats,
    progress: &StudyProgress,
    use_color: bool,
) -> fmt::Result {
    let metrics = stats.metrics();
    section(out, "Overall")?;
    writeln!(
        out,
        "  Activities: {} ({} completed, {:.1}%)",
        stats.total_activities, stats.completed_activities, metrics.completion_rate_percent
    )?;
    writeln!(
        out,
        "  Study time: {} min ({:.1} min per activity)",
        stats.total_study_time, metrics.average_study_time_minutes
    )?;
    writeln!(
        out,
        "  Average accuracy: {}",
        paint(
            format!("{:.1}", stats.average_accuracy),
            accuracy_tone(stats.average_accuracy),
            use_color
        )
    )?;
    writeln!(out, "  Words learned: {}", stats.words_learned)?;
    if let Some(last) = stats.last_study_date {
        writeln!(out, "  Last study: {}", last.format("%Y-%m-%d %H:%M UTC"))?;
    }
    let streak_tone = if progress.daily_streak > 0 { Tone::Good } else { Tone::Poor };
    writeln!(
        out,
        "  Daily streak: {}",
        paint(format!("{} day(s)", progress.daily_streak), streak_tone, use_color)
    )?;
    writeln!(out)
}

fn write_by_type(out: &mut impl Write, progress: &StudyProgress, use_color: bool) -> fmt::Result {
    section(out, "By activity type")?;
    if progress.by_activity_type.is_empty() {
        writeln!(out, "  No data available")?;
    }
    for (kind, type_stats) in &progress.by_activity_type {
        writeln!(
            out,
            "  {:<22} completed {:>5.1}%  accuracy {}  time {} min",
            kind.as_str(),
            type_stats.completion_rate,
            paint(
                format!("{:>5.1}", type_stats.average_accuracy),
                accuracy_tone(type_stats.average_accuracy),
                use_color
            ),
            type_stats.total_time
        )?;
    }
    writeln!(out)
}

fn write_week(out: &mut impl Write, progress: &StudyProgress) -> fmt::Result {
    section(out, "Last 7 days")?;
    for day in &progress.weekly_progress {
        writeln!(out, "  {}", day_line(day))?;
    }
    Ok(())
}
