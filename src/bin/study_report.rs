use clap::Parser;
use std::path::PathBuf;
use study_tracker::database::Database;
use study_tracker::report::render_report;

/// Prints overall, per-type and weekly study statistics from a database file
#[derive(Parser, Debug)]
#[command(name = "study_report")]
#[command(about = "Summarise study progress from a study tracker database", long_about = None)]
struct ReportArgs {
    /// Path to the SQLite database file
    #[arg(value_name = "DATABASE")]
    db_path: PathBuf,

    /// Disable coloured output
    #[arg(long)]
    no_color: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = ReportArgs::parse();

    let db = match Database::new(&args.db_path.to_string_lossy()) {
        Ok(db) => db,
        Err(e) => {
            eprintln!("Error opening database: {}", e);
            std::process::exit(1);
        }
    };

    let stats = match db.compute_user_stats() {
        Ok(stats) => stats,
        Err(e) => {
            eprintln!("Error fetching user statistics: {}", e);
            std::process::exit(1);
        }
    };

    let progress = match db.compute_study_progress() {
        Ok(progress) => progress,
        Err(e) => {
            eprintln!("Error fetching study progress: {}", e);
            std::process::exit(1);
        }
    };

    print!("{}", render_report(&stats, &progress, !args.no_color));
}
