use chrono::{Duration, Utc};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use study_tracker::activity::{ActivityOutcome, ActivityType, ReviewAnswer};
use study_tracker::database::Database;
use study_tracker::date_provider::FixedDateProvider;
use study_tracker::error::StoreResult;

/// Fills a database with a few days of study history for trying out the server and report
#[derive(Parser, Debug)]
#[command(name = "sample_data")]
struct SampleArgs {
    /// Database file to create or extend
    #[arg(value_name = "DATABASE", default_value = "/tmp/study_tracker_sample.db")]
    db_path: PathBuf,
}

const WORDS: [(&str, &str, &str); 4] = [
    ("こんにちは", "konnichiwa", "hello"),
    ("さようなら", "sayounara", "goodbye"),
    ("おはよう", "ohayou", "good morning"),
    ("ありがとう", "arigatou", "thank you"),
];

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = SampleArgs::parse();
    let path = args.db_path.to_string_lossy().into_owned();

    if let Err(e) = populate(&path) {
        eprintln!("Failed to create sample data: {}", e);
        std::process::exit(1);
    }
    println!("Sample database created at {} with study history", path);
}

fn populate(path: &str) -> StoreResult<()> {
    let setup = Database::new(path)?;
    let group_id = setup.create_group("Basic Greetings")?;
    let mut word_ids = Vec::new();
    for (japanese, romaji, english) in WORDS {
        word_ids.push(setup.add_word(group_id, japanese, romaji, english, None)?);
    }
    drop(setup);

    // (days ago, type, score, seconds); the newest three days form a streak
    let plan = [
        (5, ActivityType::Flashcards, 3.0, 240),
        (2, ActivityType::VocabularyQuiz, 75.0, 600),
        (1, ActivityType::WordMatching, 0.0, 180),
        (0, ActivityType::SentenceConstruction, 60.0, 420),
        (0, ActivityType::WritingPractice, 85.0, 900),
    ];

    let today = Utc::now();
    for (days_ago, activity_type, score, seconds) in plan {
        let when = today - Duration::days(days_ago);
        let db = Database::with_date_provider(path, Arc::new(FixedDateProvider::new(when)))?;

        let activity_id = db.create_activity(group_id, activity_type)?;
        let answers: Vec<ReviewAnswer> = word_ids
            .iter()
            .enumerate()
            .map(|(i, &word_id)| ReviewAnswer {
                word_id,
                correct: (i + days_ago as usize) % 3 != 0,
            })
            .collect();
        let score = if activity_type == ActivityType::WordMatching {
            ActivityOutcome::accuracy_from_answers(&answers)
        } else {
            score
        };

        db.record_result(
            activity_id,
            &ActivityOutcome {
                score,
                time_taken_seconds: seconds,
                answers,
            },
        )?;
    }

    // One attempt left unfinished
    let db = Database::new(path)?;
    db.create_activity(group_id, ActivityType::VocabularyQuiz)?;
    Ok(())
}
