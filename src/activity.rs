use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The closed set of study activity kinds the statistics understand
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityType {
    Flashcards,
    WordMatching,
    VocabularyQuiz,
    WritingPractice,
    SentenceConstruction,
}

impl ActivityType {
    pub const ALL: [ActivityType; 5] = [
        ActivityType::Flashcards,
        ActivityType::WordMatching,
        ActivityType::VocabularyQuiz,
        ActivityType::WritingPractice,
        ActivityType::SentenceConstruction,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityType::Flashcards => "flashcards",
            ActivityType::WordMatching => "word_matching",
            ActivityType::VocabularyQuiz => "vocabulary_quiz",
            ActivityType::WritingPractice => "writing_practice",
            ActivityType::SentenceConstruction => "sentence_construction",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "flashcards" => Some(ActivityType::Flashcards),
            "word_matching" => Some(ActivityType::WordMatching),
            "vocabulary_quiz" => Some(ActivityType::VocabularyQuiz),
            "writing_practice" => Some(ActivityType::WritingPractice),
            "sentence_construction" => Some(ActivityType::SentenceConstruction),
            _ => None,
        }
    }

    /// Wraps a finished activity's score in the variant this type stores it as
    pub fn result(&self, value: f64) -> ActivityResult {
        match self {
            ActivityType::VocabularyQuiz => ActivityResult::Score(value),
            ActivityType::Flashcards => ActivityResult::Confidence(value),
            ActivityType::WordMatching
            | ActivityType::WritingPractice
            | ActivityType::SentenceConstruction => ActivityResult::Accuracy(value),
        }
    }
}

/// Outcome stored on a study activity.
///
/// Each activity type keeps its result in a different nullable column; this is the
/// one place that decides how those columns are read back and what an unfinished
/// activity contributes to averages.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ActivityResult {
    Pending,
    Score(f64),
    Confidence(f64),
    Accuracy(f64),
}

impl ActivityResult {
    /// Reads the result columns with precedence accuracy, confidence, score
    pub fn from_columns(
        accuracy_score: Option<f64>,
        confidence_score: Option<f64>,
        score: Option<f64>,
    ) -> Self {
        match (accuracy_score, confidence_score, score) {
            (Some(accuracy), _, _) => ActivityResult::Accuracy(accuracy),
            (None, Some(confidence), _) => ActivityResult::Confidence(confidence),
            (None, None, Some(score)) => ActivityResult::Score(score),
            (None, None, None) => ActivityResult::Pending,
        }
    }

    /// The score counted by every average; activities without a result count as 0
    pub fn value_or_zero(&self) -> f64 {
        match self {
            ActivityResult::Pending => 0.0,
            ActivityResult::Score(v) | ActivityResult::Confidence(v) | ActivityResult::Accuracy(v) => *v,
        }
    }

    /// Column a completed result is written to
    pub fn column(&self) -> Option<&'static str> {
        match self {
            ActivityResult::Pending => None,
            ActivityResult::Score(_) => Some("score"),
            ActivityResult::Confidence(_) => Some("confidence_score"),
            ActivityResult::Accuracy(_) => Some("accuracy_score"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct StudyActivity {
    pub id: i64,
    pub group_id: i64,
    /// Raw type string as stored; see `activity_type()` for the parsed form
    pub kind: String,
    pub created_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
    pub result: ActivityResult,
}

impl StudyActivity {
    pub fn activity_type(&self) -> Option<ActivityType> {
        ActivityType::parse(&self.kind)
    }

    pub fn is_completed(&self) -> bool {
        self.completed_at.is_some()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StudySession {
    pub id: i64,
    pub group_id: i64,
    pub study_activity_id: i64,
    pub created_at: DateTime<Utc>,
    pub time_taken_seconds: Option<i64>,
}

/// One word-level answer given during a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewAnswer {
    pub word_id: i64,
    pub correct: bool,
}

/// Everything written when an activity attempt is finished
#[derive(Debug, Clone)]
pub struct ActivityOutcome {
    pub score: f64,
    pub time_taken_seconds: i64,
    pub answers: Vec<ReviewAnswer>,
}

impl ActivityOutcome {
    /// Percentage of correct answers, 0 when nothing was answered
    pub fn accuracy_from_answers(answers: &[ReviewAnswer]) -> f64 {
        if answers.is_empty() {
            return 0.0;
        }
        let correct = answers.iter().filter(|a| a.correct).count();
        correct as f64 / answers.len() as f64 * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activity_type_round_trip_names() {
        for kind in ActivityType::ALL {
            assert_eq!(ActivityType::parse(kind.as_str()), Some(kind));
        }
    }

    #[test]
    fn test_unknown_activity_type() {
        assert_eq!(ActivityType::parse("unknown_type"), None);
        assert_eq!(ActivityType::parse("Flashcards"), None);
    }

    #[test]
    fn test_result_column_per_type() {
        assert_eq!(ActivityType::VocabularyQuiz.result(1.0).column(), Some("score"));
        assert_eq!(
            ActivityType::Flashcards.result(1.0).column(),
            Some("confidence_score")
        );
        assert_eq!(
            ActivityType::WritingPractice.result(1.0).column(),
            Some("accuracy_score")
        );
        assert_eq!(
            ActivityType::WordMatching.result(1.0).column(),
            Some("accuracy_score")
        );
        assert_eq!(ActivityResult::Pending.column(), None);
    }

    #[test]
    fn test_from_columns_precedence() {
        assert_eq!(
            ActivityResult::from_columns(Some(80.0), Some(3.0), Some(10.0)),
            ActivityResult::Accuracy(80.0)
        );
        assert_eq!(
            ActivityResult::from_columns(None, Some(3.0), Some(10.0)),
            ActivityResult::Confidence(3.0)
        );
        assert_eq!(
            ActivityResult::from_columns(None, None, Some(10.0)),
            ActivityResult::Score(10.0)
        );
        assert_eq!(
            ActivityResult::from_columns(None, None, None),
            ActivityResult::Pending
        );
    }

    #[test]
    fn test_pending_counts_as_zero() {
        assert_eq!(ActivityResult::Pending.value_or_zero(), 0.0);
        assert_eq!(ActivityResult::Accuracy(90.0).value_or_zero(), 90.0);
    }

    #[test]
    fn test_accuracy_from_answers() {
        let answers = [
            ReviewAnswer { word_id: 1, correct: true },
            ReviewAnswer { word_id: 2, correct: false },
            ReviewAnswer { word_id: 3, correct: true },
            ReviewAnswer { word_id: 4, correct: true },
        ];
        assert!((ActivityOutcome::accuracy_from_answers(&answers) - 75.0).abs() < 0.001);
        assert_eq!(ActivityOutcome::accuracy_from_answers(&[]), 0.0);
    }
}
