use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::scoring::{MetricInputs, ScoreReport};

/// Weekday labels in the order the weekly chart expects them.
pub const WEEKDAYS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Last submitted sleep score per weekday, Monday first. Starts at all
/// zeroes and lives only as long as the process.
#[derive(Debug, Clone, Default)]
pub struct WeeklyScores {
    scores: [i64; 7],
}

impl WeeklyScores {
    pub fn set(&mut self, day: Weekday, score: i64) {
        self.scores[day.num_days_from_monday() as usize] = score;
    }

    pub fn get(&self, day: Weekday) -> i64 {
        self.scores[day.num_days_from_monday() as usize]
    }

    pub fn snapshot(&self) -> [i64; 7] {
        self.scores
    }
}

/// Raw form fields from `POST /`. Everything arrives as text; the numeric
/// fields go through parse-or-zero coercion.
#[derive(Debug, Deserialize)]
pub struct SubmissionForm {
    pub day: Option<String>,
    pub sleep: Option<String>,
    pub stress: Option<String>,
    pub screen: Option<String>,
    pub mood: Option<String>,
}

impl SubmissionForm {
    pub fn metrics(&self) -> MetricInputs {
        MetricInputs {
            sleep: coerce(self.sleep.as_deref()),
            stress: coerce(self.stress.as_deref()),
            screen: coerce(self.screen.as_deref()),
            mood: coerce(self.mood.as_deref()),
        }
    }
}

// Malformed numbers become 0.0 rather than an error; the page always
// renders, possibly with degenerate scores.
fn coerce(raw: Option<&str>) -> f64 {
    raw.and_then(|value| value.trim().parse::<f64>().ok())
        .unwrap_or(0.0)
}

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub day: Option<String>,
    #[serde(default)]
    pub sleep: f64,
    #[serde(default)]
    pub stress: f64,
    #[serde(default)]
    pub screen: f64,
    #[serde(default)]
    pub mood: f64,
}

impl AnalyzeRequest {
    pub fn metrics(&self) -> MetricInputs {
        MetricInputs {
            sleep: self.sleep,
            stress: self.stress,
            screen: self.screen,
            mood: self.mood,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    #[serde(flatten)]
    pub report: ScoreReport,
    pub weekly: [i64; 7],
}

#[derive(Debug, Serialize)]
pub struct WeeklyResponse {
    pub days: [&'static str; 7],
    pub scores: [i64; 7],
}

/// Everything the page template needs after a submission.
#[derive(Debug)]
pub struct ReportContext {
    pub report: ScoreReport,
    pub weekly: [i64; 7],
}
