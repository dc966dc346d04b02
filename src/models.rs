use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exercise {
    pub id: i64,
    pub name: String,
    pub muscle_group: String,
}

/// A progress row joined with its exercise's name and muscle group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressEntry {
    pub id: i64,
    pub exercise_id: i64,
    pub exercise_name: String,
    pub muscle_group: String,
    pub weight: f64,
    pub date: String,
}

impl ProgressEntry {
    pub fn label(&self) -> String {
        format!("{} ({})", self.exercise_name, self.muscle_group)
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct NewExercise {
    pub name: Option<String>,
    pub muscle_group: Option<String>,
}

/// Browser select controls submit ids as strings, API clients as numbers.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ExerciseRef {
    Id(i64),
    Text(String),
}

impl ExerciseRef {
    pub fn is_blank(&self) -> bool {
        matches!(self, Self::Text(text) if text.is_empty())
    }

    pub fn as_id(&self) -> Option<i64> {
        match self {
            Self::Id(id) => Some(*id),
            Self::Text(text) => text.trim().parse().ok(),
        }
    }
}

/// Form inputs may submit the weight as text.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum WeightInput {
    Number(f64),
    Text(String),
}

impl WeightInput {
    /// `None` for blank or non-numeric text.
    pub fn value(&self) -> Option<f64> {
        match self {
            Self::Number(weight) => Some(*weight),
            Self::Text(text) => text.trim().parse::<f64>().ok().filter(|w| w.is_finite()),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct NewProgress {
    pub exercise_id: Option<ExerciseRef>,
    pub weight: Option<WeightInput>,
    pub date: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ExerciseCreated {
    pub id: i64,
    pub name: String,
    pub muscle_group: String,
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ProgressCreated {
    pub id: i64,
    pub exercise_id: i64,
    pub weight: f64,
    pub date: String,
    pub message: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct ChartQuery {
    pub exercise_id: Option<String>,
    pub muscle_group: Option<String>,
    pub range: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub date: String,
    pub weight: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartGroup {
    pub label: String,
    pub points: Vec<ChartPoint>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChartResponse {
    pub range: String,
    pub total: usize,
    pub groups: Vec<ChartGroup>,
}
