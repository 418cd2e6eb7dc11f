use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionType {
    YesNo,
    Scale,
    FreeText,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: String,
    pub text: String,
    #[serde(rename = "type")]
    pub question_type: QuestionType,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale_min: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale_max: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emoji: Option<String>,
    #[serde(default)]
    pub is_custom: bool,
}

impl Question {
    /// Scale bounds with the catalog defaults applied.
    pub fn scale_bounds(&self) -> (f64, f64) {
        (
            f64::from(self.scale_min.unwrap_or(1)),
            f64::from(self.scale_max.unwrap_or(10)),
        )
    }
}

/// Answer payloads stay plain JSON values (`true`, `7`, `"text"`) on the wire
/// and in the snapshot, but are a closed variant in code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    YesNo(bool),
    Scale(f64),
    FreeText(String),
}

impl AnswerValue {
    pub fn matches(&self, question_type: QuestionType) -> bool {
        matches!(
            (self, question_type),
            (AnswerValue::YesNo(_), QuestionType::YesNo)
                | (AnswerValue::Scale(_), QuestionType::Scale)
                | (AnswerValue::FreeText(_), QuestionType::FreeText)
        )
    }

    /// Numeric view used by trend detection and the heatmap: booleans coerce
    /// to 1/0, free text has no numeric reading.
    pub fn as_numeric(&self) -> Option<f64> {
        match self {
            AnswerValue::YesNo(true) => Some(1.0),
            AnswerValue::YesNo(false) => Some(0.0),
            AnswerValue::Scale(value) => Some(*value),
            AnswerValue::FreeText(_) => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Answer {
    pub question_id: String,
    pub value: AnswerValue,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartType {
    #[default]
    Line,
    Pie,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserQuestion {
    pub question_id: String,
    pub added_at: DateTime<Utc>,
    #[serde(default)]
    pub chart_type: ChartType,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayEntry {
    pub date: NaiveDate,
    pub answers: Vec<Answer>,
    /// Number of active user questions when this entry was created. Absent on
    /// entries imported from older snapshots.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_questions: Option<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
    System,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    pub language: String,
    pub theme: ThemeMode,
    pub reminder_time: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            language: "de".to_string(),
            theme: ThemeMode::Light,
            reminder_time: "20:00".to_string(),
        }
    }
}

/// The whole persisted state. The four top-level keys are the logical storage
/// keys of the snapshot format, so the data file and the export payload share
/// one shape.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppData {
    #[serde(rename = "user-questions", default)]
    pub user_questions: Vec<UserQuestion>,
    #[serde(default)]
    pub entries: Vec<DayEntry>,
    #[serde(rename = "custom-questions", default)]
    pub custom_questions: Vec<Question>,
    #[serde(default)]
    pub settings: Settings,
}

// --- API payloads ---

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveAnswerRequest {
    pub question_id: String,
    pub value: AnswerValue,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateQuestionRequest {
    pub text: String,
    #[serde(rename = "type")]
    pub question_type: QuestionType,
    pub category: String,
    pub scale_min: Option<i32>,
    pub scale_max: Option<i32>,
    pub emoji: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateQuestionRequest {
    pub text: Option<String>,
    pub category: Option<String>,
    pub scale_min: Option<i32>,
    pub scale_max: Option<i32>,
    pub emoji: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddUserQuestionRequest {
    pub question_id: String,
}

#[derive(Debug, Deserialize)]
pub struct ReorderRequest {
    pub from: usize,
    pub to: usize,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartTypeRequest {
    pub chart_type: ChartType,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodayResponse {
    pub date: NaiveDate,
    pub answered: usize,
    pub total: usize,
    pub checked_in: bool,
    pub streak: u32,
    pub week: Vec<WeekDay>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekDay {
    pub date: NaiveDate,
    pub done: bool,
    pub is_today: bool,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    pub current_streak: u32,
    pub best_streak: u32,
    pub total_check_ins: usize,
    pub thirty_day_rate: u8,
    pub completion_rate: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyInsight {
    pub done: u32,
    pub total: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Improving,
    Declining,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendInsight {
    pub text: String,
    pub direction: TrendDirection,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct InsightsResponse {
    pub weekly: WeeklyInsight,
    pub trends: Vec<TrendInsight>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HeatLevel {
    /// After today: rendered empty, never clickable.
    Future,
    NoEntry,
    Level1,
    Level2,
    Level3,
    Level4,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeatmapCell {
    pub date: NaiveDate,
    pub level: HeatLevel,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<u8>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeatmapResponse {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub cells: Vec<HeatmapCell>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerDetail {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emoji: Option<String>,
    pub text: String,
    pub value: AnswerValue,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayDetail {
    pub date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<u8>,
    pub answered: usize,
    pub total: usize,
    pub answers: Vec<AnswerDetail>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub date: NaiveDate,
    pub value: AnswerValue,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionSeries {
    pub question_id: String,
    pub points: Vec<SeriesPoint>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_words: Option<Vec<WordCount>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordCount {
    pub word: String,
    pub count: u32,
}

/// An active question joined with its per-user configuration.
#[derive(Debug, Serialize, Deserialize)]
pub struct ActiveQuestion {
    pub question: Question,
    pub config: UserQuestion,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoutineTemplate {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub question_ids: &'static [&'static str],
}
