//! Calendar heatmap scoring: a normalized 0-100 day score over heterogeneous
//! answer types, a fixed 16-week grid, and the per-day detail lookup.

use crate::models::{
    AnswerDetail, AnswerValue, AppData, DayDetail, DayEntry, HeatLevel, HeatmapCell,
    HeatmapResponse, QuestionType, WeekDay,
};
use crate::store;
use chrono::{Datelike, Duration, NaiveDate};

pub const HEATMAP_WEEKS: i64 = 16;

/// Score used when a day has an entry but nothing scoreable on it.
const NEUTRAL_SCORE: u8 = 50;

/// Normalized day score. Scale answers contribute their position within the
/// question's range, yes/no answers contribute 1 or 0, free text is excluded.
/// A day whose answers are all unscoreable gets the neutral 50.
pub fn day_score(entry: &DayEntry, data: &AppData) -> u8 {
    let mut contributions = Vec::with_capacity(entry.answers.len());
    for answer in &entry.answers {
        let Some(question) = store::resolve_question(data, &answer.question_id) else {
            continue;
        };
        match (question.question_type, &answer.value) {
            (QuestionType::Scale, AnswerValue::Scale(value)) => {
                let (min, max) = question.scale_bounds();
                if max > min {
                    contributions.push((value - min) / (max - min));
                }
            }
            (QuestionType::YesNo, AnswerValue::YesNo(answered_yes)) => {
                contributions.push(if *answered_yes { 1.0 } else { 0.0 });
            }
            _ => {}
        }
    }
    if contributions.is_empty() {
        return NEUTRAL_SCORE;
    }
    let mean = contributions.iter().sum::<f64>() / contributions.len() as f64;
    (mean * 100.0).round() as u8
}

fn level_for_score(score: u8) -> HeatLevel {
    match score {
        0..=39 => HeatLevel::Level1,
        40..=59 => HeatLevel::Level2,
        60..=79 => HeatLevel::Level3,
        _ => HeatLevel::Level4,
    }
}

/// 16 week rows of 7 cells each, the last row being the current week. Days
/// after `today` land in the current week's tail and are marked future.
pub fn heatmap_at(today: NaiveDate, data: &AppData) -> HeatmapResponse {
    let monday = week_start(today);
    let start = monday - Duration::weeks(HEATMAP_WEEKS - 1);
    let end = monday + Duration::days(6);

    let mut cells = Vec::with_capacity((HEATMAP_WEEKS * 7) as usize);
    for offset in 0..HEATMAP_WEEKS * 7 {
        let date = start + Duration::days(offset);
        let cell = if date > today {
            HeatmapCell {
                date,
                level: HeatLevel::Future,
                score: None,
            }
        } else {
            match store::day_entry(data, date) {
                Some(entry) => {
                    let score = day_score(entry, data);
                    HeatmapCell {
                        date,
                        level: level_for_score(score),
                        score: Some(score),
                    }
                }
                None => HeatmapCell {
                    date,
                    level: HeatLevel::NoEntry,
                    score: None,
                },
            }
        };
        cells.push(cell);
    }

    HeatmapResponse { start, end, cells }
}

/// Detail for a selected day: recomputed score, the raw answers joined with
/// their question's emoji and text, and answered/total counts. `total` comes
/// from the entry's saved active-question count, falling back to the current
/// count for entries that predate the snapshot field.
pub fn day_detail(date: NaiveDate, data: &AppData) -> DayDetail {
    let entry = store::day_entry(data, date);
    let answers: Vec<AnswerDetail> = entry
        .map(|entry| {
            entry
                .answers
                .iter()
                .filter_map(|answer| {
                    store::resolve_question(data, &answer.question_id).map(|question| {
                        AnswerDetail {
                            emoji: question.emoji,
                            text: question.text,
                            value: answer.value.clone(),
                        }
                    })
                })
                .collect()
        })
        .unwrap_or_default();

    DayDetail {
        date,
        score: entry.map(|entry| day_score(entry, data)),
        answered: entry.map(|entry| entry.answers.len()).unwrap_or(0),
        total: entry
            .and_then(|entry| entry.active_questions)
            .unwrap_or(data.user_questions.len()),
        answers,
    }
}

/// The current week's Monday..Sunday strip shown on the home screen.
pub fn week_strip_at(today: NaiveDate, data: &AppData) -> Vec<WeekDay> {
    let monday = week_start(today);
    (0..7)
        .map(|offset| {
            let date = monday + Duration::days(offset);
            WeekDay {
                date,
                done: store::day_entry(data, date).is_some(),
                is_today: date == today,
            }
        })
        .collect()
}

fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.weekday().num_days_from_monday()))
}
