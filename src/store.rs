//! Operations over the loaded [`AppData`]: day-entry upserts, the active
//! question list, custom question CRUD and the per-question answer ledger.
//! All functions take the store handle explicitly; persistence is the
//! caller's job.

use crate::catalog;
use crate::errors::AppError;
use crate::models::{
    Answer, AnswerValue, AppData, ChartType, DayEntry, Question, UserQuestion,
};
use chrono::{NaiveDate, Utc};

pub fn day_entry<'a>(data: &'a AppData, date: NaiveDate) -> Option<&'a DayEntry> {
    data.entries.iter().find(|entry| entry.date == date)
}

/// Upsert an answer into the entry for `date`, creating the entry on the
/// first answer of the day. At most one answer per question survives; a
/// repeated save replaces the earlier one.
pub fn save_answer(
    data: &mut AppData,
    date: NaiveDate,
    question_id: &str,
    value: AnswerValue,
) -> Result<(), AppError> {
    let question = resolve_question(data, question_id)
        .ok_or_else(|| AppError::bad_request(format!("unknown question '{question_id}'")))?;
    if !value.matches(question.question_type) {
        return Err(AppError::bad_request(format!(
            "value does not match question type of '{question_id}'"
        )));
    }

    let index = match data.entries.iter().position(|entry| entry.date == date) {
        Some(index) => index,
        None => {
            data.entries.push(DayEntry {
                date,
                answers: Vec::new(),
                active_questions: Some(data.user_questions.len()),
            });
            data.entries.len() - 1
        }
    };
    let entry = &mut data.entries[index];

    let answer = Answer {
        question_id: question_id.to_string(),
        value,
        timestamp: Utc::now(),
    };
    match entry
        .answers
        .iter_mut()
        .find(|existing| existing.question_id == question_id)
    {
        Some(existing) => *existing = answer,
        None => entry.answers.push(answer),
    }
    Ok(())
}

/// The answer ledger: every recorded value for one question, ordered by date.
pub fn answers_for_question(data: &AppData, question_id: &str) -> Vec<(NaiveDate, AnswerValue)> {
    let mut series: Vec<(NaiveDate, AnswerValue)> = data
        .entries
        .iter()
        .filter_map(|entry| {
            entry
                .answers
                .iter()
                .find(|answer| answer.question_id == question_id)
                .map(|answer| (entry.date, answer.value.clone()))
        })
        .collect();
    series.sort_by_key(|(date, _)| *date);
    series
}

pub fn resolve_question(data: &AppData, question_id: &str) -> Option<Question> {
    catalog::find_predefined(question_id).or_else(|| {
        data.custom_questions
            .iter()
            .find(|question| question.id == question_id)
            .cloned()
    })
}

pub fn all_questions(data: &AppData) -> Vec<Question> {
    let mut questions = catalog::predefined_questions();
    questions.extend(data.custom_questions.iter().cloned());
    questions
}

/// Active questions in user order. Entries whose question no longer exists
/// are dropped here rather than surfaced as errors.
pub fn active_questions(data: &AppData) -> Vec<(Question, UserQuestion)> {
    data.user_questions
        .iter()
        .filter_map(|user_question| {
            resolve_question(data, &user_question.question_id)
                .map(|question| (question, user_question.clone()))
        })
        .collect()
}

pub fn unanswered_questions(data: &AppData, date: NaiveDate) -> Vec<Question> {
    let answered: Vec<&str> = day_entry(data, date)
        .map(|entry| {
            entry
                .answers
                .iter()
                .map(|answer| answer.question_id.as_str())
                .collect()
        })
        .unwrap_or_default();
    active_questions(data)
        .into_iter()
        .map(|(question, _)| question)
        .filter(|question| !answered.contains(&question.id.as_str()))
        .collect()
}

pub fn total_check_ins(data: &AppData) -> usize {
    data.entries.len()
}

pub fn add_user_question(data: &mut AppData, question_id: &str) {
    if data
        .user_questions
        .iter()
        .any(|existing| existing.question_id == question_id)
    {
        return;
    }
    data.user_questions.push(UserQuestion {
        question_id: question_id.to_string(),
        added_at: Utc::now(),
        chart_type: ChartType::default(),
    });
}

pub fn remove_user_question(data: &mut AppData, question_id: &str) {
    data.user_questions
        .retain(|existing| existing.question_id != question_id);
}

pub fn reorder_user_questions(data: &mut AppData, from: usize, to: usize) -> Result<(), AppError> {
    let len = data.user_questions.len();
    if from >= len || to >= len {
        return Err(AppError::bad_request("reorder index out of range"));
    }
    let moved = data.user_questions.remove(from);
    data.user_questions.insert(to, moved);
    Ok(())
}

pub fn set_chart_type(
    data: &mut AppData,
    question_id: &str,
    chart_type: ChartType,
) -> Result<(), AppError> {
    let user_question = data
        .user_questions
        .iter_mut()
        .find(|existing| existing.question_id == question_id)
        .ok_or_else(|| AppError::bad_request(format!("'{question_id}' is not active")))?;
    user_question.chart_type = chart_type;
    Ok(())
}

pub fn add_custom_question(data: &mut AppData, mut question: Question) -> Question {
    question.id = format!("custom-{}", Utc::now().timestamp_millis());
    question.is_custom = true;
    data.custom_questions.push(question.clone());
    question
}

/// Only custom questions are editable; the predefined catalog is fixed.
pub fn update_custom_question(
    data: &mut AppData,
    question_id: &str,
    apply: impl FnOnce(&mut Question),
) -> Result<Question, AppError> {
    if catalog::find_predefined(question_id).is_some() {
        return Err(AppError::bad_request("predefined questions cannot be edited"));
    }
    let question = data
        .custom_questions
        .iter_mut()
        .find(|existing| existing.id == question_id)
        .ok_or_else(|| AppError::not_found(format!("no custom question '{question_id}'")))?;
    apply(question);
    Ok(question.clone())
}

/// Removing a custom question also prunes it from the active list. Recorded
/// answers stay; they become dangling and are filtered at read time.
pub fn remove_custom_question(data: &mut AppData, question_id: &str) -> Result<(), AppError> {
    let before = data.custom_questions.len();
    data.custom_questions
        .retain(|existing| existing.id != question_id);
    if data.custom_questions.len() == before {
        return Err(AppError::not_found(format!("no custom question '{question_id}'")));
    }
    remove_user_question(data, question_id);
    Ok(())
}

pub fn apply_template(data: &mut AppData, template_id: &str) -> Result<(), AppError> {
    let template = catalog::find_template(template_id)
        .ok_or_else(|| AppError::not_found(format!("no template '{template_id}'")))?;
    for question_id in template.question_ids {
        add_user_question(data, question_id);
    }
    Ok(())
}
