//! Completion rates and the coarse trend heuristic. These mirror the exact
//! arithmetic of the statistics screen: fixed 30-day window, Monday-based
//! weeks, and a delta-sum trend test with threshold 2 over the last 5 answers.

use crate::models::{
    AnswerValue, AppData, QuestionType, TrendDirection, TrendInsight, WeeklyInsight, WordCount,
};
use crate::store;
use chrono::{Datelike, Duration, NaiveDate};
use std::collections::{BTreeSet, HashMap};

const TREND_WINDOW: usize = 5;
const TREND_THRESHOLD: f64 = 2.0;
const MIN_TREND_ANSWERS: usize = 3;
const NAME_TRUNCATE: usize = 30;

/// Share of the inclusive 30-day window ending `today` that has an entry,
/// as a rounded percentage.
pub fn thirty_day_rate_at(today: NaiveDate, data: &AppData) -> u8 {
    let dates = entry_dates(data);
    let count = (0..30)
        .filter(|offset| dates.contains(&(today - Duration::days(*offset))))
        .count();
    percentage(count as f64, 30.0)
}

/// Check-ins made since this week's Monday, against the days elapsed so far
/// (Monday counts 1, Sunday 7).
pub fn weekly_insight_at(today: NaiveDate, data: &AppData) -> WeeklyInsight {
    let dates = entry_dates(data);
    let elapsed = today.weekday().num_days_from_monday() + 1;
    let monday = today - Duration::days(i64::from(elapsed) - 1);
    let done = (0..i64::from(elapsed))
        .filter(|offset| dates.contains(&(monday + Duration::days(*offset))))
        .count() as u32;
    WeeklyInsight {
        done,
        total: elapsed,
    }
}

/// All-time completion rate: entries divided by days since the first entry,
/// inclusive. 0 with no history.
pub fn completion_rate_at(today: NaiveDate, data: &AppData) -> u8 {
    let dates = entry_dates(data);
    let Some(first) = dates.iter().next().copied() else {
        return 0;
    };
    let days = ((today - first).num_days() + 1).max(1);
    percentage(dates.len() as f64, days as f64)
}

/// Per-question trend detection over the answer ledger. For every active
/// non-freetext question with at least 3 recorded answers, the last 5 values
/// (booleans coerced 1/0) are reduced to a sum of consecutive deltas; a sum
/// of magnitude 2 or more emits an insight. This is a heuristic, not a
/// statistical test; the threshold and window are behavioral contract.
pub fn trend_insights(data: &AppData) -> Vec<TrendInsight> {
    let mut insights = Vec::new();
    for (question, _) in store::active_questions(data) {
        if question.question_type == QuestionType::FreeText {
            continue;
        }
        let series = store::answers_for_question(data, &question.id);
        if series.len() < MIN_TREND_ANSWERS {
            continue;
        }

        let window_start = series.len().saturating_sub(TREND_WINDOW);
        let values: Vec<f64> = series[window_start..]
            .iter()
            .filter_map(|(_, value)| value.as_numeric())
            .collect();
        if values.len() < 2 {
            continue;
        }

        let delta_sum: f64 = values.windows(2).map(|pair| pair[1] - pair[0]).sum();
        if delta_sum.abs() < TREND_THRESHOLD {
            continue;
        }

        let name: String = question.text.chars().take(NAME_TRUNCATE).collect();
        let (direction, verb) = if delta_sum > 0.0 {
            (TrendDirection::Improving, "rising")
        } else {
            (TrendDirection::Declining, "declining")
        };
        insights.push(TrendInsight {
            text: format!("{name} is {verb} for {} days", values.len()),
            direction,
        });
    }
    insights
}

/// Word frequency over free-text answers: lowercase whitespace tokens longer
/// than two characters, ten most frequent first.
pub fn top_words(values: &[AnswerValue]) -> Vec<WordCount> {
    let mut counts: HashMap<String, u32> = HashMap::new();
    for value in values {
        let AnswerValue::FreeText(text) = value else {
            continue;
        };
        for word in text.to_lowercase().split_whitespace() {
            if word.chars().count() > 2 {
                *counts.entry(word.to_string()).or_default() += 1;
            }
        }
    }
    let mut words: Vec<WordCount> = counts
        .into_iter()
        .map(|(word, count)| WordCount { word, count })
        .collect();
    words.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.word.cmp(&b.word)));
    words.truncate(10);
    words
}

fn entry_dates(data: &AppData) -> BTreeSet<NaiveDate> {
    data.entries.iter().map(|entry| entry.date).collect()
}

fn percentage(count: f64, total: f64) -> u8 {
    (count / total * 100.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DayEntry;
    use crate::store::{add_user_question, save_answer};

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn data_with_dates(dates: &[NaiveDate]) -> AppData {
        let mut data = AppData::default();
        for date in dates {
            data.entries.push(DayEntry {
                date: *date,
                answers: Vec::new(),
                active_questions: None,
            });
        }
        data
    }

    fn scale_history(question_id: &str, start: NaiveDate, values: &[f64]) -> AppData {
        let mut data = AppData::default();
        add_user_question(&mut data, question_id);
        for (offset, value) in values.iter().enumerate() {
            save_answer(
                &mut data,
                start + Duration::days(offset as i64),
                question_id,
                AnswerValue::Scale(*value),
            )
            .unwrap();
        }
        data
    }

    #[test]
    fn thirty_day_rate_full_window_is_100() {
        let today = date("2026-08-30");
        let dates: Vec<NaiveDate> = (0..30).map(|i| today - Duration::days(i)).collect();
        let data = data_with_dates(&dates);
        assert_eq!(thirty_day_rate_at(today, &data), 100);
    }

    #[test]
    fn thirty_day_rate_empty_is_0() {
        assert_eq!(thirty_day_rate_at(date("2026-08-30"), &AppData::default()), 0);
    }

    #[test]
    fn thirty_day_rate_rounds() {
        let today = date("2026-08-30");
        let data = data_with_dates(&[today, today - Duration::days(1)]);
        // 2/30 = 6.66..% rounds to 7.
        assert_eq!(thirty_day_rate_at(today, &data), 7);
    }

    #[test]
    fn weekly_insight_counts_elapsed_days() {
        // 2026-08-26 is a Wednesday: three days elapsed.
        let today = date("2026-08-26");
        let data = data_with_dates(&[today, date("2026-08-24")]);
        let insight = weekly_insight_at(today, &data);
        assert_eq!(insight.done, 2);
        assert_eq!(insight.total, 3);
    }

    #[test]
    fn weekly_insight_sunday_counts_seven() {
        // 2026-08-30 is a Sunday.
        let insight = weekly_insight_at(date("2026-08-30"), &AppData::default());
        assert_eq!(insight.total, 7);
        assert_eq!(insight.done, 0);
    }

    #[test]
    fn completion_rate_all_time() {
        let today = date("2026-08-30");
        // First entry 9 days ago (a 10-day span), 5 entries: 50%.
        let dates: Vec<NaiveDate> = [9, 7, 5, 3, 1]
            .iter()
            .map(|i| today - Duration::days(*i))
            .collect();
        let data = data_with_dates(&dates);
        assert_eq!(completion_rate_at(today, &data), 50);
    }

    #[test]
    fn completion_rate_single_day_is_100() {
        let today = date("2026-08-30");
        let data = data_with_dates(&[today]);
        assert_eq!(completion_rate_at(today, &data), 100);
    }

    #[test]
    fn rising_values_emit_improving_insight() {
        let data = scale_history("pre-16", date("2026-08-20"), &[2.0, 3.0, 5.0, 6.0, 7.0]);
        let insights = trend_insights(&data);
        assert_eq!(insights.len(), 1);
        assert_eq!(insights[0].direction, TrendDirection::Improving);
        assert!(insights[0].text.contains("5 days"));
    }

    #[test]
    fn falling_values_emit_declining_insight() {
        let data = scale_history("pre-16", date("2026-08-20"), &[7.0, 6.0, 5.0, 3.0, 2.0]);
        let insights = trend_insights(&data);
        assert_eq!(insights.len(), 1);
        assert_eq!(insights[0].direction, TrendDirection::Declining);
    }

    #[test]
    fn flat_values_emit_nothing() {
        let data = scale_history("pre-16", date("2026-08-20"), &[5.0, 5.0, 6.0, 5.0, 5.0]);
        assert!(trend_insights(&data).is_empty());
    }

    #[test]
    fn fewer_than_three_answers_skipped_silently() {
        let data = scale_history("pre-16", date("2026-08-20"), &[1.0, 9.0]);
        assert!(trend_insights(&data).is_empty());
    }

    #[test]
    fn only_last_five_answers_are_considered() {
        // Early rise followed by a flat tail: no insight.
        let data = scale_history(
            "pre-16",
            date("2026-08-20"),
            &[1.0, 5.0, 9.0, 5.0, 5.0, 5.0, 5.0, 5.0],
        );
        assert!(trend_insights(&data).is_empty());
    }

    #[test]
    fn yesno_values_coerce_to_binary() {
        let mut data = AppData::default();
        add_user_question(&mut data, "pre-6");
        let start = date("2026-08-20");
        for (offset, value) in [false, false, true, true, true].iter().enumerate() {
            save_answer(
                &mut data,
                start + Duration::days(offset as i64),
                "pre-6",
                AnswerValue::YesNo(*value),
            )
            .unwrap();
        }
        // Deltas 0, 1, 0, 0: below threshold.
        assert!(trend_insights(&data).is_empty());

        save_answer(&mut data, start + Duration::days(5), "pre-6", AnswerValue::YesNo(false))
            .unwrap();
        save_answer(&mut data, start + Duration::days(6), "pre-6", AnswerValue::YesNo(true))
            .unwrap();
        // Window now true,true,true,false,true: delta sum 0, still below.
        assert!(trend_insights(&data).is_empty());
    }

    #[test]
    fn freetext_questions_are_excluded_from_trends() {
        let mut data = AppData::default();
        add_user_question(&mut data, "pre-19");
        let start = date("2026-08-20");
        for offset in 0..5 {
            save_answer(
                &mut data,
                start + Duration::days(offset),
                "pre-19",
                AnswerValue::FreeText("family".into()),
            )
            .unwrap();
        }
        assert!(trend_insights(&data).is_empty());
    }

    #[test]
    fn insight_name_is_truncated_to_30_chars() {
        // pre-9 has a 44-char text.
        let data = scale_history("pre-9", date("2026-08-20"), &[1.0, 2.0, 4.0]);
        let insights = trend_insights(&data);
        assert_eq!(insights.len(), 1);
        let name = insights[0].text.split(" is ").next().unwrap();
        assert_eq!(name.chars().count(), 30);
    }

    #[test]
    fn top_words_filters_short_tokens_and_ranks_by_count() {
        let values = vec![
            AnswerValue::FreeText("Grateful for my family and sun".into()),
            AnswerValue::FreeText("family dinner in the sun".into()),
            AnswerValue::FreeText("family".into()),
        ];
        let words = top_words(&values);
        assert_eq!(words[0].word, "family");
        assert_eq!(words[0].count, 3);
        assert!(words.iter().all(|w| w.word.chars().count() > 2));
        assert!(words.iter().any(|w| w.word == "sun" && w.count == 2));
    }
}
