//! Built-in question catalog and routine templates. Predefined questions are
//! immutable; user-created questions live in the store instead.

use crate::models::{Question, QuestionType, RoutineTemplate};

pub const CATEGORIES: &[&str] = &[
    "health",
    "fitness",
    "nutrition",
    "mindfulness",
    "productivity",
    "social",
    "learning",
    "creativity",
    "finance",
    "selfcare",
    "reflection",
];

struct CatalogEntry {
    id: &'static str,
    text: &'static str,
    kind: QuestionType,
    category: &'static str,
    emoji: &'static str,
    scale: Option<(i32, i32)>,
}

const SCALE: Option<(i32, i32)> = Some((1, 10));

const PREDEFINED: &[CatalogEntry] = &[
    CatalogEntry { id: "pre-1", text: "Did you drink enough water today?", kind: QuestionType::YesNo, category: "health", emoji: "💧", scale: None },
    CatalogEntry { id: "pre-2", text: "How many hours did you sleep?", kind: QuestionType::Scale, category: "health", emoji: "😴", scale: Some((0, 12)) },
    CatalogEntry { id: "pre-3", text: "How well did you sleep?", kind: QuestionType::Scale, category: "health", emoji: "🛏️", scale: SCALE },
    CatalogEntry { id: "pre-4", text: "Did you take medication/vitamins?", kind: QuestionType::YesNo, category: "health", emoji: "💊", scale: None },
    CatalogEntry { id: "pre-5", text: "How do you feel physically?", kind: QuestionType::Scale, category: "health", emoji: "🩺", scale: SCALE },
    CatalogEntry { id: "pre-6", text: "Did you exercise today?", kind: QuestionType::YesNo, category: "fitness", emoji: "🏋️", scale: None },
    CatalogEntry { id: "pre-7", text: "How intense was your workout?", kind: QuestionType::Scale, category: "fitness", emoji: "🔥", scale: SCALE },
    CatalogEntry { id: "pre-8", text: "Did you move enough today?", kind: QuestionType::YesNo, category: "fitness", emoji: "🚶", scale: None },
    CatalogEntry { id: "pre-9", text: "How many steps did you take (estimate 1-10)?", kind: QuestionType::Scale, category: "fitness", emoji: "👟", scale: SCALE },
    CatalogEntry { id: "pre-10", text: "Did you stretch or do yoga?", kind: QuestionType::YesNo, category: "fitness", emoji: "🧘", scale: None },
    CatalogEntry { id: "pre-11", text: "Did you eat healthy today?", kind: QuestionType::YesNo, category: "nutrition", emoji: "🥗", scale: None },
    CatalogEntry { id: "pre-12", text: "How satisfied are you with your diet today?", kind: QuestionType::Scale, category: "nutrition", emoji: "🍽️", scale: SCALE },
    CatalogEntry { id: "pre-13", text: "Did you eat fruits or vegetables?", kind: QuestionType::YesNo, category: "nutrition", emoji: "🍎", scale: None },
    CatalogEntry { id: "pre-14", text: "Did you avoid sugar?", kind: QuestionType::YesNo, category: "nutrition", emoji: "🍬", scale: None },
    CatalogEntry { id: "pre-15", text: "What special food did you eat today?", kind: QuestionType::FreeText, category: "nutrition", emoji: "🍲", scale: None },
    CatalogEntry { id: "pre-16", text: "How is your mood?", kind: QuestionType::Scale, category: "mindfulness", emoji: "🙂", scale: SCALE },
    CatalogEntry { id: "pre-17", text: "Did you meditate today?", kind: QuestionType::YesNo, category: "mindfulness", emoji: "🧘", scale: None },
    CatalogEntry { id: "pre-18", text: "How stressed do you feel?", kind: QuestionType::Scale, category: "mindfulness", emoji: "😰", scale: SCALE },
    CatalogEntry { id: "pre-19", text: "What are you grateful for today?", kind: QuestionType::FreeText, category: "mindfulness", emoji: "🙏", scale: None },
    CatalogEntry { id: "pre-20", text: "Did you take a break today?", kind: QuestionType::YesNo, category: "mindfulness", emoji: "☕", scale: None },
    CatalogEntry { id: "pre-21", text: "How was your energy today?", kind: QuestionType::Scale, category: "mindfulness", emoji: "⚡", scale: SCALE },
    CatalogEntry { id: "pre-22", text: "Did you complete your most important task?", kind: QuestionType::YesNo, category: "productivity", emoji: "✅", scale: None },
    CatalogEntry { id: "pre-23", text: "How productive were you today?", kind: QuestionType::Scale, category: "productivity", emoji: "📈", scale: SCALE },
    CatalogEntry { id: "pre-24", text: "Did you procrastinate today?", kind: QuestionType::YesNo, category: "productivity", emoji: "⏳", scale: None },
    CatalogEntry { id: "pre-25", text: "What was your biggest achievement today?", kind: QuestionType::FreeText, category: "productivity", emoji: "🏆", scale: None },
    CatalogEntry { id: "pre-26", text: "How focused were you?", kind: QuestionType::Scale, category: "productivity", emoji: "🎯", scale: SCALE },
    CatalogEntry { id: "pre-27", text: "Did you meet someone today?", kind: QuestionType::YesNo, category: "social", emoji: "👥", scale: None },
    CatalogEntry { id: "pre-28", text: "How satisfied are you with your social contacts?", kind: QuestionType::Scale, category: "social", emoji: "💬", scale: SCALE },
    CatalogEntry { id: "pre-29", text: "Did you help someone?", kind: QuestionType::YesNo, category: "social", emoji: "🤝", scale: None },
    CatalogEntry { id: "pre-30", text: "Did you spend time with family?", kind: QuestionType::YesNo, category: "social", emoji: "👨‍👩‍👧", scale: None },
    CatalogEntry { id: "pre-31", text: "Did you learn something new today?", kind: QuestionType::YesNo, category: "learning", emoji: "💡", scale: None },
    CatalogEntry { id: "pre-32", text: "Did you read today?", kind: QuestionType::YesNo, category: "learning", emoji: "📚", scale: None },
    CatalogEntry { id: "pre-33", text: "How much did you learn today?", kind: QuestionType::Scale, category: "learning", emoji: "🧠", scale: SCALE },
    CatalogEntry { id: "pre-34", text: "What did you learn today?", kind: QuestionType::FreeText, category: "learning", emoji: "✍️", scale: None },
    CatalogEntry { id: "pre-35", text: "Did you do something creative today?", kind: QuestionType::YesNo, category: "creativity", emoji: "🎨", scale: None },
    CatalogEntry { id: "pre-36", text: "How creative do you feel today?", kind: QuestionType::Scale, category: "creativity", emoji: "🌈", scale: SCALE },
    CatalogEntry { id: "pre-37", text: "What creative project are you working on?", kind: QuestionType::FreeText, category: "creativity", emoji: "🛠️", scale: None },
    CatalogEntry { id: "pre-38", text: "Did you spend money unnecessarily today?", kind: QuestionType::YesNo, category: "finance", emoji: "💸", scale: None },
    CatalogEntry { id: "pre-39", text: "How satisfied are you with your spending?", kind: QuestionType::Scale, category: "finance", emoji: "💰", scale: SCALE },
    CatalogEntry { id: "pre-40", text: "What did you spend money on today?", kind: QuestionType::FreeText, category: "finance", emoji: "🧾", scale: None },
    CatalogEntry { id: "pre-41", text: "Did you do something nice for yourself today?", kind: QuestionType::YesNo, category: "selfcare", emoji: "🌸", scale: None },
    CatalogEntry { id: "pre-42", text: "How satisfied are you with yourself?", kind: QuestionType::Scale, category: "selfcare", emoji: "💖", scale: SCALE },
    CatalogEntry { id: "pre-43", text: "Did you get fresh air today?", kind: QuestionType::YesNo, category: "selfcare", emoji: "🌳", scale: None },
    CatalogEntry { id: "pre-44", text: "Did you reduce screen time today?", kind: QuestionType::YesNo, category: "selfcare", emoji: "📵", scale: None },
    CatalogEntry { id: "pre-45", text: "What made you happy today?", kind: QuestionType::FreeText, category: "reflection", emoji: "😊", scale: None },
    CatalogEntry { id: "pre-46", text: "What do you want to achieve tomorrow?", kind: QuestionType::FreeText, category: "reflection", emoji: "🌅", scale: None },
    CatalogEntry { id: "pre-47", text: "How was your day?", kind: QuestionType::Scale, category: "reflection", emoji: "📅", scale: SCALE },
];

const TEMPLATES: &[RoutineTemplate] = &[
    RoutineTemplate {
        id: "fitness",
        name: "Fitness",
        description: "Track workouts, movement and how your body feels.",
        question_ids: &["pre-6", "pre-7", "pre-8", "pre-9", "pre-10", "pre-5"],
    },
    RoutineTemplate {
        id: "study",
        name: "Study",
        description: "Learning progress, focus and your most important task.",
        question_ids: &["pre-31", "pre-32", "pre-33", "pre-34", "pre-22", "pre-26"],
    },
    RoutineTemplate {
        id: "mindset",
        name: "Mindset",
        description: "Mood, stress, gratitude and daily energy.",
        question_ids: &["pre-16", "pre-17", "pre-18", "pre-19", "pre-20", "pre-21"],
    },
    RoutineTemplate {
        id: "sleep",
        name: "Sleep",
        description: "Sleep hours and quality plus evening wind-down habits.",
        question_ids: &["pre-2", "pre-3", "pre-44", "pre-20", "pre-41"],
    },
];

fn to_question(entry: &CatalogEntry) -> Question {
    Question {
        id: entry.id.to_string(),
        text: entry.text.to_string(),
        question_type: entry.kind,
        category: entry.category.to_string(),
        scale_min: entry.scale.map(|(min, _)| min),
        scale_max: entry.scale.map(|(_, max)| max),
        emoji: Some(entry.emoji.to_string()),
        is_custom: false,
    }
}

pub fn predefined_questions() -> Vec<Question> {
    PREDEFINED.iter().map(to_question).collect()
}

pub fn find_predefined(id: &str) -> Option<Question> {
    PREDEFINED.iter().find(|entry| entry.id == id).map(to_question)
}

pub fn templates() -> &'static [RoutineTemplate] {
    TEMPLATES
}

pub fn find_template(id: &str) -> Option<&'static RoutineTemplate> {
    TEMPLATES.iter().find(|template| template.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_ids_are_unique() {
        let mut ids: Vec<_> = PREDEFINED.iter().map(|entry| entry.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), PREDEFINED.len());
    }

    #[test]
    fn template_questions_exist_in_catalog() {
        for template in templates() {
            for id in template.question_ids {
                assert!(find_predefined(id).is_some(), "{id} missing from catalog");
            }
        }
    }

    #[test]
    fn scale_questions_carry_bounds() {
        for question in predefined_questions() {
            if question.question_type == QuestionType::Scale {
                let (min, max) = question.scale_bounds();
                assert!(min < max, "{} has degenerate bounds", question.id);
            }
        }
    }
}
