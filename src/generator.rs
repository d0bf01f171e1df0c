use crate::models::{Question, QuestionMode, QuestionType, Word};
use rand::Rng;
use rand::seq::SliceRandom;

pub const MIN_LENGTH: usize = 1;
pub const MAX_LENGTH: usize = 200;
pub const MIN_CHOICES: usize = 2;
/// Highest choice count the number keys can reach (`1`-`9`, `0`).
pub const MAX_CHOICES: usize = 10;

fn resolve_mode<R: Rng>(question_type: QuestionType, rng: &mut R) -> QuestionMode {
    match question_type {
        QuestionType::KanaToRomaji => QuestionMode::KanaToRomaji,
        QuestionType::RomajiToKana => QuestionMode::RomajiToKana,
        QuestionType::Hybrid => {
            if rng.gen_bool(0.5) {
                QuestionMode::KanaToRomaji
            } else {
                QuestionMode::RomajiToKana
            }
        }
    }
}

/// Builds a multiple-choice quiz from `pool`.
///
/// Returns `length` questions clamped to `1..=MAX_LENGTH`, or none for an
/// empty pool. Each question offers `choice_count` choices, clamped to
/// `2..=MAX_CHOICES`, containing the correct word once. When the pool is too
/// small for distinct distractors the remaining slots are filled with repeats
/// of other words; a pool made only of the correct word produces a
/// single-choice question.
pub fn generate_questions<R: Rng>(
    pool: &[Word],
    question_type: QuestionType,
    length: usize,
    choice_count: usize,
    rng: &mut R,
) -> Vec<Question> {
    if pool.is_empty() {
        return Vec::new();
    }

    let length = length.clamp(MIN_LENGTH, MAX_LENGTH);
    let choice_count = choice_count.clamp(MIN_CHOICES, MAX_CHOICES);

    (0..length)
        .map(|index| build_question(index, pool, question_type, choice_count, rng))
        .collect()
}

fn build_question<R: Rng>(
    index: usize,
    pool: &[Word],
    question_type: QuestionType,
    choice_count: usize,
    rng: &mut R,
) -> Question {
    let mode = resolve_mode(question_type, rng);
    let correct = pool[rng.gen_range(0..pool.len())].clone();

    let mut others: Vec<&Word> = pool.iter().filter(|word| **word != correct).collect();
    others.shuffle(rng);

    let mut choices = Vec::with_capacity(choice_count);
    choices.push(correct.clone());
    choices.extend(others.iter().take(choice_count - 1).map(|word| (*word).clone()));

    // Small pool: repeat distractors, never the answer.
    if !others.is_empty() {
        while choices.len() < choice_count {
            let filler = others[rng.gen_range(0..others.len())];
            choices.push(filler.clone());
        }
    }

    choices.shuffle(rng);
    let correct_index = choices
        .iter()
        .position(|word| *word == correct)
        .unwrap_or(0);

    Question {
        id: format!("{}-{}-{}", index, correct.kana, mode.as_str()),
        mode,
        prompt: mode.prompt_for(&correct).to_string(),
        choices,
        correct_index,
    }
}
