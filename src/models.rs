use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Word {
    pub kana: String,
    pub romaji: String,
}

impl Word {
    pub fn new(kana: &str, romaji: &str) -> Self {
        Self {
            kana: kana.to_string(),
            romaji: romaji.to_string(),
        }
    }
}

/// Direction a single question is asked in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuestionMode {
    KanaToRomaji,
    RomajiToKana,
}

impl QuestionMode {
    pub fn label(self) -> &'static str {
        match self {
            QuestionMode::KanaToRomaji => "Kana → Romaji",
            QuestionMode::RomajiToKana => "Romaji → Kana",
        }
    }

    /// Text shown as the prompt for `word`.
    pub fn prompt_for(self, word: &Word) -> &str {
        match self {
            QuestionMode::KanaToRomaji => &word.kana,
            QuestionMode::RomajiToKana => &word.romaji,
        }
    }

    /// Text shown on a choice button for `word`.
    pub fn answer_for(self, word: &Word) -> &str {
        match self {
            QuestionMode::KanaToRomaji => &word.romaji,
            QuestionMode::RomajiToKana => &word.kana,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            QuestionMode::KanaToRomaji => "kana-to-romaji",
            QuestionMode::RomajiToKana => "romaji-to-kana",
        }
    }
}

/// Question type picked on the setup screen. `Hybrid` is resolved to a
/// concrete [`QuestionMode`] for every question separately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum QuestionType {
    #[default]
    KanaToRomaji,
    RomajiToKana,
    Hybrid,
}

impl QuestionType {
    pub const ALL: [QuestionType; 3] = [
        QuestionType::KanaToRomaji,
        QuestionType::RomajiToKana,
        QuestionType::Hybrid,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            QuestionType::KanaToRomaji => "kana-to-romaji",
            QuestionType::RomajiToKana => "romaji-to-kana",
            QuestionType::Hybrid => "hybrid",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "kana-to-romaji" => Some(QuestionType::KanaToRomaji),
            "romaji-to-kana" => Some(QuestionType::RomajiToKana),
            "hybrid" => Some(QuestionType::Hybrid),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            QuestionType::KanaToRomaji => "Kana → Romaji",
            QuestionType::RomajiToKana => "Romaji → Kana",
            QuestionType::Hybrid => "Hybrid",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            QuestionType::KanaToRomaji => "See kana, answer with romaji.",
            QuestionType::RomajiToKana => "See romaji, answer with kana.",
            QuestionType::Hybrid => "Mix of both directions.",
        }
    }
}

impl fmt::Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Question {
    pub id: String,
    pub mode: QuestionMode,
    pub prompt: String,
    pub choices: Vec<Word>,
    pub correct_index: usize,
}

impl Question {
    pub fn correct_word(&self) -> &Word {
        &self.choices[self.correct_index]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Menu,
    Chart,
    Setup,
    Quiz,
    QuizQuitConfirm,
    Summary,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_type_parse() {
        assert_eq!(QuestionType::parse("hybrid"), Some(QuestionType::Hybrid));
        assert_eq!(
            QuestionType::parse(" romaji-to-kana "),
            Some(QuestionType::RomajiToKana)
        );
        assert_eq!(QuestionType::parse("katakana"), None);
        for ty in QuestionType::ALL {
            assert_eq!(QuestionType::parse(ty.as_str()), Some(ty));
        }
    }

    #[test]
    fn test_mode_prompt_and_answer() {
        let word = Word::new("ねこ", "neko");
        assert_eq!(QuestionMode::KanaToRomaji.prompt_for(&word), "ねこ");
        assert_eq!(QuestionMode::KanaToRomaji.answer_for(&word), "neko");
        assert_eq!(QuestionMode::RomajiToKana.prompt_for(&word), "neko");
        assert_eq!(QuestionMode::RomajiToKana.answer_for(&word), "ねこ");
    }

    #[test]
    fn test_word_value_identity() {
        assert_eq!(Word::new("あめ", "ame"), Word::new("あめ", "ame"));
        assert_ne!(Word::new("あめ", "ame"), Word::new("あめ", "ama"));
    }

    #[test]
    fn test_mode_serializes_kebab_case() {
        let json = serde_json::to_string(&QuestionMode::RomajiToKana).unwrap();
        assert_eq!(json, "\"romaji-to-kana\"");
    }
}
