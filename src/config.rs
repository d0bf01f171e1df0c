use crate::models::QuestionType;
use crate::vocab::all_row_ids;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

pub const DRILL_LENGTHS: [usize; 7] = [5, 10, 15, 20, 30, 40, 50];
pub const CHOICE_COUNTS: [usize; 5] = [2, 4, 6, 8, 10];

pub const DEFAULT_LENGTH: usize = 10;
pub const DEFAULT_CHOICES: usize = 4;

/// Parameters handed from the setup screen to a quiz session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizConfig {
    pub rows: Vec<String>,
    #[serde(rename = "type")]
    pub question_type: QuestionType,
    pub length: usize,
    pub choices: usize,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            rows: all_row_ids(),
            question_type: QuestionType::default(),
            length: DEFAULT_LENGTH,
            choices: DEFAULT_CHOICES,
        }
    }
}

impl QuizConfig {
    /// Parses `rows=a,ka&type=hybrid&length=10&choices=4`.
    ///
    /// Missing or malformed values fall back to the defaults; a missing
    /// `rows` parameter means no explicit selection.
    pub fn from_query(query: &str) -> Self {
        let mut config = QuizConfig {
            rows: Vec::new(),
            ..QuizConfig::default()
        };

        let query = query.trim().trim_start_matches('?');
        for pair in query.split('&').filter(|p| !p.is_empty()) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            let value = decode_component(value);
            match decode_component(key).as_str() {
                "rows" => config.rows = parse_rows(&value),
                "type" => {
                    config.question_type = QuestionType::parse(&value).unwrap_or_default();
                }
                "length" => config.length = parse_count(&value, DEFAULT_LENGTH),
                "choices" => config.choices = parse_count(&value, DEFAULT_CHOICES),
                _ => {}
            }
        }

        config
    }

    pub fn to_query(&self) -> String {
        format!(
            "rows={}&type={}&length={}&choices={}",
            self.rows.join(","),
            self.question_type,
            self.length,
            self.choices
        )
    }

    /// Key identifying a quiz run; changes with `version` on every retry.
    pub fn quiz_key(&self, version: u32) -> String {
        let mut rows = self.rows.clone();
        rows.sort();
        format!(
            "{}::{}::{}::{}::{}",
            rows.join("-"),
            self.question_type,
            self.length,
            self.choices,
            version
        )
    }
}

pub fn parse_rows(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|row| !row.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_count(value: &str, default: usize) -> usize {
    value.trim().parse::<usize>().unwrap_or(default)
}

/// Decodes one query component; `+` is a space and malformed escapes are kept
/// as written.
fn decode_component(value: &str) -> String {
    let value = value.replace('+', " ");
    urlencoding::decode(&value)
        .map(Cow::into_owned)
        .unwrap_or(value)
}
