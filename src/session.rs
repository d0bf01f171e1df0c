use crate::config::QuizConfig;
use crate::generator::generate_questions;
use crate::logger;
use crate::models::{AppState, Question};
use crate::utils::choice_columns;
use crate::vocab::word_pool;
use crossterm::event::{KeyCode, KeyEvent};
use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Answering,
    Answered,
    Finished,
}

/// One run through a generated question set.
#[derive(Debug, Clone)]
pub struct QuizSession {
    pub config: QuizConfig,
    pub questions: Vec<Question>,
    pub current_index: usize,
    pub score: usize,
    pub selected_choice: Option<usize>,
    pub answered: bool,
    pub finished: bool,
    /// Choice under the keyboard cursor; not part of the answer state.
    pub highlighted_choice: usize,
    /// Bumped on every retry.
    pub version: u32,
}

impl QuizSession {
    pub fn new<R: Rng>(config: QuizConfig, rng: &mut R) -> Self {
        let pool = word_pool(&config.rows);
        let questions = generate_questions(
            &pool,
            config.question_type,
            config.length,
            config.choices,
            rng,
        );
        Self::with_questions(config, questions)
    }

    pub fn with_questions(config: QuizConfig, questions: Vec<Question>) -> Self {
        Self {
            config,
            questions,
            current_index: 0,
            score: 0,
            selected_choice: None,
            answered: false,
            finished: false,
            highlighted_choice: 0,
            version: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn total(&self) -> usize {
        self.questions.len()
    }

    pub fn phase(&self) -> SessionPhase {
        if self.finished || self.questions.is_empty() {
            SessionPhase::Finished
        } else if self.answered {
            SessionPhase::Answered
        } else {
            SessionPhase::Answering
        }
    }

    pub fn current_question(&self) -> Option<&Question> {
        if self.finished {
            return None;
        }
        self.questions.get(self.current_index)
    }

    pub fn is_last_question(&self) -> bool {
        self.current_index + 1 >= self.questions.len()
    }

    /// Records an answer for the current question. Returns `false` when the
    /// choice is ignored: already answered, finished, or out of range.
    pub fn submit_choice(&mut self, index: usize) -> bool {
        if self.phase() != SessionPhase::Answering {
            return false;
        }
        let Some(question) = self.questions.get(self.current_index) else {
            return false;
        };
        if index >= question.choices.len() {
            return false;
        }

        let correct = index == question.correct_index;
        self.selected_choice = Some(index);
        self.highlighted_choice = index;
        self.answered = true;
        if correct {
            self.score += 1;
        }
        logger::log(&format!(
            "Question {} ({}): {}",
            self.current_index + 1,
            question.id,
            if correct { "correct" } else { "incorrect" }
        ));
        true
    }

    /// Moves past an answered question. Returns `false` if nothing happened.
    pub fn advance(&mut self) -> bool {
        if self.phase() != SessionPhase::Answered {
            return false;
        }
        if self.is_last_question() {
            self.finished = true;
            logger::log(&format!(
                "Quiz finished: {} / {}",
                self.score,
                self.questions.len()
            ));
        } else {
            self.current_index += 1;
            self.selected_choice = None;
            self.answered = false;
            self.highlighted_choice = 0;
        }
        true
    }

    /// Throws the run away and generates a fresh question set from the same
    /// configuration.
    pub fn retry<R: Rng>(&mut self, rng: &mut R) {
        let version = self.version + 1;
        *self = QuizSession::new(self.config.clone(), rng);
        self.version = version;
        logger::log(&format!(
            "Retry {} for {}",
            version,
            self.config.quiz_key(version)
        ));
    }

    /// Questions left, counting the current one until it has been answered.
    pub fn remaining(&self) -> usize {
        if self.finished {
            return 0;
        }
        let answered = usize::from(self.answered);
        self.questions
            .len()
            .saturating_sub(self.current_index + answered)
    }

    pub fn accuracy_percent(&self) -> u32 {
        if self.questions.is_empty() {
            return 0;
        }
        ((self.score as f64 / self.questions.len() as f64) * 100.0).round() as u32
    }

    pub fn progress_ratio(&self) -> f64 {
        if self.questions.is_empty() {
            return 0.0;
        }
        let done = if self.finished {
            self.questions.len()
        } else {
            self.current_index + usize::from(self.answered)
        };
        (done as f64 / self.questions.len() as f64).clamp(0.0, 1.0)
    }

    fn move_highlight(&mut self, key: KeyCode) {
        let Some(question) = self.current_question() else {
            return;
        };
        let count = question.choices.len();
        if count == 0 {
            return;
        }
        let columns = choice_columns(self.config.choices).min(count);
        let current = self.highlighted_choice.min(count - 1);
        self.highlighted_choice = match key {
            KeyCode::Left => current.saturating_sub(1),
            KeyCode::Right => (current + 1).min(count - 1),
            KeyCode::Up => current.saturating_sub(columns),
            KeyCode::Down => {
                if current + columns < count {
                    current + columns
                } else {
                    current
                }
            }
            _ => current,
        };
    }
}

fn digit_choice(c: char) -> Option<usize> {
    match c {
        '1'..='9' => c.to_digit(10).map(|d| d as usize - 1),
        '0' => Some(9),
        _ => None,
    }
}

pub fn handle_quiz_input(session: &mut QuizSession, key: KeyEvent, app_state: &mut AppState) {
    if session.is_empty() {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char('s')) {
            *app_state = AppState::Setup;
        }
        return;
    }

    match session.phase() {
        SessionPhase::Answering => match key.code {
            KeyCode::Esc => *app_state = AppState::QuizQuitConfirm,
            KeyCode::Left | KeyCode::Right | KeyCode::Up | KeyCode::Down => {
                session.move_highlight(key.code);
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                let index = session.highlighted_choice;
                session.submit_choice(index);
            }
            KeyCode::Char(c) => {
                if let Some(index) = digit_choice(c) {
                    session.submit_choice(index);
                }
            }
            _ => {}
        },
        SessionPhase::Answered => match key.code {
            KeyCode::Esc => *app_state = AppState::QuizQuitConfirm,
            KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('n') => {
                session.advance();
                if session.phase() == SessionPhase::Finished {
                    *app_state = AppState::Summary;
                }
            }
            _ => {}
        },
        SessionPhase::Finished => *app_state = AppState::Summary,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{QuestionMode, QuestionType, Word};
    use crossterm::event::KeyModifiers;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn question(index: usize, correct_index: usize) -> Question {
        let choices = vec![Word::new("あ", "a"), Word::new("い", "i")];
        let word = choices[correct_index].clone();
        Question {
            id: format!("{}-{}-kana-to-romaji", index, word.kana),
            mode: QuestionMode::KanaToRomaji,
            prompt: word.kana.clone(),
            choices,
            correct_index,
        }
    }

    fn create_test_session(count: usize) -> QuizSession {
        let questions = (0..count).map(|i| question(i, i % 2)).collect();
        let config = QuizConfig {
            rows: vec!["a".to_string()],
            question_type: QuestionType::KanaToRomaji,
            length: count,
            choices: 2,
        };
        QuizSession::with_questions(config, questions)
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    #[test]
    fn test_initial_state() {
        let session = create_test_session(3);
        assert_eq!(session.phase(), SessionPhase::Answering);
        assert_eq!(session.current_index, 0);
        assert_eq!(session.score, 0);
        assert_eq!(session.selected_choice, None);
        assert_eq!(session.remaining(), 3);
    }

    #[test]
    fn test_submit_correct_choice_scores() {
        let mut session = create_test_session(2);
        assert!(session.submit_choice(0));
        assert_eq!(session.score, 1);
        assert_eq!(session.selected_choice, Some(0));
        assert_eq!(session.phase(), SessionPhase::Answered);
        assert_eq!(session.remaining(), 1);
    }

    #[test]
    fn test_submit_is_ignored_once_answered() {
        let mut session = create_test_session(2);
        assert!(session.submit_choice(1));
        assert!(!session.submit_choice(0));
        assert_eq!(session.score, 0);
        assert_eq!(session.selected_choice, Some(1));
    }

    #[test]
    fn test_submit_out_of_range_is_ignored() {
        let mut session = create_test_session(1);
        assert!(!session.submit_choice(5));
        assert_eq!(session.phase(), SessionPhase::Answering);
    }

    #[test]
    fn test_advance_requires_answer() {
        let mut session = create_test_session(2);
        assert!(!session.advance());
        assert_eq!(session.current_index, 0);
    }

    #[test]
    fn test_advance_moves_and_clears_selection() {
        let mut session = create_test_session(2);
        session.submit_choice(0);
        assert!(session.advance());
        assert_eq!(session.current_index, 1);
        assert_eq!(session.selected_choice, None);
        assert_eq!(session.phase(), SessionPhase::Answering);
    }

    #[test]
    fn test_advance_past_last_question_finishes() {
        let mut session = create_test_session(1);
        session.submit_choice(0);
        assert!(session.advance());
        assert_eq!(session.phase(), SessionPhase::Finished);
        assert!(session.current_question().is_none());
        assert!(!session.submit_choice(0));
        assert!(!session.advance());
        assert_eq!(session.remaining(), 0);
    }

    #[test]
    fn test_score_counts_matching_submissions() {
        let mut session = create_test_session(4);
        // correct indices alternate 0, 1, 0, 1
        let picks = [0, 0, 0, 1];
        for pick in picks {
            session.submit_choice(pick);
            session.advance();
        }
        assert_eq!(session.score, 3);
        assert_eq!(session.accuracy_percent(), 75);
        assert_eq!(session.progress_ratio(), 1.0);
    }

    #[test]
    fn test_retry_resets_and_regenerates() {
        let mut rng = StdRng::seed_from_u64(9);
        let config = QuizConfig::from_query("rows=a&type=hybrid&length=5&choices=4");
        let mut session = QuizSession::new(config, &mut rng);
        session.submit_choice(session.questions[0].correct_index);
        session.advance();
        assert_eq!(session.score, 1);

        session.retry(&mut rng);
        assert_eq!(session.score, 0);
        assert_eq!(session.current_index, 0);
        assert_eq!(session.version, 1);
        assert_eq!(session.questions.len(), 5);
        assert_eq!(session.phase(), SessionPhase::Answering);
    }

    #[test]
    fn test_empty_session_is_finished() {
        let session = create_test_session(0);
        assert!(session.is_empty());
        assert_eq!(session.phase(), SessionPhase::Finished);
        assert_eq!(session.accuracy_percent(), 0);
    }

    #[test]
    fn test_digit_keys_submit() {
        let mut session = create_test_session(2);
        let mut state = AppState::Quiz;
        handle_quiz_input(&mut session, key(KeyCode::Char('2')), &mut state);
        assert_eq!(session.selected_choice, Some(1));
        assert_eq!(session.score, 0);
        assert_eq!(state, AppState::Quiz);
    }

    #[test]
    fn test_arrow_and_enter_submit_highlighted() {
        let mut session = create_test_session(1);
        let mut state = AppState::Quiz;
        handle_quiz_input(&mut session, key(KeyCode::Right), &mut state);
        assert_eq!(session.highlighted_choice, 1);
        handle_quiz_input(&mut session, key(KeyCode::Right), &mut state);
        assert_eq!(session.highlighted_choice, 1);
        handle_quiz_input(&mut session, key(KeyCode::Left), &mut state);
        handle_quiz_input(&mut session, key(KeyCode::Enter), &mut state);
        assert_eq!(session.selected_choice, Some(0));
        assert_eq!(session.score, 1);
    }

    #[test]
    fn test_enter_after_last_answer_shows_summary() {
        let mut session = create_test_session(1);
        let mut state = AppState::Quiz;
        handle_quiz_input(&mut session, key(KeyCode::Char('1')), &mut state);
        handle_quiz_input(&mut session, key(KeyCode::Enter), &mut state);
        assert_eq!(state, AppState::Summary);
        assert!(session.finished);
    }

    #[test]
    fn test_esc_asks_for_confirmation() {
        let mut session = create_test_session(2);
        let mut state = AppState::Quiz;
        handle_quiz_input(&mut session, key(KeyCode::Esc), &mut state);
        assert_eq!(state, AppState::QuizQuitConfirm);
    }

    #[test]
    fn test_empty_session_enter_returns_to_setup() {
        let mut session = create_test_session(0);
        let mut state = AppState::Quiz;
        handle_quiz_input(&mut session, key(KeyCode::Enter), &mut state);
        assert_eq!(state, AppState::Setup);
    }

    #[test]
    fn test_digit_choice_mapping() {
        assert_eq!(digit_choice('1'), Some(0));
        assert_eq!(digit_choice('9'), Some(8));
        assert_eq!(digit_choice('0'), Some(9));
        assert_eq!(digit_choice('x'), None);
    }
}
