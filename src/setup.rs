use crate::config::{CHOICE_COUNTS, DRILL_LENGTHS, QuizConfig};
use crate::models::{AppState, QuestionType};
use crate::vocab::{KANA_ROWS, all_row_ids};
use crossterm::event::{KeyCode, KeyEvent};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupFocus {
    Rows,
    QuestionType,
    Length,
    Choices,
    Start,
}

impl SetupFocus {
    const ORDER: [SetupFocus; 5] = [
        SetupFocus::Rows,
        SetupFocus::QuestionType,
        SetupFocus::Length,
        SetupFocus::Choices,
        SetupFocus::Start,
    ];

    fn position(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    fn next(self) -> Self {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    fn previous(self) -> Self {
        Self::ORDER[(self.position() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

#[derive(Debug, Clone)]
pub struct SetupState {
    /// Selected row ids in the order they were picked.
    pub selected_rows: Vec<String>,
    pub row_cursor: usize,
    pub question_type: QuestionType,
    pub length: usize,
    pub choices: usize,
    pub focus: SetupFocus,
}

impl Default for SetupState {
    fn default() -> Self {
        Self::from_config(&QuizConfig::default())
    }
}

impl SetupState {
    /// Pre-fills the form, e.g. when coming back from a finished quiz.
    pub fn from_config(config: &QuizConfig) -> Self {
        let mut selected_rows: Vec<String> = config
            .rows
            .iter()
            .filter(|row| KANA_ROWS.iter().any(|r| r.id == row.as_str()))
            .cloned()
            .collect();
        selected_rows.dedup();
        if selected_rows.is_empty() {
            selected_rows = all_row_ids();
        }

        Self {
            selected_rows,
            row_cursor: 0,
            question_type: config.question_type,
            length: config.length,
            choices: config.choices,
            focus: SetupFocus::Rows,
        }
    }

    pub fn is_selected(&self, row_id: &str) -> bool {
        self.selected_rows.iter().any(|row| row == row_id)
    }

    pub fn all_selected(&self) -> bool {
        KANA_ROWS.iter().all(|row| self.is_selected(row.id))
    }

    pub fn toggle_row(&mut self, row_id: &str) {
        if self.is_selected(row_id) {
            self.selected_rows.retain(|row| row != row_id);
        } else {
            self.selected_rows.push(row_id.to_string());
        }
    }

    /// "Select all" / "Clear all".
    pub fn toggle_all(&mut self) {
        if self.all_selected() {
            self.selected_rows.clear();
        } else {
            self.selected_rows = all_row_ids();
        }
    }

    pub fn can_start(&self) -> bool {
        !self.selected_rows.is_empty()
    }

    pub fn to_config(&self) -> Option<QuizConfig> {
        if !self.can_start() {
            return None;
        }
        Some(QuizConfig {
            rows: self.selected_rows.clone(),
            question_type: self.question_type,
            length: self.length,
            choices: self.choices,
        })
    }

    fn cycle_question_type(&mut self, forward: bool) {
        let types = QuestionType::ALL;
        let pos = types
            .iter()
            .position(|t| *t == self.question_type)
            .unwrap_or(0);
        let next = if forward {
            (pos + 1).min(types.len() - 1)
        } else {
            pos.saturating_sub(1)
        };
        self.question_type = types[next];
    }
}

/// Steps to the neighbouring option; values outside the list snap to the
/// nearest option in the direction of travel.
pub fn step_option(options: &[usize], current: usize, forward: bool) -> usize {
    if options.is_empty() {
        return current;
    }
    match options.iter().position(|&o| o == current) {
        Some(i) if forward => options[(i + 1).min(options.len() - 1)],
        Some(i) => options[i.saturating_sub(1)],
        None if forward => options
            .iter()
            .copied()
            .find(|&o| o > current)
            .unwrap_or(options[options.len() - 1]),
        None => options
            .iter()
            .rev()
            .copied()
            .find(|&o| o < current)
            .unwrap_or(options[0]),
    }
}

/// Returns the quiz configuration when the user starts a quiz.
pub fn handle_setup_input(
    setup: &mut SetupState,
    key: KeyEvent,
    app_state: &mut AppState,
) -> Option<QuizConfig> {
    match key.code {
        KeyCode::Esc => {
            *app_state = AppState::Menu;
            return None;
        }
        KeyCode::Tab => {
            setup.focus = setup.focus.next();
            return None;
        }
        KeyCode::BackTab => {
            setup.focus = setup.focus.previous();
            return None;
        }
        KeyCode::Char(c @ '1'..='5') => {
            let index = c as usize - '1' as usize;
            setup.focus = SetupFocus::ORDER[index];
            return None;
        }
        KeyCode::Char('a') => {
            setup.toggle_all();
            return None;
        }
        KeyCode::Char('s') => return setup.to_config(),
        _ => {}
    }

    match setup.focus {
        SetupFocus::Rows => match key.code {
            KeyCode::Up => setup.row_cursor = setup.row_cursor.saturating_sub(1),
            KeyCode::Down => {
                setup.row_cursor = (setup.row_cursor + 1).min(KANA_ROWS.len() - 1);
            }
            KeyCode::Char(' ') | KeyCode::Enter => {
                let row_id = KANA_ROWS[setup.row_cursor.min(KANA_ROWS.len() - 1)].id;
                setup.toggle_row(row_id);
            }
            _ => {}
        },
        SetupFocus::QuestionType => match key.code {
            KeyCode::Up | KeyCode::Left => setup.cycle_question_type(false),
            KeyCode::Down | KeyCode::Right => setup.cycle_question_type(true),
            _ => {}
        },
        SetupFocus::Length => match key.code {
            KeyCode::Left | KeyCode::Down => {
                setup.length = step_option(&DRILL_LENGTHS, setup.length, false);
            }
            KeyCode::Right | KeyCode::Up => {
                setup.length = step_option(&DRILL_LENGTHS, setup.length, true);
            }
            _ => {}
        },
        SetupFocus::Choices => match key.code {
            KeyCode::Left | KeyCode::Down => {
                setup.choices = step_option(&CHOICE_COUNTS, setup.choices, false);
            }
            KeyCode::Right | KeyCode::Up => {
                setup.choices = step_option(&CHOICE_COUNTS, setup.choices, true);
            }
            _ => {}
        },
        SetupFocus::Start => {
            if key.code == KeyCode::Enter {
                return setup.to_config();
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    #[test]
    fn test_default_selects_every_row() {
        let setup = SetupState::default();
        assert!(setup.all_selected());
        assert_eq!(setup.length, 10);
        assert_eq!(setup.choices, 4);
        assert!(setup.can_start());
    }

    #[test]
    fn test_toggle_row_and_all() {
        let mut setup = SetupState::default();
        setup.toggle_row("ka");
        assert!(!setup.is_selected("ka"));
        assert!(!setup.all_selected());

        setup.toggle_all();
        assert!(setup.all_selected());
        setup.toggle_all();
        assert!(setup.selected_rows.is_empty());
        assert!(!setup.can_start());
        assert!(setup.to_config().is_none());
    }

    #[test]
    fn test_toggled_rows_keep_pick_order() {
        let mut setup = SetupState::default();
        setup.selected_rows.clear();
        setup.toggle_row("ma");
        setup.toggle_row("a");
        let config = setup.to_config().unwrap();
        assert_eq!(config.rows, vec!["ma", "a"]);
    }

    #[test]
    fn test_from_config_filters_unknown_rows() {
        let config = QuizConfig::from_query("rows=a,wa,bogus&type=hybrid&length=15&choices=6");
        let setup = SetupState::from_config(&config);
        assert_eq!(setup.selected_rows, vec!["a"]);
        assert_eq!(setup.question_type, QuestionType::Hybrid);
        assert_eq!(setup.length, 15);
        assert_eq!(setup.choices, 6);
    }

    #[test]
    fn test_step_option() {
        assert_eq!(step_option(&DRILL_LENGTHS, 10, true), 15);
        assert_eq!(step_option(&DRILL_LENGTHS, 10, false), 5);
        assert_eq!(step_option(&DRILL_LENGTHS, 50, true), 50);
        assert_eq!(step_option(&DRILL_LENGTHS, 5, false), 5);
        assert_eq!(step_option(&DRILL_LENGTHS, 12, true), 15);
        assert_eq!(step_option(&DRILL_LENGTHS, 12, false), 10);
        assert_eq!(step_option(&CHOICE_COUNTS, 3, true), 4);
        assert_eq!(step_option(&CHOICE_COUNTS, 99, true), 10);
    }

    #[test]
    fn test_keyboard_flow_builds_config() {
        let mut setup = SetupState::default();
        let mut state = AppState::Setup;

        // clear everything, then pick the second row
        handle_setup_input(&mut setup, key(KeyCode::Char('a')), &mut state);
        assert!(setup.selected_rows.is_empty());
        handle_setup_input(&mut setup, key(KeyCode::Down), &mut state);
        handle_setup_input(&mut setup, key(KeyCode::Char(' ')), &mut state);
        assert_eq!(setup.selected_rows, vec!["ka"]);

        handle_setup_input(&mut setup, key(KeyCode::Tab), &mut state);
        handle_setup_input(&mut setup, key(KeyCode::Down), &mut state);
        handle_setup_input(&mut setup, key(KeyCode::Down), &mut state);
        assert_eq!(setup.question_type, QuestionType::Hybrid);

        handle_setup_input(&mut setup, key(KeyCode::Tab), &mut state);
        handle_setup_input(&mut setup, key(KeyCode::Right), &mut state);
        assert_eq!(setup.length, 15);

        handle_setup_input(&mut setup, key(KeyCode::Tab), &mut state);
        handle_setup_input(&mut setup, key(KeyCode::Left), &mut state);
        assert_eq!(setup.choices, 2);

        handle_setup_input(&mut setup, key(KeyCode::Tab), &mut state);
        assert_eq!(setup.focus, SetupFocus::Start);
        let config = handle_setup_input(&mut setup, key(KeyCode::Enter), &mut state).unwrap();
        assert_eq!(config.to_query(), "rows=ka&type=hybrid&length=15&choices=2");
    }

    #[test]
    fn test_start_is_blocked_without_rows() {
        let mut setup = SetupState::default();
        let mut state = AppState::Setup;
        setup.selected_rows.clear();
        assert!(handle_setup_input(&mut setup, key(KeyCode::Char('s')), &mut state).is_none());
    }

    #[test]
    fn test_focus_cycles() {
        let mut setup = SetupState::default();
        let mut state = AppState::Setup;
        handle_setup_input(&mut setup, key(KeyCode::BackTab), &mut state);
        assert_eq!(setup.focus, SetupFocus::Start);
        handle_setup_input(&mut setup, key(KeyCode::Char('3')), &mut state);
        assert_eq!(setup.focus, SetupFocus::Length);
    }

    #[test]
    fn test_esc_returns_to_menu() {
        let mut setup = SetupState::default();
        let mut state = AppState::Setup;
        handle_setup_input(&mut setup, key(KeyCode::Esc), &mut state);
        assert_eq!(state, AppState::Menu);
    }
}
