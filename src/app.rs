use crate::chart::{ChartState, handle_chart_input};
use crate::config::QuizConfig;
use crate::logger;
use crate::models::AppState;
use crate::session::{QuizSession, handle_quiz_input};
use crate::setup::{SetupState, handle_setup_input};
use crate::ui::{
    MENU_ITEMS, MenuItem, draw_chart, draw_menu, draw_quit_confirmation, draw_quiz, draw_setup,
    draw_summary,
};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use rand::Rng;
use ratatui::Frame;

/// Everything the event loop owns: which screen is up plus each screen's state.
#[derive(Debug)]
pub struct App {
    pub state: AppState,
    pub menu_index: usize,
    pub chart: ChartState,
    pub setup: SetupState,
    pub session: Option<QuizSession>,
    pub should_quit: bool,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        Self {
            state: AppState::Menu,
            menu_index: 0,
            chart: ChartState::default(),
            setup: SetupState::default(),
            session: None,
            should_quit: false,
        }
    }

    /// Opens directly on a quiz, as when launched with quiz parameters.
    pub fn with_quiz<R: Rng>(config: QuizConfig, rng: &mut R) -> Self {
        let mut app = Self::new();
        app.setup = SetupState::from_config(&config);
        app.start_quiz(config, rng);
        app
    }

    pub fn start_quiz<R: Rng>(&mut self, config: QuizConfig, rng: &mut R) {
        logger::log(&format!("Starting quiz: {}", config.to_query()));
        let session = QuizSession::new(config, rng);
        if session.is_empty() {
            logger::log("Word pool is empty; showing empty state");
        }
        self.session = Some(session);
        self.state = AppState::Quiz;
    }

    pub fn handle_key<R: Rng>(&mut self, key: KeyEvent, rng: &mut R) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.state {
            AppState::Menu => self.handle_menu_key(key),
            AppState::Chart => handle_chart_input(&mut self.chart, key, &mut self.state),
            AppState::Setup => {
                if let Some(config) = handle_setup_input(&mut self.setup, key, &mut self.state) {
                    self.start_quiz(config, rng);
                }
            }
            AppState::Quiz => match self.session.as_mut() {
                Some(session) => handle_quiz_input(session, key, &mut self.state),
                None => self.state = AppState::Menu,
            },
            AppState::QuizQuitConfirm => match key.code {
                KeyCode::Char('y') | KeyCode::Char('Y') => {
                    logger::log("Quiz abandoned");
                    self.session = None;
                    self.state = AppState::Menu;
                }
                KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                    self.state = AppState::Quiz;
                }
                _ => {}
            },
            AppState::Summary => match key.code {
                KeyCode::Char('r') => {
                    if let Some(session) = self.session.as_mut() {
                        session.retry(rng);
                        self.state = AppState::Quiz;
                    }
                }
                KeyCode::Char('s') => {
                    if let Some(session) = &self.session {
                        self.setup = SetupState::from_config(&session.config);
                    }
                    self.session = None;
                    self.state = AppState::Setup;
                }
                KeyCode::Char('m') => {
                    self.session = None;
                    self.state = AppState::Menu;
                }
                KeyCode::Esc | KeyCode::Char('q') => self.should_quit = true,
                _ => {}
            },
        }

        // An empty session is dropped once the user is sent back to setup.
        if self.state == AppState::Setup
            && self.session.as_ref().is_some_and(QuizSession::is_empty)
        {
            self.session = None;
        }
    }

    fn handle_menu_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up => self.menu_index = self.menu_index.saturating_sub(1),
            KeyCode::Down => {
                self.menu_index = (self.menu_index + 1).min(MENU_ITEMS.len() - 1);
            }
            KeyCode::Char(c @ '1'..='3') => {
                self.menu_index = c as usize - '1' as usize;
                self.activate_menu_item();
            }
            KeyCode::Enter => self.activate_menu_item(),
            KeyCode::Esc | KeyCode::Char('q') => self.should_quit = true,
            _ => {}
        }
    }

    fn activate_menu_item(&mut self) {
        match MENU_ITEMS[self.menu_index.min(MENU_ITEMS.len() - 1)] {
            MenuItem::Chart => self.state = AppState::Chart,
            MenuItem::Quiz => self.state = AppState::Setup,
            MenuItem::Quit => self.should_quit = true,
        }
    }

    pub fn draw(&self, f: &mut Frame) {
        match self.state {
            AppState::Menu => draw_menu(f, self.menu_index),
            AppState::Chart => draw_chart(f, &self.chart),
            AppState::Setup => draw_setup(f, &self.setup),
            AppState::Quiz => {
                if let Some(session) = &self.session {
                    draw_quiz(f, session);
                }
            }
            AppState::QuizQuitConfirm => draw_quit_confirmation(f),
            AppState::Summary => {
                if let Some(session) = &self.session {
                    draw_summary(f, session);
                }
            }
        }
    }
}
