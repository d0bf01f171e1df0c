pub mod app;
pub mod chart;
pub mod config;
pub mod generator;
pub mod logger;
pub mod models;
pub mod session;
pub mod setup;
pub mod ui;
pub mod utils;
pub mod vocab;


// Re-exports for convenience
pub use app::App;
pub use config::QuizConfig;
pub use generator::generate_questions;
pub use models::{AppState, Question, QuestionMode, QuestionType, Word};
pub use session::{QuizSession, SessionPhase, handle_quiz_input};
pub use vocab::word_pool;
