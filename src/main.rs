use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use kana_drill::config::QuizConfig;
use kana_drill::generator::generate_questions;
use kana_drill::models::{Question, QuestionType};
use kana_drill::vocab::{all_row_ids, word_pool};
use kana_drill::{App, logger};
use rand::SeedableRng;
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use serde::Serialize;
use std::io;

#[derive(Parser, Debug)]
#[command(
    name = "kana-drill",
    version,
    about = "Hiragana chart and multiple-choice drills in the terminal"
)]
struct Cli {
    /// Quiz parameters as a query string, e.g. "rows=a,ka&type=hybrid&length=10&choices=4"
    #[arg(long)]
    query: Option<String>,

    /// Comma separated row ids (a, ka, sa, ta, na, ha, ma, ya, ra, wa, n, wa-n)
    #[arg(long, value_delimiter = ',')]
    rows: Option<Vec<String>>,

    /// Question direction
    #[arg(long, value_enum)]
    mode: Option<QuestionType>,

    /// Number of questions
    #[arg(long)]
    length: Option<usize>,

    /// Choices per question
    #[arg(long)]
    choices: Option<usize>,

    /// Print the generated questions as JSON instead of opening the UI
    #[arg(long)]
    print: bool,

    /// Seed for reproducible question sets
    #[arg(long)]
    seed: Option<u64>,
}

impl Cli {
    fn has_quiz_params(&self) -> bool {
        self.query.is_some()
            || self.rows.is_some()
            || self.mode.is_some()
            || self.length.is_some()
            || self.choices.is_some()
    }

    fn quiz_config(&self) -> QuizConfig {
        let mut config = QuizConfig::from_query(self.query.as_deref().unwrap_or(""));
        if let Some(rows) = &self.rows {
            config.rows = rows
                .iter()
                .map(|row| row.trim().to_string())
                .filter(|row| !row.is_empty())
                .collect();
        }
        if let Some(mode) = self.mode {
            config.question_type = mode;
        }
        if let Some(length) = self.length {
            config.length = length;
        }
        if let Some(choices) = self.choices {
            config.choices = choices;
        }
        if config.rows.is_empty() {
            config.rows = all_row_ids();
        }
        config
    }
}

#[derive(Serialize)]
struct PrintedQuiz<'a> {
    config: &'a QuizConfig,
    questions: &'a [Question],
}

fn print_quiz(config: &QuizConfig, rng: &mut StdRng) -> io::Result<()> {
    let pool = word_pool(&config.rows);
    let questions = generate_questions(
        &pool,
        config.question_type,
        config.length,
        config.choices,
        rng,
    );
    let json = serde_json::to_string_pretty(&PrintedQuiz {
        config,
        questions: &questions,
    })
    .map_err(io::Error::other)?;
    println!("{}", json);
    Ok(())
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    rng: &mut StdRng,
) -> io::Result<()> {
    while !app.should_quit {
        terminal.draw(|f| app.draw(f))?;

        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key, rng);
        }
    }
    Ok(())
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();
    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    if cli.print {
        return print_quiz(&cli.quiz_config(), &mut rng);
    }

    logger::init();
    logger::log("kana-drill started");

    let mut app = if cli.has_quiz_params() {
        App::with_quiz(cli.quiz_config(), &mut rng)
    } else {
        App::new()
    };

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app, &mut rng);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    logger::log("kana-drill exited");
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_without_params_opens_menu() {
        let cli = Cli::parse_from(["kana-drill"]);
        assert!(!cli.has_quiz_params());
        assert!(!cli.print);
    }

    #[test]
    fn test_cli_flags_override_query() {
        let cli = Cli::parse_from([
            "kana-drill",
            "--query",
            "rows=a&type=hybrid&length=20&choices=6",
            "--rows",
            "ka,sa",
            "--choices",
            "8",
        ]);
        assert!(cli.has_quiz_params());
        let config = cli.quiz_config();
        assert_eq!(config.rows, vec!["ka", "sa"]);
        assert_eq!(config.question_type, QuestionType::Hybrid);
        assert_eq!(config.length, 20);
        assert_eq!(config.choices, 8);
    }

    #[test]
    fn test_cli_mode_flag() {
        let cli = Cli::parse_from(["kana-drill", "--mode", "romaji-to-kana"]);
        let config = cli.quiz_config();
        assert_eq!(config.question_type, QuestionType::RomajiToKana);
        assert_eq!(config.rows, all_row_ids());
    }

    #[test]
    fn test_cli_rejects_unknown_mode() {
        let result = Cli::try_parse_from(["kana-drill", "--mode", "katakana"]);
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::InvalidValue);
    }

    #[test]
    fn test_cli_unknown_query_type_falls_back() {
        let cli = Cli::parse_from(["kana-drill", "--query", "type=katakana&length=5"]);
        let config = cli.quiz_config();
        assert_eq!(config.question_type, QuestionType::KanaToRomaji);
        assert_eq!(config.length, 5);
    }
}
