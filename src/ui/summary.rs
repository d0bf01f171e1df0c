use crate::session::QuizSession;
use crate::ui::layout::calculate_summary_chunks;
use crate::utils::truncate_string;
use ratatui::{
    Frame,
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
};

pub fn draw_summary(f: &mut Frame, session: &QuizSession) {
    let layout = calculate_summary_chunks(f.area());

    let title = Paragraph::new("Hiragana Quiz - Results")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, layout.header_area);

    let accuracy = session.accuracy_percent();
    let accuracy_color = match accuracy {
        80.. => Color::Green,
        50..=79 => Color::Yellow,
        _ => Color::Red,
    };

    let mut summary_text = Text::default();
    summary_text.push_line(Line::from(""));
    summary_text.push_line(Line::from(Span::styled(
        "QUIZ COMPLETE",
        Style::default().fg(Color::DarkGray),
    )));
    summary_text.push_line(Line::from(""));
    summary_text.push_line(Line::from(Span::styled(
        format!("{} / {}", session.score, session.total()),
        Style::default().add_modifier(Modifier::BOLD),
    )));
    summary_text.push_line(Line::from(Span::styled(
        format!("Accuracy {}%", accuracy),
        Style::default().fg(accuracy_color),
    )));
    summary_text.push_line(Line::from(""));
    summary_text.push_line(Line::from(Span::styled(
        format!(
            "Rows: {}",
            truncate_string(&session.config.rows.join(", "), 60)
        ),
        Style::default().fg(Color::DarkGray),
    )));
    summary_text.push_line(Line::from(Span::styled(
        format!(
            "Mode: {}  Choices: {}",
            session.config.question_type.label(),
            session.config.choices
        ),
        Style::default().fg(Color::DarkGray),
    )));

    let summary = Paragraph::new(summary_text)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(summary, layout.content_area);

    let help_text = vec![Line::from(vec![
        Span::styled(
            "r",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Try another set  "),
        Span::styled(
            "s",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Adjust settings  "),
        Span::styled(
            "m",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Main Menu  "),
        Span::styled(
            "Esc",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Quit"),
    ])];
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, layout.footer_area);
}
