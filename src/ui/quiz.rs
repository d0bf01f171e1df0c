use crate::session::{QuizSession, SessionPhase};
use crate::ui::layout::{calculate_choice_grid, calculate_quiz_chunks};
use crate::utils::choice_columns;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Gauge, Paragraph, Wrap},
};

pub fn draw_quiz(f: &mut Frame, session: &QuizSession) {
    if session.is_empty() {
        draw_empty_state(f);
        return;
    }
    let Some(question) = session.current_question() else {
        return;
    };
    let layout = calculate_quiz_chunks(f.area());

    let header = Paragraph::new(format!(
        "Hiragana Quiz - Question {} / {}",
        session.current_index + 1,
        session.total()
    ))
    .style(
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(header, layout.header_area);

    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title("Progress"))
        .gauge_style(Style::default().fg(Color::LightRed))
        .ratio(session.progress_ratio())
        .label(format!("Score {}  Remaining {}", session.score, session.remaining()));
    f.render_widget(gauge, layout.progress_area);

    let mut prompt = Text::default();
    prompt.push_line(Line::from(""));
    prompt.push_line(Line::from(Span::styled(
        question.prompt.as_str(),
        Style::default().add_modifier(Modifier::BOLD),
    )));
    prompt.push_line(Line::from(""));
    prompt.push_line(Line::from(Span::styled(
        format!("Choices per question: {}", question.choices.len()),
        Style::default().fg(Color::DarkGray),
    )));
    let prompt = Paragraph::new(prompt)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(question.mode.label()),
        );
    f.render_widget(prompt, layout.prompt_area);

    let answered = session.phase() == SessionPhase::Answered;
    let columns = choice_columns(session.config.choices).min(question.choices.len());
    let cells = calculate_choice_grid(layout.choices_area, question.choices.len(), columns);
    for (index, (choice, area)) in question.choices.iter().zip(cells).enumerate() {
        let is_correct = index == question.correct_index;
        let is_selected = session.selected_choice == Some(index);

        let border_style = if answered && is_correct {
            Style::default().fg(Color::Green)
        } else if answered && is_selected {
            Style::default().fg(Color::Red)
        } else if !answered && index == session.highlighted_choice {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let mut text = Text::default();
        text.push_line(Line::from(Span::styled(
            question.mode.answer_for(choice),
            border_style.add_modifier(Modifier::BOLD),
        )));
        if answered {
            text.push_line(Line::from(Span::styled(
                question.mode.prompt_for(choice),
                Style::default().fg(Color::DarkGray),
            )));
        }

        let label = if index < 9 {
            format!("{}", index + 1)
        } else {
            "0".to_string()
        };
        let cell = Paragraph::new(text)
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(label)
                    .border_style(border_style),
            );
        f.render_widget(cell, area);
    }

    let mut spans = Vec::new();
    if answered {
        spans.extend([
            Span::styled(
                "Enter",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::from(if session.is_last_question() {
                " See results  "
            } else {
                " Next question  "
            }),
        ]);
    } else {
        spans.extend([
            Span::styled(
                if question.choices.len() >= 10 {
                    "1-9,0"
                } else {
                    "1-9"
                },
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::from(" Answer  "),
            Span::styled(
                "←↑↓→ Enter",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::from(" Pick  "),
        ]);
    }
    spans.extend([
        Span::styled(
            "Esc",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Quit to Menu"),
    ]);

    let mut help_text = vec![Line::from(spans)];
    if answered {
        let verdict = match session.selected_choice {
            Some(index) if index == question.correct_index => {
                Span::styled("Correct!", Style::default().fg(Color::Green))
            }
            _ => Span::styled(
                format!(
                    "Answer: {}",
                    question.mode.answer_for(question.correct_word())
                ),
                Style::default().fg(Color::Red),
            ),
        };
        help_text.push(Line::from(verdict));
    }

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, layout.help_area);
}

pub fn draw_empty_state(f: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(5)
        .constraints([Constraint::Length(7), Constraint::Min(0)])
        .split(f.area());

    let text = vec![
        Line::from(Span::styled(
            "Not enough vocabulary selected.",
            Style::default()
                .fg(Color::LightRed)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("Try enabling more rows so we can build a quiz."),
        Line::from(""),
        Line::from(vec![
            Span::styled(
                "Enter",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::from(" Back to setup"),
        ]),
    ];
    let message = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(message, chunks[0]);
}

pub fn draw_quit_confirmation(f: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(5)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(5),
            Constraint::Length(3),
        ])
        .split(f.area());

    let title = Paragraph::new("Quit to Menu")
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, chunks[0]);

    let message = Paragraph::new("Leave this quiz? Your progress will be lost.")
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(message, chunks[1]);

    let help_text = vec![Line::from(vec![
        Span::styled(
            "y",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Yes (Return to Menu)  "),
        Span::styled(
            "n",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        Span::from(" No (Continue Quiz)  "),
        Span::styled(
            "Ctrl+C",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Exit App"),
    ])];
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, chunks[2]);
}
