use crate::config::{CHOICE_COUNTS, DRILL_LENGTHS};
use crate::models::QuestionType;
use crate::setup::{SetupFocus, SetupState};
use crate::ui::layout::calculate_split_chunks;
use crate::vocab::KANA_ROWS;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph},
};

const OPTIONS_WIDTH: u16 = 46;

fn panel_block(title: &str, focused: bool) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(if focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        })
}

fn option_spans(options: &[usize], selected: usize) -> Vec<Span<'static>> {
    let mut spans = Vec::with_capacity(options.len() * 2);
    for option in options {
        let style = if *option == selected {
            Style::default()
                .fg(Color::Black)
                .bg(Color::LightRed)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled(format!(" {} ", option), style));
        spans.push(Span::from(" "));
    }
    spans
}

pub fn draw_setup(f: &mut Frame, setup: &SetupState) {
    let layout = calculate_split_chunks(f.area(), OPTIONS_WIDTH);

    let title = Paragraph::new("Hiragana Practice - Quiz Scope")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, layout.header_area);

    draw_rows(f, setup, layout.left_area);
    draw_options(f, setup, layout.right_area);

    let help_text = vec![Line::from(vec![
        Span::styled(
            "Tab/1-5",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Focus  "),
        Span::styled(
            "Space",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Toggle row  "),
        Span::styled(
            "a",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(if setup.all_selected() {
            " Clear all  "
        } else {
            " Select all  "
        }),
        Span::styled(
            "s",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Start  "),
        Span::styled(
            "Esc",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Back"),
    ])];
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, layout.help_area);
}

fn draw_rows(f: &mut Frame, setup: &SetupState, area: Rect) {
    let focused = setup.focus == SetupFocus::Rows;
    let mut text = Text::default();

    for (i, row) in KANA_ROWS.iter().enumerate() {
        let selected = setup.is_selected(row.id);
        let marker = if selected { "[x]" } else { "[ ]" };
        let base = if selected {
            Style::default().fg(Color::LightRed)
        } else {
            Style::default().fg(Color::Gray)
        };
        let style = if focused && i == setup.row_cursor {
            base.add_modifier(Modifier::REVERSED | Modifier::BOLD)
        } else {
            base
        };

        let characters: Vec<&str> = row
            .characters
            .iter()
            .map(|c| if c.is_empty() { "・" } else { *c })
            .collect();

        text.push_line(Line::from(vec![
            Span::styled(format!("{} {}  ", marker, row.label), style),
            Span::styled(
                characters.join(" "),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("   {}", row.romaji_summary()),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
    }

    let rows = Paragraph::new(text).block(panel_block("[1] Select Kana Rows", focused));
    f.render_widget(rows, area);
}

fn draw_options(f: &mut Frame, setup: &SetupState, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(8),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .split(area);

    let mut types = Text::default();
    for ty in QuestionType::ALL {
        let selected = ty == setup.question_type;
        let style = if selected {
            Style::default()
                .fg(Color::LightRed)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        types.push_line(Line::from(Span::styled(
            format!("{} {}", if selected { "●" } else { "○" }, ty.label()),
            style,
        )));
        types.push_line(Line::from(Span::styled(
            format!("  {}", ty.description()),
            Style::default().fg(Color::DarkGray),
        )));
    }
    let types = Paragraph::new(types).block(panel_block(
        "[2] Question Mode",
        setup.focus == SetupFocus::QuestionType,
    ));
    f.render_widget(types, chunks[0]);

    let lengths = Paragraph::new(Line::from(option_spans(&DRILL_LENGTHS, setup.length)))
        .block(panel_block("[3] Drill Length", setup.focus == SetupFocus::Length));
    f.render_widget(lengths, chunks[1]);

    let choices = Paragraph::new(Line::from(option_spans(&CHOICE_COUNTS, setup.choices)))
        .block(panel_block(
            "[4] Number of Choices",
            setup.focus == SetupFocus::Choices,
        ));
    f.render_widget(choices, chunks[2]);

    let start_style = if !setup.can_start() {
        Style::default().fg(Color::DarkGray)
    } else if setup.focus == SetupFocus::Start {
        Style::default()
            .fg(Color::Black)
            .bg(Color::LightRed)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(Color::LightRed)
            .add_modifier(Modifier::BOLD)
    };
    let start_label = if setup.can_start() {
        "[5] Start Quiz"
    } else {
        "Select at least one row"
    };
    let start = Paragraph::new(Span::styled(start_label, start_style))
        .alignment(Alignment::Center)
        .block(panel_block("", setup.focus == SetupFocus::Start));
    f.render_widget(start, chunks[3]);
}
