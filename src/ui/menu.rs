use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    Chart,
    Quiz,
    Quit,
}

pub const MENU_ITEMS: [MenuItem; 3] = [MenuItem::Chart, MenuItem::Quiz, MenuItem::Quit];

impl MenuItem {
    pub fn title(self) -> &'static str {
        match self {
            MenuItem::Chart => "Learn  ひらがな chart",
            MenuItem::Quiz => "Practice  ひらがな quiz",
            MenuItem::Quit => "Quit",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            MenuItem::Chart => "Browse the 46 basic hiragana with stroke counts and sample words",
            MenuItem::Quiz => "Multiple-choice drill over the rows you pick",
            MenuItem::Quit => "",
        }
    }
}

pub fn draw_menu(f: &mut Frame, selected_index: usize) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(3),
        ])
        .split(f.area());

    let title = Paragraph::new(format!("Kana Drill v{}", env!("CARGO_PKG_VERSION")))
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, chunks[0]);

    let items: Vec<ListItem> = MENU_ITEMS
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let style = if i == selected_index {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            let mut lines = vec![Line::from(Span::styled(
                format!("[{}] {}", i + 1, item.title()),
                style,
            ))];
            if !item.description().is_empty() {
                lines.push(Line::from(Span::styled(
                    format!("    {}", item.description()),
                    Style::default().fg(Color::DarkGray),
                )));
            }
            lines.push(Line::from(""));
            ListItem::new(lines)
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Japanese")
            .border_style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(list, chunks[1]);

    let help_text = vec![Line::from(vec![
        Span::styled(
            "↑/↓",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Navigate  "),
        Span::styled(
            "Enter",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Select  "),
        Span::styled(
            "Esc/Ctrl+C",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Quit"),
    ])];
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, chunks[2]);
}
