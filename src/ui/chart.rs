use crate::chart::{CHART_COLUMNS, CHART_ORDER, ChartState, chart_cell};
use crate::ui::layout::calculate_split_chunks;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, Wrap},
};

const DETAIL_WIDTH: u16 = 40;

pub fn draw_chart(f: &mut Frame, chart: &ChartState) {
    let layout = calculate_split_chunks(f.area(), DETAIL_WIDTH);

    let title = Paragraph::new(Line::from(vec![
        Span::styled(
            "Hiragana chart",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("   清音46", Style::default().fg(Color::DarkGray)),
    ]))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, layout.header_area);

    let rows: Vec<Row> = (0..CHART_ORDER.len())
        .map(|row| {
            let cells: Vec<Cell> = (0..CHART_COLUMNS)
                .map(|col| match chart_cell(row, col) {
                    Some(kana) => {
                        let active = row == chart.row && col == chart.col;
                        let style = if active {
                            Style::default()
                                .fg(Color::Yellow)
                                .add_modifier(Modifier::BOLD | Modifier::REVERSED)
                        } else {
                            Style::default().fg(Color::LightRed)
                        };
                        Cell::from(format!(" {} {:<4}", kana.symbol, kana.romaji)).style(style)
                    }
                    None => Cell::from("  ·").style(Style::default().fg(Color::DarkGray)),
                })
                .collect();
            Row::new(cells)
        })
        .collect();

    let grid = Table::new(rows, [Constraint::Length(9); CHART_COLUMNS])
        .column_spacing(1)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(grid, layout.left_area);

    let mut detail = Text::default();
    if let Some(kana) = chart.selected() {
        detail.push_line(Line::from(Span::styled(
            kana.symbol,
            Style::default()
                .fg(Color::LightRed)
                .add_modifier(Modifier::BOLD),
        )));
        detail.push_line(Line::from(kana.romaji));
        detail.push_line(Line::from(Span::styled(
            format!("Stroke count {}", kana.stroke_count),
            Style::default().fg(Color::DarkGray),
        )));
        detail.push_line(Line::from(""));

        if kana.vocab.is_empty() {
            detail.push_line(Line::from(Span::styled(
                format!("Add your own vocabulary for {}.", kana.symbol),
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            )));
        }
        for entry in kana.vocab {
            let mut heading = vec![Span::styled(
                entry.word,
                Style::default().add_modifier(Modifier::BOLD),
            )];
            if let Some(icon) = entry.icon {
                heading.push(Span::from(format!("  {}", icon)));
            }
            detail.push_line(Line::from(heading));
            detail.push_line(Line::from(Span::styled(
                entry.reading,
                Style::default().fg(Color::Gray),
            )));
            detail.push_line(Line::from(entry.meaning));
            detail.push_line(Line::from(""));
        }
    }

    let detail = Paragraph::new(detail)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("Detail"));
    f.render_widget(detail, layout.right_area);

    let help_text = vec![Line::from(vec![
        Span::styled(
            "←↑↓→",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Move  "),
        Span::styled(
            "q",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Quiz setup  "),
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
