use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct QuizLayout {
    pub header_area: Rect,
    pub progress_area: Rect,
    pub prompt_area: Rect,
    pub choices_area: Rect,
    pub help_area: Rect,
}

pub struct SummaryLayout {
    pub header_area: Rect,
    pub content_area: Rect,
    pub footer_area: Rect,
}

pub struct SplitLayout {
    pub header_area: Rect,
    pub left_area: Rect,
    pub right_area: Rect,
    pub help_area: Rect,
}

pub fn calculate_quiz_chunks(area: Rect) -> QuizLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(7),
            Constraint::Min(6),
            Constraint::Length(4),
        ])
        .split(area);

    QuizLayout {
        header_area: chunks[0],
        progress_area: chunks[1],
        prompt_area: chunks[2],
        choices_area: chunks[3],
        help_area: chunks[4],
    }
}

pub fn calculate_summary_chunks(area: Rect) -> SummaryLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(10),
            Constraint::Length(3),
        ])
        .split(area);

    SummaryLayout {
        header_area: chunks[0],
        content_area: chunks[1],
        footer_area: chunks[2],
    }
}

/// Header, two side-by-side panels, and a help bar. Used by the chart and
/// setup screens; `right_width` is the fixed width of the right panel.
pub fn calculate_split_chunks(area: Rect, right_width: u16) -> SplitLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(8),
            Constraint::Length(3),
        ])
        .split(area);

    let panels = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(right_width)])
        .split(chunks[1]);

    SplitLayout {
        header_area: chunks[0],
        left_area: panels[0],
        right_area: panels[1],
        help_area: chunks[2],
    }
}

/// Splits `area` into a grid of `count` cells, `columns` per row.
pub fn calculate_choice_grid(area: Rect, count: usize, columns: usize) -> Vec<Rect> {
    if count == 0 || columns == 0 {
        return Vec::new();
    }
    let rows = count.div_ceil(columns);
    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Ratio(1, rows as u32); rows])
        .split(area);

    let mut cells = Vec::with_capacity(count);
    for row_area in row_areas.iter() {
        let col_areas = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Ratio(1, columns as u32); columns])
            .split(*row_area);
        for col_area in col_areas.iter() {
            if cells.len() < count {
                cells.push(*col_area);
            }
        }
    }
    cells
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiz_layout() {
        let area = Rect::new(0, 0, 100, 40);
        let layout = calculate_quiz_chunks(area);

        assert_eq!(layout.header_area.height, 3);
        assert_eq!(layout.progress_area.height, 3);
        assert_eq!(layout.prompt_area.height, 7);
        assert_eq!(layout.help_area.height, 4);
        // 38 usable rows after the margin
        assert_eq!(layout.choices_area.height, 38 - 17);
    }

    #[test]
    fn test_summary_layout() {
        let area = Rect::new(0, 0, 100, 100);
        let layout = calculate_summary_chunks(area);

        assert_eq!(layout.header_area.height, 3);
        assert_eq!(layout.footer_area.height, 3);
        assert_eq!(layout.content_area.height, 92);
    }

    #[test]
    fn test_split_layout() {
        let area = Rect::new(0, 0, 120, 40);
        let layout = calculate_split_chunks(area, 40);
        assert_eq!(layout.right_area.width, 40);
        assert_eq!(layout.left_area.width, 118 - 40);
        assert_eq!(layout.left_area.height, layout.right_area.height);
    }

    #[test]
    fn test_choice_grid_counts() {
        let area = Rect::new(0, 0, 80, 20);
        assert_eq!(calculate_choice_grid(area, 4, 2).len(), 4);
        assert_eq!(calculate_choice_grid(area, 10, 4).len(), 10);
        assert_eq!(calculate_choice_grid(area, 6, 3).len(), 6);
        assert!(calculate_choice_grid(area, 0, 2).is_empty());

        let cells = calculate_choice_grid(area, 4, 2);
        assert_eq!(cells[0].y, cells[1].y);
        assert!(cells[2].y > cells[0].y);
    }
}
