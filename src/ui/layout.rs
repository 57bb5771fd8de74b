use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct MainLayout {
    pub title_area: Rect,
    pub body_area: Rect,
    pub footer_area: Rect,
}

pub fn get_main_layout(area: Rect) -> MainLayout {
    // Title and footer get one line each, the list takes the rest
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Min(0),    // Body
            Constraint::Length(1), // Footer
        ])
        .split(area);

    MainLayout {
        title_area: chunks[0],
        body_area: chunks[1],
        footer_area: chunks[2],
    }
}

/// Centered popup rect, clamped to the screen
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width.saturating_sub(4));
    let height = height.min(area.height.saturating_sub(2));
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_rows() {
        let layout = get_main_layout(Rect::new(0, 0, 80, 24));
        assert_eq!(layout.title_area.height, 1);
        assert_eq!(layout.body_area.height, 22);
        assert_eq!(layout.footer_area.y, 23);
    }

    #[test]
    fn test_centered_rect_clamps() {
        let r = centered_rect(Rect::new(0, 0, 40, 10), 60, 8);
        assert_eq!(r.width, 36);
        assert_eq!(r.x, 2);
        assert_eq!(r.height, 8);
        assert_eq!(r.y, 1);
    }
}
