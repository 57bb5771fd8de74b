use crate::app::App;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::{Block, Paragraph},
    Frame,
};

pub mod browser;

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let mut lines: Vec<Line> = Vec::new();
    browser::render(app, area.width as usize, area.height as usize, &mut lines);

    let library_widget =
        Paragraph::new(lines).block(Block::default().style(Style::default().bg(Color::Reset)));
    f.render_widget(library_widget, area);
}
