use crate::popup::{Phase, PhaseMachine};
use crate::theme::Theme;
use crate::ui::layout::centered_rect;
use ratatui::{
    layout::Alignment,
    style::{Color, Style},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Any phase-driven popup, centred, titled by its current phase
pub fn render<P: Phase>(f: &mut Frame, machine: &PhaseMachine<P>, theme: &Theme) {
    let lines = machine.view(theme);
    let height = lines.len() as u16 + 3;
    let area = centered_rect(f.area(), 64, height);

    f.render_widget(Clear, area);

    let border = if machine.can_go_back() { theme.blue } else { theme.magenta };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border))
        .title(format!(" {} ", machine.title()))
        .title_alignment(Alignment::Left)
        .style(Style::default().bg(Color::Reset));

    let p = Paragraph::new(lines).wrap(Wrap { trim: false }).block(block);
    f.render_widget(p, area);
}
