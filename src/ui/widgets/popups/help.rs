use crate::app::App;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

/// (key label, icon, description) rows for the help popup
pub fn key_rows(app: &App) -> (Vec<(String, &'static str, &'static str)>, Vec<(String, &'static str, &'static str)>) {
    let k = &app.keys;
    let pair = |a: &str, b: &str| format!("{}/{}", k.display(a), k.display(b));

    let browser = vec![
        (pair(&k.nav_down, &k.nav_up), "↕", "Move"),
        (pair(&k.next_group, &k.prev_group), "⇥", "Next/prev group"),
        (k.display(&k.open_album), "💿", "Album details"),
        (pair(&k.next_preset, &k.prev_preset), "🗂️", "Cycle preset"),
        (k.display(&k.toggle_group_order), "⇅", "Group order"),
        (k.display(&k.cycle_date_field), "📅", "Date field"),
    ];

    let global = vec![
        (k.display(&k.open_lastfm), "🎧", "Last.fm"),
        (k.display(&k.reload), "↻", "Reload library"),
        (k.display(&k.toggle_keyhints), "❔", "Keys"),
        (k.display(&k.quit), "🚪", "Quit"),
    ];

    (browser, global)
}

pub fn render(f: &mut Frame, app: &App) {
    let theme = &app.theme;

    // 🎹 WhichKey-style floating popup, bottom-right
    let (keys, global_keys) = key_rows(app);

    // Build popup content first to calculate exact height
    let mut lines: Vec<Line> = Vec::new();

    let row = |key: &str, icon: &'static str, desc: &'static str, color: Color| {
        Line::from(vec![
            Span::styled(
                format!(" {:<7} ", key),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
            Span::styled("   ", Style::default().fg(theme.overlay)),
            Span::styled(format!("{} ", icon), Style::default()),
            Span::styled(desc, Style::default().fg(theme.text)),
        ])
    };

    for (key, icon, desc) in &keys {
        lines.push(row(key, *icon, *desc, theme.yellow));
    }
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled(
        "────── Global ──────",
        Style::default().fg(theme.blue).add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(""));

    for (key, icon, desc) in &global_keys {
        lines.push(row(key, *icon, *desc, theme.green));
    }

    // Fit content exactly 📏
    let content_width = keys
        .iter()
        .chain(global_keys.iter())
        .map(|(k, _i, d)| 2 + k.len().max(7) + 3 + 3 + d.len())
        .max()
        .unwrap_or(20)
        .max(22);

    let max_height = f.area().height.saturating_sub(4);
    let popup_height = (lines.len() as u16 + 2).min(max_height);
    let popup_width = (content_width as u16 + 4).min(f.area().width.saturating_sub(2));

    let popup_x = f.area().width.saturating_sub(popup_width + 1);
    let popup_y = f.area().height.saturating_sub(popup_height + 2);
    let popup_area = Rect::new(popup_x, popup_y, popup_width, popup_height);

    f.render_widget(Clear, popup_area);

    let popup = Paragraph::new(lines).alignment(Alignment::Left).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(theme.blue))
            .title(format!(" {} ", app.settings.describe()))
            .title_alignment(Alignment::Left)
            .style(Style::default().bg(Color::Reset)),
    );
    f.render_widget(popup, popup_area);
}
