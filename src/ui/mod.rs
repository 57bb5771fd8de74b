pub mod layout;
pub mod plain;
pub mod utils;
pub mod widgets;

use crate::app::App;
use ratatui::{
    layout::Alignment,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// One-line summary shown above the list
pub fn title_line(app: &App) -> Line<'static> {
    let theme = &app.theme;
    let s = &app.settings;

    let name = match s.name {
        Some(ref name) if app.preset_idx.is_some() => name.clone(),
        _ => "Custom".to_string(),
    };

    Line::from(vec![
        Span::styled(
            format!(" 💿 {} ", name),
            Style::default().fg(theme.magenta).add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("{} ", s.describe()), Style::default().fg(theme.text)),
        Span::styled(
            format!("{} ", s.group_sort_order.arrow()),
            Style::default().fg(theme.yellow),
        ),
        Span::styled(
            format!("· {} ", s.group_date_field.label()),
            Style::default().fg(theme.overlay),
        ),
        Span::styled(
            format!("· {} albums", app.browser.album_count()),
            Style::default().fg(theme.overlay),
        ),
    ])
}

pub fn ui(f: &mut Frame, app: &App) {
    let area = f.area();

    // 1. Layout
    let main_layout = layout::get_main_layout(area);

    // 2. Title
    f.render_widget(Paragraph::new(title_line(app)), main_layout.title_area);

    // 3. Grouped album list
    widgets::library::render(f, main_layout.body_area, app);

    // 4. Footer Hint (if no popup active)
    if !app.show_keyhints {
        let theme = &app.theme;
        let hint = Line::from(vec![
            Span::styled(
                format!(" {} ", app.keys.display(&app.keys.toggle_keyhints)),
                Style::default()
                    .fg(theme.overlay)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("keys", Style::default().fg(theme.overlay)),
        ]);
        let footer = Paragraph::new(hint).alignment(Alignment::Right);
        f.render_widget(footer, main_layout.footer_area);
    }

    // 5. Popups (Overlays)
    widgets::popups::render(f, app);
}
