use crate::app::App;
use crate::grouping::keys::UNKNOWN_ARTIST;
use crate::grouping::FlatItem;
use crate::ui::utils::{truncate, visible_window};
use ratatui::{
    layout::Alignment,
    style::{Modifier, Style},
    text::{Line, Span},
};

pub fn render(app: &App, width: usize, height: usize, lines: &mut Vec<Line<'static>>) {
    let theme = &app.theme;

    let date_w = 10;
    let muted = theme.overlay;
    let cream = theme.yellow;
    let grid = theme.surface;

    // ━━━ ERROR / EMPTY ━━━
    if let Some(ref err) = app.load_error {
        lines.push(Line::from(""));
        lines.push(
            Line::from(Span::styled(
                truncate(err, width.saturating_sub(4)),
                Style::default().fg(theme.red),
            ))
            .alignment(Alignment::Center),
        );
        return;
    }

    let items = app.browser.items();
    if items.is_empty() {
        lines.push(Line::from(""));
        lines.push(
            Line::from(Span::styled("No albums", Style::default().fg(muted)))
                .alignment(Alignment::Center),
        );
        return;
    }

    // Album rows sit one step deeper than the innermost header
    let album_indent = app.settings.group_fields.len();
    let start_idx = visible_window(app.browser.selected(), items.len(), height);

    for (display_idx, item) in items.iter().skip(start_idx).take(height).enumerate() {
        let is_sel = start_idx + display_idx == app.browser.selected();
        let (marker, m_color) = if is_sel { ("●", cream) } else { ("○", grid) };

        match item {
            FlatItem::Header { header, level } => {
                let indent = "  ".repeat(*level);
                let color = theme.header_color(*level);
                let mut style = Style::default().fg(color).add_modifier(Modifier::BOLD);
                if is_sel {
                    style = style.add_modifier(Modifier::REVERSED);
                }
                let name = truncate(header, width.saturating_sub(indent.len() + 6));
                lines.push(Line::from(vec![
                    Span::styled(format!("{}{} ", indent, marker), Style::default().fg(m_color)),
                    Span::styled(format!("▸ {}", name), style),
                ]));
            }
            FlatItem::Album(album) => {
                let indent = "  ".repeat(album_indent);
                let title_w = width.saturating_sub(indent.len() + date_w + 6);

                let artist = if album.artist.trim().is_empty() {
                    UNKNOWN_ARTIST
                } else {
                    album.artist.as_str()
                };
                let title = truncate(&format!("{} – {}", artist, album.name), title_w);
                let date = truncate(album.best_date(), date_w);

                let (t_style, d_style) = if is_sel {
                    (
                        Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
                        Style::default().fg(theme.green),
                    )
                } else {
                    (Style::default().fg(theme.text), Style::default().fg(muted))
                };

                lines.push(Line::from(vec![
                    Span::styled(format!("{}{} ", indent, marker), Style::default().fg(m_color)),
                    Span::styled("♪ ", Style::default().fg(theme.green)),
                    Span::styled(format!("{:title_w$}", title, title_w = title_w), t_style),
                    Span::styled(format!("{:>date_w$}", date, date_w = date_w), d_style),
                ]));
            }
        }
    }
}
