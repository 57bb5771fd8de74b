use super::{Phase, Transition};
use crate::theme::Theme;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

const AUTH_ENDPOINT: &str = "https://www.last.fm/api/auth/";

/// Browser URL where the user approves a request token
pub fn auth_url(api_key: &str, token: &str) -> String {
    format!("{}?api_key={}&token={}", AUTH_ENDPOINT, api_key, token)
}

/// Steps of linking a Last.fm account 🎧
#[derive(Debug, Clone, PartialEq)]
pub enum LastfmPhase {
    NotLinked,
    WaitingForCallback { token: String, auth_url: String },
    Linked { username: String },
    Failed { message: String },
}

#[derive(Debug, Clone, PartialEq)]
pub enum LastfmEvent {
    /// Enter
    Confirm,
    Unlink,
    TokenIssued { token: String, auth_url: String },
    Authorized { username: String },
    AuthFailed(String),
}

/// Work the popup needs the app to do on its behalf
#[derive(Debug, Clone, PartialEq)]
pub enum LastfmEffect {
    RequestToken,
    OpenBrowser(String),
    FetchSession(String),
    SessionLinked(String),
    Unlink,
}

impl LastfmPhase {
    pub fn initial(username: Option<&str>) -> Self {
        match username {
            Some(name) if !name.is_empty() => LastfmPhase::Linked {
                username: name.to_string(),
            },
            _ => LastfmPhase::NotLinked,
        }
    }
}

impl Phase for LastfmPhase {
    type Event = LastfmEvent;
    type Effect = LastfmEffect;

    fn update(&mut self, event: LastfmEvent) -> Transition<Self, LastfmEffect> {
        match (&*self, event) {
            (_, LastfmEvent::AuthFailed(message)) => {
                Transition::Advance(LastfmPhase::Failed { message }, None)
            }

            (LastfmPhase::NotLinked, LastfmEvent::Confirm) => {
                Transition::Stay(Some(LastfmEffect::RequestToken))
            }
            (LastfmPhase::NotLinked, LastfmEvent::TokenIssued { token, auth_url }) => {
                let open = LastfmEffect::OpenBrowser(auth_url.clone());
                Transition::Advance(LastfmPhase::WaitingForCallback { token, auth_url }, Some(open))
            }

            (LastfmPhase::WaitingForCallback { token, .. }, LastfmEvent::Confirm) => {
                Transition::Stay(Some(LastfmEffect::FetchSession(token.clone())))
            }
            (LastfmPhase::WaitingForCallback { .. }, LastfmEvent::Authorized { username }) => {
                let linked = LastfmEffect::SessionLinked(username.clone());
                Transition::Reset(LastfmPhase::Linked { username }, Some(linked))
            }

            (LastfmPhase::Linked { .. }, LastfmEvent::Unlink) => {
                Transition::Reset(LastfmPhase::NotLinked, Some(LastfmEffect::Unlink))
            }
            (LastfmPhase::Linked { .. }, LastfmEvent::Confirm)
            | (LastfmPhase::Failed { .. }, LastfmEvent::Confirm) => Transition::Close(None),

            _ => Transition::Stay(None),
        }
    }

    fn view(&self, theme: &Theme) -> Vec<Line<'static>> {
        let text = Style::default().fg(theme.text);
        let muted = Style::default().fg(theme.overlay);
        let accent = Style::default().fg(theme.green).add_modifier(Modifier::BOLD);

        match self {
            LastfmPhase::NotLinked => vec![
                Line::from(""),
                Line::from(Span::styled("  Scrobbling is not linked.", text)),
                Line::from(""),
                Line::from(vec![
                    Span::styled("  Enter ", accent),
                    Span::styled("link account   ", muted),
                    Span::styled("Esc ", accent),
                    Span::styled("close", muted),
                ]),
            ],
            LastfmPhase::WaitingForCallback { auth_url, .. } => vec![
                Line::from(""),
                Line::from(Span::styled("  Approve access in your browser:", text)),
                Line::from(Span::styled(format!("  {}", auth_url), Style::default().fg(theme.blue))),
                Line::from(""),
                Line::from(vec![
                    Span::styled("  Enter ", accent),
                    Span::styled("done   ", muted),
                    Span::styled("Bksp ", accent),
                    Span::styled("back", muted),
                ]),
            ],
            LastfmPhase::Linked { username } => vec![
                Line::from(""),
                Line::from(vec![
                    Span::styled("  Linked as ", text),
                    Span::styled(username.clone(), accent),
                ]),
                Line::from(""),
                Line::from(vec![
                    Span::styled("  u ", accent),
                    Span::styled("unlink   ", muted),
                    Span::styled("Enter ", accent),
                    Span::styled("close", muted),
                ]),
            ],
            LastfmPhase::Failed { message } => vec![
                Line::from(""),
                Line::from(Span::styled(format!("  {}", message), Style::default().fg(theme.red))),
                Line::from(""),
                Line::from(vec![
                    Span::styled("  Bksp ", accent),
                    Span::styled("try again   ", muted),
                    Span::styled("Enter ", accent),
                    Span::styled("close", muted),
                ]),
            ],
        }
    }

    fn title(&self) -> &str {
        match self {
            LastfmPhase::NotLinked => "Last.fm",
            LastfmPhase::WaitingForCallback { .. } => "Last.fm · Authorize",
            LastfmPhase::Linked { .. } => "Last.fm · Linked",
            LastfmPhase::Failed { .. } => "Last.fm · Error",
        }
    }

    // Once linked, the token flow is over
    fn can_go_back(&self) -> bool {
        !matches!(self, LastfmPhase::Linked { .. })
    }
}
