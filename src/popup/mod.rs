//! Multi-step popups driven by a small phase state machine.

use crate::theme::Theme;
use ratatui::text::Line;
use std::mem;
use tracing::debug;

pub mod lastfm;

/// What a phase asks the machine to do after handling an event
#[derive(Debug, PartialEq)]
pub enum Transition<P, F> {
    /// Keep the current phase; the effect (if any) still reaches the caller
    Stay(Option<F>),
    /// Move forward, remembering the current phase for `back`
    Advance(P, Option<F>),
    /// Move forward without history (the current phase is dropped)
    Replace(P, Option<F>),
    /// Start the flow over from this phase (history cleared, popup stays open)
    Reset(P, Option<F>),
    /// Tear the popup down
    Close(Option<F>),
}

/// One state of a popup flow
pub trait Phase: Sized {
    type Event;
    type Effect;

    fn update(&mut self, event: Self::Event) -> Transition<Self, Self::Effect>;
    fn view(&self, theme: &Theme) -> Vec<Line<'static>>;
    fn title(&self) -> &str;

    fn can_go_back(&self) -> bool {
        true
    }
}

/// Input to the machine. `Back` and `Close` never reach the phase.
#[derive(Debug, Clone, PartialEq)]
pub enum PopupInput<E> {
    Back,
    Close,
    Event(E),
}

/// What the caller sees after an input
#[derive(Debug, PartialEq)]
pub enum PopupSignal<F> {
    Open(Option<F>),
    Closed(Option<F>),
}

impl<F> PopupSignal<F> {
    pub fn is_closed(&self) -> bool {
        matches!(self, PopupSignal::Closed(_))
    }

    pub fn into_effect(self) -> Option<F> {
        match self {
            PopupSignal::Open(effect) | PopupSignal::Closed(effect) => effect,
        }
    }
}

/// Current phase plus the stack of phases it was reached from
#[derive(Debug)]
pub struct PhaseMachine<P: Phase> {
    current: P,
    history: Vec<P>,
    closed: bool,
}

impl<P: Phase> PhaseMachine<P> {
    pub fn new(initial: P) -> Self {
        Self {
            current: initial,
            history: Vec::new(),
            closed: false,
        }
    }

    pub fn current(&self) -> &P {
        &self.current
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn can_go_back(&self) -> bool {
        !self.history.is_empty() && self.current.can_go_back()
    }

    pub fn advance(&mut self, next: P) {
        debug!("Popup: {} -> {}", self.current.title(), next.title());
        let previous = mem::replace(&mut self.current, next);
        self.history.push(previous);
    }

    pub fn replace(&mut self, next: P) {
        debug!("Popup: {} => {}", self.current.title(), next.title());
        self.current = next;
    }

    /// Pop back to the previous phase. Returns false (and does nothing)
    /// when there is no history or the current phase forbids it.
    pub fn back(&mut self) -> bool {
        if !self.current.can_go_back() {
            return false;
        }
        match self.history.pop() {
            Some(previous) => {
                debug!("Popup: {} <- {}", previous.title(), self.current.title());
                self.current = previous;
                true
            }
            None => false,
        }
    }

    /// Start over (popup reopened)
    pub fn reset(&mut self, initial: P) {
        self.current = initial;
        self.history.clear();
        self.closed = false;
    }

    pub fn handle(&mut self, input: PopupInput<P::Event>) -> PopupSignal<P::Effect> {
        if self.closed {
            return PopupSignal::Closed(None);
        }

        match input {
            PopupInput::Back => {
                self.back();
                PopupSignal::Open(None)
            }
            PopupInput::Close => {
                self.closed = true;
                PopupSignal::Closed(None)
            }
            PopupInput::Event(event) => match self.current.update(event) {
                Transition::Stay(effect) => PopupSignal::Open(effect),
                Transition::Advance(next, effect) => {
                    self.advance(next);
                    PopupSignal::Open(effect)
                }
                Transition::Replace(next, effect) => {
                    self.replace(next);
                    PopupSignal::Open(effect)
                }
                Transition::Reset(next, effect) => {
                    debug!("Popup: {} => {} (history cleared)", self.current.title(), next.title());
                    self.reset(next);
                    PopupSignal::Open(effect)
                }
                Transition::Close(effect) => {
                    self.closed = true;
                    PopupSignal::Closed(effect)
                }
            },
        }
    }

    pub fn view(&self, theme: &Theme) -> Vec<Line<'static>> {
        self.current.view(theme)
    }

    pub fn title(&self) -> &str {
        self.current.title()
    }
}
