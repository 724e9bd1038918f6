/// Input adapter: drains terminal events into game-level input.
///
/// Pointer presses arrive here as raw terminal positions; the frame
/// loop converts them to grid coordinates through `BoardGeometry`, so
/// the simulation only ever sees resolved, in-bounds coordinates.
/// Keys are edge-triggered (only `Press` events count); there is no
/// hold-to-repeat in a pointer-driven puzzle.

use std::time::Duration;

use crossterm::event::{
    self, Event, KeyCode, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind,
};

/// One game-level input event.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum InputEvent {
    /// Left mouse press at a terminal position.
    PressAt { x: u16, y: u16 },
    /// Drop the current selection (Esc or Backspace).
    Cancel,
    Pause,
    Restart,
    Quit,
}

pub struct InputState {
    events: Vec<InputEvent>,
    ctrl_c: bool,
}

impl InputState {
    pub fn new() -> Self {
        InputState {
            events: Vec::with_capacity(8),
            ctrl_c: false,
        }
    }

    /// Drain all pending terminal events without blocking.
    /// Call once per frame, before the simulation tick.
    pub fn drain_events(&mut self) {
        self.events.clear();
        self.ctrl_c = false;

        while event::poll(Duration::ZERO).unwrap_or(false) {
            match event::read() {
                Ok(Event::Key(key)) => {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    if key.modifiers.contains(KeyModifiers::CONTROL)
                        && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
                    {
                        self.ctrl_c = true;
                        continue;
                    }
                    if let Some(ev) = key_to_event(key.code) {
                        self.events.push(ev);
                    }
                }
                Ok(Event::Mouse(mouse)) => {
                    if mouse.kind == MouseEventKind::Down(MouseButton::Left) {
                        self.events.push(InputEvent::PressAt {
                            x: mouse.column,
                            y: mouse.row,
                        });
                    }
                }
                _ => {}
            }
        }
    }

    pub fn ctrl_c_pressed(&self) -> bool {
        self.ctrl_c
    }

    /// Events collected by the last drain, in arrival order.
    pub fn events(&self) -> &[InputEvent] {
        &self.events
    }
}

/// Key bindings: Esc/Backspace cancel, p pause, r restart, q quit.
fn key_to_event(code: KeyCode) -> Option<InputEvent> {
    match code {
        KeyCode::Esc | KeyCode::Backspace => Some(InputEvent::Cancel),
        KeyCode::Char('p') | KeyCode::Char('P') => Some(InputEvent::Pause),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(InputEvent::Restart),
        KeyCode::Char('q') | KeyCode::Char('Q') => Some(InputEvent::Quit),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cancel_keys() {
        assert_eq!(key_to_event(KeyCode::Esc), Some(InputEvent::Cancel));
        assert_eq!(key_to_event(KeyCode::Backspace), Some(InputEvent::Cancel));
    }

    #[test]
    fn meta_keys() {
        assert_eq!(key_to_event(KeyCode::Char('p')), Some(InputEvent::Pause));
        assert_eq!(key_to_event(KeyCode::Char('R')), Some(InputEvent::Restart));
        assert_eq!(key_to_event(KeyCode::Char('q')), Some(InputEvent::Quit));
    }

    #[test]
    fn unbound_keys_are_ignored() {
        assert_eq!(key_to_event(KeyCode::Char('x')), None);
        assert_eq!(key_to_event(KeyCode::Enter), None);
    }
}
