use crossterm::event::{poll, read, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::io;
use std::time::Duration;

/// A player input, as seen by the game
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum InputEvent {
    Quit,
    KeyDown(Key),
    KeyUp,
    Other,
}

/// The keys the game responds to
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Key {
    Up,
    Down,
    Left,
    Right,
    Reset,
}

impl InputEvent {
    pub(crate) fn from_key_event(ev: KeyEvent) -> InputEvent {
        if ev.kind == KeyEventKind::Release {
            return InputEvent::KeyUp;
        }
        match (ev.modifiers, ev.code) {
            (KeyModifiers::CONTROL, KeyCode::Char('c')) => InputEvent::Quit,
            (_, KeyCode::Esc) => InputEvent::Quit,
            (KeyModifiers::NONE, KeyCode::Char('q')) => InputEvent::Quit,
            (KeyModifiers::NONE, KeyCode::Char('w' | 'k') | KeyCode::Up) => {
                InputEvent::KeyDown(Key::Up)
            }
            (KeyModifiers::NONE, KeyCode::Char('s' | 'j') | KeyCode::Down) => {
                InputEvent::KeyDown(Key::Down)
            }
            (KeyModifiers::NONE, KeyCode::Char('a' | 'h') | KeyCode::Left) => {
                InputEvent::KeyDown(Key::Left)
            }
            (KeyModifiers::NONE, KeyCode::Char('d' | 'l') | KeyCode::Right) => {
                InputEvent::KeyDown(Key::Right)
            }
            (KeyModifiers::NONE, KeyCode::Char('r')) => InputEvent::KeyDown(Key::Reset),
            _ => InputEvent::Other,
        }
    }
}

impl From<Event> for InputEvent {
    fn from(event: Event) -> InputEvent {
        match event {
            Event::Key(ev) => InputEvent::from_key_event(ev),
            _ => InputEvent::Other,
        }
    }
}

/// Somewhere player input comes from
pub(crate) trait InputSource {
    /// Wait up to `timeout` for input and return every event that is then
    /// available, oldest first.  Returns an empty `Vec` if nothing arrived in
    /// time.
    fn poll_events(&mut self, timeout: Duration) -> io::Result<Vec<InputEvent>>;
}

/// Input read from the terminal via crossterm
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) struct TerminalInput;

impl InputSource for TerminalInput {
    fn poll_events(&mut self, timeout: Duration) -> io::Result<Vec<InputEvent>> {
        let mut events = Vec::new();
        if poll(timeout)? {
            events.push(read()?.into());
            while poll(Duration::ZERO)? {
                events.push(read()?.into());
            }
        }
        Ok(events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;
    use rstest::rstest;

    #[rstest]
    #[case(KeyCode::Up, InputEvent::KeyDown(Key::Up))]
    #[case(KeyCode::Char('w'), InputEvent::KeyDown(Key::Up))]
    #[case(KeyCode::Down, InputEvent::KeyDown(Key::Down))]
    #[case(KeyCode::Char('s'), InputEvent::KeyDown(Key::Down))]
    #[case(KeyCode::Left, InputEvent::KeyDown(Key::Left))]
    #[case(KeyCode::Char('a'), InputEvent::KeyDown(Key::Left))]
    #[case(KeyCode::Right, InputEvent::KeyDown(Key::Right))]
    #[case(KeyCode::Char('d'), InputEvent::KeyDown(Key::Right))]
    #[case(KeyCode::Char('l'), InputEvent::KeyDown(Key::Right))]
    #[case(KeyCode::Char('r'), InputEvent::KeyDown(Key::Reset))]
    #[case(KeyCode::Esc, InputEvent::Quit)]
    #[case(KeyCode::Char('q'), InputEvent::Quit)]
    #[case(KeyCode::Char('x'), InputEvent::Other)]
    #[case(KeyCode::Enter, InputEvent::Other)]
    fn test_key_press(#[case] code: KeyCode, #[case] expected: InputEvent) {
        assert_eq!(InputEvent::from(Event::Key(code.into())), expected);
    }

    #[test]
    fn test_ctrl_c_quits() {
        let ev = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(InputEvent::from_key_event(ev), InputEvent::Quit);
    }

    #[test]
    fn test_modified_letters_ignored() {
        let ev = KeyEvent::new(KeyCode::Char('r'), KeyModifiers::CONTROL);
        assert_eq!(InputEvent::from_key_event(ev), InputEvent::Other);
    }

    #[test]
    fn test_release_is_key_up() {
        let ev = KeyEvent::new_with_kind_and_state(
            KeyCode::Up,
            KeyModifiers::NONE,
            KeyEventKind::Release,
            KeyEventState::NONE,
        );
        assert_eq!(InputEvent::from_key_event(ev), InputEvent::KeyUp);
    }

    #[test]
    fn test_non_key_events() {
        assert_eq!(InputEvent::from(Event::FocusLost), InputEvent::Other);
        assert_eq!(InputEvent::from(Event::Resize(80, 24)), InputEvent::Other);
    }
}
