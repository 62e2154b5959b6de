use std::collections::{HashMap, VecDeque};
use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputEvent {
    Key(char),
    Resize(u16, u16),
    /// Ctrl-C.
    Interrupt,
    Other,
}

/// Blocking source of input events.
pub trait InputSource {
    fn next_event(&mut self) -> io::Result<InputEvent>;
}

/// Reads the terminal through crossterm. Only key presses are reported;
/// repeats and releases come through as `Other`.
pub struct CrosstermInput;

impl InputSource for CrosstermInput {
    fn next_event(&mut self) -> io::Result<InputEvent> {
        let event = match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    InputEvent::Interrupt
                }
                KeyCode::Char(ch)
                    if !key
                        .modifiers
                        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
                {
                    InputEvent::Key(ch)
                }
                _ => InputEvent::Other,
            },
            Event::Resize(w, h) => InputEvent::Resize(w, h),
            _ => InputEvent::Other,
        };
        Ok(event)
    }
}

/// Replays a fixed sequence of events; reports end of input once drained.
#[derive(Debug, Default)]
pub struct ScriptedInput {
    events: VecDeque<InputEvent>,
}

impl ScriptedInput {
    pub fn new(events: impl IntoIterator<Item = InputEvent>) -> Self {
        Self {
            events: events.into_iter().collect(),
        }
    }

    pub fn keys(keys: &str) -> Self {
        Self::new(keys.chars().map(InputEvent::Key))
    }

    pub fn remaining(&self) -> usize {
        self.events.len()
    }
}

impl InputSource for ScriptedInput {
    fn next_event(&mut self) -> io::Result<InputEvent> {
        self.events
            .pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "input script exhausted"))
    }
}

/// Outcome of one `wait_for_event` call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dispatch {
    Handled(char),
    Ignored,
    Resized(u16, u16),
    Interrupted,
}

type KeypressHandler<S> = Box<dyn FnMut(&mut S)>;

/// Maps single keystrokes to handlers over some state `S`.
pub struct EventListener<S, I> {
    input: I,
    handlers: HashMap<char, KeypressHandler<S>>,
}

impl<S, I: InputSource> EventListener<S, I> {
    pub fn new(input: I) -> Self {
        Self {
            input,
            handlers: HashMap::new(),
        }
    }

    /// Registering a key again replaces its handler.
    pub fn register_keypress_handler(&mut self, key: char, handler: impl FnMut(&mut S) + 'static) {
        if self.handlers.insert(key, Box::new(handler)).is_some() {
            log::debug!("replaced keypress handler for {key:?}");
        }
    }

    /// Block until one event arrives and run its handler, if any.
    pub fn wait_for_event(&mut self, state: &mut S) -> io::Result<Dispatch> {
        let dispatch = match self.input.next_event()? {
            InputEvent::Key(key) => match self.handlers.get_mut(&key) {
                Some(handler) => {
                    handler(state);
                    Dispatch::Handled(key)
                }
                None => {
                    log::trace!("no handler for key {key:?}");
                    Dispatch::Ignored
                }
            },
            InputEvent::Resize(w, h) => Dispatch::Resized(w, h),
            InputEvent::Interrupt => Dispatch::Interrupted,
            InputEvent::Other => Dispatch::Ignored,
        };
        Ok(dispatch)
    }

    pub fn input(&self) -> &I {
        &self.input
    }
}
