use std::collections::VecDeque;
use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use waclick_core::domain::QrOptions;
use waclick_core::form::FormState;
use waclick_platform::qr::render_terminal;

use crate::actions::Action;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Phone,
    Message,
    Generate,
    Reset,
}

impl Focus {
    const ORDER: [Focus; 4] = [Focus::Phone, Focus::Message, Focus::Generate, Focus::Reset];

    fn index(self) -> usize {
        Self::ORDER
            .iter()
            .position(|focus| *focus == self)
            .unwrap_or(0)
    }

    fn next(self) -> Self {
        Self::ORDER[(self.index() + 1) % Self::ORDER.len()]
    }

    fn prev(self) -> Self {
        let len = Self::ORDER.len();
        Self::ORDER[(self.index() + len - 1) % len]
    }
}

#[derive(Debug, Clone)]
pub struct App {
    pub form: FormState,
    pub focus: Focus,
    pub show_help: bool,
    pub should_quit: bool,
    pub qr: Option<String>,
    pub qr_error: Option<String>,
    qr_options: QrOptions,
    actions: VecDeque<Action>,
}

impl App {
    pub fn new(form: FormState, qr_options: QrOptions) -> Self {
        Self {
            form,
            focus: Focus::Phone,
            show_help: false,
            should_quit: false,
            qr: None,
            qr_error: None,
            qr_options,
            actions: VecDeque::new(),
        }
    }

    pub fn enqueue(&mut self, action: Action) {
        self.actions.push_back(action);
    }

    pub fn next_action(&mut self) -> Option<Action> {
        self.actions.pop_front()
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press && key.kind != KeyEventKind::Repeat {
            return;
        }

        if self.show_help {
            if matches!(key.code, KeyCode::F(1) | KeyCode::Esc) {
                self.show_help = false;
            }
            return;
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') if ctrl => self.should_quit = true,
            KeyCode::Esc => self.should_quit = true,
            KeyCode::F(1) => self.show_help = true,
            KeyCode::Char('y') if ctrl => self.enqueue(Action::Copy),
            KeyCode::Char('s') if ctrl => self.enqueue(Action::Share),
            KeyCode::Char('r') if ctrl => self.reset(),
            KeyCode::Tab => self.focus = self.focus.next(),
            KeyCode::BackTab => self.focus = self.focus.prev(),
            KeyCode::Enter => match self.focus {
                Focus::Phone | Focus::Generate => self.submit(),
                Focus::Message => self.form.message.push('\n'),
                Focus::Reset => self.reset(),
            },
            _ => {
                if let Some(target) = self.active_field_mut() {
                    apply_text_input(target, key);
                }
            }
        }
    }

    fn active_field_mut(&mut self) -> Option<&mut String> {
        match self.focus {
            Focus::Phone => Some(&mut self.form.phone),
            Focus::Message => Some(&mut self.form.message),
            Focus::Generate | Focus::Reset => None,
        }
    }

    fn submit(&mut self) {
        let url = match self.form.submit(Instant::now()) {
            Ok(link) => link.as_str().to_string(),
            Err(_) => return,
        };
        match render_terminal(&url, &self.qr_options) {
            Ok(qr) => {
                self.qr = Some(qr);
                self.qr_error = None;
            }
            Err(err) => {
                self.qr = None;
                self.qr_error = Some(err.to_string());
            }
        }
    }

    fn reset(&mut self) {
        self.form.reset();
        self.qr = None;
        self.qr_error = None;
        self.focus = Focus::Phone;
    }
}

fn apply_text_input(target: &mut String, key: KeyEvent) {
    match key.code {
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            target.clear();
        }
        KeyCode::Char('w') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            delete_last_word(target);
        }
        KeyCode::Char(ch) => {
            if !key.modifiers.contains(KeyModifiers::CONTROL) {
                target.push(ch);
            }
        }
        KeyCode::Backspace => {
            target.pop();
        }
        _ => {}
    }
}

fn delete_last_word(value: &mut String) {
    while value.ends_with(|ch: char| ch.is_whitespace()) {
        value.pop();
    }
    while value.ends_with(|ch: char| !ch.is_whitespace()) {
        value.pop();
    }
}
