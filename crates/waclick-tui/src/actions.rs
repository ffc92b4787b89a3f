use std::time::Instant;

use waclick_core::domain::ShareRequest;
use waclick_platform::clipboard::{system_clipboard, Clipboard};
use waclick_platform::opener::{Sharer, SystemOpener};
use waclick_platform::{PlatformError, Result};

use crate::app::App;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Copy,
    Share,
}

/// Clipboard and share targets. The system clipboard is opened on first
/// use so a headless session can still generate links.
pub struct Platform {
    clipboard: Option<Box<dyn Clipboard>>,
    sharer: Box<dyn Sharer>,
}

impl Platform {
    pub fn system() -> Self {
        Self {
            clipboard: None,
            sharer: Box::new(SystemOpener),
        }
    }

    #[cfg(test)]
    pub fn with(clipboard: Box<dyn Clipboard>, sharer: Box<dyn Sharer>) -> Self {
        Self {
            clipboard: Some(clipboard),
            sharer,
        }
    }

    fn copy(&mut self, text: &str) -> Result<()> {
        if self.clipboard.is_none() {
            self.clipboard = Some(system_clipboard()?);
        }
        let clipboard = self
            .clipboard
            .as_mut()
            .ok_or_else(|| PlatformError::Unavailable("clipboard".to_string()))?;
        clipboard.set_text(text)
    }

    fn share(&self, request: &ShareRequest) -> Result<()> {
        self.sharer.share(request)
    }
}

pub fn execute_action(app: &mut App, platform: &mut Platform, action: Action) {
    match action {
        Action::Copy => {
            let Some(url) = app.form.result().map(|link| link.as_str().to_string()) else {
                return;
            };
            let outcome = platform.copy(&url);
            app.form.record_copy(outcome, Instant::now());
        }
        Action::Share => {
            let Some(request) = app.form.share_request() else {
                return;
            };
            let outcome = platform.share(&request);
            app.form.record_share(outcome, Instant::now());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{execute_action, Action, Platform};
    use crate::app::App;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use waclick_core::domain::{QrOptions, ShareRequest};
    use waclick_core::form::{FormState, NotificationKind};
    use waclick_platform::clipboard::{Clipboard, MemoryClipboard};
    use waclick_platform::opener::Sharer;
    use waclick_platform::{PlatformError, Result};

    struct BrokenClipboard;

    impl Clipboard for BrokenClipboard {
        fn set_text(&mut self, _text: &str) -> Result<()> {
            Err(PlatformError::Clipboard("no display".to_string()))
        }
    }

    struct NoShare;

    impl Sharer for NoShare {
        fn share(&self, _request: &ShareRequest) -> Result<()> {
            Err(PlatformError::Unavailable("xdg-open not found".to_string()))
        }
    }

    fn app_with_link() -> App {
        let mut app = App::new(FormState::default(), QrOptions::default());
        for ch in "0501234567".chars() {
            app.handle_key(KeyEvent::new(KeyCode::Char(ch), KeyModifiers::NONE));
        }
        app.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
        assert!(app.form.result().is_some());
        app
    }

    #[test]
    fn copy_marks_link_copied() {
        let mut app = app_with_link();
        let mut platform = Platform::with(Box::new(MemoryClipboard::default()), Box::new(NoShare));
        execute_action(&mut app, &mut platform, Action::Copy);
        assert!(app.form.is_copied());
        assert_eq!(
            app.form.notification().map(|n| n.kind),
            Some(NotificationKind::Success)
        );
    }

    #[test]
    fn copy_failure_reports_error_and_keeps_link() {
        let mut app = app_with_link();
        let mut platform = Platform::with(Box::new(BrokenClipboard), Box::new(NoShare));
        execute_action(&mut app, &mut platform, Action::Copy);
        assert!(!app.form.is_copied());
        assert!(app.form.result().is_some());
        let notification = app.form.notification().expect("notification");
        assert!(notification.is_error());
        assert!(notification.message.contains("no display"));
    }

    #[test]
    fn share_failure_reports_error() {
        let mut app = app_with_link();
        let mut platform = Platform::with(Box::new(MemoryClipboard::default()), Box::new(NoShare));
        execute_action(&mut app, &mut platform, Action::Share);
        let notification = app.form.notification().expect("notification");
        assert!(notification.is_error());
        assert_eq!(
            app.form.result().map(|link| link.as_str()),
            Some("https://wa.me/972501234567")
        );
    }

    #[test]
    fn actions_without_link_do_nothing() {
        let mut app = App::new(FormState::default(), QrOptions::default());
        let mut platform = Platform::with(Box::new(BrokenClipboard), Box::new(NoShare));
        execute_action(&mut app, &mut platform, Action::Copy);
        execute_action(&mut app, &mut platform, Action::Share);
        assert!(app.form.notification().is_none());
    }
}
