//! State owned by an interactive shell: the two inputs, the last generated
//! link and a transient notification.

use std::fmt::Display;
use std::time::{Duration, Instant};

use crate::domain::{build_link, normalize_phone_with, GeneratedLink, PhonePolicy, ShareRequest};
use crate::error::CoreError;

pub const DEFAULT_TOAST_MS: u64 = 3000;
pub const DEFAULT_COPIED_MS: u64 = 2000;

const EMPTY_PHONE_MESSAGE: &str = "Please enter a phone number";
const COPIED_MESSAGE: &str = "Link copied to clipboard";
const SHARED_MESSAGE: &str = "Link shared";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timings {
    pub toast: Duration,
    pub copied_flash: Duration,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            toast: Duration::from_millis(DEFAULT_TOAST_MS),
            copied_flash: Duration::from_millis(DEFAULT_COPIED_MS),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
    expires_at: Instant,
}

impl Notification {
    pub fn is_error(&self) -> bool {
        self.kind == NotificationKind::Error
    }
}

#[derive(Debug, Clone)]
pub struct FormState {
    pub phone: String,
    pub message: String,
    result: Option<GeneratedLink>,
    notification: Option<Notification>,
    copied_until: Option<Instant>,
    policy: PhonePolicy,
    timings: Timings,
}

impl Default for FormState {
    fn default() -> Self {
        Self::new(PhonePolicy::default(), Timings::default())
    }
}

impl FormState {
    pub fn new(policy: PhonePolicy, timings: Timings) -> Self {
        Self {
            phone: String::new(),
            message: String::new(),
            result: None,
            notification: None,
            copied_until: None,
            policy,
            timings,
        }
    }

    pub fn policy(&self) -> &PhonePolicy {
        &self.policy
    }

    pub fn result(&self) -> Option<&GeneratedLink> {
        self.result.as_ref()
    }

    pub fn is_result_active(&self) -> bool {
        self.result.is_some()
    }

    pub fn notification(&self) -> Option<&Notification> {
        self.notification.as_ref()
    }

    pub fn is_copied(&self) -> bool {
        self.copied_until.is_some()
    }

    /// Normalizes the phone field and replaces the current result. On an
    /// empty phone the previous result is kept and an error is shown.
    pub fn submit(&mut self, now: Instant) -> Result<&GeneratedLink, CoreError> {
        let phone = match normalize_phone_with(&self.phone, &self.policy) {
            Ok(phone) => phone,
            Err(err) => {
                self.notify(EMPTY_PHONE_MESSAGE, NotificationKind::Error, now);
                return Err(err);
            }
        };
        let link = build_link(&phone, &self.message);
        self.copied_until = None;
        Ok(self.result.insert(link))
    }

    pub fn reset(&mut self) {
        self.phone.clear();
        self.message.clear();
        self.result = None;
        self.copied_until = None;
    }

    pub fn share_request(&self) -> Option<ShareRequest> {
        self.result.as_ref().map(ShareRequest::for_link)
    }

    pub fn record_copy<E: Display>(&mut self, outcome: Result<(), E>, now: Instant) {
        if self.result.is_none() {
            return;
        }
        match outcome {
            Ok(()) => {
                self.notify(COPIED_MESSAGE, NotificationKind::Success, now);
                self.copied_until = Some(now + self.timings.copied_flash);
            }
            Err(err) => {
                self.notify(format!("Copy failed: {err}"), NotificationKind::Error, now);
            }
        }
    }

    pub fn record_share<E: Display>(&mut self, outcome: Result<(), E>, now: Instant) {
        if self.result.is_none() {
            return;
        }
        match outcome {
            Ok(()) => self.notify(SHARED_MESSAGE, NotificationKind::Success, now),
            Err(err) => self.notify(format!("Share failed: {err}"), NotificationKind::Error, now),
        }
    }

    pub fn tick(&mut self, now: Instant) {
        if self
            .notification
            .as_ref()
            .is_some_and(|notification| now >= notification.expires_at)
        {
            self.notification = None;
        }
        if self.copied_until.is_some_and(|until| now >= until) {
            self.copied_until = None;
        }
    }

    fn notify(&mut self, message: impl Into<String>, kind: NotificationKind, now: Instant) {
        self.notification = Some(Notification {
            message: message.into(),
            kind,
            expires_at: now + self.timings.toast,
        });
    }
}
