// Login form state machine
//
//   Idle ──submit──▶ Validating ──invalid──▶ Idle (field errors set)
//                         │
//                         └──valid──▶ Submitting ──2xx──▶ LoggedIn
//                                          └──error──▶ Idle (banner set)
//
// Blur events validate a single field. The form never clears what the user
// typed, so a failed attempt can be resubmitted as is.

use crate::api::ApiError;
use crate::model::Credentials;
use crate::validation::{valid_email, valid_name};

pub const NAME_ERROR: &str = "Please provide your username.";
pub const EMAIL_ERROR: &str = "Please provide a valid email address.";
pub const LOGIN_ERROR: &str = "We encountered an error during login. Please try again later.";

/// Focusable parts of the form, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginField {
    #[default]
    Name,
    Email,
    Submit,
}

impl LoginField {
    pub fn next(self) -> Self {
        match self {
            LoginField::Name => LoginField::Email,
            LoginField::Email => LoginField::Submit,
            LoginField::Submit => LoginField::Name,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            LoginField::Name => LoginField::Submit,
            LoginField::Email => LoginField::Name,
            LoginField::Submit => LoginField::Email,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginPhase {
    #[default]
    Idle,
    Submitting,
    LoggedIn,
}

/// What the caller should do after a login response
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    /// Update the session with this name and go to the search view
    LoggedIn(String),
    /// Stay on the form; the banner is already set
    Failed,
}

#[derive(Debug, Default)]
pub struct LoginForm {
    pub name: String,
    pub email: String,
    pub name_error: bool,
    pub email_error: bool,
    /// Banner shown above the form after a failed attempt
    pub error_message: Option<&'static str>,
    pub focus: LoginField,
    pub phase: LoginPhase,
}

impl LoginForm {
    pub fn new() -> Self {
        Self::default()
    }

    fn focused_text(&mut self) -> Option<&mut String> {
        match self.focus {
            LoginField::Name => Some(&mut self.name),
            LoginField::Email => Some(&mut self.email),
            LoginField::Submit => None,
        }
    }

    pub fn insert_char(&mut self, c: char) {
        if let Some(text) = self.focused_text() {
            text.push(c);
        }
    }

    pub fn backspace(&mut self) {
        if let Some(text) = self.focused_text() {
            text.pop();
        }
    }

    /// Validate only the field being left
    pub fn blur(&mut self, field: LoginField) {
        match field {
            LoginField::Name => self.name_error = !valid_name(&self.name),
            LoginField::Email => self.email_error = !valid_email(&self.email),
            LoginField::Submit => {}
        }
    }

    /// Move focus forward, blurring the field we leave
    pub fn focus_next(&mut self) {
        self.blur(self.focus);
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.blur(self.focus);
        self.focus = self.focus.prev();
    }

    pub fn name_helper(&self) -> Option<&'static str> {
        self.name_error.then_some(NAME_ERROR)
    }

    pub fn email_helper(&self) -> Option<&'static str> {
        self.email_error.then_some(EMAIL_ERROR)
    }

    /// Validate both fields; on success enter `Submitting` and return the
    /// credentials to send. Returns `None` when nothing should be sent.
    pub fn submit(&mut self) -> Option<Credentials> {
        if self.phase == LoginPhase::Submitting {
            return None;
        }

        self.name_error = !valid_name(&self.name);
        self.email_error = !valid_email(&self.email);
        if self.name_error || self.email_error {
            return None;
        }

        self.phase = LoginPhase::Submitting;
        Some(Credentials {
            name: self.name.clone(),
            email: self.email.clone(),
        })
    }

    /// Apply the result of `POST /auth/login`
    pub fn finish(&mut self, result: Result<(), ApiError>) -> LoginOutcome {
        match result {
            Ok(()) => {
                self.phase = LoginPhase::LoggedIn;
                self.error_message = None;
                LoginOutcome::LoggedIn(self.name.clone())
            }
            Err(e) => {
                tracing::warn!("Login failed: {}", e);
                self.phase = LoginPhase::Idle;
                self.error_message = Some(LOGIN_ERROR);
                LoginOutcome::Failed
            }
        }
    }
}
