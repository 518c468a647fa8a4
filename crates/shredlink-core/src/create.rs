//! Creation page controller: form normalization and the
//! compose/submit/result state machine.

use shredlink_api::{ApiError, CreateRequest};
use thiserror::Error;

use crate::i18n::{tr, Lang, Text};

/// Expiry choices offered by the compose form, in display order.
/// The first entry is the selector's default.
pub const EXPIRE_OPTIONS: &[(u32, Text)] = &[
    (10, Text::Expire10m),
    (30, Text::Expire30m),
    (60, Text::Expire1h),
    (120, Text::Expire2h),
    (180, Text::Expire3h),
    (1440, Text::Expire1d),
];

/// Raw value of the expiry selector's first option.
pub const DEFAULT_EXPIRE: &str = "10";

/// Raw form input, exactly as the user typed it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CreateForm {
    pub text: String,
    pub password: String,
    pub expire: String,
    pub one_time_view: bool,
    pub one_time_password: bool,
}

impl CreateForm {
    /// Validate and normalize into the wire request.
    ///
    /// Trims the text and rejects if nothing is left; an empty password
    /// becomes `None`; the expiry string becomes a positive minute count or
    /// `None` (zero, negative-looking, and non-numeric input all normalize
    /// to `None`).
    pub fn normalize(&self) -> Result<CreateRequest, CreateError> {
        let text = self.text.trim();
        if text.is_empty() {
            return Err(CreateError::Required);
        }

        Ok(CreateRequest {
            text: text.to_string(),
            password: if self.password.is_empty() {
                None
            } else {
                Some(self.password.clone())
            },
            expire_minutes: self.expire.parse::<u32>().ok().filter(|minutes| *minutes > 0),
            expire_hours: None,
            one_time_view: self.one_time_view,
            one_time_password: self.one_time_password,
        })
    }
}

/// What went wrong with a creation attempt, from the user's point of view.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CreateError {
    #[error("text is required")]
    Required,
    /// The server rejected the request with its own message; shown verbatim.
    #[error("{0}")]
    Server(String),
    /// The server rejected the request without a usable message.
    #[error("creation failed")]
    Generic,
    #[error("network error")]
    Network,
}

impl CreateError {
    pub fn from_api(error: &ApiError) -> Self {
        match error {
            ApiError::Rejected { message, .. } => CreateError::Server(message.clone()),
            ApiError::Status(_) => CreateError::Generic,
            ApiError::Transport(_) => CreateError::Network,
        }
    }

    /// The message to display, localized except for verbatim server text.
    pub fn message(&self, lang: Lang) -> String {
        match self {
            CreateError::Required => tr(lang, Text::ErrorRequired).to_string(),
            CreateError::Server(message) => message.clone(),
            CreateError::Generic => tr(lang, Text::ErrorGeneric).to_string(),
            CreateError::Network => tr(lang, Text::ErrorNetwork).to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreateState {
    Composing { error: Option<CreateError> },
    Submitting,
    ResultShown { url: String },
}

/// State machine for the creation page.
///
/// Only one attempt may be in flight at a time (`begin` refuses while
/// `Submitting`), and each attempt carries a generation number so a response
/// that arrives after the attempt was superseded is dropped instead of
/// flipping the state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateFlow {
    state: CreateState,
    generation: u64,
}

impl CreateFlow {
    pub fn new() -> Self {
        Self {
            state: CreateState::Composing { error: None },
            generation: 0,
        }
    }

    pub fn state(&self) -> &CreateState {
        &self.state
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.state, CreateState::Submitting)
    }

    /// Start an attempt. Clears any previous banner and disables further
    /// submissions until the attempt resolves. Returns the generation to
    /// resolve with, or `None` if an attempt is already running or a result
    /// is being shown.
    pub fn begin(&mut self) -> Option<u64> {
        match self.state {
            CreateState::Composing { .. } => {
                self.generation += 1;
                self.state = CreateState::Submitting;
                Some(self.generation)
            }
            _ => None,
        }
    }

    /// Resolve an attempt with a failure (local validation or remote).
    /// Returns to `Composing` with the error shown; stale generations are
    /// ignored.
    pub fn fail(&mut self, generation: u64, error: CreateError) -> bool {
        if generation != self.generation || !self.is_submitting() {
            return false;
        }
        self.state = CreateState::Composing { error: Some(error) };
        true
    }

    /// Resolve an attempt with the created link.
    pub fn succeed(&mut self, generation: u64, url: String) -> bool {
        if generation != self.generation || !self.is_submitting() {
            return false;
        }
        self.state = CreateState::ResultShown { url };
        true
    }

    /// "Create another": back to a pristine compose view.
    pub fn reset(&mut self) {
        self.state = CreateState::Composing { error: None };
    }
}

impl Default for CreateFlow {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(text: &str, password: &str, expire: &str) -> CreateForm {
        CreateForm {
            text: text.to_string(),
            password: password.to_string(),
            expire: expire.to_string(),
            one_time_view: false,
            one_time_password: false,
        }
    }

    #[test]
    fn test_empty_text_is_rejected_locally() {
        assert_eq!(form("", "", "10").normalize(), Err(CreateError::Required));
        assert_eq!(
            form("   \n\t", "", "10").normalize(),
            Err(CreateError::Required)
        );
    }

    #[test]
    fn test_normalization_scenario() {
        // text "hello", empty password, expiry "0", both checkboxes off
        let request = form("hello", "", "0").normalize().unwrap();
        assert_eq!(request.text, "hello");
        assert_eq!(request.password, None);
        assert_eq!(request.expire_minutes, None);
        assert_eq!(request.expire_hours, None);
        assert!(!request.one_time_view);
        assert!(!request.one_time_password);
    }

    #[test]
    fn test_text_is_trimmed() {
        let request = form("  hello world  ", "", "10").normalize().unwrap();
        assert_eq!(request.text, "hello world");
    }

    #[test]
    fn test_expire_normalization() {
        assert_eq!(form("x", "", "10").normalize().unwrap().expire_minutes, Some(10));
        assert_eq!(form("x", "", "1440").normalize().unwrap().expire_minutes, Some(1440));
        assert_eq!(form("x", "", "0").normalize().unwrap().expire_minutes, None);
        assert_eq!(form("x", "", "-5").normalize().unwrap().expire_minutes, None);
        assert_eq!(form("x", "", "soon").normalize().unwrap().expire_minutes, None);
        assert_eq!(form("x", "", "").normalize().unwrap().expire_minutes, None);
    }

    #[test]
    fn test_password_empty_becomes_none() {
        assert_eq!(form("x", "", "10").normalize().unwrap().password, None);
        assert_eq!(
            form("x", "pw", "10").normalize().unwrap().password,
            Some("pw".to_string())
        );
    }

    #[test]
    fn test_flow_happy_path() {
        let mut flow = CreateFlow::new();
        assert_eq!(flow.state(), &CreateState::Composing { error: None });

        let generation = flow.begin().unwrap();
        assert!(flow.is_submitting());
        // No concurrent attempt while one is in flight.
        assert_eq!(flow.begin(), None);

        assert!(flow.succeed(generation, "http://x/s/abc".to_string()));
        assert_eq!(
            flow.state(),
            &CreateState::ResultShown {
                url: "http://x/s/abc".to_string()
            }
        );
        // Terminal until reset.
        assert_eq!(flow.begin(), None);

        flow.reset();
        assert_eq!(flow.state(), &CreateState::Composing { error: None });
    }

    #[test]
    fn test_flow_failure_reenables_submission() {
        let mut flow = CreateFlow::new();
        let generation = flow.begin().unwrap();
        assert!(flow.fail(generation, CreateError::Network));
        assert_eq!(
            flow.state(),
            &CreateState::Composing {
                error: Some(CreateError::Network)
            }
        );

        // A new attempt clears the banner.
        flow.begin().unwrap();
        assert!(flow.is_submitting());
    }

    #[test]
    fn test_stale_response_is_dropped() {
        let mut flow = CreateFlow::new();
        let first = flow.begin().unwrap();
        assert!(flow.fail(first, CreateError::Network));

        let second = flow.begin().unwrap();
        // The first attempt's success straggles in after a retry started.
        assert!(!flow.succeed(first, "http://stale".to_string()));
        assert!(flow.is_submitting());

        assert!(flow.succeed(second, "http://fresh".to_string()));
        assert_eq!(
            flow.state(),
            &CreateState::ResultShown {
                url: "http://fresh".to_string()
            }
        );
    }

    #[test]
    fn test_error_messages_localized() {
        assert_eq!(
            CreateError::Required.message(Lang::En),
            "Please enter some text."
        );
        assert_eq!(
            CreateError::Server("quota exceeded".to_string()).message(Lang::Fa),
            "quota exceeded"
        );
        assert_eq!(
            CreateError::Network.message(Lang::Fa),
            "خطای شبکه. اتصال را بررسی کنید."
        );
    }

    #[test]
    fn test_expire_options_start_with_default() {
        assert_eq!(EXPIRE_OPTIONS[0].0.to_string(), DEFAULT_EXPIRE);
    }
}
