//! Unlock page controller: the locked/verifying/unlocked state machine.

use shredlink_api::ApiError;
use thiserror::Error;

use crate::i18n::{tr, Lang, Text};

/// What a failed unlock attempt shows. Server-supplied messages are
/// deliberately not displayed here: every rejection (bad password, expired
/// link, anything else) collapses into the fixed wrong-password string so
/// the page never leaks server internals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum UnlockError {
    #[error("wrong password")]
    WrongPassword,
    #[error("network error")]
    Network,
}

impl UnlockError {
    pub fn from_api(error: &ApiError) -> Self {
        match error {
            ApiError::Rejected { .. } | ApiError::Status(_) => UnlockError::WrongPassword,
            ApiError::Transport(_) => UnlockError::Network,
        }
    }

    pub fn message(self, lang: Lang) -> &'static str {
        match self {
            UnlockError::WrongPassword => tr(lang, Text::WrongPassword),
            UnlockError::Network => tr(lang, Text::UnlockNetwork),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnlockState {
    Locked { error: Option<UnlockError> },
    Verifying,
    Unlocked { text: String },
}

/// State machine for the unlock page.
///
/// `Unlocked` is terminal for the page view: once the secret is revealed the
/// form is gone and no further attempt can start. While `Verifying`, a second
/// submit is refused, and responses from superseded attempts are dropped via
/// the generation counter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnlockFlow {
    state: UnlockState,
    generation: u64,
}

impl UnlockFlow {
    pub fn new() -> Self {
        Self {
            state: UnlockState::Locked { error: None },
            generation: 0,
        }
    }

    pub fn state(&self) -> &UnlockState {
        &self.state
    }

    pub fn is_verifying(&self) -> bool {
        matches!(self.state, UnlockState::Verifying)
    }

    /// The revealed secret, if any.
    pub fn revealed(&self) -> Option<&str> {
        match &self.state {
            UnlockState::Unlocked { text } => Some(text),
            _ => None,
        }
    }

    /// Start an attempt; clears any visible error. Refused while an attempt
    /// is in flight and forever after a successful reveal.
    pub fn begin(&mut self) -> Option<u64> {
        match self.state {
            UnlockState::Locked { .. } => {
                self.generation += 1;
                self.state = UnlockState::Verifying;
                Some(self.generation)
            }
            _ => None,
        }
    }

    /// Resolve the current attempt with a failure; the form stays usable for
    /// another try. Stale generations are ignored.
    pub fn fail(&mut self, generation: u64, error: UnlockError) -> bool {
        if generation != self.generation || !self.is_verifying() {
            return false;
        }
        self.state = UnlockState::Locked { error: Some(error) };
        true
    }

    /// Resolve the current attempt with the revealed secret. The text is
    /// stored as-is; rendering it without reinterpretation is the view's
    /// contract.
    pub fn succeed(&mut self, generation: u64, text: String) -> bool {
        if generation != self.generation || !self.is_verifying() {
            return false;
        }
        self.state = UnlockState::Unlocked { text };
        true
    }
}

impl Default for UnlockFlow {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrong_password_keeps_form_usable() {
        let mut flow = UnlockFlow::new();
        let generation = flow.begin().unwrap();
        assert!(flow.is_verifying());

        assert!(flow.fail(generation, UnlockError::WrongPassword));
        assert_eq!(
            flow.state(),
            &UnlockState::Locked {
                error: Some(UnlockError::WrongPassword)
            }
        );

        // Retry is allowed and clears the error.
        let retry = flow.begin().unwrap();
        assert!(retry > generation);
        assert!(flow.is_verifying());
    }

    #[test]
    fn test_unlocked_is_terminal() {
        let mut flow = UnlockFlow::new();
        let generation = flow.begin().unwrap();
        assert!(flow.succeed(generation, "the secret".to_string()));
        assert_eq!(flow.revealed(), Some("the secret"));

        assert_eq!(flow.begin(), None);
        assert!(!flow.fail(generation, UnlockError::Network));
        assert!(!flow.succeed(generation, "other".to_string()));
        assert_eq!(flow.revealed(), Some("the secret"));
    }

    #[test]
    fn test_no_concurrent_attempts() {
        let mut flow = UnlockFlow::new();
        flow.begin().unwrap();
        assert_eq!(flow.begin(), None);
    }

    #[test]
    fn test_stale_response_is_dropped() {
        let mut flow = UnlockFlow::new();
        let first = flow.begin().unwrap();
        assert!(flow.fail(first, UnlockError::Network));

        let second = flow.begin().unwrap();
        assert!(!flow.succeed(first, "stale".to_string()));
        assert!(flow.is_verifying());
        assert!(flow.succeed(second, "fresh".to_string()));
        assert_eq!(flow.revealed(), Some("fresh"));
    }

    #[test]
    fn test_secret_text_passes_through_unchanged() {
        let hostile = "<script>evil()</script>\n&\"'\u{200f}";
        let mut flow = UnlockFlow::new();
        let generation = flow.begin().unwrap();
        assert!(flow.succeed(generation, hostile.to_string()));
        assert_eq!(flow.revealed(), Some(hostile));
    }

    #[test]
    fn test_rejections_map_to_fixed_wrong_password() {
        // HTTP 401 with a server message: the message is not surfaced.
        let rejected = ApiError::Rejected {
            status: 401,
            message: "bad".to_string(),
        };
        assert_eq!(UnlockError::from_api(&rejected), UnlockError::WrongPassword);
        assert_eq!(
            UnlockError::from_api(&rejected).message(Lang::En),
            "Wrong password"
        );

        let opaque = ApiError::Status(500);
        assert_eq!(UnlockError::from_api(&opaque), UnlockError::WrongPassword);
    }

    #[test]
    fn test_error_messages_localized() {
        assert_eq!(UnlockError::Network.message(Lang::En), "Network error");
        assert_eq!(UnlockError::Network.message(Lang::Fa), "خطای شبکه");
        assert_eq!(UnlockError::WrongPassword.message(Lang::Fa), "رمز اشتباه");
    }
}
