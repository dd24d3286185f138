use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A contact form submission. Also the shape persisted to local storage as
/// the in-progress draft.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("Please fill in the {0} field")]
    Empty(&'static str),
    #[error("That doesn't look like an email address")]
    InvalidEmail,
}

impl ContactMessage {
    pub fn is_empty(&self) -> bool {
        self.name.is_empty()
            && self.email.is_empty()
            && self.subject.is_empty()
            && self.message.is_empty()
    }

    pub fn validate(&self) -> Result<(), FormError> {
        for (field, value) in [
            ("name", &self.name),
            ("email", &self.email),
            ("subject", &self.subject),
            ("message", &self.message),
        ] {
            if value.trim().is_empty() {
                return Err(FormError::Empty(field));
            }
        }
        if !looks_like_email(&self.email) {
            return Err(FormError::InvalidEmail);
        }
        Ok(())
    }
}

// Shape check only (something@something.something) - real address
// verification belongs to whatever backend eventually receives the form.
fn looks_like_email(s: &str) -> bool {
    let s = s.trim();
    let Some((local, domain)) = s.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

/// Lifecycle of the simulated submission.
///
/// There is no transport behind this: a valid submit enters `Sending`,
/// dwells, shows `Sent`, dwells, and returns to `Idle`. The dwells are the
/// only thing a driver needs; cancellation mid-dwell (unmount) just stops
/// the cycle wherever it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendPhase {
    Idle,
    Sending,
    Sent,
}

impl SendPhase {
    pub const SENDING_MS: u64 = 1500;
    pub const SENT_MS: u64 = 3000;

    /// How long this phase lasts before advancing, if it advances at all.
    pub fn dwell_ms(self) -> Option<u64> {
        match self {
            Self::Idle => None,
            Self::Sending => Some(Self::SENDING_MS),
            Self::Sent => Some(Self::SENT_MS),
        }
    }

    pub fn advance(self) -> Self {
        match self {
            Self::Idle => Self::Idle,
            Self::Sending => Self::Sent,
            Self::Sent => Self::Idle,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_message() -> ContactMessage {
        ContactMessage {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            subject: "Project inquiry".to_string(),
            message: "Let's build something.".to_string(),
        }
    }

    #[test]
    fn valid_message_passes() {
        assert_eq!(valid_message().validate(), Ok(()));
    }

    #[test]
    fn empty_fields_are_rejected_in_order() {
        let mut msg = valid_message();
        msg.name.clear();
        assert_eq!(msg.validate(), Err(FormError::Empty("name")));

        let mut msg = valid_message();
        msg.message = "   ".to_string();
        assert_eq!(msg.validate(), Err(FormError::Empty("message")));
    }

    #[test]
    fn email_shape_is_checked() {
        for bad in ["plainaddress", "missing@tld", "@nolocal.com", "two@@ats.com", "dot@.com"] {
            let mut msg = valid_message();
            msg.email = bad.to_string();
            assert_eq!(msg.validate(), Err(FormError::InvalidEmail), "{bad}");
        }
        let mut msg = valid_message();
        msg.email = "user@sub.example.co".to_string();
        assert_eq!(msg.validate(), Ok(()));
    }

    #[test]
    fn default_draft_is_empty() {
        assert!(ContactMessage::default().is_empty());
        assert!(!valid_message().is_empty());
    }

    #[test]
    fn send_cycle_returns_to_idle() {
        let mut phase = SendPhase::Sending;
        assert_eq!(phase.dwell_ms(), Some(SendPhase::SENDING_MS));
        phase = phase.advance();
        assert_eq!(phase, SendPhase::Sent);
        assert_eq!(phase.dwell_ms(), Some(SendPhase::SENT_MS));
        phase = phase.advance();
        assert_eq!(phase, SendPhase::Idle);
        assert_eq!(phase.dwell_ms(), None);
    }
}
