//! Outbound mail envelope.

use crate::domain::config::MailConfig;
use shared_types::ContactSubmission;

/// Subject used when the submission carries no topic.
const FALLBACK_TOPIC: &str = "New message";

/// Fixed addressing for every contact mail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailRouting {
    pub from_name: String,
    pub from_address: String,
    pub to_address: String,
}

impl From<&MailConfig> for MailRouting {
    fn from(config: &MailConfig) -> Self {
        Self {
            from_name: config.from_name.clone(),
            from_address: config.from_address.clone(),
            to_address: config.to_address.clone(),
        }
    }
}

/// One plain-text mail, ready for the relay.
///
/// Addresses are kept as strings; the relay parses them and reports a
/// compose failure for anything malformed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailEnvelope {
    pub from_name: String,
    pub from_address: String,
    pub to_address: String,
    /// The submitter, so a reply goes straight back to them
    pub reply_to: String,
    pub subject: String,
    pub body: String,
}

impl MailEnvelope {
    pub fn compose(submission: &ContactSubmission, routing: &MailRouting) -> Self {
        Self {
            from_name: routing.from_name.clone(),
            from_address: routing.from_address.clone(),
            to_address: routing.to_address.clone(),
            reply_to: submission.email.trim().to_string(),
            subject: subject_for(&submission.topic),
            body: body_for(submission),
        }
    }
}

fn subject_for(topic: &str) -> String {
    let topic = topic.trim();
    let topic = if topic.is_empty() { FALLBACK_TOPIC } else { topic };
    format!("[Contact] {topic}")
}

fn body_for(s: &ContactSubmission) -> String {
    format!(
        "First name: {}\nLast name: {}\nEmail: {}\nPhone: {} {}\n\nMessage:\n{}\n",
        s.first_name, s.last_name, s.email, s.country_code, s.phone, s.message
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn routing() -> MailRouting {
        MailRouting {
            from_name: "Accurate Machinery".into(),
            from_address: "noreply@accuratemachinery.com".into(),
            to_address: "sales@accuratemachinery.com".into(),
        }
    }

    fn submission() -> ContactSubmission {
        ContactSubmission {
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            country_code: "+44".into(),
            phone: "2071234567".into(),
            email: "ada@example.com".into(),
            topic: "Quote".into(),
            message: "Forty brackets.\nPowder coated.".into(),
            bot_check_token: "tok".into(),
        }
    }

    #[test]
    fn test_addressing() {
        let envelope = MailEnvelope::compose(&submission(), &routing());
        assert_eq!(envelope.from_name, "Accurate Machinery");
        assert_eq!(envelope.to_address, "sales@accuratemachinery.com");
        assert_eq!(envelope.reply_to, "ada@example.com");
    }

    #[test]
    fn test_subject_uses_topic() {
        let envelope = MailEnvelope::compose(&submission(), &routing());
        assert_eq!(envelope.subject, "[Contact] Quote");
    }

    #[test]
    fn test_subject_fallback_without_topic() {
        let mut s = submission();
        s.topic = String::new();
        assert_eq!(
            MailEnvelope::compose(&s, &routing()).subject,
            "[Contact] New message"
        );
    }

    #[test]
    fn test_body_layout() {
        let envelope = MailEnvelope::compose(&submission(), &routing());
        assert_eq!(
            envelope.body,
            "First name: Ada\n\
             Last name: Lovelace\n\
             Email: ada@example.com\n\
             Phone: +44 2071234567\n\
             \n\
             Message:\n\
             Forty brackets.\nPowder coated.\n"
        );
    }
}
