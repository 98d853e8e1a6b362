//! # Contact Flow (in process)
//!
//! The Submission Client talks to the real endpoint router through
//! [`RouterTransport`]; only the verifier and relay are doubles.

#[cfg(test)]
mod tests {
    use super::super::fixtures::*;
    use am_01_notifications::{NotificationCenter, NotificationKind};
    use am_02_contact_form::{ContactForm, Field};
    use am_03_submission_client::{StaticTokenProvider, SubmissionClient, SubmissionError};
    use std::sync::Arc;

    struct Harness {
        client: SubmissionClient,
        verifier: Arc<FixedScoreVerifier>,
        relay: Arc<RecordingRelay>,
    }

    fn harness(score: f64, relay: RecordingRelay, token: &str) -> Harness {
        let verifier = Arc::new(FixedScoreVerifier::new(score));
        let relay = Arc::new(relay);
        let service = endpoint(verifier.clone(), relay.clone()).unwrap();

        let client = SubmissionClient::new(
            Arc::new(StaticTokenProvider::new(token)),
            Arc::new(RouterTransport::new(service.router())),
            NotificationCenter::default(),
        );
        fill_form(&client);

        Harness {
            client,
            verifier,
            relay,
        }
    }

    fn single_notification(client: &SubmissionClient) -> (NotificationKind, String) {
        let live = client.notifications().notifications();
        assert_eq!(live.len(), 1, "exactly one notification per attempt: {live:?}");
        (live[0].kind, live[0].text.clone())
    }

    // =============================================================================
    // SUCCESS
    // =============================================================================

    #[tokio::test]
    async fn test_valid_submission_sends_mail_and_resets_form() {
        let h = harness(0.7, RecordingRelay::default(), "tok-123");

        h.client.submit().await.unwrap();

        assert_eq!(
            single_notification(&h.client),
            (NotificationKind::Success, "Message sent successfully.".into())
        );
        assert_eq!(h.client.form(), ContactForm::new());
        assert!(!h.client.is_sending());

        let sent = h.relay.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].subject, "[Contact] Quote");
        assert_eq!(sent[0].reply_to, "ada@example.com");
        assert!(sent[0].body.starts_with("First name: Ada\nLast name: Lovelace\n"));
        assert!(sent[0].body.contains("Phone: +44 2071234567\n"));
        assert_eq!(h.verifier.calls(), 1);
    }

    // =============================================================================
    // REJECTIONS
    // =============================================================================

    #[tokio::test]
    async fn test_low_score_reports_bot_check_failure() {
        let h = harness(0.3, RecordingRelay::default(), "tok-123");

        let result = h.client.submit().await;

        assert_eq!(
            result,
            Err(SubmissionError::BotCheck("reCAPTCHA verification failed".into()))
        );
        assert_eq!(
            single_notification(&h.client),
            (NotificationKind::Error, "reCAPTCHA verification failed".into())
        );
        assert!(h.relay.sent().is_empty());
        assert_eq!(h.client.form().get(Field::Email), "ada@example.com");
    }

    #[tokio::test]
    async fn test_relay_failure_reports_generic_text() {
        let h = harness(0.9, RecordingRelay::refusing(), "tok-123");

        let result = h.client.submit().await;

        assert_eq!(
            result,
            Err(SubmissionError::ServerFault("Failed to send message".into()))
        );
        let (kind, text) = single_notification(&h.client);
        assert_eq!(kind, NotificationKind::Error);
        assert!(!text.contains("554"));
    }

    #[tokio::test]
    async fn test_blank_token_is_rejected_by_endpoint() {
        let h = harness(0.9, RecordingRelay::default(), "  ");

        let result = h.client.submit().await;

        assert_eq!(
            result,
            Err(SubmissionError::ServerValidation("Missing reCAPTCHA token".into()))
        );
        assert_eq!(h.verifier.calls(), 0);
    }

    #[tokio::test]
    async fn test_incomplete_form_never_reaches_endpoint() {
        let h = harness(0.9, RecordingRelay::default(), "tok-123");
        h.client.set_field(Field::Message, "   ");

        assert_eq!(h.client.submit().await, Err(SubmissionError::Validation));
        assert_eq!(
            single_notification(&h.client).1,
            "All fields are required."
        );
        assert_eq!(h.verifier.calls(), 0);
        assert!(h.relay.sent().is_empty());
    }

    #[tokio::test]
    async fn test_resubmission_after_failure_succeeds() {
        let h = harness(0.9, RecordingRelay::default(), "tok-123");
        h.client.set_field(Field::Topic, "");
        assert!(h.client.submit().await.is_err());

        h.client.set_field(Field::Topic, "Service");
        h.client.submit().await.unwrap();

        assert_eq!(h.client.notifications().len(), 2);
        assert_eq!(h.relay.sent()[0].subject, "[Contact] Service");
    }
}
