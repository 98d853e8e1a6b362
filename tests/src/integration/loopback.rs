//! # Loopback HTTP Flow
//!
//! The endpoint is served on an ephemeral loopback port and the client uses
//! the reqwest transport, exercising the full wire format.

#[cfg(test)]
mod tests {
    use super::super::fixtures::*;
    use am_01_notifications::{NotificationCenter, NotificationKind};
    use am_02_contact_form::ContactForm;
    use am_03_submission_client::{
        HttpContactTransport, StaticTokenProvider, SubmissionClient, SubmissionError,
    };
    use std::sync::Arc;
    use std::time::Duration;
    use tokio::net::TcpListener;
    use tokio::sync::oneshot;

    #[tokio::test]
    async fn test_submission_over_http() {
        let relay = Arc::new(RecordingRelay::default());
        let service = endpoint(Arc::new(FixedScoreVerifier::new(0.8)), relay.clone()).unwrap();

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let (stop, stopped) = oneshot::channel::<()>();
        let server = tokio::spawn(service.serve(listener, async {
            let _ = stopped.await;
        }));

        let transport =
            HttpContactTransport::new(&format!("http://{addr}"), Duration::from_secs(5)).unwrap();
        let client = SubmissionClient::new(
            Arc::new(StaticTokenProvider::new("tok-123")),
            Arc::new(transport),
            NotificationCenter::default(),
        );
        fill_form(&client);

        client.submit().await.unwrap();

        let live = client.notifications().notifications();
        assert_eq!(live.len(), 1);
        assert_eq!(live[0].kind, NotificationKind::Success);
        assert_eq!(client.form(), ContactForm::new());
        assert_eq!(relay.sent().len(), 1);

        stop.send(()).unwrap();
        assert!(server.await.unwrap().is_ok());
    }

    #[tokio::test]
    async fn test_endpoint_down_reports_network_failure() {
        // Bind then drop to obtain a port with nothing listening.
        let addr = {
            let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
            listener.local_addr().unwrap()
        };

        let transport =
            HttpContactTransport::new(&format!("http://{addr}"), Duration::from_secs(2)).unwrap();
        let client = SubmissionClient::new(
            Arc::new(StaticTokenProvider::new("tok-123")),
            Arc::new(transport),
            NotificationCenter::default(),
        );
        fill_form(&client);

        assert!(matches!(
            client.submit().await,
            Err(SubmissionError::Network(_))
        ));
        let live = client.notifications().notifications();
        assert_eq!(live.len(), 1);
        assert_eq!(live[0].text, "Failed to send message.");
        assert!(client.form().validate());
    }
}
