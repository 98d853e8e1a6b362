//! SMTP relay via lettre.
//!
//! A new connection is opened for every dispatch; nothing is pooled.
//! Certificate validation is always on.

use crate::domain::{MailConfig, MailEnvelope};
use crate::ports::{MailRelay, RelayError};
use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::transport::smtp::client::{Tls, TlsParameters};
use lettre::{Address, AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use tracing::debug;

pub struct SmtpRelay {
    config: MailConfig,
}

impl SmtpRelay {
    pub fn new(config: MailConfig) -> Self {
        Self { config }
    }

    fn transport(&self) -> Result<AsyncSmtpTransport<Tokio1Executor>, RelayError> {
        let parameters = TlsParameters::new(self.config.host.clone())
            .map_err(|e| RelayError::Connection(e.to_string()))?;
        let tls = if self.config.secure {
            Tls::Wrapper(parameters)
        } else {
            Tls::Opportunistic(parameters)
        };

        let mut builder = AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&self.config.host)
            .port(self.config.port)
            .tls(tls)
            .timeout(Some(self.config.timeout));
        if let Some(credentials) = &self.config.credentials {
            builder = builder.credentials(Credentials::new(
                credentials.username.clone(),
                credentials.password.expose().to_string(),
            ));
        }

        Ok(builder.build())
    }
}

/// Build the wire message for an envelope.
pub fn build_message(envelope: &MailEnvelope) -> Result<Message, RelayError> {
    let from = Mailbox::new(
        Some(envelope.from_name.clone()),
        parse_address("from", &envelope.from_address)?,
    );
    let to = Mailbox::new(None, parse_address("to", &envelope.to_address)?);
    let reply_to = Mailbox::new(None, parse_address("reply-to", &envelope.reply_to)?);

    Message::builder()
        .from(from)
        .to(to)
        .reply_to(reply_to)
        .subject(envelope.subject.clone())
        .header(ContentType::TEXT_PLAIN)
        .body(envelope.body.clone())
        .map_err(|e| RelayError::Compose(e.to_string()))
}

fn parse_address(role: &str, raw: &str) -> Result<Address, RelayError> {
    raw.trim()
        .parse::<Address>()
        .map_err(|e| RelayError::Compose(format!("{role} address {raw:?}: {e}")))
}

#[async_trait]
impl MailRelay for SmtpRelay {
    async fn send(&self, envelope: MailEnvelope) -> Result<(), RelayError> {
        let message = build_message(&envelope)?;
        let transport = self.transport()?;

        let response = transport.send(message).await.map_err(|e| {
            if e.is_permanent() || e.is_transient() {
                RelayError::Rejected(e.to_string())
            } else {
                RelayError::Connection(e.to_string())
            }
        })?;

        debug!(
            host = %self.config.host,
            code = %response.code(),
            "Mail accepted by relay"
        );
        Ok(())
    }
}
