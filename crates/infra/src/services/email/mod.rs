use crate::config::{Config, SmtpConfig};
use lettre::{
    message::Mailbox, transport::smtp::authentication::Credentials, AsyncSmtpTransport,
    AsyncTransport, Message, Tokio1Executor,
};
use std::sync::Arc;
use tracing::{info, warn};

/// Outgoing notification channel. The notifier only depends on this
/// trait so that tests can record sends instead of talking to a relay.
#[async_trait::async_trait]
pub trait IEmailService: Send + Sync {
    async fn send(&self, to: &str, subject: &str, body: &str) -> anyhow::Result<()>;
}

pub struct SmtpEmailService {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
}

impl SmtpEmailService {
    pub fn new(config: &SmtpConfig) -> anyhow::Result<Self> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(&config.relay)?
            .credentials(Credentials::new(
                config.username.clone(),
                config.password.clone(),
            ))
            .build();
        let from = config.from_address.parse::<Mailbox>()?;
        Ok(Self { transport, from })
    }
}

#[async_trait::async_trait]
impl IEmailService for SmtpEmailService {
    async fn send(&self, to: &str, subject: &str, body: &str) -> anyhow::Result<()> {
        let email = Message::builder()
            .from(self.from.clone())
            .to(to.parse()?)
            .subject(subject)
            .body(body.to_string())?;
        self.transport.send(email).await?;
        Ok(())
    }
}

/// Fallback used when SMTP is not configured. Sends nothing, only logs.
pub struct LoggingEmailService;

#[async_trait::async_trait]
impl IEmailService for LoggingEmailService {
    async fn send(&self, to: &str, subject: &str, _body: &str) -> anyhow::Result<()> {
        info!("Would send email to: {} with subject: {}", to, subject);
        Ok(())
    }
}

pub fn create_email_service(config: &Config) -> Arc<dyn IEmailService> {
    match &config.smtp {
        Some(smtp) => match SmtpEmailService::new(smtp) {
            Ok(service) => Arc::new(service),
            Err(e) => {
                warn!(
                    "Unable to create smtp email service: {:?}. Outgoing notifications will only be logged.",
                    e
                );
                Arc::new(LoggingEmailService)
            }
        },
        None => Arc::new(LoggingEmailService),
    }
}
