use tracing::{info, warn};

#[derive(Debug, Clone)]
pub struct SmtpConfig {
    /// Hostname of the SMTP relay, e.g. "smtp.gmail.com"
    pub relay: String,
    pub username: String,
    pub password: String,
    /// Sender address for outgoing notifications
    pub from_address: String,
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Port for the application to run on
    pub port: usize,
    /// Seconds between notifier queue checks
    pub notifier_interval_secs: u64,
    /// Maximum allowed duration in millis for a single email dispatch.
    /// A send that exceeds this is treated as a dispatch failure so that
    /// a hanging SMTP connection cannot stall the notifier loop.
    pub dispatch_timeout_millis: u64,
    /// SMTP credentials. When absent, outgoing notifications are only
    /// logged, which keeps the notifier runnable in development.
    pub smtp: Option<SmtpConfig>,
}

fn parse_env_var<T: std::str::FromStr + std::fmt::Display>(name: &str, default: T) -> T {
    let value = match std::env::var(name) {
        Ok(value) => value,
        Err(_) => return default,
    };
    match value.parse::<T>() {
        Ok(value) => value,
        Err(_) => {
            warn!(
                "The given {}: {} is not valid, falling back to the default: {}.",
                name, value, default
            );
            default
        }
    }
}

impl Config {
    pub fn new() -> Self {
        let smtp = match (
            std::env::var("SMTP_RELAY"),
            std::env::var("SMTP_USERNAME"),
            std::env::var("SMTP_PASSWORD"),
            std::env::var("EMAIL_ADDRESS"),
        ) {
            (Ok(relay), Ok(username), Ok(password), Ok(from_address)) => Some(SmtpConfig {
                relay,
                username,
                password,
                from_address,
            }),
            _ => {
                info!("SMTP env vars not fully provided. Outgoing notifications will only be logged.");
                None
            }
        };

        Self {
            port: parse_env_var("PORT", 5000),
            notifier_interval_secs: parse_env_var("NOTIFIER_INTERVAL_SECS", 60),
            dispatch_timeout_millis: parse_env_var("DISPATCH_TIMEOUT_MILLIS", 1000 * 30),
            smtp,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
