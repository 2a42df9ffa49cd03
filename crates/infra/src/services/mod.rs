mod email;

pub use email::{create_email_service, IEmailService, LoggingEmailService, SmtpEmailService};
