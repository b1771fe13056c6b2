use crate::config::MailSettings;
use crate::error::Result;
use lettre::message::{Mailbox, MultiPart, SinglePart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};
use log::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    Sent,
    Skipped,
}

/// Sends the digest over STARTTLS, or skips with a warning when SMTP settings are incomplete.
pub fn send_digest(settings: &MailSettings, subject: &str, html: &str) -> Result<Delivery> {
    if !settings.is_complete() {
        warn!("⚠️ SMTP not fully configured. Skipping email.");
        return Ok(Delivery::Skipped);
    }

    let message = build_message(settings, subject, html)?;
    let transport = SmtpTransport::starttls_relay(&settings.smtp_host)?
        .port(settings.smtp_port)
        .credentials(Credentials::new(
            settings.smtp_user.clone(),
            settings.smtp_pass.clone(),
        ))
        .build();

    transport.send(&message)?;
    info!("✅ Email sent to {}", settings.mail_to);
    Ok(Delivery::Sent)
}

pub fn build_message(settings: &MailSettings, subject: &str, html: &str) -> Result<Message> {
    let from: Mailbox = settings.mail_from.parse()?;
    let to: Mailbox = settings.mail_to.parse()?;

    let message = Message::builder()
        .from(from)
        .to(to)
        .subject(subject)
        .multipart(MultiPart::alternative().singlepart(SinglePart::html(html.to_string())))?;
    Ok(message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ScoutError;

    fn settings() -> MailSettings {
        MailSettings {
            smtp_host: "smtp.example.com".to_string(),
            smtp_port: 587,
            smtp_user: "scout".to_string(),
            smtp_pass: "secret".to_string(),
            mail_from: "scout@example.com".to_string(),
            mail_to: "me@example.com".to_string(),
        }
    }

    #[test]
    fn test_incomplete_settings_skip() {
        for blank in 0..5 {
            let mut s = settings();
            match blank {
                0 => s.smtp_host.clear(),
                1 => s.smtp_user.clear(),
                2 => s.smtp_pass.clear(),
                3 => s.mail_from.clear(),
                _ => s.mail_to.clear(),
            }
            assert_eq!(send_digest(&s, "subject", "<p>hi</p>").unwrap(), Delivery::Skipped);
        }
    }

    #[test]
    fn test_message_is_multipart_html() {
        let message = build_message(&settings(), "Daily digest", "<p>hello</p>").unwrap();
        let raw = String::from_utf8(message.formatted()).unwrap();
        assert!(raw.contains("Subject: Daily digest"));
        assert!(raw.contains("To: me@example.com"));
        assert!(raw.contains("multipart/alternative"));
        assert!(raw.contains("text/html"));
        assert!(raw.contains("<p>hello</p>"));
    }

    #[test]
    fn test_bad_address_is_an_error() {
        let mut s = settings();
        s.mail_to = "not an address".to_string();
        assert!(matches!(
            build_message(&s, "x", "<p/>"),
            Err(ScoutError::Address(_))
        ));
    }
}
