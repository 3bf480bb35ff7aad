use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};

pub mod recovery;

use crate::{conf::settings, prelude::Result};

pub trait SendEmail {
    fn send(&self, email: &str) -> Result<()>;
}

/// Fire-and-forget delivery: the message is built and validated up front,
/// the blocking SMTP handshake happens on a detached task so handlers never
/// wait on the relay.
pub fn send_email(email: &str, subject: &str, body: &str, is_html: bool) -> Result<()> {
    let (name, _) = email.split_once('@').unwrap_or(("unknown", ""));
    tracing::debug!("sending email to {}", &email);

    let content_type = if is_html {
        ContentType::TEXT_HTML
    } else {
        ContentType::TEXT_PLAIN
    };

    let message = Message::builder()
        .from(format!("{} <{}>", &settings.service_name, &settings.from_email).parse()?)
        .to(format!("{} <{}>", name, email).parse()?)
        .subject(subject)
        .header(content_type)
        .body(body.to_string())?;

    let mailer = SmtpTransport::relay(&settings.smtp_server)?
        .credentials(Credentials::new(
            settings.smtp_user.clone(),
            settings.smtp_pass.clone(),
        ))
        .build();

    tokio::spawn(async move {
        let result = tokio::task::spawn_blocking(move || mailer.send(&message)).await;
        match result {
            Ok(Ok(_)) => tracing::info!("email sent successfully"),
            Ok(Err(e)) => tracing::error!("could not send email: {e:?}"),
            Err(e) => tracing::error!("email task failed to execute: {e:?}"),
        }
    });

    Ok(())
}
