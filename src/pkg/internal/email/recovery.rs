use std::fmt::{self, Display};

use super::{send_email, SendEmail};

/// Password recovery mail carrying the reset link. The link embeds the
/// opaque reset token as a query parameter and is valid for 30 minutes.
pub struct PasswordResetTemplate<'a> {
    pub reset_url: &'a str,
}

impl<'a> Display for PasswordResetTemplate<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let html_template = format!(
            r#"
            <!DOCTYPE html>
            <html>
            <head>
                <meta charset="utf-8">
                <meta name="viewport" content="width=device-width, initial-scale=1.0">
                <title>Password Reset</title>
                <style>
                    body {{
                        font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, 'Helvetica Neue', Arial, sans-serif;
                        line-height: 1.6;
                        color: #333;
                        margin: 0;
                        padding: 0;
                    }}
                    .container {{
                        max-width: 600px;
                        margin: 0 auto;
                        padding: 20px;
                    }}
                    .button {{
                        display: inline-block;
                        padding: 12px 24px;
                        background-color: #0d9488;
                        color: white;
                        text-decoration: none;
                        border-radius: 6px;
                        margin: 20px 0;
                    }}
                    .warning {{
                        color: #6b7280;
                        font-size: 13px;
                        margin-top: 20px;
                    }}
                </style>
            </head>
            <body>
                <div class="container">
                    <p>Please click on this link to reset your password:</p>
                    <div style="text-align: center;">
                        <a href="{}" class="button">Reset Password</a>
                    </div>
                    <p><a href="{}">{}</a></p>
                    <p class="warning">
                        This link will expire in 30 minutes.<br>
                        If you did not request a password reset, please ignore this email.
                    </p>
                </div>
            </body>
            </html>
            "#,
            self.reset_url, self.reset_url, self.reset_url
        );
        write!(f, "{}", html_template)
    }
}

impl<'a> SendEmail for PasswordResetTemplate<'a> {
    fn send(&self, email: &str) -> crate::prelude::Result<()> {
        send_email(
            email,
            "You have requested a password reset",
            &format!("{}", &self),
            true,
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_embeds_reset_url() {
        let rendered = PasswordResetTemplate {
            reset_url: "http://localhost:3000/account/reset-password?token=abc123",
        }
        .to_string();
        assert!(rendered.contains("reset-password?token=abc123"));
        assert!(rendered.contains("expire in 30 minutes"));
    }
}
