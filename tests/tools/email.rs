use state_anchor::tools::email::{
    build_message, EmailConfig, Mailer, MailerError, OutgoingEmail, SmtpMailer, StdoutMailer,
};
use state_anchor::tools::html::{email_document, escape, reflection_to_html};

fn sample_email(to: &str) -> OutgoingEmail {
    OutgoingEmail {
        to: to.to_string(),
        subject: "Morning primer".to_string(),
        text: "Body [F001]".to_string(),
        html: "<p>Body [F001]</p>".to_string(),
    }
}

#[test]
fn renders_paragraphs_and_headings() {
    let reflection = "### Advantage\nMobility is a right [F001].\n\nPlain paragraph with **bold** text.";

    let html = reflection_to_html(reflection);

    let parts = html.lines().collect::<Vec<_>>();
    assert_eq!(parts.len(), 3);
    assert!(parts[0].starts_with("<h3"));
    assert!(parts[0].contains(">Advantage</h3>"));
    assert!(parts[1].contains(">Mobility is a right [F001].</p>"));
    assert!(parts[2].contains("Plain paragraph with <strong>bold</strong> text."));
}

#[test]
fn treats_bold_only_line_as_heading() {
    let html = reflection_to_html("**Fact to retain**\nKeep this.");

    assert!(html.contains(">Fact to retain</h3>"));
    assert!(html.contains(">Keep this.</p>"));
}

#[test]
fn renders_sources_footer_as_list_block() {
    let html = reflection_to_html("Body\n\nSources:\n- https://a\n- https://b");

    assert!(html.contains(">Sources:</h3>"));
    assert!(html.contains("- https://a<br>- https://b"));
}

#[test]
fn escapes_markup_in_model_output() {
    assert_eq!(escape("a < b & c > d"), "a &lt; b &amp; c &gt; d");

    let html = reflection_to_html("<script>alert(1)</script>");
    assert!(!html.contains("<script>"));
    assert!(html.contains("&lt;script&gt;"));
}

#[test]
fn wraps_reflection_in_document_with_reminder() {
    let doc = email_document("Hello");

    assert!(doc.starts_with("<html>"));
    assert!(doc.contains("Read this reflection out loud"));
    assert!(doc.contains(">Hello</p>"));
}

#[test]
fn builds_multipart_message() {
    let sender = "anchor@example.com".parse().expect("valid sender");

    let message = build_message(&sender, &sample_email("reader@example.com"))
        .expect("Failed to build message");

    let raw = String::from_utf8(message.formatted()).expect("utf8 message");
    assert!(raw.contains("Subject: Morning primer"));
    assert!(raw.contains("To: reader@example.com"));
    assert!(raw.contains("multipart/alternative"));
    assert!(raw.contains("text/plain"));
    assert!(raw.contains("text/html"));
}

#[test]
fn rejects_invalid_recipient() {
    let sender = "anchor@example.com".parse().expect("valid sender");

    let err = build_message(&sender, &sample_email("not an address"))
        .expect_err("Expected invalid address");

    match err {
        MailerError::InvalidAddress(value) => assert_eq!(value, "not an address"),
        other => panic!("Unexpected error: {other:?}"),
    }
}

#[test]
fn smtp_mailer_requires_server() {
    let err = SmtpMailer::new(EmailConfig {
        sender: Some("anchor@example.com".to_string()),
        password: Some("secret".to_string()),
        ..EmailConfig::default()
    })
    .err()
    .expect("Expected missing setting");

    match err {
        MailerError::MissingSetting(key) => assert_eq!(key, "EMAIL_SMTP_SERVER"),
        other => panic!("Unexpected error: {other:?}"),
    }
}

#[test]
fn smtp_mailer_rejects_invalid_sender() {
    let err = SmtpMailer::new(EmailConfig {
        smtp_server: Some("smtp.example.com".to_string()),
        sender: Some("nobody".to_string()),
        password: Some("secret".to_string()),
        ..EmailConfig::default()
    })
    .err()
    .expect("Expected invalid sender");

    assert!(matches!(err, MailerError::InvalidAddress(value) if value == "nobody"));
}

#[test]
fn subject_falls_back_to_default() {
    let config = EmailConfig {
        subject: Some("   ".to_string()),
        ..EmailConfig::default()
    };

    assert_eq!(config.subject(), "state-anchor: Daily Baseline State Primer");
}

#[tokio::test]
async fn stdout_mailer_needs_no_smtp_settings() {
    let result = StdoutMailer.send(&sample_email("not-an-address")).await;

    assert!(result.is_ok());
}
