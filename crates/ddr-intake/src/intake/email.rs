use std::fmt::Write as _;

use super::domain::ApplicationSubmission;
use crate::config::MailConfig;

pub const NOT_PROVIDED: &str = "Not provided";

/// Rendered notification ready for the provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundEmail {
    pub to: String,
    pub from: String,
    pub reply_to: Mailbox,
    pub subject: String,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mailbox {
    pub email: String,
    pub name: Option<String>,
}

impl OutboundEmail {
    pub fn compose(submission: &ApplicationSubmission, config: &MailConfig) -> Self {
        Self {
            to: config.recipient().to_string(),
            from: config.from_email.clone(),
            reply_to: Mailbox {
                email: submission.email.clone(),
                name: Some(submission.name.clone()),
            },
            subject: subject_line(submission),
            body: render_body(submission),
        }
    }
}

pub fn subject_line(submission: &ApplicationSubmission) -> String {
    format!(
        "[DDR Governance Testing] Application from {} at {}",
        submission.name, submission.company
    )
}

pub fn render_body(submission: &ApplicationSubmission) -> String {
    let regulated = if submission.regulated_industry {
        "Yes"
    } else {
        "No"
    };

    let mut body = String::new();
    writeln!(body, "New Governance Testing Application").expect("write heading");
    body.push('\n');

    writeln!(body, "=== APPLICANT INFO ===").expect("write applicant header");
    writeln!(body, "Name: {}", submission.name).expect("write name");
    writeln!(body, "Email: {}", submission.email).expect("write email");
    writeln!(body, "Company: {}", submission.company).expect("write company");
    writeln!(body, "Role: {}", submission.role).expect("write role");
    writeln!(body, "Regulated Industry: {regulated}").expect("write regulated flag");
    body.push('\n');

    writeln!(body, "=== USE CASE ===").expect("write use case header");
    writeln!(body, "{}", submission.use_case).expect("write use case");
    body.push('\n');

    writeln!(body, "=== SAFETY REQUIREMENTS ===").expect("write safety header");
    writeln!(
        body,
        "{}",
        submission
            .safety_requirements
            .as_deref()
            .unwrap_or(NOT_PROVIDED)
    )
    .expect("write safety requirements");
    body.push('\n');

    writeln!(body, "=== CURRENT CHALLENGES ===").expect("write challenges header");
    writeln!(
        body,
        "{}",
        submission
            .current_challenges
            .as_deref()
            .unwrap_or(NOT_PROVIDED)
    )
    .expect("write current challenges");
    body.push('\n');

    writeln!(body, "---").expect("write separator");
    body.push_str("Submitted via DDR Governance Evaluation Landing Page");

    body
}
