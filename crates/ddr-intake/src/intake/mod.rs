//! Submission endpoint: turns one landing-page application into one e-mail.

pub mod domain;
pub mod email;
pub mod provider;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{ApplicationSubmission, RoleOption, SubmissionPayload, ValidationError};
pub use email::{Mailbox, OutboundEmail};
pub use provider::{DeliveryError, EmailProvider, SendGridClient};
pub use router::{submission_router, SUBMIT_PATH};
pub use service::{SubmissionService, SubmitError};
