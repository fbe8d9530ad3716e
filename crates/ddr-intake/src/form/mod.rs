//! Applicant-side form controller.
//!
//! Mirrors the landing page: a record of field values plus a four-state
//! lifecycle. A controller submits at most once successfully; after an
//! error the applicant may submit again.

mod transport;

use serde::{Deserialize, Serialize};
use tracing::warn;

pub use transport::{HttpSubmissionTransport, SubmissionTransport, TransportError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FormState {
    #[default]
    Idle,
    Submitting,
    Success,
    Error,
}

impl FormState {
    pub fn can_submit(self) -> bool {
        matches!(self, FormState::Idle | FormState::Error)
    }

    pub fn is_submit_disabled(self) -> bool {
        self == FormState::Submitting
    }

    pub fn submit_label(self) -> &'static str {
        match self {
            FormState::Submitting => "Submitting...",
            _ => "Submit Application",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FormState::Idle => "idle",
            FormState::Submitting => "submitting",
            FormState::Success => "success",
            FormState::Error => "error",
        }
    }
}

/// Field values exactly as they are posted to the endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormValues {
    pub name: String,
    pub email: String,
    pub company: String,
    pub role: String,
    pub use_case: String,
    pub regulated_industry: bool,
    pub safety_requirements: String,
    pub current_challenges: String,
}

/// A single change event from one input element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldInput {
    Text(String),
    Checkbox(bool),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("form has no field named '{0}'")]
    UnknownField(String),
    #[error("field '{field}' does not accept {received} input")]
    FieldKind {
        field: String,
        received: &'static str,
    },
    #[error("cannot submit while the form is {}", .0.label())]
    SubmitUnavailable(FormState),
}

/// Fixed view shown once an application has been received.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Confirmation {
    pub title: &'static str,
    pub message: &'static str,
    pub next_steps: [&'static str; 4],
}

pub static CONFIRMATION: Confirmation = Confirmation {
    title: "Request Received",
    message: "Thank you for your interest in DDR Early Governance Testing.",
    next_steps: [
        "We review your application within 48 hours",
        "If approved, you'll receive access credentials via email",
        "You'll get a structured testing guide with specific tasks",
        "We'll schedule a brief onboarding call if needed",
    ],
};

#[derive(Debug, Default)]
pub struct FormController {
    state: FormState,
    values: FormValues,
}

impl FormController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_values(values: FormValues) -> Self {
        Self {
            state: FormState::Idle,
            values,
        }
    }

    pub fn state(&self) -> FormState {
        self.state
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    /// Apply one input change to the named field.
    pub fn update_field(&mut self, name: &str, input: FieldInput) -> Result<(), FormError> {
        let values = &mut self.values;
        let slot = match name {
            "regulatedIndustry" => {
                return match input {
                    FieldInput::Checkbox(checked) => {
                        values.regulated_industry = checked;
                        Ok(())
                    }
                    FieldInput::Text(_) => Err(FormError::FieldKind {
                        field: name.to_string(),
                        received: "text",
                    }),
                };
            }
            "name" => &mut values.name,
            "email" => &mut values.email,
            "company" => &mut values.company,
            "role" => &mut values.role,
            "useCase" => &mut values.use_case,
            "safetyRequirements" => &mut values.safety_requirements,
            "currentChallenges" => &mut values.current_challenges,
            other => return Err(FormError::UnknownField(other.to_string())),
        };

        match input {
            FieldInput::Text(text) => {
                *slot = text;
                Ok(())
            }
            FieldInput::Checkbox(_) => Err(FormError::FieldKind {
                field: name.to_string(),
                received: "checkbox",
            }),
        }
    }

    /// Send the current values once and settle in `Success` or `Error`.
    ///
    /// Only reachable from `Idle` or `Error`.
    pub async fn submit<T>(&mut self, transport: &T) -> Result<FormState, FormError>
    where
        T: SubmissionTransport + ?Sized,
    {
        if !self.state.can_submit() {
            return Err(FormError::SubmitUnavailable(self.state));
        }

        self.state = FormState::Submitting;
        self.state = match transport.post(&self.values).await {
            Ok(status) if (200..300).contains(&status) => FormState::Success,
            Ok(status) => {
                warn!(status, "submission rejected by endpoint");
                FormState::Error
            }
            Err(err) => {
                warn!(error = %err, "submission request failed");
                FormState::Error
            }
        };

        Ok(self.state)
    }

    pub fn confirmation(&self) -> Option<&'static Confirmation> {
        (self.state == FormState::Success).then_some(&CONFIRMATION)
    }
}
