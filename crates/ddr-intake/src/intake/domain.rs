use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Inbound JSON body as posted by the landing page.
///
/// Fields stay loosely typed so that a missing, `null`, or empty value is
/// reported as a validation failure instead of a deserialization error.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionPayload {
    #[serde(default)]
    pub name: Option<Value>,
    #[serde(default)]
    pub email: Option<Value>,
    #[serde(default)]
    pub company: Option<Value>,
    #[serde(default)]
    pub role: Option<Value>,
    #[serde(default)]
    pub use_case: Option<Value>,
    #[serde(default)]
    pub regulated_industry: Option<Value>,
    #[serde(default)]
    pub safety_requirements: Option<Value>,
    #[serde(default)]
    pub current_challenges: Option<Value>,
}

/// One applicant's validated input. Never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicationSubmission {
    pub name: String,
    pub email: String,
    pub company: String,
    pub role: String,
    pub use_case: String,
    pub regulated_industry: bool,
    pub safety_requirements: Option<String>,
    pub current_challenges: Option<String>,
}

/// Names of the fields that must be present before anything else happens.
pub const REQUIRED_FIELDS: [&str; 5] = ["name", "email", "company", "role", "useCase"];

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),
}

impl TryFrom<SubmissionPayload> for ApplicationSubmission {
    type Error = ValidationError;

    fn try_from(payload: SubmissionPayload) -> Result<Self, Self::Error> {
        let SubmissionPayload {
            name,
            email,
            company,
            role,
            use_case,
            regulated_industry,
            safety_requirements,
            current_challenges,
        } = payload;

        let mut missing = Vec::new();
        let mut require = |field: &'static str, value: Option<Value>| {
            field_text(&value).unwrap_or_else(|| {
                missing.push(field);
                String::new()
            })
        };

        let name = require("name", name);
        let email = require("email", email);
        let company = require("company", company);
        let role = require("role", role);
        let use_case = require("useCase", use_case);

        if !missing.is_empty() {
            return Err(ValidationError::MissingFields(missing));
        }

        Ok(Self {
            name,
            email,
            company,
            role,
            use_case,
            regulated_industry: regulated_industry.as_ref().is_some_and(is_truthy),
            safety_requirements: field_text(&safety_requirements),
            current_challenges: field_text(&current_challenges),
        })
    }
}

/// `null`, `false`, `0`, and `""` count as absent; everything else is present.
pub(crate) fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0 && !n.is_nan()),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Text of a present field. Non-string values keep their JSON rendering.
fn field_text(value: &Option<Value>) -> Option<String> {
    match value {
        Some(value) if is_truthy(value) => Some(match value {
            Value::String(text) => text.clone(),
            other => other.to_string(),
        }),
        _ => None,
    }
}

/// Role categories offered by the form. The endpoint accepts any role text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoleOption {
    Engineering,
    Product,
    Compliance,
    Founder,
    Research,
    Other,
}

impl RoleOption {
    pub const ALL: [RoleOption; 6] = [
        RoleOption::Engineering,
        RoleOption::Product,
        RoleOption::Compliance,
        RoleOption::Founder,
        RoleOption::Research,
        RoleOption::Other,
    ];

    /// Value submitted in the `role` field.
    pub fn value(self) -> &'static str {
        match self {
            RoleOption::Engineering => "engineering",
            RoleOption::Product => "product",
            RoleOption::Compliance => "compliance",
            RoleOption::Founder => "founder",
            RoleOption::Research => "research",
            RoleOption::Other => "other",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RoleOption::Engineering => "Engineering / Platform",
            RoleOption::Product => "Product",
            RoleOption::Compliance => "Compliance / Legal",
            RoleOption::Founder => "Founder / Executive",
            RoleOption::Research => "Research / ML",
            RoleOption::Other => "Other",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|role| role.value() == value)
    }
}
