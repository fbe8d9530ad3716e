use clap::{Args, ValueEnum};
use ddr_intake::error::AppError;
use ddr_intake::form::{
    FieldInput, FormController, FormError, FormState, HttpSubmissionTransport,
};
use ddr_intake::intake::RoleOption;

#[derive(Args, Debug)]
pub(crate) struct ApplyArgs {
    /// Base URL of the intake service
    #[arg(long, default_value = "http://127.0.0.1:3000")]
    pub(crate) endpoint: String,
    /// Your name
    #[arg(long)]
    pub(crate) name: String,
    /// Work e-mail address
    #[arg(long)]
    pub(crate) email: String,
    /// Company name
    #[arg(long)]
    pub(crate) company: String,
    /// Role category
    #[arg(long, value_enum)]
    pub(crate) role: RoleArg,
    /// The decision you want to govern
    #[arg(long)]
    pub(crate) use_case: String,
    /// Operate in a regulated industry or with safety-critical requirements
    #[arg(long)]
    pub(crate) regulated_industry: bool,
    /// What makes the decision safety-critical or governance-sensitive
    #[arg(long)]
    pub(crate) safety_requirements: Option<String>,
    /// Current challenge with AI/automation governance
    #[arg(long)]
    pub(crate) current_challenges: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum RoleArg {
    Engineering,
    Product,
    Compliance,
    Founder,
    Research,
    Other,
}

impl From<RoleArg> for RoleOption {
    fn from(value: RoleArg) -> Self {
        match value {
            RoleArg::Engineering => RoleOption::Engineering,
            RoleArg::Product => RoleOption::Product,
            RoleArg::Compliance => RoleOption::Compliance,
            RoleArg::Founder => RoleOption::Founder,
            RoleArg::Research => RoleOption::Research,
            RoleArg::Other => RoleOption::Other,
        }
    }
}

/// Replays the form's change events for each provided argument.
pub(crate) fn fill_form(args: &ApplyArgs) -> Result<FormController, FormError> {
    let role = RoleOption::from(args.role);
    let mut form = FormController::new();

    let text_fields = [
        ("name", Some(args.name.as_str())),
        ("email", Some(args.email.as_str())),
        ("company", Some(args.company.as_str())),
        ("role", Some(role.value())),
        ("useCase", Some(args.use_case.as_str())),
        ("safetyRequirements", args.safety_requirements.as_deref()),
        ("currentChallenges", args.current_challenges.as_deref()),
    ];
    for (field, value) in text_fields {
        if let Some(value) = value {
            form.update_field(field, FieldInput::Text(value.to_string()))?;
        }
    }
    form.update_field(
        "regulatedIndustry",
        FieldInput::Checkbox(args.regulated_industry),
    )?;

    Ok(form)
}

pub(crate) async fn run_apply(args: ApplyArgs) -> Result<(), AppError> {
    let transport = HttpSubmissionTransport::new(&args.endpoint)?;
    let mut form = fill_form(&args)?;

    println!(
        "Submitting application for {} ({}) to {}",
        form.values().name,
        RoleOption::from(args.role).label(),
        transport.url()
    );

    if form.submit(&transport).await? != FormState::Success {
        println!("Submission failed. Please try again.");
        return Err(AppError::SubmissionFailed);
    }

    if let Some(confirmation) = form.confirmation() {
        println!("\n{}", confirmation.title);
        println!("{}", confirmation.message);
        println!("\nWhat happens next:");
        for (index, step) in confirmation.next_steps.iter().enumerate() {
            println!("{}. {}", index + 1, step);
        }
    }

    Ok(())
}
