use crate::infra::{build_gateway, describe_submission, load_catalog};
use careers_intake::config::{AppConfig, IntakeConfig};
use careers_intake::error::AppError;
use careers_intake::telemetry;
use careers_intake::workflows::careers::applications::{
    ApplicationGateway, ApplyModal, FileAttachment, FormSettings, GeneralApplicationForm,
    PendingSubmission, SubmissionState,
};
use careers_intake::workflows::careers::{JobPosting, OpenPositions};
use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug, Default)]
pub(crate) struct PositionsArgs {
    /// Category to filter by (defaults to All)
    #[arg(long)]
    pub(crate) category: Option<String>,
}

#[derive(Args, Debug)]
pub(crate) struct ApplyArgs {
    /// Identifier of the listed position
    #[arg(long)]
    pub(crate) job_id: String,
    /// Applicant's full name
    #[arg(long)]
    pub(crate) name: String,
    /// Applicant's email address
    #[arg(long)]
    pub(crate) email: String,
    /// Optional cover message
    #[arg(long)]
    pub(crate) message: Option<String>,
    /// Resume document (PDF, DOC, or DOCX)
    #[arg(long)]
    pub(crate) resume: PathBuf,
    /// Log the payload instead of sending it
    #[arg(long)]
    pub(crate) dry_run: bool,
}

#[derive(Args, Debug)]
pub(crate) struct GeneralArgs {
    /// Applicant's full name
    #[arg(long)]
    pub(crate) name: String,
    /// Applicant's email address
    #[arg(long)]
    pub(crate) email: String,
    /// Optional resume document (PDF, DOC, or DOCX)
    #[arg(long)]
    pub(crate) resume: Option<PathBuf>,
    /// Log the payload instead of sending it
    #[arg(long)]
    pub(crate) dry_run: bool,
}

pub(crate) fn run_positions(args: PositionsArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let mut positions = OpenPositions::new(load_catalog(&config.intake)?);
    if let Some(category) = args.category {
        positions.select(category.as_str());
    }

    println!("{}", render_filter_bar(&positions));
    let visible = positions.visible();
    if visible.is_empty() {
        println!("\nNo open positions in {}.", positions.selected());
    }
    for job in visible {
        println!("\n{}", render_posting(job));
    }
    Ok(())
}

pub(crate) async fn run_apply(args: ApplyArgs) -> Result<(), AppError> {
    let ApplyArgs {
        job_id,
        name,
        email,
        message,
        resume,
        dry_run,
    } = args;

    let config = init_cli()?;
    let catalog = load_catalog(&config)?;
    let job = catalog
        .find(&job_id)
        .cloned()
        .ok_or_else(|| AppError::NotFound(format!("job {job_id}")))?;
    let resume = FileAttachment::from_path(&resume).await?;
    let gateway = build_gateway(&config, dry_run)?;

    let mut modal = ApplyModal::new(FormSettings::from(&config));
    modal.open_for(job);
    if let Some(draft) = modal.draft_mut() {
        draft.set_name(name);
        draft.set_email(email);
        draft.set_message(message.unwrap_or_default());
        draft.select_attachment(resume);
    }

    let PendingSubmission {
        attempt,
        submission,
    } = modal.begin_submit()?;
    let title = modal.job().map(|job| job.title.clone()).unwrap_or_default();
    println!("Applying for {title}");
    for line in describe_submission(&submission) {
        println!("  {line}");
    }

    let result = gateway.deliver(submission).await;
    let state = modal.complete_submit(attempt, result)?;
    println!("{}", render_outcome(state));
    Ok(())
}

pub(crate) async fn run_general(args: GeneralArgs) -> Result<(), AppError> {
    let GeneralArgs {
        name,
        email,
        resume,
        dry_run,
    } = args;

    let config = init_cli()?;
    let gateway = build_gateway(&config, dry_run)?;

    let mut form = GeneralApplicationForm::new(FormSettings::from(&config));
    form.draft_mut().set_name(name);
    form.draft_mut().set_email(email);
    if let Some(path) = resume {
        form.draft_mut()
            .select_attachment(FileAttachment::from_path(&path).await?);
    }

    let state = form.submit(gateway.as_ref()).await?;
    println!("{}", render_outcome(state));
    Ok(())
}

pub(crate) fn init_cli() -> Result<IntakeConfig, AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;
    Ok(config.intake)
}

pub(crate) fn render_filter_bar(positions: &OpenPositions) -> String {
    positions
        .filter_bar()
        .into_iter()
        .map(|option| {
            if option.selected {
                format!("[{}]", option.label)
            } else {
                option.label
            }
        })
        .collect::<Vec<_>>()
        .join("  ")
}

pub(crate) fn render_posting(job: &JobPosting) -> String {
    format!(
        "#{} {}\n   {} | {} | {}\n   {}\n   Skills: {}",
        job.id,
        job.title,
        job.location,
        job.employment_type,
        job.category,
        job.description,
        job.skills.join(", ")
    )
}

pub(crate) fn render_outcome(state: &SubmissionState) -> String {
    match state {
        SubmissionState::Submitted => {
            "Application received. We'll review it and get back to you soon.".to_string()
        }
        SubmissionState::Failed { reason } => {
            format!("Application could not be delivered ({reason}). Please try again.")
        }
        other => format!("Application {}", other.label()),
    }
}
