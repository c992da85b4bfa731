use crate::commands::{init_cli, render_filter_bar, render_outcome, render_posting};
use crate::infra::{describe_submission, DryRunGateway};
use careers_intake::error::AppError;
use careers_intake::workflows::careers::applications::{
    ApplyModal, FileAttachment, FormSettings, GeneralApplicationForm, ModalView,
    ADVISORY_LIMIT_LABEL,
};
use careers_intake::workflows::careers::{JobCatalog, OpenPositions, TestimonialCarousel};
use clap::Args;

const SAMPLE_RESUME: &[u8] = b"%PDF-1.7\n% sample resume\n";

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Category to browse before applying (defaults to Engineering)
    #[arg(long)]
    pub(crate) category: Option<String>,
    /// Skip the application portion of the demo
    #[arg(long)]
    pub(crate) skip_application: bool,
}

pub(crate) async fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        category,
        skip_application,
    } = args;
    let category = category.unwrap_or_else(|| "Engineering".to_string());
    let config = init_cli()?;
    let settings = FormSettings::from(&config);

    println!("WMSols careers walkthrough");

    let mut positions = OpenPositions::new(JobCatalog::standard());
    positions.select(category.as_str());
    println!("\nOpen positions");
    println!("{}", render_filter_bar(&positions));
    for job in positions.visible() {
        println!("{}", render_posting(job));
    }

    let mut carousel = TestimonialCarousel::standard();
    println!("\nWhat our team says");
    for _ in 0..carousel.testimonial_count() {
        let current = carousel.current();
        println!(
            "  {} / {} - {} ({}): \"{}\"",
            carousel.index() + 1,
            carousel.testimonial_count(),
            current.name,
            current.role,
            current.quote
        );
        carousel.next();
    }

    if skip_application {
        return Ok(());
    }

    let gateway = DryRunGateway::default();
    let Some(job) = positions.visible().first().map(|job| (*job).clone()) else {
        println!("\nNo positions in {category}; skipping the application.");
        return Ok(());
    };

    let mut modal = ApplyModal::new(settings);
    modal.open_for(job);
    if let Some(draft) = modal.draft_mut() {
        draft.set_name("Jane Doe");
        draft.set_email("jane@example.com");
        draft.set_message("I'd love to help scale your delivery pipeline.");
        draft.select_attachment(FileAttachment::new("jane-doe-resume.pdf", SAMPLE_RESUME)?);
    }
    if let Some(view) = modal.view() {
        render_modal(&view);
    }

    modal.submit(&gateway).await?;
    if let Some(view) = modal.view() {
        render_modal(&view);
    }
    modal.close();

    let mut general = GeneralApplicationForm::new(settings);
    general.draft_mut().set_name("Ali Raza");
    general.draft_mut().set_email("ali@example.com");
    let state = general.submit(&gateway).await?;
    println!("\nSend us your resume");
    println!("  {}", render_outcome(state));

    println!("\nPayloads captured by the dry-run gateway");
    for submission in gateway.deliveries() {
        println!("  POST {}", submission.endpoint);
        for line in describe_submission(&submission) {
            println!("    {line}");
        }
    }

    Ok(())
}

fn render_modal(view: &ModalView<'_>) {
    println!("\nApply for {}", view.job.title);
    if view.show_confirmation {
        println!("  Application Submitted!");
        return;
    }
    println!("  Name: {}", view.draft.name());
    println!("  Email: {}", view.draft.email());
    println!(
        "  Resume: {} [{}]",
        view.draft.attachment().display_name(),
        ADVISORY_LIMIT_LABEL
    );
    println!(
        "  Submit: {}",
        if view.submit_enabled { "enabled" } else { "disabled" }
    );
}
