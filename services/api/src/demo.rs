use crate::infra::InMemoryApplicantRepository;
use applicant_tracker::applicants::{
    Applicant, ApplicantQuery, ApplicantService, ApplicantStatus, NewApplicant,
};
use applicant_tracker::error::AppError;
use clap::Args;
use std::sync::Arc;

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Case-insensitive substring applied to names and skills in the search step
    #[arg(long, default_value = "rust")]
    pub(crate) search: String,
    /// Skip the status-update and delete steps, only seed and list
    #[arg(long)]
    pub(crate) list_only: bool,
}

/// Scripted walkthrough of the tracker against an in-memory store: seed,
/// search, sort, move applicants through the pipeline, then delete.
pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let repository = Arc::new(InMemoryApplicantRepository::default());
    let service = ApplicantService::new(repository);

    println!("Applicant tracker demo");

    let seeds = [
        ("Ada Lovelace", "Rust, SQL, analytical engines", 6, None),
        (
            "Grace Hopper",
            "COBOL, compilers",
            40,
            Some("Referred by the Navy"),
        ),
        ("Barbara Liskov", "Rust, distributed systems", 6, None),
        ("Linus Torvalds", "C, kernels, git", 30, None),
    ];

    for (name, skills, experience, notes) in seeds {
        let created = service
            .create(NewApplicant {
                name: name.to_string(),
                email: format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
                skills: skills.to_string(),
                experience,
                notes: notes.map(str::to_string),
                status: ApplicantStatus::default(),
            })
            .map_err(demo_failure)?;
        println!("- seeded #{} {name}", created.id);
    }

    let everyone = service
        .list(&ApplicantQuery::default())
        .map_err(demo_failure)?;
    println!("\nFull roster ({} applicants)", everyone.len());
    render_roster(&everyone);

    let query = ApplicantQuery::from_params(Some(args.search.clone()), None);
    let matched = service.list(&query).map_err(demo_failure)?;
    println!("\nSearch '{}' -> {} match(es)", args.search, matched.len());
    render_roster(&matched);

    let by_experience = ApplicantQuery::from_params(None, Some("experience".to_string()));
    let ranked = service.list(&by_experience).map_err(demo_failure)?;
    println!("\nRanked by experience");
    render_roster(&ranked);

    if args.list_only {
        return Ok(());
    }

    let first = everyone[0].id;
    let second = everyone[1].id;
    let interviewed = service
        .update_status(first, ApplicantStatus::Interviewed)
        .map_err(demo_failure)?;
    let hired = service
        .update_status(second, ApplicantStatus::Hired)
        .map_err(demo_failure)?;
    println!(
        "\nMoved #{} to {} and #{} to {}",
        interviewed.id,
        interviewed.status.label(),
        hired.id,
        hired.status.label()
    );

    let last = everyone[everyone.len() - 1].id;
    service.delete(last).map_err(demo_failure)?;
    println!("Deleted #{last}");

    let remaining = service
        .list(&ApplicantQuery::default())
        .map_err(demo_failure)?;
    println!("\nFinal roster ({} applicants)", remaining.len());
    render_roster(&remaining);

    Ok(())
}

fn render_roster(applicants: &[Applicant]) {
    for applicant in applicants {
        println!(
            "  #{:<3} {:<18} {:>2}y  [{}]  {}",
            applicant.id,
            applicant.name,
            applicant.experience,
            applicant.status.label(),
            applicant.skills
        );
    }
}

// The demo runs entirely in-process; a repository failure here means a bug.
fn demo_failure(error: applicant_tracker::applicants::ApplicantServiceError) -> AppError {
    AppError::Io(std::io::Error::other(error.to_string()))
}
