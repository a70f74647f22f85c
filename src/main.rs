//! Demo entrypoint: walks the fetch → enrich → dedup → paginate data flow
//! against in-memory fixture gateways and prints the derived views as JSON.

use std::process::ExitCode;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{Duration, Utc};
use clap::Parser;
use serde_json::json;
use tracing::info;

use jobswiftly_client::access::{can_access, pages_for, PageId, Role, ACCESS_DENIED_MESSAGE};
use jobswiftly_client::backend::{
    BackendError, CompanyDirectory, CourseCatalog, JobDirectory, SecondaryResourceResolver,
    SubmissionLedger,
};
use jobswiftly_client::config::AppConfig;
use jobswiftly_client::error::AppError;
use jobswiftly_client::flows::{CourseDesk, JobBoard, COURSES_PER_PAGE, JOBS_PER_PAGE};
use jobswiftly_client::listing::{Company, Course, CvDraft, CvOwner, CvRecord, Job, JobFilters};
use jobswiftly_client::pagination::{window, Pager};
use jobswiftly_client::schedule::resolve_status;
use jobswiftly_client::session::{sign_in, InMemorySessionStore, Session};
use jobswiftly_client::telemetry;

#[derive(Parser, Debug)]
#[command(
    name = "jobswiftly-demo",
    about = "Exercise the JobSwiftly client core against fixture data",
    version
)]
struct Cli {
    /// Role to sign the demo user in as.
    #[arg(long, default_value = "Job Seeker")]
    role: String,
    /// Page of the job board to display.
    #[arg(long, default_value_t = 1)]
    page: usize,
    /// Search word for the job feed.
    #[arg(long, default_value = "")]
    search: String,
}

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("demo failed: {err}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;
    info!(backend = %config.backend.base_url, "starting fixture demo (live backend unused)");

    let store = InMemorySessionStore::new();
    sign_in(&store, "demo-user", Role::from_stored(Some(cli.role.as_str())));
    let session = Session::load(&store);

    println!("navigation for {}:", session.role.label());
    for page in pages_for(session.role) {
        println!("  {} -> {}", page.label(), page.slug());
    }
    if !can_access(session.role, PageId::JobsApplied) {
        println!("jobs-applied: {ACCESS_DENIED_MESSAGE}");
    }

    let fixtures = Arc::new(FixtureBackend::new());
    let board = JobBoard::new(fixtures.clone(), fixtures.clone(), fixtures.clone());
    let desk = CourseDesk::new(fixtures.clone(), fixtures.clone());
    let now = Utc::now();

    let filters = JobFilters::new(&cli.search, None, None);
    let feed = board.feed(&filters).await?;
    let mut pager = Pager::new(feed.len(), JOBS_PER_PAGE);
    pager.goto(cli.page);
    let visible = window(&feed, pager.page(), JOBS_PER_PAGE);
    println!(
        "{}",
        serde_json::to_string_pretty(&json!({
            "job_board": { "page": pager.label(), "jobs": visible }
        }))?
    );

    if let Some(job) = feed.first() {
        let details = board.details(&session, &job.job_id, now).await?;
        println!(
            "{}",
            serde_json::to_string_pretty(&json!({
                "job_details": {
                    "job": details.job.job_name,
                    "status": details.status.to_string(),
                    "apply_label": details.apply_label,
                }
            }))?
        );
    }

    let courses = desk.catalog().await?;
    let course_window = window(&courses, 1, COURSES_PER_PAGE);
    let mut statuses = Vec::with_capacity(course_window.len());
    for course in course_window {
        let schedule = course
            .time_window()
            .map_err(jobswiftly_client::flows::FlowError::from)?;
        statuses.push(resolve_status(now, &schedule).to_string());
    }
    println!(
        "{}",
        serde_json::to_string_pretty(&json!({
            "courses": { "count": courses.len(), "statuses": statuses }
        }))?
    );

    Ok(())
}

/// Canned backend standing in for the live services. One logo key resolves,
/// one does not, so the passthrough behavior shows up in the output.
struct FixtureBackend {
    jobs: Vec<Job>,
    courses: Vec<Course>,
    cvs: Vec<CvRecord>,
}

impl FixtureBackend {
    fn new() -> Self {
        let now = Utc::now();
        let company = |id: &str, logo: &str| Company {
            company_id: id.to_string(),
            company_name: format!("Fixture Co {id}"),
            company_logo_name: logo.to_string(),
            company_description: None,
            company_address: None,
            company_country: None,
        };
        let job = |id: &str, name: &str, days: i64, logo: &str| Job {
            job_id: id.to_string(),
            job_name: name.to_string(),
            job_description: "Fixture posting".to_string(),
            job_location: "Remote".to_string(),
            job_salary_range: "1500-2500".to_string(),
            job_type: "Full Time".to_string(),
            job_expired: (now + Duration::days(days)).to_rfc3339(),
            company: company(id, logo),
        };
        let jobs = vec![
            job("j1", "Backend Engineer", 12, "acme.png"),
            job("j2", "Data Analyst", 0, "missing.png"),
            job("j3", "Site Reliability Engineer", -2, "acme.png"),
        ];
        let courses = vec![
            Course {
                course_id: "c1".to_string(),
                course_name: "Interview Preparation".to_string(),
                course_start_time: (now + Duration::days(3)).to_rfc3339(),
                course_end_time: (now + Duration::days(10)).to_rfc3339(),
            },
            Course {
                course_id: "c2".to_string(),
                course_name: "Resume Writing".to_string(),
                course_start_time: (now - Duration::days(1)).to_rfc3339(),
                course_end_time: (now + Duration::days(1)).to_rfc3339(),
            },
        ];
        let cvs = vec![CvRecord {
            cv_id: "cv1".to_string(),
            job: jobs[0].clone(),
            user: CvOwner {
                user_id: "demo-user".to_string(),
            },
        }];
        Self {
            jobs,
            courses,
            cvs,
        }
    }
}

#[async_trait]
impl JobDirectory for FixtureBackend {
    async fn fetch_published(&self, filters: &JobFilters) -> Result<Vec<Job>, BackendError> {
        let needle = filters.search_word.to_lowercase();
        Ok(self
            .jobs
            .iter()
            .filter(|job| needle.is_empty() || job.job_name.to_lowercase().contains(&needle))
            .cloned()
            .collect())
    }

    async fn fetch_job(&self, job_id: &str) -> Result<Job, BackendError> {
        self.jobs
            .iter()
            .find(|job| job.job_id == job_id)
            .cloned()
            .ok_or(BackendError::Status { code: 404 })
    }
}

#[async_trait]
impl CourseCatalog for FixtureBackend {
    async fn fetch_all(&self) -> Result<Vec<Course>, BackendError> {
        Ok(self.courses.clone())
    }

    async fn fetch_course(&self, course_id: &str) -> Result<Course, BackendError> {
        self.courses
            .iter()
            .find(|course| course.course_id == course_id)
            .cloned()
            .ok_or(BackendError::Status { code: 404 })
    }
}

#[async_trait]
impl SecondaryResourceResolver for FixtureBackend {
    async fn resolve(&self, key: &str) -> Result<String, BackendError> {
        if key == "missing.png" {
            Err(BackendError::Status { code: 404 })
        } else {
            Ok(format!("https://cdn.fixture/{key}"))
        }
    }
}

#[async_trait]
impl CompanyDirectory for FixtureBackend {
    async fn fetch_owned(&self, _user_id: &str) -> Result<Vec<Company>, BackendError> {
        Ok(self.jobs.iter().map(|job| job.company.clone()).collect())
    }

    async fn fetch_all(&self) -> Result<Vec<Company>, BackendError> {
        Ok(self.jobs.iter().map(|job| job.company.clone()).collect())
    }
}

#[async_trait]
impl SubmissionLedger for FixtureBackend {
    async fn cvs_for_user(&self, user_id: &str) -> Result<Vec<CvRecord>, BackendError> {
        Ok(self
            .cvs
            .iter()
            .filter(|cv| cv.user.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn create_cv(&self, _draft: &CvDraft) -> Result<(), BackendError> {
        Ok(())
    }

    async fn create_enrollment(
        &self,
        _course_id: &str,
        _user_id: &str,
    ) -> Result<(), BackendError> {
        Ok(())
    }
}
