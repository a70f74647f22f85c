//! Collaborator contracts the core consumes. Each backend resource is an
//! independent port so flows can be exercised against stubs in isolation.

mod http;

pub use http::HttpBackend;

use async_trait::async_trait;

use crate::listing::{Company, Course, CvDraft, CvRecord, Job, JobFilters};

/// Failure taxonomy shared by every collaborator call. Flows decide the
/// user-visible behavior; the ports never log-and-swallow.
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    #[error("backend unreachable: {0}")]
    Transport(String),
    #[error("backend answered with status {code}")]
    Status { code: u16 },
    #[error("backend payload could not be decoded: {0}")]
    Decode(String),
    /// Server-side refusal with a message meant for the user, e.g. a
    /// submission past its deadline.
    #[error("{0}")]
    Rejected(String),
}

/// Published-job listing and per-job lookup.
#[async_trait]
pub trait JobDirectory: Send + Sync {
    async fn fetch_published(&self, filters: &JobFilters) -> Result<Vec<Job>, BackendError>;
    async fn fetch_job(&self, job_id: &str) -> Result<Job, BackendError>;
}

/// Course catalog and per-course lookup.
#[async_trait]
pub trait CourseCatalog: Send + Sync {
    async fn fetch_all(&self) -> Result<Vec<Course>, BackendError>;
    async fn fetch_course(&self, course_id: &str) -> Result<Course, BackendError>;
}

/// Logo/avatar resolution: a stored asset key becomes a fetch-able URL.
#[async_trait]
pub trait SecondaryResourceResolver: Send + Sync {
    async fn resolve(&self, key: &str) -> Result<String, BackendError>;
}

/// Company listings, owner-scoped or global, plus logo resolution.
#[async_trait]
pub trait CompanyDirectory: SecondaryResourceResolver {
    async fn fetch_owned(&self, user_id: &str) -> Result<Vec<Company>, BackendError>;
    async fn fetch_all(&self) -> Result<Vec<Company>, BackendError>;
}

/// Prior submissions and submission creation for the current user.
#[async_trait]
pub trait SubmissionLedger: Send + Sync {
    async fn cvs_for_user(&self, user_id: &str) -> Result<Vec<CvRecord>, BackendError>;
    async fn create_cv(&self, draft: &CvDraft) -> Result<(), BackendError>;
    async fn create_enrollment(&self, course_id: &str, user_id: &str)
        -> Result<(), BackendError>;
}
