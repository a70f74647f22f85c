//! Page-level orchestration: fetch a base collection, enrich it, consult the
//! dedup snapshot, and hand the result to the pagination window. Each flow
//! takes the `Session` as an explicit argument and reaches the backend only
//! through the collaborator ports.

mod companies;
mod courses;
mod jobs;

pub use companies::CompanyWorkspace;
pub use courses::{CourseDesk, CourseDetails, COURSES_PER_PAGE};
pub use jobs::{JobBoard, JobDetails, CVS_PER_PAGE, JOBS_PER_PAGE};

use crate::backend::BackendError;
use crate::schedule::InvalidTimestamp;
use crate::session::{Session, SessionAbsent, UserId};

/// Failures a page has to translate into a user-visible state.
#[derive(Debug, thiserror::Error)]
pub enum FlowError {
    /// Identity-requiring action attempted without a signed-in user.
    #[error("action requires a signed-in user")]
    SessionAbsent,
    #[error("Job expired!!")]
    PostingExpired,
    #[error("Cannot Enroll On This Course Anymore!")]
    EnrollmentClosed,
    /// Server-side refusal, message shown to the user verbatim.
    #[error("{0}")]
    Rejected(String),
    #[error(transparent)]
    InvalidTimestamp(#[from] InvalidTimestamp),
    #[error(transparent)]
    Backend(BackendError),
}

impl From<BackendError> for FlowError {
    fn from(err: BackendError) -> Self {
        match err {
            BackendError::Rejected(message) => Self::Rejected(message),
            other => Self::Backend(other),
        }
    }
}

impl From<SessionAbsent> for FlowError {
    fn from(_: SessionAbsent) -> Self {
        Self::SessionAbsent
    }
}

/// Identity precondition shared by the flows. The abort is logged; no login
/// prompt is raised here, that is a page decision.
fn current_user<'a>(session: &'a Session, action: &'static str) -> Result<&'a UserId, FlowError> {
    session.require_user().map_err(|err| {
        tracing::warn!(action, "aborting: no signed-in user");
        FlowError::from(err)
    })
}
