use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::{current_user, FlowError};
use crate::backend::{CourseCatalog, SubmissionLedger};
use crate::listing::Course;
use crate::schedule::{resolve_status, PostingStatus};
use crate::session::Session;

/// Courses shown per page in the catalog.
pub const COURSES_PER_PAGE: usize = 4;

#[derive(Debug, Clone, Serialize)]
pub struct CourseDetails {
    pub course: Course,
    pub status: PostingStatus,
    /// Whether the enroll affordance is live; enrollment closes the moment
    /// the course starts.
    pub enrollment_open: bool,
}

/// Course catalog and enrollment flow.
pub struct CourseDesk<C, S> {
    catalog: Arc<C>,
    ledger: Arc<S>,
}

impl<C, S> CourseDesk<C, S>
where
    C: CourseCatalog,
    S: SubmissionLedger,
{
    pub fn new(catalog: Arc<C>, ledger: Arc<S>) -> Self {
        Self { catalog, ledger }
    }

    /// All courses in backend order; the catalog page windows the result.
    /// Courses carry no secondary resource, so there is nothing to enrich.
    pub async fn catalog(&self) -> Result<Vec<Course>, FlowError> {
        let courses = self.catalog.fetch_all().await?;
        tracing::debug!(count = courses.len(), "course catalog fetched");
        Ok(courses)
    }

    /// Detail view with the derived schedule status and enrollment gate.
    pub async fn details(
        &self,
        session: &Session,
        course_id: &str,
        now: DateTime<Utc>,
    ) -> Result<CourseDetails, FlowError> {
        current_user(session, "course details")?;

        let course = self.catalog.fetch_course(course_id).await?;
        let status = resolve_status(now, &course.time_window()?);
        Ok(CourseDetails {
            enrollment_open: status.enrollment_open(),
            course,
            status,
        })
    }

    /// Enroll the current user. Closed courses are refused locally; the
    /// server may still refuse (duplicate enrollment, unknown course) and
    /// its message is surfaced verbatim.
    pub async fn enroll(
        &self,
        session: &Session,
        course: &Course,
        now: DateTime<Utc>,
    ) -> Result<(), FlowError> {
        let user = current_user(session, "enroll in course")?;

        if !resolve_status(now, &course.time_window()?).enrollment_open() {
            return Err(FlowError::EnrollmentClosed);
        }

        self.ledger
            .create_enrollment(&course.course_id, user.as_str())
            .await?;
        tracing::info!(course_id = %course.course_id, "enrollment created");
        Ok(())
    }
}
