use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::{current_user, FlowError};
use crate::backend::{CompanyDirectory, JobDirectory, SubmissionLedger};
use crate::enrichment::{enrich, enrich_one};
use crate::listing::{CvDraft, CvRecord, Job, JobFilters};
use crate::schedule::{resolve_status, PostingStatus};
use crate::session::Session;
use crate::submissions::{apply_label, has_submission, SubmissionRecord};

/// Jobs shown per page on the board.
pub const JOBS_PER_PAGE: usize = 5;
/// Applied-jobs history page size.
pub const CVS_PER_PAGE: usize = 4;

/// Job detail view: the enriched job plus everything the page derives from
/// the current user's submission snapshot.
#[derive(Debug, Clone, Serialize)]
pub struct JobDetails {
    pub job: Job,
    pub status: PostingStatus,
    pub already_applied: bool,
    pub apply_label: &'static str,
}

/// Job board and application flow.
pub struct JobBoard<J, C, S> {
    jobs: Arc<J>,
    companies: Arc<C>,
    ledger: Arc<S>,
}

impl<J, C, S> JobBoard<J, C, S>
where
    J: JobDirectory,
    C: CompanyDirectory,
    S: SubmissionLedger,
{
    pub fn new(jobs: Arc<J>, companies: Arc<C>, ledger: Arc<S>) -> Self {
        Self {
            jobs,
            companies,
            ledger,
        }
    }

    /// Published jobs matching the filters, logo-enriched, in backend order.
    /// The caller windows the result with the pagination module.
    pub async fn feed(&self, filters: &JobFilters) -> Result<Vec<Job>, FlowError> {
        let jobs = self.jobs.fetch_published(filters).await?;
        tracing::debug!(count = jobs.len(), "job feed fetched");
        Ok(enrich(jobs, &*self.companies).await)
    }

    /// Detail view for one job: enriched record, derived status, and the
    /// apply affordance framed by the dedup check.
    pub async fn details(
        &self,
        session: &Session,
        job_id: &str,
        now: DateTime<Utc>,
    ) -> Result<JobDetails, FlowError> {
        let user = current_user(session, "job details")?;

        let job = self.jobs.fetch_job(job_id).await?;
        let job = enrich_one(job, &*self.companies).await;
        let status = resolve_status(now, &job.time_window()?);

        let cvs = self.ledger.cvs_for_user(user.as_str()).await?;
        let snapshot: Vec<SubmissionRecord> = cvs.iter().map(SubmissionRecord::from).collect();
        let already_applied = has_submission(&snapshot, &job.job_id);

        Ok(JobDetails {
            job,
            status,
            already_applied,
            apply_label: apply_label(already_applied),
        })
    }

    /// Submit a CV for a job. An expired posting is rejected here with an
    /// explicit message; re-application is deliberately allowed. Server
    /// refusals come back as `FlowError::Rejected` with the server's text.
    pub async fn apply(
        &self,
        session: &Session,
        job: &Job,
        letter: &str,
        now: DateTime<Utc>,
    ) -> Result<(), FlowError> {
        let user = current_user(session, "apply to job")?;

        if resolve_status(now, &job.time_window()?).application_blocked() {
            return Err(FlowError::PostingExpired);
        }

        let draft = CvDraft {
            job_id: job.job_id.clone(),
            user_id: user.as_str().to_string(),
            cv_description: letter.to_string(),
        };
        self.ledger.create_cv(&draft).await?;
        tracing::info!(job_id = %job.job_id, "cv submitted");
        Ok(())
    }

    /// The current user's application history, logo-enriched through each
    /// CV's nested job.
    pub async fn applied(&self, session: &Session) -> Result<Vec<CvRecord>, FlowError> {
        let user = current_user(session, "jobs applied")?;
        let cvs = self.ledger.cvs_for_user(user.as_str()).await?;
        Ok(enrich(cvs, &*self.companies).await)
    }
}
