use serde::{Deserialize, Serialize};

use crate::listing::CvRecord;

/// Minimal fact the dedup check needs: user X already submitted to entity Y.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionRecord {
    pub subject_entity_id: String,
    pub owner_user_id: String,
}

impl From<&CvRecord> for SubmissionRecord {
    fn from(cv: &CvRecord) -> Self {
        Self {
            subject_entity_id: cv.job.job_id.clone(),
            owner_user_id: cv.user.user_id.clone(),
        }
    }
}

/// Whether a prior submission exists in the snapshot. Linear scan with
/// short-circuit; the result is order-independent. This only reframes the
/// submit affordance, it never blocks re-submission.
pub fn has_submission(records: &[SubmissionRecord], subject_entity_id: &str) -> bool {
    records
        .iter()
        .any(|record| record.subject_entity_id == subject_entity_id)
}

/// Submit button text for the job detail page.
pub const fn apply_label(already_applied: bool) -> &'static str {
    if already_applied {
        "Apply Again"
    } else {
        "Apply Now"
    }
}
