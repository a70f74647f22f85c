//! Wire-shaped records the client core consumes. Field names follow the
//! backend payloads so the records deserialize straight off the collaborator
//! responses.

use serde::{Deserialize, Serialize};

use crate::schedule::{InvalidTimestamp, TimeWindow};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    pub company_id: String,
    pub company_name: String,
    /// Logo key as stored by the backend; replaced in place by the resolved
    /// image URL once enrichment has run.
    pub company_logo_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_country: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    pub job_id: String,
    pub job_name: String,
    pub job_description: String,
    pub job_location: String,
    pub job_salary_range: String,
    pub job_type: String,
    /// Expiry timestamp string as the backend sends it.
    pub job_expired: String,
    pub company: Company,
}

impl Job {
    pub fn time_window(&self) -> Result<TimeWindow, InvalidTimestamp> {
        TimeWindow::parse(None, &self.job_expired)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub course_id: String,
    pub course_name: String,
    pub course_start_time: String,
    pub course_end_time: String,
}

impl Course {
    pub fn time_window(&self) -> Result<TimeWindow, InvalidTimestamp> {
        TimeWindow::parse(Some(&self.course_start_time), &self.course_end_time)
    }
}

/// A CV application tying a user to a job, as returned by the CV lookups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CvRecord {
    pub cv_id: String,
    pub job: Job,
    pub user: CvOwner,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CvOwner {
    pub user_id: String,
}

/// Payload for a new CV application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CvDraft {
    pub job_id: String,
    pub user_id: String,
    pub cv_description: String,
}

/// Search filters for the published-jobs listing. The backend treats the
/// literal `"default"` as "no constraint" for location and salary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobFilters {
    pub search_word: String,
    pub job_location: String,
    pub job_salary_range: String,
}

impl JobFilters {
    pub fn unconstrained() -> Self {
        Self {
            search_word: String::new(),
            job_location: "default".to_string(),
            job_salary_range: "default".to_string(),
        }
    }

    pub fn new(search_word: &str, location: Option<&str>, salary: Option<&str>) -> Self {
        Self {
            search_word: search_word.to_string(),
            job_location: location.filter(|v| !v.is_empty()).unwrap_or("default").to_string(),
            job_salary_range: salary.filter(|v| !v.is_empty()).unwrap_or("default").to_string(),
        }
    }
}
