use async_trait::async_trait;
use serde_json::json;

use super::{
    BackendError, CompanyDirectory, CourseCatalog, JobDirectory, SecondaryResourceResolver,
    SubmissionLedger,
};
use crate::listing::{Company, Course, CvDraft, CvRecord, Job, JobFilters};

/// `reqwest` adapter speaking the marketplace backend's REST routes. Thin by
/// design: request shaping and error mapping only, no domain decisions.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: reqwest::Client,
    base_url: String,
}

impl HttpBackend {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<T, BackendError> {
        let response = self
            .client
            .get(self.url(path))
            .send()
            .await
            .map_err(transport)?;
        let response = checked(response)?;
        response
            .json()
            .await
            .map_err(|err| BackendError::Decode(err.to_string()))
    }

    /// Creation endpoints report refusals as a JSON body with a `message`
    /// field meant for the user.
    async fn post_creation(
        &self,
        path: &str,
        body: serde_json::Value,
    ) -> Result<(), BackendError> {
        let response = self
            .client
            .post(self.url(path))
            .json(&body)
            .send()
            .await
            .map_err(transport)?;

        if response.status().is_success() {
            return Ok(());
        }
        let code = response.status().as_u16();
        let message = response
            .json::<serde_json::Value>()
            .await
            .ok()
            .and_then(|value| value.get("message")?.as_str().map(str::to_string));
        match message {
            Some(message) => Err(BackendError::Rejected(message)),
            None => Err(BackendError::Status { code }),
        }
    }
}

fn transport(err: reqwest::Error) -> BackendError {
    BackendError::Transport(err.to_string())
}

fn checked(response: reqwest::Response) -> Result<reqwest::Response, BackendError> {
    if response.status().is_success() {
        Ok(response)
    } else {
        Err(BackendError::Status {
            code: response.status().as_u16(),
        })
    }
}

#[async_trait]
impl JobDirectory for HttpBackend {
    async fn fetch_published(&self, filters: &JobFilters) -> Result<Vec<Job>, BackendError> {
        let response = self
            .client
            .post(self.url("/job/getAllJobPublished"))
            .json(filters)
            .send()
            .await
            .map_err(transport)?;
        checked(response)?
            .json()
            .await
            .map_err(|err| BackendError::Decode(err.to_string()))
    }

    async fn fetch_job(&self, job_id: &str) -> Result<Job, BackendError> {
        self.get_json(&format!("/job/getJobViaId/{job_id}")).await
    }
}

#[async_trait]
impl CourseCatalog for HttpBackend {
    async fn fetch_all(&self) -> Result<Vec<Course>, BackendError> {
        self.get_json("/course/getAllCourses").await
    }

    async fn fetch_course(&self, course_id: &str) -> Result<Course, BackendError> {
        self.get_json(&format!("/course/getCourseViaCourseId/{course_id}"))
            .await
    }
}

#[async_trait]
impl SecondaryResourceResolver for HttpBackend {
    async fn resolve(&self, key: &str) -> Result<String, BackendError> {
        let response = self
            .client
            .get(self.url(&format!("/company/getImage/{key}")))
            .send()
            .await
            .map_err(transport)?;
        checked(response)?
            .text()
            .await
            .map_err(|err| BackendError::Decode(err.to_string()))
    }
}

#[async_trait]
impl CompanyDirectory for HttpBackend {
    async fn fetch_owned(&self, user_id: &str) -> Result<Vec<Company>, BackendError> {
        self.get_json(&format!("/company/getAllCompanyManage/{user_id}"))
            .await
    }

    async fn fetch_all(&self) -> Result<Vec<Company>, BackendError> {
        self.get_json("/company/getAllCompanyNonUser").await
    }
}

#[async_trait]
impl SubmissionLedger for HttpBackend {
    async fn cvs_for_user(&self, user_id: &str) -> Result<Vec<CvRecord>, BackendError> {
        self.get_json(&format!("/cv/getCvViaUserId/{user_id}")).await
    }

    async fn create_cv(&self, draft: &CvDraft) -> Result<(), BackendError> {
        self.post_creation(
            "/cv/createCv",
            json!({
                "job_id": draft.job_id,
                "user_id": draft.user_id,
                "cv_description": draft.cv_description,
            }),
        )
        .await
    }

    async fn create_enrollment(
        &self,
        course_id: &str,
        user_id: &str,
    ) -> Result<(), BackendError> {
        self.post_creation(
            "/courseStudent/createCourseStudent/",
            json!({ "course_id": course_id, "user_id": user_id }),
        )
        .await
    }
}
