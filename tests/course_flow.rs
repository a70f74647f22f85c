use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};

use jobswiftly_client::backend::{BackendError, CourseCatalog, SubmissionLedger};
use jobswiftly_client::flows::{CourseDesk, FlowError, COURSES_PER_PAGE};
use jobswiftly_client::listing::{Course, CvDraft, CvRecord};
use jobswiftly_client::pagination::{window, Pager};
use jobswiftly_client::schedule::PostingStatus;
use jobswiftly_client::session::Session;

fn now() -> DateTime<Utc> {
    DateTime::parse_from_rfc3339("2026-05-01T12:00:00Z")
        .expect("valid test instant")
        .with_timezone(&Utc)
}

fn course(id: &str, starts_in_hours: i64, ends_in_hours: i64) -> Course {
    Course {
        course_id: id.to_string(),
        course_name: format!("Course {id}"),
        course_start_time: (now() + Duration::hours(starts_in_hours)).to_rfc3339(),
        course_end_time: (now() + Duration::hours(ends_in_hours)).to_rfc3339(),
    }
}

struct StubCatalog {
    courses: Vec<Course>,
}

#[async_trait]
impl CourseCatalog for StubCatalog {
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

#[derive(Default)]
struct StubLedger {
    reject_with: Option<String>,
    enrollments: Mutex<Vec<(String, String)>>,
}

#[async_trait]
impl SubmissionLedger for StubLedger {
    async fn cvs_for_user(&self, _user_id: &str) -> Result<Vec<CvRecord>, BackendError> {
        Ok(Vec::new())
    }

    async fn create_cv(&self, _draft: &CvDraft) -> Result<(), BackendError> {
        Ok(())
    }

    async fn create_enrollment(
        &self,
        course_id: &str,
        user_id: &str,
    ) -> Result<(), BackendError> {
        if let Some(message) = &self.reject_with {
            return Err(BackendError::Rejected(message.clone()));
        }
        self.enrollments
            .lock()
            .expect("enrollment recorder poisoned")
            .push((course_id.to_string(), user_id.to_string()));
        Ok(())
    }
}

fn desk(
    courses: Vec<Course>,
    ledger: StubLedger,
) -> (CourseDesk<StubCatalog, StubLedger>, Arc<StubLedger>) {
    let ledger = Arc::new(ledger);
    (
        CourseDesk::new(Arc::new(StubCatalog { courses }), ledger.clone()),
        ledger,
    )
}

fn student() -> Session {
    Session::signed_in("user-1", jobswiftly_client::access::Role::JobSeeker)
}

#[tokio::test]
async fn catalog_pages_hold_four_courses() {
    let courses: Vec<Course> = (0..10).map(|i| course(&format!("c{i}"), 24, 48)).collect();
    let (desk, _) = desk(courses, StubLedger::default());

    let catalog = desk.catalog().await.expect("catalog loads");
    let mut pager = Pager::new(catalog.len(), COURSES_PER_PAGE);
    assert_eq!(pager.total_pages(), 3);

    pager.goto(3);
    let last = window(&catalog, pager.page(), COURSES_PER_PAGE);
    assert_eq!(last.len(), 2);
    assert_eq!(last[0].course_id, "c8");
}

#[tokio::test]
async fn upcoming_course_is_open_for_enrollment() {
    let (desk, _) = desk(vec![course("c1", 49, 200)], StubLedger::default());

    let details = desk
        .details(&student(), "c1", now())
        .await
        .expect("details load");
    assert_eq!(details.status, PostingStatus::CountdownDays(3));
    assert!(details.enrollment_open);
}

#[tokio::test]
async fn running_course_is_closed() {
    let (desk, _) = desk(vec![course("c1", -1, 1)], StubLedger::default());

    let details = desk
        .details(&student(), "c1", now())
        .await
        .expect("details load");
    assert_eq!(details.status, PostingStatus::Active);
    assert_eq!(details.status.to_string(), "Starting");
    assert!(!details.enrollment_open);
}

#[tokio::test]
async fn finished_course_is_closed() {
    let (desk, _) = desk(vec![course("c1", -48, -24)], StubLedger::default());

    let details = desk
        .details(&student(), "c1", now())
        .await
        .expect("details load");
    assert_eq!(details.status, PostingStatus::Ended);
    assert!(!details.enrollment_open);
}

#[tokio::test]
async fn enroll_succeeds_before_the_start() {
    let upcoming = course("c1", 24, 96);
    let (desk, ledger) = desk(vec![upcoming.clone()], StubLedger::default());

    desk.enroll(&student(), &upcoming, now())
        .await
        .expect("enrollment accepted");

    let enrollments = ledger.enrollments.lock().expect("recorder");
    assert_eq!(
        *enrollments,
        vec![("c1".to_string(), "user-1".to_string())]
    );
}

#[tokio::test]
async fn enroll_is_refused_once_the_course_runs() {
    let running = course("c1", -1, 1);
    let (desk, ledger) = desk(vec![running.clone()], StubLedger::default());

    let err = desk
        .enroll(&student(), &running, now())
        .await
        .expect_err("closed course refused");
    assert!(matches!(err, FlowError::EnrollmentClosed));
    assert!(ledger.enrollments.lock().expect("recorder").is_empty());
}

#[tokio::test]
async fn enroll_requires_a_signed_in_user() {
    let upcoming = course("c1", 24, 96);
    let (desk, _) = desk(vec![upcoming.clone()], StubLedger::default());

    let err = desk
        .enroll(&Session::guest(), &upcoming, now())
        .await
        .expect_err("guest refused");
    assert!(matches!(err, FlowError::SessionAbsent));
}

#[tokio::test]
async fn server_refusal_carries_its_message_through() {
    let upcoming = course("c1", 24, 96);
    let ledger = StubLedger {
        reject_with: Some("Already enrolled on this course.".to_string()),
        ..StubLedger::default()
    };
    let (desk, _) = desk(vec![upcoming.clone()], ledger);

    let err = desk
        .enroll(&student(), &upcoming, now())
        .await
        .expect_err("server refusal propagates");
    match err {
        FlowError::Rejected(message) => assert_eq!(message, "Already enrolled on this course."),
        other => panic!("expected Rejected, got {other:?}"),
    }
}
