use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use jobswiftly_client::access::{can_access, PageId, Role, ACCESS_DENIED_MESSAGE};
use jobswiftly_client::backend::{BackendError, CompanyDirectory, SecondaryResourceResolver};
use jobswiftly_client::flows::{CompanyWorkspace, FlowError};
use jobswiftly_client::listing::Company;
use jobswiftly_client::session::Session;

fn company(id: &str, logo: &str) -> Company {
    Company {
        company_id: id.to_string(),
        company_name: format!("Company {id}"),
        company_logo_name: logo.to_string(),
        company_description: None,
        company_address: None,
        company_country: None,
    }
}

#[derive(Default)]
struct StubCompanies {
    owned: Vec<Company>,
    all: Vec<Company>,
    calls: Mutex<Vec<String>>,
}

impl StubCompanies {
    fn record(&self, call: &str) {
        self.calls
            .lock()
            .expect("call recorder poisoned")
            .push(call.to_string());
    }
}

#[async_trait]
impl SecondaryResourceResolver for StubCompanies {
    async fn resolve(&self, key: &str) -> Result<String, BackendError> {
        Ok(format!("https://cdn.test/{key}"))
    }
}

#[async_trait]
impl CompanyDirectory for StubCompanies {
    async fn fetch_owned(&self, user_id: &str) -> Result<Vec<Company>, BackendError> {
        self.record(&format!("owned:{user_id}"));
        Ok(self.owned.clone())
    }

    async fn fetch_all(&self) -> Result<Vec<Company>, BackendError> {
        self.record("all");
        Ok(self.all.clone())
    }
}

#[tokio::test]
async fn administrator_sees_the_global_listing() {
    let stub = Arc::new(StubCompanies {
        all: vec![company("1", "a.png"), company("2", "b.png")],
        ..StubCompanies::default()
    });
    let workspace = CompanyWorkspace::new(stub.clone());
    let session = Session::signed_in("admin-1", Role::Administrator);

    let companies = workspace.companies(&session).await.expect("listing loads");
    assert_eq!(companies.len(), 2);
    assert_eq!(companies[0].company_logo_name, "https://cdn.test/a.png");
    assert_eq!(*stub.calls.lock().expect("calls"), vec!["all".to_string()]);
}

#[tokio::test]
async fn job_finder_sees_only_their_own_companies() {
    let stub = Arc::new(StubCompanies {
        owned: vec![company("1", "a.png")],
        ..StubCompanies::default()
    });
    let workspace = CompanyWorkspace::new(stub.clone());
    let session = Session::signed_in("finder-7", Role::JobFinder);

    let companies = workspace.companies(&session).await.expect("listing loads");
    assert_eq!(companies.len(), 1);
    assert_eq!(
        *stub.calls.lock().expect("calls"),
        vec!["owned:finder-7".to_string()]
    );
}

#[tokio::test]
async fn guest_cannot_load_the_owner_scoped_listing() {
    let workspace = CompanyWorkspace::new(Arc::new(StubCompanies::default()));

    let err = workspace
        .companies(&Session::guest())
        .await
        .expect_err("guest refused");
    assert!(matches!(err, FlowError::SessionAbsent));
}

#[test]
fn the_page_gate_matches_the_management_roles() {
    assert!(can_access(Role::Administrator, PageId::CompanyManagement));
    assert!(can_access(Role::JobFinder, PageId::CompanyManagement));
    assert!(!can_access(Role::JobSeeker, PageId::CompanyManagement));
    assert!(!can_access(Role::Guest, PageId::CompanyManagement));
    assert!(!ACCESS_DENIED_MESSAGE.is_empty());
}
