use std::sync::Arc;

use super::{current_user, FlowError};
use crate::access::is_administrator;
use crate::backend::CompanyDirectory;
use crate::enrichment::enrich;
use crate::listing::Company;
use crate::session::Session;

/// Company management flow. Page access itself is gated by the role policy
/// at the call site; this flow handles the page-internal admin split: the
/// administrator sees the global listing, everyone else their own companies.
pub struct CompanyWorkspace<C> {
    companies: Arc<C>,
}

impl<C> CompanyWorkspace<C>
where
    C: CompanyDirectory,
{
    pub fn new(companies: Arc<C>) -> Self {
        Self { companies }
    }

    pub async fn companies(&self, session: &Session) -> Result<Vec<Company>, FlowError> {
        let base = if is_administrator(session.role) {
            self.companies.fetch_all().await?
        } else {
            let user = current_user(session, "company management")?;
            self.companies.fetch_owned(user.as_str()).await?
        };
        tracing::debug!(count = base.len(), "companies fetched");
        Ok(enrich(base, &*self.companies).await)
    }
}
