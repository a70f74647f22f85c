//! Joins a fetched base collection with per-item secondary-resource lookups.
//!
//! The base list and the asset lookup are separate backend resources with
//! independent availability, so a failed lookup must never sink the list: the
//! affected item keeps its unresolved key and everything else proceeds.

use crate::backend::SecondaryResourceResolver;
use crate::listing::{Company, CvRecord, Job};

/// Implemented by records that reference an asset key needing resolution to
/// a displayable URL.
pub trait HasSecondaryResource {
    fn secondary_key(&self) -> &str;
    fn set_secondary_url(&mut self, url: String);
}

impl HasSecondaryResource for Company {
    fn secondary_key(&self) -> &str {
        &self.company_logo_name
    }

    fn set_secondary_url(&mut self, url: String) {
        self.company_logo_name = url;
    }
}

impl HasSecondaryResource for Job {
    fn secondary_key(&self) -> &str {
        self.company.secondary_key()
    }

    fn set_secondary_url(&mut self, url: String) {
        self.company.set_secondary_url(url);
    }
}

impl HasSecondaryResource for CvRecord {
    fn secondary_key(&self) -> &str {
        self.job.secondary_key()
    }

    fn set_secondary_url(&mut self, url: String) {
        self.job.set_secondary_url(url);
    }
}

/// Resolve every item's secondary resource, merging results back by original
/// index. Output length and order always equal the input's; per-item failures
/// leave the original key in place as a passthrough value.
///
/// Lookups are awaited one at a time; the index-keyed merge means a
/// concurrent implementation could be dropped in without reordering output.
pub async fn enrich<T>(mut items: Vec<T>, resolver: &dyn SecondaryResourceResolver) -> Vec<T>
where
    T: HasSecondaryResource,
{
    let mut resolved: Vec<Option<String>> = Vec::with_capacity(items.len());
    for item in &items {
        let key = item.secondary_key();
        match resolver.resolve(key).await {
            Ok(url) => resolved.push(Some(url)),
            Err(err) => {
                tracing::debug!(key, %err, "secondary resource unresolved, keeping key");
                resolved.push(None);
            }
        }
    }

    for (item, url) in items.iter_mut().zip(resolved) {
        if let Some(url) = url {
            item.set_secondary_url(url);
        }
    }
    items
}

/// Single-item variant for detail pages.
pub async fn enrich_one<T>(item: T, resolver: &dyn SecondaryResourceResolver) -> T
where
    T: HasSecondaryResource,
{
    let mut enriched = enrich(vec![item], resolver).await;
    // enrich() always returns exactly as many items as it was given.
    enriched
        .pop()
        .unwrap_or_else(|| unreachable!("enrich preserves length"))
}
