use tracing::debug;

use crate::db::{DocumentStore, ItemFilter};
use crate::error::Result;

use super::Item;

/// Lazy handle over a `find` — nothing hits the store until `fetch`
///
/// Every `fetch` re-issues the query. Ordering is whatever the store returns.
#[derive(Debug)]
pub struct ItemQuery<'a, S> {
    store: &'a S,
    filter: ItemFilter,
}

impl<'a, S: DocumentStore> ItemQuery<'a, S> {
    pub(crate) fn new(store: &'a S, filter: ItemFilter) -> Self {
        Self { store, filter }
    }

    pub fn filter(&self) -> &ItemFilter {
        &self.filter
    }

    pub fn fetch(&self) -> Result<Vec<Item>> {
        let items = self.store.query_records(&self.filter)?;
        debug!(filter = ?self.filter, count = items.len(), "queried items");
        Ok(items)
    }
}
