use crate::error::Result;
use crate::item::{Item, NewItem};

use super::ItemFilter;

/// The two call shapes the item store issues against persistence
///
/// Implementations assign ids and timestamps and enforce that the referenced
/// secret exists.
pub trait DocumentStore {
    fn create_record(&self, fields: NewItem) -> Result<Item>;

    fn query_records(&self, filter: &ItemFilter) -> Result<Vec<Item>>;
}
