//! Entry snapshot supply
//!
//! The aggregation engine never talks to storage directly. Anything that can
//! hand over a snapshot of the current entries implements [`EntrySource`], so
//! reports can run over the JSON repository or over an in-memory fixture.

use crate::error::CashbookResult;
use crate::models::Entry;

use super::entries::EntryRepository;

/// A supplier of the full entry collection
pub trait EntrySource {
    /// Copy of every entry, in store order
    fn snapshot(&self) -> CashbookResult<Vec<Entry>>;
}

impl EntrySource for [Entry] {
    fn snapshot(&self) -> CashbookResult<Vec<Entry>> {
        Ok(self.to_vec())
    }
}

impl EntrySource for Vec<Entry> {
    fn snapshot(&self) -> CashbookResult<Vec<Entry>> {
        Ok(self.clone())
    }
}

impl EntrySource for EntryRepository {
    fn snapshot(&self) -> CashbookResult<Vec<Entry>> {
        self.get_all()
    }
}
