use intake_model::ExistingRecord;

/// Query surface of the external record store.
///
/// The detector never talks to storage except through these two calls, and
/// passes their errors back to the caller unchanged.
pub trait RecordStore {
    type Error;

    /// At most one record whose identifier equals `identifier`.
    fn find_by_exact_identifier(
        &self,
        identifier: &str,
    ) -> Result<Option<ExistingRecord>, Self::Error>;

    /// Up to `limit` records, most recent first.
    fn find_recent_candidates(&self, limit: usize) -> Result<Vec<ExistingRecord>, Self::Error>;
}

impl<S: RecordStore + ?Sized> RecordStore for &S {
    type Error = S::Error;

    fn find_by_exact_identifier(
        &self,
        identifier: &str,
    ) -> Result<Option<ExistingRecord>, Self::Error> {
        (**self).find_by_exact_identifier(identifier)
    }

    fn find_recent_candidates(&self, limit: usize) -> Result<Vec<ExistingRecord>, Self::Error> {
        (**self).find_recent_candidates(limit)
    }
}
