/// A record held in one of the ordered collections.
///
/// Records are identified by a positive integer ID and built from a draft
/// carrying only the content fields.
pub trait Record: Clone + Send + Sync + 'static {
    /// Content fields submitted by a client.
    type Draft: Send;

    /// Collection name used in logs.
    const KIND: &'static str;

    fn id(&self) -> u64;

    /// Build the record that stores `draft` under `id`.
    fn from_draft(id: u64, draft: Self::Draft) -> Self;
}
