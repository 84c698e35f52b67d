//! Bot store trait definition.

use std::collections::BTreeMap;

use mybots_types::bot::{BotId, BotRecord};
use mybots_types::error::StorageError;

/// Every bot record keyed by id.
pub type BotMap = BTreeMap<BotId, BotRecord>;

/// Whole-collection persistence for bot records.
///
/// The store is read and written as a unit: `load` returns every record and
/// `save` replaces the backing contents. Implementations must make `save`
/// atomic from a reader's point of view. Sequencing concurrent
/// read-modify-write cycles is the caller's job (see `BotService`).
///
/// Uses native async fn in traits (Rust 2024 edition, no async_trait macro).
pub trait BotStore: Send + Sync {
    /// Load all records. An absent backing store yields an empty map;
    /// malformed backing data is an error, never a partial result.
    fn load(&self) -> impl std::future::Future<Output = Result<BotMap, StorageError>> + Send;

    /// Replace the backing contents with `bots`.
    fn save(
        &self,
        bots: &BotMap,
    ) -> impl std::future::Future<Output = Result<(), StorageError>> + Send;
}
