pub mod entry;
pub mod snapshot;

pub use entry::HoldingEntry;
pub use snapshot::MarketSnapshot;
