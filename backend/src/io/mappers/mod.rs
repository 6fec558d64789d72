pub mod item_mapper;
pub mod snapshot_mapper;

pub use item_mapper::ItemMapper;
pub use snapshot_mapper::SnapshotMapper;
