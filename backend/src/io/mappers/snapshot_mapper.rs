use shared::ListSnapshot;

use super::item_mapper::ItemMapper;
use crate::domain::list_store::ListStore;
use crate::storage::KeyValueStorage;

pub struct SnapshotMapper;

impl SnapshotMapper {
    /// Build the rendering snapshot the view re-reads after each operation
    pub fn from_store<S: KeyValueStorage>(store: &ListStore<S>) -> ListSnapshot {
        let formatter = store.formatter();
        let editing_id = store.editing_id();
        let total = store.calculate_total();

        ListSnapshot {
            items: store
                .items()
                .iter()
                .map(|item| ItemMapper::to_view(item, formatter, editing_id == Some(item.id)))
                .collect(),
            total,
            formatted_total: formatter.format_total(&total),
            price_entry_mode: store.price_entry_mode(),
            editing_id,
            is_empty: store.is_empty(),
        }
    }
}
