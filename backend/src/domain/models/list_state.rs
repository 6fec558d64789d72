use shared::PriceMode;

use super::item::{Item, ItemId};

/// First id handed out by an empty list
pub const FIRST_ITEM_ID: ItemId = 1;

/// The durable part of the list: everything that is persisted.
///
/// The edit target is session state and lives on the store, not here.
#[derive(Debug, Clone, PartialEq)]
pub struct ListState {
    /// Items in insertion (display) order
    pub items: Vec<Item>,
    /// Next id to allocate; always greater than every id handed out so far
    pub next_id: ItemId,
    /// Default price mode for new-item entry
    pub price_entry_mode: PriceMode,
}

impl Default for ListState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            next_id: FIRST_ITEM_ID,
            price_entry_mode: PriceMode::Fixed,
        }
    }
}

impl ListState {
    pub fn find(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn find_mut(&mut self, id: ItemId) -> Option<&mut Item> {
        self.items.iter_mut().find(|item| item.id == id)
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.find(id).is_some()
    }

    /// Highest id currently present, if any
    pub fn max_item_id(&self) -> Option<ItemId> {
        self.items.iter().map(|item| item.id).max()
    }

    /// Hand out the next id and advance the counter.
    ///
    /// Returns `None` once the counter can no longer move past the id it
    /// would hand out.
    pub fn allocate_id(&mut self) -> Option<ItemId> {
        let id = self.next_id;
        self.next_id = id.checked_add(1)?;
        Some(id)
    }
}
