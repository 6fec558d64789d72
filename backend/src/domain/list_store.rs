//! List store domain logic for the shopping list.
//!
//! The store owns the list state and the edit target, and is the only thing
//! that mutates them. Every public operation runs to completion and reports
//! an [`OperationOutcome`] instead of returning an error, so a view can show
//! the message and re-render from the store.
//!
//! ## Business Rules
//!
//! - Ids come from a counter that starts at 1 and is never rewound, except by
//!   clearing the whole list
//! - `min_price ≤ max_price` for every item; a fixed price is min == max
//! - Edits change an item in place; the list order never changes
//! - At most one item is open for editing, and it always exists
//! - Every successful mutation is persisted; a failed write is reported but
//!   the in-memory change stays

use log::{debug, error, info, warn};
use shared::{ListSnapshot, OperationOutcome, PriceMode, PriceTotal};
use std::sync::Arc;

use crate::config::AppConfig;
use crate::domain::clock::Clock;
use crate::domain::commands::items::{AddItemCommand, AddItemResult, ExportResult, SaveEditCommand};
use crate::domain::export_service::ExportService;
use crate::domain::item_validation::ItemValidator;
use crate::domain::models::list_state::FIRST_ITEM_ID;
use crate::domain::models::{Item, ItemId, ListState};
use crate::domain::pricing::{calculate_total, PriceFormatter};
use crate::io::mappers::SnapshotMapper;
use crate::storage::{KeyValueStorage, ListRepository};

pub const SAVE_FAILED_MESSAGE: &str = "Failed to save data, please check storage permissions";
pub const ITEM_NOT_FOUND_MESSAGE: &str = "That item is no longer on the list";
pub const ALREADY_EMPTY_MESSAGE: &str = "The shopping list is already empty";
pub const EMPTY_EXPORT_MESSAGE: &str = "The shopping list is empty, nothing to export";
pub const IDS_EXHAUSTED_MESSAGE: &str = "No more items can be added, please clear the shopping list";

fn item_count_label(count: usize) -> String {
    if count == 1 {
        "1 item".to_string()
    } else {
        format!("{} items", count)
    }
}

/// Owner of the shopping list and its session state
pub struct ListStore<S: KeyValueStorage> {
    state: ListState,
    editing_id: Option<ItemId>,
    repository: ListRepository<S>,
    clock: Arc<dyn Clock>,
    validator: ItemValidator,
    formatter: PriceFormatter,
    export_service: ExportService,
}

impl<S: KeyValueStorage> ListStore<S> {
    /// Create a store around an already loaded state
    pub fn new(
        state: ListState,
        repository: ListRepository<S>,
        clock: Arc<dyn Clock>,
        config: &AppConfig,
    ) -> Self {
        Self {
            state,
            editing_id: None,
            repository,
            clock,
            validator: ItemValidator::new(config.currency_symbol.clone()),
            formatter: PriceFormatter::new(config.currency_symbol.clone()),
            export_service: ExportService::new(config.export_file_prefix.clone()),
        }
    }

    /// Load the stored list and create a store around it.
    ///
    /// A stored list that cannot be read or decoded is replaced by an empty
    /// list; the problem is logged and not reported to the user.
    pub fn open(repository: ListRepository<S>, clock: Arc<dyn Clock>, config: &AppConfig) -> Self {
        let state = match repository.load() {
            Ok(state) => state,
            Err(e) => {
                warn!("⚠️ Could not load stored list, starting with an empty list: {}", e);
                ListState::default()
            }
        };
        Self::new(state, repository, clock, config)
    }

    pub fn items(&self) -> &[Item] {
        &self.state.items
    }

    pub fn state(&self) -> &ListState {
        &self.state
    }

    pub fn get_item(&self, id: ItemId) -> Option<&Item> {
        self.state.find(id)
    }

    pub fn next_id(&self) -> ItemId {
        self.state.next_id
    }

    pub fn price_entry_mode(&self) -> PriceMode {
        self.state.price_entry_mode
    }

    pub fn editing_id(&self) -> Option<ItemId> {
        self.editing_id
    }

    pub fn is_empty(&self) -> bool {
        self.state.items.is_empty()
    }

    pub fn formatter(&self) -> &PriceFormatter {
        &self.formatter
    }

    pub fn export_service(&self) -> &ExportService {
        &self.export_service
    }

    /// Switch the default price mode for new items
    pub fn set_price_entry_mode(&mut self, mode: PriceMode) -> OperationOutcome {
        if self.state.price_entry_mode == mode {
            return OperationOutcome::info(format!("Already entering {} prices", mode));
        }

        self.state.price_entry_mode = mode;
        info!("Price entry mode switched to {}", mode);
        self.persist(OperationOutcome::success(format!("Now entering {} prices", mode)))
    }

    pub fn toggle_price_entry_mode(&mut self) -> OperationOutcome {
        let mode = self.state.price_entry_mode.toggled();
        self.set_price_entry_mode(mode)
    }

    /// Allocate a new item with the next id.
    ///
    /// Does not validate and does not add the item to the list. Returns `None`
    /// when the id counter is exhausted.
    pub fn create_item(
        &mut self,
        name: &str,
        min_price: f64,
        max_price: f64,
        price_mode: PriceMode,
        note: &str,
    ) -> Option<Item> {
        let id = self.state.allocate_id()?;

        Some(Item {
            id,
            name: name.to_string(),
            note: note.to_string(),
            min_price,
            max_price,
            price_mode,
            created_at: self.clock.now(),
        })
    }

    /// Validate the command against the current entry mode and append a new item
    pub fn add_item(&mut self, command: AddItemCommand) -> AddItemResult {
        let name = command.name.trim();
        let note = command.note.trim();
        let entry_mode = self.state.price_entry_mode;

        let validation = match entry_mode {
            PriceMode::Fixed => self.validator.validate_fixed_price(name, &command.fixed_price),
            PriceMode::Range => {
                self.validator
                    .validate_range_price(name, &command.min_price, &command.max_price)
            }
        };

        let prices = match validation {
            Ok(prices) => prices,
            Err(e) => {
                debug!("Rejected new item '{}': {}", name, e);
                return AddItemResult {
                    item_id: None,
                    outcome: OperationOutcome::error(e.to_string()),
                };
            }
        };

        // A range with equal bounds is stored as a fixed price
        let price_mode = match entry_mode {
            PriceMode::Fixed => PriceMode::Fixed,
            PriceMode::Range => PriceMode::for_prices(prices.min_price, prices.max_price),
        };

        let item = match self.create_item(name, prices.min_price, prices.max_price, price_mode, note) {
            Some(item) => item,
            None => {
                error!("❌ Item id counter exhausted at {}", self.state.next_id);
                return AddItemResult {
                    item_id: None,
                    outcome: OperationOutcome::error(IDS_EXHAUSTED_MESSAGE),
                };
            }
        };
        let item_id = item.id;
        let message = format!("Added \"{}\" to the shopping list", item.name);
        info!("✅ Added item {} '{}' ({})", item.id, item.name, item.price_mode);
        self.state.items.push(item);

        AddItemResult {
            item_id: Some(item_id),
            outcome: self.persist(OperationOutcome::success(message)),
        }
    }

    /// Open an item for editing, closing any other edit
    pub fn begin_edit(&mut self, id: ItemId) -> OperationOutcome {
        let name = match self.state.find(id) {
            Some(item) => item.name.clone(),
            None => {
                warn!("Cannot edit item {}: not found", id);
                return OperationOutcome::info(ITEM_NOT_FOUND_MESSAGE);
            }
        };

        if self.editing_id == Some(id) {
            return OperationOutcome::info(format!("Already editing \"{}\"", name));
        }

        if let Some(previous) = self.editing_id.replace(id) {
            debug!("Edit of item {} cancelled by edit of item {}", previous, id);
        }
        OperationOutcome::success(format!("Editing \"{}\"", name))
    }

    /// Validate and apply an edit. Edits are always validated as a range.
    pub fn save_edit(&mut self, command: SaveEditCommand) -> OperationOutcome {
        let name = command.name.trim();
        let note = command.note.trim();

        let prices = match self
            .validator
            .validate_range_price(name, &command.min_price, &command.max_price)
        {
            Ok(prices) => prices,
            Err(e) => {
                debug!("Rejected edit of item {}: {}", command.id, e);
                return OperationOutcome::error(e.to_string());
            }
        };

        let item = match self.state.find_mut(command.id) {
            Some(item) => item,
            None => {
                warn!("⚠️ Tried to save an edit for item {} which does not exist", command.id);
                return OperationOutcome::info(ITEM_NOT_FOUND_MESSAGE);
            }
        };

        let old_name = std::mem::replace(&mut item.name, name.to_string());
        item.note = note.to_string();
        item.min_price = prices.min_price;
        item.max_price = prices.max_price;
        item.price_mode = PriceMode::for_prices(prices.min_price, prices.max_price);
        info!("✅ Updated item {} '{}' ({})", item.id, item.name, item.price_mode);

        self.editing_id = None;
        self.persist(OperationOutcome::success(format!("Updated \"{}\"", old_name)))
    }

    /// Close the open edit, if any. Nothing is persisted.
    pub fn cancel_edit(&mut self) -> OperationOutcome {
        match self.editing_id.take() {
            Some(id) => {
                debug!("Edit of item {} cancelled", id);
                OperationOutcome::info("Edit cancelled")
            }
            None => OperationOutcome::info("Nothing is being edited"),
        }
    }

    /// Remove an item by id; removing a missing id changes nothing
    pub fn remove_item(&mut self, id: ItemId) -> OperationOutcome {
        let index = match self.state.items.iter().position(|item| item.id == id) {
            Some(index) => index,
            None => {
                debug!("Remove of item {} ignored: not found", id);
                return OperationOutcome::info(ITEM_NOT_FOUND_MESSAGE);
            }
        };

        let removed = self.state.items.remove(index);
        if self.editing_id == Some(id) {
            self.editing_id = None;
        }
        info!("🗑️ Removed item {} '{}'", removed.id, removed.name);

        self.persist(OperationOutcome::success(format!(
            "Removed \"{}\" from the shopping list",
            removed.name
        )))
    }

    /// Remove every item and restart ids at 1
    pub fn clear_all(&mut self) -> OperationOutcome {
        if self.state.items.is_empty() {
            return OperationOutcome::info(ALREADY_EMPTY_MESSAGE);
        }

        let count = self.state.items.len();
        self.state.items.clear();
        self.state.next_id = FIRST_ITEM_ID;
        self.editing_id = None;
        info!("🗑️ Cleared {} items", count);

        self.persist(OperationOutcome::success(format!("Cleared {}", item_count_label(count))))
    }

    pub fn calculate_total(&self) -> PriceTotal {
        calculate_total(&self.state.items)
    }

    pub fn format_range(&self, min_price: f64, max_price: f64) -> String {
        self.formatter.format_range(min_price, max_price)
    }

    /// Everything a view needs to render the list
    pub fn snapshot(&self) -> ListSnapshot {
        SnapshotMapper::from_store(self)
    }

    /// Build an export of the current list; refused when the list is empty
    pub fn export(&self) -> ExportResult {
        let exported_at = self.clock.now();

        match self.export_service.build_document(&self.state.items, exported_at) {
            Some(document) => {
                let message = format!(
                    "Exported shopping list ({})",
                    item_count_label(document.summary.item_count)
                );
                ExportResult {
                    document: Some(document),
                    file_name: Some(self.export_service.file_name(exported_at)),
                    outcome: OperationOutcome::success(message),
                }
            }
            None => {
                info!("Export refused: list is empty");
                ExportResult {
                    document: None,
                    file_name: None,
                    outcome: OperationOutcome::error(EMPTY_EXPORT_MESSAGE),
                }
            }
        }
    }

    /// Write the current state; on failure swap the outcome for a save error
    fn persist(&self, outcome: OperationOutcome) -> OperationOutcome {
        match self.repository.save(&self.state) {
            Ok(()) => outcome,
            Err(e) => {
                error!("❌ Failed to save shopping list: {:#}", e);
                OperationOutcome::error(SAVE_FAILED_MESSAGE)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::clock::FixedClock;
    use crate::storage::codec::encode_list;
    use crate::storage::InMemoryStorage;
    use chrono::{DateTime, TimeZone, Utc};
    use shared::OutcomeKind;

    const KEY: &str = "shopping-calculator-data";

    /// Storage whose writes always fail
    struct ReadOnlyStorage;

    impl KeyValueStorage for ReadOnlyStorage {
        fn put_value(&self, _key: &str, _value: &str) -> anyhow::Result<()> {
            Err(anyhow::anyhow!("storage is read-only"))
        }

        fn get_value(&self, _key: &str) -> anyhow::Result<Option<String>> {
            Ok(None)
        }
    }

    fn start_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap()
    }

    fn config() -> AppConfig {
        AppConfig {
            currency_symbol: "$".to_string(),
            ..AppConfig::default()
        }
    }

    fn create_test_store() -> (ListStore<InMemoryStorage>, InMemoryStorage, Arc<FixedClock>) {
        let storage = InMemoryStorage::new();
        let clock = Arc::new(FixedClock::new(start_time()));
        let store = ListStore::open(ListRepository::new(storage.clone(), KEY), clock.clone(), &config());
        (store, storage, clock)
    }

    fn add_fixed(store: &mut ListStore<InMemoryStorage>, name: &str, price: &str) -> ItemId {
        store.set_price_entry_mode(PriceMode::Fixed);
        store
            .add_item(AddItemCommand::fixed(name, price))
            .item_id
            .expect("item should be added")
    }

    fn add_range(store: &mut ListStore<InMemoryStorage>, name: &str, min: &str, max: &str) -> ItemId {
        store.set_price_entry_mode(PriceMode::Range);
        store
            .add_item(AddItemCommand::range(name, min, max))
            .item_id
            .expect("item should be added")
    }

    fn edit(id: ItemId, name: &str, min: &str, max: &str, note: &str) -> SaveEditCommand {
        SaveEditCommand {
            id,
            name: name.to_string(),
            note: note.to_string(),
            min_price: min.to_string(),
            max_price: max.to_string(),
        }
    }

    #[test]
    fn test_new_store_starts_empty() {
        let (store, _, _) = create_test_store();
        assert!(store.is_empty());
        assert_eq!(store.next_id(), 1);
        assert_eq!(store.price_entry_mode(), PriceMode::Fixed);
        assert_eq!(store.editing_id(), None);
        assert_eq!(store.calculate_total(), PriceTotal { min: 0.0, max: 0.0 });
    }

    #[test]
    fn test_add_fixed_price_item() {
        let (mut store, _, _) = create_test_store();

        let result = store.add_item(AddItemCommand::fixed("  Apples ", "3.50").with_note(" red "));

        assert_eq!(result.outcome.kind, OutcomeKind::Success);
        assert_eq!(result.outcome.message, "Added \"Apples\" to the shopping list");
        let item = store.get_item(result.item_id.unwrap()).unwrap();
        assert_eq!(item.name, "Apples");
        assert_eq!(item.note, "red");
        assert_eq!(item.min_price, 3.5);
        assert_eq!(item.max_price, 3.5);
        assert_eq!(item.price_mode, PriceMode::Fixed);
        assert_eq!(item.created_at, start_time());
    }

    #[test]
    fn test_add_uses_fields_for_current_entry_mode() {
        let (mut store, _, _) = create_test_store();
        store.set_price_entry_mode(PriceMode::Range);

        // Only the fixed field is filled in, but the store is in range mode
        let result = store.add_item(AddItemCommand::fixed("Apples", "3.50"));

        assert!(result.outcome.is_error());
        assert_eq!(result.outcome.message, "Please enter a valid minimum price");
        assert!(store.is_empty());
    }

    #[test]
    fn test_add_range_with_min_above_max_is_rejected() {
        let (mut store, storage, _) = create_test_store();
        add_fixed(&mut store, "Bread", "2");
        let stored_before = storage.get_value(KEY).unwrap();
        store.set_price_entry_mode(PriceMode::Range);
        let stored_before_mode = storage.get_value(KEY).unwrap();
        assert_ne!(stored_before, stored_before_mode);

        let result = store.add_item(AddItemCommand::range("Cheese", "7.25", "5"));

        assert!(result.item_id.is_none());
        assert_eq!(result.outcome.message, "The minimum price cannot be greater than the maximum price");
        assert_eq!(store.items().len(), 1);
        assert_eq!(store.next_id(), 2);
        assert_eq!(storage.get_value(KEY).unwrap(), stored_before_mode);
    }

    #[test]
    fn test_add_failures_report_specific_reasons() {
        let (mut store, _, _) = create_test_store();

        let missing_name = store.add_item(AddItemCommand::fixed("   ", "3"));
        assert_eq!(missing_name.outcome.message, "Please enter an item name");

        let bad_price = store.add_item(AddItemCommand::fixed("Apples", "three"));
        assert_eq!(bad_price.outcome.message, "Please enter a valid price");

        assert!(store.is_empty());
        assert_eq!(store.next_id(), 1);
    }

    #[test]
    fn test_range_with_equal_bounds_is_stored_as_fixed() {
        let (mut store, _, _) = create_test_store();
        let id = add_range(&mut store, "Eggs", "4", "4");
        assert_eq!(store.get_item(id).unwrap().price_mode, PriceMode::Fixed);
    }

    #[test]
    fn test_create_item_allocates_increasing_ids_without_appending() {
        let (mut store, _, clock) = create_test_store();

        let first = store.create_item("A", 1.0, 1.0, PriceMode::Fixed, "").unwrap();
        clock.advance(chrono::Duration::seconds(1));
        let second = store.create_item("B", 1.0, 2.0, PriceMode::Range, "n").unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(second.created_at, start_time() + chrono::Duration::seconds(1));
        assert!(store.is_empty());
        assert_eq!(store.next_id(), 3);
    }

    #[test]
    fn test_exhausted_id_counter_rejects_add() {
        let storage = InMemoryStorage::new();
        storage
            .put_value(KEY, &format!(r#"{{"items": [], "nextId": {}}}"#, ItemId::MAX))
            .unwrap();
        let clock = Arc::new(FixedClock::new(start_time()));
        let mut store = ListStore::open(ListRepository::new(storage.clone(), KEY), clock, &config());
        assert_eq!(store.next_id(), ItemId::MAX);
        let stored_before = storage.get_value(KEY).unwrap();

        let result = store.add_item(AddItemCommand::fixed("A", "1"));

        assert!(result.item_id.is_none());
        assert_eq!(result.outcome.kind, OutcomeKind::Error);
        assert_eq!(result.outcome.message, IDS_EXHAUSTED_MESSAGE);
        assert!(store.is_empty());
        assert_eq!(store.next_id(), ItemId::MAX);
        assert_eq!(storage.get_value(KEY).unwrap(), stored_before);
    }

    #[test]
    fn test_ids_never_reused_after_removal() {
        let (mut store, _, _) = create_test_store();

        let a = add_fixed(&mut store, "A", "1");
        let b = add_fixed(&mut store, "B", "1");
        store.remove_item(b);
        let c = add_fixed(&mut store, "C", "1");
        store.remove_item(a);
        let d = add_fixed(&mut store, "D", "1");

        assert!(a < b && b < c && c < d);
        assert_eq!(store.next_id(), d + 1);
    }

    #[test]
    fn test_remove_is_idempotent() {
        let (mut store, _, _) = create_test_store();
        let id = add_fixed(&mut store, "Apples", "3.5");

        let first = store.remove_item(id);
        assert!(first.is_success());
        assert_eq!(first.message, "Removed \"Apples\" from the shopping list");
        assert!(!store.state().contains(id));

        let second = store.remove_item(id);
        assert_eq!(second.kind, OutcomeKind::Info);
        assert!(store.is_empty());
    }

    #[test]
    fn test_remove_clears_edit_of_removed_item() {
        let (mut store, _, _) = create_test_store();
        let a = add_fixed(&mut store, "A", "1");
        let b = add_fixed(&mut store, "B", "1");

        store.begin_edit(a);
        store.remove_item(b);
        assert_eq!(store.editing_id(), Some(a));

        store.remove_item(a);
        assert_eq!(store.editing_id(), None);
    }

    #[test]
    fn test_begin_edit_switches_target() {
        let (mut store, _, _) = create_test_store();
        let a = add_fixed(&mut store, "A", "1");
        let b = add_fixed(&mut store, "B", "1");

        assert!(store.begin_edit(a).is_success());
        assert_eq!(store.begin_edit(a).kind, OutcomeKind::Info);
        assert_eq!(store.editing_id(), Some(a));

        store.begin_edit(b);
        assert_eq!(store.editing_id(), Some(b));

        let missing = store.begin_edit(99);
        assert_eq!(missing.kind, OutcomeKind::Info);
        assert_eq!(store.editing_id(), Some(b));
    }

    #[test]
    fn test_save_edit_updates_in_place() {
        let (mut store, _, _) = create_test_store();
        let a = add_fixed(&mut store, "Apples", "3.5");
        let b = add_range(&mut store, "Cheese", "5", "7.25");
        let created_at = store.get_item(a).unwrap().created_at;

        store.begin_edit(a);
        let outcome = store.save_edit(edit(a, "Green apples", "2", "4", "bag"));

        assert!(outcome.is_success());
        assert_eq!(outcome.message, "Updated \"Apples\"");
        assert_eq!(store.editing_id(), None);
        let ids: Vec<ItemId> = store.items().iter().map(|item| item.id).collect();
        assert_eq!(ids, vec![a, b]);
        let item = store.get_item(a).unwrap();
        assert_eq!(item.name, "Green apples");
        assert_eq!(item.note, "bag");
        assert_eq!((item.min_price, item.max_price), (2.0, 4.0));
        assert_eq!(item.price_mode, PriceMode::Range);
        assert_eq!(item.created_at, created_at);
    }

    #[test]
    fn test_save_edit_validation_failure_changes_nothing() {
        let (mut store, _, _) = create_test_store();
        let a = add_fixed(&mut store, "Apples", "3.5");
        store.begin_edit(a);

        let outcome = store.save_edit(edit(a, "Apples", "5", "1", ""));

        assert!(outcome.is_error());
        assert_eq!(store.editing_id(), Some(a));
        let item = store.get_item(a).unwrap();
        assert_eq!((item.min_price, item.max_price), (3.5, 3.5));
    }

    #[test]
    fn test_save_edit_on_missing_item_is_reported_as_info() {
        let (mut store, storage, _) = create_test_store();
        add_fixed(&mut store, "Apples", "3.5");
        let stored_before = storage.get_value(KEY).unwrap();

        let outcome = store.save_edit(edit(42, "Ghost", "1", "1", ""));

        assert_eq!(outcome.kind, OutcomeKind::Info);
        assert_eq!(outcome.message, ITEM_NOT_FOUND_MESSAGE);
        assert_eq!(storage.get_value(KEY).unwrap(), stored_before);
    }

    #[test]
    fn test_cancel_edit_clears_target() {
        let (mut store, _, _) = create_test_store();
        let a = add_fixed(&mut store, "A", "1");
        store.begin_edit(a);

        store.cancel_edit();

        assert_eq!(store.editing_id(), None);
        assert_eq!(store.cancel_edit().kind, OutcomeKind::Info);
    }

    #[test]
    fn test_clear_all_resets_ids() {
        let (mut store, _, _) = create_test_store();
        let a = add_fixed(&mut store, "A", "1");
        add_fixed(&mut store, "B", "2");
        store.begin_edit(a);

        let outcome = store.clear_all();

        assert!(outcome.is_success());
        assert_eq!(outcome.message, "Cleared 2 items");
        assert!(store.is_empty());
        assert_eq!(store.next_id(), 1);
        assert_eq!(store.editing_id(), None);
    }

    #[test]
    fn test_clear_all_on_empty_list_is_info() {
        let (mut store, storage, _) = create_test_store();

        let outcome = store.clear_all();

        assert_eq!(outcome.kind, OutcomeKind::Info);
        assert_eq!(outcome.message, ALREADY_EMPTY_MESSAGE);
        assert!(storage.get_value(KEY).unwrap().is_none());
    }

    #[test]
    fn test_mutations_are_persisted() {
        let (mut store, storage, clock) = create_test_store();
        add_fixed(&mut store, "Apples", "3.5");
        add_range(&mut store, "Cheese", "5", "7.25");

        let reopened = ListStore::open(ListRepository::new(storage, KEY), clock, &config());

        assert_eq!(reopened.state(), store.state());
        assert_eq!(reopened.price_entry_mode(), PriceMode::Range);
        assert_eq!(reopened.editing_id(), None);
    }

    #[test]
    fn test_corrupt_storage_opens_as_empty_list() {
        let storage = InMemoryStorage::new();
        storage.put_value(KEY, "definitely not json").unwrap();
        let clock = Arc::new(FixedClock::new(start_time()));

        let store = ListStore::open(ListRepository::new(storage, KEY), clock, &config());

        assert_eq!(store.state(), &ListState::default());
    }

    #[test]
    fn test_open_restores_stored_state() {
        let storage = InMemoryStorage::new();
        let clock = Arc::new(FixedClock::new(start_time()));
        let state = ListState {
            items: vec![Item {
                id: 4,
                name: "Tea".to_string(),
                note: String::new(),
                min_price: 1.0,
                max_price: 2.0,
                price_mode: PriceMode::Range,
                created_at: start_time(),
            }],
            next_id: 5,
            price_entry_mode: PriceMode::Range,
        };
        storage.put_value(KEY, &encode_list(&state).unwrap()).unwrap();

        let store = ListStore::open(ListRepository::new(storage, KEY), clock, &config());

        assert_eq!(store.state(), &state);
    }

    #[test]
    fn test_write_failure_is_reported_but_change_is_kept() {
        let clock = Arc::new(FixedClock::new(start_time()));
        let mut store = ListStore::open(ListRepository::new(ReadOnlyStorage, KEY), clock, &config());

        let result = store.add_item(AddItemCommand::fixed("Apples", "3.5"));

        assert_eq!(result.outcome.kind, OutcomeKind::Error);
        assert_eq!(result.outcome.message, SAVE_FAILED_MESSAGE);
        assert_eq!(result.item_id, Some(1));
        assert_eq!(store.items().len(), 1);
    }

    #[test]
    fn test_toggle_price_entry_mode() {
        let (mut store, _, _) = create_test_store();

        assert!(store.toggle_price_entry_mode().is_success());
        assert_eq!(store.price_entry_mode(), PriceMode::Range);
        assert_eq!(store.set_price_entry_mode(PriceMode::Range).kind, OutcomeKind::Info);
        store.toggle_price_entry_mode();
        assert_eq!(store.price_entry_mode(), PriceMode::Fixed);
    }

    #[test]
    fn test_format_range_uses_configured_symbol() {
        let (store, _, _) = create_test_store();
        assert_eq!(store.format_range(3.0, 3.0), "$3.00");
        assert_eq!(store.format_range(3.0, 5.0), "$3.00 – $5.00");
    }

    #[test]
    fn test_snapshot_marks_item_being_edited() {
        let (mut store, _, _) = create_test_store();
        let a = add_fixed(&mut store, "Apples", "3.5");
        let b = add_range(&mut store, "Cheese", "5", "7.25");
        store.begin_edit(b);

        let snapshot = store.snapshot();

        assert!(!snapshot.is_empty);
        assert_eq!(snapshot.editing_id, Some(b));
        assert_eq!(snapshot.price_entry_mode, PriceMode::Range);
        assert_eq!(snapshot.formatted_total, "$8.50 – $10.75");
        assert_eq!(snapshot.items[0].id, a);
        assert!(!snapshot.items[0].is_editing);
        assert!(snapshot.items[1].is_editing);
        assert_eq!(snapshot.items[1].formatted_price, "$5.00 – $7.25");
    }

    #[test]
    fn test_export_refused_when_empty() {
        let (store, _, _) = create_test_store();

        let result = store.export();

        assert!(result.document.is_none());
        assert!(result.file_name.is_none());
        assert!(result.outcome.is_error());
        assert_eq!(result.outcome.message, EMPTY_EXPORT_MESSAGE);
    }

    #[test]
    fn test_export_snapshot() {
        let (mut store, _, clock) = create_test_store();
        add_fixed(&mut store, "Apples", "3.50");
        add_range(&mut store, "Cheese", "5.00", "7.25");
        clock.set(Utc.with_ymd_and_hms(2024, 6, 3, 9, 0, 0).unwrap());

        let result = store.export();

        let document = result.document.unwrap();
        assert_eq!(result.file_name.as_deref(), Some("shopping-list-2024-06-03.json"));
        assert_eq!(result.outcome.message, "Exported shopping list (2 items)");
        assert_eq!(document.summary.item_count, 2);
        assert_eq!(document.total_price, PriceTotal { min: 8.5, max: 10.75 });
        assert_eq!(document.export_time, "2024-06-03T09:00:00.000Z");
    }
}
