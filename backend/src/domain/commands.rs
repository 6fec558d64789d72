//! Domain-level command and result types.
//! The view builds commands from raw form input; prices stay as text until
//! the store validates them.

pub mod items {
    use crate::domain::models::ItemId;
    use shared::{ExportDocument, OperationOutcome};

    /// Input for adding an item. Which price fields are read depends on the
    /// store's entry mode, the same way only one price group of the form is
    /// visible at a time.
    #[derive(Debug, Clone, Default)]
    pub struct AddItemCommand {
        pub name: String,
        pub note: String,
        pub fixed_price: String,
        pub min_price: String,
        pub max_price: String,
    }

    impl AddItemCommand {
        pub fn fixed(name: impl Into<String>, price: impl Into<String>) -> Self {
            Self {
                name: name.into(),
                fixed_price: price.into(),
                ..Self::default()
            }
        }

        pub fn range(
            name: impl Into<String>,
            min_price: impl Into<String>,
            max_price: impl Into<String>,
        ) -> Self {
            Self {
                name: name.into(),
                min_price: min_price.into(),
                max_price: max_price.into(),
                ..Self::default()
            }
        }

        pub fn with_note(mut self, note: impl Into<String>) -> Self {
            self.note = note.into();
            self
        }
    }

    /// Input for saving an edit; always validated as a range
    #[derive(Debug, Clone)]
    pub struct SaveEditCommand {
        pub id: ItemId,
        pub name: String,
        pub note: String,
        pub min_price: String,
        pub max_price: String,
    }

    /// Result of adding an item
    #[derive(Debug, Clone)]
    pub struct AddItemResult {
        /// Id of the new item; `None` if validation failed
        pub item_id: Option<ItemId>,
        pub outcome: OperationOutcome,
    }

    /// Result of an export request
    #[derive(Debug, Clone)]
    pub struct ExportResult {
        /// The document, absent when the list is empty
        pub document: Option<ExportDocument>,
        /// Suggested file name for delivery, e.g. `shopping-list-2024-05-01.json`
        pub file_name: Option<String>,
        pub outcome: OperationOutcome,
    }
}
