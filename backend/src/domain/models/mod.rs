pub mod item;
pub mod list_state;

pub use item::{Item, ItemId};
pub use list_state::ListState;
