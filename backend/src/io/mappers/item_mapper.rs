use shared::{Item, ItemView};

use crate::domain::models::Item as DomainItem;
use crate::domain::pricing::PriceFormatter;
use crate::storage::codec::format_timestamp;

pub struct ItemMapper;

impl ItemMapper {
    /// Convert a domain item to the shared Item DTO
    pub fn to_dto(domain: &DomainItem) -> Item {
        Item {
            id: domain.id,
            name: domain.name.clone(),
            note: domain.note.clone(),
            min_price: domain.min_price,
            max_price: domain.max_price,
            price_mode: domain.price_mode,
            created_at: format_timestamp(&domain.created_at),
        }
    }

    /// Convert a list of domain items to DTOs
    pub fn to_dto_list(domain_items: &[DomainItem]) -> Vec<Item> {
        domain_items.iter().map(Self::to_dto).collect()
    }

    /// Convert a domain item to a row ready for display
    pub fn to_view(domain: &DomainItem, formatter: &PriceFormatter, is_editing: bool) -> ItemView {
        ItemView {
            id: domain.id,
            name: domain.name.clone(),
            note: domain.note.clone(),
            formatted_price: formatter.format_range(domain.min_price, domain.max_price),
            price_mode: domain.price_mode,
            created_date: domain.created_at.format("%Y-%m-%d").to_string(),
            is_editing,
            min_price: domain.min_price,
            max_price: domain.max_price,
        }
    }
}
