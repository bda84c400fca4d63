use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use num_traits::Zero;
use uuid::Uuid;

use super::errors::ItemError;

/// An entry on a shopping list.
///
/// Invariant: `is_purchased` is true iff `price` and `quantity` are both
/// present and positive. `updated_at` doubles as the purchase timestamp
/// once the item is marked purchased.
#[derive(Debug, Clone)]
pub struct Item {
    pub id: Uuid,
    pub list_id: Uuid,
    pub name: String,
    pub category: Option<String>,
    pub notes: Option<String>,
    pub is_purchased: bool,
    pub price: Option<BigDecimal>,
    pub quantity: Option<BigDecimal>,
    pub market_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Item {
    pub fn new(
        list_id: Uuid,
        name: String,
        category: Option<String>,
        notes: Option<String>,
    ) -> Result<Self, ItemError> {
        if name.trim().is_empty() {
            return Err(ItemError::NameEmpty);
        }

        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            list_id,
            name,
            category,
            notes,
            is_purchased: false,
            price: None,
            quantity: None,
            market_id: None,
            created_at: now,
            updated_at: now,
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn from_repository(
        id: Uuid,
        list_id: Uuid,
        name: String,
        category: Option<String>,
        notes: Option<String>,
        is_purchased: bool,
        price: Option<BigDecimal>,
        quantity: Option<BigDecimal>,
        market_id: Option<Uuid>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            list_id,
            name,
            category,
            notes,
            is_purchased,
            price,
            quantity,
            market_id,
            created_at,
            updated_at,
        }
    }

    /// Records a purchase. `updated_at` becomes the purchase timestamp.
    pub fn mark_purchased(
        &mut self,
        price: BigDecimal,
        quantity: BigDecimal,
        market_id: Option<Uuid>,
    ) -> Result<(), ItemError> {
        if price <= BigDecimal::zero() {
            return Err(ItemError::NonPositivePrice);
        }
        if quantity <= BigDecimal::zero() {
            return Err(ItemError::NonPositiveQuantity);
        }

        self.is_purchased = true;
        self.price = Some(price);
        self.quantity = Some(quantity);
        self.market_id = market_id;
        self.updated_at = Utc::now();
        Ok(())
    }

    /// Reverts a purchase, clearing price, quantity and market together
    /// with the flag so no partial purchase state survives.
    pub fn unmark_purchased(&mut self) {
        self.is_purchased = false;
        self.price = None;
        self.quantity = None;
        self.market_id = None;
        self.updated_at = Utc::now();
    }

    pub fn rename(&mut self, name: String) -> Result<(), ItemError> {
        if name.trim().is_empty() {
            return Err(ItemError::NameEmpty);
        }
        self.name = name;
        self.updated_at = Utc::now();
        Ok(())
    }

    /// A copy for a duplicated list: same descriptive fields, no
    /// purchase state.
    pub fn duplicate_into(&self, list_id: Uuid) -> Item {
        let now = Utc::now();
        Item {
            id: Uuid::new_v4(),
            list_id,
            name: self.name.clone(),
            category: self.category.clone(),
            notes: self.notes.clone(),
            is_purchased: false,
            price: None,
            quantity: None,
            market_id: None,
            created_at: now,
            updated_at: now,
        }
    }
}
