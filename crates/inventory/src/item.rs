use serde::{Deserialize, Serialize};

use marketday_core::{DomainError, DomainResult, Entity, ItemId, ValueObject};

/// Currency symbol every price string is prefixed with.
pub const CURRENCY_SYMBOL: char = '$';

/// Price as written on the menu board (`"$3.75"`), plus its parsed amount.
///
/// Serialized as the text it was parsed from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Price {
    text: String,
    amount: f64,
}

impl Price {
    /// Parse a `$`-prefixed price string.
    ///
    /// The remainder after the symbol must be a finite, non-negative number.
    pub fn parse(text: &str) -> DomainResult<Self> {
        let trimmed = text.trim();
        let digits = trimmed.strip_prefix(CURRENCY_SYMBOL).ok_or_else(|| {
            DomainError::invalid_price(format!("{text:?} has no '{CURRENCY_SYMBOL}' prefix"))
        })?;

        let amount: f64 = digits
            .parse()
            .map_err(|_| DomainError::invalid_price(format!("{text:?} has no numeric amount")))?;

        if !amount.is_finite() || amount < 0.0 {
            return Err(DomainError::invalid_price(format!(
                "{text:?} is not a non-negative amount"
            )));
        }

        Ok(Self {
            text: trimmed.to_string(),
            amount,
        })
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl ValueObject for Price {}

impl core::fmt::Display for Price {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.text)
    }
}

impl core::str::FromStr for Price {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Price {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Price> for String {
    fn from(value: Price) -> Self {
        value.text
    }
}

/// A named, priced product.
///
/// Immutable once built. Clones share the same [`ItemId`] and therefore stand
/// for the same product; two items built separately are distinct even when
/// their name and price match.
#[derive(Debug, Clone)]
pub struct Item {
    id: ItemId,
    name: String,
    price: Price,
}

impl Item {
    pub fn new(name: impl Into<String>, price: &str) -> DomainResult<Self> {
        Self::with_id(ItemId::new(), name, price)
    }

    pub fn with_id(id: ItemId, name: impl Into<String>, price: &str) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("item name cannot be empty"));
        }

        Ok(Self {
            id,
            name,
            price: Price::parse(price)?,
        })
    }

    pub fn id_typed(&self) -> ItemId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Price amount with the currency symbol stripped.
    pub fn price(&self) -> f64 {
        self.price.amount()
    }

    pub fn price_text(&self) -> &str {
        self.price.as_str()
    }

    pub fn price_value(&self) -> &Price {
        &self.price
    }
}

impl Entity for Item {
    type Id = ItemId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl PartialEq for Item {
    fn eq(&self, other: &Self) -> bool {
        self.same_entity(other)
    }
}

impl Eq for Item {}
