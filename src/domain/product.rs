/// Represents one inventory row.
///
/// `quantity` and `price` are kept as the text the operator typed.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub quantity: String,
    pub price: String,
}

/// Payload for adding a new product. The id is assigned by storage.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub quantity: String,
    pub price: String,
}

/// Payload for rewriting an existing product card.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductUpdate {
    pub name: String,
    pub price: String,
    pub quantity: String,
}

#[cfg(test)]
impl Product {
    pub fn new(
        id: i64,
        name: impl Into<String>,
        quantity: impl Into<String>,
        price: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            quantity: quantity.into(),
            price: price.into(),
        }
    }
}

#[cfg(test)]
impl NewProduct {
    pub fn new(
        name: impl Into<String>,
        quantity: impl Into<String>,
        price: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            quantity: quantity.into(),
            price: price.into(),
        }
    }
}
