//! The closed set of fetchable resources and the trait tying each one to
//! its item shape.

use std::str::FromStr;

use serde::de::DeserializeOwned;

/// Logical name of a fetchable collection.
///
/// The set is closed: adding a resource means adding a variant here, an item
/// struct under [`crate::types`], and a [`ResourceItem`] impl. Nothing in
/// the client changes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Resource {
    Incomes,
    Orders,
    Sales,
    Stocks,
}

impl Resource {
    /// URL path segment for this resource, as it appears under `/api/`.
    pub fn path(&self) -> &'static str {
        match self {
            Resource::Incomes => "incomes",
            Resource::Orders => "orders",
            Resource::Sales => "sales",
            Resource::Stocks => "stocks",
        }
    }
}

impl std::fmt::Display for Resource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path())
    }
}

impl FromStr for Resource {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "incomes" => Ok(Resource::Incomes),
            "orders" => Ok(Resource::Orders),
            "sales" => Ok(Resource::Sales),
            "stocks" => Ok(Resource::Stocks),
            _ => Err(()),
        }
    }
}

/// Ties an item shape to its resource identifier, so a typed fetch can never
/// pair a path with the wrong decoded type.
pub trait ResourceItem: DeserializeOwned {
    /// The resource whose collections contain this item shape.
    const RESOURCE: Resource;
}
