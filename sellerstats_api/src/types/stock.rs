use serde::{Deserialize, Serialize};

use super::PaginatedResponse;
use crate::resource::{Resource, ResourceItem};

/// A stock level snapshot for one article at one warehouse.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct StockItem {
    pub date: String,

    pub last_change_date: String,

    pub supplier_article: String,

    pub tech_size: String,

    pub barcode: i64,

    pub quantity: i64,

    pub is_supply: bool,

    pub is_realization: bool,

    pub quantity_full: i64,

    pub warehouse_name: String,

    pub in_way_to_client: i64,

    pub in_way_from_client: i64,

    pub nm_id: i64,

    pub subject: String,

    pub category: String,

    pub brand: String,

    pub sc_code: i64,

    pub price: String,

    pub discount: String,
}

impl ResourceItem for StockItem {
    const RESOURCE: Resource = Resource::Stocks;
}

pub type StocksResponse = PaginatedResponse<StockItem>;
