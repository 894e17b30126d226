use serde::{Deserialize, Serialize};

use super::PaginatedResponse;
use crate::resource::{Resource, ResourceItem};

/// A customer order record. `cancel_dt` is null unless `is_cancel` is set.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct OrderItem {
    pub g_number: String,

    pub date: String,

    pub last_change_date: String,

    pub supplier_article: String,

    pub tech_size: String,

    pub barcode: i64,

    pub total_price: String,

    pub discount_percent: i64,

    pub warehouse_name: String,

    pub oblast: String,

    pub income_id: i64,

    pub odid: String,

    pub nm_id: i64,

    pub subject: String,

    pub category: String,

    pub brand: String,

    pub is_cancel: bool,

    pub cancel_dt: Option<String>,
}

impl ResourceItem for OrderItem {
    const RESOURCE: Resource = Resource::Orders;
}

pub type OrdersResponse = PaginatedResponse<OrderItem>;
