use serde::{Deserialize, Serialize};

use super::PaginatedResponse;
use crate::resource::{Resource, ResourceItem};

/// A sale (or return) record. Monetary fields are decimal text on the wire;
/// `discount_percent` is text here even though orders carry it as a number.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SaleItem {
    pub g_number: String,

    pub date: String,

    pub last_change_date: String,

    pub supplier_article: String,

    pub tech_size: String,

    pub barcode: i64,

    pub total_price: String,

    pub discount_percent: String,

    pub is_supply: bool,

    pub is_realization: bool,

    pub promo_code_discount: Option<String>,

    pub warehouse_name: String,

    pub country_name: String,

    pub oblast_okrug_name: String,

    pub region_name: String,

    pub income_id: i64,

    pub sale_id: String,

    pub odid: Option<String>,

    pub spp: String,

    pub for_pay: String,

    pub finished_price: String,

    pub price_with_disc: String,

    pub nm_id: i64,

    pub subject: String,

    pub category: String,

    pub brand: String,

    pub is_storno: Option<bool>,
}

impl ResourceItem for SaleItem {
    const RESOURCE: Resource = Resource::Sales;
}

pub type SalesResponse = PaginatedResponse<SaleItem>;
