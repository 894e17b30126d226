use serde::{Deserialize, Serialize};

use super::PaginatedResponse;
use crate::resource::{Resource, ResourceItem};

/// A warehouse income (supply acceptance) record. Prices are decimal text
/// and dates are wire-format text, passed through verbatim.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct IncomeItem {
    pub income_id: i64,

    pub number: String,

    pub date: String,

    pub last_change_date: String,

    pub supplier_article: String,

    pub tech_size: String,

    pub barcode: i64,

    pub quantity: i64,

    pub total_price: String,

    pub date_close: String,

    pub warehouse_name: String,

    pub nm_id: i64,
}

impl ResourceItem for IncomeItem {
    const RESOURCE: Resource = Resource::Incomes;
}

pub type IncomesResponse = PaginatedResponse<IncomeItem>;
