mod meta;
pub use self::meta::{Links, Meta, MetaLink, PaginatedResponse};

mod income;
pub use self::income::{IncomeItem, IncomesResponse};

mod order;
pub use self::order::{OrderItem, OrdersResponse};

mod sale;
pub use self::sale::{SaleItem, SalesResponse};

mod stock;
pub use self::stock::{StockItem, StocksResponse};
