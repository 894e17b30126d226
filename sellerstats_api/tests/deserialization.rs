use sellerstats_api::types::{
    IncomesResponse, OrdersResponse, SalesResponse, StocksResponse,
};

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

#[test]
fn deserialize_incomes_full() {
    let json = load_fixture("incomes.json");
    let resp: IncomesResponse = serde_json::from_str(&json).unwrap();
    assert_eq!(resp.data.len(), 2);

    let income = &resp.data[0];
    assert_eq!(income.income_id, 13045937);
    assert_eq!(income.number, "");
    assert_eq!(income.supplier_article, "TSH-0405-BLK");
    assert_eq!(income.barcode, 2037539112356);
    assert_eq!(income.quantity, 120);
    assert_eq!(income.total_price, "54000.00");
    assert_eq!(income.warehouse_name, "Koledino");
    assert_eq!(income.nm_id, 172839405);

    assert_eq!(resp.meta.current_page, 1);
    assert_eq!(resp.meta.last_page, 4);
    assert_eq!(resp.meta.per_page, "2");
    assert_eq!(resp.meta.total, 7);
    assert_eq!(resp.meta.from, Some(1));
    assert_eq!(resp.meta.to, Some(2));
}

#[test]
fn incomes_page_one_link_shape() {
    let json = load_fixture("incomes.json");
    let resp: IncomesResponse = serde_json::from_str(&json).unwrap();

    // First page: no prev, a next (current_page < last_page), and exactly
    // one active entry among the pagination controls.
    assert!(resp.links.prev.is_none());
    assert!(resp.links.next.is_some());
    let active: Vec<_> = resp.meta.links.iter().filter(|l| l.active).collect();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].label, "1");
}

#[test]
fn deserialize_incomes_empty() {
    let json = load_fixture("incomes_empty.json");
    let resp: IncomesResponse = serde_json::from_str(&json).unwrap();
    assert!(resp.data.is_empty());
    assert_eq!(resp.meta.total, 0);
    assert_eq!(resp.meta.from, None);
    assert_eq!(resp.meta.to, None);
    assert!(resp.links.next.is_none());
}

#[test]
fn deserialize_orders() {
    let json = load_fixture("orders.json");
    let resp: OrdersResponse = serde_json::from_str(&json).unwrap();
    assert_eq!(resp.data.len(), 1);

    let order = &resp.data[0];
    assert_eq!(order.g_number, "1786499123456789012");
    assert_eq!(order.discount_percent, 25);
    assert_eq!(order.oblast, "Moskovskaya");
    assert_eq!(order.odid, "1014523987");
    assert!(!order.is_cancel);
    assert_eq!(order.cancel_dt, None);
}

#[test]
fn deserialize_sales() {
    let json = load_fixture("sales.json");
    let resp: SalesResponse = serde_json::from_str(&json).unwrap();
    assert_eq!(resp.data.len(), 1);

    let sale = &resp.data[0];
    assert_eq!(sale.sale_id, "S9993456789");
    // Unlike orders, the sale discount comes over the wire as decimal text.
    assert_eq!(sale.discount_percent, "10.00");
    assert!(sale.is_realization);
    assert!(!sale.is_supply);
    assert_eq!(sale.promo_code_discount, None);
    assert_eq!(sale.odid, None);
    assert_eq!(sale.is_storno, None);
    assert_eq!(sale.for_pay, "382.50");
    assert_eq!(sale.country_name, "Russia");
}

#[test]
fn deserialize_stocks() {
    let json = load_fixture("stocks.json");
    let resp: StocksResponse = serde_json::from_str(&json).unwrap();
    assert_eq!(resp.data.len(), 1);

    let stock = &resp.data[0];
    assert_eq!(stock.quantity, 42);
    assert_eq!(stock.quantity_full, 55);
    assert_eq!(stock.in_way_to_client, 9);
    assert_eq!(stock.in_way_from_client, 4);
    assert_eq!(stock.sc_code, 206348);
    assert_eq!(stock.price, "3850.00");
    assert_eq!(stock.discount, "25.00");
}

#[test]
fn deserialize_malformed_json_returns_error() {
    let bad_json = r#"{"data": not valid json}"#;
    let result = serde_json::from_str::<IncomesResponse>(bad_json);
    assert!(result.is_err());
}

#[test]
fn deserialize_missing_required_fields_returns_error() {
    let json = r#"{"data": [], "links": {"first": "x", "last": "x", "prev": null, "next": null}}"#;
    let result = serde_json::from_str::<IncomesResponse>(json);
    assert!(result.is_err());
}
