use crate::core::errors::SettlementError;
use crate::core::models::DateWindow;
use crate::core::services::settlement_amount;
use crate::infrastructure::upstream::in_memory::InMemoryTransactions;
use crate::tests::{create_test_service, refund, sale};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

const NOON: &str = "2024-03-01T12:00:00Z";

#[test]
fn test_sales_only_sum() {
    let txs = vec![sale("t1", "10.50", NOON), sale("t2", "4.25", NOON), sale("t3", "0.25", NOON)];
    assert_eq!(settlement_amount(&txs).unwrap(), dec!(15.00));
}

#[test]
fn test_refunds_only_negated_sum() {
    let txs = vec![refund("t1", "10.00", NOON), refund("t2", "2.50", NOON)];
    assert_eq!(settlement_amount(&txs).unwrap(), dec!(-12.50));
}

#[test]
fn test_mixed_sale_and_refund() {
    let txs = vec![sale("t1", "100.00", NOON), refund("t2", "30.00", NOON)];
    assert_eq!(settlement_amount(&txs).unwrap(), dec!(70.00));
}

#[test]
fn test_empty_list_is_zero() {
    assert_eq!(settlement_amount(&[]).unwrap(), Decimal::ZERO);
}

#[test]
fn test_fixed_point_has_no_float_drift() {
    let txs: Vec<_> = (0..10).map(|i| sale(&format!("t{}", i), "0.10", NOON)).collect();
    assert_eq!(settlement_amount(&txs).unwrap(), dec!(1.00));
}

#[test]
fn test_unparseable_amount_is_upstream_error() {
    let txs = vec![sale("t1", "12.00", NOON), sale("bad", "twelve", NOON)];
    let result = settlement_amount(&txs);
    assert!(matches!(result, Err(SettlementError::Upstream(msg)) if msg.contains("bad")));
}

#[test]
fn test_window_bounds() {
    let window = DateWindow::for_date("2024-03-01");
    assert_eq!(window.start(), "2024-03-01T00:00:00Z");
    assert_eq!(window.end(), "2024-03-01T23:59:59Z");
    assert!(window.contains("2024-03-01T00:00:00Z"));
    assert!(window.contains("2024-03-01T23:59:58.999Z"));
    // Half-open: the final second of the day is excluded.
    assert!(!window.contains("2024-03-01T23:59:59Z"));
    assert!(!window.contains("2024-02-29T23:59:59Z"));
    assert!(!window.contains("not a timestamp"));
}

#[test]
fn test_window_from_malformed_date_contains_nothing() {
    let window = DateWindow::for_date("2024-13-45");
    assert!(!window.contains("2024-03-01T12:00:00Z"));
}

#[tokio::test]
async fn test_compute_settlement_for_merchant_day() {
    let source = InMemoryTransactions::new();
    source.insert("m1", sale("t1", "100.00", "2024-03-01T09:00:00Z")).await;
    source.insert("m1", refund("t2", "30.00", "2024-03-01T18:30:00Z")).await;
    source.insert("m1", sale("t3", "999.00", "2024-03-02T09:00:00Z")).await;
    source.insert("m2", sale("t4", "50.00", "2024-03-01T09:00:00Z")).await;
    let service = create_test_service(source);

    let result = service.compute_settlement("m1", "2024-03-01").await.unwrap();

    assert_eq!(result.merchant_id, "m1");
    assert_eq!(result.date, "2024-03-01");
    assert_eq!(result.settlement_amount, dec!(70.00));
    let ids: Vec<_> = result.transactions.iter().map(|tx| tx.id.as_str()).collect();
    assert_eq!(ids, ["t1", "t2"]);
}

#[tokio::test]
async fn test_transaction_at_last_second_excluded() {
    let source = InMemoryTransactions::new();
    source.insert("m1", sale("t1", "10.00", "2024-03-01T23:59:58Z")).await;
    source.insert("m1", sale("t2", "25.00", "2024-03-01T23:59:59Z")).await;
    let service = create_test_service(source);

    let result = service.compute_settlement("m1", "2024-03-01").await.unwrap();

    assert_eq!(result.settlement_amount, dec!(10.00));
    assert_eq!(result.transactions.len(), 1);
    assert_eq!(result.transactions[0].id, "t1");
}

#[tokio::test]
async fn test_date_is_echoed_unvalidated() {
    let service = create_test_service(InMemoryTransactions::new());

    let result = service.compute_settlement("m1", "2024-02-30").await.unwrap();

    assert_eq!(result.date, "2024-02-30");
    assert_eq!(result.settlement_amount, Decimal::ZERO);
    assert!(result.transactions.is_empty());
}

#[test]
fn test_amount_must_be_plain_decimal() {
    for amount in ["1e3", "12.5abc", ""] {
        let txs = vec![sale("t1", amount, NOON)];
        assert!(
            matches!(settlement_amount(&txs), Err(SettlementError::Upstream(_))),
            "amount {:?} should be rejected",
            amount
        );
    }
    assert_eq!(settlement_amount(&[sale("t1", " 12.50 ", NOON)]).unwrap(), dec!(12.50));
}
