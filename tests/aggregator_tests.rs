use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use spend_chart::aggregator::{
    aggregate, analyze_volumes, build_volume_matrix, extract_categories, extract_months,
    Analysis, CategoryStat, MonthKey, MonthOrder,
};
use spend_chart::chart::ChartData;
use spend_chart::parser::Transaction;

fn txn(date: &str, category: &str, amount: Decimal, txn_type: &str) -> Transaction {
    let date = NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap();
    Transaction::new(date, Some(category), amount, txn_type)
}

/// Newest-first ledger: Food 10/20, Transport 5/5 over Jan-Feb 2024
fn two_by_two_ledger() -> Vec<Transaction> {
    vec![
        txn("2024-02-20", "Food", dec!(20.00), "Purchase"),
        txn("2024-02-10", "Transport", dec!(5.00), "Purchase"),
        txn("2024-01-15", "Food", dec!(10.00), "Purchase"),
        txn("2024-01-05", "Transport", dec!(5.00), "Purchase"),
    ]
}

fn stat(category: &str, value: Decimal) -> CategoryStat {
    CategoryStat {
        category: category.to_string(),
        value,
    }
}

#[test]
fn test_end_to_end_statistics() {
    let matrix = aggregate(&two_by_two_ledger(), MonthOrder::SourceReversed);

    assert_eq!(
        matrix.months(),
        &[MonthKey::new(2024, 1), MonthKey::new(2024, 2)]
    );

    let analysis = analyze_volumes(&matrix);

    assert_eq!(
        analysis,
        Analysis {
            // Category totals are Food 30 and Transport 10
            avg_expense: dec!(20.00),
            median_expense: dec!(20.00),
            avg_expense_per_category: vec![stat("Food", dec!(15.00)), stat("Transport", dec!(5.00))],
            median_expense_per_category: vec![
                stat("Food", dec!(15.00)),
                stat("Transport", dec!(5.00))
            ],
        }
    );
}

#[test]
fn test_month_order_literal_behavior() {
    let dates = ["2024-01-05", "2024-02-01", "2024-01-20"]
        .map(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").unwrap());

    let months: Vec<String> = extract_months(dates, MonthOrder::SourceReversed)
        .iter()
        .map(|m| m.to_string())
        .collect();

    assert_eq!(months, vec!["2024-02", "2024-01"]);
}

#[test]
fn test_declined_amount_never_matters() {
    let mut ledger = two_by_two_ledger();
    ledger.push(txn("2024-01-16", "Food", dec!(100.00), "Declined"));
    let baseline = aggregate(&ledger, MonthOrder::SourceReversed);

    ledger.last_mut().unwrap().amount = dec!(123456.78);
    let changed = aggregate(&ledger, MonthOrder::SourceReversed);

    assert_eq!(baseline, changed);
    assert_eq!(baseline.row("Food").unwrap(), &[dec!(10.00), dec!(20.00)]);
}

#[test]
fn test_declined_only_category_is_all_zero() {
    let mut ledger = two_by_two_ledger();
    ledger.push(txn("2024-02-01", "Travel", dec!(300), "Declined"));

    let matrix = aggregate(&ledger, MonthOrder::SourceReversed);
    assert_eq!(matrix.row("Travel").unwrap(), &[Decimal::ZERO, Decimal::ZERO]);
}

#[test]
fn test_aggregation_is_idempotent() {
    let ledger = two_by_two_ledger();
    let months = extract_months(ledger.iter().map(|t| t.date), MonthOrder::SourceReversed);
    let categories = extract_categories(&ledger);

    let first = build_volume_matrix(&ledger, &months, &categories);
    let second = build_volume_matrix(&ledger, &months, &categories);

    assert_eq!(first, second);
}

#[test]
fn test_sum_invariant_against_manual_selection() {
    let ledger = vec![
        txn("2024-03-02", "Food", dec!(3.333), "Purchase"),
        txn("2024-03-09", "Food", dec!(1.111), "Refund"),
        txn("2024-03-09", "Food", dec!(-2.00), "Purchase"),
        txn("2024-02-09", "Food", dec!(50), "Purchase"),
        txn("2024-03-11", "Home", dec!(70), "Purchase"),
        txn("2024-03-12", "Food", dec!(9), "Declined"),
    ];

    let matrix = aggregate(&ledger, MonthOrder::Chronological);
    let march = MonthKey::new(2024, 3);
    let column = matrix.months().iter().position(|m| *m == march).unwrap();

    let expected: Decimal = ledger
        .iter()
        .filter(|t| t.category.as_deref() == Some("Food"))
        .filter(|t| march.contains(t.date))
        .filter(|t| !t.is_declined())
        .map(|t| t.amount)
        .sum();

    assert_eq!(matrix.row("Food").unwrap()[column], expected.round_dp(2));
    assert_eq!(matrix.row("Food").unwrap()[column], dec!(2.44));
}

#[test]
fn test_every_value_has_two_decimals_at_most() {
    let ledger = vec![
        txn("2024-01-02", "A", dec!(1.005), "Purchase"),
        txn("2024-01-03", "A", dec!(2.0001), "Purchase"),
        txn("2024-02-03", "A", dec!(0.3333), "Purchase"),
        txn("2024-02-04", "B", dec!(7.777), "Purchase"),
    ];

    let matrix = aggregate(&ledger, MonthOrder::Chronological);
    let analysis = analyze_volumes(&matrix);

    for row in matrix.rows() {
        assert!(row.volumes.iter().all(|v| v.scale() <= 2));
    }
    assert!(analysis.avg_expense.scale() <= 2);
    assert!(analysis.median_expense.scale() <= 2);
    for s in analysis
        .avg_expense_per_category
        .iter()
        .chain(&analysis.median_expense_per_category)
    {
        assert!(s.value.scale() <= 2, "{} has scale {}", s.value, s.value.scale());
    }
}

#[test]
fn test_summary_columns_appended() {
    let matrix = aggregate(&two_by_two_ledger(), MonthOrder::SourceReversed);
    let analysis = analyze_volumes(&matrix);
    let chart = ChartData::assemble(&matrix, &analysis);

    assert_eq!(
        chart.column_keys(),
        vec!["2024-01", "2024-02", "average", "median"]
    );
    for series in &chart.series {
        assert_eq!(series.values.len(), matrix.months().len() + 2);
    }
    assert_eq!(
        chart.series[0].values,
        vec![dec!(10.00), dec!(20.00), dec!(15.00), dec!(15.00)]
    );

    // The matrix itself is untouched
    assert_eq!(matrix.row("Food").unwrap().len(), 2);
}

#[test]
fn test_empty_ledger() {
    let matrix = aggregate(&[], MonthOrder::SourceReversed);
    assert!(matrix.is_empty());

    let analysis = analyze_volumes(&matrix);
    assert_eq!(analysis.avg_expense, Decimal::ZERO);
    assert_eq!(analysis.median_expense, Decimal::ZERO);
    assert!(analysis.avg_expense_per_category.is_empty());
    assert!(analysis.median_expense_per_category.is_empty());
}

#[test]
fn test_overall_median_even_number_of_categories() {
    let ledger = vec![
        txn("2024-01-01", "A", dec!(1), "Purchase"),
        txn("2024-01-01", "B", dec!(2), "Purchase"),
        txn("2024-01-01", "C", dec!(10), "Purchase"),
        txn("2024-01-01", "D", dec!(20), "Purchase"),
    ];

    let analysis = analyze_volumes(&aggregate(&ledger, MonthOrder::SourceReversed));

    assert_eq!(analysis.median_expense, dec!(6.00));
    assert_eq!(analysis.avg_expense, dec!(8.25));
}
