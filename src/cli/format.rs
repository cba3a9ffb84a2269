//! Text rendering helpers for the CLI: currency amounts, record tables and bar charts.

use crate::entities::{expense, salary};
use rust_decimal::{Decimal, RoundingStrategy, prelude::ToPrimitive};

const BAR_FILLED: &str = "█";
const BAR_EMPTY: &str = "░";

/// Formats an amount as currency: symbol, thousands separated by `,`, two decimals.
///
/// `format_currency(dec!(1234.5), "R$")` gives `"R$1,234.50"`; negative amounts get a
/// leading `-` before the symbol.
#[must_use]
pub fn format_currency(amount: Decimal, symbol: &str) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    let digits = format!("{:.2}", rounded.abs());
    let (whole, cents) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));

    format!("{sign}{symbol}{}.{cents}", group_thousands(whole))
}

fn group_thousands(whole: &str) -> String {
    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Horizontal bar chart, one line per `(label, value)`, scaled so the largest value
/// fills `width` characters.
#[must_use]
pub fn bar_chart<'a, I>(rows: I, width: usize, symbol: &str) -> Vec<String>
where
    I: IntoIterator<Item = (&'a String, &'a Decimal)>,
{
    let rows: Vec<_> = rows.into_iter().collect();
    let label_width = rows.iter().map(|(label, _)| label.chars().count()).max().unwrap_or(0);
    let max = rows
        .iter()
        .map(|(_, value)| **value)
        .max()
        .unwrap_or(Decimal::ZERO);

    rows.iter()
        .map(|(label, value)| {
            let filled = scaled_width(**value, max, width);
            format!(
                "{label:<label_width$}  {}{}  {}",
                BAR_FILLED.repeat(filled),
                BAR_EMPTY.repeat(width - filled),
                format_currency(**value, symbol)
            )
        })
        .collect()
}

fn scaled_width(value: Decimal, max: Decimal, width: usize) -> usize {
    if max <= Decimal::ZERO || value <= Decimal::ZERO {
        return 0;
    }
    let filled = (value / max * Decimal::from(width)).round();
    filled.to_usize().unwrap_or(0).min(width)
}

/// Percentage bar like `[████░░░░░░] 40.0%`.
#[must_use]
pub fn share_bar(percent: Decimal, width: usize) -> String {
    let filled = scaled_width(percent, Decimal::ONE_HUNDRED, width);
    format!(
        "[{}{}] {percent:.1}%",
        BAR_FILLED.repeat(filled),
        BAR_EMPTY.repeat(width - filled)
    )
}

/// Table of salary rows with a header line.
#[must_use]
pub fn salary_table(rows: &[salary::Model], symbol: &str) -> Vec<String> {
    let mut lines = vec![format!("{:>6}  {:<10}  {:>16}", "ID", "Date", "Amount")];
    lines.extend(rows.iter().map(|row| {
        format!(
            "{:>6}  {:<10}  {:>16}",
            row.id,
            row.date.format("%Y-%m-%d").to_string(),
            format_currency(row.amount, symbol)
        )
    }));
    lines
}

/// Table of expense rows with a header line.
#[must_use]
pub fn expense_table(rows: &[expense::Model], symbol: &str) -> Vec<String> {
    let category_width = column_width(rows.iter().map(|r| r.category.as_str()), "Category");
    let place_width = column_width(rows.iter().map(|r| r.establishment.as_str()), "Establishment");

    let mut lines = vec![format!(
        "{:>6}  {:<10}  {:<category_width$}  {:<place_width$}  {:>16}",
        "ID", "Date", "Category", "Establishment", "Amount"
    )];
    lines.extend(rows.iter().map(|row| {
        format!(
            "{:>6}  {:<10}  {:<category_width$}  {:<place_width$}  {:>16}",
            row.id,
            row.date.format("%Y-%m-%d").to_string(),
            row.category,
            row.establishment,
            format_currency(row.amount, symbol)
        )
    }));
    lines
}

fn column_width<'a>(values: impl Iterator<Item = &'a str>, header: &str) -> usize {
    values
        .map(|v| v.chars().count())
        .chain(std::iter::once(header.len()))
        .max()
        .unwrap_or(header.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{expense_model, salary_model};
    use rust_decimal_macros::dec;
    use std::collections::BTreeMap;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(dec!(5000), "R$"), "R$5,000.00");
        assert_eq!(format_currency(dec!(1234567.891), "R$"), "R$1,234,567.89");
        assert_eq!(format_currency(dec!(0.005), "$"), "$0.01");
        assert_eq!(format_currency(dec!(999.999), "$"), "$1,000.00");
        assert_eq!(format_currency(dec!(12), "€"), "€12.00");
        assert_eq!(format_currency(dec!(0), "R$"), "R$0.00");
    }

    #[test]
    fn test_format_currency_negative() {
        assert_eq!(format_currency(dec!(-1500.5), "R$"), "-R$1,500.50");
        assert_eq!(format_currency(dec!(-0.001), "R$"), "R$0.00");
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands("1"), "1");
        assert_eq!(group_thousands("123"), "123");
        assert_eq!(group_thousands("1234"), "1,234");
        assert_eq!(group_thousands("123456"), "123,456");
    }

    #[test]
    fn test_bar_chart_scales_to_largest_value() {
        let totals = BTreeMap::from([
            ("Food".to_string(), dec!(300)),
            ("Rent".to_string(), dec!(600)),
        ]);

        let lines = bar_chart(&totals, 10, "$");

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], format!("Food  {}{}  $300.00", "█".repeat(5), "░".repeat(5)));
        assert_eq!(lines[1], format!("Rent  {}  $600.00", "█".repeat(10)));
    }

    #[test]
    fn test_bar_chart_empty() {
        let totals: BTreeMap<String, Decimal> = BTreeMap::new();
        assert!(bar_chart(&totals, 10, "$").is_empty());
    }

    #[test]
    fn test_share_bar() {
        assert_eq!(share_bar(dec!(40), 10), "[████░░░░░░] 40.0%");
        assert_eq!(share_bar(dec!(100), 4), "[████] 100.0%");
        assert_eq!(share_bar(dec!(0), 4), "[░░░░] 0.0%");
    }

    #[test]
    fn test_tables_have_header_and_rows() {
        let salaries = vec![salary_model(7, "2024-03-10", dec!(5000))];
        let lines = salary_table(&salaries, "R$");
        assert_eq!(lines.len(), 2);
        assert!(lines[1].contains("2024-03-10"));
        assert!(lines[1].contains("R$5,000.00"));

        let expenses = vec![expense_model(3, "2024-03-15", "Food", dec!(300))];
        let lines = expense_table(&expenses, "R$");
        assert!(lines[0].contains("Establishment"));
        assert!(lines[1].contains("Food"));
        assert!(lines[1].contains("R$300.00"));
    }
}
