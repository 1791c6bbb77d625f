//! Side-by-side comparison of two vehicles.

#[cfg(test)]
#[path = "compare_test.rs"]
mod compare_test;

use crate::format::format_price;
use crate::vehicle::Vehicle;

/// The two vehicles handed from the listing to the comparison view.
#[derive(Clone, Debug, PartialEq)]
pub struct ComparisonPair {
    pub left: Vehicle,
    pub right: Vehicle,
}

impl ComparisonPair {
    /// Route for this pair; the ids let the view reload on a cold start.
    #[must_use]
    pub fn path(&self) -> String {
        comparison_path(self.left.id, self.right.id)
    }

    #[must_use]
    pub fn rows(&self) -> Vec<ComparisonRow> {
        comparison_rows(&self.left, &self.right)
    }
}

#[must_use]
pub fn comparison_path(left: i64, right: i64) -> String {
    format!("/compare?left={left}&right={right}")
}

/// Read the two ids back out of the comparison route's query values.
/// Identical ids are rejected; a vehicle is never compared with itself.
#[must_use]
pub fn parse_comparison_ids(left: Option<&str>, right: Option<&str>) -> Option<(i64, i64)> {
    let left = left?.trim().parse::<i64>().ok()?;
    let right = right?.trim().parse::<i64>().ok()?;
    (left != right).then_some((left, right))
}

/// One labelled line of the comparison table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ComparisonRow {
    pub label: &'static str,
    pub left: String,
    pub right: String,
}

impl ComparisonRow {
    #[must_use]
    pub fn differs(&self) -> bool {
        self.left != self.right
    }
}

const MISSING: &str = "—";

#[must_use]
pub fn comparison_rows(left: &Vehicle, right: &Vehicle) -> Vec<ComparisonRow> {
    vec![
        row("Price", left, right, |v| format_price(v.price)),
        row("Version", left, right, |v| text_or_missing(&v.version)),
        row("Color", left, right, |v| text_or_missing(&v.color)),
        row("Range", left, right, |v| v.range.map_or_else(missing, |km| format!("{km} km"))),
        row("Top speed", left, right, |v| v.max_speed.map_or_else(missing, |s| format!("{s} km/h"))),
        row("Charging time", left, right, |v| v.charging_time.as_deref().map_or_else(missing, text_or_missing)),
        row("Type", left, right, |v| v.kind.as_deref().map_or_else(missing, text_or_missing)),
        row("In stock", left, right, |v| v.stock.map_or_else(missing, |n| n.to_string())),
    ]
}

fn row(label: &'static str, left: &Vehicle, right: &Vehicle, extract: impl Fn(&Vehicle) -> String) -> ComparisonRow {
    ComparisonRow { label, left: extract(left), right: extract(right) }
}

fn missing() -> String {
    MISSING.to_owned()
}

fn text_or_missing(value: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() { MISSING.to_owned() } else { trimmed.to_owned() }
}
