//! Plain-text output for terminal use.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use std::fmt::Write as _;

use catalog::booking::DEALERS;
use catalog::compare::ComparisonPair;
use catalog::featured::display_name_for;
use catalog::{BookingReceipt, Vehicle, format_price};

/// One line per vehicle: id, title, price, range.
pub fn vehicle_table(vehicles: &[Vehicle]) -> String {
    if vehicles.is_empty() {
        return "no vehicles\n".to_owned();
    }
    let mut out = String::new();
    for vehicle in vehicles {
        let range = vehicle.range.map(|km| format!("{km} km")).unwrap_or_default();
        let _ = writeln!(
            out,
            "{:>4}  {:<24}  {:>16}  {}",
            vehicle.id,
            vehicle.display_title(),
            format_price(vehicle.price),
            range
        );
    }
    out
}

/// Featured cards: marketing name and starting price.
pub fn featured_list(vehicles: &[Vehicle]) -> String {
    let mut out = String::new();
    for vehicle in vehicles {
        let _ = writeln!(
            out,
            "{:>4}  {}  from {}",
            vehicle.id,
            display_name_for(&vehicle.model),
            format_price(vehicle.price)
        );
    }
    out
}

pub fn vehicle_detail(vehicle: &Vehicle) -> String {
    let mut out = format!("{} (#{})\n", vehicle.display_title(), vehicle.id);
    let _ = writeln!(out, "  price: {}", format_price(vehicle.price));
    let optional = [
        ("color", Some(vehicle.color.clone()).filter(|c| !c.is_empty())),
        ("type", vehicle.kind.clone()),
        ("range", vehicle.range.map(|km| format!("{km} km"))),
        ("top speed", vehicle.max_speed.map(|s| format!("{s} km/h"))),
        ("charging", vehicle.charging_time.clone()),
        ("in stock", vehicle.stock.map(|n| n.to_string())),
    ];
    for (label, value) in optional {
        if let Some(value) = value {
            let _ = writeln!(out, "  {label}: {value}");
        }
    }
    for feature in &vehicle.features {
        let _ = writeln!(out, "  - {feature}");
    }
    out
}

pub fn comparison_table(pair: &ComparisonPair) -> String {
    let mut out = format!(
        "{:<14}  {:<24}  {:<24}\n",
        "",
        pair.left.display_title(),
        pair.right.display_title()
    );
    for row in pair.rows() {
        let marker = if row.differs() { "*" } else { " " };
        let _ = writeln!(out, "{marker}{:<13}  {:<24}  {:<24}", row.label, row.left, row.right);
    }
    out
}

pub fn dealer_list() -> String {
    let mut out = String::new();
    for dealer in DEALERS {
        let _ = writeln!(out, "{:<14}  {}, {}", dealer.id, dealer.name, dealer.address);
    }
    out
}

pub fn receipt(receipt: &BookingReceipt) -> String {
    let mut out = format!(
        "booked {} for {}\n  at {}\n",
        receipt.vehicle_name, receipt.scheduled_for, receipt.address
    );
    if receipt.attempts > 1 {
        let _ = writeln!(out, "  (accepted on attempt {})", receipt.attempts);
    }
    out
}
