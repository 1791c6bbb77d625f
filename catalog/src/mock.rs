//! Bundled showroom catalog served when the vehicle service is unreachable.

#[cfg(test)]
#[path = "mock_test.rs"]
mod mock_test;

use crate::vehicle::Vehicle;

struct Entry {
    id: i64,
    line: &'static str,
    version: &'static str,
    color: &'static str,
    price: i64,
    range: u32,
    max_speed: u32,
    charging_time: &'static str,
    stock: u32,
    kind: &'static str,
    features: &'static [&'static str],
    image: &'static str,
    description: &'static str,
}

const ENTRIES: &[Entry] = &[
    Entry {
        id: 1,
        line: "VF 6",
        version: "Eco",
        color: "Zenith Grey",
        price: 765_000_000,
        range: 480,
        max_speed: 160,
        charging_time: "25 min (10-70%)",
        stock: 12,
        kind: "C-SUV",
        features: &["12.9\" touchscreen", "ADAS level 2", "Over-the-air updates"],
        image: "/images/vf6-eco.png",
        description: "Compact electric SUV sized for city driving.",
    },
    Entry {
        id: 2,
        line: "VF 6",
        version: "Plus",
        color: "Jet Black",
        price: 855_000_000,
        range: 460,
        max_speed: 160,
        charging_time: "25 min (10-70%)",
        stock: 8,
        kind: "C-SUV",
        features: &["Panoramic glass roof", "Head-up display", "ADAS level 2"],
        image: "/images/vf6-plus.png",
        description: "Compact electric SUV with the premium interior package.",
    },
    Entry {
        id: 3,
        line: "VF 7",
        version: "Eco",
        color: "Crimson Red",
        price: 850_000_000,
        range: 450,
        max_speed: 180,
        charging_time: "24 min (10-70%)",
        stock: 10,
        kind: "C-SUV",
        features: &["12.9\" touchscreen", "Virtual assistant", "ADAS level 2"],
        image: "/images/vf7-eco.png",
        description: "Coupe-styled SUV with a futuristic cabin.",
    },
    Entry {
        id: 4,
        line: "VF 7",
        version: "Plus",
        color: "Desat Silver",
        price: 999_000_000,
        range: 431,
        max_speed: 200,
        charging_time: "24 min (10-70%)",
        stock: 6,
        kind: "C-SUV",
        features: &["All-wheel drive", "Head-up display", "Panoramic glass roof"],
        image: "/images/vf7-plus.png",
        description: "Dual-motor VF 7 with all-wheel drive.",
    },
    Entry {
        id: 5,
        line: "VF 8",
        version: "Eco",
        color: "Brahminy White",
        price: 1_019_000_000,
        range: 471,
        max_speed: 200,
        charging_time: "31 min (10-70%)",
        stock: 9,
        kind: "D-SUV",
        features: &["15.6\" touchscreen", "11 airbags", "ADAS level 2"],
        image: "/images/vf8-eco.png",
        description: "Mid-size electric SUV for the whole family.",
    },
    Entry {
        id: 6,
        line: "VF 8",
        version: "Plus",
        color: "Deep Ocean",
        price: 1_199_000_000,
        range: 457,
        max_speed: 200,
        charging_time: "31 min (10-70%)",
        stock: 5,
        kind: "D-SUV",
        features: &["Heated and ventilated seats", "Head-up display", "Panoramic glass roof"],
        image: "/images/vf8-plus.png",
        description: "Mid-size electric SUV with premium comfort features.",
    },
    Entry {
        id: 7,
        line: "VF 9",
        version: "Eco",
        color: "Jet Black",
        price: 1_499_000_000,
        range: 626,
        max_speed: 200,
        charging_time: "35 min (10-70%)",
        stock: 4,
        kind: "E-SUV",
        features: &["Seven seats", "15.6\" touchscreen", "ADAS level 2"],
        image: "/images/vf9-eco.png",
        description: "Full-size seven-seat electric SUV.",
    },
    Entry {
        id: 8,
        line: "VF 9",
        version: "Plus",
        color: "Zenith Grey",
        price: 1_699_000_000,
        range: 602,
        max_speed: 200,
        charging_time: "35 min (10-70%)",
        stock: 3,
        kind: "E-SUV",
        features: &["Captain's chairs", "Massage seats", "Panoramic glass roof"],
        image: "/images/vf9-plus.png",
        description: "Flagship VF 9 with captain's chairs and massage seats.",
    },
];

/// The full static catalog.
#[must_use]
pub fn vehicles() -> Vec<Vehicle> {
    ENTRIES.iter().map(to_vehicle).collect()
}

#[must_use]
pub fn vehicle(id: i64) -> Option<Vehicle> {
    ENTRIES.iter().find(|entry| entry.id == id).map(to_vehicle)
}

fn to_vehicle(entry: &Entry) -> Vehicle {
    Vehicle {
        id: entry.id,
        model: format!("VinFast {}", entry.line),
        version: entry.version.to_owned(),
        color: entry.color.to_owned(),
        price: entry.price,
        range: Some(entry.range),
        max_speed: Some(entry.max_speed),
        charging_time: Some(entry.charging_time.to_owned()),
        stock: Some(entry.stock),
        kind: Some(entry.kind.to_owned()),
        status: Some("AVAILABLE".to_owned()),
        features: entry.features.iter().map(|f| (*f).to_owned()).collect(),
        images: vec![entry.image.to_owned()],
        description: Some(entry.description.to_owned()),
    }
}
