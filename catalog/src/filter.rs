//! Model-code filter for the vehicle listing.
//!
//! DESIGN
//! ======
//! "All" and the specific codes are mutually exclusive: picking a code
//! clears "all", picking "all" clears every code. The state is never
//! all-false; deselecting the last active code falls back to "all".

#[cfg(test)]
#[path = "filter_test.rs"]
mod filter_test;

use std::collections::BTreeSet;

use crate::model_code::ModelCode;
use crate::vehicle::Vehicle;

/// A filter button press.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FilterKey {
    All,
    Model(ModelCode),
}

impl FilterKey {
    /// Parse `"all"` or a model-code key.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        if raw.trim().eq_ignore_ascii_case("all") {
            return Some(Self::All);
        }
        ModelCode::parse(raw).map(Self::Model)
    }

    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Model(code) => code.key(),
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Model(code) => code.label(),
        }
    }
}

/// Which filter buttons are active.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterState {
    all: bool,
    active: BTreeSet<ModelCode>,
}

impl Default for FilterState {
    fn default() -> Self {
        Self { all: true, active: BTreeSet::new() }
    }
}

impl FilterState {
    /// Apply a button press.
    pub fn apply(&mut self, key: FilterKey) {
        match key {
            FilterKey::All => self.reset(),
            FilterKey::Model(code) => {
                if !self.active.remove(&code) {
                    self.active.insert(code);
                }
                self.all = self.active.is_empty();
            }
        }
    }

    pub fn reset(&mut self) {
        self.all = true;
        self.active.clear();
    }

    #[must_use]
    pub fn is_all(&self) -> bool {
        self.all
    }

    #[must_use]
    pub fn is_active(&self, key: FilterKey) -> bool {
        match key {
            FilterKey::All => self.all,
            FilterKey::Model(code) => self.active.contains(&code),
        }
    }

    /// Active codes in display order.
    pub fn active_codes(&self) -> impl Iterator<Item = ModelCode> + '_ {
        self.active.iter().copied()
    }

    /// Whether a single vehicle passes the filter.
    #[must_use]
    pub fn admits(&self, vehicle: &Vehicle) -> bool {
        self.all || self.active.iter().any(|code| code.matches(&vehicle.model))
    }

    /// The vehicles to display, preserving collection order.
    #[must_use]
    pub fn visible(&self, vehicles: &[Vehicle]) -> Vec<Vehicle> {
        vehicles.iter().filter(|v| self.admits(v)).cloned().collect()
    }
}
