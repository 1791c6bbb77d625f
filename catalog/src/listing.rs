//! Vehicle listing model: collection, filter, displayed subset and compare
//! selection kept consistent with each other.

#[cfg(test)]
#[path = "listing_test.rs"]
mod listing_test;

use crate::compare::ComparisonPair;
use crate::filter::{FilterKey, FilterState};
use crate::selection::{SelectionChange, SelectionSet};
use crate::vehicle::Vehicle;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct VehicleListing {
    vehicles: Vec<Vehicle>,
    filter: FilterState,
    displayed: Vec<Vehicle>,
    selection: SelectionSet,
}

impl VehicleListing {
    #[must_use]
    pub fn new(vehicles: Vec<Vehicle>) -> Self {
        let mut listing = Self::default();
        listing.replace_collection(vehicles);
        listing
    }

    /// Swap in a freshly fetched collection, keeping the current filter.
    pub fn replace_collection(&mut self, vehicles: Vec<Vehicle>) {
        self.vehicles = vehicles;
        self.refresh();
    }

    pub fn apply_filter(&mut self, key: FilterKey) {
        self.filter.apply(key);
        self.refresh();
    }

    /// Show the full collection again. The compare selection is kept.
    pub fn reset_filters(&mut self) {
        self.filter.reset();
        self.refresh();
    }

    pub fn toggle_selection(&mut self, vehicle: &Vehicle) -> SelectionChange {
        self.selection.toggle(vehicle)
    }

    /// The pair to hand to the comparison view; `None` until exactly two
    /// vehicles are selected.
    #[must_use]
    pub fn comparison(&self) -> Option<ComparisonPair> {
        self.selection
            .pair()
            .map(|(left, right)| ComparisonPair { left: left.clone(), right: right.clone() })
    }

    #[must_use]
    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    #[must_use]
    pub fn displayed(&self) -> &[Vehicle] {
        &self.displayed
    }

    #[must_use]
    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    #[must_use]
    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    fn refresh(&mut self) {
        self.displayed = self.filter.visible(&self.vehicles);
    }
}
