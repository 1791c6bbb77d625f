//! Two-slot vehicle selection backing the compare action.

#[cfg(test)]
#[path = "selection_test.rs"]
mod selection_test;

use crate::vehicle::Vehicle;

/// Maximum number of vehicles that can be compared side by side.
pub const MAX_SELECTION: usize = 2;

/// Outcome of [`SelectionSet::toggle`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectionChange {
    Added,
    Removed,
    /// The set was full and the vehicle was not in it.
    Ignored,
}

/// Ordered set of at most two vehicles, unique by id.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SelectionSet {
    items: Vec<Vehicle>,
}

impl SelectionSet {
    pub fn toggle(&mut self, vehicle: &Vehicle) -> SelectionChange {
        if let Some(pos) = self.items.iter().position(|v| v.id == vehicle.id) {
            self.items.remove(pos);
            return SelectionChange::Removed;
        }
        if self.items.len() < MAX_SELECTION {
            self.items.push(vehicle.clone());
            return SelectionChange::Added;
        }
        SelectionChange::Ignored
    }

    #[must_use]
    pub fn contains(&self, id: i64) -> bool {
        self.items.iter().any(|v| v.id == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether the compare action is enabled.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.items.len() == MAX_SELECTION
    }

    /// Whether another unselected vehicle can still be added.
    #[must_use]
    pub fn is_saturated(&self) -> bool {
        self.items.len() >= MAX_SELECTION
    }

    /// The two selected vehicles in selection order, once the set is full.
    #[must_use]
    pub fn pair(&self) -> Option<(&Vehicle, &Vehicle)> {
        match self.items.as_slice() {
            [left, right] => Some((left, right)),
            _ => None,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Vehicle> {
        self.items.iter()
    }
}
