//! # Display Indexes
//!
//! The store addresses cars and details by 0-based position. People count from one,
//! so everything user-facing (CLI arguments, rendered lists, messages) uses a
//! 1-based [`DisplayIndex`]. Conversion happens once, at the API boundary.
//!
//! Indexes are positional: after a delete, every later entry is renumbered. A
//! `DisplayIndex` read from a rendered list is only valid until the next mutation.

use crate::model::Car;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DisplayIndex(usize);

impl DisplayIndex {
    /// `None` for zero, which has no 1-based meaning.
    pub fn new(n: usize) -> Option<Self> {
        if n == 0 {
            None
        } else {
            Some(Self(n))
        }
    }

    pub fn from_position(position: usize) -> Self {
        Self(position + 1)
    }

    pub fn position(self) -> usize {
        self.0 - 1
    }

    pub fn get(self) -> usize {
        self.0
    }
}

impl std::fmt::Display for DisplayIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for DisplayIndex {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let n: usize = trimmed
            .parse()
            .map_err(|_| format!("Invalid index: {}", s))?;
        DisplayIndex::new(n).ok_or_else(|| format!("Invalid index: {} (indexes start at 1)", s))
    }
}

/// A car paired with its display index in the owning save file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayCar {
    pub save_file: String,
    pub index: DisplayIndex,
    pub car: Car,
}

/// Numbers every car in list order.
pub fn index_cars(save_file: &str, cars: &[Car]) -> Vec<DisplayCar> {
    cars.iter()
        .enumerate()
        .map(|(position, car)| DisplayCar {
            save_file: save_file.to_string(),
            index: DisplayIndex::from_position(position),
            car: car.clone(),
        })
        .collect()
}
