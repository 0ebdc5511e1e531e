//! # Display indexes
//!
//! Listings number records 1, 2, 3... in the order shown (newest first), so a
//! record can be picked by its position instead of its long id. Positions
//! shift as records come and go; ids never do, which is why both are accepted.

use crate::model::Record;
use std::str::FromStr;

/// A user input naming one record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    /// 1-based position in the current listing.
    Index(usize),
    Id(String),
}

impl FromStr for Selector {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err("Empty selector".to_string());
        }
        if s.chars().all(|c| c.is_ascii_digit()) {
            return match s.parse::<usize>() {
                Ok(0) | Err(_) => Err(format!("Invalid index: {}", s)),
                Ok(n) => Ok(Selector::Index(n)),
            };
        }
        Ok(Selector::Id(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayRecord<R> {
    pub index: usize,
    pub record: R,
}

pub fn index_records<R: Record>(records: &[R]) -> Vec<DisplayRecord<R>> {
    records
        .iter()
        .enumerate()
        .map(|(i, record)| DisplayRecord {
            index: i + 1,
            record: record.clone(),
        })
        .collect()
}
