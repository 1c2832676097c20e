// File: crates/laureate-core/src/aggregate.rs
// Summary: Two-level (group -> year -> count) aggregation with stable group order.
// Notes:
// - Groups are kept in a Vec in first-encountered order; this order drives
//   color assignment and legend layout.
// - Years live in a BTreeMap so per-group iteration is always ascending.

use std::collections::BTreeMap;

use log::debug;

use crate::category::CategoryGroup;
use crate::record::Record;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AggregationTable {
    groups: Vec<(CategoryGroup, BTreeMap<i32, u32>)>,
}

impl AggregationTable {
    /// Aggregate `(group, year)` pairs in stream order.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (CategoryGroup, i32)>,
    {
        let mut groups: Vec<(CategoryGroup, BTreeMap<i32, u32>)> = Vec::new();
        for (group, year) in pairs {
            let ix = match groups.iter().position(|(g, _)| *g == group) {
                Some(ix) => ix,
                None => {
                    groups.push((group, BTreeMap::new()));
                    groups.len() - 1
                }
            };
            *groups[ix].1.entry(year).or_insert(0) += 1;
        }
        let table = Self { groups };
        debug!(
            "aggregated {} records into {} groups",
            table.total(),
            table.groups.len()
        );
        table
    }

    pub fn from_records(records: &[Record]) -> Self {
        Self::from_pairs(records.iter().map(|r| (r.group(), r.year)))
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Groups in first-encountered order.
    pub fn groups(&self) -> Vec<CategoryGroup> {
        self.groups.iter().map(|(g, _)| *g).collect()
    }

    /// Ascending `(year, count)` pairs for `group`; empty if the group never occurred.
    pub fn series(&self, group: CategoryGroup) -> impl Iterator<Item = (i32, u32)> + '_ {
        self.groups
            .iter()
            .find(|(g, _)| *g == group)
            .into_iter()
            .flat_map(|(_, years)| years.iter().map(|(&y, &c)| (y, c)))
    }

    pub fn count(&self, group: CategoryGroup, year: i32) -> Option<u32> {
        self.groups
            .iter()
            .find(|(g, _)| *g == group)
            .and_then(|(_, years)| years.get(&year).copied())
    }

    /// Sum of all counts; equals the number of aggregated records.
    pub fn total(&self) -> u64 {
        self.groups
            .iter()
            .flat_map(|(_, years)| years.values())
            .map(|&c| c as u64)
            .sum()
    }

    /// Sorted, de-duplicated union of years across all groups.
    pub fn all_years(&self) -> Vec<i32> {
        let mut years = self
            .groups
            .iter()
            .flat_map(|(_, ys)| ys.keys().copied())
            .collect::<Vec<_>>();
        years.sort_unstable();
        years.dedup();
        years
    }

    pub fn year_extent(&self) -> Option<(i32, i32)> {
        let mut it = self.groups.iter().flat_map(|(_, ys)| ys.keys().copied());
        let first = it.next()?;
        Some(it.fold((first, first), |(lo, hi), y| (lo.min(y), hi.max(y))))
    }

    /// Largest single `(group, year)` count.
    pub fn max_count(&self) -> Option<u32> {
        self.groups
            .iter()
            .flat_map(|(_, ys)| ys.values().copied())
            .max()
    }
}
