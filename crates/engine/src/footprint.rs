//! Daily water-footprint calculator.
//!
//! Selection is a plain set of activity ids; every displayed figure is
//! recomputed from the set and the immutable activity table, never stored.

use model::activity::Activity;
use std::{collections::BTreeSet, sync::Arc};

/// Days used for the annual projection.
pub const DAYS_PER_YEAR: u64 = 365;

#[derive(Debug)]
pub struct Footprint {
    activities: Arc<[Activity]>,
    selected: BTreeSet<String>,
}

impl Footprint {
    pub fn new(activities: Arc<[Activity]>) -> Self {
        Self { activities, selected: BTreeSet::new() }
    }

    pub fn activities(&self) -> &[Activity] {
        &self.activities
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.contains(id)
    }

    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }

    /// Adds the id if absent, removes it otherwise. Returns whether the
    /// activity is selected afterwards. Toggling twice is an involution.
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.selected.remove(id) {
            false
        } else {
            self.selected.insert(id.into());
            true
        }
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    /// Daily liters over all selected activities.
    pub fn total(&self) -> u32 {
        self.activities
            .iter()
            .filter(|activity| self.selected.contains(&activity.id))
            .map(|activity| activity.water_usage)
            .sum()
    }

    /// Conservation tips for the selection, in activity-table order.
    /// Duplicates are kept; this is a list, not a set.
    pub fn tips(&self) -> Vec<&str> {
        self.activities
            .iter()
            .filter(|activity| self.selected.contains(&activity.id))
            .flat_map(|activity| activity.tips.iter().map(String::as_str))
            .collect()
    }

    /// Display-only conversion of the daily total.
    pub fn cubic_meters_per_day(&self) -> f64 {
        f64::from(self.total()) / 1000.0
    }

    /// Display-only projection of the daily total over a year.
    pub fn annual_liters(&self) -> u64 {
        u64::from(self.total()) * DAYS_PER_YEAR
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> Arc<[Activity]> {
        let activity = |id: &str, name: &str, water_usage: u32, tips: &[&str]| Activity {
            id: id.into(),
            name: name.into(),
            water_usage,
            duration: "10 minutes".into(),
            tips: tips.iter().map(|&tip| tip.into()).collect(),
            image: "/placeholder.jpg".into(),
        };
        vec![
            activity("shower", "Shower", 65, &["Shorter showers", "Low-flow head"]),
            activity("dishes", "Washing Dishes", 40, &["Full dishwasher loads"]),
            activity("brushing", "Brushing Teeth", 8, &["Turn off the tap"]),
        ]
        .into()
    }

    #[test]
    fn empty_selection_totals_zero() {
        let footprint = Footprint::new(table());
        assert_eq!(footprint.total(), 0);
        assert_eq!(footprint.annual_liters(), 0);
        assert!(footprint.tips().is_empty());
    }

    #[test]
    fn toggle_is_an_involution() {
        let mut footprint = Footprint::new(table());
        assert!(footprint.toggle("shower"));
        assert!(footprint.is_selected("shower"));
        assert!(!footprint.toggle("shower"));
        assert!(!footprint.is_selected("shower"));
        assert_eq!(footprint.selected_count(), 0);
    }

    #[test]
    fn reference_totals_from_the_site() {
        let mut footprint = Footprint::new(table());
        footprint.toggle("shower");
        footprint.toggle("brushing");
        assert_eq!(footprint.total(), 73);
        assert_eq!(footprint.annual_liters(), 26_645);
        assert_eq!(footprint.cubic_meters_per_day(), 0.073);
    }

    #[test]
    fn tips_follow_table_order_not_toggle_order() {
        let mut footprint = Footprint::new(table());
        footprint.toggle("brushing");
        footprint.toggle("shower");
        assert_eq!(footprint.tips(), ["Shorter showers", "Low-flow head", "Turn off the tap"]);
    }

    #[test]
    fn unknown_ids_never_contribute() {
        let mut footprint = Footprint::new(table());
        footprint.toggle("bathtub");
        assert_eq!(footprint.total(), 0);
        assert!(footprint.tips().is_empty());
    }

    #[test]
    fn clear_empties_the_selection() {
        let mut footprint = Footprint::new(table());
        footprint.toggle("shower");
        footprint.toggle("dishes");
        footprint.clear();
        assert_eq!(footprint.total(), 0);
    }
}
