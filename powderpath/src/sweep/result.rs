//! Sweep results and deduplication.

use std::collections::HashSet;

use crate::feature::{Feature, FeatureCollection, FeatureId};

/// Outcome of a sweep.
///
/// `items` holds unique features in first-seen order. `query_count` counts
/// visited lattice points whether or not their query succeeded.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SweepResult {
    pub items: Vec<Feature>,
    pub query_count: usize,
    pub failed_count: usize,
    pub cancelled: bool,
}

impl SweepResult {
    /// Number of unique features collected.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Points whose query succeeded.
    pub fn succeeded_count(&self) -> usize {
        self.query_count - self.failed_count
    }

    /// Identifiers in collection order.
    pub fn ids(&self) -> impl Iterator<Item = &FeatureId> {
        self.items.iter().map(|f| &f.id)
    }

    /// One-line console summary.
    pub fn summary(&self) -> String {
        format!(
            "Queried {} points. Collected {} unique POIs.",
            self.query_count,
            self.items.len()
        )
    }

    /// Wraps the collected features as a GeoJSON FeatureCollection.
    pub fn into_feature_collection(self) -> FeatureCollection {
        FeatureCollection::new(self.items)
    }
}

/// Seen-set plus the ordered output it guards.
#[derive(Debug, Default)]
pub(crate) struct Deduplicator {
    seen: HashSet<FeatureId>,
    items: Vec<Feature>,
}

impl Deduplicator {
    /// Appends the feature unless its id was already collected.
    ///
    /// Returns whether the feature was new.
    pub(crate) fn insert(&mut self, feature: Feature) -> bool {
        if self.seen.contains(&feature.id) {
            return false;
        }
        self.seen.insert(feature.id.clone());
        self.items.push(feature);
        true
    }

    pub(crate) fn into_items(self) -> Vec<Feature> {
        self.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deduplicator_keeps_first_seen() {
        let mut dedup = Deduplicator::default();
        assert!(dedup.insert(Feature::point("A", 0.0, 0.0).with_property("rev", 1)));
        assert!(dedup.insert(Feature::point("B", 0.0, 0.0)));
        assert!(!dedup.insert(Feature::point("A", 9.0, 9.0).with_property("rev", 2)));

        let items = dedup.into_items();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].id, FeatureId::from("A"));
        assert_eq!(items[0].properties["rev"], 1, "Payload of the first copy wins");
        assert_eq!(items[1].id, FeatureId::from("B"));
    }

    #[test]
    fn test_deduplicator_distinguishes_id_kinds() {
        let mut dedup = Deduplicator::default();
        assert!(dedup.insert(Feature::point(1u64, 0.0, 0.0)));
        assert!(dedup.insert(Feature::point("1", 0.0, 0.0)));
        assert_eq!(dedup.into_items().len(), 2);
    }

    #[test]
    fn test_summary_line() {
        let result = SweepResult {
            items: vec![Feature::point("A", 0.0, 0.0)],
            query_count: 630,
            failed_count: 4,
            cancelled: false,
        };
        assert_eq!(result.summary(), "Queried 630 points. Collected 1 unique POIs.");
        assert_eq!(result.succeeded_count(), 626);
    }

    #[test]
    fn test_into_feature_collection() {
        let result = SweepResult {
            items: vec![Feature::point("A", 0.0, 0.0), Feature::point("B", 1.0, 1.0)],
            query_count: 2,
            ..Default::default()
        };
        let collection = result.into_feature_collection();
        assert_eq!(collection.kind, "FeatureCollection");
        assert_eq!(collection.len(), 2);
    }
}
