//! Catalog view model
//!
//! Search then grouping, the shape the catalog view renders.

use crate::fruit::Fruit;
use crate::grouping::{group_fruits, GroupByField, GroupSummary};
use crate::search::filter_fruits;

#[derive(Debug, Clone, PartialEq)]
pub struct CatalogGroup {
    pub summary: GroupSummary,
    pub fruits: Vec<Fruit>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogView {
    pub groups: Vec<CatalogGroup>,
    /// Fruits left after filtering, across all groups
    pub visible_count: usize,
    pub total_count: usize,
}

impl CatalogView {
    pub fn build(fruits: &[Fruit], query: &str, group_by: GroupByField) -> Self {
        let visible: Vec<Fruit> = filter_fruits(fruits, query).into_iter().cloned().collect();
        let groups = group_fruits(&visible, group_by)
            .into_iter()
            .map(|(label, members)| CatalogGroup {
                summary: GroupSummary::of(&label, &members),
                fruits: members.into_iter().cloned().collect(),
            })
            .collect();
        Self {
            groups,
            visible_count: visible.len(),
            total_count: fruits.len(),
        }
    }

    /// Nothing to show, even though an ungrouped view still carries one group
    pub fn is_empty(&self) -> bool {
        self.visible_count == 0
    }
}
