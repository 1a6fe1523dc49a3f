//! Grouping Engine
//!
//! Partitions fruits into labeled buckets by a classification field.
//! Groups keep the order in which their labels first appear.

use std::str::FromStr;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::fruit::Fruit;

/// Label of the single group produced by [`GroupByField::None`]
pub const ALL_GROUP_LABEL: &str = "All";

/// Insertion-ordered mapping from group label to its fruits
pub type Groups<'a> = IndexMap<String, Vec<&'a Fruit>>;

/// Field that drives grouping
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupByField {
    #[default]
    None,
    Family,
    Order,
    Genus,
}

impl GroupByField {
    pub const ALL: [GroupByField; 4] = [
        GroupByField::None,
        GroupByField::Family,
        GroupByField::Order,
        GroupByField::Genus,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            GroupByField::None => "none",
            GroupByField::Family => "family",
            GroupByField::Order => "order",
            GroupByField::Genus => "genus",
        }
    }

    /// Human label for selectors
    pub fn label(&self) -> &'static str {
        match self {
            GroupByField::None => "No grouping",
            GroupByField::Family => "Family",
            GroupByField::Order => "Order",
            GroupByField::Genus => "Genus",
        }
    }

    /// Raw attribute value used as the group key
    fn key_of<'a>(&self, fruit: &'a Fruit) -> &'a str {
        match self {
            GroupByField::None => ALL_GROUP_LABEL,
            GroupByField::Family => &fruit.family,
            GroupByField::Order => &fruit.order,
            GroupByField::Genus => &fruit.genus,
        }
    }
}

impl FromStr for GroupByField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(GroupByField::None),
            "family" => Ok(GroupByField::Family),
            "order" => Ok(GroupByField::Order),
            "genus" => Ok(GroupByField::Genus),
            other => Err(format!("unknown group field: {}", other)),
        }
    }
}

/// Group fruits by `field`
///
/// Keys are compared verbatim, so "Rosaceae" and "rosaceae" end up in
/// different groups. `GroupByField::None` always yields exactly one group,
/// even for an empty input.
pub fn group_fruits<'a>(fruits: &'a [Fruit], field: GroupByField) -> Groups<'a> {
    let mut groups: Groups<'a> = IndexMap::new();
    if field == GroupByField::None {
        groups.insert(ALL_GROUP_LABEL.to_string(), fruits.iter().collect());
        return groups;
    }
    for fruit in fruits {
        let key = field.key_of(fruit);
        match groups.get_mut(key) {
            Some(bucket) => bucket.push(fruit),
            None => {
                groups.insert(key.to_string(), vec![fruit]);
            }
        }
    }
    groups
}

/// Header summary for one group
#[derive(Debug, Clone, PartialEq)]
pub struct GroupSummary {
    pub label: String,
    pub count: usize,
    /// Sum of the known energy values in the group
    pub calories: f64,
}

impl GroupSummary {
    pub fn of(label: &str, fruits: &[&Fruit]) -> Self {
        Self {
            label: label.to_string(),
            count: fruits.len(),
            calories: fruits.iter().filter_map(|f| f.calories).sum(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn make_fruit(id: u32, name: &str, family: &str, calories: f64) -> Fruit {
        Fruit::new(id, name, family, "Rosales", "Malus", Some(calories))
    }

    #[test]
    fn test_group_by_family() {
        let fruits = vec![
            make_fruit(1, "Apple", "Rosaceae", 52.0),
            make_fruit(2, "Banana", "Musaceae", 89.0),
        ];
        let groups = group_fruits(&fruits, GroupByField::Family);

        let labels: Vec<&str> = groups.keys().map(String::as_str).collect();
        assert_eq!(labels, vec!["Rosaceae", "Musaceae"]);
        assert_eq!(groups["Rosaceae"].len(), 1);
        assert_eq!(groups["Rosaceae"][0].id, 1);
        assert_eq!(groups["Musaceae"].len(), 1);
        assert_eq!(groups["Musaceae"][0].id, 2);
    }

    #[test]
    fn test_none_yields_single_group_for_empty_input() {
        let groups = group_fruits(&[], GroupByField::None);
        assert_eq!(groups.len(), 1);
        assert!(groups[ALL_GROUP_LABEL].is_empty());
    }

    #[test]
    fn test_group_keys_are_case_sensitive() {
        let fruits = vec![
            make_fruit(1, "Apple", "Rosaceae", 52.0),
            make_fruit(2, "Pear", "rosaceae", 57.0),
        ];
        let groups = group_fruits(&fruits, GroupByField::Family);
        assert_eq!(groups.len(), 2);
    }

    #[test]
    fn test_label_order_follows_first_appearance() {
        let fruits = vec![
            make_fruit(1, "Banana", "Musaceae", 89.0),
            make_fruit(2, "Apple", "Rosaceae", 52.0),
            make_fruit(3, "Plantain", "Musaceae", 122.0),
        ];
        let groups = group_fruits(&fruits, GroupByField::Family);
        let labels: Vec<&str> = groups.keys().map(String::as_str).collect();
        assert_eq!(labels, vec!["Musaceae", "Rosaceae"]);
        let ids: Vec<u32> = groups["Musaceae"].iter().map(|f| f.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_group_summary_skips_unknown_energy() {
        let mut unknown = make_fruit(2, "Durian", "Malvaceae", 0.0);
        unknown.calories = None;
        let known = make_fruit(1, "Apple", "Malvaceae", 52.0);
        let summary = GroupSummary::of("Malvaceae", &[&known, &unknown]);
        assert_eq!(summary.count, 2);
        assert_eq!(summary.calories, 52.0);
    }

    #[test]
    fn test_group_by_field_str_roundtrip() {
        for field in GroupByField::ALL {
            assert_eq!(field.as_str().parse::<GroupByField>(), Ok(field));
        }
        assert!("species".parse::<GroupByField>().is_err());
    }

    fn fruits_strategy() -> impl Strategy<Value = Vec<Fruit>> {
        prop::collection::vec(("[A-C]", "[a-c]", "[x-z]"), 0..24).prop_map(|rows| {
            rows.into_iter()
                .enumerate()
                .map(|(i, (family, order, genus))| {
                    Fruit::new(i as u32, format!("F{i}"), family, order, genus, Some(i as f64))
                })
                .collect()
        })
    }

    proptest! {
        #[test]
        fn prop_grouping_preserves_every_fruit_once(
            fruits in fruits_strategy(),
            field in prop::sample::select(vec![GroupByField::Family, GroupByField::Order, GroupByField::Genus]),
        ) {
            let groups = group_fruits(&fruits, field);
            let mut ids: Vec<u32> = groups.values().flatten().map(|f| f.id).collect();
            ids.sort_unstable();
            let expected: Vec<u32> = fruits.iter().map(|f| f.id).collect();
            prop_assert_eq!(ids, expected);
        }

        #[test]
        fn prop_none_always_one_group(fruits in fruits_strategy()) {
            let groups = group_fruits(&fruits, GroupByField::None);
            prop_assert_eq!(groups.len(), 1);
            prop_assert_eq!(groups[ALL_GROUP_LABEL].len(), fruits.len());
        }
    }
}
