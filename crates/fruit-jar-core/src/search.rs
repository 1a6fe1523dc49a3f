//! Search/Filter Pipeline
//!
//! Case-insensitive substring match across name, family, genus and order.

use crate::fruit::Fruit;

/// True when the (already lowercased) needle occurs in any searchable field
fn fruit_contains(fruit: &Fruit, needle: &str) -> bool {
    [&fruit.name, &fruit.family, &fruit.genus, &fruit.order]
        .iter()
        .any(|field| field.to_lowercase().contains(needle))
}

/// Filter `fruits` by `query`, keeping input order
///
/// Blank queries return everything. Other queries are matched as typed,
/// surrounding whitespace included.
pub fn filter_fruits<'a>(fruits: &'a [Fruit], query: &str) -> Vec<&'a Fruit> {
    if query.trim().is_empty() {
        return fruits.iter().collect();
    }
    let needle = query.to_lowercase();
    fruits
        .iter()
        .filter(|fruit| fruit_contains(fruit, &needle))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn catalog() -> Vec<Fruit> {
        vec![
            Fruit::new(1, "Apple", "Rosaceae", "Rosales", "Malus", Some(52.0)),
            Fruit::new(2, "Banana", "Musaceae", "Zingiberales", "Musa", Some(89.0)),
        ]
    }

    fn names(hits: &[&Fruit]) -> Vec<String> {
        hits.iter().map(|f| f.name.clone()).collect()
    }

    #[test]
    fn test_query_an_matches_banana() {
        let fruits = catalog();
        assert_eq!(names(&filter_fruits(&fruits, "an")), vec!["Banana"]);
        assert_eq!(names(&filter_fruits(&fruits, "AN")), vec!["Banana"]);
    }

    #[test]
    fn test_matches_any_classification_field() {
        let fruits = catalog();
        assert_eq!(names(&filter_fruits(&fruits, "rosa")), vec!["Apple"]);
        assert_eq!(names(&filter_fruits(&fruits, "MALUS")), vec!["Apple"]);
        assert_eq!(names(&filter_fruits(&fruits, "zingib")), vec!["Banana"]);
        assert!(filter_fruits(&fruits, "kiwi").is_empty());
    }

    #[test]
    fn test_blank_query_returns_everything() {
        let fruits = catalog();
        assert_eq!(filter_fruits(&fruits, "").len(), 2);
        assert_eq!(filter_fruits(&fruits, "   ").len(), 2);
    }

    #[test]
    fn test_surrounding_whitespace_is_part_of_query() {
        let fruits = catalog();
        assert!(filter_fruits(&fruits, " an").is_empty());
        assert!(filter_fruits(&fruits, "apple ").is_empty());
        assert_eq!(names(&filter_fruits(&fruits, "APPLE")), vec!["Apple"]);
    }

    proptest! {
        #[test]
        fn prop_empty_query_is_identity(names in prop::collection::vec("[a-zA-Z]{1,8}", 0..16)) {
            let fruits: Vec<Fruit> = names
                .iter()
                .enumerate()
                .map(|(i, n)| Fruit::new(i as u32, n.as_str(), "F", "O", "G", None))
                .collect();
            let hits = filter_fruits(&fruits, "");
            let ids: Vec<u32> = hits.iter().map(|f| f.id).collect();
            let expected: Vec<u32> = fruits.iter().map(|f| f.id).collect();
            prop_assert_eq!(ids, expected);
        }

        #[test]
        fn prop_hits_are_ordered_subsequence(query in "[a-c]{0,2}", names in prop::collection::vec("[a-c]{1,4}", 0..16)) {
            let fruits: Vec<Fruit> = names
                .iter()
                .enumerate()
                .map(|(i, n)| Fruit::new(i as u32, n.as_str(), "", "", "", None))
                .collect();
            let ids: Vec<u32> = filter_fruits(&fruits, &query).iter().map(|f| f.id).collect();
            prop_assert!(ids.windows(2).all(|w| w[0] < w[1]));
            for fruit in &fruits {
                prop_assert_eq!(ids.contains(&fruit.id), fruit.name.contains(query.as_str()));
            }
        }
    }
}
