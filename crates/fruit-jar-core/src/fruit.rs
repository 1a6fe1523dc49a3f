//! Fruit Entity
//!
//! Catalog entries as returned by the fruit API, and the normalized form
//! every other module works with.

use serde::{Deserialize, Serialize};

/// Nutrition breakdown as it arrives on the wire
///
/// The API omits fields for some entries, so everything is optional here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawNutritions {
    pub calories: Option<f64>,
    pub fat: Option<f64>,
    pub sugar: Option<f64>,
    pub carbohydrates: Option<f64>,
    pub protein: Option<f64>,
}

/// Fruit record as it arrives on the wire
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawFruit {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub family: String,
    #[serde(default)]
    pub order: String,
    #[serde(default)]
    pub genus: String,
    /// Direct energy value, present on some API versions only
    #[serde(default)]
    pub calories: Option<f64>,
    #[serde(default)]
    pub nutritions: Option<RawNutritions>,
}

/// Normalized nutrition breakdown
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Nutritions {
    pub calories: Option<f64>,
    pub fat: f64,
    pub sugar: f64,
    pub carbohydrates: f64,
    pub protein: f64,
}

/// A catalog entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fruit {
    /// Unique identifier
    pub id: u32,
    pub name: String,
    pub family: String,
    pub order: String,
    pub genus: String,
    /// Resolved energy value (kcal per 100 g); `None` when the source had none
    pub calories: Option<f64>,
    pub nutritions: Option<Nutritions>,
}

impl Fruit {
    /// Create a fruit with classification fields and a resolved energy value
    pub fn new(
        id: u32,
        name: impl Into<String>,
        family: impl Into<String>,
        order: impl Into<String>,
        genus: impl Into<String>,
        calories: Option<f64>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            family: family.into(),
            order: order.into(),
            genus: genus.into(),
            calories,
            nutritions: None,
        }
    }
}

impl From<RawNutritions> for Nutritions {
    fn from(raw: RawNutritions) -> Self {
        Self {
            calories: raw.calories,
            fat: raw.fat.unwrap_or_default(),
            sugar: raw.sugar.unwrap_or_default(),
            carbohydrates: raw.carbohydrates.unwrap_or_default(),
            protein: raw.protein.unwrap_or_default(),
        }
    }
}

impl From<RawFruit> for Fruit {
    /// Resolve the energy value: the direct field wins, then the nested one.
    fn from(raw: RawFruit) -> Self {
        let nutritions = raw.nutritions.map(Nutritions::from);
        let calories = raw
            .calories
            .or_else(|| nutritions.as_ref().and_then(|n| n.calories));
        if calories.is_none() {
            log::debug!("fruit {} ({}) has no energy value", raw.id, raw.name);
        }
        Self {
            id: raw.id,
            name: raw.name,
            family: raw.family,
            order: raw.order,
            genus: raw.genus,
            calories,
            nutritions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(calories: Option<f64>, nested: Option<f64>) -> RawFruit {
        RawFruit {
            id: 6,
            name: "Apple".to_string(),
            family: "Rosaceae".to_string(),
            order: "Rosales".to_string(),
            genus: "Malus".to_string(),
            calories,
            nutritions: Some(RawNutritions {
                calories: nested,
                fat: Some(0.4),
                sugar: Some(10.3),
                carbohydrates: Some(11.4),
                protein: None,
            }),
        }
    }

    #[test]
    fn test_direct_calories_win() {
        let fruit = Fruit::from(raw(Some(52.0), Some(60.0)));
        assert_eq!(fruit.calories, Some(52.0));
    }

    #[test]
    fn test_nested_calories_fallback() {
        let fruit = Fruit::from(raw(None, Some(60.0)));
        assert_eq!(fruit.calories, Some(60.0));
        let nutritions = fruit.nutritions.unwrap();
        assert_eq!(nutritions.protein, 0.0);
        assert_eq!(nutritions.sugar, 10.3);
    }

    #[test]
    fn test_missing_calories_stay_absent() {
        let fruit = Fruit::from(raw(None, None));
        assert_eq!(fruit.calories, None);
    }

    #[test]
    fn test_decode_api_payload() {
        let json = r#"[{
            "name": "Banana", "id": 1, "family": "Musaceae", "order": "Zingiberales",
            "genus": "Musa",
            "nutritions": {"calories": 96, "fat": 0.2, "sugar": 17.2, "carbohydrates": 22.0, "protein": 1.0}
        }]"#;
        let raw: Vec<RawFruit> = serde_json::from_str(json).unwrap();
        let fruits: Vec<Fruit> = raw.into_iter().map(Fruit::from).collect();
        assert_eq!(fruits[0].name, "Banana");
        assert_eq!(fruits[0].calories, Some(96.0));
    }
}
