//! Aggregate Calculator
//!
//! Totals and chart data derived from a jar. Reads the resolved energy value
//! of each fruit and never falls back to nested fields.

use crate::jar::Jar;

/// Quantity-weighted nutrition sums
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct NutritionTotals {
    pub fat: f64,
    pub sugar: f64,
    pub carbohydrates: f64,
    pub protein: f64,
}

/// Headline numbers shown next to the jar
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct JarTotals {
    /// Σ calories × quantity over entries with a known energy value
    pub calories: f64,
    /// Σ quantity
    pub entry_count: u64,
    /// Entries whose fruit has no energy value
    pub missing_energy: usize,
    pub nutrition: NutritionTotals,
}

/// One bar/slice of the jar chart
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSegment {
    pub fruit_id: u32,
    pub label: String,
    pub quantity: u32,
    /// calories × quantity
    pub value: f64,
    /// Share of the jar total in percent, 0 when the total is 0
    pub percent: f64,
}

pub fn totals(jar: &Jar) -> JarTotals {
    let mut out = JarTotals::default();
    for entry in jar.entries() {
        let qty = f64::from(entry.quantity);
        out.entry_count += u64::from(entry.quantity);
        match entry.fruit.calories {
            Some(calories) => out.calories += calories * qty,
            None => out.missing_energy += 1,
        }
        if let Some(n) = &entry.fruit.nutritions {
            out.nutrition.fat += n.fat * qty;
            out.nutrition.sugar += n.sugar * qty;
            out.nutrition.carbohydrates += n.carbohydrates * qty;
            out.nutrition.protein += n.protein * qty;
        }
    }
    out
}

/// Per-fruit chart segments in jar order
///
/// The jar already holds one entry per fruit id, so each entry maps to
/// exactly one segment.
pub fn chart_breakdown(jar: &Jar) -> Vec<ChartSegment> {
    let total = totals(jar).calories;
    jar.entries()
        .iter()
        .map(|entry| {
            let value = entry.fruit.calories.unwrap_or_default() * f64::from(entry.quantity);
            let percent = if total > 0.0 { value / total * 100.0 } else { 0.0 };
            ChartSegment {
                fruit_id: entry.fruit.id,
                label: entry.fruit.name.clone(),
                quantity: entry.quantity,
                value,
                percent,
            }
        })
        .collect()
}
