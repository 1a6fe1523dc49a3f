//! Display formatting helpers

/// Energy value for a fruit row; unknown values render as a dash
pub fn format_calories(calories: Option<f64>) -> String {
    match calories {
        Some(value) => format!("{} kcal", format_number(value)),
        None => "— kcal".to_string(),
    }
}

/// At most one decimal, no trailing ".0"
pub fn format_number(value: f64) -> String {
    let rounded = (value * 10.0).round() / 10.0;
    if rounded.fract() == 0.0 {
        format!("{:.0}", rounded)
    } else {
        format!("{:.1}", rounded)
    }
}

pub fn format_grams(value: f64) -> String {
    format!("{} g", format_number(value))
}
