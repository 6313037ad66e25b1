//! Icons shown next to a table's category in the detail panel.

#[cfg(test)]
#[path = "category_icon_test.rs"]
mod category_icon_test;

/// Icon for a table category. Matching ignores case and surrounding whitespace.
pub fn get_category_icon(category: &str) -> &'static str {
    match category.trim().to_ascii_lowercase().as_str() {
        "vip" => "👑",
        "booth" => "🛋",
        "standing" | "high-top" => "🍸",
        "bar" => "🍹",
        "outdoor" | "terrace" => "🌿",
        "stage" | "dj" => "🎧",
        "standard" | "table" => "🪑",
        _ => "📍",
    }
}
