//! Stat Card Component
//!
//! One aggregate number with a title and icon.

use leptos::prelude::*;

/// Group digits in threes, e.g. 12345 -> "12,345"
pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Shows "..." until `value` is available
#[component]
pub fn StatCard(
    #[prop(into)] title: String,
    icon: &'static str,
    #[prop(into)] color: String,
    #[prop(into)] value: Signal<Option<u64>>,
) -> impl IntoView {
    view! {
        <div class="card stat-card">
            <div class="stat-card-header">
                <span class="stat-card-title">{title}</span>
                <span class=format!("stat-card-icon {}", color)>{icon}</span>
            </div>
            <div class="stat-card-value">
                {move || value.get().map(format_count).unwrap_or_else(|| "...".to_string())}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1000), "1,000");
        assert_eq!(format_count(1234567), "1,234,567");
    }
}
