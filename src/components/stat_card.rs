use yew::prelude::*;

use crate::components::count_up::use_count_up;
use crate::components::icons::Icon;

/// The stat counters run a little slower than the default so the big
/// numbers are readable while they settle.
const STAT_COUNT_DURATION_MS: f64 = 2500.0;

#[derive(Properties, PartialEq)]
pub struct StatCardProps {
    pub icon: &'static str,
    pub value: u64,
    pub suffix: &'static str,
    pub label: &'static str,
    pub delay_ms: u32,
}

#[function_component(StatCard)]
pub fn stat_card(props: &StatCardProps) -> Html {
    let (count, node) = use_count_up(props.value, STAT_COUNT_DURATION_MS);

    html! {
        <div
            class="glass-card stat-card slide-up"
            style={format!("animation-delay: {}ms;", props.delay_ms)}
        >
            <div class="stat-card-header">
                <div class="stat-icon">
                    <Icon name={props.icon} size={20} />
                </div>
                <span class="stat-label">{ props.label }</span>
            </div>
            <div class="stat-value-row">
                <span ref={node} class="stat-value">{ format_count(count) }</span>
                <span class="stat-suffix">{ props.suffix }</span>
            </div>
        </div>
    }
}

/// Group digits with thousands separators ("1234567" -> "1,234,567").
fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::format_count;

    #[test]
    fn groups_thousands() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1000), "1,000");
        assert_eq!(format_count(500_000), "500,000");
        assert_eq!(format_count(1_234_567), "1,234,567");
    }
}
