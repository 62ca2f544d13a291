use yew::prelude::*;

use crate::charts::geometry::{ring_layout, RingSegment, RING_CIRCUMFERENCE};
use crate::components::icons::Icon;

/// Declared slices of the decorative ring. Offsets are computed from the
/// running sum in `ring_layout`, so these compose head-to-tail.
const SEGMENTS: [RingSegment; 3] = [
    RingSegment { fraction: 150.0 / 251.0, color: "#8b5cf6" },
    RingSegment { fraction: 75.0 / 251.0, color: "#a78bfa" },
    RingSegment { fraction: 50.0 / 251.0, color: "#c4b5fd" },
];

/// Segmented ring revealed by a staggered dash-offset transition.
#[function_component(RingChart)]
pub fn ring_chart() -> Html {
    let arcs = ring_layout(&SEGMENTS, RING_CIRCUMFERENCE);

    html! {
        <div class="ring-chart">
            <svg viewBox="0 0 100 100" style="transform: rotate(-90deg);">
                <circle cx="50" cy="50" r="40" fill="none" stroke="#1e293b" stroke-width="12" />
                {
                    for arcs.iter().enumerate().map(|(i, arc)| html! {
                        <circle
                            cx="50" cy="50" r="40"
                            fill="none"
                            stroke={arc.color}
                            stroke-width="12"
                            stroke-linecap="round"
                            class="ring-arc"
                            style={format!(
                                "stroke-dasharray: {:.1} {:.1}; --ring-offset: {:.1}; animation-delay: {}ms;",
                                arc.length,
                                RING_CIRCUMFERENCE,
                                -arc.start_offset,
                                i * 300,
                            )}
                        />
                    })
                }
            </svg>
            <div class="ring-chart-center">
                <Icon name="database" size={24} />
            </div>
        </div>
    }
}
