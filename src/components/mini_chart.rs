use yew::prelude::*;

use crate::charts::geometry::{
    area_path, line_path, plot_points, CHART_HEIGHT, CHART_WIDTH, PLOT_HEIGHT, PLOT_MARGIN,
};

/// Fixed decorative series shown in the analytics card.
const SERIES: [f64; 12] = [
    20.0, 45.0, 30.0, 60.0, 45.0, 80.0, 65.0, 90.0, 75.0, 100.0, 85.0, 95.0,
];

/// Line/area chart with a dash-reveal stroke and per-point dots.
#[function_component(MiniChart)]
pub fn mini_chart() -> Html {
    let points = plot_points(&SERIES, CHART_WIDTH, CHART_HEIGHT, PLOT_HEIGHT, PLOT_MARGIN);
    let line = line_path(&points);
    let area = area_path(&points, CHART_WIDTH, CHART_HEIGHT);

    html! {
        <svg viewBox="0 0 200 100" class="mini-chart">
            <defs>
                <linearGradient id="lineGradient" x1="0%" y1="0%" x2="100%" y2="0%">
                    <stop offset="0%" stop-color="#a78bfa" />
                    <stop offset="100%" stop-color="#8b5cf6" />
                </linearGradient>
                <linearGradient id="areaGradient" x1="0%" y1="0%" x2="0%" y2="100%">
                    <stop offset="0%" stop-color="#8b5cf6" stop-opacity="0.3" />
                    <stop offset="100%" stop-color="#8b5cf6" stop-opacity="0" />
                </linearGradient>
            </defs>
            <path d={area} fill="url(#areaGradient)" class="fade-in" />
            <path
                d={line}
                fill="none"
                stroke="url(#lineGradient)"
                stroke-width="2"
                stroke-linecap="round"
                stroke-linejoin="round"
                class="chart-line"
            />
            {
                for points.iter().enumerate().map(|(i, p)| html! {
                    <circle
                        cx={format!("{:.2}", p.x)}
                        cy={format!("{:.2}", p.y)}
                        r="3"
                        fill="#a78bfa"
                        class="fade-in"
                        style={format!("animation-delay: {}ms;", i * 100 + 500)}
                    />
                })
            }
        </svg>
    }
}
