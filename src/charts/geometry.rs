//! Geometry for the decorative SVG charts.
//!
//! Everything here is a pure function of its inputs; the components in
//! `crate::components` only format the results into SVG attributes.

/// Viewbox and plot frame of the mini line chart.
pub const CHART_WIDTH: f64 = 200.0;
pub const CHART_HEIGHT: f64 = 100.0;
pub const PLOT_HEIGHT: f64 = 80.0;
pub const PLOT_MARGIN: f64 = 10.0;

/// Dash space of the radius-40 ring circle (2 * pi * 40, rounded the way
/// the mockups declare it).
pub const RING_CIRCUMFERENCE: f64 = 251.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotPoint {
    pub x: f64,
    pub y: f64,
}

/// Map a sample series onto plot coordinates.
///
/// Samples are spaced evenly across `width`; values are normalized against
/// the series min/max and drawn within `plot_height`, inset by `margin`
/// from the bottom edge. Larger samples land nearer the top (smaller y).
///
/// Degenerate inputs: fewer than two samples yields nothing to draw, and an
/// all-equal series (zero range) maps to a flat line at mid plot height.
pub fn plot_points(
    samples: &[f64],
    width: f64,
    height: f64,
    plot_height: f64,
    margin: f64,
) -> Vec<PlotPoint> {
    if samples.len() < 2 {
        return Vec::new();
    }

    let min = samples.iter().copied().fold(f64::INFINITY, f64::min);
    let max = samples.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let range = max - min;
    let last = (samples.len() - 1) as f64;

    samples
        .iter()
        .enumerate()
        .map(|(i, &sample)| {
            let normalized = if range == 0.0 {
                0.5
            } else {
                (sample - min) / range
            };
            PlotPoint {
                x: i as f64 / last * width,
                y: height - normalized * plot_height - margin,
            }
        })
        .collect()
}

/// SVG path data for the connected polyline through `points`.
pub fn line_path(points: &[PlotPoint]) -> String {
    points
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let op = if i == 0 { 'M' } else { 'L' };
            format!("{} {:.2} {:.2}", op, p.x, p.y)
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// The same polyline closed against the baseline, for the area fill.
pub fn area_path(points: &[PlotPoint], width: f64, height: f64) -> String {
    if points.is_empty() {
        return String::new();
    }
    format!(
        "{} L {:.2} {:.2} L 0 {:.2} Z",
        line_path(points),
        width,
        height,
        height
    )
}

/// One declared slice of the ring chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingSegment {
    /// Fraction of the circumference this segment covers, in [0, 1].
    pub fraction: f64,
    pub color: &'static str,
}

/// A laid-out segment: dash length plus where along the circle it starts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingArc {
    pub length: f64,
    pub start_offset: f64,
    pub color: &'static str,
}

/// Lay segments head-to-tail around the circle.
///
/// Each arc starts where the previous one ended (running cumulative sum of
/// lengths), so arbitrary segment declarations compose without overlapping.
/// Lengths are clamped to the space left on the circle; segments past a
/// full circle are dropped.
pub fn ring_layout(segments: &[RingSegment], circumference: f64) -> Vec<RingArc> {
    let mut used = 0.0;
    let mut arcs = Vec::with_capacity(segments.len());
    for segment in segments {
        let remaining = circumference - used;
        if remaining <= 0.0 {
            break;
        }
        let length = (segment.fraction.clamp(0.0, 1.0) * circumference).min(remaining);
        arcs.push(RingArc {
            length,
            start_offset: used,
            color: segment.color,
        });
        used += length;
    }
    arcs
}

#[cfg(test)]
mod tests {
    use super::*;

    const SERIES: [f64; 12] = [
        20.0, 45.0, 30.0, 60.0, 45.0, 80.0, 65.0, 90.0, 75.0, 100.0, 85.0, 95.0,
    ];

    #[test]
    fn x_coordinates_evenly_spaced_across_width() {
        let points = plot_points(&SERIES, CHART_WIDTH, CHART_HEIGHT, PLOT_HEIGHT, PLOT_MARGIN);
        assert_eq!(points.len(), SERIES.len());
        assert_eq!(points[0].x, 0.0);
        assert_eq!(points[points.len() - 1].x, CHART_WIDTH);
        let step = CHART_WIDTH / (SERIES.len() - 1) as f64;
        for (i, p) in points.iter().enumerate() {
            assert!((p.x - i as f64 * step).abs() < 1e-9);
        }
    }

    #[test]
    fn extremes_map_to_plot_edges() {
        let points = plot_points(&SERIES, CHART_WIDTH, CHART_HEIGHT, PLOT_HEIGHT, PLOT_MARGIN);
        let top = points
            .iter()
            .min_by(|a, b| a.y.partial_cmp(&b.y).unwrap())
            .unwrap();
        let bottom = points
            .iter()
            .max_by(|a, b| a.y.partial_cmp(&b.y).unwrap())
            .unwrap();
        // sample 100.0 sits at index 9, sample 20.0 at index 0
        assert_eq!(top.x, points[9].x);
        assert_eq!(top.y, CHART_HEIGHT - PLOT_HEIGHT - PLOT_MARGIN);
        assert_eq!(bottom.x, points[0].x);
        assert_eq!(bottom.y, CHART_HEIGHT - PLOT_MARGIN);
    }

    #[test]
    fn identical_input_yields_identical_output() {
        let a = plot_points(&SERIES, CHART_WIDTH, CHART_HEIGHT, PLOT_HEIGHT, PLOT_MARGIN);
        let b = plot_points(&SERIES, CHART_WIDTH, CHART_HEIGHT, PLOT_HEIGHT, PLOT_MARGIN);
        assert_eq!(a, b);
        assert_eq!(line_path(&a), line_path(&b));
    }

    #[test]
    fn fewer_than_two_samples_draws_nothing() {
        assert!(plot_points(&[], CHART_WIDTH, CHART_HEIGHT, PLOT_HEIGHT, PLOT_MARGIN).is_empty());
        assert!(
            plot_points(&[42.0], CHART_WIDTH, CHART_HEIGHT, PLOT_HEIGHT, PLOT_MARGIN).is_empty()
        );
        assert!(area_path(&[], CHART_WIDTH, CHART_HEIGHT).is_empty());
    }

    #[test]
    fn zero_range_series_is_a_flat_mid_line() {
        let points = plot_points(
            &[5.0, 5.0, 5.0, 5.0],
            CHART_WIDTH,
            CHART_HEIGHT,
            PLOT_HEIGHT,
            PLOT_MARGIN,
        );
        let mid = CHART_HEIGHT - 0.5 * PLOT_HEIGHT - PLOT_MARGIN;
        assert!(points.iter().all(|p| p.y == mid));
    }

    #[test]
    fn line_path_starts_with_move_then_lines() {
        let points = plot_points(&SERIES, CHART_WIDTH, CHART_HEIGHT, PLOT_HEIGHT, PLOT_MARGIN);
        let path = line_path(&points);
        assert!(path.starts_with("M 0.00"));
        assert_eq!(path.matches('L').count(), SERIES.len() - 1);

        let area = area_path(&points, CHART_WIDTH, CHART_HEIGHT);
        assert!(area.starts_with(&path));
        assert!(area.ends_with('Z'));
    }

    #[test]
    fn ring_offsets_are_cumulative_sums() {
        let segments = [
            RingSegment { fraction: 150.0 / 251.0, color: "a" },
            RingSegment { fraction: 75.0 / 251.0, color: "b" },
            RingSegment { fraction: 50.0 / 251.0, color: "c" },
        ];
        let arcs = ring_layout(&segments, RING_CIRCUMFERENCE);
        assert_eq!(arcs.len(), 3);
        assert_eq!(arcs[0].start_offset, 0.0);
        assert!((arcs[0].length - 150.0).abs() < 1e-9);
        assert!((arcs[1].start_offset - 150.0).abs() < 1e-9);
        assert!((arcs[1].length - 75.0).abs() < 1e-9);
        assert!((arcs[2].start_offset - 225.0).abs() < 1e-9);
        // declared fractions overshoot the circle; the last arc is clamped
        assert!((arcs[2].length - 26.0).abs() < 1e-9);
    }

    #[test]
    fn ring_total_never_exceeds_circumference() {
        let segments = [
            RingSegment { fraction: 0.9, color: "a" },
            RingSegment { fraction: 0.9, color: "b" },
            RingSegment { fraction: 0.9, color: "c" },
        ];
        let arcs = ring_layout(&segments, RING_CIRCUMFERENCE);
        let total: f64 = arcs.iter().map(|a| a.length).sum();
        assert!(total <= RING_CIRCUMFERENCE + 1e-9);
        // the third segment had no room left
        assert_eq!(arcs.len(), 2);
    }

    #[test]
    fn ring_clamps_out_of_range_fractions() {
        let segments = [RingSegment { fraction: 1.7, color: "a" }];
        let arcs = ring_layout(&segments, RING_CIRCUMFERENCE);
        assert_eq!(arcs.len(), 1);
        assert_eq!(arcs[0].length, RING_CIRCUMFERENCE);

        let segments = [RingSegment { fraction: -0.3, color: "a" }];
        let arcs = ring_layout(&segments, RING_CIRCUMFERENCE);
        assert_eq!(arcs[0].length, 0.0);
    }
}
