// src/rendering/plot.rs

use std::collections::BTreeMap;
use std::ops::Range;

use plotters::backend::DrawingBackend;
use plotters::coord::Shift;
use plotters::drawing::DrawingArea; // Plotters canvas, not the GTK widget
use plotters::prelude::*;

use crate::config::PlotStyle;
use crate::model::Spin;
use crate::physics::PlotPoint;

/// Axis ranges of the quantum number scatter.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotBounds {
    pub x: Range<f64>,
    pub y: Range<f64>,
    pub z: Range<f64>,
}

/// x: 0..max_n+1, y: -1..max_l+1, z: +-(max_l + max_|m| + 1)
pub fn plot_bounds(points: &[PlotPoint]) -> Option<PlotBounds> {
    if points.is_empty() {
        return None;
    }
    let max_n = points.iter().map(|p| p.x).max().unwrap_or(0);
    let max_l = points.iter().map(|p| p.y).max().unwrap_or(0);
    // z = l + m, so m = z - l
    let max_m = points.iter().map(|p| (p.z - p.y).abs()).max().unwrap_or(0);

    let z_extent = (max_l + max_m + 1) as f64;
    Some(PlotBounds {
        x: 0.0..(max_n + 1) as f64,
        y: -1.0..(max_l + 1) as f64,
        z: -z_extent..z_extent,
    })
}

/// How many electrons sit on each (x, y, z) coordinate.
pub fn point_counts(points: &[PlotPoint]) -> BTreeMap<(i32, i32, i32), usize> {
    let mut counts = BTreeMap::new();
    for p in points {
        *counts.entry((p.x, p.y, p.z)).or_insert(0) += 1;
    }
    counts
}

pub fn to_rgb(color: (f64, f64, f64)) -> RGBColor {
    let channel = |c: f64| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
    RGBColor(channel(color.0), channel(color.1), channel(color.2))
}

fn as_coord(p: &PlotPoint) -> (f64, f64, f64) {
    (p.x as f64, p.y as f64, p.z as f64)
}

// --- Draws the scatter to ANY backend (GTK screen, PNG, PDF) ---
pub fn draw_quantum_plot<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    title: &str,
    points: &[PlotPoint],
    style: &PlotStyle,
) -> Result<(), Box<dyn std::error::Error>>
where
    DB::ErrorType: 'static,
{
    root.fill(&to_rgb(style.background_color))?;

    let bounds = match plot_bounds(points) {
        Some(b) => b,
        None => {
            let (w, h) = root.dim_in_pixel();
            let text_style = ("sans-serif", 20).into_font().color(&BLACK);
            root.draw_text(
                "No electrons to plot. Enter an element symbol.",
                &text_style,
                (w as i32 / 2 - 200, h as i32 / 2),
            )?;
            return Ok(());
        }
    };

    let caption = format!("Quantum numbers of {} (n, l, l + m)", title);
    let mut chart = ChartBuilder::on(root)
        .caption(caption, ("sans-serif", 20))
        .margin(20)
        .build_cartesian_3d(bounds.x.clone(), bounds.y.clone(), bounds.z.clone())?;

    chart.with_projection(|mut pb| {
        pb.yaw = 0.6;
        pb.pitch = 0.35;
        pb.scale = 0.85;
        pb.into_matrix()
    });

    chart
        .configure_axes()
        .light_grid_style(BLACK.mix(0.15))
        .max_light_lines(1)
        .draw()?;

    let up_color = to_rgb(style.spin_up_color);
    let down_color = to_rgb(style.spin_down_color);
    let size = style.point_size;

    for (spin, color, label) in [
        (Spin::Up, up_color, "Spin Up"),
        (Spin::Down, down_color, "Spin Down"),
    ] {
        chart
            .draw_series(
                points
                    .iter()
                    .filter(|p| p.spin == spin)
                    .map(|p| Circle::new(as_coord(p), size, color.filled())),
            )?
            .label(label)
            .legend(move |(x, y)| Circle::new((x, y), 5, color.filled()));
    }

    if style.show_counts {
        let counts = point_counts(points);
        chart.draw_series(counts.iter().map(|(&(x, y, z), &count)| {
            Text::new(
                format!("({}, {}, {}) Count: {}", x, y, z, count),
                (x as f64, y as f64, z as f64),
                ("sans-serif", 11).into_font().color(&BLACK),
            )
        }))?;
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .border_style(BLACK)
        .background_style(WHITE.mix(0.8))
        .draw()?;

    root.present()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::Analysis;

    #[test]
    fn test_bounds_carbon() {
        let points = Analysis::for_electron_count(6).unwrap().points();
        let b = plot_bounds(&points).unwrap();
        assert_eq!(b.x, 0.0..3.0);
        assert_eq!(b.y, -1.0..2.0);
        // max_l = 1, max |m| = 1
        assert_eq!(b.z, -3.0..3.0);
    }

    #[test]
    fn test_bounds_empty() {
        assert!(plot_bounds(&[]).is_none());
    }

    #[test]
    fn test_point_counts_carbon() {
        let points = Analysis::for_electron_count(6).unwrap().points();
        let counts = point_counts(&points);
        assert_eq!(counts.get(&(1, 0, 0)), Some(&2));
        assert_eq!(counts.get(&(2, 0, 0)), Some(&2));
        assert_eq!(counts.get(&(2, 1, 0)), Some(&1));
        assert_eq!(counts.get(&(2, 1, 1)), Some(&1));
        assert_eq!(counts.values().sum::<usize>(), 6);
    }

    #[test]
    fn test_to_rgb() {
        assert_eq!(to_rgb((0.0, 0.0, 1.0)), RGBColor(0, 0, 255));
        assert_eq!(to_rgb((2.0, -1.0, 0.5)), RGBColor(255, 0, 128));
    }
}
