use super::MergedRegion;
use anyhow::Result;
use plotters::prelude::*;
use std::path::Path;

const OUTLINE: RGBColor = RGBColor(204, 204, 204);
const LEGEND_STEPS: usize = 100;

/// Choropleth of confirmed counts: every polygon filled with a color
/// proportional to its count, thin grey outlines, a gradient legend on the
/// right, no axes.
pub fn choropleth(regions: &[MergedRegion], path: &Path) -> Result<()> {
    let root = SVGBackend::new(path, (1200, 900)).into_drawing_area();
    root.fill(&WHITE)?;
    let root = root.titled("Covid-19 Statewise Data - Confirmed Cases", ("sans-serif", 36))?;
    let (map_area, legend_area) = root.split_horizontally(1020);

    let (min_x, min_y, max_x, max_y) = bounds(regions);
    let max_confirmed = regions.iter().map(|r| r.confirmed).max().unwrap_or(0).max(1);

    let mut chart = ChartBuilder::on(&map_area)
        .margin(10)
        .build_cartesian_2d(min_x..max_x, min_y..max_y)?;

    for region in regions {
        let fill = ramp(region.confirmed as f64 / max_confirmed as f64);
        for polygon in &region.geometry.0 {
            let ring: Vec<(f64, f64)> =
                polygon.exterior().0.iter().map(|c| (c.x, c.y)).collect();
            chart.draw_series(std::iter::once(Polygon::new(ring.clone(), fill.filled())))?;
            chart.draw_series(std::iter::once(PathElement::new(ring, OUTLINE.stroke_width(1))))?;
        }
    }

    let mut legend = ChartBuilder::on(&legend_area)
        .margin(20)
        .y_label_area_size(70)
        .build_cartesian_2d(0f64..1f64, 0f64..max_confirmed as f64)?;
    legend
        .configure_mesh()
        .disable_x_mesh()
        .disable_y_mesh()
        .x_labels(0)
        .y_labels(5)
        .draw()?;
    legend.draw_series((0..LEGEND_STEPS).map(|k| {
        let lo = max_confirmed as f64 * k as f64 / LEGEND_STEPS as f64;
        let hi = max_confirmed as f64 * (k + 1) as f64 / LEGEND_STEPS as f64;
        let fill = ramp((k as f64 + 0.5) / LEGEND_STEPS as f64);
        Rectangle::new([(0.0, lo), (1.0, hi)], fill.filled())
    }))?;

    root.present()?;
    Ok(())
}

/// Light-yellow to dark-red, the usual case-count ramp.
fn ramp(t: f64) -> RGBColor {
    let t = t.clamp(0.0, 1.0);
    let lerp = |a: u8, b: u8| (f64::from(a) + (f64::from(b) - f64::from(a)) * t).round() as u8;
    RGBColor(lerp(255, 189), lerp(255, 0), lerp(178, 38))
}

fn bounds(regions: &[MergedRegion]) -> (f64, f64, f64, f64) {
    let (mut min_x, mut min_y) = (f64::INFINITY, f64::INFINITY);
    let (mut max_x, mut max_y) = (f64::NEG_INFINITY, f64::NEG_INFINITY);
    for region in regions {
        for polygon in &region.geometry.0 {
            for c in &polygon.exterior().0 {
                min_x = min_x.min(c.x);
                min_y = min_y.min(c.y);
                max_x = max_x.max(c.x);
                max_y = max_y.max(c.y);
            }
        }
    }
    if !min_x.is_finite() {
        return (0.0, 0.0, 1.0, 1.0);
    }
    // degenerate extents would make an invalid axis range
    if max_x <= min_x {
        max_x = min_x + 1.0;
    }
    if max_y <= min_y {
        max_y = min_y + 1.0;
    }
    (min_x, min_y, max_x, max_y)
}
