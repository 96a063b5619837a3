use crate::extract::{RegionStat, Totals};
use anyhow::Result;
use plotters::prelude::*;
use std::f64::consts::{PI, TAU};
use std::path::Path;

const BAR_FILL: RGBColor = RGBColor(173, 216, 230);
const SEGMENT_COLORS: [RGBColor; 3] = [
    RGBColor(135, 206, 235), // confirmed
    RGBColor(154, 205, 50),  // recovered
    RGBColor(255, 99, 71),   // deceased
];

/// Horizontal bar chart of confirmed counts, one bar per state in table
/// order with the first state at the top, each bar annotated with its
/// value at the tip.
pub fn bar_chart(stats: &[RegionStat], path: &Path) -> Result<()> {
    let root = SVGBackend::new(path, (1500, 1000)).into_drawing_area();
    root.fill(&WHITE)?;

    let n = stats.len();
    let x_max = stats.iter().map(|s| s.confirmed).max().unwrap_or(0).max(1) as f64;
    let x_max = x_max * 1.12; // room for the annotation past the bar tip

    let mut chart = ChartBuilder::on(&root)
        .caption("Total Confirmed Cases Statewise", ("sans-serif", 36))
        .margin(20)
        .x_label_area_size(60)
        .y_label_area_size(220)
        .build_cartesian_2d(0f64..x_max, (0..n.max(1) as i32).into_segmented())?;

    let names: Vec<&str> = stats.iter().map(|s| s.name.as_str()).collect();
    chart
        .configure_mesh()
        .disable_x_mesh()
        .disable_y_mesh()
        .y_labels(n.max(1))
        .y_label_formatter(&|seg| match seg {
            // segment 0 is at the bottom; the last extracted state sits there
            SegmentValue::CenterOf(s) => {
                let i = n as i32 - 1 - s;
                names
                    .get(i as usize)
                    .map(|name| name.to_string())
                    .unwrap_or_default()
            }
            _ => String::new(),
        })
        .x_desc("No. of Confirmed cases")
        .y_desc("States/UT")
        .draw()?;

    chart.draw_series(stats.iter().enumerate().map(|(i, s)| {
        let seg = (n - 1 - i) as i32;
        Rectangle::new(
            [
                (0.0, SegmentValue::Exact(seg)),
                (s.confirmed as f64, SegmentValue::Exact(seg + 1)),
            ],
            BAR_FILL.filled(),
        )
    }))?;
    chart.draw_series(stats.iter().enumerate().map(|(i, s)| {
        let seg = (n - 1 - i) as i32;
        Rectangle::new(
            [
                (0.0, SegmentValue::Exact(seg)),
                (s.confirmed as f64, SegmentValue::Exact(seg + 1)),
            ],
            BLUE.stroke_width(1),
        )
    }))?;

    // value annotation at each bar tip
    chart.draw_series(stats.iter().enumerate().map(|(i, s)| {
        let seg = (n - 1 - i) as i32;
        Text::new(
            s.confirmed.to_string(),
            (s.confirmed as f64 + x_max * 0.005, SegmentValue::CenterOf(seg)),
            ("sans-serif", 14),
        )
    }))?;

    root.present()?;
    Ok(())
}

/// Donut chart of the nationwide totals: three segments, each labeled with
/// its category and literal value. A zero-valued category draws no wedge
/// but keeps its label; all-zero totals render the three labels and the
/// hole only.
pub fn donut_chart(t: &Totals, path: &Path) -> Result<()> {
    let root = SVGBackend::new(path, (700, 700)).into_drawing_area();
    root.fill(&WHITE)?;
    let root = root.titled(
        "Nationwide total Confirmed, Recovered and Deceased Cases",
        ("sans-serif", 20),
    )?;

    let mut chart = ChartBuilder::on(&root)
        .margin(10)
        .build_cartesian_2d(-1.5f64..1.5f64, -1.5f64..1.5f64)?;

    let grand_total = t.confirmed + t.recovered + t.deceased;
    let segments = [
        ("Confirmed", t.confirmed, SEGMENT_COLORS[0]),
        ("Recovered", t.recovered, SEGMENT_COLORS[1]),
        ("Deceased", t.deceased, SEGMENT_COLORS[2]),
    ];

    let mut start = -PI / 2.0;
    for (i, (label, value, color)) in segments.into_iter().enumerate() {
        let sweep = if grand_total == 0 {
            0.0
        } else {
            value as f64 / grand_total as f64 * TAU
        };
        if sweep > 0.0 {
            chart.draw_series(std::iter::once(Polygon::new(
                wedge(start, sweep, 1.0),
                color.filled(),
            )))?;
        }

        // a zero-size wedge still gets its label; park it at a fixed angle
        let mid = if sweep > 0.0 {
            start + sweep / 2.0
        } else {
            -PI / 2.0 + i as f64 * TAU / 3.0
        };
        chart.draw_series(std::iter::once(Text::new(
            format!("{}: {}", label, value),
            (1.1 * mid.cos(), 1.1 * mid.sin()),
            ("sans-serif", 18),
        )))?;
        start += sweep;
    }

    // overlay the hole that turns the pie into a donut
    let hole: Vec<(f64, f64)> = (0..=72)
        .map(|k| {
            let a = k as f64 / 72.0 * TAU;
            (0.5 * a.cos(), 0.5 * a.sin())
        })
        .collect();
    chart.draw_series(std::iter::once(Polygon::new(hole, WHITE.filled())))?;

    root.present()?;
    Ok(())
}

fn wedge(start: f64, sweep: f64, radius: f64) -> Vec<(f64, f64)> {
    let steps = ((sweep / TAU * 120.0).ceil() as usize).max(2);
    let mut points = vec![(0.0, 0.0)];
    for k in 0..=steps {
        let a = start + sweep * k as f64 / steps as f64;
        points.push((radius * a.cos(), radius * a.sin()));
    }
    points
}
