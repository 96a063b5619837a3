use anyhow::Result;
use covidscraper::{extract, fetch, map, report};
use reqwest::blocking::Client;
use std::{fs, path::PathBuf};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder().with_env_filter(env).init();
    info!("startup");

    let charts_dir = PathBuf::from("charts");
    fs::create_dir_all(&charts_dir)?;

    // ─── 2) fetch the statistics page ────────────────────────────────
    let client = Client::new();
    info!(url = fetch::SOURCE_URL, "fetching statistics page");
    let html = fetch::fetch_page(&client, fetch::SOURCE_URL)?;

    // ─── 3) extract the per-state table ──────────────────────────────
    let stats = extract::extract_stats(&html)?;
    info!("extracted {} state rows", stats.len());

    // ─── 4) console table, then charts ───────────────────────────────
    report::stat_table(&stats).printstd();

    let bar_path = charts_dir.join("bar.svg");
    report::bar_chart(&stats, &bar_path)?;
    info!("wrote {}", bar_path.display());

    let totals = extract::totals(&stats);
    let donut_path = charts_dir.join("donut.svg");
    report::donut_chart(&totals, &donut_path)?;
    info!("wrote {}", donut_path.display());

    // ─── 5) choropleth over the state boundaries ─────────────────────
    let boundaries = map::load_boundaries(map::SHAPEFILE_PATH.as_ref())?;
    info!("loaded {} boundary polygons", boundaries.len());
    let merged = map::merge_stats(boundaries, &stats);

    let map_path = charts_dir.join("choropleth.svg");
    map::choropleth(&merged, &map_path)?;
    info!("wrote {}", map_path.display());

    info!("all done");
    Ok(())
}
