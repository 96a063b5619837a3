pub mod aliases;
pub mod render;

use crate::extract::RegionStat;
use anyhow::{bail, Context, Result};
use geo_types::MultiPolygon;
use shapefile::dbase::{FieldValue, Record};
use std::collections::HashMap;
use std::path::Path;

pub use render::choropleth;

/// The state-boundary dataset, read from the working directory. A shapefile
/// is a set of sidecar files; this names the `.shp` member.
pub const SHAPEFILE_PATH: &str = "Indian_States.shp";

/// One polygon record from the boundary dataset.
#[derive(Debug, Clone)]
pub struct BoundaryRegion {
    pub name: String,
    pub geometry: MultiPolygon<f64>,
}

/// A boundary joined with its scraped statistics, zero-filled when the
/// state has no row in the table. The serial number carries no geographic
/// meaning and is dropped here.
#[derive(Debug, Clone)]
pub struct MergedRegion {
    pub name: String,
    pub geometry: MultiPolygon<f64>,
    pub confirmed: u64,
    pub recovered: u64,
    pub deceased: u64,
}

/// Read every polygon and its attribute record from the shapefile.
pub fn load_boundaries(path: &Path) -> Result<Vec<BoundaryRegion>> {
    let pairs = shapefile::read_as::<_, shapefile::Polygon, Record>(path)
        .with_context(|| format!("failed to read boundary dataset `{}`", path.display()))?;

    pairs
        .into_iter()
        .map(|(polygon, record)| {
            let name = match record.get(aliases::NAME_FIELD) {
                Some(FieldValue::Character(Some(name))) => name.clone(),
                _ => bail!(
                    "boundary record is missing the `{}` name field",
                    aliases::NAME_FIELD
                ),
            };
            Ok(BoundaryRegion {
                name,
                geometry: polygon.into(),
            })
        })
        .collect()
}

/// Left-join boundaries with the scraped table on the normalized state
/// name. Every boundary is kept exactly once; a boundary with no matching
/// row gets all-zero statistics. Table rows with no boundary are silently
/// left off the map.
pub fn merge_stats(boundaries: Vec<BoundaryRegion>, stats: &[RegionStat]) -> Vec<MergedRegion> {
    let by_name: HashMap<&str, &RegionStat> =
        stats.iter().map(|s| (s.name.as_str(), s)).collect();

    boundaries
        .into_iter()
        .map(|b| {
            let name = aliases::normalize_name(&b.name);
            let stat = by_name.get(name.as_str()).copied();
            MergedRegion {
                name,
                geometry: b.geometry,
                confirmed: stat.map_or(0, |s| s.confirmed),
                recovered: stat.map_or(0, |s| s.recovered),
                deceased: stat.map_or(0, |s| s.deceased),
            }
        })
        .collect()
}

// ----- Tests -----
#[cfg(test)]
mod tests {
    use super::*;
    use shapefile::dbase::{FieldName, TableWriterBuilder};
    use shapefile::{Point, Polygon, PolygonRing, Writer};
    use tempfile::tempdir;

    fn stat(name: &str, confirmed: u64, recovered: u64, deceased: u64) -> RegionStat {
        RegionStat {
            serial: "1".to_string(),
            name: name.to_string(),
            confirmed,
            recovered,
            deceased,
        }
    }

    fn boundary(name: &str) -> BoundaryRegion {
        BoundaryRegion {
            name: name.to_string(),
            geometry: unit_square(0.0, 0.0),
        }
    }

    fn unit_square(x0: f64, y0: f64) -> MultiPolygon<f64> {
        use geo_types::{LineString, Polygon as GeoPolygon};
        MultiPolygon(vec![GeoPolygon::new(
            LineString::from(vec![
                (x0, y0),
                (x0 + 1.0, y0),
                (x0 + 1.0, y0 + 1.0),
                (x0, y0 + 1.0),
                (x0, y0),
            ]),
            vec![],
        )])
    }

    // outer ring, clockwise, closed
    fn shp_square(x: f64, y: f64) -> Polygon {
        Polygon::new(PolygonRing::Outer(vec![
            Point::new(x, y),
            Point::new(x, y + 1.0),
            Point::new(x + 1.0, y + 1.0),
            Point::new(x + 1.0, y),
            Point::new(x, y),
        ]))
    }

    #[test]
    fn test_merge_keeps_every_boundary_once() {
        let boundaries = vec![boundary("Kerala"), boundary("Sikkim"), boundary("Goa")];
        let stats = vec![stat("Kerala", 100, 90, 2)];

        let merged = merge_stats(boundaries, &stats);
        assert_eq!(merged.len(), 3);
    }

    #[test]
    fn test_unmatched_boundary_is_zero_filled() {
        let merged = merge_stats(vec![boundary("Sikkim")], &[stat("Kerala", 100, 90, 2)]);
        assert_eq!(merged[0].confirmed, 0);
        assert_eq!(merged[0].recovered, 0);
        assert_eq!(merged[0].deceased, 0);
    }

    #[test]
    fn test_alias_lets_telangana_join() {
        // the shapefile spells it Telangana, the page Telengana
        let merged = merge_stats(vec![boundary("Telangana")], &[stat("Telengana", 40, 30, 1)]);
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].name, "Telengana");
        assert_eq!(merged[0].confirmed, 40);
    }

    #[test]
    fn test_stat_without_boundary_is_dropped() {
        let merged = merge_stats(vec![boundary("Kerala")], &[stat("Atlantis", 9, 9, 9)]);
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].name, "Kerala");
        assert_eq!(merged[0].confirmed, 0);
    }

    #[test]
    fn test_empty_stats_zero_fill_everything() {
        let merged = merge_stats(vec![boundary("Kerala"), boundary("Goa")], &[]);
        assert_eq!(merged.len(), 2);
        assert!(merged.iter().all(|m| m.confirmed == 0));
    }

    #[test]
    fn test_load_boundaries_round_trip() {
        let tmp = tempdir().unwrap();
        let shp = tmp.path().join("states.shp");

        let table = TableWriterBuilder::new()
            .add_character_field(FieldName::try_from("st_nm").unwrap(), 50);
        let mut writer = Writer::from_path(&shp, table).unwrap();
        for (name, x) in [("Kerala", 0.0), ("Telangana", 2.0)] {
            let mut record = Record::default();
            record.insert(
                "st_nm".to_string(),
                FieldValue::Character(Some(name.to_string())),
            );
            writer.write_shape_and_record(&shp_square(x, 0.0), &record).unwrap();
        }
        drop(writer);

        let boundaries = load_boundaries(&shp).unwrap();
        assert_eq!(boundaries.len(), 2);
        assert_eq!(boundaries[0].name, "Kerala");
        assert_eq!(boundaries[1].name, "Telangana");
        assert!(!boundaries[0].geometry.0.is_empty());
    }

    #[test]
    fn test_load_boundaries_missing_file() {
        let tmp = tempdir().unwrap();
        assert!(load_boundaries(&tmp.path().join("nowhere.shp")).is_err());
    }
}
