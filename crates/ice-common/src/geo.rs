//! GeoJSON-shaped geometry types.
//!
//! Coordinates are `[longitude, latitude]` pairs, matching the stored
//! GeoJSON columns.

use serde::{Deserialize, Serialize};

/// A GeoJSON point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "Point")]
pub struct Point {
    pub coordinates: [f64; 2],
}

impl Point {
    pub fn new(lon: f64, lat: f64) -> Self {
        Self {
            coordinates: [lon, lat],
        }
    }

    pub fn lon(&self) -> f64 {
        self.coordinates[0]
    }

    pub fn lat(&self) -> f64 {
        self.coordinates[1]
    }
}

/// A GeoJSON polygon: one outer ring, optional holes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "Polygon")]
pub struct Polygon {
    pub coordinates: Vec<Vec<[f64; 2]>>,
}

impl Polygon {
    pub fn new(outer_ring: Vec<[f64; 2]>) -> Self {
        Self {
            coordinates: vec![outer_ring],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_serializes_as_geojson() {
        let p = Point::new(18.055, 59.355);
        let json = serde_json::to_value(&p).unwrap();
        assert_eq!(json["type"], "Point");
        assert_eq!(json["coordinates"][0], 18.055);
        assert_eq!(json["coordinates"][1], 59.355);
    }

    #[test]
    fn point_deserializes_from_geojson() {
        let p: Point =
            serde_json::from_str(r#"{"type":"Point","coordinates":[17.8,59.295]}"#).unwrap();
        assert_eq!(p.lon(), 17.8);
        assert_eq!(p.lat(), 59.295);
    }

    #[test]
    fn polygon_round_trips() {
        let ring = vec![[18.01, 59.31], [18.02, 59.32], [18.03, 59.31], [18.01, 59.31]];
        let poly = Polygon::new(ring.clone());
        let json = serde_json::to_string(&poly).unwrap();
        let back: Polygon = serde_json::from_str(&json).unwrap();
        assert_eq!(back.coordinates[0], ring);
    }
}
