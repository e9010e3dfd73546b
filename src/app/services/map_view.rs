//! Map markers and viewport for the displayed estates
//!
//! Only estates with usable coordinates are plotted. Estates sharing a
//! coordinate collapse into one marker; the last one seen labels it.

use serde::Serialize;
use std::collections::HashMap;
use tracing::warn;

use crate::app::models::{Coords, Kebun};
use crate::app::services::monitoring::ViewSnapshot;
use crate::constants::{DEFAULT_MAP_CENTER, DEFAULT_MAP_ZOOM, MAP_BOUNDS_PADDING, MAP_FOCUS_ZOOM};

/// One plotted estate
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapMarker {
    pub id: String,
    pub coords: Coords,
    pub nama_kebun: String,
    pub distrik: String,
}

impl MapMarker {
    fn for_kebun(kebun: &Kebun, coords: Coords) -> Self {
        Self {
            id: kebun.id.clone(),
            coords,
            nama_kebun: kebun.nama_kebun.clone(),
            distrik: kebun.distrik.clone(),
        }
    }

    /// Popup text: estate name, then district
    pub fn popup(&self) -> String {
        let name = if self.nama_kebun.is_empty() {
            "Kebun"
        } else {
            self.nama_kebun.as_str()
        };
        format!("{}\n{}", name, self.distrik)
    }
}

/// What the map should show after markers change
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Viewport {
    /// Nothing to plot; keep whatever the map shows
    Unchanged,
    Center { coords: Coords, zoom: u8 },
    Bounds { south_west: Coords, north_east: Coords },
}

impl Viewport {
    /// The view a fresh map opens with
    pub fn initial() -> Self {
        Self::Center {
            coords: Coords::new(DEFAULT_MAP_CENTER.0, DEFAULT_MAP_CENTER.1),
            zoom: DEFAULT_MAP_ZOOM,
        }
    }

    /// Center on one estate at focus zoom
    pub fn focus(coords: Coords) -> Self {
        Self::Center {
            coords,
            zoom: MAP_FOCUS_ZOOM,
        }
    }
}

/// Markers for the located estates, de-duplicated by coordinate
pub fn markers_for<'a>(kebuns: impl IntoIterator<Item = &'a Kebun>) -> Vec<MapMarker> {
    let mut markers: Vec<MapMarker> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();

    for kebun in kebuns {
        let Some(coords) = kebun.location() else {
            continue;
        };
        let marker = MapMarker::for_kebun(kebun, coords);
        match positions.get(&coords.marker_key()) {
            Some(&position) => markers[position] = marker,
            None => {
                positions.insert(coords.marker_key(), markers.len());
                markers.push(marker);
            }
        }
    }

    markers
}

/// Center on a single marker, or fit the padded bounds of several
pub fn viewport_for(markers: &[MapMarker]) -> Viewport {
    match markers {
        [] => Viewport::Unchanged,
        [only] => Viewport::focus(only.coords),
        [first, rest @ ..] => {
            let (mut south, mut west) = (first.coords.lat, first.coords.lon);
            let (mut north, mut east) = (south, west);
            for marker in rest {
                south = south.min(marker.coords.lat);
                north = north.max(marker.coords.lat);
                west = west.min(marker.coords.lon);
                east = east.max(marker.coords.lon);
            }

            let lat_pad = (north - south) * MAP_BOUNDS_PADDING;
            let lon_pad = (east - west) * MAP_BOUNDS_PADDING;
            Viewport::Bounds {
                south_west: Coords::new(south - lat_pad, west - lon_pad),
                north_east: Coords::new(north + lat_pad, east + lon_pad),
            }
        }
    }
}

/// Markers and viewport for one view state
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapScene {
    pub markers: Vec<MapMarker>,
    pub viewport: Viewport,
}

impl MapScene {
    /// Plot the displayed estates, or the full dataset when nothing is displayed
    pub fn for_view(all: &[Kebun], shown: &ViewSnapshot) -> Self {
        let markers = if shown.is_empty() {
            markers_for(all)
        } else {
            markers_for(shown.kebuns())
        };

        if markers.is_empty() {
            warn!("No valid coordinates in displayed estates, map keeps its current view");
        }

        let viewport = viewport_for(&markers);
        Self { markers, viewport }
    }
}
