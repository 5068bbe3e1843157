//! Map preview models for a selected route.
//!
//! A [`MapPreview`] carries everything a map surface needs to show one route:
//! a heading, start and end markers, a polyline and a framing [`Region`].
//! Coordinates follow the `geo` convention of `x = longitude`,
//! `y = latitude`. No tiles are fetched or rendered here.

use std::fmt;

use geo::{Coord, Rect};

use crate::Route;

/// Factor applied to the start/end span so both markers sit inside the view.
pub const REGION_PADDING: f64 = 2.5;

/// Start coordinate used when the real endpoints are unknown (San Francisco).
pub const PLACEHOLDER_START: Coord<f64> = Coord {
    x: -122.4324,
    y: 37.78825,
};

/// End coordinate used when the real endpoints are unknown.
pub const PLACEHOLDER_END: Coord<f64> = Coord {
    x: -122.4624,
    y: 37.75825,
};

/// Pin colour for a [`Marker`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum MarkerColour {
    /// Used for the start of a route.
    Green,
    /// Used for the end of a route.
    Red,
}

/// A labelled pin on the map.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Marker {
    /// Pin position.
    pub coordinate: Coord<f64>,
    /// Short label.
    pub title: String,
    /// Longer description shown on selection.
    pub description: String,
    /// Pin colour.
    pub colour: MarkerColour,
}

/// The visible map area.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Region {
    /// Centre of the view.
    pub centre: Coord<f64>,
    /// Visible latitude span in degrees.
    pub latitude_delta: f64,
    /// Visible longitude span in degrees.
    pub longitude_delta: f64,
}

impl Region {
    /// Frame `start` and `end`, scaling their span by `padding`.
    ///
    /// # Examples
    /// ```
    /// use geo::Coord;
    /// use ecoroute_core::Region;
    ///
    /// let region = Region::framing(Coord { x: 0.0, y: 0.0 }, Coord { x: 2.0, y: 1.0 }, 2.0);
    /// assert_eq!(region.centre, Coord { x: 1.0, y: 0.5 });
    /// assert_eq!(region.longitude_delta, 4.0);
    /// assert_eq!(region.latitude_delta, 2.0);
    /// ```
    pub fn framing(start: Coord<f64>, end: Coord<f64>, padding: f64) -> Self {
        let bounds = Rect::new(start, end);
        Self {
            centre: bounds.center(),
            latitude_delta: bounds.height() * padding,
            longitude_delta: bounds.width() * padding,
        }
    }
}

/// Everything needed to preview one route on a map.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MapPreview {
    /// Upper-cased travel mode.
    pub heading: String,
    /// The route being previewed.
    pub route: Route,
    /// Start and end pins.
    pub markers: Vec<Marker>,
    /// Path drawn between the endpoints.
    pub polyline: Vec<Coord<f64>>,
    /// Initial view framing both endpoints.
    pub region: Region,
}

impl MapPreview {
    /// Preview `route` as a straight segment from `start` to `end`.
    pub fn between(route: &Route, start: Coord<f64>, end: Coord<f64>) -> Self {
        let markers = vec![
            Marker {
                coordinate: start,
                title: "Start".to_owned(),
                description: "Start location".to_owned(),
                colour: MarkerColour::Green,
            },
            Marker {
                coordinate: end,
                title: "End".to_owned(),
                description: "End location".to_owned(),
                colour: MarkerColour::Red,
            },
        ];
        Self {
            heading: route.mode_label(),
            route: route.clone(),
            markers,
            polyline: vec![start, end],
            region: Region::framing(start, end, REGION_PADDING),
        }
    }

    /// Preview `route` between the fixed demonstration endpoints.
    ///
    /// # Examples
    /// ```
    /// use ecoroute_core::{MapPreview, Route};
    ///
    /// let route = Route::new("transit", 5.0, 20.0, 50.0, 30.0);
    /// let preview = MapPreview::placeholder(&route);
    /// assert_eq!(preview.heading, "TRANSIT");
    /// assert_eq!(preview.markers.len(), 2);
    /// ```
    pub fn placeholder(route: &Route) -> Self {
        Self::between(route, PLACEHOLDER_START, PLACEHOLDER_END)
    }

    /// Display lines for the previewed route.
    pub fn details(&self) -> RouteDetails<'_> {
        RouteDetails::new(&self.route)
    }
}

/// Human-readable detail lines for a route.
///
/// # Examples
/// ```
/// use ecoroute_core::{Route, RouteDetails};
///
/// let route = Route::new("walking", 5.0, 60.0, 0.0, 60.0);
/// let lines = RouteDetails::new(&route).lines();
/// assert_eq!(lines[0], "Distance: 5 km");
/// assert_eq!(lines[3], "Score: 60.0");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct RouteDetails<'a> {
    route: &'a Route,
}

impl<'a> RouteDetails<'a> {
    /// Describe `route`.
    pub const fn new(route: &'a Route) -> Self {
        Self { route }
    }

    /// Distance, time, emissions and score, one per line.
    pub fn lines(&self) -> [String; 4] {
        let route = self.route;
        [
            format!("Distance: {} km", route.distance_km),
            format!("Time: {} min", route.time_min),
            format!("CO₂: {} g", route.co2_g),
            format!("Score: {:.1}", route.score),
        ]
    }
}

impl fmt::Display for RouteDetails<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} (score {:.1})", self.route.mode_label(), self.route.score)?;
        for line in self.lines() {
            writeln!(f, "  {line}")?;
        }
        Ok(())
    }
}
