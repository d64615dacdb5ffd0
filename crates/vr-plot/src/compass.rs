//! The 8-point compass rose.

/// A compass direction, clockwise from North in 45° steps.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CompassPoint {
    N,
    NE,
    E,
    SE,
    S,
    SW,
    W,
    NW,
}

/// Rose order used by the rounding lookup in [`compass_label`].
const ROSE: [CompassPoint; 8] = [
    CompassPoint::N,
    CompassPoint::NE,
    CompassPoint::E,
    CompassPoint::SE,
    CompassPoint::S,
    CompassPoint::SW,
    CompassPoint::W,
    CompassPoint::NW,
];

impl CompassPoint {
    pub fn as_str(self) -> &'static str {
        match self {
            CompassPoint::N  => "N",
            CompassPoint::NE => "NE",
            CompassPoint::E  => "E",
            CompassPoint::SE => "SE",
            CompassPoint::S  => "S",
            CompassPoint::SW => "SW",
            CompassPoint::W  => "W",
            CompassPoint::NW => "NW",
        }
    }
}

impl std::fmt::Display for CompassPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Nearest compass point for a bearing in degrees.
///
/// Each point owns a 45° sector centred on it, so 0° and 360° (and anything
/// within 22.5° of North on either side) all read `N`.
pub fn compass_label(bearing_deg: f64) -> CompassPoint {
    let sector = (bearing_deg / 45.0).round() as i64;
    ROSE[sector.rem_euclid(8) as usize]
}
