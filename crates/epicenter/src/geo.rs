//! Continent classification and shaking-radius estimation

/// Continents distinguished by the epicenter bounding boxes
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Continent {
    Africa,
    Antarctica,
    Asia,
    Oceania,
    Europe,
    America,
}

impl Continent {
    /// Classify a coordinate pair into a continent.
    ///
    /// The boxes are coarse and overlap; they are checked in a fixed
    /// order and the first match wins, so southern Europe classifies as
    /// Africa. Coordinates outside every box (or NaN) yield `None`.
    pub fn classify(lat: f64, lng: f64) -> Option<Self> {
        if (-37.0..=37.0).contains(&lat) && (-18.0..=51.0).contains(&lng) {
            return Some(Self::Africa);
        }
        if (-90.0..=-60.0).contains(&lat) && (-180.0..=180.0).contains(&lng) {
            return Some(Self::Antarctica);
        }
        if (10.0..=80.0).contains(&lat) && (26.0..=180.0).contains(&lng) {
            return Some(Self::Asia);
        }
        if (-55.0..=-10.0).contains(&lat) && (112.0..=180.0).contains(&lng) {
            return Some(Self::Oceania);
        }
        if (34.0..=71.0).contains(&lat) && (-25.0..=45.0).contains(&lng) {
            return Some(Self::Europe);
        }
        if (-60.0..=83.0).contains(&lat) && (-180.0..=-35.0).contains(&lng) {
            return Some(Self::America);
        }
        None
    }

    /// Canonical name
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Africa => "Africa",
            Self::Antarctica => "Antarctica",
            Self::Asia => "Asia",
            Self::Oceania => "Oceania",
            Self::Europe => "Europe",
            Self::America => "America",
        }
    }
}

impl std::fmt::Display for Continent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Estimated shaking radius in kilometers for a given magnitude.
///
/// Tiered at magnitudes 4, 5, 6 and 7 and scaled within each tier; below
/// magnitude 4 (or for NaN) the radius is a flat 5 km.
pub fn shaking_radius_km(magnitude: f64) -> f64 {
    if magnitude >= 7.0 {
        300.0 * magnitude / 7.0
    } else if magnitude >= 6.0 {
        100.0 * magnitude / 6.0
    } else if magnitude >= 5.0 {
        30.0 * magnitude / 5.0
    } else if magnitude >= 4.0 {
        10.0 * magnitude / 4.0
    } else {
        5.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_each_continent() {
        assert_eq!(Continent::classify(0.0, 20.0), Some(Continent::Africa));
        assert_eq!(
            Continent::classify(-75.0, 0.0),
            Some(Continent::Antarctica)
        );
        assert_eq!(Continent::classify(35.0, 105.0), Some(Continent::Asia));
        assert_eq!(Continent::classify(-25.0, 135.0), Some(Continent::Oceania));
        assert_eq!(Continent::classify(48.0, 2.0), Some(Continent::Europe));
        assert_eq!(Continent::classify(40.0, -100.0), Some(Continent::America));
    }

    #[test]
    fn test_classify_overlap_prefers_earlier_box() {
        // southern Spain sits inside both the Africa and Europe boxes
        assert_eq!(Continent::classify(36.5, -4.0), Some(Continent::Africa));
    }

    #[test]
    fn test_classify_outside_every_box() {
        assert_eq!(Continent::classify(-50.0, 60.0), None);
        assert_eq!(Continent::classify(f64::NAN, 0.0), None);
    }

    #[test]
    fn test_classify_box_edges_inclusive() {
        assert_eq!(Continent::classify(37.0, 51.0), Some(Continent::Africa));
        assert_eq!(Continent::classify(-60.0, 10.0), Some(Continent::Antarctica));
    }

    #[test]
    fn test_radius_tier_boundaries() {
        assert_eq!(shaking_radius_km(7.0), 300.0);
        assert_eq!(shaking_radius_km(6.0), 100.0);
        assert_eq!(shaking_radius_km(5.0), 30.0);
        assert_eq!(shaking_radius_km(4.0), 10.0);
        assert_eq!(shaking_radius_km(3.9), 5.0);
    }

    #[test]
    fn test_radius_scales_within_tier() {
        assert_eq!(shaking_radius_km(7.5), 300.0 * 7.5 / 7.0);
        assert_eq!(shaking_radius_km(6.5), 100.0 * 6.5 / 6.0);
        assert_eq!(shaking_radius_km(4.5), 10.0 * 4.5 / 4.0);
    }

    #[test]
    fn test_radius_nan_falls_through() {
        assert_eq!(shaking_radius_km(f64::NAN), 5.0);
    }
}
