//! Record filtering in the manner of the visualization front end

use crate::catalog::EventRecord;
use crate::geo::Continent;

/// Filter over extracted event records.
///
/// Magnitude bounds are inclusive and apply to the parsed `magnitude`
/// field; a record whose magnitude is missing or unparseable fails an
/// active magnitude bound. A continent constraint classifies the parsed
/// `lat`/`lng` pair; records without parseable coordinates, or whose
/// coordinates fall outside every continent box, fail it. A default
/// filter matches every record.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct EventFilter {
    pub min_magnitude: Option<f64>,
    pub max_magnitude: Option<f64>,
    pub continent: Option<Continent>,
}

impl EventFilter {
    /// True when any constraint is set
    pub const fn is_active(&self) -> bool {
        self.min_magnitude.is_some() || self.max_magnitude.is_some() || self.continent.is_some()
    }

    /// Check a single record against the filter
    pub fn matches(&self, record: &EventRecord) -> bool {
        if self.min_magnitude.is_some() || self.max_magnitude.is_some() {
            let Some(magnitude) = parse_field(record.magnitude.as_deref()) else {
                return false;
            };
            let min_ok = self.min_magnitude.map_or(true, |min| magnitude >= min);
            let max_ok = self.max_magnitude.map_or(true, |max| magnitude <= max);
            if !min_ok || !max_ok {
                return false;
            }
        }

        if let Some(continent) = self.continent {
            let classified = match (
                parse_field(record.lat.as_deref()),
                parse_field(record.lng.as_deref()),
            ) {
                (Some(lat), Some(lng)) => Continent::classify(lat, lng),
                _ => None,
            };
            if classified != Some(continent) {
                return false;
            }
        }

        true
    }

    /// Keep only the records matching the filter, preserving order
    pub fn apply(&self, mut records: Vec<EventRecord>) -> Vec<EventRecord> {
        records.retain(|record| self.matches(record));
        records
    }
}

fn parse_field(value: Option<&str>) -> Option<f64> {
    value?.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(magnitude: Option<&str>, lat: Option<&str>, lng: Option<&str>) -> EventRecord {
        EventRecord {
            magnitude: magnitude.map(str::to_string),
            lat: lat.map(str::to_string),
            lng: lng.map(str::to_string),
            ..EventRecord::default()
        }
    }

    #[test]
    fn test_default_filter_matches_everything() {
        let filter = EventFilter::default();
        assert!(!filter.is_active());
        assert!(filter.matches(&EventRecord::default()));
        assert!(filter.matches(&record(Some("garbage"), None, None)));
    }

    #[test]
    fn test_magnitude_bounds_inclusive() {
        let filter = EventFilter {
            min_magnitude: Some(4.5),
            max_magnitude: Some(6.0),
            continent: None,
        };
        assert!(filter.matches(&record(Some("4.5"), None, None)));
        assert!(filter.matches(&record(Some("6.0"), None, None)));
        assert!(!filter.matches(&record(Some("4.49"), None, None)));
        assert!(!filter.matches(&record(Some("6.01"), None, None)));
    }

    #[test]
    fn test_missing_or_unparseable_magnitude_fails_active_bound() {
        let filter = EventFilter {
            min_magnitude: Some(1.0),
            ..EventFilter::default()
        };
        assert!(!filter.matches(&record(None, None, None)));
        assert!(!filter.matches(&record(Some("strong"), None, None)));
        assert!(!filter.matches(&record(Some(""), None, None)));
    }

    #[test]
    fn test_magnitude_whitespace_tolerated() {
        let filter = EventFilter {
            min_magnitude: Some(5.0),
            ..EventFilter::default()
        };
        assert!(filter.matches(&record(Some(" 5.2 "), None, None)));
    }

    #[test]
    fn test_continent_filter() {
        let filter = EventFilter {
            continent: Some(Continent::America),
            ..EventFilter::default()
        };
        assert!(filter.matches(&record(None, Some("-33.45"), Some("-70.66"))));
        assert!(!filter.matches(&record(None, Some("35.0"), Some("105.0"))));
        assert!(!filter.matches(&record(None, Some("-33.45"), None)));
        assert!(!filter.matches(&record(None, Some("north"), Some("-70.66"))));
    }

    #[test]
    fn test_combined_filters() {
        let filter = EventFilter {
            min_magnitude: Some(4.0),
            max_magnitude: None,
            continent: Some(Continent::Asia),
        };
        assert!(filter.matches(&record(Some("5.5"), Some("35.0"), Some("105.0"))));
        assert!(!filter.matches(&record(Some("3.0"), Some("35.0"), Some("105.0"))));
        assert!(!filter.matches(&record(Some("5.5"), Some("-33.45"), Some("-70.66"))));
    }

    #[test]
    fn test_apply_preserves_order() {
        let filter = EventFilter {
            min_magnitude: Some(4.0),
            ..EventFilter::default()
        };
        let records = vec![
            record(Some("5.0"), None, None),
            record(Some("3.0"), None, None),
            record(Some("4.0"), None, None),
        ];
        let kept = filter.apply(records);
        assert_eq!(kept.len(), 2);
        assert_eq!(kept[0].magnitude.as_deref(), Some("5.0"));
        assert_eq!(kept[1].magnitude.as_deref(), Some("4.0"));
    }
}
