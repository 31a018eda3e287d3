use super::model::Record;

// ---------------------------------------------------------------------------
// FilterCriteria – one value per filter control, empty string = no constraint
// ---------------------------------------------------------------------------

/// The full criteria set, mirroring the filter panel controls. Two copies
/// live in the app state: a draft the widgets edit and an applied snapshot
/// that actually feeds [`matches`]. Apply clones the whole struct, so the
/// evaluator never sees a half-edited draft.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub mission: String,
    pub active: String,
    pub object_class: String,
    pub shape: String,
    pub year: String,
    pub mass_min: String,
    pub mass_max: String,
    pub depth_min: String,
    pub depth_max: String,
    pub height_min: String,
    pub height_max: String,
    pub width_min: String,
    pub width_max: String,
    pub span_min: String,
    pub span_max: String,
    pub x_sect_min: String,
    pub x_sect_max: String,
}

impl FilterCriteria {
    /// True when no criterion is set.
    pub fn is_empty(&self) -> bool {
        self == &FilterCriteria::default()
    }

    /// Clear every criterion.
    pub fn clear(&mut self) {
        *self = FilterCriteria::default();
    }
}

// ---------------------------------------------------------------------------
// Predicates
// ---------------------------------------------------------------------------

/// Exact match against a stringified categorical attribute. A record with
/// the attribute missing fails any non-empty criterion.
fn eq_criterion(criterion: &str, value: Option<&str>) -> bool {
    if criterion.is_empty() {
        return true;
    }
    value == Some(criterion)
}

/// Prefix match for the launch-year criterion against `firstEpoch`.
fn year_criterion(criterion: &str, epoch: Option<&str>) -> bool {
    if criterion.is_empty() {
        return true;
    }
    epoch.is_some_and(|e| e.starts_with(criterion))
}

/// Parse a numeric bound typed by the user. Non-numeric text degrades to
/// "no constraint" instead of erroring.
fn parse_bound(criterion: &str) -> Option<f64> {
    let trimmed = criterion.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Lower bound: attribute ≥ bound. An absent attribute fails a set bound;
/// a present `0.0` still satisfies `>= 0`. Absent and zero are distinct on
/// purpose — an unknown measurement must never satisfy a bound.
fn min_criterion(criterion: &str, value: Option<f64>) -> bool {
    match parse_bound(criterion) {
        None => true,
        Some(bound) => value.is_some_and(|v| v >= bound),
    }
}

/// Upper bound: attribute ≤ bound, same absent-fails rule as [`min_criterion`].
fn max_criterion(criterion: &str, value: Option<f64>) -> bool {
    match parse_bound(criterion) {
        None => true,
        Some(bound) => value.is_some_and(|v| v <= bound),
    }
}

// ---------------------------------------------------------------------------
// Evaluator
// ---------------------------------------------------------------------------

/// Decide whether a record passes every active criterion. All criteria are
/// ANDed; empty criteria admit everything. The cross-section pair is
/// asymmetric by design: the min bound tests the record's `xSectMin` and
/// the max bound its `xSectMax`.
pub fn matches(record: &Record, criteria: &FilterCriteria) -> bool {
    let a = &record.attributes;
    let active_str = a.active.map(|b| if b { "true" } else { "false" });

    eq_criterion(&criteria.mission, a.mission.as_deref())
        && eq_criterion(&criteria.active, active_str)
        && eq_criterion(&criteria.object_class, a.object_class.as_deref())
        && eq_criterion(&criteria.shape, a.shape.as_deref())
        && year_criterion(&criteria.year, a.first_epoch.as_deref())
        && min_criterion(&criteria.mass_min, a.mass)
        && max_criterion(&criteria.mass_max, a.mass)
        && min_criterion(&criteria.depth_min, a.depth)
        && max_criterion(&criteria.depth_max, a.depth)
        && min_criterion(&criteria.height_min, a.height)
        && max_criterion(&criteria.height_max, a.height)
        && min_criterion(&criteria.width_min, a.width)
        && max_criterion(&criteria.width_max, a.width)
        && min_criterion(&criteria.span_min, a.span)
        && max_criterion(&criteria.span_max, a.span)
        && min_criterion(&criteria.x_sect_min, a.x_sect_min)
        && max_criterion(&criteria.x_sect_max, a.x_sect_max)
}

/// Free-text search over name (case-insensitive substring) or decimal id.
/// An empty term admits everything.
pub fn matches_search(record: &Record, term: &str) -> bool {
    let term = term.trim();
    if term.is_empty() {
        return true;
    }
    let lowered = term.to_lowercase();
    record.attributes.name.to_lowercase().contains(&lowered)
        || record.id().to_string().contains(term)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{Attributes, Record};

    fn record(attrs: Attributes) -> Record {
        Record {
            id: Some(1),
            attributes: attrs,
        }
    }

    #[test]
    fn empty_criteria_admit_everything() {
        let rec = record(Attributes::default());
        assert!(matches(&rec, &FilterCriteria::default()));
    }

    #[test]
    fn categorical_equality_is_exact() {
        let mut attrs = Attributes::default();
        attrs.mission = Some("Navigation".into());
        let rec = record(attrs);

        let mut c = FilterCriteria::default();
        c.mission = "Navigation".into();
        assert!(matches(&rec, &c));
        c.mission = "navigation".into();
        assert!(!matches(&rec, &c));
    }

    #[test]
    fn active_matches_stringified_boolean() {
        let mut attrs = Attributes::default();
        attrs.active = Some(false);
        let rec = record(attrs);

        let mut c = FilterCriteria::default();
        c.active = "false".into();
        assert!(matches(&rec, &c));
        c.active = "true".into();
        assert!(!matches(&rec, &c));
    }

    #[test]
    fn missing_categorical_fails_a_set_criterion() {
        let rec = record(Attributes::default());
        let mut c = FilterCriteria::default();
        c.shape = "Box".into();
        assert!(!matches(&rec, &c));
    }

    #[test]
    fn year_is_a_prefix_match_on_first_epoch() {
        let mut attrs = Attributes::default();
        attrs.first_epoch = Some("2021-03-01".into());
        let rec = record(attrs);

        let mut c = FilterCriteria::default();
        c.year = "2021".into();
        assert!(matches(&rec, &c));
        c.year = "2022".into();
        assert!(!matches(&rec, &c));
    }

    #[test]
    fn mass_min_filters_out_lighter_records() {
        // The worked example from the catalog requirements: massMin 150
        // over masses 100 and 300 keeps only the heavier record.
        let mut light = Attributes::default();
        light.mass = Some(100.0);
        let mut heavy = Attributes::default();
        heavy.mass = Some(300.0);

        let mut c = FilterCriteria::default();
        c.mass_min = "150".into();
        assert!(!matches(&record(light), &c));
        assert!(matches(&record(heavy), &c));
    }

    // An absent numeric attribute must FAIL a set bound. A naive
    // falsy-means-missing comparison lets the gap slip through; this pins
    // the correct behavior.
    #[test]
    fn absent_numeric_attribute_fails_any_set_bound() {
        let rec = record(Attributes::default());

        let mut c = FilterCriteria::default();
        c.mass_min = "0".into();
        assert!(!matches(&rec, &c));

        c = FilterCriteria::default();
        c.mass_max = "1000000".into();
        assert!(!matches(&rec, &c));
    }

    // The flip side: a true zero measurement is a value, not a gap, and
    // satisfies a `>= 0` bound.
    #[test]
    fn zero_attribute_satisfies_a_zero_lower_bound() {
        let mut attrs = Attributes::default();
        attrs.span = Some(0.0);
        let rec = record(attrs);

        let mut c = FilterCriteria::default();
        c.span_min = "0".into();
        assert!(matches(&rec, &c));
    }

    #[test]
    fn bounds_are_inclusive() {
        let mut attrs = Attributes::default();
        attrs.height = Some(2.5);
        let rec = record(attrs);

        let mut c = FilterCriteria::default();
        c.height_min = "2.5".into();
        c.height_max = "2.5".into();
        assert!(matches(&rec, &c));
    }

    #[test]
    fn non_numeric_bound_text_degrades_to_no_constraint() {
        let mut attrs = Attributes::default();
        attrs.mass = Some(10.0);
        let rec = record(attrs);

        let mut c = FilterCriteria::default();
        c.mass_min = "heavy".into();
        assert!(matches(&rec, &c));
    }

    #[test]
    fn cross_section_bounds_test_their_own_fields() {
        let mut attrs = Attributes::default();
        attrs.x_sect_min = Some(1.0);
        attrs.x_sect_max = Some(4.0);
        let rec = record(attrs);

        let mut c = FilterCriteria::default();
        c.x_sect_min = "0.5".into();
        c.x_sect_max = "5".into();
        assert!(matches(&rec, &c));

        // Min bound above the record's xSectMin fails even though xSectMax
        // would satisfy it.
        c.x_sect_min = "2".into();
        assert!(!matches(&rec, &c));
    }

    #[test]
    fn criteria_are_anded() {
        let mut attrs = Attributes::default();
        attrs.mission = Some("Navigation".into());
        attrs.mass = Some(100.0);
        let rec = record(attrs);

        let mut c = FilterCriteria::default();
        c.mission = "Navigation".into();
        c.mass_min = "200".into();
        assert!(!matches(&rec, &c));
    }

    #[test]
    fn search_matches_name_or_id() {
        let mut attrs = Attributes::default();
        attrs.name = "Sentinel-2A".into();
        let rec = Record {
            id: Some(42),
            attributes: attrs,
        };

        assert!(matches_search(&rec, ""));
        assert!(matches_search(&rec, "sentinel"));
        assert!(matches_search(&rec, "2A"));
        assert!(matches_search(&rec, "42"));
        assert!(!matches_search(&rec, "landsat"));
    }
}
