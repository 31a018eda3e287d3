use std::collections::BTreeMap;
use std::fmt;

use serde::Deserialize;

// ---------------------------------------------------------------------------
// AttrValue – a dynamically-typed extra attribute
// ---------------------------------------------------------------------------

/// A dynamically-typed attribute value for the open set of catalog fields
/// that are not part of the known schema. Deserialized untagged from JSON.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum AttrValue {
    Bool(bool),
    Number(f64),
    String(String),
    Null,
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttrValue::Bool(b) => write!(f, "{b}"),
            AttrValue::Number(n) => write!(f, "{n}"),
            AttrValue::String(s) => write!(f, "{s}"),
            AttrValue::Null => write!(f, "—"),
        }
    }
}

// ---------------------------------------------------------------------------
// Attributes – the known schema plus dynamic passthrough fields
// ---------------------------------------------------------------------------

/// The attribute block of one catalog record. Known fields are typed; any
/// other field in the payload lands in `extra` untouched.
///
/// A missing numeric measurement is `None`, never `0.0`. The filter
/// evaluator and the aggregations rely on that distinction.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Attributes {
    pub name: String,
    pub mission: Option<String>,
    pub active: Option<bool>,
    #[serde(rename = "objectClass")]
    pub object_class: Option<String>,
    pub shape: Option<String>,
    /// ISO-8601-like launch date; first four characters are the year.
    #[serde(rename = "firstEpoch")]
    pub first_epoch: Option<String>,
    pub mass: Option<f64>,
    pub depth: Option<f64>,
    pub height: Option<f64>,
    pub width: Option<f64>,
    pub span: Option<f64>,
    #[serde(rename = "xSectMin")]
    pub x_sect_min: Option<f64>,
    #[serde(rename = "xSectMax")]
    pub x_sect_max: Option<f64>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, AttrValue>,
}

/// Placeholder glyph for a missing value in detail/comparison views.
pub const MISSING: &str = "—";

impl Attributes {
    /// Launch year parsed from the first four characters of `first_epoch`.
    pub fn launch_year(&self) -> Option<i32> {
        let epoch = self.first_epoch.as_deref()?;
        epoch.get(..4)?.parse().ok()
    }

    /// Bounding-box volume in m³. `None` if any dimension is missing, so a
    /// record with unknown size is never mistaken for a zero-volume one.
    pub fn volume(&self) -> Option<f64> {
        Some(self.width? * self.height? * self.depth?)
    }

    /// All attributes as display pairs: the known fields in a fixed order,
    /// then the dynamic extras in key order. Missing values render as the
    /// placeholder glyph so the detail view always shows the full schema.
    pub fn entries(&self) -> Vec<(String, String)> {
        fn opt_str(v: &Option<String>) -> String {
            v.clone().unwrap_or_else(|| MISSING.to_string())
        }
        fn opt_num(v: Option<f64>) -> String {
            v.map(|n| n.to_string()).unwrap_or_else(|| MISSING.to_string())
        }

        let mut out = vec![
            ("Name".to_string(), self.name.clone()),
            ("Mission".to_string(), opt_str(&self.mission)),
            (
                "Active".to_string(),
                self.active
                    .map(|b| b.to_string())
                    .unwrap_or_else(|| MISSING.to_string()),
            ),
            ("Object Class".to_string(), opt_str(&self.object_class)),
            ("Shape".to_string(), opt_str(&self.shape)),
            ("Launch Date".to_string(), opt_str(&self.first_epoch)),
            ("Mass (kg)".to_string(), opt_num(self.mass)),
            ("Width (m)".to_string(), opt_num(self.width)),
            ("Height (m)".to_string(), opt_num(self.height)),
            ("Depth (m)".to_string(), opt_num(self.depth)),
            ("Span (m)".to_string(), opt_num(self.span)),
            ("Cross Section Min (m²)".to_string(), opt_num(self.x_sect_min)),
            ("Cross Section Max (m²)".to_string(), opt_num(self.x_sect_max)),
        ];
        for (key, val) in &self.extra {
            out.push((key.clone(), val.to_string()));
        }
        out
    }
}

// ---------------------------------------------------------------------------
// Record – one tracked space object
// ---------------------------------------------------------------------------

/// One catalog record. Records arriving without an id are assigned their
/// 1-based position by [`Catalog::from_records`].
#[derive(Debug, Clone, Deserialize)]
pub struct Record {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub attributes: Attributes,
}

impl Record {
    /// The record identifier. Every record in a built catalog has one.
    pub fn id(&self) -> i64 {
        self.id.unwrap_or(0)
    }
}

// ---------------------------------------------------------------------------
// Catalog – the record store
// ---------------------------------------------------------------------------

/// The immutable record store, with pre-computed distinct values for the
/// categorical filter dropdowns.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub records: Vec<Record>,
    /// Sorted distinct `mission` values.
    pub missions: Vec<String>,
    /// Sorted distinct `objectClass` values.
    pub object_classes: Vec<String>,
    /// Sorted distinct `shape` values.
    pub shapes: Vec<String>,
}

impl Catalog {
    /// Normalize fetched records into a catalog: every record lacking an id
    /// gets one equal to its 1-based position, then the distinct categorical
    /// values are indexed.
    pub fn from_records(mut records: Vec<Record>) -> Self {
        for (i, rec) in records.iter_mut().enumerate() {
            if rec.id.is_none() {
                rec.id = Some(i as i64 + 1);
            }
        }

        let mut missions = std::collections::BTreeSet::new();
        let mut object_classes = std::collections::BTreeSet::new();
        let mut shapes = std::collections::BTreeSet::new();
        for rec in &records {
            if let Some(m) = &rec.attributes.mission {
                missions.insert(m.clone());
            }
            if let Some(c) = &rec.attributes.object_class {
                object_classes.insert(c.clone());
            }
            if let Some(s) = &rec.attributes.shape {
                shapes.insert(s.clone());
            }
        }

        Catalog {
            records,
            missions: missions.into_iter().collect(),
            object_classes: object_classes.into_iter().collect(),
            shapes: shapes.into_iter().collect(),
        }
    }

    /// Look up a record by id across the full (unfiltered) store.
    pub fn by_id(&self, id: i64) -> Option<&Record> {
        self.records.iter().find(|r| r.id() == id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: Option<i64>, name: &str) -> Record {
        Record {
            id,
            attributes: Attributes {
                name: name.to_string(),
                ..Attributes::default()
            },
        }
    }

    #[test]
    fn missing_ids_get_one_based_positions() {
        let catalog = Catalog::from_records(vec![
            record(None, "a"),
            record(Some(77), "b"),
            record(None, "c"),
        ]);
        let ids: Vec<i64> = catalog.records.iter().map(|r| r.id()).collect();
        assert_eq!(ids, vec![1, 77, 3]);
    }

    #[test]
    fn distinct_values_are_sorted_and_deduplicated() {
        let mut a = record(None, "a");
        a.attributes.mission = Some("Earth Science".into());
        a.attributes.shape = Some("Box".into());
        let mut b = record(None, "b");
        b.attributes.mission = Some("Communications".into());
        b.attributes.shape = Some("Box".into());
        let catalog = Catalog::from_records(vec![a, b]);
        assert_eq!(catalog.missions, vec!["Communications", "Earth Science"]);
        assert_eq!(catalog.shapes, vec!["Box"]);
    }

    #[test]
    fn launch_year_parses_prefix() {
        let mut attrs = Attributes::default();
        attrs.first_epoch = Some("2021-03-01".into());
        assert_eq!(attrs.launch_year(), Some(2021));
        attrs.first_epoch = Some("20".into());
        assert_eq!(attrs.launch_year(), None);
        attrs.first_epoch = None;
        assert_eq!(attrs.launch_year(), None);
    }

    #[test]
    fn volume_requires_all_dimensions() {
        let mut attrs = Attributes::default();
        attrs.width = Some(2.0);
        attrs.height = Some(3.0);
        assert_eq!(attrs.volume(), None);
        attrs.depth = Some(0.5);
        assert_eq!(attrs.volume(), Some(3.0));
    }

    #[test]
    fn extra_fields_flow_into_the_dynamic_map() {
        let json = r#"{
            "id": 5,
            "attributes": {
                "name": "SAT-1",
                "mass": 120.0,
                "operator": "ESA",
                "reentry": false
            }
        }"#;
        let rec: Record = serde_json::from_str(json).unwrap();
        assert_eq!(rec.id, Some(5));
        assert_eq!(rec.attributes.mass, Some(120.0));
        assert_eq!(rec.attributes.extra.len(), 2);
        assert_eq!(
            rec.attributes.extra.get("operator"),
            Some(&AttrValue::String("ESA".into()))
        );
        assert_eq!(
            rec.attributes.extra.get("reentry"),
            Some(&AttrValue::Bool(false))
        );
    }
}
