use std::collections::BTreeMap;

use super::model::Record;

// ---------------------------------------------------------------------------
// Chart-ready series derived from the filtered sequence
// ---------------------------------------------------------------------------
//
// Every function here is pure over the slice it is handed: same records in,
// byte-identical series out. "First seen" always means the order of the
// filtered sequence, never hash-map iteration order.

/// Launch trend: per-year active/inactive counts, years ascending.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TrendSeries {
    pub labels: Vec<String>,
    pub active: Vec<u32>,
    pub inactive: Vec<u32>,
}

/// Categorical counts in first-seen order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Distribution {
    pub labels: Vec<String>,
    pub counts: Vec<u32>,
}

/// Mean mass per (shape, object class) partition, pivoted into a
/// shapes × classes grid. `None` cells mark combinations with no records,
/// which is not the same thing as a zero mean.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GroupedMeans {
    pub row_labels: Vec<String>,
    pub series_names: Vec<String>,
    pub cells: Vec<Vec<Option<f64>>>,
}

impl GroupedMeans {
    /// Chart-ready matrix with 0.0 standing in for absent combinations.
    pub fn matrix(&self) -> Vec<Vec<f64>> {
        self.cells
            .iter()
            .map(|row| row.iter().map(|c| c.unwrap_or(0.0)).collect())
            .collect()
    }
}

/// One point of the size-vs-mass scatter.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterPoint {
    pub x: f64,
    pub y: f64,
    pub label: String,
}

/// Per-record cross-section/span series for the grouped bar chart.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CrossSectionProfile {
    pub labels: Vec<String>,
    pub x_sect_min: Vec<Option<f64>>,
    pub x_sect_max: Vec<Option<f64>>,
    pub span: Vec<Option<f64>>,
}

/// Headline numbers for the summary strip above the record table.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Summary {
    pub total: usize,
    pub active: usize,
    pub mean_mass: Option<f64>,
    pub distinct_shapes: usize,
}

// ---------------------------------------------------------------------------
// Aggregations
// ---------------------------------------------------------------------------

/// Bucket records by the 4-character year prefix of `firstEpoch` and count
/// active vs inactive per bucket. Records without a year are excluded;
/// buckets come out ascending by year label. A record with `active` absent
/// counts as inactive.
pub fn launch_trend(records: &[&Record]) -> TrendSeries {
    let mut buckets: BTreeMap<String, (u32, u32)> = BTreeMap::new();
    for rec in records {
        let Some(epoch) = rec.attributes.first_epoch.as_deref() else {
            continue;
        };
        let Some(year) = epoch.get(..4) else {
            continue;
        };
        let entry = buckets.entry(year.to_string()).or_default();
        if rec.attributes.active.unwrap_or(false) {
            entry.0 += 1;
        } else {
            entry.1 += 1;
        }
    }

    let mut series = TrendSeries::default();
    for (year, (active, inactive)) in buckets {
        series.labels.push(year);
        series.active.push(active);
        series.inactive.push(inactive);
    }
    series
}

/// Count records per distinct mission, labels in first-seen order. Records
/// without a mission are grouped under "Unknown" rather than dropped.
pub fn mission_distribution(records: &[&Record]) -> Distribution {
    let mut dist = Distribution::default();
    for rec in records {
        let mission = rec.attributes.mission.as_deref().unwrap_or("Unknown");
        match dist.labels.iter().position(|l| l == mission) {
            Some(i) => dist.counts[i] += 1,
            None => {
                dist.labels.push(mission.to_string());
                dist.counts.push(1);
            }
        }
    }
    dist
}

/// Mean mass per (shape, object class) partition. Axes are in first-seen
/// order of the input; records missing shape, class, or mass do not join a
/// partition. Absent combinations stay `None` in the grid.
pub fn shape_class_mass(records: &[&Record]) -> GroupedMeans {
    let mut shapes: Vec<String> = Vec::new();
    let mut classes: Vec<String> = Vec::new();
    let mut sums: BTreeMap<(String, String), (f64, u32)> = BTreeMap::new();

    for rec in records {
        let a = &rec.attributes;
        let (Some(shape), Some(class), Some(mass)) =
            (a.shape.as_deref(), a.object_class.as_deref(), a.mass)
        else {
            continue;
        };
        if !shapes.iter().any(|s| s == shape) {
            shapes.push(shape.to_string());
        }
        if !classes.iter().any(|c| c == class) {
            classes.push(class.to_string());
        }
        let entry = sums
            .entry((shape.to_string(), class.to_string()))
            .or_default();
        entry.0 += mass;
        entry.1 += 1;
    }

    let cells = shapes
        .iter()
        .map(|shape| {
            classes
                .iter()
                .map(|class| {
                    sums.get(&(shape.clone(), class.clone()))
                        .map(|(total, count)| total / f64::from(*count))
                })
                .collect()
        })
        .collect();

    GroupedMeans {
        row_labels: shapes,
        series_names: classes,
        cells,
    }
}

/// Map each record to (volume, mass), carrying the name for the tooltip.
/// Records with any missing dimension or missing mass are excluded, never
/// plotted at the origin.
pub fn size_vs_mass(records: &[&Record]) -> Vec<ScatterPoint> {
    records
        .iter()
        .filter_map(|rec| {
            let volume = rec.attributes.volume()?;
            let mass = rec.attributes.mass?;
            Some(ScatterPoint {
                x: volume,
                y: mass,
                label: rec.attributes.name.clone(),
            })
        })
        .collect()
}

/// Per-record min/max cross-section and span, in input order. Gaps stay
/// `None` so the chart can skip them instead of drawing zero-height bars.
pub fn cross_section_profile(records: &[&Record]) -> CrossSectionProfile {
    let mut profile = CrossSectionProfile::default();
    for rec in records {
        let a = &rec.attributes;
        profile.labels.push(a.name.clone());
        profile.x_sect_min.push(a.x_sect_min);
        profile.x_sect_max.push(a.x_sect_max);
        profile.span.push(a.span);
    }
    profile
}

/// Headline statistics over the filtered sequence.
pub fn summarize(records: &[&Record]) -> Summary {
    let mut shapes: Vec<&str> = Vec::new();
    let mut mass_total = 0.0;
    let mut mass_count = 0u32;
    let mut active = 0usize;

    for rec in records {
        let a = &rec.attributes;
        if a.active == Some(true) {
            active += 1;
        }
        if let Some(mass) = a.mass {
            mass_total += mass;
            mass_count += 1;
        }
        if let Some(shape) = a.shape.as_deref() {
            if !shapes.contains(&shape) {
                shapes.push(shape);
            }
        }
    }

    Summary {
        total: records.len(),
        active,
        mean_mass: (mass_count > 0).then(|| mass_total / f64::from(mass_count)),
        distinct_shapes: shapes.len(),
    }
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

    fn refs(records: &[Record]) -> Vec<&Record> {
        records.iter().collect()
    }

    #[test]
    fn trend_buckets_by_year_and_activity() {
        let mut a = Attributes::default();
        a.first_epoch = Some("2021-03-01".into());
        a.active = Some(true);
        let mut b = Attributes::default();
        b.first_epoch = Some("2022-07-10".into());
        b.active = Some(false);
        let records = vec![record(a), record(b)];

        let trend = launch_trend(&refs(&records));
        assert_eq!(trend.labels, vec!["2021", "2022"]);
        assert_eq!(trend.active, vec![1, 0]);
        assert_eq!(trend.inactive, vec![0, 1]);
    }

    #[test]
    fn trend_excludes_blank_years_and_sorts_ascending() {
        let mut newer = Attributes::default();
        newer.first_epoch = Some("2020-01-01".into());
        newer.active = Some(true);
        let mut older = Attributes::default();
        older.first_epoch = Some("1999-06-01".into());
        older.active = Some(true);
        let dateless = Attributes::default();
        let records = vec![record(newer), record(dateless), record(older)];

        let trend = launch_trend(&refs(&records));
        assert_eq!(trend.labels, vec!["1999", "2020"]);
        assert_eq!(trend.active, vec![1, 1]);
    }

    #[test]
    fn trend_counts_missing_active_flag_as_inactive() {
        let mut a = Attributes::default();
        a.first_epoch = Some("2010-01-01".into());
        let records = vec![record(a)];

        let trend = launch_trend(&refs(&records));
        assert_eq!(trend.inactive, vec![1]);
        assert_eq!(trend.active, vec![0]);
    }

    #[test]
    fn distribution_counts_in_first_seen_order() {
        let mission = |m: &str| {
            let mut a = Attributes::default();
            a.mission = Some(m.into());
            record(a)
        };
        let records = vec![
            mission("Navigation"),
            mission("Science"),
            mission("Navigation"),
            record(Attributes::default()),
        ];

        let dist = mission_distribution(&refs(&records));
        assert_eq!(dist.labels, vec!["Navigation", "Science", "Unknown"]);
        assert_eq!(dist.counts, vec![2, 1, 1]);
    }

    #[test]
    fn grouped_mean_averages_each_partition() {
        let make = |mass: f64| {
            let mut a = Attributes::default();
            a.shape = Some("Box".into());
            a.object_class = Some("Payload".into());
            a.mass = Some(mass);
            record(a)
        };
        let records = vec![make(100.0), make(300.0)];

        let means = shape_class_mass(&refs(&records));
        assert_eq!(means.row_labels, vec!["Box"]);
        assert_eq!(means.series_names, vec!["Payload"]);
        assert_eq!(means.cells, vec![vec![Some(200.0)]]);
    }

    #[test]
    fn grouped_mean_distinguishes_absent_from_zero() {
        let make = |shape: &str, class: &str, mass: f64| {
            let mut a = Attributes::default();
            a.shape = Some(shape.into());
            a.object_class = Some(class.into());
            a.mass = Some(mass);
            record(a)
        };
        // Cyl/Debris exists with mean 0; Box/Debris has no records at all.
        let records = vec![
            make("Box", "Payload", 50.0),
            make("Cyl", "Debris", 0.0),
        ];

        let means = shape_class_mass(&refs(&records));
        assert_eq!(means.row_labels, vec!["Box", "Cyl"]);
        assert_eq!(means.series_names, vec!["Payload", "Debris"]);
        assert_eq!(means.cells[0][1], None);
        assert_eq!(means.cells[1][1], Some(0.0));
        // The chart-ready matrix collapses both to 0.0.
        assert_eq!(means.matrix()[0][1], 0.0);
        assert_eq!(means.matrix()[1][1], 0.0);
    }

    #[test]
    fn per_bucket_values_are_order_independent() {
        let make = |mission: &str, year: &str, mass: f64| {
            let mut a = Attributes::default();
            a.mission = Some(mission.into());
            a.first_epoch = Some(format!("{year}-01-01"));
            a.shape = Some("Box".into());
            a.object_class = Some("Payload".into());
            a.mass = Some(mass);
            a.active = Some(true);
            record(a)
        };
        let forward = vec![
            make("Nav", "2020", 10.0),
            make("Sci", "2021", 20.0),
            make("Nav", "2020", 30.0),
        ];
        let permuted = vec![
            forward[2].clone(),
            forward[0].clone(),
            forward[1].clone(),
        ];

        let t1 = launch_trend(&refs(&forward));
        let t2 = launch_trend(&refs(&permuted));
        assert_eq!(t1, t2);

        let m1 = shape_class_mass(&refs(&forward));
        let m2 = shape_class_mass(&refs(&permuted));
        assert_eq!(m1.cells, m2.cells);

        // Labels may be re-ordered by first-seen, but each label keeps its
        // count.
        let d1 = mission_distribution(&refs(&forward));
        let d2 = mission_distribution(&refs(&permuted));
        for (label, count) in d1.labels.iter().zip(&d1.counts) {
            let i = d2.labels.iter().position(|l| l == label).unwrap();
            assert_eq!(d2.counts[i], *count);
        }
    }

    #[test]
    fn scatter_excludes_records_with_missing_dimensions() {
        let mut complete = Attributes::default();
        complete.name = "full".into();
        complete.width = Some(2.0);
        complete.height = Some(3.0);
        complete.depth = Some(4.0);
        complete.mass = Some(50.0);

        let mut partial = Attributes::default();
        partial.name = "partial".into();
        partial.width = Some(2.0);
        partial.mass = Some(10.0);

        let records = vec![record(complete), record(partial)];
        let points = size_vs_mass(&refs(&records));
        assert_eq!(points.len(), 1);
        assert_eq!(points[0].x, 24.0);
        assert_eq!(points[0].y, 50.0);
        assert_eq!(points[0].label, "full");
    }

    #[test]
    fn cross_section_profile_preserves_input_order_and_gaps() {
        let mut a = Attributes::default();
        a.name = "a".into();
        a.x_sect_min = Some(1.0);
        a.span = Some(5.0);
        let mut b = Attributes::default();
        b.name = "b".into();
        b.x_sect_max = Some(2.0);
        let records = vec![record(a), record(b)];

        let profile = cross_section_profile(&refs(&records));
        assert_eq!(profile.labels, vec!["a", "b"]);
        assert_eq!(profile.x_sect_min, vec![Some(1.0), None]);
        assert_eq!(profile.x_sect_max, vec![None, Some(2.0)]);
        assert_eq!(profile.span, vec![Some(5.0), None]);
    }

    #[test]
    fn summary_handles_massless_input() {
        let records = vec![record(Attributes::default())];
        let summary = summarize(&refs(&records));
        assert_eq!(summary.total, 1);
        assert_eq!(summary.active, 0);
        assert_eq!(summary.mean_mass, None);
        assert_eq!(summary.distinct_shapes, 0);
    }

    #[test]
    fn summary_counts_active_and_averages_mass() {
        let make = |active: bool, mass: f64, shape: &str| {
            let mut a = Attributes::default();
            a.active = Some(active);
            a.mass = Some(mass);
            a.shape = Some(shape.into());
            record(a)
        };
        let records = vec![
            make(true, 100.0, "Box"),
            make(false, 300.0, "Cyl"),
            make(true, 200.0, "Box"),
        ];
        let summary = summarize(&refs(&records));
        assert_eq!(summary.total, 3);
        assert_eq!(summary.active, 2);
        assert_eq!(summary.mean_mass, Some(200.0));
        assert_eq!(summary.distinct_shapes, 2);
    }
}
