use super::model::{Attributes, Catalog, MISSING};

/// Capacity of the comparison selection: the 3 most recently chosen records.
pub const MAX_COMPARE: usize = 3;

// ---------------------------------------------------------------------------
// ComparisonSelection – bounded, order-sensitive set of record ids
// ---------------------------------------------------------------------------

/// The records chosen for side-by-side comparison, oldest first. Adding a
/// fourth id evicts the oldest; toggling a selected id removes it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComparisonSelection {
    ids: Vec<i64>,
}

impl ComparisonSelection {
    /// Add the id if absent, remove it if present, evicting the oldest
    /// entry once the capacity is exceeded.
    pub fn toggle(&mut self, id: i64) {
        if let Some(pos) = self.ids.iter().position(|&i| i == id) {
            self.ids.remove(pos);
        } else {
            self.ids.push(id);
            if self.ids.len() > MAX_COMPARE {
                self.ids.remove(0);
            }
        }
    }

    pub fn contains(&self, id: i64) -> bool {
        self.ids.contains(&id)
    }

    /// The comparison view may only render with at least two selections.
    pub fn is_eligible(&self) -> bool {
        self.ids.len() >= 2
    }

    pub fn ids(&self) -> &[i64] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }
}

// ---------------------------------------------------------------------------
// Comparison table projection
// ---------------------------------------------------------------------------

/// The fixed attribute rows of the comparison table, top to bottom.
const COMPARE_ROWS: &[(&str, fn(&Attributes) -> Option<String>)] = &[
    ("Name", |a| Some(a.name.clone()).filter(|n| !n.is_empty())),
    ("Mission", |a| a.mission.clone()),
    ("Active", |a| a.active.map(|b| b.to_string())),
    ("Object Class", |a| a.object_class.clone()),
    ("Shape", |a| a.shape.clone()),
    ("Launch Date", |a| a.first_epoch.clone()),
    ("Mass (kg)", |a| a.mass.map(|v| v.to_string())),
    ("Width (m)", |a| a.width.map(|v| v.to_string())),
    ("Height (m)", |a| a.height.map(|v| v.to_string())),
    ("Depth (m)", |a| a.depth.map(|v| v.to_string())),
    ("Span (m)", |a| a.span.map(|v| v.to_string())),
    ("Cross Section Min (m²)", |a| {
        a.x_sect_min.map(|v| v.to_string())
    }),
    ("Cross Section Max (m²)", |a| {
        a.x_sect_max.map(|v| v.to_string())
    }),
];

/// The side-by-side comparison table: one column per selected record, one
/// row per attribute in the fixed order above.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComparisonTable {
    /// Column headers, "#id" when a record has no name.
    pub columns: Vec<String>,
    /// (attribute label, one formatted cell per column). Missing values are
    /// the placeholder glyph so columns stay aligned.
    pub rows: Vec<(String, Vec<String>)>,
}

/// Project the selected records into the comparison table. Lookups go
/// against the full unfiltered store; ids that vanished from the catalog
/// are skipped.
pub fn comparison_table(catalog: &Catalog, selection: &ComparisonSelection) -> ComparisonTable {
    let records: Vec<_> = selection
        .ids()
        .iter()
        .filter_map(|&id| catalog.by_id(id))
        .collect();

    let columns = records
        .iter()
        .map(|r| {
            if r.attributes.name.is_empty() {
                format!("#{}", r.id())
            } else {
                r.attributes.name.clone()
            }
        })
        .collect();

    let rows = COMPARE_ROWS
        .iter()
        .map(|(label, project)| {
            let cells = records
                .iter()
                .map(|r| project(&r.attributes).unwrap_or_else(|| MISSING.to_string()))
                .collect();
            (label.to_string(), cells)
        })
        .collect();

    ComparisonTable { columns, rows }
}
