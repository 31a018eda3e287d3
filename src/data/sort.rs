use std::cmp::Ordering;

use super::model::Record;

// ---------------------------------------------------------------------------
// SortOption – the six orderings offered by the sort dropdown
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOption {
    #[default]
    NameAsc,
    NameDesc,
    MassAsc,
    MassDesc,
    YearDesc,
    YearAsc,
}

impl SortOption {
    pub const ALL: [SortOption; 6] = [
        SortOption::NameAsc,
        SortOption::NameDesc,
        SortOption::MassAsc,
        SortOption::MassDesc,
        SortOption::YearDesc,
        SortOption::YearAsc,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SortOption::NameAsc => "Name (A–Z)",
            SortOption::NameDesc => "Name (Z–A)",
            SortOption::MassAsc => "Mass (Low to High)",
            SortOption::MassDesc => "Mass (High to Low)",
            SortOption::YearDesc => "Launch Year (Newest First)",
            SortOption::YearAsc => "Launch Year (Oldest First)",
        }
    }
}

// ---------------------------------------------------------------------------
// Comparator
// ---------------------------------------------------------------------------

/// Compare two records under the given sort mode. Name comparisons are
/// case-insensitive; mass and launch year treat an absent value as 0 for
/// ordering purposes only (the filter evaluator keeps absent distinct).
pub fn compare(a: &Record, b: &Record, option: SortOption) -> Ordering {
    match option {
        SortOption::NameAsc => name_key(a).cmp(&name_key(b)),
        SortOption::NameDesc => name_key(b).cmp(&name_key(a)),
        SortOption::MassAsc => mass_key(a).total_cmp(&mass_key(b)),
        SortOption::MassDesc => mass_key(b).total_cmp(&mass_key(a)),
        SortOption::YearAsc => year_key(a).cmp(&year_key(b)),
        SortOption::YearDesc => year_key(b).cmp(&year_key(a)),
    }
}

fn name_key(r: &Record) -> String {
    r.attributes.name.to_lowercase()
}

fn mass_key(r: &Record) -> f64 {
    r.attributes.mass.unwrap_or(0.0)
}

fn year_key(r: &Record) -> i32 {
    r.attributes.launch_year().unwrap_or(0)
}

/// Stable sort of a borrowed view of the filtered sequence. The store is
/// never reordered; callers sort the projection they are about to display.
pub fn sort_records(records: &mut [&Record], option: SortOption) {
    records.sort_by(|a, b| compare(a, b, option));
}
