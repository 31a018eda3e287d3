use std::io::Write;

use anyhow::{Context, Result};

use super::model::Record;

/// Column order of the export, fixed regardless of record content.
pub const EXPORT_COLUMNS: [&str; 13] = [
    "ID",
    "Name",
    "Mission",
    "Active",
    "Mass",
    "Shape",
    "Width",
    "Height",
    "Depth",
    "Span",
    "Cross Section Min",
    "Cross Section Max",
    "Launch Date",
];

/// Suggested filename stem for the exported artifact.
pub const EXPORT_FILENAME: &str = "Filtered_Satellites";

fn num_cell(v: Option<f64>) -> String {
    v.map(|n| n.to_string()).unwrap_or_default()
}

fn str_cell(v: &Option<String>) -> String {
    v.clone().unwrap_or_default()
}

/// Flatten the filtered, currently-sorted sequence into rows matching
/// [`EXPORT_COLUMNS`]. Missing values become empty cells.
pub fn export_rows(records: &[&Record]) -> Vec<[String; 13]> {
    records
        .iter()
        .map(|rec| {
            let a = &rec.attributes;
            [
                rec.id().to_string(),
                a.name.clone(),
                str_cell(&a.mission),
                a.active.map(|b| b.to_string()).unwrap_or_default(),
                num_cell(a.mass),
                str_cell(&a.shape),
                num_cell(a.width),
                num_cell(a.height),
                num_cell(a.depth),
                num_cell(a.span),
                num_cell(a.x_sect_min),
                num_cell(a.x_sect_max),
                str_cell(&a.first_epoch),
            ]
        })
        .collect()
}

/// Serialize the filtered sequence as CSV. The `csv` writer quotes any
/// field containing delimiters or quotes, so arbitrary names round-trip.
pub fn write_csv<W: Write>(records: &[&Record], writer: W) -> Result<()> {
    let mut out = csv::Writer::from_writer(writer);
    out.write_record(EXPORT_COLUMNS)
        .context("writing CSV header")?;
    for row in export_rows(records) {
        out.write_record(&row).context("writing CSV row")?;
    }
    out.flush().context("flushing CSV output")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{Attributes, Record};

    fn record(id: i64, attrs: Attributes) -> Record {
        Record {
            id: Some(id),
            attributes: attrs,
        }
    }

    #[test]
    fn row_count_matches_input_and_columns_are_invariant() {
        let mut a = Attributes::default();
        a.name = "one".into();
        a.mass = Some(10.0);
        let b = Attributes::default(); // sparse record, same column count
        let records = vec![record(1, a), record(2, b)];
        let view: Vec<&Record> = records.iter().collect();

        let rows = export_rows(&view);
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|r| r.len() == EXPORT_COLUMNS.len()));
        assert_eq!(rows[0][0], "1");
        assert_eq!(rows[0][4], "10");
        assert_eq!(rows[1][4], ""); // missing mass is an empty cell, not 0
    }

    #[test]
    fn csv_header_matches_the_documented_order() {
        let mut buf = Vec::new();
        write_csv(&[], &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(
            text.lines().next().unwrap(),
            "ID,Name,Mission,Active,Mass,Shape,Width,Height,Depth,Span,\
             Cross Section Min,Cross Section Max,Launch Date"
        );
    }

    #[test]
    fn fields_containing_delimiters_are_escaped() {
        let mut attrs = Attributes::default();
        attrs.name = "Alpha, \"Beta\"".into();
        let records = vec![record(1, attrs)];
        let view: Vec<&Record> = records.iter().collect();

        let mut buf = Vec::new();
        write_csv(&view, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let data_line = text.lines().nth(1).unwrap();
        assert!(data_line.contains("\"Alpha, \"\"Beta\"\"\""));
        // Still exactly one logical row after the header.
        assert_eq!(text.lines().count(), 2);
    }
}
