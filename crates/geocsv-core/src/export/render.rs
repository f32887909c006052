//! CSV rendering of value/coordinate records.

use std::io::Write;

use crate::geojson::ValueCoordinate;

pub const HEADER: [&str; 3] = ["Value", "Longitude", "Latitude"];

/// Writes the header and one `value,longitude,latitude` line per record.
/// Lines end in `\n`; fields are numeric so nothing is quoted.
pub fn write_csv<W: Write>(records: &[ValueCoordinate], writer: W) -> csv::Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .quote_style(csv::QuoteStyle::Never)
        .from_writer(writer);

    writer.write_record(HEADER)?;
    for r in records {
        writer.write_record([
            format_number(r.value),
            format_number(r.longitude()),
            format_number(r.latitude()),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

/// Renders `records` into an in-memory CSV document.
pub fn to_csv(records: &[ValueCoordinate]) -> csv::Result<Vec<u8>> {
    let mut buf = Vec::new();
    write_csv(records, &mut buf)?;
    Ok(buf)
}

/// Shortest representation that reads back to the same `f64`; integral
/// values print without a fractional part (`5`, not `5.0`).
pub fn format_number(n: f64) -> String {
    if n == 0.0 {
        // Covers -0.0 as well.
        return "0".to_string();
    }
    n.to_string()
}
