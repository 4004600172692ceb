// src/csv.rs
//
// Output document rendering. Downstream consumers expect the fixed header
// and comma-joined fields with a newline between rows only. There is no
// quoting or escaping of any kind.

use crate::extract::ListingRow;

/// Column header of the output document.
pub const HEADER: &str = "FechaDescarga,Barrio,Valor,NumHabitaciones,NumBanos,mts2";

/// Renders the header plus one line per row. No trailing newline; zero rows
/// render as the bare header (callers short-circuit that case before it is
/// ever written out).
pub fn render(rows: &[ListingRow]) -> String {
    let mut out = String::from(HEADER);
    for row in rows {
        out.push('\n');
        out.push_str(&row.fields().join(","));
    }
    out
}
