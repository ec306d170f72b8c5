//! Client-assembled CSV for the inventory export.
//!
//! The inventory download never round-trips to the server; rows are
//! serialized here and handed to the blob download helper.

#[cfg(test)]
#[path = "csv_test.rs"]
mod csv_test;

/// Quote a single CSV field per RFC 4180 when it needs it.
pub fn escape_field(raw: &str) -> String {
    if raw.contains(',') || raw.contains('"') || raw.contains('\n') || raw.contains('\r') {
        format!("\"{}\"", raw.replace('"', "\"\""))
    } else {
        raw.to_owned()
    }
}

/// Serialize a header plus rows into CSV text with CRLF line endings.
pub fn to_csv(header: &[&str], rows: &[Vec<String>]) -> String {
    let mut out = String::new();
    push_row(&mut out, header.iter().map(|s| (*s).to_owned()));
    for row in rows {
        push_row(&mut out, row.iter().cloned());
    }
    out
}

fn push_row(out: &mut String, fields: impl Iterator<Item = String>) {
    let encoded: Vec<String> = fields.map(|f| escape_field(&f)).collect();
    out.push_str(&encoded.join(","));
    out.push_str("\r\n");
}
