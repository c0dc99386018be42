/// Rewrites raw header text into SQL-safe identifiers.
///
/// Headers that carry no alphanumeric content collapse to a placeholder drawn
/// from a per-run counter (`_`, `__`, ...), so repeated junk headers still get
/// distinct column names. Construct one sanitizer per invocation; the counter
/// never resets within a run.
pub struct Sanitizer {
    lowercase: bool,
    empties: usize,
}

impl Sanitizer {
    pub fn new(lowercase: bool) -> Self {
        Self {
            lowercase,
            empties: 0,
        }
    }

    /// Maps every character outside `[A-Za-z0-9_]` to `_` and collapses
    /// runs of `_` to a single one.
    pub fn sanitize(&mut self, name: &str) -> String {
        let mut cleaned = String::with_capacity(name.len());
        for c in name.chars() {
            let mapped = match c {
                'a'..='z' | 'A'..='Z' | '0'..='9' | '_' => c,
                _ => '_',
            };
            if mapped == '_' && cleaned.ends_with('_') {
                continue;
            }
            cleaned.push(mapped);
        }
        if self.lowercase {
            cleaned = cleaned.to_ascii_lowercase();
        }
        if cleaned.chars().all(|c| c == '_') {
            self.empties += 1;
            cleaned = "_".repeat(self.empties);
        }
        cleaned
    }
}

/// Identifier used when name-cleaning is off: the raw header minus embedded
/// double quotes.
pub fn raw_identifier(name: &str) -> String {
    name.replace('"', "")
}

/// Doubles embedded double quotes and wraps the result in double quotes.
/// For schema, table, server, and column names.
pub fn quote_identifier(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

/// Doubles embedded single quotes. For values interpolated into
/// single-quoted SQL string literals; never use for identifiers.
pub fn escape_literal(value: &str) -> String {
    value.replace('\'', "''")
}
