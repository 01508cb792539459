//! `RawRecord` — one export row, keyed by verbatim column headers.

use std::collections::HashMap;

/// An untyped, string-valued key/value record as read from one export row.
/// Ephemeral; never persisted.
///
/// Keys are the export's column headers exactly as they appear in the file —
/// lookups must use the verbatim header, trailing whitespace and all (the
/// pairings export really does name a column `"Match 1 "`).
#[derive(Debug, Clone, Default)]
pub struct RawRecord {
  fields: HashMap<String, String>,
}

impl RawRecord {
  pub fn new(fields: HashMap<String, String>) -> Self {
    Self { fields }
  }

  /// Build a record from `(header, value)` pairs. Mostly useful in tests.
  pub fn from_pairs<'a>(
    pairs: impl IntoIterator<Item = (&'a str, &'a str)>,
  ) -> Self {
    Self {
      fields: pairs
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect(),
    }
  }

  /// The raw cell under `header`, if the column exists.
  pub fn get(&self, header: &str) -> Option<&str> {
    self.fields.get(header).map(String::as_str)
  }

  /// The cell under `header`, trimmed, with empty results folded to `None`.
  /// This is the accessor nearly every consumer wants — the exports pad
  /// values with stray whitespace liberally.
  pub fn get_trimmed(&self, header: &str) -> Option<&str> {
    self
      .get(header)
      .map(str::trim)
      .filter(|v| !v.is_empty())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn verbatim_header_lookup() {
    let rec = RawRecord::from_pairs([("Match 1 ", "alice"), ("Match 2", "bob")]);
    assert_eq!(rec.get("Match 1 "), Some("alice"));
    assert_eq!(rec.get("Match 1"), None);
  }

  #[test]
  fn trimmed_access_folds_empty_to_none() {
    let rec = RawRecord::from_pairs([("Creator", "  alice "), ("Recipient", "   ")]);
    assert_eq!(rec.get_trimmed("Creator"), Some("alice"));
    assert_eq!(rec.get_trimmed("Recipient"), None);
    assert_eq!(rec.get_trimmed("Subject"), None);
  }
}
