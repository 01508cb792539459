//! Decoders for the legacy export's value conventions.
//!
//! The exporter wrote everything as display text: 12-hour timestamps,
//! yes/no booleans, and delimiter-joined lists. Decoders are total —
//! unparseable input decodes to `None`/default rather than erroring, since
//! a malformed cell is row-level noise, not a reason to stop the batch.

use chrono::{DateTime, NaiveDateTime, Utc};

/// Parse the export's timestamp format, e.g. `"Jul 19, 2023 3:11 am"`.
///
/// The exports carry no zone; values are taken as UTC. `chrono` accepts
/// unpadded day and hour under the padded specifiers when parsing.
pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
  let trimmed = value.trim();
  if trimmed.is_empty() {
    return None;
  }
  NaiveDateTime::parse_from_str(trimmed, "%b %d, %Y %I:%M %p")
    .ok()
    .map(|naive| naive.and_utc())
}

/// `yes`/`true` (any case) → `true`; anything else → `false`.
pub fn parse_bool(value: &str) -> bool {
  matches!(
    value.trim().to_ascii_lowercase().as_str(),
    "yes" | "true"
  )
}

/// Accept only unsigned decimal digit strings, the way the legacy platform
/// validated ages. `"25"` parses; `"25.5"`, `"unknown"`, `"-3"` do not.
pub fn parse_int(value: &str) -> Option<i64> {
  let trimmed = value.trim();
  if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
    return None;
  }
  trimmed.parse().ok()
}

/// Split a multi-valued cell on `delimiter`, trimming each element and
/// dropping empties.
pub fn split_list(value: &str, delimiter: &str) -> Vec<String> {
  value
    .split(delimiter)
    .map(str::trim)
    .filter(|s| !s.is_empty())
    .map(str::to_string)
    .collect()
}

/// Rewrite a YouTube iframe-embed URL to its canonical watch URL; other
/// URLs pass through untouched. Profile videos were pasted as whole embed
/// snippets often enough that the exports are full of these.
pub fn canonical_video_url(url: &str) -> String {
  const EMBED_MARKER: &str = "youtube.com/embed/";
  if let Some(pos) = url.find(EMBED_MARKER) {
    let rest = &url[pos + EMBED_MARKER.len()..];
    let id: String = rest
      .chars()
      .take_while(|c| !matches!(c, '"' | '?') && !c.is_whitespace())
      .collect();
    if !id.is_empty() {
      return format!("https://www.youtube.com/watch?v={id}");
    }
  }
  url.to_string()
}

#[cfg(test)]
mod tests {
  use chrono::{Datelike, Timelike};

  use super::*;

  #[test]
  fn timestamp_round_trip() {
    let dt = parse_timestamp("Jul 19, 2023 3:11 am").unwrap();
    assert_eq!((dt.year(), dt.month(), dt.day()), (2023, 7, 19));
    assert_eq!((dt.hour(), dt.minute()), (3, 11));

    let pm = parse_timestamp("Dec 1, 2024 11:59 pm").unwrap();
    assert_eq!(pm.hour(), 23);
  }

  #[test]
  fn unparseable_timestamp_is_none() {
    assert!(parse_timestamp("").is_none());
    assert!(parse_timestamp("yesterday").is_none());
    assert!(parse_timestamp("2023-07-19T03:11:00Z").is_none());
  }

  #[test]
  fn booleans_are_yes_or_true() {
    assert!(parse_bool("yes"));
    assert!(parse_bool("Yes"));
    assert!(parse_bool("TRUE"));
    assert!(!parse_bool("no"));
    assert!(!parse_bool(""));
    assert!(!parse_bool("1"));
  }

  #[test]
  fn ints_are_digit_strings_only() {
    assert_eq!(parse_int("25"), Some(25));
    assert_eq!(parse_int(" 31 "), Some(31));
    assert_eq!(parse_int("25.5"), None);
    assert_eq!(parse_int("-3"), None);
    assert_eq!(parse_int("unknown"), None);
  }

  #[test]
  fn list_splitting_respects_the_configured_delimiter() {
    assert_eq!(
      split_list("alice , bob , carol", " , "),
      vec!["alice", "bob", "carol"],
    );
    // A spaced-comma list split on the bare comma still trims correctly…
    assert_eq!(split_list("alice , bob", ","), vec!["alice", "bob"]);
    // …but a bare-comma list split on the spaced delimiter does not split,
    // which is exactly why the delimiter is configured per field.
    assert_eq!(split_list("alice,bob", " , "), vec!["alice,bob"]);
    assert_eq!(split_list(" , , ", " , "), Vec::<String>::new());
  }

  #[test]
  fn embed_urls_become_watch_urls() {
    assert_eq!(
      canonical_video_url(
        "<iframe src=\"https://www.youtube.com/embed/dQw4w9WgXcQ?rel=0\"></iframe>"
      ),
      "https://www.youtube.com/watch?v=dQw4w9WgXcQ",
    );
    assert_eq!(
      canonical_video_url("https://vimeo.com/12345"),
      "https://vimeo.com/12345",
    );
  }
}
