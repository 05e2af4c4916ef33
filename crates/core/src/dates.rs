use chrono::{DateTime, Locale, Utc};

// Prismic emits offsets without a colon ("+0000"), which strict RFC 3339
// parsing rejects.
const PRISMIC_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%z";

/// Parses a publication timestamp from the CMS.
pub fn parse(value: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .or_else(|_| DateTime::parse_from_str(value, PRISMIC_FORMAT))
        .ok()
        .map(|date| date.with_timezone(&Utc))
}

/// List and header date, e.g. "19 abr 2021". Unparseable input is shown
/// as-is rather than dropped.
pub fn format_short(value: &str) -> String {
    match parse(value) {
        Some(date) => date.format_localized("%d %b %Y", Locale::pt_BR).to_string(),
        None => value.to_string(),
    }
}

/// The note shown when a post was touched after publishing, e.g.
/// "*editado em 20 abr 2021, às 10:00".
pub fn edited_note(first: &str, last: Option<&str>) -> Option<String> {
    let last = last?;
    if last == first {
        return None;
    }
    let date = parse(last)?;
    Some(format!(
        "*editado em {}",
        date.format_localized("%d %b %Y, às %H:%M", Locale::pt_BR)
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_parse_prismic_offset_without_colon() {
        let parsed = parse("2021-04-19T20:13:02+0000").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2021, 4, 19, 20, 13, 2).unwrap());
    }

    #[test]
    fn test_parse_rfc3339() {
        let parsed = parse("2021-04-19T20:13:02+00:00").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2021, 4, 19, 20, 13, 2).unwrap());
    }

    #[test]
    fn test_format_short_in_pt_br() {
        assert_eq!(format_short("2021-04-19T20:13:02+0000"), "19 abr 2021");
    }

    #[test]
    fn test_format_short_passes_garbage_through() {
        assert_eq!(format_short("ontem"), "ontem");
    }

    #[test]
    fn test_edited_note_absent_when_never_edited() {
        assert_eq!(edited_note("2021-04-19T20:13:02+0000", None), None);
        assert_eq!(
            edited_note(
                "2021-04-19T20:13:02+0000",
                Some("2021-04-19T20:13:02+0000")
            ),
            None
        );
    }

    #[test]
    fn test_edited_note_when_last_differs() {
        let note = edited_note(
            "2021-04-19T20:13:02+0000",
            Some("2021-04-20T10:00:00+0000"),
        )
        .unwrap();
        assert_eq!(note, "*editado em 20 abr 2021, às 10:00");
    }
}
