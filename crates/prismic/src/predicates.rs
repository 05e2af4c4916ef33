use chrono::{DateTime, Utc};
use std::fmt;

/// A query predicate, serialized the way the REST API expects it inside the
/// `q` parameter.
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    At { path: String, value: String },
    DateBefore { path: String, value: DateTime<Utc> },
    DateAfter { path: String, value: DateTime<Utc> },
}

impl Predicate {
    pub fn at(path: impl Into<String>, value: impl Into<String>) -> Self {
        Predicate::At {
            path: path.into(),
            value: value.into(),
        }
    }

    pub fn date_before(path: impl Into<String>, value: DateTime<Utc>) -> Self {
        Predicate::DateBefore {
            path: path.into(),
            value,
        }
    }

    pub fn date_after(path: impl Into<String>, value: DateTime<Utc>) -> Self {
        Predicate::DateAfter {
            path: path.into(),
            value,
        }
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Predicate::At { path, value } => write!(f, "[at({}, \"{}\")]", path, value),
            // Date predicates take milliseconds since the epoch
            Predicate::DateBefore { path, value } => {
                write!(f, "[date.before({}, {})]", path, value.timestamp_millis())
            }
            Predicate::DateAfter { path, value } => {
                write!(f, "[date.after({}, {})]", path, value.timestamp_millis())
            }
        }
    }
}

/// Builds the `q` parameter from a predicate list.
pub fn query_param(predicates: &[Predicate]) -> String {
    let inner: String = predicates.iter().map(ToString::to_string).collect();
    format!("[{}]", inner)
}

/// Options accepted by a document search.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryOptions {
    pub page_size: Option<usize>,
    pub orderings: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_at_predicate_serialization() {
        let p = Predicate::at("document.type", "posts");
        assert_eq!(p.to_string(), "[at(document.type, \"posts\")]");
    }

    #[test]
    fn test_date_predicates_use_epoch_millis() {
        let when = Utc.with_ymd_and_hms(2021, 4, 19, 20, 13, 2).unwrap();
        let before = Predicate::date_before("document.first_publication_date", when);
        let after = Predicate::date_after("document.first_publication_date", when);
        assert_eq!(
            before.to_string(),
            "[date.before(document.first_publication_date, 1618863182000)]"
        );
        assert_eq!(
            after.to_string(),
            "[date.after(document.first_publication_date, 1618863182000)]"
        );
    }

    #[test]
    fn test_query_param_wraps_predicate_list() {
        let predicates = [
            Predicate::at("document.type", "posts"),
            Predicate::at("my.posts.uid", "first-post"),
        ];
        assert_eq!(
            query_param(&predicates),
            "[[at(document.type, \"posts\")][at(my.posts.uid, \"first-post\")]]"
        );
    }
}
