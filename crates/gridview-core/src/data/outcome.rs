//! Which path produced a data-access result

use serde::Serialize;

/// Result of a data-access operation, tagged with the path that produced it
///
/// None of the paths is an error: callers that only want the data use
/// [`Outcome::into_inner`], which yields an empty value for [`Outcome::Empty`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "source", content = "data", rename_all = "snake_case")]
pub enum Outcome<T> {
    /// Remote call succeeded
    Live(T),
    /// Configured to prefer demo data; no remote call was made
    Synthetic(T),
    /// Remote call failed or came back empty; demo data substituted
    Fallback(T),
    /// Remote call failed or came back empty and fallback is disabled
    Empty,
}

/// Label for the path taken, useful for logging and display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataSource {
    /// See [`Outcome::Live`]
    Live,
    /// See [`Outcome::Synthetic`]
    Synthetic,
    /// See [`Outcome::Fallback`]
    Fallback,
    /// See [`Outcome::Empty`]
    Empty,
}

impl<T> Outcome<T> {
    /// Which path produced this outcome
    pub fn source(&self) -> DataSource {
        match self {
            Outcome::Live(_) => DataSource::Live,
            Outcome::Synthetic(_) => DataSource::Synthetic,
            Outcome::Fallback(_) => DataSource::Fallback,
            Outcome::Empty => DataSource::Empty,
        }
    }

    /// True for [`Outcome::Live`]
    pub fn is_live(&self) -> bool {
        matches!(self, Outcome::Live(_))
    }

    /// True for [`Outcome::Synthetic`]
    pub fn is_synthetic(&self) -> bool {
        matches!(self, Outcome::Synthetic(_))
    }

    /// True for [`Outcome::Fallback`]
    pub fn is_fallback(&self) -> bool {
        matches!(self, Outcome::Fallback(_))
    }

    /// True for [`Outcome::Empty`]
    pub fn is_empty(&self) -> bool {
        matches!(self, Outcome::Empty)
    }

    /// Borrow the value, if any path produced one
    pub fn value(&self) -> Option<&T> {
        match self {
            Outcome::Live(v) | Outcome::Synthetic(v) | Outcome::Fallback(v) => Some(v),
            Outcome::Empty => None,
        }
    }

    /// Transform the value while keeping the path tag
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Outcome<U> {
        match self {
            Outcome::Live(v) => Outcome::Live(f(v)),
            Outcome::Synthetic(v) => Outcome::Synthetic(f(v)),
            Outcome::Fallback(v) => Outcome::Fallback(f(v)),
            Outcome::Empty => Outcome::Empty,
        }
    }
}

impl<T: Default> Outcome<T> {
    /// The value, or `T::default()` for `Empty`
    pub fn into_inner(self) -> T {
        match self {
            Outcome::Live(v) | Outcome::Synthetic(v) | Outcome::Fallback(v) => v,
            Outcome::Empty => T::default(),
        }
    }
}

impl std::fmt::Display for DataSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            DataSource::Live => "live",
            DataSource::Synthetic => "demo",
            DataSource::Fallback => "demo (fallback)",
            DataSource::Empty => "unavailable",
        };
        f.write_str(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_yields_default() {
        let outcome: Outcome<Vec<u32>> = Outcome::Empty;
        assert!(outcome.value().is_none());
        assert!(outcome.into_inner().is_empty());

        let outcome: Outcome<Option<f64>> = Outcome::Empty;
        assert_eq!(outcome.into_inner(), None);
    }

    #[test]
    fn test_serializes_with_source_tag() {
        let json = serde_json::to_value(Outcome::Fallback(vec![9001])).unwrap();
        assert_eq!(json, serde_json::json!({"source": "fallback", "data": [9001]}));

        let json = serde_json::to_value(Outcome::<Vec<u32>>::Empty).unwrap();
        assert_eq!(json, serde_json::json!({"source": "empty"}));
    }

    #[test]
    fn test_map_keeps_tag() {
        let outcome = Outcome::Fallback(vec![1, 2, 3]).map(|v| v.len());
        assert_eq!(outcome, Outcome::Fallback(3));
        assert_eq!(outcome.source(), DataSource::Fallback);
    }
}
