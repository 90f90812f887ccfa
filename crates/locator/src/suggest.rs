//! Typeahead suggestions over stop names.

use crate::models::Stop;

/// Maximum suggestions shown in the dropdown.
pub const SUGGESTION_LIMIT: usize = 6;

/// Stops whose name contains `query`, case-insensitively.
///
/// Input order is preserved and the list is capped at
/// [`SUGGESTION_LIMIT`]. An empty query matches everything, so the first
/// stops of the list come back.
pub fn suggest_stops<'a>(query: &str, stops: &'a [Stop]) -> Vec<&'a Stop> {
    let needle = query.to_lowercase();
    stops
        .iter()
        .filter(|stop| stop.name.to_lowercase().contains(&needle))
        .take(SUGGESTION_LIMIT)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identifiers::StopId;

    fn named(id: u64, name: &str) -> Stop {
        Stop {
            id: StopId::new(id),
            name: name.into(),
            city: "Kłodawa".into(),
            location: None,
            directions: Vec::new(),
        }
    }

    #[test]
    fn test_case_insensitive_substring() {
        let stops = vec![
            named(1, "Urząd Gminy"),
            named(2, "Rynek"),
            named(3, "urząd skarbowy"),
        ];

        let hits = suggest_stops("URZĄD", &stops);
        let ids: Vec<u64> = hits.iter().map(|s| s.id.value()).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_capped_at_limit_in_input_order() {
        let stops: Vec<Stop> = (1..=10).map(|i| named(i, "Osiedle")).collect();

        let hits = suggest_stops("osie", &stops);
        assert_eq!(hits.len(), SUGGESTION_LIMIT);
        let ids: Vec<u64> = hits.iter().map(|s| s.id.value()).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_empty_query_matches_everything() {
        let stops = vec![named(1, "A"), named(2, "B")];
        assert_eq!(suggest_stops("", &stops).len(), 2);
    }

    #[test]
    fn test_no_match() {
        let stops = vec![named(1, "Rynek")];
        assert!(suggest_stops("dworzec", &stops).is_empty());
    }
}
