use super::*;

fn rate(id: i64) -> Rate {
    Rate { id, port_pair_id: Some(1), container_type_id: Some(2), transit_days: 12, base_rate: 500.0 }
}

#[test]
fn missing_selector_resolves_empty_without_query() {
    let mut state = RateQueryState::default();
    assert_eq!(state.select(Some(1), None), None);
    assert_eq!(state.select(None, Some(2)), None);
    assert_eq!(state.select(None, None), None);
    assert!(state.rates.is_empty());
    assert!(!state.loading);
}

#[test]
fn complete_selector_issues_query() {
    let mut state = RateQueryState::default();
    let query = state.select(Some(1), Some(2)).unwrap();
    assert_eq!(query.port_pair_id, 1);
    assert_eq!(query.container_type_id, 2);
    assert!(state.loading);
    assert!(state.is_current(&query));
}

#[test]
fn current_response_is_applied() {
    let mut state = RateQueryState::default();
    let query = state.select(Some(1), Some(2)).unwrap();
    assert!(state.apply(&query, Ok(vec![rate(10), rate(11)])));
    assert_eq!(state.rates.len(), 2);
    assert!(!state.loading);
    assert!(state.contains(11));
}

#[test]
fn stale_response_for_other_pair_is_dropped() {
    let mut state = RateQueryState::default();
    let first = state.select(Some(1), Some(2)).unwrap();
    let second = state.select(Some(3), Some(2)).unwrap();

    assert!(state.apply(&second, Ok(vec![rate(30)])));
    assert!(!state.apply(&first, Ok(vec![rate(10)])));
    assert_eq!(state.rates.iter().map(|r| r.id).collect::<Vec<_>>(), vec![30]);
}

#[test]
fn stale_response_for_same_pair_reselected_is_dropped() {
    let mut state = RateQueryState::default();
    let first = state.select(Some(1), Some(2)).unwrap();
    state.select(Some(1), None);
    let third = state.select(Some(1), Some(2)).unwrap();

    assert!(!state.apply(&first, Ok(vec![rate(10)])));
    assert!(state.loading);
    assert!(state.apply(&third, Ok(vec![rate(11)])));
    assert_eq!(state.rates[0].id, 11);
}

#[test]
fn response_after_selector_cleared_is_dropped() {
    let mut state = RateQueryState::default();
    let query = state.select(Some(1), Some(2)).unwrap();
    state.select(None, Some(2));
    assert!(!state.apply(&query, Ok(vec![rate(10)])));
    assert!(state.rates.is_empty());
}

#[test]
fn failed_response_clears_rates_and_records_message() {
    let mut state = RateQueryState::default();
    let query = state.select(Some(1), Some(2)).unwrap();
    assert!(state.apply(&query, Err("HTTP 500".to_owned())));
    assert!(state.rates.is_empty());
    assert_eq!(state.error.as_deref(), Some("HTTP 500"));
}
