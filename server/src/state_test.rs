use super::*;

#[test]
fn test_app_state_shares_one_client() {
    let state = test_helpers::test_app_state();
    let cloned = state.clone();
    assert!(Arc::ptr_eq(&state.backend, &cloned.backend));
    assert_eq!(state.backend.url(), "http://127.0.0.1:9");
}
