use super::*;

#[test]
fn single_action_is_singular() {
    assert_eq!(daily_actions_label(1), "1 action à traiter");
}

#[test]
fn several_actions_are_plural() {
    assert_eq!(daily_actions_label(3), "3 actions à traiter");
    assert_eq!(daily_actions_label(2), "2 actions à traiter");
}

#[test]
fn zero_actions_keeps_singular_form() {
    assert_eq!(daily_actions_label(0), "0 action à traiter");
}
