use super::*;
use serde_json::json;

fn app(id: u32, status: &str) -> Application {
    serde_json::from_value(json!({ "id": id, "company": format!("Company {id}"), "status": status })).unwrap()
}

#[test]
fn applications_state_default_is_idle_and_empty() {
    let state = ApplicationsState::default();
    assert!(state.items.is_empty());
    assert!(!state.loading);
    assert!(state.error.is_none());
}

#[test]
fn group_by_status_returns_every_column_in_order() {
    let columns = group_by_status(&[]);
    let statuses: Vec<_> = columns.iter().map(|c| c.status).collect();
    assert_eq!(statuses, ApplicationStatus::ALL.to_vec());
    assert!(columns.iter().all(|c| c.indices.is_empty()));
}

#[test]
fn group_by_status_keeps_input_order_within_columns() {
    let apps = vec![app(1, "applied"), app(2, "to_apply"), app(3, "applied"), app(4, "offer")];
    let columns = group_by_status(&apps);
    assert_eq!(columns[ApplicationStatus::ToApply.index()].indices, vec![1]);
    assert_eq!(columns[ApplicationStatus::Applied.index()].indices, vec![0, 2]);
    assert_eq!(columns[ApplicationStatus::Offer.index()].indices, vec![3]);
    assert!(columns[ApplicationStatus::Rejected.index()].indices.is_empty());
}

#[test]
fn group_by_status_puts_unknown_status_in_first_column() {
    let apps = vec![app(1, "ghosted")];
    let columns = group_by_status(&apps);
    assert_eq!(columns[0].indices, vec![0]);
}

#[test]
fn pending_action_count_counts_first_column_only() {
    let apps = vec![app(1, "to_apply"), app(2, "interview"), app(3, "to_apply"), app(4, "unknown")];
    assert_eq!(pending_action_count(&apps), 3);
    assert_eq!(pending_action_count(&[]), 0);
}

#[test]
fn move_application_steps_one_column() {
    let mut apps = vec![app(1, "applied")];
    assert_eq!(
        move_application(&mut apps, 0, MoveDirection::Right),
        Some((ApplicationStatus::Applied, ApplicationStatus::Interview))
    );
    assert_eq!(apps[0].status(), ApplicationStatus::Interview);
    assert_eq!(
        move_application(&mut apps, 0, MoveDirection::Left),
        Some((ApplicationStatus::Interview, ApplicationStatus::Applied))
    );
}

#[test]
fn move_application_clamps_at_edges() {
    let mut apps = vec![app(1, "to_apply"), app(2, "rejected")];
    assert_eq!(move_application(&mut apps, 0, MoveDirection::Left), None);
    assert_eq!(move_application(&mut apps, 1, MoveDirection::Right), None);
    assert_eq!(apps[0].status(), ApplicationStatus::ToApply);
    assert_eq!(apps[1].status(), ApplicationStatus::Rejected);
}

#[test]
fn move_application_out_of_range_is_noop() {
    let mut apps = vec![app(1, "applied")];
    assert_eq!(move_application(&mut apps, 5, MoveDirection::Right), None);
}

#[test]
fn restore_status_finds_record_by_id() {
    let mut apps = vec![app(1, "applied"), app(2, "interview")];
    assert!(restore_status(&mut apps, "2", ApplicationStatus::Interview, ApplicationStatus::Applied));
    assert_eq!(apps[1].status(), ApplicationStatus::Applied);
    assert_eq!(apps[0].status(), ApplicationStatus::Applied);
}

#[test]
fn restore_status_ignores_unknown_id() {
    let mut apps = vec![app(1, "offer")];
    assert!(!restore_status(&mut apps, "9", ApplicationStatus::Offer, ApplicationStatus::Interview));
    assert_eq!(apps[0].status(), ApplicationStatus::Offer);
}

#[test]
fn restore_status_keeps_a_later_move() {
    let mut apps = vec![app(1, "to_apply")];
    let first = move_application(&mut apps, 0, MoveDirection::Right).unwrap();
    let second = move_application(&mut apps, 0, MoveDirection::Right).unwrap();
    assert_eq!(second, (ApplicationStatus::Applied, ApplicationStatus::Interview));

    // The first save fails after the second one landed.
    assert!(!restore_status(&mut apps, "1", first.1, first.0));
    assert_eq!(apps[0].status(), ApplicationStatus::Interview);

    // The second save failing still reverts its own move.
    assert!(restore_status(&mut apps, "1", second.1, second.0));
    assert_eq!(apps[0].status(), ApplicationStatus::Applied);
}
