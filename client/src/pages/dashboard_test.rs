use super::*;
use crate::net::types::User;

fn signed_in(email: Option<&str>) -> AuthState {
    AuthState {
        user: Some(User { id: "u-1".to_owned(), email: email.map(str::to_owned) }),
        loading: false,
    }
}

#[test]
fn user_label_prefers_email() {
    assert_eq!(user_label(&signed_in(Some("a@b.fr"))), "a@b.fr");
}

#[test]
fn user_label_falls_back_to_id() {
    assert_eq!(user_label(&signed_in(None)), "u-1");
}

#[test]
fn user_label_is_empty_without_user() {
    assert_eq!(user_label(&AuthState::default()), "");
}
