use super::*;

#[test]
fn status_patch_accepts_known_status() {
    assert_eq!(status_patch("interview"), Ok(serde_json::json!({ "status": "interview" })));
    assert_eq!(status_patch("to_apply"), Ok(serde_json::json!({ "status": "to_apply" })));
}

#[test]
fn status_patch_rejects_unknown_status() {
    assert_eq!(status_patch("archived"), Err(StatusCode::BAD_REQUEST));
    assert_eq!(status_patch(""), Err(StatusCode::BAD_REQUEST));
}

