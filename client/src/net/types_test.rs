use super::*;
use serde_json::json;

fn application(value: serde_json::Value) -> Application {
    serde_json::from_value(value).unwrap()
}

// =============================================================
// ApplicationStatus
// =============================================================

#[test]
fn status_parses_wire_values() {
    for status in ApplicationStatus::ALL {
        assert_eq!(status.as_str().parse::<ApplicationStatus>(), Ok(status));
    }
    assert!("archived".parse::<ApplicationStatus>().is_err());
}

#[test]
fn status_serde_uses_snake_case() {
    assert_eq!(serde_json::to_value(ApplicationStatus::ToApply).unwrap(), json!("to_apply"));
    let parsed: ApplicationStatus = serde_json::from_value(json!("interview")).unwrap();
    assert_eq!(parsed, ApplicationStatus::Interview);
}

#[test]
fn status_neighbours_clamp_at_edges() {
    assert_eq!(ApplicationStatus::ToApply.previous(), None);
    assert_eq!(ApplicationStatus::ToApply.next(), Some(ApplicationStatus::Applied));
    assert_eq!(ApplicationStatus::Offer.previous(), Some(ApplicationStatus::Interview));
    assert_eq!(ApplicationStatus::Rejected.next(), None);
}

#[test]
fn status_index_matches_board_order() {
    for (i, status) in ApplicationStatus::ALL.iter().enumerate() {
        assert_eq!(status.index(), i);
    }
}

// =============================================================
// Application
// =============================================================

#[test]
fn application_reads_known_keys() {
    let app = application(json!({
        "id": "a1",
        "company": "Doctolib",
        "position": "Développeuse Rust",
        "location": "Paris",
        "status": "interview"
    }));
    assert_eq!(app.id().as_deref(), Some("a1"));
    assert_eq!(app.company(), Some("Doctolib"));
    assert_eq!(app.position(), Some("Développeuse Rust"));
    assert_eq!(app.location(), Some("Paris"));
    assert_eq!(app.status(), ApplicationStatus::Interview);
}

#[test]
fn application_numeric_id_is_stringified() {
    let app = application(json!({ "id": 42 }));
    assert_eq!(app.id().as_deref(), Some("42"));
}

#[test]
fn application_missing_or_unknown_status_defaults_to_first_column() {
    assert_eq!(application(json!({})).status(), ApplicationStatus::ToApply);
    assert_eq!(application(json!({ "status": "ghosted" })).status(), ApplicationStatus::ToApply);
    assert_eq!(application(json!({ "status": 3 })).status(), ApplicationStatus::ToApply);
}

#[test]
fn application_blank_text_is_absent() {
    let app = application(json!({ "company": "   " }));
    assert_eq!(app.company(), None);
}

#[test]
fn application_keeps_unknown_keys_on_round_trip() {
    let raw = json!({ "id": 7, "company": "Alan", "salary": { "min": 50000 }, "tags": ["remote"] });
    let app = application(raw.clone());
    assert_eq!(serde_json::to_value(&app).unwrap(), raw);
}

#[test]
fn set_status_only_touches_status_key() {
    let mut app = application(json!({ "id": 1, "company": "Alan", "status": "applied" }));
    app.set_status(ApplicationStatus::Offer);
    assert_eq!(
        serde_json::to_value(&app).unwrap(),
        json!({ "id": 1, "company": "Alan", "status": "offer" })
    );
}
