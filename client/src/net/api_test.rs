use super::*;

#[test]
fn application_endpoint_formats_expected_path() {
    assert_eq!(application_endpoint("a1"), "/api/applications/a1");
}

#[test]
fn sign_in_failed_message_hides_status_for_bad_credentials() {
    assert_eq!(sign_in_failed_message(401), "Email ou mot de passe incorrect.");
    assert_eq!(sign_in_failed_message(400), "Email ou mot de passe incorrect.");
}

#[test]
fn sign_in_failed_message_formats_other_statuses() {
    assert_eq!(sign_in_failed_message(502), "Connexion impossible (502).");
}

#[test]
fn applications_failed_message_formats_status() {
    assert_eq!(applications_failed_message(502), "chargement des candidatures impossible: 502");
}

#[test]
fn update_failed_message_formats_status() {
    assert_eq!(update_failed_message(404), "mise à jour impossible: 404");
}

