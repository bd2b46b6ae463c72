use super::*;
use std::collections::HashMap;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn from_lookup_accepts_non_empty_pair() {
    let cfg = BackendConfig::from_lookup(lookup_from(&[
        (URL_VAR, "https://abc.supabase.co"),
        (ANON_KEY_VAR, "anon-key"),
    ]))
    .unwrap();
    assert_eq!(cfg.url, "https://abc.supabase.co");
    assert_eq!(cfg.anon_key, "anon-key");
}

#[test]
fn from_lookup_strips_trailing_slash_and_whitespace() {
    let cfg = BackendConfig::from_lookup(lookup_from(&[
        (URL_VAR, "  https://abc.supabase.co/  "),
        (ANON_KEY_VAR, " key "),
    ]))
    .unwrap();
    assert_eq!(cfg.url, "https://abc.supabase.co");
    assert_eq!(cfg.anon_key, "key");
}

#[test]
fn from_lookup_missing_url_errors() {
    let err = BackendConfig::from_lookup(lookup_from(&[(ANON_KEY_VAR, "anon-key")])).unwrap_err();
    assert_eq!(err, BackendConfigError::Missing { var: URL_VAR.to_owned() });
    assert!(err.to_string().contains("SUPABASE_URL"));
}

#[test]
fn from_lookup_missing_key_errors() {
    let err = BackendConfig::from_lookup(lookup_from(&[(URL_VAR, "https://abc.supabase.co")])).unwrap_err();
    assert_eq!(err, BackendConfigError::Missing { var: ANON_KEY_VAR.to_owned() });
    assert!(err.to_string().contains("SUPABASE_ANON_KEY"));
}

#[test]
fn from_lookup_empty_values_error() {
    let err = BackendConfig::from_lookup(lookup_from(&[(URL_VAR, ""), (ANON_KEY_VAR, "anon-key")])).unwrap_err();
    assert_eq!(err, BackendConfigError::Empty { var: URL_VAR.to_owned() });

    let err =
        BackendConfig::from_lookup(lookup_from(&[(URL_VAR, "https://abc.supabase.co"), (ANON_KEY_VAR, "   ")]))
            .unwrap_err();
    assert_eq!(err, BackendConfigError::Empty { var: ANON_KEY_VAR.to_owned() });
}

#[test]
fn from_lookup_with_nothing_set_reports_url_first() {
    let err = BackendConfig::from_lookup(|_| None).unwrap_err();
    assert_eq!(err, BackendConfigError::Missing { var: URL_VAR.to_owned() });
}

#[test]
fn debug_output_redacts_key() {
    let cfg = BackendConfig { url: "https://abc.supabase.co".to_owned(), anon_key: "secret".to_owned() };
    let rendered = format!("{cfg:?}");
    assert!(rendered.contains("https://abc.supabase.co"));
    assert!(!rendered.contains("secret"));
}
