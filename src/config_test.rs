use std::collections::HashMap;

use super::*;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn empty_lookup_yields_defaults() {
    let config = AppConfig::from_lookup(|_| None).unwrap();
    assert_eq!(config, AppConfig::default());
    assert_eq!(config.rows_endpoint, DEFAULT_ROWS_ENDPOINT);
    assert_eq!(config.background_image_url, DEFAULT_BACKGROUND_URL);
    assert_eq!(config.export_file_name, "custom-tshirt.png");
    assert_eq!(config.default_rows_per_page, 10);
}

#[test]
fn overrides_are_applied_and_trimmed() {
    let config = AppConfig::from_lookup(lookup_from(&[
        (ROWS_ENDPOINT_VAR, " http://localhost:8080/rows "),
        (BACKGROUND_URL_VAR, "http://localhost:8080/mug.png"),
        (EXPORT_FILE_VAR, "mug.png"),
        (ROWS_PER_PAGE_VAR, "20"),
    ]))
    .unwrap();
    assert_eq!(config.rows_endpoint, "http://localhost:8080/rows");
    assert_eq!(config.background_image_url, "http://localhost:8080/mug.png");
    assert_eq!(config.export_file_name, "mug.png");
    assert_eq!(config.default_rows_per_page, 20);
}

#[test]
fn relative_endpoint_is_rejected() {
    let err = AppConfig::from_lookup(lookup_from(&[(ROWS_ENDPOINT_VAR, "/api/rows")])).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidUrl { var: ROWS_ENDPOINT_VAR, .. }));
}

#[test]
fn zero_rows_per_page_is_rejected() {
    let err = AppConfig::from_lookup(lookup_from(&[(ROWS_PER_PAGE_VAR, "0")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidRowsPerPage { var: ROWS_PER_PAGE_VAR, value: "0".to_owned() });
}

#[test]
fn non_numeric_rows_per_page_is_rejected() {
    let err = AppConfig::from_lookup(lookup_from(&[(ROWS_PER_PAGE_VAR, "ten")])).unwrap_err();
    assert!(err.to_string().contains("positive integer"));
}

#[test]
fn blank_export_file_is_rejected() {
    let err = AppConfig::from_lookup(lookup_from(&[(EXPORT_FILE_VAR, "   ")])).unwrap_err();
    assert_eq!(err, ConfigError::Empty { var: EXPORT_FILE_VAR });
}

#[test]
fn page_size_options_include_custom_default() {
    let config = AppConfig { default_rows_per_page: 8, ..AppConfig::default() };
    assert_eq!(config.page_size_options(), vec![8, 10, 20, 50]);
    assert_eq!(AppConfig::default().page_size_options(), vec![10, 20, 50]);
}
