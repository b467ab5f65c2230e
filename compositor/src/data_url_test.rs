use super::*;

#[test]
fn encode_produces_base64_data_url() {
    assert_eq!(encode("image/png", b"abc"), "data:image/png;base64,YWJj");
}

#[test]
fn encode_empty_mime_falls_back_to_octet_stream() {
    assert!(encode("", b"x").starts_with("data:application/octet-stream;base64,"));
}

#[test]
fn decode_returns_original_bytes() {
    let url = encode("image/jpeg", &[0xFF, 0xD8, 0xFF, 0x00]);
    assert_eq!(decode(&url), Ok(vec![0xFF, 0xD8, 0xFF, 0x00]));
}

#[test]
fn decode_rejects_plain_urls() {
    assert_eq!(decode("https://example.com/logo.png"), Err(DataUrlError::MissingScheme));
}

#[test]
fn decode_rejects_missing_separator() {
    assert_eq!(decode("data:image/png;base64"), Err(DataUrlError::MissingPayload));
}

#[test]
fn decode_rejects_percent_encoded_payload() {
    assert_eq!(decode("data:text/plain,hello"), Err(DataUrlError::NotBase64));
}

#[test]
fn decode_reports_bad_base64() {
    assert!(matches!(decode("data:image/png;base64,@@@"), Err(DataUrlError::Base64(_))));
}
