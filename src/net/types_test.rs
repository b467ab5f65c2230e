use super::*;

// =============================================================
// DataRow
// =============================================================

#[test]
fn data_row_decodes_full_record() {
    let row: DataRow = serde_json::from_str(
        r#"{"id":1,"name":"Jane Doe","email":"j@x.com","created_at":"2024-01-05T00:00:00Z","updated_at":"2024-01-06T00:00:00Z"}"#,
    )
    .unwrap();
    assert_eq!(
        row,
        DataRow {
            id: 1,
            name: "Jane Doe".to_owned(),
            email: "j@x.com".to_owned(),
            created_at: "2024-01-05T00:00:00Z".to_owned(),
            updated_at: "2024-01-06T00:00:00Z".to_owned(),
        }
    );
}

#[test]
fn data_row_accepts_integral_float_id() {
    let row: DataRow = serde_json::from_str(r#"{"id":7.0,"name":"A"}"#).unwrap();
    assert_eq!(row.id, 7);
}

#[test]
fn data_row_rejects_fractional_id() {
    assert!(serde_json::from_str::<DataRow>(r#"{"id":7.5}"#).is_err());
}

#[test]
fn data_row_rejects_string_id() {
    assert!(serde_json::from_str::<DataRow>(r#"{"id":"7"}"#).is_err());
}

#[test]
fn data_row_null_and_missing_strings_become_empty() {
    let row: DataRow = serde_json::from_str(r#"{"id":3,"name":null}"#).unwrap();
    assert_eq!(row.name, "");
    assert_eq!(row.email, "");
    assert_eq!(row.created_at, "");
}

// =============================================================
// RowsResponse
// =============================================================

#[test]
fn rows_response_keeps_server_order_and_ignores_extras() {
    let body: RowsResponse = serde_json::from_str(
        r#"{"current_page":1,"data":[{"id":9,"name":"Z"},{"id":2,"name":"A"}],"total":2}"#,
    )
    .unwrap();
    let ids: Vec<RowId> = body.data.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![9, 2]);
}

#[test]
fn rows_response_missing_data_is_empty() {
    let body: RowsResponse = serde_json::from_str(r#"{"message":"ok"}"#).unwrap();
    assert!(body.data.is_empty());
}

#[test]
fn rows_response_null_data_is_empty() {
    let body: RowsResponse = serde_json::from_str(r#"{"data":null}"#).unwrap();
    assert!(body.data.is_empty());
}
