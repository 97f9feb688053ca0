use std::env;

use serde_json::json;

pub fn insta_snapshot<F: FnOnce()>(f: F) {
    let mut settings = insta::Settings::clone_current();
    let snapshot_path = env::current_dir().unwrap().join("./test/snapshots");
    settings.set_snapshot_path(snapshot_path);
    settings.bind(f);
}

fn record_fixture(id: i64, document_name: &str) -> serde_json::Value {
    return json!({
        "id": id,
        "companySigDate": "2022-12-23T11:19:27.017Z",
        "companySignatureName": "Company Inc.",
        "documentName": document_name,
        "documentStatus": "Signed",
        "documentType": "Contract",
        "employeeNumber": format!("{id}00"),
        "employeeSigDate": "2022-12-24T09:00:00.000Z",
        "employeeSignatureName": "J. Doe"
    });
}

/// Three records with ids 7, 8 and 9, as a listing payload.
pub fn record_fixtures() -> serde_json::Value {
    return json!([
        record_fixture(7, "Employment agreement"),
        record_fixture(8, "Non-disclosure agreement"),
        record_fixture(9, "Vacation request"),
    ]);
}

/// Wraps a payload in the API's response envelope.
pub fn envelope(error_code: i64, data: serde_json::Value) -> String {
    return json!({
        "error_code": error_code,
        "error_message": if error_code == 0 { "OK" } else { "Error" },
        "data": data,
    })
    .to_string();
}
