use anyhow::Result;
use serde_json::json;
use strum::IntoEnumIterator;

use super::Draft;
use super::DraftField;
use super::FieldKind;
use super::Record;

#[test]
fn it_deserializes_server_record() -> Result<()> {
    let record: Record = serde_json::from_value(json!({
        "id": 7,
        "companySigDate": "2022-12-23T11:19:27.017Z",
        "companySignatureName": "test",
        "documentName": "test",
        "documentStatus": "test",
        "documentType": "test",
        "employeeNumber": "1234",
        "employeeSigDate": "2022-12-23T11:19:27.017Z",
        "employeeSignatureName": "test"
    }))?;

    assert_eq!(record.id, 7);
    assert_eq!(record.fields.employee_number, "1234");
    assert_eq!(record.fields.company_sig_date, "2022-12-23T11:19:27.017Z");

    return Ok(());
}

#[test]
fn it_defaults_missing_fields_to_empty() -> Result<()> {
    let record: Record = serde_json::from_value(json!({"id": 42}))?;

    assert_eq!(record, Record::new(42, Draft::default()));
    return Ok(());
}

#[test]
fn it_serializes_draft_as_camel_case() -> Result<()> {
    let mut draft = Draft::default();
    draft.set(DraftField::DocumentName, "Contract");

    let value = serde_json::to_value(&draft)?;
    assert_eq!(value["documentName"], "Contract");
    assert_eq!(value["employeeSignatureName"], "");
    assert_eq!(value.as_object().unwrap().len(), 8);

    return Ok(());
}

#[test]
fn it_gets_and_sets_every_field() {
    let mut draft = Draft::default();
    for field in DraftField::iter() {
        draft.set(field, field.label());
    }

    for field in DraftField::iter() {
        assert_eq!(draft.get(field), field.label());
    }
    assert_eq!(draft.values().len(), 8);
}

#[test]
fn it_marks_only_dates_as_date_time() {
    let dates = DraftField::iter()
        .filter(|field| return field.kind() == FieldKind::DateTime)
        .collect::<Vec<_>>();

    assert_eq!(
        dates,
        vec![DraftField::CompanySigDate, DraftField::EmployeeSigDate]
    );
}

#[test]
fn it_restricts_date_time_characters() {
    assert!(FieldKind::DateTime.accepts('2'));
    assert!(FieldKind::DateTime.accepts('T'));
    assert!(FieldKind::DateTime.accepts(':'));
    assert!(!FieldKind::DateTime.accepts('a'));
    assert!(!FieldKind::DateTime.accepts(' '));
    assert!(FieldKind::Text.accepts(' '));
}
