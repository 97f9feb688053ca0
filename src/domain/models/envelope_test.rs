use anyhow::bail;
use anyhow::Result;
use serde_json::json;

use super::Envelope;
use crate::domain::models::ApiError;
use crate::domain::models::Record;

#[test]
fn it_returns_data_on_zero_code() -> Result<()> {
    let envelope = Envelope::parse(r#"{"error_code":0,"data":{"token":"abc123"}}"#)?;
    assert!(envelope.is_success());

    let data: serde_json::Value = envelope.into_data()?;
    assert_eq!(data, json!({"token": "abc123"}));

    return Ok(());
}

#[test]
fn it_rejects_non_zero_code() -> Result<()> {
    let envelope =
        Envelope::parse(r#"{"error_code":2004,"error_text":"Access deny","data":null}"#)?;
    assert!(!envelope.is_success());

    match envelope.into_data::<Vec<Record>>() {
        Err(ApiError::Rejected { code, text }) => {
            assert_eq!(code, 2004);
            assert_eq!(text, "Access deny");
        }
        _ => bail!("Expected a rejection"),
    }

    return Ok(());
}

#[test]
fn it_rejects_non_zero_code_without_data() -> Result<()> {
    let envelope = Envelope::parse(r#"{"error_code":1}"#)?;
    assert!(matches!(
        envelope.into_unit(),
        Err(ApiError::Rejected { code: 1, .. })
    ));

    return Ok(());
}

#[test]
fn it_ignores_payload_for_unit() -> Result<()> {
    let envelope = Envelope::parse(r#"{"error_code":0,"data":{"anything":[1,2]}}"#)?;
    assert!(envelope.into_unit().is_ok());

    return Ok(());
}

#[test]
fn it_fails_on_payload_mismatch() -> Result<()> {
    let envelope = Envelope::parse(r#"{"error_code":0,"data":"not a list"}"#)?;
    assert!(matches!(
        envelope.into_data::<Vec<Record>>(),
        Err(ApiError::Malformed(_))
    ));

    return Ok(());
}

#[test]
fn it_fails_on_missing_code() {
    assert!(matches!(
        Envelope::parse(r#"{"data":[]}"#),
        Err(ApiError::Malformed(_))
    ));
    assert!(matches!(
        Envelope::parse("<html>502</html>"),
        Err(ApiError::Malformed(_))
    ));
}
