use anyhow::Result;

use super::build;

#[test]
fn it_does_not_advertise_an_author() {
    assert_eq!(build().get_author(), None);
}

#[test]
fn it_parses_connection_arguments() -> Result<()> {
    let matches = build().try_get_matches_from(vec![
        "docsign",
        "--api-url",
        "http://127.0.0.1:8080",
        "--start-path",
        "/login",
        "-u",
        "demo",
    ])?;

    assert_eq!(
        matches.get_one::<String>("api-url").map(|e| return e.as_str()),
        Some("http://127.0.0.1:8080")
    );
    assert_eq!(
        matches.get_one::<String>("start-path").map(|e| return e.as_str()),
        Some("/login")
    );
    assert_eq!(
        matches.get_one::<String>("username").map(|e| return e.as_str()),
        Some("demo")
    );

    return Ok(());
}
