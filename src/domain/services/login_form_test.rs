use tui_textarea::Input;
use tui_textarea::Key;

use super::LoginFocus;
use super::LoginForm;
use crate::domain::models::Credentials;

fn type_str(form: &mut LoginForm, text: &str) {
    for c in text.chars() {
        form.input(Input {
            key: Key::Char(c),
            ctrl: false,
            alt: false,
        });
    }
}

#[test]
fn it_starts_on_username_when_empty() {
    let form = LoginForm::new("");
    assert_eq!(form.focus, LoginFocus::Username);
    assert_eq!(form.username(), "");
}

#[test]
fn it_starts_on_password_when_prefilled() {
    let form = LoginForm::new("demo");
    assert_eq!(form.focus, LoginFocus::Password);
    assert_eq!(form.username(), "demo");
}

#[test]
fn it_types_into_focused_field() {
    let mut form = LoginForm::new("");
    type_str(&mut form, "demo");
    form.toggle_focus();
    type_str(&mut form, "secret");

    assert_eq!(form.username(), "demo");
    assert_eq!(form.password(), "secret");
}

#[test]
fn it_trims_credentials() {
    let mut form = LoginForm::new("");
    type_str(&mut form, "  demo ");
    form.toggle_focus();
    type_str(&mut form, " demo  ");

    assert_eq!(form.credentials(), Credentials::new("demo", "demo"));
    assert_eq!(form.credentials().username, "demo");
    assert_eq!(form.credentials().password, "demo");
}

#[test]
fn it_ignores_control_chords() {
    let mut form = LoginForm::new("");
    form.input(Input {
        key: Key::Char('l'),
        ctrl: true,
        alt: false,
    });

    assert_eq!(form.username(), "");
}
