#[cfg(test)]
#[path = "app_state_test.rs"]
mod tests;

use std::time::Instant;

use anyhow::Result;
use tokio::sync::mpsc;
use tui_textarea::Input;
use tui_textarea::Key;

use super::DialogMode;
use super::LoginForm;
use super::RecordDialog;
use super::RecordStore;
use super::RecordTable;
use crate::domain::models::Action;
use crate::domain::models::Event;
use crate::domain::models::Failure;
use crate::domain::models::Notification;
use crate::domain::models::Record;
use crate::domain::models::Route;
use crate::domain::models::Screen;
use crate::domain::models::Session;
use crate::domain::models::LOGIN_PATH;
use crate::domain::models::ROOT_PATH;

/// Everything the UI renders from. Only changed through `handle_event`, the
/// renderers read it immutably.
pub struct AppState<'a> {
    pub dialog: Option<RecordDialog<'a>>,
    pub login: LoginForm<'a>,
    pub notification: Option<Notification>,
    pub route: Route,
    pub session: Session,
    pub store: RecordStore,
    pub table: RecordTable,
    pub table_mounted: bool,
}

impl<'a> AppState<'a> {
    pub fn new(start_path: &str, username: &str) -> AppState<'a> {
        return AppState {
            dialog: None,
            login: LoginForm::new(username),
            notification: None,
            route: Route::new(start_path),
            session: Session::default(),
            store: RecordStore::default(),
            table: RecordTable::default(),
            table_mounted: false,
        };
    }

    pub fn screen(&self) -> Screen {
        return self.route.screen(&self.session);
    }

    /// Mounts the table when it becomes visible, which requests the listing,
    /// and unmounts it when it goes away, which drops records and dialog.
    pub fn sync_route(&mut self, tx: &mpsc::UnboundedSender<Action>) -> Result<()> {
        let on_table = self.screen() == Screen::Table;

        if on_table && !self.table_mounted {
            self.table_mounted = true;
            self.request_listing(tx)?;
        } else if !on_table && self.table_mounted {
            tracing::debug!(path = self.route.path(), "Unmounting record table");
            self.table_mounted = false;
            self.store.clear();
            self.table = RecordTable::default();
            self.dialog = None;
        }

        return Ok(());
    }

    fn request_listing(&mut self, tx: &mpsc::UnboundedSender<Action>) -> Result<()> {
        if let Some(token) = self.session.token() {
            tx.send(Action::ListRecords(token.to_string()))?;
            self.store.begin_loading();
        }

        return Ok(());
    }

    /// A newer failure replaces whatever is currently shown.
    pub fn notify(&mut self, failure: Failure) {
        self.notification = Some(Notification::new(failure));
    }

    pub fn expire_notification(&mut self, now: Instant) {
        if let Some(notification) = &self.notification {
            if notification.is_expired(now) {
                self.notification = None;
            }
        }
    }

    /// Applies an event and dispatches whatever actions it implies. Returns
    /// true when the app should quit.
    pub fn handle_event(
        &mut self,
        event: Event,
        tx: &mpsc::UnboundedSender<Action>,
    ) -> Result<bool> {
        match event {
            Event::KeyboardCTRLC() => {
                return Ok(true);
            }
            Event::UITick() => {
                self.expire_notification(Instant::now());
            }
            Event::KeyboardEsc() => {
                if self.notification.is_some() {
                    self.notification = None;
                } else {
                    self.dialog = None;
                }
            }
            Event::KeyboardCharInput(Input {
                key: Key::Char('l'),
                ctrl: true,
                ..
            }) => {
                self.route.visit(LOGIN_PATH);
                self.sync_route(tx)?;
            }
            Event::KeyboardCharInput(Input {
                key: Key::Char('t'),
                ctrl: true,
                ..
            }) => {
                self.route.visit(ROOT_PATH);
                self.sync_route(tx)?;
            }
            Event::LoginResponse(res) => {
                self.handle_login_response(res, tx)?;
            }
            Event::RecordsLoaded(res) => {
                self.handle_records_loaded(res);
            }
            Event::RecordCreated(res) => match res {
                Ok(record) => {
                    if self.table_mounted {
                        self.store.append(record);
                        self.table.last(&self.store);
                    }
                    self.close_dialog(DialogMode::Create);
                }
                Err(failure) => self.notify(failure),
            },
            Event::RecordUpdated(id, res) => match res {
                Ok(record) => {
                    if self.table_mounted {
                        self.store.replace(id, record);
                    }
                    self.close_dialog(DialogMode::Edit(id));
                }
                Err(failure) => self.notify(failure),
            },
            Event::RecordDeleted(id, res) => match res {
                Ok(()) => {
                    self.store.remove(id);
                    self.table.clamp(&self.store);
                }
                Err(failure) => self.notify(failure),
            },
            event => match self.screen() {
                Screen::Login => self.handle_login_input(event, tx)?,
                Screen::Table => {
                    if self.dialog.is_some() {
                        self.handle_dialog_input(event, tx)?;
                    } else {
                        self.handle_table_input(event, tx)?;
                    }
                }
                Screen::NotFound => (),
            },
        }

        return Ok(false);
    }

    fn handle_login_response(
        &mut self,
        res: Result<String, Failure>,
        tx: &mpsc::UnboundedSender<Action>,
    ) -> Result<()> {
        match res {
            Ok(token) => {
                tracing::info!("Login succeeded");
                self.session.set_token(&token);
                self.login.error = None;
                self.sync_route(tx)?;
            }
            Err(failure) => {
                self.login.error = Some(failure);
            }
        }

        return Ok(());
    }

    fn handle_records_loaded(&mut self, res: Result<Vec<Record>, Failure>) {
        if !self.table_mounted {
            return;
        }

        match res {
            Ok(records) => {
                self.store.replace_all(records);
                self.table.clamp(&self.store);
            }
            Err(failure) => {
                self.store.clear();
                self.table.clamp(&self.store);
                self.notify(failure);
            }
        }
    }

    fn close_dialog(&mut self, mode: DialogMode) {
        if let Some(dialog) = &self.dialog {
            if dialog.mode == mode {
                self.dialog = None;
            }
        }
    }

    fn handle_login_input(
        &mut self,
        event: Event,
        tx: &mpsc::UnboundedSender<Action>,
    ) -> Result<()> {
        match event {
            Event::KeyboardTab()
            | Event::KeyboardBackTab()
            | Event::UIScrollUp()
            | Event::UIScrollDown() => {
                self.login.toggle_focus();
            }
            Event::KeyboardEnter() => {
                tx.send(Action::Login(self.login.credentials()))?;
            }
            Event::KeyboardCharInput(input) => {
                self.login.input(input);
            }
            _ => (),
        }

        return Ok(());
    }

    fn handle_table_input(
        &mut self,
        event: Event,
        tx: &mpsc::UnboundedSender<Action>,
    ) -> Result<()> {
        if self.store.loading {
            return Ok(());
        }

        let token = match self.session.token() {
            Some(token) => token.to_string(),
            None => return Ok(()),
        };

        match event {
            Event::UIScrollUp() => {
                self.table.up();
            }
            Event::UIScrollDown() => {
                self.table.down(&self.store);
            }
            Event::KeyboardEnter()
            | Event::KeyboardCharInput(Input {
                key: Key::Char('e'),
                ctrl: false,
                ..
            }) => {
                if let Some(record) = self.table.selected(&self.store) {
                    self.dialog = Some(RecordDialog::edit(record));
                }
            }
            Event::KeyboardCharInput(Input {
                key: Key::Char('a'),
                ctrl: false,
                ..
            }) => {
                self.dialog = Some(RecordDialog::create());
            }
            Event::KeyboardCharInput(Input {
                key: Key::Char('d'),
                ctrl: false,
                ..
            }) => {
                if let Some(record) = self.table.selected(&self.store) {
                    tx.send(Action::DeleteRecord(token, record.id))?;
                }
            }
            Event::KeyboardCharInput(Input {
                key: Key::Char('r'),
                ctrl: false,
                ..
            }) => {
                tx.send(Action::ListRecords(token))?;
            }
            _ => (),
        }

        return Ok(());
    }

    fn handle_dialog_input(
        &mut self,
        event: Event,
        tx: &mpsc::UnboundedSender<Action>,
    ) -> Result<()> {
        let dialog = match self.dialog.as_mut() {
            Some(dialog) => dialog,
            None => return Ok(()),
        };

        match event {
            Event::KeyboardTab() | Event::UIScrollDown() => {
                dialog.focus_next();
            }
            Event::KeyboardBackTab() | Event::UIScrollUp() => {
                dialog.focus_prev();
            }
            Event::KeyboardCharInput(input) => {
                dialog.input(input);
            }
            Event::KeyboardEnter() => {
                if let Some(token) = self.session.token() {
                    let token = token.to_string();
                    let draft = dialog.draft();
                    let action = match dialog.mode {
                        DialogMode::Create => Action::CreateRecord(token, draft),
                        DialogMode::Edit(id) => Action::UpdateRecord(token, id, draft),
                    };
                    tx.send(action)?;
                }
            }
            _ => (),
        }

        return Ok(());
    }
}
