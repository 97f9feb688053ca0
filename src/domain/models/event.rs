use tui_textarea::Input;

use super::Failure;
use super::Record;

#[derive(Debug)]
pub enum Event {
    LoginResponse(Result<String, Failure>),
    RecordsLoaded(Result<Vec<Record>, Failure>),
    RecordCreated(Result<Record, Failure>),
    RecordUpdated(i64, Result<Record, Failure>),
    RecordDeleted(i64, Result<(), Failure>),
    KeyboardBackTab(),
    KeyboardCharInput(Input),
    KeyboardCTRLC(),
    KeyboardEnter(),
    KeyboardEsc(),
    KeyboardTab(),
    UIScrollDown(),
    UIScrollUp(),
    UITick(),
}
