pub mod actions;
mod app_state;
pub mod events;
mod login_form;
mod record_dialog;
mod record_store;
mod record_table;

pub use app_state::*;
pub use login_form::*;
pub use record_dialog::*;
pub use record_store::*;
pub use record_table::*;
