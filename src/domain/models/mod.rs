mod action;
mod api;
mod envelope;
mod event;
mod failure;
mod notification;
mod record;
mod route;
mod session;
mod textarea;

pub use action::*;
pub use api::*;
pub use envelope::*;
pub use event::*;
pub use failure::*;
pub use notification::*;
pub use record::*;
pub use route::*;
pub use session::*;
pub use textarea::*;
