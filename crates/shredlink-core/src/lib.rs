//! UI-free logic for the ShredLink web client.
//!
//! Holds the two page controllers as plain state machines (create a link,
//! unlock a link), form normalization, and the en/fa translation catalog.
//! Nothing in here touches the DOM or the network, so the whole crate is
//! testable with a plain `cargo test`.

pub mod create;
pub mod i18n;
pub mod unlock;

pub use create::{CreateError, CreateFlow, CreateForm, CreateState};
pub use i18n::{tr, Lang, Text};
pub use unlock::{UnlockError, UnlockFlow, UnlockState};
