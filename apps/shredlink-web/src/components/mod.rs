pub mod alert;
pub mod button;
pub mod header;
pub mod spinner;

pub use alert::{Alert, AlertVariant};
pub use button::{Button, ButtonVariant};
pub use header::Header;
pub use spinner::Spinner;
