pub mod create;
pub mod not_found;
pub mod unlock;
