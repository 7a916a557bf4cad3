//! Malaysian formatting helpers and form validators shared by client and server.

pub mod format;
pub mod validate;
