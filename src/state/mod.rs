//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth` for the session, one module per auth
//! screen flow) and kept as plain structs with plain transitions, so the
//! machines stay natively unit-testable. Pages wrap them in `RwSignal`s;
//! only the session state is app-wide context.

pub mod auth;
pub mod login;
pub mod register;
pub mod verify;
