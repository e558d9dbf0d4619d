//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is plain data updated through transition methods, wrapped in an
//! `RwSignal` by the app root so components can depend on it via context.

pub mod login;
