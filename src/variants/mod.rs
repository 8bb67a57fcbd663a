//! Concrete game variants, each expressed as a symbol enumeration plus a
//! [`GameConfig`](crate::config::GameConfig) value.
pub mod vegetable_fiesta;
