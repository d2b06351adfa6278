//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (routing, alerts) behind small
//! traits so page logic can be tested with plain doubles.

pub mod navigation;
pub mod notify;
