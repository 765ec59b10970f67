// SPDX-License-Identifier: GPL-3.0-only

//! Input handling: global hook plus raw-event normalization.
//!
//! The OS-level keyboard hook delivers raw press/release events on its own
//! thread; [`normalizer::Normalizer`] turns them into canonical labels and
//! [`listener::transitions`] bridges them into the UI's message stream.
//! Unmapped keys are dropped here and never reach the key-state tracker.

pub mod listener;
pub mod normalizer;

pub use listener::transitions;
pub use normalizer::Normalizer;
