//! Messaging transport mock.
//!
//! Stands in for the cross-domain transport in tests. It keeps a count of
//! outstanding messages per message hash in both directions and exposes
//! hooks to play the remote side: inject a remote→local message, or mark a
//! local→remote message as processed.

pub mod contract;
pub mod error;
pub mod msg;
pub mod state;
