use cosmwasm_std::Timestamp;
use cw_storage_plus::{Item, Map};

use crate::msg::CountersResponse;

pub const CONTRACT_NAME: &str = "crates.io:messaging-mock";
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Seconds between `StartCancellation` and the earliest `CancelMessage`
pub const CANCELLATION_DELAY: Item<u64> = Item::new("cancellation_delay");

/// Invocation counters
pub const COUNTERS: Item<CountersResponse> = Item::new("counters");

/// remote→local message hash => outstanding count
pub const REMOTE_TO_LOCAL: Map<&[u8], u64> = Map::new("remote_to_local");

/// local→remote message hash => outstanding count
pub const LOCAL_TO_REMOTE: Map<&[u8], u64> = Map::new("local_to_remote");

/// local→remote message hash => cancellation start time
pub const CANCELLATIONS: Map<&[u8], Timestamp> = Map::new("cancellations");
