use derive_more::{Display, Error};

/// The error returned by lookups for a key with no entry in the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("no entry found for the requested key")]
pub struct KeyNotFound;
