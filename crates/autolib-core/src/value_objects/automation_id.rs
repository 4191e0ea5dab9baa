//! Automation ID - 64-bit time-ordered unique identifier
//!
//! Structure:
//! - Bits 63-14: Milliseconds since custom epoch
//! - Bits 13-0:  Sequence number within the same millisecond

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::sync::atomic::{AtomicI64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// Opaque automation identifier (64-bit, time-ordered)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct AutomationId(i64);

impl AutomationId {
    /// Custom epoch: 2025-01-01 00:00:00 UTC (milliseconds)
    pub const EPOCH: i64 = 1_735_689_600_000;

    /// Bits reserved for the per-millisecond sequence
    const SEQ_BITS: u8 = 14;

    /// Create an AutomationId from a raw i64 value
    #[inline]
    pub const fn new(raw: i64) -> Self {
        Self(raw)
    }

    /// Get the inner i64 value
    #[inline]
    pub const fn into_inner(self) -> i64 {
        self.0
    }

    /// Check if the id is zero (uninitialized)
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Extract the embedded timestamp (milliseconds since Unix epoch)
    #[inline]
    pub fn timestamp(&self) -> i64 {
        (self.0 >> Self::SEQ_BITS) + Self::EPOCH
    }

    /// Parse from string representation
    pub fn parse(s: &str) -> Result<Self, AutomationIdParseError> {
        s.parse::<i64>()
            .map(AutomationId)
            .map_err(|_| AutomationIdParseError::InvalidFormat)
    }
}

/// Error when parsing an AutomationId from string
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AutomationIdParseError {
    #[error("invalid automation id format")]
    InvalidFormat,
}

impl fmt::Display for AutomationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for AutomationId {
    fn from(raw: i64) -> Self {
        Self(raw)
    }
}

impl From<AutomationId> for i64 {
    fn from(id: AutomationId) -> Self {
        id.0
    }
}

impl std::str::FromStr for AutomationId {
    type Err = AutomationIdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AutomationId::parse(s)
    }
}

// Serialize as string for JSON (JavaScript number safety)
impl Serialize for AutomationId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0.to_string())
    }
}

// Deserialize from string or number
impl<'de> Deserialize<'de> for AutomationId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{self, Visitor};

        struct IdVisitor;

        impl Visitor<'_> for IdVisitor {
            type Value = AutomationId;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a string or integer representing an automation id")
            }

            fn visit_i64<E>(self, value: i64) -> Result<AutomationId, E>
            where
                E: de::Error,
            {
                Ok(AutomationId(value))
            }

            fn visit_u64<E>(self, value: u64) -> Result<AutomationId, E>
            where
                E: de::Error,
            {
                Ok(AutomationId(value as i64))
            }

            fn visit_str<E>(self, value: &str) -> Result<AutomationId, E>
            where
                E: de::Error,
            {
                value
                    .parse::<i64>()
                    .map(AutomationId)
                    .map_err(|_| de::Error::custom("invalid automation id string"))
            }
        }

        deserializer.deserialize_any(IdVisitor)
    }
}

/// Thread-safe AutomationId generator
///
/// Issues strictly increasing ids: each id is the greater of the current
/// timestamp slot and the previously issued id plus one, committed with a
/// single compare-and-swap.
pub struct AutomationIdGenerator {
    last: AtomicI64,
}

impl AutomationIdGenerator {
    /// Create a new generator
    pub fn new() -> Self {
        Self {
            last: AtomicI64::new(0),
        }
    }

    /// Generate a new unique AutomationId
    pub fn generate(&self) -> AutomationId {
        loop {
            let floor = (Self::now_millis() - AutomationId::EPOCH).max(0) << AutomationId::SEQ_BITS;
            let prev = self.last.load(Ordering::Acquire);
            let next = if floor > prev { floor } else { prev + 1 };

            if self
                .last
                .compare_exchange(prev, next, Ordering::AcqRel, Ordering::Acquire)
                .is_ok()
            {
                return AutomationId::new(next);
            }
            // Another thread won the slot, retry
        }
    }

    /// Current timestamp in milliseconds since Unix epoch
    #[inline]
    fn now_millis() -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as i64)
            .unwrap_or(0)
    }
}

impl Default for AutomationIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}
