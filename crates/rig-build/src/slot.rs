//! The fixed set of component slots a build can fill.

use crate::error::BuildError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A component slot in a build.
///
/// The set is closed: a build has exactly these eight slots, each
/// holding at most one part. Variant order is the canonical order used
/// for quote projection and saved records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlotKind {
    Cpu,
    Motherboard,
    Ram,
    Gpu,
    Storage,
    Psu,
    Case,
    Cooling,
}

impl SlotKind {
    /// All slots in canonical order.
    pub const ALL: [SlotKind; 8] = [
        SlotKind::Cpu,
        SlotKind::Motherboard,
        SlotKind::Ram,
        SlotKind::Gpu,
        SlotKind::Storage,
        SlotKind::Psu,
        SlotKind::Case,
        SlotKind::Cooling,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SlotKind::Cpu => "cpu",
            SlotKind::Motherboard => "motherboard",
            SlotKind::Ram => "ram",
            SlotKind::Gpu => "gpu",
            SlotKind::Storage => "storage",
            SlotKind::Psu => "psu",
            SlotKind::Case => "case",
            SlotKind::Cooling => "cooling",
        }
    }

    /// Parse a slot name, tolerating surrounding whitespace and case.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "cpu" => Some(SlotKind::Cpu),
            "motherboard" => Some(SlotKind::Motherboard),
            "ram" => Some(SlotKind::Ram),
            "gpu" => Some(SlotKind::Gpu),
            "storage" => Some(SlotKind::Storage),
            "psu" => Some(SlotKind::Psu),
            "case" => Some(SlotKind::Case),
            "cooling" => Some(SlotKind::Cooling),
            _ => None,
        }
    }

    /// Parse a slot name from an external source, failing loudly on an
    /// unknown name.
    pub fn parse(s: &str) -> Result<Self, BuildError> {
        Self::from_str(s).ok_or_else(|| BuildError::UnknownSlot(s.to_string()))
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SlotKind::Cpu => "CPU",
            SlotKind::Motherboard => "Motherboard",
            SlotKind::Ram => "RAM",
            SlotKind::Gpu => "GPU",
            SlotKind::Storage => "Storage",
            SlotKind::Psu => "Power Supply",
            SlotKind::Case => "Case",
            SlotKind::Cooling => "Cooling",
        }
    }

    /// The slot that must be filled before this one offers candidates.
    ///
    /// Motherboard choice depends on the CPU socket; RAM choice depends
    /// on the motherboard's memory type. Every other slot (cooling
    /// included) is never locked.
    pub fn prerequisite(&self) -> Option<SlotKind> {
        match self {
            SlotKind::Motherboard => Some(SlotKind::Cpu),
            SlotKind::Ram => Some(SlotKind::Motherboard),
            _ => None,
        }
    }

    /// Zero-based position in canonical order.
    pub(crate) fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for SlotKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
