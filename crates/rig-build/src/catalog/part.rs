//! Catalog part record.

use crate::ids::PartId;
use crate::money::{self, Money};
use crate::slot::SlotKind;
use serde::{Deserialize, Serialize};

/// Socket value on a cooler that fits every CPU socket.
pub const UNIVERSAL_SOCKET: &str = "Universal";

/// A part in the catalog.
///
/// Immutable once published; a catalog refresh replaces records rather
/// than mutating them. `id` is stable across refreshes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Part {
    /// Unique part identifier.
    pub id: PartId,
    /// The slot this part fills.
    pub slot: SlotKind,
    /// Part name (e.g., "Ryzen 5 7600").
    pub name: String,
    /// Manufacturer brand.
    pub brand: String,
    /// Image URL, display only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Unit selling price. Dirty feed values deserialize as zero.
    #[serde(default, deserialize_with = "money::deserialize_lenient_price")]
    pub price: Money,
    /// CPU socket, meaningful on cpu, motherboard and cooling parts.
    /// On cooling, `"Universal"` matches any socket.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub socket: Option<String>,
    /// Memory standard, meaningful on motherboard and ram parts.
    #[serde(default, rename = "ramType", skip_serializing_if = "Option::is_none")]
    pub ram_type: Option<String>,
}

impl Part {
    /// Create a new part with no compatibility attributes.
    pub fn new(
        id: impl Into<PartId>,
        slot: SlotKind,
        name: impl Into<String>,
        brand: impl Into<String>,
        price: Money,
    ) -> Self {
        Self {
            id: id.into(),
            slot,
            name: name.into(),
            brand: brand.into(),
            image: None,
            price,
            socket: None,
            ram_type: None,
        }
    }

    /// Set the socket attribute.
    pub fn with_socket(mut self, socket: impl Into<String>) -> Self {
        self.socket = Some(socket.into());
        self
    }

    /// Set the memory standard attribute.
    pub fn with_ram_type(mut self, ram_type: impl Into<String>) -> Self {
        self.ram_type = Some(ram_type.into());
        self
    }

    /// Display label combining brand and name.
    pub fn label(&self) -> String {
        let label = format!("{} {}", self.brand.trim(), self.name.trim());
        label.trim().to_string()
    }

    /// Whether this cooler fits any socket.
    pub fn is_universal_cooler(&self) -> bool {
        self.slot == SlotKind::Cooling
            && self
                .socket
                .as_deref()
                .is_some_and(|s| attr_eq(s, UNIVERSAL_SOCKET))
    }
}

/// Case-insensitive, whitespace-tolerant attribute comparison.
pub(crate) fn attr_eq(a: &str, b: &str) -> bool {
    a.trim().eq_ignore_ascii_case(b.trim())
}
