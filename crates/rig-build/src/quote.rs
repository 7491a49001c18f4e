//! Quote projection.
//!
//! Derives an ordered, exportable line-item summary from a build. The
//! result is a materialized snapshot: later build mutations do not
//! affect a quote already projected.

use crate::build::BuildState;
use crate::error::BuildError;
use crate::money::Money;
use crate::slot::SlotKind;
use serde::{Deserialize, Serialize};

/// One quoted line, for one filled slot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QuoteLine {
    /// The slot this line covers.
    pub slot: SlotKind,
    /// Display label, brand plus part name.
    pub label: String,
    /// Unit price at projection time.
    pub unit_price: Money,
    /// Always 1 in this domain: a build holds one part per slot.
    pub quantity: i64,
    /// unit_price * quantity.
    pub subtotal: Money,
}

/// An exportable summary of a build: lines in canonical slot order plus
/// the grand total.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Quote {
    /// One line per filled slot, in canonical order.
    pub lines: Vec<QuoteLine>,
    /// Sum of all subtotals; equals the build total.
    pub total: Money,
}

impl Quote {
    /// Project a build into a quote.
    ///
    /// Lines appear in canonical slot order regardless of the order
    /// selections were made in. An empty build yields
    /// `BuildError::EmptyBuild` so callers never hand an empty quote to
    /// export or share collaborators.
    pub fn project(state: &BuildState) -> Result<Quote, BuildError> {
        if state.is_empty() {
            return Err(BuildError::EmptyBuild);
        }

        let mut lines = Vec::with_capacity(state.selected_count());
        for (slot, part) in state.selections() {
            let quantity = 1;
            let subtotal = part
                .price
                .try_multiply(quantity)
                .ok_or(BuildError::Overflow)?;
            lines.push(QuoteLine {
                slot,
                label: part.label(),
                unit_price: part.price,
                quantity,
                subtotal,
            });
        }

        let currency = lines[0].subtotal.currency;
        let total = Money::try_sum(lines.iter().map(|l| &l.subtotal), currency)
            .ok_or(BuildError::Overflow)?;

        Ok(Quote { lines, total })
    }

    /// Number of quoted lines.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }
}
