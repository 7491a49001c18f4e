//! Human-readable share text.

use crate::error::ExportError;
use rig_build::quote::Quote;

/// Build a shareable text summary of a quote.
///
/// One line per part (slot name, label, price) followed by the total.
/// Empty quotes are rejected so collaborators never send a blank
/// message.
pub fn share_text(quote: &Quote) -> Result<String, ExportError> {
    if quote.lines.is_empty() {
        return Err(ExportError::EmptyQuote);
    }

    let mut out = String::from("My RigForge build:\n");
    for line in &quote.lines {
        out.push_str(&format!(
            "- {}: {} ({})\n",
            line.slot.display_name(),
            line.label,
            line.unit_price.display()
        ));
    }
    out.push_str(&format!("Total: {}", quote.total.display()));
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rig_build::prelude::*;

    #[test]
    fn test_share_text_lists_parts_and_total() {
        let mut build = BuildState::new();
        build.select(
            SlotKind::Cpu,
            Part::new(
                "cpu-1",
                SlotKind::Cpu,
                "Ryzen 5 7600",
                "AMD",
                Money::new(22999, Currency::USD),
            ),
        );
        let quote = Quote::project(&build).unwrap();

        let text = share_text(&quote).unwrap();
        assert!(text.contains("- CPU: AMD Ryzen 5 7600 ($229.99)"));
        assert!(text.ends_with("Total: $229.99"));
    }

    #[test]
    fn test_share_text_rejects_empty_quote() {
        let empty = Quote {
            lines: vec![],
            total: Money::zero(Currency::USD),
        };
        assert!(matches!(share_text(&empty), Err(ExportError::EmptyQuote)));
    }
}
