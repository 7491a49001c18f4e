//! Quote document export.

use crate::error::ExportError;
use rig_build::quote::Quote;

/// A rendered quote document, ready for delivery.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportedDocument {
    /// Suggested file name.
    pub file_name: String,
    /// MIME type of the rendered bytes.
    pub mime_type: String,
    /// The document body.
    pub bytes: Vec<u8>,
}

/// Renders a projected quote into a document.
///
/// Implementations must reject a quote with no lines via
/// [`ExportError::EmptyQuote`] rather than produce a blank document.
pub trait QuoteExporter {
    fn export(&self, quote: &Quote) -> Result<ExportedDocument, ExportError>;
}

/// Plain-text quote renderer.
///
/// One line per quoted part, aligned total at the bottom.
#[derive(Debug, Clone, Default)]
pub struct TextQuoteExporter {
    /// Heading placed at the top of the document.
    pub title: Option<String>,
}

impl TextQuoteExporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
        }
    }
}

impl QuoteExporter for TextQuoteExporter {
    fn export(&self, quote: &Quote) -> Result<ExportedDocument, ExportError> {
        if quote.lines.is_empty() {
            return Err(ExportError::EmptyQuote);
        }

        let mut out = String::new();
        if let Some(title) = &self.title {
            out.push_str(title);
            out.push('\n');
            out.push_str(&"=".repeat(title.chars().count()));
            out.push('\n');
        }

        for line in &quote.lines {
            out.push_str(&format!(
                "{:<14} {:<40} {:>14}\n",
                line.slot.display_name(),
                line.label,
                line.subtotal.display()
            ));
        }
        out.push_str(&format!(
            "{:<55} {:>14}\n",
            "Total",
            quote.total.display()
        ));

        Ok(ExportedDocument {
            file_name: "quote.txt".to_string(),
            mime_type: "text/plain".to_string(),
            bytes: out.into_bytes(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rig_build::prelude::*;

    fn sample_quote() -> Quote {
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
        build.select(
            SlotKind::Gpu,
            Part::new(
                "gpu-1",
                SlotKind::Gpu,
                "RTX 4070",
                "NVIDIA",
                Money::new(59999, Currency::USD),
            ),
        );
        Quote::project(&build).unwrap()
    }

    #[test]
    fn test_rejects_empty_quote() {
        let empty = Quote {
            lines: vec![],
            total: Money::zero(Currency::USD),
        };
        let exporter = TextQuoteExporter::new();
        assert!(matches!(exporter.export(&empty), Err(ExportError::EmptyQuote)));
    }

    #[test]
    fn test_renders_lines_and_total() {
        let exporter = TextQuoteExporter::with_title("RigForge Quote");
        let doc = exporter.export(&sample_quote()).unwrap();

        assert_eq!(doc.mime_type, "text/plain");
        let text = String::from_utf8(doc.bytes).unwrap();
        assert!(text.starts_with("RigForge Quote\n"));
        assert!(text.contains("AMD Ryzen 5 7600"));
        assert!(text.contains("NVIDIA RTX 4070"));
        assert!(text.contains("$829.98"));
    }
}
