//! Demo mode: prices a fixed sample invoice against the standard registry.

use std::io::Write;

use factura_core::{Invoice, Item, Money, TaxRegistry};
use tracing::{debug, info};

use crate::config::OutputFormat;
use crate::error::ConsoleResult;
use crate::output::{write_invoice, write_totals};

/// Sample items, one block per category.
fn sample_items() -> ConsoleResult<Vec<Item>> {
    Ok(vec![
        Item::food("Whole Wheat Bread", Money::from_units(5000))?,
        Item::food("Whole Milk 1L", Money::from_units(3500))?,
        Item::clothing("Cotton T-Shirt", Money::from_units(25000))?,
        Item::clothing("Denim Jeans", Money::from_units(80000))?,
        Item::electronics("Laptop 15\"", Money::from_units(1500000))?,
        Item::electronics("Wireless Mouse", Money::from_units(45000))?,
    ])
}

/// Runs the demo, writing to `out`.
pub fn run_demo<W: Write>(out: &mut W, format: OutputFormat) -> ConsoleResult<()> {
    let registry = TaxRegistry::standard();
    let mut invoice = Invoice::new(&registry);

    for item in sample_items()? {
        debug!(name = item.name(), category = %item.category(), price = %item.price(), "Item appended");
        invoice.append(item);
    }
    info!(invoice_id = %invoice.id(), items = invoice.count(), "Demo invoice built");

    if format == OutputFormat::Text {
        writeln!(out, "=== Factura Demo ===")?;
        writeln!(out)?;
        writeln!(out, "Items on the invoice:")?;
        for item in invoice.items() {
            writeln!(out, "  - {item}")?;
        }
        writeln!(out)?;
        writeln!(out, "Invoice totals:")?;
        write_totals(out, &invoice)?;
        writeln!(out)?;
    }

    write_invoice(out, &invoice, &registry, format)?;

    if format == OutputFormat::Text {
        writeln!(out)?;
        writeln!(out, "=== Demo complete ===")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_text_output() {
        let mut out = Vec::new();
        run_demo(&mut out, OutputFormat::Text).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("  - [Food] Whole Wheat Bread - $5000.00"));
        assert!(text.contains("Subtotal:"));
        assert!(text.contains("$1658500.00"));
        assert!(text.contains("$406625.00"));
        assert!(text.contains("$2065125.00"));
        assert!(text.contains("SALES INVOICE"));
        assert!(text.trim_end().ends_with("=== Demo complete ==="));
    }

    #[test]
    fn test_demo_json_output() {
        let mut out = Vec::new();
        run_demo(&mut out, OutputFormat::Json).unwrap();

        let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(json["item_count"], 6);
        assert_eq!(json["subtotal"], 165_850_000i64);
        assert_eq!(json["total_tax"], 40_662_500i64);
        assert_eq!(json["total"], 206_512_500i64);
    }
}
