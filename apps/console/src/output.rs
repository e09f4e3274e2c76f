//! Writing invoices to a stream.

use std::io::Write;

use factura_core::{CoreError, Invoice, InvoicePrinter, SimplePrinter, TaxRegistry};
use tracing::warn;

use crate::config::OutputFormat;
use crate::error::ConsoleResult;

/// Writes the full receipt (text) or the summary snapshot (JSON).
pub fn write_invoice<W: Write>(
    out: &mut W,
    invoice: &Invoice<'_>,
    registry: &TaxRegistry,
    format: OutputFormat,
) -> ConsoleResult<()> {
    match format {
        OutputFormat::Text => {
            let receipt = SimplePrinter.render(invoice, registry).map_err(log_core)?;
            out.write_all(receipt.as_bytes())?;
        }
        OutputFormat::Json => {
            let summary = invoice.summary().map_err(log_core)?;
            serde_json::to_writer_pretty(&mut *out, &summary)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

/// Writes the subtotal / tax / total block.
pub fn write_totals<W: Write>(out: &mut W, invoice: &Invoice<'_>) -> ConsoleResult<()> {
    let subtotal = invoice.subtotal();
    let total_tax = invoice.total_tax().map_err(log_core)?;
    let total = invoice.total().map_err(log_core)?;

    writeln!(out, "  {:<20} {:>16}", "Subtotal:", subtotal)?;
    writeln!(out, "  {:<20} {:>16}", "Total tax:", total_tax)?;
    writeln!(out, "  {}", "-".repeat(37))?;
    writeln!(out, "  {:<20} {:>16}", "TOTAL:", total)?;
    Ok(())
}

fn log_core(err: CoreError) -> CoreError {
    if let CoreError::MissingTaxRule { category } = &err {
        warn!(%category, "Invoice holds an item without a tax rule");
    }
    err
}

#[cfg(test)]
mod tests {
    use super::*;
    use factura_core::{Category, Item, Money, TaxPolicy, TaxRate};

    #[test]
    fn test_write_totals() {
        let registry = TaxRegistry::standard();
        let mut invoice = Invoice::new(&registry);
        invoice.append(Item::food("Bread", Money::from_units(100)).unwrap());

        let mut out = Vec::new();
        write_totals(&mut out, &invoice).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("$100.00"));
        assert!(text.contains("$5.00"));
        assert!(text.contains("$105.00"));
    }

    #[test]
    fn test_write_totals_missing_rule() {
        let registry = TaxRegistry::empty()
            .with_rule(Category::Food, TaxPolicy::new(TaxRate::from_percent(5)));
        let mut invoice = Invoice::new(&registry);
        invoice.append(Item::clothing("Shirt", Money::from_units(1)).unwrap());

        let mut out = Vec::new();
        let err = write_totals(&mut out, &invoice).unwrap_err();
        assert!(err.to_string().contains("Clothing"));
        assert!(out.is_empty());
    }

    #[test]
    fn test_write_invoice_text_and_json() {
        let registry = TaxRegistry::standard();
        let mut invoice = Invoice::new(&registry);
        invoice.append(Item::electronics("Mouse", Money::from_units(45000)).unwrap());

        let mut text = Vec::new();
        write_invoice(&mut text, &invoice, &registry, OutputFormat::Text).unwrap();
        assert!(String::from_utf8(text).unwrap().contains("Tax (25.0%)"));

        let mut json = Vec::new();
        write_invoice(&mut json, &invoice, &registry, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&json).unwrap();
        assert_eq!(value["total_tax"], 1_125_000);
    }
}
