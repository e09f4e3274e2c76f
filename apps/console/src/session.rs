//! # Interactive Session
//!
//! Line-based menu over any `BufRead` / `Write` pair.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  --- MAIN MENU ---                                                      │
//! │  1. Add item          ──► category ──► name ──► price ──► append       │
//! │  2. List items        ──► items + subtotal                             │
//! │  3. Compute total     ──► subtotal / tax / total                       │
//! │  4. Print invoice     ──► full receipt                                 │
//! │  5. Clear invoice     ──► confirm ──► fresh Invoice, same registry     │
//! │  6. Help                                                               │
//! │  0. Exit              (EOF also exits)                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Bad input and core errors are reported and the menu is shown again.

use std::io::{BufRead, Write};

use factura_core::validation::parse_amount;
use factura_core::{Category, CoreError, Invoice, Item, TaxRegistry};
use tracing::{debug, info};

use crate::config::OutputFormat;
use crate::error::{ConsoleError, ConsoleResult};
use crate::output::{write_invoice, write_totals};

const CONFIRM_ANSWERS: [&str; 4] = ["y", "yes", "s", "si"];

/// One interactive invoicing session.
pub struct Session<'r, R, W> {
    input: R,
    out: W,
    registry: &'r TaxRegistry,
    invoice: Invoice<'r>,
    format: OutputFormat,
}

impl<'r, R: BufRead, W: Write> Session<'r, R, W> {
    pub fn new(input: R, out: W, registry: &'r TaxRegistry, format: OutputFormat) -> Self {
        Session {
            input,
            out,
            registry,
            invoice: Invoice::new(registry),
            format,
        }
    }

    /// The invoice being built.
    pub fn invoice(&self) -> &Invoice<'r> {
        &self.invoice
    }

    /// Runs the menu loop until the user exits or input ends.
    pub fn run(&mut self) -> ConsoleResult<()> {
        info!(invoice_id = %self.invoice.id(), "Interactive session started");

        writeln!(self.out, "========================================")?;
        writeln!(self.out, "   Factura")?;
        writeln!(self.out, "   Interactive Mode")?;
        writeln!(self.out, "========================================")?;

        loop {
            self.show_menu()?;
            let Some(line) = self.read_line()? else {
                writeln!(self.out)?;
                break;
            };

            match line.parse::<u8>() {
                Ok(1) => self.add_item()?,
                Ok(2) => self.list_items()?,
                Ok(3) => self.show_totals()?,
                Ok(4) => self.print_invoice()?,
                Ok(5) => self.clear_invoice()?,
                Ok(6) => self.show_help()?,
                Ok(0) => {
                    writeln!(self.out, "\nThank you for using Factura!")?;
                    break;
                }
                _ => writeln!(
                    self.out,
                    "\nInvalid option. Please choose an option from the menu."
                )?,
            }
        }

        Ok(())
    }

    fn show_menu(&mut self) -> ConsoleResult<()> {
        writeln!(self.out, "\n--- MAIN MENU ---")?;
        writeln!(self.out, "1. Add item to the invoice")?;
        writeln!(self.out, "2. List items")?;
        writeln!(self.out, "3. Compute total")?;
        writeln!(self.out, "4. Print full invoice")?;
        writeln!(self.out, "5. Clear invoice (start over)")?;
        writeln!(self.out, "6. Help")?;
        writeln!(self.out, "0. Exit")?;
        self.prompt("\nChoose an option: ")
    }

    fn add_item(&mut self) -> ConsoleResult<()> {
        writeln!(self.out, "\n--- ADD ITEM ---")?;
        writeln!(self.out, "Choose the item category:")?;
        for (index, category) in Category::ALL.iter().enumerate() {
            match self.registry.lookup(*category) {
                Some(policy) => writeln!(
                    self.out,
                    "{}. {} (VAT: {})",
                    index + 1,
                    category,
                    policy.rate()
                )?,
                None => writeln!(self.out, "{}. {} (no tax rule)", index + 1, category)?,
            }
        }
        writeln!(self.out, "0. Cancel")?;
        self.prompt("\nOption: ")?;

        let Some(choice) = self.read_line()? else {
            return Ok(());
        };
        let category = match choice.parse::<usize>() {
            Ok(0) => {
                writeln!(self.out, "Cancelled.")?;
                return Ok(());
            }
            Ok(n) if n <= Category::ALL.len() => Category::ALL[n - 1],
            _ => {
                writeln!(self.out, "Invalid category.")?;
                return Ok(());
            }
        };

        self.prompt("Item name: ")?;
        let Some(name) = self.read_line()? else {
            return Ok(());
        };

        self.prompt("Item price: ")?;
        let Some(price_text) = self.read_line()? else {
            return Ok(());
        };

        let item = parse_amount(&price_text)
            .map_err(CoreError::from)
            .and_then(|price| Item::new(name, price, category));

        match item {
            Ok(item) => {
                debug!(name = item.name(), %category, price = %item.price(), "Item appended");
                writeln!(self.out, "\nItem added:")?;
                writeln!(self.out, "   {item}")?;
                self.invoice.append(item);
            }
            Err(err) => writeln!(self.out, "Error: {err}")?,
        }
        Ok(())
    }

    fn list_items(&mut self) -> ConsoleResult<()> {
        writeln!(self.out, "\n--- ITEMS ---")?;
        if self.invoice.is_empty() {
            writeln!(self.out, "The invoice has no items.")?;
            return Ok(());
        }

        writeln!(self.out, "Items on the invoice ({}):", self.invoice.count())?;
        writeln!(self.out)?;
        for (index, item) in self.invoice.items().iter().enumerate() {
            writeln!(self.out, "{}. {}", index + 1, item)?;
        }
        writeln!(self.out)?;
        writeln!(self.out, "Subtotal: {}", self.invoice.subtotal())?;
        Ok(())
    }

    fn show_totals(&mut self) -> ConsoleResult<()> {
        writeln!(self.out, "\n--- TOTALS ---")?;
        if self.invoice.is_empty() {
            writeln!(self.out, "The invoice has no items to total.")?;
            return Ok(());
        }

        writeln!(self.out)?;
        let result = write_totals(&mut self.out, &self.invoice);
        self.report(result)
    }

    fn print_invoice(&mut self) -> ConsoleResult<()> {
        writeln!(self.out, "\n--- PRINT INVOICE ---")?;
        if self.invoice.is_empty() {
            writeln!(self.out, "The invoice has no items to print.")?;
            return Ok(());
        }

        let result = write_invoice(&mut self.out, &self.invoice, self.registry, self.format);
        self.report(result)
    }

    fn clear_invoice(&mut self) -> ConsoleResult<()> {
        writeln!(self.out, "\n--- CLEAR INVOICE ---")?;
        self.prompt("Are you sure you want to clear the invoice? (y/n): ")?;

        let answer = self.read_line()?.unwrap_or_default().to_lowercase();
        if CONFIRM_ANSWERS.contains(&answer.as_str()) {
            self.invoice = Invoice::new(self.registry);
            info!(invoice_id = %self.invoice.id(), "Invoice cleared");
            writeln!(self.out, "Invoice cleared. You can start adding items again.")?;
        } else {
            writeln!(self.out, "Cancelled.")?;
        }
        Ok(())
    }

    fn show_help(&mut self) -> ConsoleResult<()> {
        writeln!(self.out, "\n--- HELP ---")?;
        writeln!(self.out, "Factura - Interactive Mode")?;
        writeln!(self.out)?;
        writeln!(self.out, "Build an invoice from items in these categories:")?;
        for (category, policy) in self.registry.rules() {
            writeln!(self.out, "  * {}: VAT {}", category, policy.rate())?;
        }
        writeln!(self.out)?;
        writeln!(self.out, "Options:")?;
        writeln!(self.out, "  1. Add item: adds an item to the invoice")?;
        writeln!(self.out, "  2. List items: shows every item added so far")?;
        writeln!(self.out, "  3. Compute total: subtotal, tax and total")?;
        writeln!(self.out, "  4. Print invoice: the full formatted invoice")?;
        writeln!(self.out, "  5. Clear invoice: starts a new invoice")?;
        writeln!(self.out, "  6. Help: shows this text")?;
        writeln!(self.out, "  0. Exit: ends the session")?;
        writeln!(self.out)?;
        writeln!(self.out, "Prices must be non-negative numbers, e.g. 25000 or 10.50.")?;
        Ok(())
    }

    /// Reports a core failure to the user; anything else ends the session.
    fn report(&mut self, result: ConsoleResult<()>) -> ConsoleResult<()> {
        match result {
            Err(ConsoleError::Core(err)) => {
                writeln!(self.out, "Error: {err}")?;
                writeln!(
                    self.out,
                    "Make sure every item's category has a tax rule configured."
                )?;
                Ok(())
            }
            other => other,
        }
    }

    fn prompt(&mut self, text: &str) -> ConsoleResult<()> {
        write!(self.out, "{text}")?;
        self.out.flush()?;
        Ok(())
    }

    /// Next trimmed input line, or `None` at end of input.
    fn read_line(&mut self) -> ConsoleResult<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use factura_core::{Money, TaxPolicy, TaxRate};
    use std::io::Cursor;

    fn run_script(registry: &TaxRegistry, script: &str) -> (String, usize, Money) {
        let mut out = Vec::new();
        let (count, subtotal) = {
            let mut session =
                Session::new(Cursor::new(script), &mut out, registry, OutputFormat::Text);
            session.run().unwrap();
            (session.invoice().count(), session.invoice().subtotal())
        };
        (String::from_utf8(out).unwrap(), count, subtotal)
    }

    #[test]
    fn test_add_items_and_total() {
        let registry = TaxRegistry::standard();
        let script = "1\n1\nBread\n5000\n1\n3\nLaptop\n1500000\n3\n0\n";
        let (text, count, subtotal) = run_script(&registry, script);

        assert_eq!(count, 2);
        assert_eq!(subtotal, Money::from_units(1505000));
        assert!(text.contains("Item added:"));
        assert!(text.contains("[Electronics] Laptop - $1500000.00"));
        assert!(text.contains("$375250.00"));
        assert!(text.contains("$1880250.00"));
        assert!(text.contains("Thank you for using Factura!"));
    }

    #[test]
    fn test_invalid_inputs_are_reported() {
        let registry = TaxRegistry::standard();
        let script = "9\nabc\n1\n7\n1\n1\n   \n10\n1\n2\nShirt\n-5\n1\n2\nShirt\nten\n0\n";
        let (text, count, _) = run_script(&registry, script);

        assert_eq!(count, 0);
        assert_eq!(text.matches("Invalid option.").count(), 2);
        assert!(text.contains("Invalid category."));
        assert!(text.contains("Error: Invalid item: name is required"));
        assert!(text.contains("Error: Invalid item: price must be between"));
        assert!(text.contains("Error: Invalid item: price has invalid format"));
    }

    #[test]
    fn test_oversized_price_is_rejected_and_totals_still_print() {
        let registry = TaxRegistry::standard();
        let script = "1\n3\nMainframe\n92233720368547758.07\n1\n3\nLaptop\n1000000000000\n3\n4\n0\n";
        let (text, count, subtotal) = run_script(&registry, script);

        assert_eq!(count, 1);
        assert_eq!(subtotal, Money::from_cents(factura_core::MAX_PRICE_CENTS));
        assert!(text.contains("Error: Invalid item: price must be between 0 and 100000000000000"));
        assert!(text.contains("$1250000000000.00"));
        assert!(text.contains("SALES INVOICE"));
    }

    #[test]
    fn test_cancel_add() {
        let registry = TaxRegistry::standard();
        let (text, count, _) = run_script(&registry, "1\n0\n0\n");
        assert_eq!(count, 0);
        assert!(text.contains("Cancelled."));
    }

    #[test]
    fn test_list_items() {
        let registry = TaxRegistry::standard();
        let (text, _, _) = run_script(&registry, "2\n1\n1\nMilk\n3500\n2\n0\n");
        assert!(text.contains("The invoice has no items."));
        assert!(text.contains("Items on the invoice (1):"));
        assert!(text.contains("1. [Food] Milk - $3500.00"));
        assert!(text.contains("Subtotal: $3500.00"));
    }

    #[test]
    fn test_clear_invoice() {
        let registry = TaxRegistry::standard();
        let script = "1\n1\nBread\n5000\n5\nn\n5\nsi\n0\n";
        let (text, count, subtotal) = run_script(&registry, script);
        assert_eq!(count, 0);
        assert!(subtotal.is_zero());
        assert!(text.contains("Cancelled."));
        assert!(text.contains("Invoice cleared."));
    }

    #[test]
    fn test_print_invoice() {
        let registry = TaxRegistry::standard();
        let (text, _, _) = run_script(&registry, "4\n1\n2\nJeans\n80000\n4\n0\n");
        assert!(text.contains("The invoice has no items to print."));
        assert!(text.contains("SALES INVOICE"));
        assert!(text.contains("Tax (19.0%)"));
        assert!(text.contains("$95200.00"));
    }

    #[test]
    fn test_missing_rule_is_reported_not_fatal() {
        let registry = TaxRegistry::empty()
            .with_rule(Category::Food, TaxPolicy::new(TaxRate::from_percent(5)));
        let script = "1\n2\nShirt\n25000\n3\n4\n2\n0\n";
        let (text, count, _) = run_script(&registry, script);

        assert_eq!(count, 1);
        assert!(text.contains("2. Clothing (no tax rule)"));
        assert_eq!(
            text.matches("Error: No tax rule registered for category: Clothing")
                .count(),
            2
        );
        assert!(!text.contains("SALES INVOICE"));
        assert!(text.contains("Subtotal: $25000.00"));
    }

    #[test]
    fn test_help_lists_rates() {
        let registry = TaxRegistry::standard();
        let (text, _, _) = run_script(&registry, "6\n0\n");
        assert!(text.contains("* Food: VAT 5.0%"));
        assert!(text.contains("* Clothing: VAT 19.0%"));
        assert!(text.contains("* Electronics: VAT 25.0%"));
    }

    #[test]
    fn test_eof_ends_session() {
        let registry = TaxRegistry::standard();
        let (_, count, _) = run_script(&registry, "1\n1\nBread\n");
        assert_eq!(count, 0);
    }
}
