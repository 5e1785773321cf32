//! Table output formatting
//!
//! A small row/field builder that is agnostic to row semantics: callers add
//! fields, terminate rows, and render once. Interactive destinations get
//! elastic-tab alignment; piped destinations get raw tab-separated fields so
//! the output stays machine-parseable.

use std::io::{self, Write};

use tabwriter::TabWriter;

/// Row-oriented table builder
pub struct TablePrinter {
    tty: bool,
    rows: Vec<Vec<String>>,
    current: Vec<String>,
}

impl TablePrinter {
    /// Create a printer for an interactive (`tty = true`) or piped destination
    pub fn new(tty: bool) -> Self {
        Self {
            tty,
            rows: Vec::new(),
            current: Vec::new(),
        }
    }

    /// Append a field to the current row
    pub fn add_field(&mut self, value: impl Into<String>) {
        self.current.push(value.into());
    }

    /// Terminate the current row
    pub fn end_row(&mut self) {
        self.rows.push(std::mem::take(&mut self.current));
    }

    /// Write all completed rows to `out` and flush.
    ///
    /// Rendering does not consume the printer; repeated renders of the same
    /// rows produce identical bytes.
    pub fn render<W: Write>(&self, out: W) -> io::Result<()> {
        if self.tty {
            let mut tw = TabWriter::new(out).padding(2);
            self.write_rows(&mut tw)?;
            tw.flush()
        } else {
            let mut out = out;
            self.write_rows(&mut out)?;
            out.flush()
        }
    }

    fn write_rows<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for row in &self.rows {
            writeln!(out, "{}", row.join("\t"))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_to_string(printer: &TablePrinter) -> String {
        let mut buf = Vec::new();
        printer.render(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_piped_output_is_tab_separated() {
        let mut printer = TablePrinter::new(false);
        printer.add_field("NAME");
        printer.add_field("2024-01-15");
        printer.end_row();

        assert_eq!(render_to_string(&printer), "NAME\t2024-01-15\n");
    }

    #[test]
    fn test_tty_output_aligns_columns() {
        let mut printer = TablePrinter::new(true);
        printer.add_field("SHORT");
        printer.add_field("a");
        printer.end_row();
        printer.add_field("A_MUCH_LONGER_NAME");
        printer.add_field("b");
        printer.end_row();

        let output = render_to_string(&printer);
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines.len(), 2);
        assert!(!output.contains('\t'));
        // Both value columns start at the same offset
        assert_eq!(
            lines[0].find('a').unwrap(),
            lines[1].find('b').unwrap()
        );
    }

    #[test]
    fn test_rows_may_have_different_arity() {
        let mut printer = TablePrinter::new(false);
        printer.add_field("A");
        printer.add_field("B");
        printer.add_field("C");
        printer.end_row();
        printer.add_field("D");
        printer.add_field("E");
        printer.end_row();

        assert_eq!(render_to_string(&printer), "A\tB\tC\nD\tE\n");
    }

    #[test]
    fn test_empty_table_renders_nothing() {
        let printer = TablePrinter::new(true);
        assert_eq!(render_to_string(&printer), "");
    }

    #[test]
    fn test_render_is_idempotent() {
        let mut printer = TablePrinter::new(true);
        printer.add_field("NAME");
        printer.add_field("Updated 2024-01-15");
        printer.end_row();

        assert_eq!(render_to_string(&printer), render_to_string(&printer));
    }
}
