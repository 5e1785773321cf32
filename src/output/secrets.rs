//! Secret row formatting

use std::io::Write;

use crate::client::{Secret, Visibility};
use crate::error::{Error, Result};
use crate::output::TablePrinter;

/// Render secrets as a table, one row per secret, in input order.
///
/// Interactive destinations get a `Updated YYYY-MM-DD` date and a visibility
/// phrase; piped destinations get the bare date and the uppercased tag. The
/// visibility column is only emitted for organization-scoped secrets (the
/// tag is empty otherwise).
pub fn render_secrets<W: Write>(secrets: &[Secret], tty: bool, out: W) -> Result<()> {
    let mut table = TablePrinter::new(tty);

    for secret in secrets {
        table.add_field(&secret.name);

        let date = secret.updated_at.format("%Y-%m-%d").to_string();
        if tty {
            table.add_field(format!("Updated {date}"));
        } else {
            table.add_field(date);
        }

        if !secret.visibility.is_empty() {
            if tty {
                let phrase = Visibility::from_tag(&secret.visibility)
                    .map(|v| v.description())
                    .unwrap_or_default();
                table.add_field(phrase);
            } else {
                table.add_field(secret.visibility.to_uppercase());
            }
        }

        table.end_row();
    }

    table.render(out).map_err(Error::Render)
}
