//! Presence-table rendering for audit reports.

use crate::arch::ARCH_COLUMNS;
use crate::model::BinaryEntry;
use std::fmt::Write;

const NAME_WIDTH: usize = 30;
const ARCH_WIDTH: usize = 8;

/// Render the architecture presence matrix: one row per embedded
/// binary in discovery order, one column per architecture in canonical
/// order, `*` marking presence. Purely a projection of the entries.
pub fn render_presence_table(entries: &[BinaryEntry]) -> String {
    let total = NAME_WIDTH + (ARCH_WIDTH + 1) * ARCH_COLUMNS.len();
    let mut out = String::new();

    let _ = write!(out, "{:<NAME_WIDTH$}", "Framework/Dynamic Library");
    for arch in ARCH_COLUMNS {
        let _ = write!(out, " {:^ARCH_WIDTH$}", arch);
    }
    out.push('\n');
    let _ = writeln!(out, "{:-<total$}", "");

    for entry in entries {
        let name = &entry.name[..entry.name.len().min(NAME_WIDTH)];
        let _ = write!(out, "{:<NAME_WIDTH$}", name);
        for arch in ARCH_COLUMNS {
            let mark = if entry.architectures.contains(arch) {
                "*"
            } else {
                ""
            };
            let _ = write!(out, " {:^ARCH_WIDTH$}", mark);
        }
        out.push('\n');
    }
    let _ = write!(out, "{:-<total$}", "");

    out
}
