//! Colored terminal output helpers.
//!
//! All user-facing output goes through these functions so we get
//! consistent styling across every command.

use comfy_table::{ContentArrangement, Table};
use console::style;

use crate::generator::GeneratorProfile;
use crate::vault::VaultEntry;

/// Print a green success message: "check_mark {msg}"
pub fn success(msg: &str) {
    println!("{} {}", style("\u{2713}").green().bold(), msg);
}

/// Print a red error message: "x_mark {msg}"
pub fn error(msg: &str) {
    eprintln!("{} {}", style("\u{2717}").red().bold(), msg);
}

/// Print a yellow warning: "warning_sign {msg}"
pub fn warning(msg: &str) {
    eprintln!("{} {}", style("\u{26a0}").yellow().bold(), msg);
}

/// Print a blue info message: "info_sign {msg}"
pub fn info(msg: &str) {
    println!("{} {}", style("\u{2139}").blue().bold(), msg);
}

/// Print a dim tip/hint: "arrow {msg}"
pub fn tip(msg: &str) {
    println!("{} {}", style("\u{2192}").dim(), style(msg).dim());
}

/// Print the entries table (Index, Title, Username, masked password).
///
/// Passwords are never shown here; `show` and `copy` are the only ways to
/// get one out.
pub fn print_entries_table(entries: &[VaultEntry]) {
    if entries.is_empty() {
        info("No entries in this vault yet.");
        tip("Run `passvault add` to add your first entry.");
        return;
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Index", "Title", "Username", "Password"]);

    for (i, entry) in entries.iter().enumerate() {
        table.add_row(vec![
            (i + 1).to_string(),
            entry.title.clone(),
            entry.username.clone(),
            "*****".to_string(),
        ]);
    }

    println!("{table}");
}

/// Print the generator profiles table (Site, Username, Length, Fingerprint,
/// Created). Fingerprints are shown as a short prefix.
pub fn print_profiles_table(profiles: &[GeneratorProfile]) {
    if profiles.is_empty() {
        info("No generator profiles stored yet.");
        tip("Run `passvault generate --site <SITE> --username <USER> --image <PATH>` to create one.");
        return;
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Site", "Username", "Length", "Fingerprint", "Created"]);

    for p in profiles {
        table.add_row(vec![
            p.site_id.clone(),
            p.username.clone(),
            p.length.to_string(),
            format!("{}\u{2026}", &p.fingerprint.as_str()[..12]),
            p.created_at.format("%Y-%m-%d %H:%M:%S").to_string(),
        ]);
    }

    println!("{table}");
}
