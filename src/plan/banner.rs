//! Distribution banner rendering.
//!
//! Every primary artifact carries the same license banner, emitted as a
//! literal comment at the top of the bundle.

use chrono::Datelike;

/// Current calendar year, for the banner's copyright line.
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

/// Render the license banner.
///
/// The byte layout is fixed; `version` is embedded verbatim. The `/*!`
/// opener marks the comment as a license block so minifiers preserve it.
pub fn render_banner(name: &str, version: &str, author: &str, year: i32) -> String {
    format!(
        "/*!\n * {} v{}\n * (c) {} {}\n * Released under the MIT License.\n */",
        name, version, year, author
    )
}
