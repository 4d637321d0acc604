//! Text helpers shared by the page and landing extractors

use scraper::{ElementRef, Selector};
use std::sync::LazyLock;

static BOLD_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("b").expect("Failed to parse bold selector - this is a bug"));

/// Concatenates the element's text nodes, each trimmed, skipping blank ones
///
/// `<td> Sender <i>ID</i> </td>` becomes `"SenderID"`: fragments are joined
/// without a separator.
pub fn stripped_text(element: ElementRef<'_>) -> String {
    element
        .text()
        .map(str::trim)
        .filter(|fragment| !fragment.is_empty())
        .collect()
}

/// Label of a header or first cell
///
/// If the cell has a `<b>` descendant, the first one's text is the label (even
/// when it is empty). Otherwise the cell's own text is used.
pub fn label_text(cell: ElementRef<'_>) -> String {
    match cell.select(&BOLD_SELECTOR).next() {
        Some(bold) => stripped_text(bold),
        None => stripped_text(cell),
    }
}
