//! Sniffing of the `%PDF-` file header.

const PDF_MARKER: &[u8] = b"%PDF-";

/// Readers tolerate leading junk before the marker, but only this much of it.
const HEADER_WINDOW: usize = 1024;

/// Returns the offset of the `%PDF-` marker if it appears in the first 1KB.
pub fn pdf_header_offset(content: &[u8]) -> Option<usize> {
    let check_len = content.len().min(HEADER_WINDOW);
    content[..check_len]
        .windows(PDF_MARKER.len())
        .position(|w| w == PDF_MARKER)
}

/// Extracts the `major.minor` version that follows the marker, e.g. "1.7".
pub fn pdf_version(content: &[u8]) -> Option<String> {
    let start = pdf_header_offset(content)? + PDF_MARKER.len();
    let version: String = content[start..]
        .iter()
        .take(8)
        .take_while(|b| b.is_ascii_digit() || **b == b'.')
        .map(|&b| b as char)
        .collect();
    if version.is_empty() { None } else { Some(version) }
}
