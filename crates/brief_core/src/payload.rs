//! Payload builder: header + one [FILE] block per record.

use crate::record::FileRecord;

/// Maximum number of characters of file content carried into the payload.
pub const EXCERPT_LIMIT: usize = 1000;

/// Assemble the user-message payload for a brief request.
///
/// Output is a pure function of the inputs: a header line naming the folder,
/// then one block per record in input order. No reordering, no deduplication,
/// no validation of the record fields.
pub fn build_payload(folder_name: &str, files: &[FileRecord]) -> String {
    let mut sections = Vec::with_capacity(files.len() + 1);
    sections.push(format!("I need a Project DNA Brief for: {folder_name}\n"));
    for f in files {
        sections.push(format!(
            "---\n[FILE]\nName: {}\nDate: {}\nExcerpt: {}\n\n",
            f.name,
            f.date,
            excerpt(&f.content),
        ));
    }
    sections.concat()
}

/// First `EXCERPT_LIMIT` characters of `content`, unmarked. Counts chars,
/// not bytes, so multibyte content never splits a UTF-8 boundary.
fn excerpt(content: &str) -> &str {
    match content.char_indices().nth(EXCERPT_LIMIT) {
        Some((idx, _)) => &content[..idx],
        None => content,
    }
}
