//! Ciphertext block grouping.
//!
//! Enciphered text is traditionally written in blocks of five letters. The
//! engine never does this itself; hosts call [`group_blocks`] on its output.

/// Conventional block size for written ciphertext.
pub const BLOCK_SIZE: usize = 5;

/// Inserts a single space after every `size` characters.
///
/// No trailing space is emitted after the last block. A `size` of 0 returns
/// the text unchanged.
///
/// # Examples
///
/// ```
/// use enigmacrypt::utils::grouping::{group_blocks, BLOCK_SIZE};
///
/// assert_eq!(group_blocks("EVONZYQPOQ", BLOCK_SIZE), "EVONZ YQPOQ");
/// assert_eq!(group_blocks("EVONZYQ", BLOCK_SIZE), "EVONZ YQ");
/// ```
pub fn group_blocks(text: &str, size: usize) -> String {
    if size == 0 {
        return text.to_string();
    }

    let mut grouped = String::with_capacity(text.len() + text.len() / size);
    for (i, c) in text.chars().enumerate() {
        if i > 0 && i % size == 0 {
            grouped.push(' ');
        }
        grouped.push(c);
    }
    grouped
}
