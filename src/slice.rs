/// Splits `text` into fixed-width parts, widths counted in Unicode scalar
/// values of the decoded text, never bytes. Slices past the end of the text
/// come back empty, matching plain slicing of a too-short line.
pub(crate) fn fixed_slices(text: &str, widths: &[usize]) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    let mut parts = Vec::with_capacity(widths.len());
    let mut position = 0;

    for &width in widths {
        let start = position.min(chars.len());
        let end = (position + width).min(chars.len());
        parts.push(chars[start..end].iter().collect());
        position += width;
    }

    parts
}
