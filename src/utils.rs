/// Calculates the 1-based line and column number for a given byte offset in
/// the source text. This function is only called when an error is being
/// reported, so the linear walk over the source is fine.
pub fn line_column(source: &str, offset: usize) -> (usize, usize) {
    let mut line = 1;
    let mut column = 1;
    for (pos, c) in source.char_indices() {
        if pos >= offset {
            break;
        }
        if c == '\n' {
            line += 1;
            column = 1;
        } else {
            column += 1;
        }
    }
    (line, column)
}
