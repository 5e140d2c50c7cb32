/// Pick a grid shape for a normalized source of `len` characters.
///
/// `cols = floor(sqrt(len))`, `rows = ceil(len / cols)`. Returns `None` when
/// there is nothing to lay out.
pub fn derive_dimensions(len: usize) -> Option<(usize, usize)> {
    if len == 0 {
        return None;
    }
    let mut cols = (len as f64).sqrt() as usize;
    // float sqrt can land one off for large inputs
    while cols * cols > len {
        cols -= 1;
    }
    while (cols + 1) * (cols + 1) <= len {
        cols += 1;
    }
    let rows = len.div_ceil(cols);
    Some((rows, cols))
}
