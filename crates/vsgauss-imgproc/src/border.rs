/// Maps index `i` to the nearest valid index in `[0, len)`.
///
/// Out of range coordinates replicate the outermost sample
/// (`...d c b a | a a a a...`), never wrap, reflect or zero pad.
///
/// `len` must be at least 1.
///
/// # Examples
///
/// ```
/// use vsgauss_imgproc::border::clamp_to_edge;
///
/// assert_eq!(clamp_to_edge(-1, 4), 0);
/// assert_eq!(clamp_to_edge(2, 4), 2);
/// assert_eq!(clamp_to_edge(4, 4), 3);
/// ```
#[inline]
pub fn clamp_to_edge(i: isize, len: usize) -> usize {
    i.clamp(0, len as isize - 1) as usize
}
