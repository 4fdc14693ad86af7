/// Holds the last raw date and time strings supplied for one attribute.
///
/// Each fragment keeps the caller's input **verbatim**, including
/// syntactically invalid strings, so rejected input can be shown back exactly
/// as it was typed. `None` means the fragment was never written (or was
/// cleared); readers then fall back to formatting the canonical value.
///
/// # Fields
/// - `date`: The raw date string, e.g. `"25/12/1979"` or `"foo"`.
/// - `time`: The raw time string, e.g. `"03:00"` or `"55:55"`.
///
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Fragments {
    pub date: Option<String>,
    pub time: Option<String>,
}
impl Fragments {
    /// Clears both fragments.
    ///
    /// # Effects
    /// - `date` → `None`
    /// - `time` → `None`
    pub fn clear(&mut self) {
        self.date = None;
        self.time = None;
    }
}
