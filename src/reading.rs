/// Outcome of reading a kernel source that may not exist on this platform.
///
/// A source that is present but malformed is an error instead, see
/// [`ProbeError`](crate::ProbeError).
#[derive(Debug, Clone, PartialEq)]
pub enum Reading<T> {
    Available(T),
    Unavailable,
}

impl<T> Reading<T> {
    pub fn is_available(&self) -> bool {
        match *self {
            Reading::Available(_) => true,
            Reading::Unavailable => false,
        }
    }

    pub fn available(self) -> Option<T> {
        match self {
            Reading::Available(value) => Some(value),
            Reading::Unavailable => None,
        }
    }
}

impl<T: Default> Reading<T> {
    /// The read value, or the empty/zero value when the source was absent.
    pub fn into_value(self) -> T {
        self.available().unwrap_or_default()
    }
}
