//! Utilities functions which do not linked to domain

#[doc(hidden)]
#[macro_export]
/// Implements `From` trait for newtype-like enum variants
macro_rules! enum_trivial_from_impl {
    ($from:ty => $to:ty:$constructor:ident) => {
        impl From<$from> for $to {
            fn from(val: $from) -> Self {
                Self::$constructor(val)
            }
        }
    };
}

/// Split a single character off the end of a string slice
pub(crate) trait StripChar {
    /// Split into the rest of the string and the last character
    fn split_last(&self) -> Option<(&str, char)>;
}

impl StripChar for str {
    fn split_last(&self) -> Option<(&str, char)> {
        self.char_indices()
            .next_back()
            .map(|(idx, tail)| (&self[..idx], tail))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_tail() {
        assert_eq!("30.5W".split_last(), Some(("30.5", 'W')));
    }

    #[test]
    fn split_tail_empty() {
        assert!("".split_last().is_none());
    }

    #[test]
    fn split_tail_single() {
        assert_eq!("S".split_last(), Some(("", 'S')));
    }

    #[test]
    fn split_tail_multibyte() {
        assert_eq!("12°".split_last(), Some(("12", '°')));
    }
}
