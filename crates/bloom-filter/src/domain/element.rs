//! Canonical representations of values handed to a filter
//!
//! Index strategies never see the value itself, only one of two canonical
//! forms: a byte string to digest, or a non-negative integer to slice.
//! A value must always produce the same forms, otherwise queries stop
//! matching earlier adds.

use std::borrow::Cow;

/// A value that can be added to or queried against a filter
pub trait Element {
    /// Bytes fed to the digest functions
    ///
    /// Integers use their decimal text ("9000"), strings their UTF-8 bytes,
    /// byte slices themselves.
    fn canonical_bytes(&self) -> Cow<'_, [u8]>;

    /// The value as a non-negative integer, when it is one
    fn as_unsigned(&self) -> Option<u128> {
        None
    }
}

impl Element for str {
    fn canonical_bytes(&self) -> Cow<'_, [u8]> {
        Cow::Borrowed(self.as_bytes())
    }
}

impl Element for String {
    fn canonical_bytes(&self) -> Cow<'_, [u8]> {
        Cow::Borrowed(self.as_bytes())
    }
}

impl Element for [u8] {
    fn canonical_bytes(&self) -> Cow<'_, [u8]> {
        Cow::Borrowed(self)
    }
}

impl Element for Vec<u8> {
    fn canonical_bytes(&self) -> Cow<'_, [u8]> {
        Cow::Borrowed(self.as_slice())
    }
}

impl<const N: usize> Element for [u8; N] {
    fn canonical_bytes(&self) -> Cow<'_, [u8]> {
        Cow::Borrowed(self.as_slice())
    }
}

impl Element for char {
    fn canonical_bytes(&self) -> Cow<'_, [u8]> {
        let mut buf = [0u8; 4];
        Cow::Owned(self.encode_utf8(&mut buf).as_bytes().to_vec())
    }
}

/// Booleans digest as "true"/"false" and slice as 1/0
impl Element for bool {
    fn canonical_bytes(&self) -> Cow<'_, [u8]> {
        let text: &'static str = if *self { "true" } else { "false" };
        Cow::Borrowed(text.as_bytes())
    }

    fn as_unsigned(&self) -> Option<u128> {
        Some(u128::from(*self))
    }
}

impl<T: Element + ?Sized> Element for &T {
    fn canonical_bytes(&self) -> Cow<'_, [u8]> {
        (**self).canonical_bytes()
    }

    fn as_unsigned(&self) -> Option<u128> {
        (**self).as_unsigned()
    }
}

macro_rules! impl_element_for_integer {
    ($($int:ty),* $(,)?) => {
        $(
            impl Element for $int {
                fn canonical_bytes(&self) -> Cow<'_, [u8]> {
                    Cow::Owned(self.to_string().into_bytes())
                }

                fn as_unsigned(&self) -> Option<u128> {
                    u128::try_from(*self).ok()
                }
            }
        )*
    };
}

impl_element_for_integer!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);
