use core::fmt;

use arrayvec::ArrayVec;

/// A word assembled from borrowed parts, such as a stem and a suffix.
#[derive(Clone)]
pub(crate) struct Composite<'a, const N: usize> {
    storage: ArrayVec<&'a str, N>,
}

impl<'a, const N: usize> Composite<'a, N> {
    /// Concatenate the given parts. Empty parts are skipped.
    pub(crate) fn new<I>(iter: I) -> Composite<'a, N>
    where
        I: IntoIterator<Item = &'a str>,
    {
        Composite {
            storage: iter.into_iter().filter(|s| !s.is_empty()).collect(),
        }
    }
}

impl<const N: usize> fmt::Display for Composite<'_, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for string in &self.storage {
            f.write_str(string)?;
        }

        Ok(())
    }
}

impl<const N: usize> fmt::Debug for Composite<'_, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.storage)
    }
}
