//! Utilities over sequences of [`Optional`] values.

use std::iter::Flatten;

use crate::optional::Optional;

/// Drops the absent entries and unwraps the present ones, keeping their order.
pub fn filter_present_and_unwrap<T, I>(items: I) -> impl Iterator<Item = T>
where
    I: IntoIterator<Item = Optional<T>>,
{
    items.into_iter().flatten()
}

/// Extension methods for any iterator yielding optionals.
pub trait PresentValues<T>: Iterator<Item = Optional<T>> + Sized {
    fn present_values(self) -> Flatten<Self> {
        self.flatten()
    }
    fn count_present(self) -> usize {
        self.filter(Optional::is_present).count()
    }
}

impl<T, I> PresentValues<T> for I where I: Iterator<Item = Optional<T>> {}
