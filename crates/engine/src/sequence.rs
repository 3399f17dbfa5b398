// crates/engine/src/sequence.rs
//! Pull-based, restartable sequences.
//!
//! A [`Sequence`] is a description of a pass, not the pass itself. Every call
//! to [`Sequence::cursor`] starts a fresh pass from the root of the pipeline;
//! a cursor is an ordinary [`Iterator`] whose `next` either yields the next
//! element or signals exhaustion with `None`.

/// Something that can produce independent passes over its elements.
pub trait Sequence {
    type Item;

    /// The single-pass puller produced by [`Sequence::cursor`].
    type Cursor<'a>: Iterator<Item = Self::Item>
    where
        Self: 'a;

    /// Starts a new pass. Creating a cursor pulls nothing.
    fn cursor(&self) -> Self::Cursor<'_>;
}

impl<S: Sequence + ?Sized> Sequence for &S {
    type Item = S::Item;
    type Cursor<'a>
        = S::Cursor<'a>
    where
        Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        (**self).cursor()
    }
}
