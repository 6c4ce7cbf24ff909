//! `Bifunctor`: two-channel mapping.
//!
//! `Either` and `Task` carry a value on one of two channels. `Bifunctor`
//! maps a function over each channel independently; the channel a value
//! is on never changes.
//!
//! # Laws
//!
//! ```text
//! bf.bimap(|x| x, |y| y) == bf
//! bf.bimap(|x| f2(f1(x)), |y| g2(g1(y))) == bf.bimap(f1, g1).bimap(f2, g2)
//! bf.bimap(f, g) == bf.first(f).second(g)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use kleisli::typeclass::Bifunctor;
//! use kleisli::control::Either;
//!
//! let failed: Either<i32, String> = Either::Left(21);
//! assert_eq!(Bifunctor::bimap(failed, |code| code * 2, |s: String| s.len()), Either::Left(42));
//! ```

/// Containers whose value sits on one of two channels, each of which can be
/// mapped on its own.
pub trait Bifunctor<A, B> {
    /// The same constructor applied to the transformed parameters.
    type Target<C, D>;

    /// Applies `first_function` to the first channel or `second_function`
    /// to the second.
    fn bimap<C, D, F, G>(self, first_function: F, second_function: G) -> Self::Target<C, D>
    where
        F: FnOnce(A) -> C,
        G: FnOnce(B) -> D;

    /// Maps only the first channel.
    #[inline]
    fn first<C, F>(self, function: F) -> Self::Target<C, B>
    where
        F: FnOnce(A) -> C,
        Self: Sized,
    {
        self.bimap(function, |b| b)
    }

    /// Maps only the second channel.
    #[inline]
    fn second<D, G>(self, function: G) -> Self::Target<A, D>
    where
        G: FnOnce(B) -> D,
        Self: Sized,
    {
        self.bimap(|a| a, function)
    }
}
