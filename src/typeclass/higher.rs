//! Type constructors as traits, via generic associated types.
//!
//! Rust cannot abstract over a type constructor such as `Maybe<_>` directly.
//! [`TypeConstructor`] recovers that ability with a GAT: an implementor names
//! the type it is applied to (`Inner`) and how to re-apply the same
//! constructor to another type (`WithType<B>`). Every other type class in
//! this crate is defined on top of it.
//!
//! # Example
//!
//! ```rust
//! use kleisli::typeclass::TypeConstructor;
//! use kleisli::control::Maybe;
//!
//! fn reshape<T: TypeConstructor>(_value: T) -> T::WithType<String>
//! where
//!     T::WithType<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! let none: Maybe<String> = reshape(Maybe::of(42));
//! assert!(none.is_none());
//! ```

/// A trait representing a type constructor applied to one type.
///
/// # Members
///
/// - `Inner`: the type parameter this constructor is currently applied to.
/// - `WithType<B>`: the same constructor applied to `B`.
///
/// # Laws
///
/// `<F as TypeConstructor>::WithType<F::Inner>` is `F`.
pub trait TypeConstructor {
    /// The carried type, `A` in `Maybe<A>`.
    type Inner;

    /// This constructor with `B` substituted for the carried type.
    type WithType<B>: TypeConstructor<Inner = B>;
}

impl<A> TypeConstructor for Option<A> {
    type Inner = A;
    type WithType<B> = Option<B>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn option_inner_type_is_correct() {
        fn assert_inner<T: TypeConstructor<Inner = i32>>() {}
        assert_inner::<Option<i32>>();
    }

    #[test]
    fn chained_with_type_transformations() {
        type Step1 = <Option<i32> as TypeConstructor>::WithType<String>;
        type Step2 = <Step1 as TypeConstructor>::WithType<bool>;

        fn assert_is_option_bool<T: TypeConstructor<Inner = bool>>() {}
        assert_is_option_bool::<Step2>();
    }
}
