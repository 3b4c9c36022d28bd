//! Emptiness-as-absence rules for optional arguments.
//!
//! An optional argument that is present but "falsy" (an empty string or a
//! zero number) is treated exactly as if it had been omitted. Partial updates
//! and search filters run every optional argument through [`supplied`] before
//! it reaches the database.

/// A value with a notion of being empty.
pub trait Truthy {
    fn is_truthy(&self) -> bool;
}

impl Truthy for String {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl Truthy for i32 {
    fn is_truthy(&self) -> bool {
        *self != 0
    }
}

impl Truthy for i64 {
    fn is_truthy(&self) -> bool {
        *self != 0
    }
}

/// Keep `value` only if it is present and truthy.
pub fn supplied<T: Truthy>(value: Option<T>) -> Option<T> {
    value.filter(Truthy::is_truthy)
}
