//! Product trait

use std::fmt::Debug;

/// A value built by a registry, tagged with the variant that produced it
pub trait Product: Debug + Send + Sync {
    /// Variant name of this product (e.g. "Developer", "car")
    fn tag(&self) -> &str;
}

impl<T: Product + ?Sized> Product for Box<T> {
    fn tag(&self) -> &str {
        (**self).tag()
    }
}
