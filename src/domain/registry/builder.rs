//! Product builders

use std::fmt;

use super::attributes::Attributes;
use super::error::BuildError;

/// Constructs one product variant from caller-supplied attributes
pub trait ProductBuilder<P>: Send + Sync {
    /// Variant name every product from this builder is tagged with
    fn variant(&self) -> &str;

    /// Build a new product. Validation of the attributes is the builder's job.
    fn build(&self, attributes: &Attributes) -> Result<P, BuildError>;
}

/// Builder backed by a closure
pub struct FnBuilder<F> {
    variant: String,
    build: F,
}

impl<F> FnBuilder<F> {
    pub fn new(variant: impl Into<String>, build: F) -> Self {
        Self {
            variant: variant.into(),
            build,
        }
    }
}

impl<P, F> ProductBuilder<P> for FnBuilder<F>
where
    F: Fn(&Attributes) -> Result<P, BuildError> + Send + Sync,
{
    fn variant(&self) -> &str {
        &self.variant
    }

    fn build(&self, attributes: &Attributes) -> Result<P, BuildError> {
        (self.build)(attributes)
    }
}

impl<F> fmt::Debug for FnBuilder<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnBuilder")
            .field("variant", &self.variant)
            .finish_non_exhaustive()
    }
}
