//! Registry error types

use thiserror::Error;

use super::discriminator::Discriminator;

/// Failure raised by a builder while constructing a product
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BuildError {
    #[error("Missing required attribute '{name}'")]
    MissingAttribute { name: String },

    #[error("Invalid attribute '{name}': {message}")]
    InvalidAttribute { name: String, message: String },

    #[error("Invalid attributes: {message}")]
    InvalidAttributes { message: String },
}

impl BuildError {
    pub fn missing_attribute(name: impl Into<String>) -> Self {
        Self::MissingAttribute { name: name.into() }
    }

    pub fn invalid_attribute(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidAttribute {
            name: name.into(),
            message: message.into(),
        }
    }

    pub fn invalid_attributes(message: impl Into<String>) -> Self {
        Self::InvalidAttributes {
            message: message.into(),
        }
    }
}

/// Errors reported by a construction registry to its caller
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("No builder registered for discriminator '{discriminator}'")]
    UnknownDiscriminator { discriminator: Discriminator },

    #[error("Discriminator '{discriminator}' is already registered to variant '{variant}'")]
    DuplicateDiscriminator {
        discriminator: Discriminator,
        variant: String,
    },

    #[error("Builder for discriminator '{discriminator}' failed: {source}")]
    BuilderInvocation {
        discriminator: Discriminator,
        #[source]
        source: BuildError,
    },

    #[error(
        "Builder for discriminator '{discriminator}' produced tag '{actual}', expected '{expected}'"
    )]
    TagMismatch {
        discriminator: Discriminator,
        expected: String,
        actual: String,
    },
}

impl RegistryError {
    pub fn unknown_discriminator(discriminator: impl Into<Discriminator>) -> Self {
        Self::UnknownDiscriminator {
            discriminator: discriminator.into(),
        }
    }

    pub fn duplicate_discriminator(
        discriminator: impl Into<Discriminator>,
        variant: impl Into<String>,
    ) -> Self {
        Self::DuplicateDiscriminator {
            discriminator: discriminator.into(),
            variant: variant.into(),
        }
    }

    pub fn builder_invocation(discriminator: impl Into<Discriminator>, source: BuildError) -> Self {
        Self::BuilderInvocation {
            discriminator: discriminator.into(),
            source,
        }
    }

    pub fn tag_mismatch(
        discriminator: impl Into<Discriminator>,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        Self::TagMismatch {
            discriminator: discriminator.into(),
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    /// The discriminator the failing call was made with
    pub fn discriminator(&self) -> &Discriminator {
        match self {
            Self::UnknownDiscriminator { discriminator }
            | Self::DuplicateDiscriminator { discriminator, .. }
            | Self::BuilderInvocation { discriminator, .. }
            | Self::TagMismatch { discriminator, .. } => discriminator,
        }
    }

    pub fn is_unknown_discriminator(&self) -> bool {
        matches!(self, Self::UnknownDiscriminator { .. })
    }
}
