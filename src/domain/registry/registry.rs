//! Construction Registry
//!
//! Maps discriminators to product builders. Adding a variant means one
//! `register` call rather than another arm in every `match` that builds
//! products.

use std::collections::HashMap;
use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::attributes::Attributes;
use super::builder::{FnBuilder, ProductBuilder};
use super::discriminator::Discriminator;
use super::error::{BuildError, RegistryError};
use super::product::Product;

/// Builder handle as stored in a registry
pub type SharedBuilder<P> = Arc<dyn ProductBuilder<P>>;

/// What `register` does when the discriminator is already taken
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DuplicatePolicy {
    /// Fail with `DuplicateDiscriminator`, keeping the existing builder
    #[default]
    Reject,
    /// Replace the existing builder
    Replace,
}

/// Outcome of a successful registration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Registration {
    Inserted,
    Replaced,
}

/// Discriminator → builder table with lookup-and-invoke creation
pub struct ConstructionRegistry<P> {
    policy: DuplicatePolicy,
    builders: HashMap<Discriminator, SharedBuilder<P>>,
}

impl<P: Product + 'static> ConstructionRegistry<P> {
    /// Create an empty registry that rejects duplicate registrations
    pub fn new() -> Self {
        Self::with_policy(DuplicatePolicy::default())
    }

    pub fn with_policy(policy: DuplicatePolicy) -> Self {
        Self {
            policy,
            builders: HashMap::new(),
        }
    }

    pub fn policy(&self) -> DuplicatePolicy {
        self.policy
    }

    /// Register a builder under a discriminator, honoring the duplicate policy
    pub fn register<B>(
        &mut self,
        discriminator: impl Into<Discriminator>,
        builder: B,
    ) -> Result<Registration, RegistryError>
    where
        B: ProductBuilder<P> + 'static,
    {
        self.register_shared(discriminator, Arc::new(builder))
    }

    /// Register a closure as the builder for `variant`
    pub fn register_fn<F>(
        &mut self,
        discriminator: impl Into<Discriminator>,
        variant: impl Into<String>,
        build: F,
    ) -> Result<Registration, RegistryError>
    where
        F: Fn(&Attributes) -> Result<P, BuildError> + Send + Sync + 'static,
    {
        self.register(discriminator, FnBuilder::new(variant, build))
    }

    pub fn register_shared(
        &mut self,
        discriminator: impl Into<Discriminator>,
        builder: SharedBuilder<P>,
    ) -> Result<Registration, RegistryError> {
        let discriminator = discriminator.into();

        if self.policy == DuplicatePolicy::Reject {
            if let Some(existing) = self.builders.get(&discriminator) {
                return Err(RegistryError::duplicate_discriminator(
                    discriminator,
                    existing.variant(),
                ));
            }
        }

        Ok(self.insert(discriminator, builder))
    }

    /// Overwrite whatever is registered under `discriminator`, whatever the policy
    pub fn replace<B>(&mut self, discriminator: impl Into<Discriminator>, builder: B) -> Registration
    where
        B: ProductBuilder<P> + 'static,
    {
        self.insert(discriminator.into(), Arc::new(builder))
    }

    /// Remove a registration, returning its builder
    pub fn deregister(&mut self, discriminator: impl Into<Discriminator>) -> Option<SharedBuilder<P>> {
        self.builders.remove(&discriminator.into())
    }

    /// Build a new product of the variant registered under `discriminator`
    pub fn create(
        &self,
        discriminator: impl Into<Discriminator>,
        attributes: &Attributes,
    ) -> Result<P, RegistryError> {
        let discriminator = discriminator.into();

        match self.builders.get(&discriminator) {
            Some(builder) => invoke(&discriminator, builder.as_ref(), attributes),
            None => Err(RegistryError::unknown_discriminator(discriminator)),
        }
    }

    /// Bind a factory that only builds the variant under `discriminator`
    pub fn bind(
        &self,
        discriminator: impl Into<Discriminator>,
    ) -> Result<DedicatedFactory<P>, RegistryError> {
        let discriminator = discriminator.into();

        match self.builders.get(&discriminator) {
            Some(builder) => Ok(DedicatedFactory {
                discriminator,
                builder: Arc::clone(builder),
            }),
            None => Err(RegistryError::unknown_discriminator(discriminator)),
        }
    }

    pub fn contains(&self, discriminator: impl Into<Discriminator>) -> bool {
        self.builders.contains_key(&discriminator.into())
    }

    /// Variant name registered under `discriminator`
    pub fn variant_of(&self, discriminator: impl Into<Discriminator>) -> Option<&str> {
        self.builders
            .get(&discriminator.into())
            .map(|builder| builder.variant())
    }

    pub fn len(&self) -> usize {
        self.builders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.builders.is_empty()
    }

    /// Registered discriminators in ascending order
    pub fn discriminators(&self) -> Vec<&Discriminator> {
        let mut keys: Vec<_> = self.builders.keys().collect();
        keys.sort();
        keys
    }

    /// `(discriminator, variant)` pairs in discriminator order
    pub fn entries(&self) -> Vec<(&Discriminator, &str)> {
        let mut entries: Vec<_> = self
            .builders
            .iter()
            .map(|(d, builder)| (d, builder.variant()))
            .collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries
    }

    /// Stop registration and share the registry read-only
    pub fn freeze(self) -> FrozenRegistry<P> {
        FrozenRegistry {
            inner: Arc::new(self),
        }
    }

    fn insert(&mut self, discriminator: Discriminator, builder: SharedBuilder<P>) -> Registration {
        match self.builders.insert(discriminator, builder) {
            Some(_) => Registration::Replaced,
            None => Registration::Inserted,
        }
    }
}

impl<P: Product + 'static> Default for ConstructionRegistry<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> Clone for ConstructionRegistry<P> {
    fn clone(&self) -> Self {
        Self {
            policy: self.policy,
            builders: self.builders.clone(),
        }
    }
}

impl<P> fmt::Debug for ConstructionRegistry<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut entries: Vec<_> = self
            .builders
            .iter()
            .map(|(d, builder)| (d, builder.variant()))
            .collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));

        f.debug_struct("ConstructionRegistry")
            .field("policy", &self.policy)
            .field("entries", &entries)
            .finish()
    }
}

/// Factory bound to a single registered variant
pub struct DedicatedFactory<P> {
    discriminator: Discriminator,
    builder: SharedBuilder<P>,
}

impl<P: Product> DedicatedFactory<P> {
    pub fn discriminator(&self) -> &Discriminator {
        &self.discriminator
    }

    pub fn variant(&self) -> &str {
        self.builder.variant()
    }

    pub fn create(&self, attributes: &Attributes) -> Result<P, RegistryError> {
        invoke(&self.discriminator, self.builder.as_ref(), attributes)
    }
}

impl<P> Clone for DedicatedFactory<P> {
    fn clone(&self) -> Self {
        Self {
            discriminator: self.discriminator.clone(),
            builder: Arc::clone(&self.builder),
        }
    }
}

impl<P> fmt::Debug for DedicatedFactory<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DedicatedFactory")
            .field("discriminator", &self.discriminator)
            .field("variant", &self.builder.variant())
            .finish()
    }
}

/// Read-only registry that can be cloned across threads
pub struct FrozenRegistry<P> {
    inner: Arc<ConstructionRegistry<P>>,
}

impl<P> Deref for FrozenRegistry<P> {
    type Target = ConstructionRegistry<P>;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl<P> Clone for FrozenRegistry<P> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<P> fmt::Debug for FrozenRegistry<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("FrozenRegistry").field(&self.inner).finish()
    }
}

fn invoke<P: Product>(
    discriminator: &Discriminator,
    builder: &dyn ProductBuilder<P>,
    attributes: &Attributes,
) -> Result<P, RegistryError> {
    let product = builder
        .build(attributes)
        .map_err(|source| RegistryError::builder_invocation(discriminator.clone(), source))?;

    if product.tag() != builder.variant() {
        return Err(RegistryError::tag_mismatch(
            discriminator.clone(),
            builder.variant(),
            product.tag(),
        ));
    }

    Ok(product)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use std::thread;

    #[derive(Debug, Clone, PartialEq)]
    struct Widget {
        tag: String,
        size: u32,
    }

    impl Product for Widget {
        fn tag(&self) -> &str {
            &self.tag
        }
    }

    fn widget_builder(
        variant: &'static str,
        default_size: u32,
    ) -> FnBuilder<impl Fn(&Attributes) -> Result<Widget, BuildError> + Send + Sync> {
        FnBuilder::new(variant, move |attrs: &Attributes| {
            Ok(Widget {
                tag: variant.to_string(),
                size: attrs.u32("size")?.unwrap_or(default_size),
            })
        })
    }

    fn sample_registry() -> ConstructionRegistry<Widget> {
        let mut registry = ConstructionRegistry::new();
        registry.register("small", widget_builder("small", 1)).unwrap();
        registry.register("large", widget_builder("large", 10)).unwrap();
        registry
    }

    #[test]
    fn test_create_registered_variant() {
        let registry = sample_registry();

        let widget = registry.create("large", &Attributes::new()).unwrap();
        assert_eq!(widget.tag(), "large");
        assert_eq!(widget.size, 10);
    }

    #[test]
    fn test_attributes_override_defaults() {
        let registry = sample_registry();

        let widget = registry
            .create("small", &Attributes::new().with("size", 3))
            .unwrap();
        assert_eq!(widget.size, 3);
    }

    #[test]
    fn test_unknown_discriminator() {
        let registry = sample_registry();

        let error = registry.create("medium", &Attributes::new()).unwrap_err();
        assert!(matches!(
            error,
            RegistryError::UnknownDiscriminator { ref discriminator }
                if *discriminator == Discriminator::from("medium")
        ));
    }

    #[test]
    fn test_duplicate_rejected_by_default() {
        let mut registry = sample_registry();

        let result = registry.register("small", widget_builder("small", 5));
        assert!(matches!(
            result,
            Err(RegistryError::DuplicateDiscriminator { .. })
        ));

        // the original builder is still in place
        let widget = registry.create("small", &Attributes::new()).unwrap();
        assert_eq!(widget.size, 1);
    }

    #[test]
    fn test_duplicate_replaced_under_replace_policy() {
        let mut registry = ConstructionRegistry::with_policy(DuplicatePolicy::Replace);

        assert_eq!(
            registry.register("small", widget_builder("small", 1)).unwrap(),
            Registration::Inserted
        );
        assert_eq!(
            registry.register("small", widget_builder("small", 5)).unwrap(),
            Registration::Replaced
        );
        assert_eq!(registry.len(), 1);

        let widget = registry.create("small", &Attributes::new()).unwrap();
        assert_eq!(widget.size, 5);
    }

    #[test]
    fn test_explicit_replace_ignores_policy() {
        let mut registry = sample_registry();

        let outcome = registry.replace("small", widget_builder("small", 7));
        assert_eq!(outcome, Registration::Replaced);
        assert_eq!(registry.create("small", &Attributes::new()).unwrap().size, 7);
    }

    #[test]
    fn test_deregister() {
        let mut registry = sample_registry();

        let removed = registry.deregister("small");
        assert_eq!(removed.map(|b| b.variant().to_string()), Some("small".to_string()));
        assert!(!registry.contains("small"));
        assert!(registry.create("small", &Attributes::new()).is_err());
        assert!(registry.deregister("small").is_none());
    }

    #[test]
    fn test_builder_error_propagates_unmodified() {
        let mut registry: ConstructionRegistry<Widget> = ConstructionRegistry::new();
        registry
            .register_fn("broken", "broken", |_| {
                Err(BuildError::invalid_attribute("size", "too big"))
            })
            .unwrap();

        match registry.create("broken", &Attributes::new()) {
            Err(RegistryError::BuilderInvocation {
                discriminator,
                source,
            }) => {
                assert_eq!(discriminator, Discriminator::from("broken"));
                assert_eq!(source, BuildError::invalid_attribute("size", "too big"));
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_tag_mismatch_is_reported() {
        let mut registry = ConstructionRegistry::new();
        registry
            .register_fn("bus", "bus", |_| {
                Ok(Widget {
                    tag: "truck".to_string(),
                    size: 0,
                })
            })
            .unwrap();

        let error = registry.create("bus", &Attributes::new()).unwrap_err();
        assert!(matches!(error, RegistryError::TagMismatch { .. }));
    }

    #[test]
    fn test_builder_receives_attributes_unchanged() {
        let seen: Arc<Mutex<Option<Attributes>>> = Arc::new(Mutex::new(None));
        let recorder = Arc::clone(&seen);

        let mut registry = ConstructionRegistry::new();
        registry
            .register_fn(1, "recorder", move |attrs| {
                *recorder.lock().unwrap() = Some(attrs.clone());
                Ok(Widget {
                    tag: "recorder".to_string(),
                    size: 0,
                })
            })
            .unwrap();

        let attrs = Attributes::new()
            .with("name", "Patrick")
            .with("unused", serde_json::json!({"nested": [1, 2]}));
        registry.create(1, &attrs).unwrap();

        assert_eq!(seen.lock().unwrap().as_ref(), Some(&attrs));
    }

    #[test]
    fn test_products_are_independent() {
        let registry = sample_registry();
        let attrs = Attributes::new().with("size", 4);

        let first = registry.create("small", &attrs).unwrap();
        let mut second = registry.create("small", &attrs).unwrap();
        assert_eq!(first, second);

        second.size = 99;
        assert_eq!(first.size, 4);
    }

    #[test]
    fn test_entries_are_sorted() {
        let mut registry: ConstructionRegistry<Widget> = ConstructionRegistry::new();
        registry.register(3, widget_builder("three", 0)).unwrap();
        registry.register(1, widget_builder("one", 0)).unwrap();
        registry.register(2, widget_builder("two", 0)).unwrap();

        let entries = registry.entries();
        let variants: Vec<_> = entries.iter().map(|(_, v)| *v).collect();
        assert_eq!(variants, vec!["one", "two", "three"]);
        assert_eq!(registry.variant_of(2), Some("two"));
        assert_eq!(registry.variant_of(4), None);
    }

    #[test]
    fn test_bind_dedicated_factory() {
        let registry = sample_registry();

        let factory = registry.bind("large").unwrap();
        assert_eq!(factory.variant(), "large");
        assert_eq!(factory.create(&Attributes::new()).unwrap().size, 10);

        assert!(registry.bind("medium").unwrap_err().is_unknown_discriminator());
    }

    #[test]
    fn test_dedicated_factory_outlives_deregistration() {
        let mut registry = sample_registry();
        let factory = registry.bind("small").unwrap();

        registry.deregister("small");
        assert!(factory.create(&Attributes::new()).is_ok());
    }

    #[test]
    fn test_frozen_registry_shared_across_threads() {
        let frozen = sample_registry().freeze();

        let handles: Vec<_> = (0..4u32)
            .map(|i| {
                let registry = frozen.clone();
                thread::spawn(move || {
                    registry
                        .create("small", &Attributes::new().with("size", i))
                        .map(|w| w.size)
                })
            })
            .collect();

        let mut sizes: Vec<u32> = handles
            .into_iter()
            .map(|h| h.join().unwrap().unwrap())
            .collect();
        sizes.sort();
        assert_eq!(sizes, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_duplicate_policy_deserialize() {
        let policy: DuplicatePolicy = serde_json::from_str("\"replace\"").unwrap();
        assert_eq!(policy, DuplicatePolicy::Replace);
        assert_eq!(DuplicatePolicy::default(), DuplicatePolicy::Reject);
    }
}
