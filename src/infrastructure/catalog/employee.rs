//! Employee catalog
//!
//! Roles are registered under their numeric codes: 1 Developer, 2 Tester,
//! 3 Designer.

use tracing::debug;

use crate::domain::employee::{Employee, EmployeeRole};
use crate::domain::registry::{
    Attributes, BuildError, ConstructionRegistry, DuplicatePolicy, ProductBuilder, RegistryError,
};

/// Builds employees of a single role from a `name` attribute
#[derive(Debug, Clone, Copy)]
pub struct EmployeeBuilder {
    role: EmployeeRole,
}

impl EmployeeBuilder {
    pub fn new(role: EmployeeRole) -> Self {
        Self { role }
    }
}

impl ProductBuilder<Employee> for EmployeeBuilder {
    fn variant(&self) -> &str {
        self.role.as_str()
    }

    fn build(&self, attributes: &Attributes) -> Result<Employee, BuildError> {
        let name = attributes.required_str("name")?.trim();

        if name.is_empty() {
            return Err(BuildError::invalid_attribute("name", "cannot be empty"));
        }

        Ok(Employee::new(name, self.role))
    }
}

/// Register a builder for every employee role
pub fn register_employees(
    registry: &mut ConstructionRegistry<Employee>,
) -> Result<(), RegistryError> {
    for role in EmployeeRole::ALL {
        registry.register(role.code(), EmployeeBuilder::new(role))?;
        debug!(code = role.code(), variant = role.as_str(), "Registered employee builder");
    }

    Ok(())
}

pub fn employee_registry(
    policy: DuplicatePolicy,
) -> Result<ConstructionRegistry<Employee>, RegistryError> {
    let mut registry = ConstructionRegistry::with_policy(policy);
    register_employees(&mut registry)?;
    Ok(registry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::registry::{Discriminator, Product};

    fn named(name: &str) -> Attributes {
        Attributes::new().with("name", name)
    }

    #[test]
    fn test_create_each_role() {
        let registry = employee_registry(DuplicatePolicy::Reject).unwrap();

        let patrick = registry.create(1, &named("Patrick")).unwrap();
        let john = registry.create(2, &named("John")).unwrap();
        let clara = registry.create(3, &named("Clara")).unwrap();

        assert_eq!(patrick.tag(), "Developer");
        assert_eq!(patrick.name(), "Patrick");
        assert_eq!(john.tag(), "Tester");
        assert_eq!(clara.tag(), "Designer");
        assert_eq!(patrick.greeting(), "Hi, I am Patrick and I am a Developer");
    }

    #[test]
    fn test_unknown_role_code() {
        let registry = employee_registry(DuplicatePolicy::Reject).unwrap();

        let error = registry.create(4, &named("X")).unwrap_err();
        assert!(matches!(
            error,
            RegistryError::UnknownDiscriminator { ref discriminator }
                if *discriminator == Discriminator::Int(4)
        ));
    }

    #[test]
    fn test_string_code_is_not_a_role() {
        let registry = employee_registry(DuplicatePolicy::Reject).unwrap();
        assert!(registry.create("1", &named("Patrick")).is_err());
    }

    #[test]
    fn test_missing_name() {
        let registry = employee_registry(DuplicatePolicy::Reject).unwrap();

        let error = registry.create(1, &Attributes::new()).unwrap_err();
        assert!(matches!(
            error,
            RegistryError::BuilderInvocation {
                source: BuildError::MissingAttribute { .. },
                ..
            }
        ));
    }

    #[test]
    fn test_blank_name() {
        let registry = employee_registry(DuplicatePolicy::Reject).unwrap();
        assert!(registry.create(2, &named("   ")).is_err());
    }

    #[test]
    fn test_registering_twice_fails() {
        let mut registry = employee_registry(DuplicatePolicy::Reject).unwrap();

        let result = register_employees(&mut registry);
        assert!(matches!(
            result,
            Err(RegistryError::DuplicateDiscriminator { .. })
        ));
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn test_registering_twice_with_replace_is_idempotent() {
        let mut registry = employee_registry(DuplicatePolicy::Replace).unwrap();

        register_employees(&mut registry).unwrap();
        assert_eq!(registry.len(), 3);
        assert_eq!(registry.variant_of(1), Some("Developer"));
    }
}
