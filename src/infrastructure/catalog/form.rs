//! Form field catalog
//!
//! Each field type is registered under its own name, which doubles as the
//! field's product tag. Builders receive the whole form item as attributes.

use tracing::debug;

use crate::domain::form::{
    BirthdayField, FieldSpec, FormField, GenderField, PasswordField, UsernameField,
};
use crate::domain::registry::{
    Attributes, BuildError, ConstructionRegistry, DuplicatePolicy, ProductBuilder, RegistryError,
};

/// Form fields are built as trait objects
pub type FieldProduct = Box<dyn FormField>;

/// Builds one field type from a form item's settings
#[derive(Debug, Clone, Copy)]
pub struct FieldBuilder {
    field_type: &'static str,
    construct: fn(FieldSpec) -> FieldProduct,
}

impl FieldBuilder {
    pub fn new(field_type: &'static str, construct: fn(FieldSpec) -> FieldProduct) -> Self {
        Self {
            field_type,
            construct,
        }
    }

    pub fn username() -> Self {
        Self::new(UsernameField::TYPE, |spec| Box::new(UsernameField::new(spec)))
    }

    pub fn password() -> Self {
        Self::new(PasswordField::TYPE, |spec| Box::new(PasswordField::new(spec)))
    }

    pub fn birthday() -> Self {
        Self::new(BirthdayField::TYPE, |spec| Box::new(BirthdayField::new(spec)))
    }

    pub fn gender() -> Self {
        Self::new(GenderField::TYPE, |spec| Box::new(GenderField::new(spec)))
    }
}

impl ProductBuilder<FieldProduct> for FieldBuilder {
    fn variant(&self) -> &str {
        self.field_type
    }

    fn build(&self, attributes: &Attributes) -> Result<FieldProduct, BuildError> {
        let spec: FieldSpec = attributes.deserialize()?;

        if spec.id.trim().is_empty() {
            return Err(BuildError::invalid_attribute("id", "cannot be empty"));
        }

        if let (Some(min), Some(max)) = (spec.min_length, spec.max_length) {
            if min > max {
                return Err(BuildError::invalid_attribute(
                    "minLength",
                    format!("{} is greater than maxLength {}", min, max),
                ));
            }
        }

        if let (Some(min), Some(max)) = (spec.min_date, spec.max_date) {
            if min > max {
                return Err(BuildError::invalid_attribute(
                    "minDate",
                    format!("{} is after maxDate {}", min, max),
                ));
            }
        }

        Ok((self.construct)(spec))
    }
}

pub fn register_form_fields(
    registry: &mut ConstructionRegistry<FieldProduct>,
) -> Result<(), RegistryError> {
    let builders = [
        FieldBuilder::username(),
        FieldBuilder::password(),
        FieldBuilder::birthday(),
        FieldBuilder::gender(),
    ];

    for builder in builders {
        let field_type = builder.field_type;
        registry.register(field_type, builder)?;
        debug!(variant = field_type, "Registered form field builder");
    }

    Ok(())
}

pub fn form_field_registry(
    policy: DuplicatePolicy,
) -> Result<ConstructionRegistry<FieldProduct>, RegistryError> {
    let mut registry = ConstructionRegistry::with_policy(policy);
    register_form_fields(&mut registry)?;
    Ok(registry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::form::FormItem;
    use crate::domain::registry::Product;
    use serde_json::Value;

    #[test]
    fn test_create_from_form_item() {
        let registry = form_field_registry(DuplicatePolicy::Reject).unwrap();
        let item = FormItem::new(
            "password",
            FieldSpec::new("item-id-2").required().with_length(8, 64),
        );

        let field = registry.create(item.discriminator(), &item.attributes().unwrap()).unwrap();
        assert_eq!(field.tag(), "password");
        assert_eq!(field.id(), "item-id-2");
        assert!(field.validate("correct horse").is_ok());
        assert!(field.validate("short").is_err());
    }

    #[test]
    fn test_null_settings_take_defaults() {
        let registry = form_field_registry(DuplicatePolicy::Reject).unwrap();
        let attrs = Attributes::new()
            .with("id", "item-id-4")
            .with("required", Value::Null)
            .with("options", Value::Null);

        let field = registry.create("gender", &attrs).unwrap();
        assert!(!field.spec().required);
        assert!(field.spec().options.is_empty());
        assert!(field.validate("").is_ok());
    }

    #[test]
    fn test_tag_equals_field_type() {
        let registry = form_field_registry(DuplicatePolicy::Reject).unwrap();

        for field_type in ["username", "password", "birthday", "gender"] {
            let attrs = Attributes::new().with("id", "x");
            let field = registry.create(field_type, &attrs).unwrap();
            assert_eq!(field.tag(), field_type);
        }
    }

    #[test]
    fn test_missing_id() {
        let registry = form_field_registry(DuplicatePolicy::Reject).unwrap();

        let error = registry.create("username", &Attributes::new()).unwrap_err();
        assert!(matches!(
            error,
            RegistryError::BuilderInvocation {
                source: BuildError::InvalidAttributes { .. },
                ..
            }
        ));
    }

    #[test]
    fn test_inverted_length_bounds() {
        let registry = form_field_registry(DuplicatePolicy::Reject).unwrap();
        let attrs = Attributes::new()
            .with("id", "user")
            .with("minLength", 10)
            .with("maxLength", 3);

        assert!(registry.create("username", &attrs).is_err());
    }

    #[test]
    fn test_unregistered_field_type() {
        let registry = form_field_registry(DuplicatePolicy::Reject).unwrap();
        let attrs = Attributes::new().with("id", "x");

        assert!(registry
            .create("firstName", &attrs)
            .unwrap_err()
            .is_unknown_discriminator());
    }

    #[test]
    fn test_extra_field_type_can_be_added() {
        let mut registry = form_field_registry(DuplicatePolicy::Reject).unwrap();
        registry
            .register(
                "nickname",
                FieldBuilder::new("nickname", |spec| Box::new(NicknameField { spec })),
            )
            .unwrap();

        let field = registry
            .create("nickname", &Attributes::new().with("id", "nick"))
            .unwrap();
        assert_eq!(field.render(), "nickname nick");
    }

    #[derive(Debug)]
    struct NicknameField {
        spec: FieldSpec,
    }

    impl Product for NicknameField {
        fn tag(&self) -> &str {
            "nickname"
        }
    }

    impl FormField for NicknameField {
        fn spec(&self) -> &FieldSpec {
            &self.spec
        }

        fn render(&self) -> String {
            format!("nickname {}", self.spec.id)
        }

        fn validate_value(&self, _input: &str) -> Result<(), crate::domain::FieldValidationError> {
            Ok(())
        }
    }
}
