//! Create command - builds one product from a catalog

use clap::Args;
use serde_json::Value;
use tracing::info;

use super::{bootstrap, parse_pair};
use crate::domain::registry::{Attributes, Discriminator};
use crate::infrastructure::catalog::{Catalog, Catalogs};

/// Arguments for the create command
#[derive(Args, Clone, Debug)]
pub struct CreateArgs {
    /// Catalog to build from (employees, vehicles, gadgets, cars, form-fields)
    pub catalog: Catalog,

    /// Discriminator; integers select integer keys, anything else a string key
    pub discriminator: Discriminator,

    /// Attribute as key=value; values that parse as JSON keep their JSON type
    #[arg(long = "attr", value_parser = parse_pair)]
    pub attrs: Vec<(String, String)>,

    /// Attributes as a JSON object, applied before --attr values
    #[arg(long)]
    pub json: Option<String>,
}

/// Run the create command
pub fn run(args: CreateArgs) -> anyhow::Result<()> {
    let config = bootstrap();
    let catalogs = Catalogs::build(config.registry.duplicate_policy)?;

    let attributes = attributes(&args)?;
    info!(
        catalog = %args.catalog,
        discriminator = %args.discriminator,
        attributes = attributes.len(),
        "Creating product"
    );

    let created = catalogs.create(args.catalog, args.discriminator, &attributes)?;
    println!("{}", serde_json::to_string_pretty(&created)?);

    Ok(())
}

fn attributes(args: &CreateArgs) -> anyhow::Result<Attributes> {
    let mut attributes = match &args.json {
        Some(raw) => Attributes::from_value(serde_json::from_str(raw)?)?,
        None => Attributes::new(),
    };

    for (key, raw) in &args.attrs {
        attributes.insert(key.clone(), attribute_value(raw));
    }

    Ok(attributes)
}

fn attribute_value(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}
