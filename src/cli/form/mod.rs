//! Form command - assembles a form definition, renders it and validates inputs

use std::collections::HashMap;
use std::path::PathBuf;

use clap::Args;
use tracing::info;

use super::{bootstrap, parse_pair};
use crate::domain::form::FormDefinition;
use crate::infrastructure::catalog::form_field_registry;
use crate::infrastructure::form::{AssembledForm, FormAssembler};

/// Arguments for the form command
#[derive(Args, Clone, Debug)]
pub struct FormArgs {
    /// Path to the JSON form definition
    pub path: PathBuf,

    /// User input as field-id=value; validation runs when any input is given
    #[arg(long = "input", value_parser = parse_pair)]
    pub inputs: Vec<(String, String)>,

    /// Fail on item types with no registered field (overrides config)
    #[arg(long)]
    pub strict: bool,
}

/// Run the form command
pub fn run(args: FormArgs) -> anyhow::Result<()> {
    let config = bootstrap();

    let definition = FormDefinition::from_file(&args.path)?;
    let registry = form_field_registry(config.registry.duplicate_policy)?.freeze();
    let assembler =
        FormAssembler::new(registry).with_skip_unknown(config.form.skip_unknown && !args.strict);

    let form = assembler.assemble(&definition)?;
    info!(
        path = %args.path.display(),
        fields = form.fields.len(),
        skipped = form.skipped.len(),
        "Assembled form"
    );

    for line in form.render() {
        println!("{line}");
    }
    for item in &form.skipped {
        println!("(skipped {} of unknown type '{}')", item.id, item.field_type);
    }

    if args.inputs.is_empty() {
        return Ok(());
    }

    let failures = validation_report(&form, &args.inputs);
    if failures.is_empty() {
        println!("All inputs valid");
        return Ok(());
    }

    for line in &failures {
        println!("{line}");
    }
    anyhow::bail!("{} field(s) failed validation", failures.len())
}

fn validation_report(form: &AssembledForm, inputs: &[(String, String)]) -> Vec<String> {
    let inputs: HashMap<String, String> = inputs.iter().cloned().collect();

    form.validate(&inputs)
        .into_iter()
        .map(|(id, error)| format!("{id}: {error}"))
        .collect()
}
