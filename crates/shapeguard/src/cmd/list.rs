use shapeguard_core::SchemaRegistry;

use crate::cmd::ListArgs;
use crate::exit::{schema_error, CliResult, SUCCESS};
use crate::output::{print_schema_list, OutputFormat, SchemaSummary};

pub fn run(args: ListArgs, format: OutputFormat) -> CliResult<i32> {
    let registry = SchemaRegistry::from_directory(&args.schema_dir)
        .map_err(|err| schema_error("failed loading schema directory", err))?;

    let summaries: Vec<SchemaSummary<'_>> = registry
        .names()
        .into_iter()
        .filter_map(|name| {
            registry
                .validator(name)
                .map(|validator| SchemaSummary::new(name, validator.schema()))
        })
        .collect();

    print_schema_list(&summaries, format);
    Ok(SUCCESS)
}
