use std::fs;
use std::io::Read;
use std::path::Path;

use shapeguard_core::{Record, Schema, SchemaError, SchemaRegistry, Validator};

use crate::cmd::CheckArgs;
use crate::exit::{
    io_error, record_error, schema_error, CliError, CliResult, DATA_INVALID, SUCCESS, USAGE,
};
use crate::output::{print_verdict, OutputFormat, Verdict};

pub fn run(args: CheckArgs, format: OutputFormat) -> CliResult<i32> {
    let (label, schema) = resolve_schema(
        args.schema.as_deref(),
        args.name.as_deref(),
        args.schema_dir.as_deref(),
    )?;
    let validator = Validator::new(schema);

    let record = resolve_record(&args)?;
    let valid = validator.validate(&record);
    tracing::info!(schema = %label, fields = record.len(), valid, "record checked");

    print_verdict(
        &Verdict {
            schema: &label,
            fields: record.len(),
            valid,
        },
        format,
    );

    Ok(if valid { SUCCESS } else { DATA_INVALID })
}

/// Load a schema from a file, or by name from a schema directory.
///
/// Returns a display label alongside the schema.
pub fn resolve_schema(
    file: Option<&Path>,
    name: Option<&str>,
    schema_dir: Option<&Path>,
) -> CliResult<(String, Schema)> {
    if let Some(path) = file {
        let content = fs::read_to_string(path).map_err(|err| {
            io_error(&format!("failed reading schema {}", path.display()), err)
        })?;
        let schema = Schema::parse(&content)
            .map_err(|err| schema_error(&format!("invalid schema {}", path.display()), err))?;
        return Ok((path.display().to_string(), schema));
    }

    let (Some(name), Some(dir)) = (name, schema_dir) else {
        return Err(CliError::new(
            USAGE,
            "a schema is required: pass --schema FILE or --name NAME with --schema-dir DIR",
        ));
    };

    let registry = SchemaRegistry::from_directory(dir)
        .map_err(|err| schema_error("failed loading schema directory", err))?;
    let validator = registry
        .validator(name)
        .ok_or_else(|| schema_error("lookup failed", SchemaError::NoSchema(name.to_string())))?;

    Ok((name.to_string(), validator.schema().clone()))
}

fn resolve_record(args: &CheckArgs) -> CliResult<Record> {
    let content = if let Some(json) = &args.json {
        json.clone()
    } else if let Some(path) = &args.file {
        fs::read_to_string(path)
            .map_err(|err| io_error(&format!("failed reading {}", path.display()), err))?
    } else {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .map_err(|err| io_error("failed reading stdin", err))?;
        buf
    };

    Record::parse(&content).map_err(|err| record_error("invalid record", err))
}
