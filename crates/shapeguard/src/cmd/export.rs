use crate::cmd::check::resolve_schema;
use crate::cmd::ExportArgs;
use crate::exit::{CliResult, SUCCESS};
use crate::output::{print_document, OutputFormat};

pub fn run(args: ExportArgs, format: OutputFormat) -> CliResult<i32> {
    let (label, schema) = resolve_schema(
        args.schema.as_deref(),
        args.name.as_deref(),
        args.schema_dir.as_deref(),
    )?;
    tracing::debug!(schema = %label, fields = schema.len(), "exporting schema");

    print_document(&schema.to_json_schema(), format);
    Ok(SUCCESS)
}
