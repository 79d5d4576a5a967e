use std::io::IsTerminal;

use clap::ValueEnum;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use serde::Serialize;
use shapeguard_core::Schema;

#[derive(Clone, Debug, Copy, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Pretty,
    Raw,
}

impl OutputFormat {
    pub fn default_for_stdout() -> Self {
        if std::io::stdout().is_terminal() {
            Self::Table
        } else {
            Self::Json
        }
    }
}

#[derive(Serialize)]
pub struct Verdict<'a> {
    pub schema: &'a str,
    pub fields: usize,
    pub valid: bool,
}

#[derive(Serialize)]
pub struct SchemaSummary<'a> {
    pub name: &'a str,
    pub fields: usize,
    pub schema: serde_json::Value,
}

impl<'a> SchemaSummary<'a> {
    pub fn new(name: &'a str, schema: &Schema) -> Self {
        Self {
            name,
            fields: schema.len(),
            schema: schema.to_json(),
        }
    }
}

pub fn print_verdict(verdict: &Verdict<'_>, format: OutputFormat) {
    match format {
        OutputFormat::Json => print_json_line(verdict),
        OutputFormat::Table => {
            let mut table = new_table(vec!["SCHEMA", "FIELDS", "VALID"]);
            table.add_row(vec![
                verdict.schema.to_string(),
                verdict.fields.to_string(),
                verdict.valid.to_string(),
            ]);
            println!("{table}");
        }
        OutputFormat::Pretty => {
            println!(
                "schema={} fields={} valid={}",
                verdict.schema, verdict.fields, verdict.valid
            );
        }
        OutputFormat::Raw => println!("{}", verdict.valid),
    }
}

pub fn print_schema_list(summaries: &[SchemaSummary<'_>], format: OutputFormat) {
    match format {
        OutputFormat::Json => print_json_line(&summaries),
        OutputFormat::Table => {
            let mut table = new_table(vec!["NAME", "FIELDS", "KINDS"]);
            for summary in summaries {
                table.add_row(vec![
                    summary.name.to_string(),
                    summary.fields.to_string(),
                    kinds_preview(&summary.schema),
                ]);
            }
            println!("{table}");
        }
        OutputFormat::Pretty => {
            for summary in summaries {
                println!(
                    "{} ({} fields): {}",
                    summary.name,
                    summary.fields,
                    kinds_preview(&summary.schema)
                );
            }
        }
        OutputFormat::Raw => {
            for summary in summaries {
                println!("{}", summary.name);
            }
        }
    }
}

/// JSON documents are always printed; `Raw` selects the compact form.
pub fn print_document(document: &serde_json::Value, format: OutputFormat) {
    let rendered = match format {
        OutputFormat::Raw | OutputFormat::Json => serde_json::to_string(document),
        OutputFormat::Table | OutputFormat::Pretty => serde_json::to_string_pretty(document),
    };
    println!("{}", rendered.unwrap_or_else(|_| "{}".to_string()));
}

fn print_json_line<T: Serialize + ?Sized>(value: &T) {
    println!(
        "{}",
        serde_json::to_string(value).unwrap_or_else(|_| "{}".to_string())
    );
}

fn new_table(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header);
    table
}

fn kinds_preview(schema: &serde_json::Value) -> String {
    match schema {
        serde_json::Value::Object(fields) => fields
            .iter()
            .map(|(field, kind)| format!("{field}:{}", kind.as_str().unwrap_or("?")))
            .collect::<Vec<_>>()
            .join(", "),
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use shapeguard_core::Kind;

    use super::*;

    #[test]
    fn verdict_serializes_flat() {
        let verdict = Verdict {
            schema: "laptop",
            fields: 2,
            valid: false,
        };
        let json = serde_json::to_string(&verdict).unwrap();
        assert_eq!(json, r#"{"schema":"laptop","fields":2,"valid":false}"#);
    }

    #[test]
    fn kinds_preview_lists_fields_in_order() {
        let schema = Schema::new()
            .with("model", Kind::String)
            .with("brand", Kind::String)
            .with("tags", Kind::Array);
        let summary = SchemaSummary::new("laptop", &schema);
        assert_eq!(summary.fields, 3);
        assert_eq!(
            kinds_preview(&summary.schema),
            "brand:string, model:string, tags:array"
        );
    }
}
