use serde::Serialize;
use sg_registry::CodeRegistry;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::LookupArgs;
use crate::output::output;

#[derive(Debug, Serialize)]
struct LookupResponse<'a> {
    key: &'a str,
    short_code: &'a str,
    description: &'a str,
    label: String,
}

/// Handle `sgsym lookup`.
pub fn handle(args: &LookupArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let registry = CodeRegistry::builtin()?;
    let entry = registry.entry(&args.key)?;
    output(
        &LookupResponse {
            key: entry.key.as_str(),
            short_code: entry.short_code.as_str(),
            description: &entry.description,
            label: entry.label(args.include_code),
        },
        flags.format,
    )
}
