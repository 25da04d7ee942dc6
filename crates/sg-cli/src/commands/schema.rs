use schemars::schema_for;
use sg_core::Renderer;
use sg_layer::LayerDocument;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::{SchemaArgs, SchemaTarget};
use crate::output::output;

/// Handle `sgsym schema`.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let schema = match args.target {
        SchemaTarget::Layer => schema_for!(LayerDocument),
        SchemaTarget::Renderer => schema_for!(Renderer),
    };
    output(&schema, flags.format)
}
