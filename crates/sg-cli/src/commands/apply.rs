use sg_layer::FileLayerStore;
use sg_registry::CodeRegistry;

use crate::bootstrap;
use crate::cli::GlobalFlags;
use crate::cli::root_commands::ApplyArgs;
use crate::output::output;
use crate::pipeline::{self, ApplyRequest};

/// Handle `sgsym apply`.
pub async fn handle(args: &ApplyArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let config = bootstrap::load_config()?;
    let registry = CodeRegistry::builtin()?;
    let styles = bootstrap::open_style_store(&config).await?;
    let layers = FileLayerStore::new(&config.layers.directory);

    let request = ApplyRequest {
        layer: &args.layer,
        source_field: &args.field,
        code_field: args
            .code_field
            .as_deref()
            .unwrap_or(&config.general.code_field),
        include_code: args.include_code,
    };

    let summary = pipeline::apply(&layers, registry, &styles, &request)?;
    output(&summary, flags.format)
}
