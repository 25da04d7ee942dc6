use serde::Serialize;
use sg_core::SymbolLayer;
use sg_registry::CodeRegistry;
use sg_style::fetch_style_record;
use sg_symbology::{DroppedLayer, RebuiltLayers, rebuild_layers};

use crate::bootstrap;
use crate::cli::GlobalFlags;
use crate::cli::root_commands::StyleArgs;
use crate::output::output;

#[derive(Debug, Serialize)]
struct StyleResponse {
    key: String,
    /// Legend label, when the key is in the code registry.
    label: Option<String>,
    payload_bytes: usize,
    layers: Vec<SymbolLayer>,
    dropped: Vec<DroppedLayer>,
}

/// Handle `sgsym style`.
pub async fn handle(args: &StyleArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let config = bootstrap::load_config()?;
    let registry = CodeRegistry::builtin()?;
    let styles = bootstrap::open_style_store(&config).await?;

    let record = fetch_style_record(&styles, &args.key)?;
    let RebuiltLayers { layers, dropped } = rebuild_layers(record.decode_layers()?)?;

    output(
        &StyleResponse {
            key: args.key.clone(),
            label: registry.format_label(&args.key, true).ok(),
            payload_bytes: record.payload().len(),
            layers,
            dropped,
        },
        flags.format,
    )
}
