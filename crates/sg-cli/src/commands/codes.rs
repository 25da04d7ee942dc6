use sg_registry::CodeRegistry;

use crate::cli::GlobalFlags;
use crate::output::output;

/// Handle `sgsym codes`.
pub fn handle(flags: &GlobalFlags) -> anyhow::Result<()> {
    let registry = CodeRegistry::builtin()?;
    tracing::debug!(
        entries = registry.len(),
        version = sg_registry::SCHEME_VERSION,
        "listing code registry"
    );
    output(&registry.entries(), flags.format)
}
