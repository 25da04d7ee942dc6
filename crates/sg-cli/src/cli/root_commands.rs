use clap::{Args, Subcommand, ValueEnum};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Derive short codes on a layer and rebuild its symbology.
    Apply(ApplyArgs),
    /// Look up one classification key.
    Lookup(LookupArgs),
    /// List the embedded code registry.
    Codes,
    /// Decode and rebuild one style record without touching a layer.
    Style(StyleArgs),
    /// Print the JSON Schema of a document type.
    Schema(SchemaArgs),
}

#[derive(Clone, Debug, Args)]
pub struct ApplyArgs {
    /// Layer name or path to a layer document.
    pub layer: String,
    /// Field holding the classification key of each feature.
    pub field: String,
    /// Append the short code to every legend label.
    #[arg(long)]
    pub include_code: bool,
    /// Derived field name (defaults to `general.code_field`).
    #[arg(long)]
    pub code_field: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct LookupArgs {
    /// Classification key, e.g. 3.01.15.001.
    pub key: String,
    #[arg(long)]
    pub include_code: bool,
}

#[derive(Clone, Debug, Args)]
pub struct StyleArgs {
    /// Classification key naming the style record.
    pub key: String,
}

#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    pub target: SchemaTarget,
}

/// Document types with a published schema.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum SchemaTarget {
    Layer,
    Renderer,
}
