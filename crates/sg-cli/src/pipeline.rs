//! The `apply` run: derive short codes, classify, rebuild, commit.

use std::path::PathBuf;

use anyhow::Context;
use serde::Serialize;
use serde_json::Value;
use sg_layer::{FieldType, LayerError, LayerStore, unique_value_renderer};
use sg_registry::CodeRegistry;
use sg_style::StyleStore;
use sg_symbology::{ClassDrop, Rebuilder};

/// Inputs of one `apply` run.
#[derive(Clone, Debug)]
pub struct ApplyRequest<'a> {
    pub layer: &'a str,
    pub source_field: &'a str,
    pub code_field: &'a str,
    pub include_code: bool,
}

/// One legend class after the rebuild.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ClassSummary {
    pub value: String,
    pub label: String,
    pub layers: usize,
}

/// What an `apply` run changed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ApplySummary {
    pub layer: String,
    pub path: PathBuf,
    pub source_field: String,
    pub code_field: String,
    pub field_created: bool,
    pub rows: usize,
    pub classes: Vec<ClassSummary>,
    pub dropped_layers: Vec<ClassDrop>,
}

/// Run the full symbology update on one layer.
///
/// Nothing is written unless every step succeeds; the layer is committed once,
/// at the end.
pub fn apply(
    layers: &dyn LayerStore,
    registry: &CodeRegistry,
    styles: &dyn StyleStore,
    request: &ApplyRequest<'_>,
) -> anyhow::Result<ApplySummary> {
    let mut document = layers
        .load(request.layer)
        .with_context(|| format!("failed to load layer '{}'", request.layer))?;

    let field_created = match document.add_field(request.code_field, FieldType::Text) {
        Ok(()) => true,
        Err(LayerError::FieldExists { name }) => {
            tracing::warn!(field = %name, "code field already exists; its values will be replaced");
            false
        }
        Err(error) => return Err(error.into()),
    };

    let rows = document
        .calculate_field(request.code_field, request.source_field, |feature, raw| {
            registry
                .classify_value(raw)
                .map(|code| Value::String(code.to_string()))
                .map_err(|error| LayerError::Row {
                    feature: feature.id.to_string(),
                    reason: error.to_string(),
                })
        })
        .context("failed to derive short codes")?;
    tracing::info!(rows, field = request.code_field, "short codes derived");

    let renderer = unique_value_renderer(&document, request.code_field, |code| {
        registry
            .key_for_code(code)
            .map(ToString::to_string)
            .map_err(anyhow::Error::from)
    })?;

    let applied = Rebuilder::new(registry, styles)
        .apply_to_renderer(renderer, request.include_code)
        .context("failed to rebuild symbology")?;

    let classes = applied
        .renderer
        .classes()
        .map(|class| ClassSummary {
            value: class.values.join(", "),
            label: class.label.clone(),
            layers: class.symbol_layers.len(),
        })
        .collect();

    document.renderer = Some(applied.renderer);
    let path = layers
        .commit(request.layer, &document)
        .with_context(|| format!("failed to save layer '{}'", request.layer))?;

    tracing::info!(
        layer = request.layer,
        path = %path.display(),
        dropped = applied.dropped.len(),
        "symbology applied"
    );

    Ok(ApplySummary {
        layer: document.name,
        path,
        source_field: request.source_field.to_string(),
        code_field: request.code_field.to_string(),
        field_created,
        rows,
        classes,
        dropped_layers: applied.dropped,
    })
}

#[cfg(test)]
mod tests {
    use std::fs;

    use pretty_assertions::assert_eq;
    use serde_json::json;
    use sg_layer::{FileLayerStore, LayerDocument};
    use sg_style::MemoryStyleStore;
    use tempfile::TempDir;

    use super::*;

    fn payload(layers: &Value) -> Vec<u8> {
        let mut bytes =
            serde_json::to_vec(&json!({"type": "CIMPolygonSymbol", "symbolLayers": layers}))
                .unwrap();
        bytes.push(0);
        bytes
    }

    fn fill() -> Value {
        json!({
            "type": "CIMSolidFill",
            "enable": true,
            "color": {"type": "CIMRGBColor", "values": [255, 255, 190, 100]}
        })
    }

    fn styles() -> MemoryStyleStore {
        MemoryStyleStore::from_entries([
            ("3.01.10.355", payload(&json!([fill()]))),
            (
                "3.01.15.001",
                payload(&json!([fill(), {"type": "CIMHatchFill", "rotation": 45}])),
            ),
        ])
    }

    fn write_layer(dir: &TempDir, units: &[Value]) {
        let features: Vec<Value> = units
            .iter()
            .enumerate()
            .map(|(i, unit)| json!({"id": i + 1, "attributes": {"SG_UNIT": unit}}))
            .collect();
        let doc = json!({
            "name": "surficial",
            "fields": [{"name": "SG_UNIT", "type": "text"}],
            "features": features
        });
        fs::write(
            dir.path().join("surficial.json"),
            serde_json::to_string_pretty(&doc).unwrap(),
        )
        .unwrap();
    }

    fn request(include_code: bool) -> ApplyRequest<'static> {
        ApplyRequest {
            layer: "surficial",
            source_field: "SG_UNIT",
            code_field: "SYMBOL_CODE",
            include_code,
        }
    }

    fn registry() -> &'static CodeRegistry {
        CodeRegistry::builtin().unwrap()
    }

    #[test]
    fn apply_derives_codes_and_rebuilds_renderer() {
        let dir = TempDir::new().unwrap();
        write_layer(
            &dir,
            &[json!("3.01.15.001"), json!("3.01.10.355"), json!("3.01.15.001")],
        );
        let store = FileLayerStore::new(dir.path());

        let summary = apply(&store, registry(), &styles(), &request(true)).unwrap();

        assert!(summary.field_created);
        assert_eq!(summary.rows, 3);
        assert_eq!(
            summary.classes,
            vec![
                ClassSummary {
                    value: "Isn".into(),
                    label: "Glacier Ice or Snowpack: snowpacks (Isn)".into(),
                    layers: 1,
                },
                ClassSummary {
                    value: "Tv".into(),
                    label: "Glacial sediments: veneer (Tv)".into(),
                    layers: 1,
                },
            ]
        );
        assert_eq!(summary.dropped_layers.len(), 1);
        assert_eq!(summary.dropped_layers[0].key, "3.01.15.001");

        let saved: LayerDocument = store.load("surficial").unwrap();
        let codes: Vec<&Value> = saved
            .features
            .iter()
            .map(|f| &f.attributes["SYMBOL_CODE"])
            .collect();
        assert_eq!(codes, vec![&json!("Isn"), &json!("Tv"), &json!("Isn")]);
        let renderer = saved.renderer.expect("renderer should be saved");
        assert_eq!(renderer.fields, vec!["SYMBOL_CODE".to_string()]);
        assert!(renderer.applied_at.is_some());
    }

    #[test]
    fn rerun_tolerates_existing_code_field() {
        let dir = TempDir::new().unwrap();
        write_layer(&dir, &[json!("3.01.10.355")]);
        let store = FileLayerStore::new(dir.path());

        apply(&store, registry(), &styles(), &request(false)).unwrap();
        let summary = apply(&store, registry(), &styles(), &request(false)).unwrap();

        assert!(!summary.field_created);
        assert_eq!(summary.classes[0].label, "Glacial sediments: veneer");
        assert_eq!(store.load("surficial").unwrap().fields.len(), 2);
    }

    #[test]
    fn unknown_key_leaves_layer_untouched() {
        let dir = TempDir::new().unwrap();
        write_layer(&dir, &[json!("3.01.10.355"), json!("9.99.99.999")]);
        let before = fs::read_to_string(dir.path().join("surficial.json")).unwrap();
        let store = FileLayerStore::new(dir.path());

        let err = apply(&store, registry(), &styles(), &request(true)).unwrap_err();

        assert!(format!("{err:#}").contains("9.99.99.999"));
        let after = fs::read_to_string(dir.path().join("surficial.json")).unwrap();
        assert_eq!(before, after);
    }

    #[test]
    fn missing_style_record_leaves_layer_untouched() {
        let dir = TempDir::new().unwrap();
        write_layer(&dir, &[json!("3.01.12.082")]);
        let before = fs::read_to_string(dir.path().join("surficial.json")).unwrap();
        let store = FileLayerStore::new(dir.path());

        let err = apply(&store, registry(), &styles(), &request(true)).unwrap_err();

        assert!(format!("{err:#}").contains("3.01.12.082"));
        let after = fs::read_to_string(dir.path().join("surficial.json")).unwrap();
        assert_eq!(before, after);
    }

    #[test]
    fn missing_source_field_is_reported() {
        let dir = TempDir::new().unwrap();
        write_layer(&dir, &[json!("3.01.10.355")]);
        let store = FileLayerStore::new(dir.path());
        let request = ApplyRequest {
            source_field: "UNIT",
            ..request(true)
        };

        let err = apply(&store, registry(), &styles(), &request).unwrap_err();
        assert!(format!("{err:#}").contains("UNIT"));
    }

    #[test]
    fn empty_layer_commits_empty_renderer() {
        let dir = TempDir::new().unwrap();
        write_layer(&dir, &[]);
        let store = FileLayerStore::new(dir.path());

        let summary = apply(&store, registry(), &styles(), &request(true)).unwrap();
        assert_eq!(summary.rows, 0);
        assert!(summary.classes.is_empty());
    }
}
