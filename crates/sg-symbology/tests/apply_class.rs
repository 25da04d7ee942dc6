//! Rebuilding classes against the embedded registry and in-memory style records.

use std::cell::Cell;

use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use sg_core::{LayerKind, RenderClass, RenderGroup, Renderer, SymbolLayer};
use sg_registry::{CodeRegistry, RegistryError};
use sg_style::{MemoryStyleStore, StyleError, StyleStore};
use sg_symbology::{Rebuilder, SymbologyError};

fn registry() -> &'static CodeRegistry {
    CodeRegistry::builtin().unwrap()
}

fn fill() -> Value {
    json!({
        "type": "CIMSolidFill",
        "enable": true,
        "colorLocked": false,
        "color": {"type": "CIMRGBColor", "values": [230, 230, 230, 100]}
    })
}

fn marker() -> Value {
    json!({
        "type": "CIMCharacterMarker",
        "enable": true,
        "anchorPoint": {"x": 0, "y": 0},
        "anchorPointUnits": "Relative",
        "dominantSizeAxis3D": "Y",
        "size": 8,
        "billboardMode3D": "FaceNearPlane",
        "markerPlacement": {"type": "CIMMarkerPlacementInsidePolygon", "stepX": 16, "stepY": 16},
        "characterIndex": 105,
        "fontFamilyName": "GSC Surficial",
        "fontStyleName": "Regular",
        "fontType": "TTOpenType",
        "scaleX": 1,
        "symbol": {"type": "CIMPolygonSymbol", "symbolLayers": []},
        "scaleSymbolsProportionally": true,
        "respectFrame": true
    })
}

/// Serialize a style definition the way the style database stores it.
fn payload(layers: Vec<Value>) -> Vec<u8> {
    let mut bytes =
        serde_json::to_vec(&json!({"type": "CIMPolygonSymbol", "symbolLayers": layers})).unwrap();
    bytes.push(0);
    bytes
}

/// Store that counts lookups.
struct CountingStore {
    inner: MemoryStyleStore,
    lookups: Cell<usize>,
}

impl StyleStore for CountingStore {
    fn payload(&self, label: &str) -> Option<&[u8]> {
        self.lookups.set(self.lookups.get() + 1);
        self.inner.payload(label)
    }

    fn labels(&self) -> Vec<&str> {
        self.inner.labels()
    }

    fn len(&self) -> usize {
        self.inner.len()
    }
}

#[test]
fn fill_and_marker_rebuild_in_order_with_whitelisted_fields() {
    let store = MemoryStyleStore::from_entries([("3.01.15.001", payload(vec![fill(), marker()]))]);
    let rebuilder = Rebuilder::new(registry(), &store);

    let applied = rebuilder
        .apply_to_class(RenderClass::new("Isn", "3.01.15.001"), "3.01.15.001", true)
        .unwrap();

    assert_eq!(applied.class.label, "Glacier Ice or Snowpack: snowpacks (Isn)");
    assert_eq!(applied.class.values, vec!["Isn".to_string()]);
    assert!(applied.dropped.is_empty());

    let kinds: Vec<LayerKind> = applied.class.symbol_layers.iter().map(SymbolLayer::kind).collect();
    assert_eq!(kinds, vec![LayerKind::SolidFill, LayerKind::CharacterMarker]);

    let fill_out = serde_json::to_value(&applied.class.symbol_layers[0]).unwrap();
    assert!(fill_out.get("colorLocked").is_none());

    let marker_out = serde_json::to_value(&applied.class.symbol_layers[1]).unwrap();
    let Value::Object(marker_fields) = marker_out else {
        panic!("marker should serialize as an object");
    };
    let mut names: Vec<&str> = marker_fields.keys().map(String::as_str).collect();
    names.sort_unstable();
    assert_eq!(
        names,
        vec![
            "anchorPointUnits",
            "billboardMode3D",
            "characterIndex",
            "dominantSizeAxis3D",
            "enable",
            "fontFamilyName",
            "fontStyleName",
            "fontType",
            "markerPlacement",
            "respectFrame",
            "scaleSymbolsProportionally",
            "scaleX",
            "size",
            "symbol",
            "type",
        ]
    );
}

#[test]
fn unrecognized_layer_between_recognized_ones_closes_the_gap() {
    let hatch = json!({"type": "CIMHatchFill", "enable": true, "rotation": 45});
    let store =
        MemoryStyleStore::from_entries([("3.01.02.011", payload(vec![fill(), hatch, marker()]))]);
    let rebuilder = Rebuilder::new(registry(), &store);

    let applied = rebuilder
        .apply_to_class(RenderClass::new("Owf", "3.01.02.011"), "3.01.02.011", false)
        .unwrap();

    assert_eq!(applied.class.label, "Organic deposits: fen");
    let kinds: Vec<LayerKind> = applied.class.symbol_layers.iter().map(SymbolLayer::kind).collect();
    assert_eq!(kinds, vec![LayerKind::SolidFill, LayerKind::CharacterMarker]);
    assert_eq!(applied.dropped.len(), 1);
    assert_eq!(applied.dropped[0].index, 1);
    assert_eq!(applied.dropped[0].type_name, "CIMHatchFill");
}

#[test]
fn all_unrecognized_layers_yield_blank_swatch() {
    let store = MemoryStyleStore::from_entries([(
        "3.01.12.082",
        payload(vec![json!({"type": "CIMPictureFill"})]),
    )]);
    let rebuilder = Rebuilder::new(registry(), &store);

    let applied = rebuilder
        .apply_to_class(RenderClass::new("U", "3.01.12.082"), "3.01.12.082", true)
        .unwrap();
    assert!(applied.class.symbol_layers.is_empty());
    assert_eq!(
        applied.class.label,
        "Undifferentiated deposits: undifferentiated (U)"
    );
}

#[test]
fn empty_layer_list_yields_blank_swatch() {
    let store = MemoryStyleStore::from_entries([("3.01.12.082", payload(Vec::new()))]);
    let rebuilder = Rebuilder::new(registry(), &store);
    let applied = rebuilder
        .apply_to_class(RenderClass::new("U", "3.01.12.082"), "3.01.12.082", false)
        .unwrap();
    assert!(applied.class.symbol_layers.is_empty());
}

#[test]
fn unknown_key_fails_before_style_lookup() {
    let store = CountingStore {
        inner: MemoryStyleStore::from_entries([("9.99.99.999", payload(vec![fill()]))]),
        lookups: Cell::new(0),
    };
    let rebuilder = Rebuilder::new(registry(), &store);

    let err = rebuilder
        .apply_to_class(RenderClass::new("X", "9.99.99.999"), "9.99.99.999", true)
        .unwrap_err();

    assert!(matches!(
        err,
        SymbologyError::Registry(RegistryError::UnknownKey { ref key }) if key == "9.99.99.999"
    ));
    assert_eq!(store.lookups.get(), 0);
}

#[test]
fn missing_style_record_is_not_substituted() {
    let store = MemoryStyleStore::new();
    let rebuilder = Rebuilder::new(registry(), &store);

    let err = rebuilder
        .apply_to_class(RenderClass::new("Isn", "3.01.15.001"), "3.01.15.001", true)
        .unwrap_err();
    assert!(matches!(
        err,
        SymbologyError::Style(StyleError::NotFound { ref label }) if label == "3.01.15.001"
    ));
}

#[test]
fn renderer_is_rebuilt_class_by_class() {
    let store = MemoryStyleStore::from_entries([
        ("3.01.10.355", payload(vec![fill()])),
        (
            "3.01.10.373",
            payload(vec![json!({"type": "CIMVectorMarker"}), fill()]),
        ),
    ]);
    let rebuilder = Rebuilder::new(registry(), &store);
    let renderer = Renderer {
        fields: vec!["SYMBOL_CODE".into()],
        groups: vec![RenderGroup {
            heading: "SYMBOL_CODE".into(),
            classes: vec![
                RenderClass::new("T", "3.01.10.373"),
                RenderClass::new("Tv", "3.01.10.355"),
            ],
        }],
        applied_at: None,
    };

    let applied = rebuilder.apply_to_renderer(renderer, true).unwrap();
    let labels: Vec<&str> = applied
        .renderer
        .classes()
        .map(|class| class.label.as_str())
        .collect();
    assert_eq!(
        labels,
        vec![
            "Glacial sediments: undifferentiated (T)",
            "Glacial sediments: veneer (Tv)",
        ]
    );
    assert!(applied.renderer.applied_at.is_some());
    assert_eq!(applied.dropped.len(), 1);
    assert_eq!(applied.dropped[0].key, "3.01.10.373");
    assert_eq!(applied.dropped[0].layer.type_name, "CIMVectorMarker");
}

#[test]
fn renderer_rebuild_aborts_on_first_failure() {
    let store = MemoryStyleStore::from_entries([("3.01.10.355", payload(vec![fill()]))]);
    let rebuilder = Rebuilder::new(registry(), &store);
    let renderer = Renderer {
        fields: vec!["SYMBOL_CODE".into()],
        groups: vec![RenderGroup {
            heading: "SYMBOL_CODE".into(),
            classes: vec![
                RenderClass::new("Tv", "3.01.10.355"),
                RenderClass::new("T", "3.01.10.373"),
            ],
        }],
        applied_at: None,
    };

    let err = rebuilder.apply_to_renderer(renderer, false).unwrap_err();
    assert!(matches!(err, SymbologyError::Style(StyleError::NotFound { .. })));
}
