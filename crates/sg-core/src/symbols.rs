//! Symbol layers as they appear in style records.
//!
//! A style record describes a composite symbol as an ordered list of layers;
//! later layers draw on top of earlier ones. Only two kinds are carried
//! through a rebuild: flat fills and character (font glyph) markers. Every
//! other kind decodes as [`LayerKind::Other`] and is dropped by the rebuilder.

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Style-database type name of a solid fill layer.
pub const SOLID_FILL_TYPE: &str = "CIMSolidFill";
/// Style-database type name of a character marker layer.
pub const CHARACTER_MARKER_TYPE: &str = "CIMCharacterMarker";

// ---------------------------------------------------------------------------
// LayerKind
// ---------------------------------------------------------------------------

/// Discriminator of a decoded symbol layer.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum LayerKind {
    SolidFill,
    CharacterMarker,
    /// Any other `type` string, kept verbatim for reporting.
    Other(String),
}

impl LayerKind {
    /// Classify a `type` discriminator. Both the prefixed style-database
    /// spelling (`CIMSolidFill`) and the bare one (`SolidFill`) are accepted.
    #[must_use]
    pub fn from_type_name(name: &str) -> Self {
        match name {
            SOLID_FILL_TYPE | "SolidFill" => Self::SolidFill,
            CHARACTER_MARKER_TYPE | "CharacterMarker" => Self::CharacterMarker,
            other => Self::Other(other.to_string()),
        }
    }

    #[must_use]
    pub const fn is_recognized(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl fmt::Display for LayerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SolidFill => f.write_str(SOLID_FILL_TYPE),
            Self::CharacterMarker => f.write_str(CHARACTER_MARKER_TYPE),
            Self::Other(name) => f.write_str(name),
        }
    }
}

// ---------------------------------------------------------------------------
// DecodedLayer
// ---------------------------------------------------------------------------

/// A layer descriptor as parsed from a style record, before rebuilding.
///
/// `fields` holds the whole descriptor object, including the `type` entry and
/// any vendor-specific extras.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedLayer {
    pub kind: LayerKind,
    pub type_name: String,
    pub fields: Map<String, Value>,
}

impl DecodedLayer {
    #[must_use]
    pub fn new(type_name: impl Into<String>, fields: Map<String, Value>) -> Self {
        let type_name = type_name.into();
        Self {
            kind: LayerKind::from_type_name(&type_name),
            type_name,
            fields,
        }
    }
}

// ---------------------------------------------------------------------------
// Rebuilt layers
// ---------------------------------------------------------------------------

/// Flat polygon fill.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SolidFill {
    pub enable: bool,
    /// Color object as authored in the style record (e.g. `CIMRGBColor`).
    pub color: Value,
}

/// Font-glyph marker, used for the point patterns drawn over fills.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CharacterMarker {
    pub enable: bool,
    pub anchor_point_units: String,
    #[serde(rename = "dominantSizeAxis3D")]
    pub dominant_size_axis_3d: String,
    pub size: f64,
    #[serde(rename = "billboardMode3D")]
    pub billboard_mode_3d: String,
    pub marker_placement: Value,
    pub character_index: i64,
    pub font_family_name: String,
    pub font_style_name: String,
    pub font_type: String,
    pub scale_x: f64,
    pub symbol: Value,
    pub scale_symbols_proportionally: bool,
    pub respect_frame: bool,
}

/// A rebuilt symbol layer carrying only whitelisted fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "type")]
pub enum SymbolLayer {
    #[serde(rename = "CIMSolidFill", alias = "SolidFill")]
    SolidFill(SolidFill),
    #[serde(rename = "CIMCharacterMarker", alias = "CharacterMarker")]
    CharacterMarker(CharacterMarker),
}

impl SymbolLayer {
    #[must_use]
    pub const fn kind(&self) -> LayerKind {
        match self {
            Self::SolidFill(_) => LayerKind::SolidFill,
            Self::CharacterMarker(_) => LayerKind::CharacterMarker,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn kind_accepts_both_spellings() {
        assert_eq!(LayerKind::from_type_name("CIMSolidFill"), LayerKind::SolidFill);
        assert_eq!(LayerKind::from_type_name("SolidFill"), LayerKind::SolidFill);
        assert_eq!(
            LayerKind::from_type_name("CIMCharacterMarker"),
            LayerKind::CharacterMarker
        );
        assert_eq!(
            LayerKind::from_type_name("CIMHatchFill"),
            LayerKind::Other("CIMHatchFill".to_string())
        );
        assert!(!LayerKind::from_type_name("CIMHatchFill").is_recognized());
    }

    #[test]
    fn solid_fill_serializes_with_style_type_tag() {
        let layer = SymbolLayer::SolidFill(SolidFill {
            enable: true,
            color: json!({"type": "CIMRGBColor", "values": [255, 255, 190, 100]}),
        });
        let value = serde_json::to_value(&layer).unwrap();
        assert_eq!(
            value,
            json!({
                "type": "CIMSolidFill",
                "enable": true,
                "color": {"type": "CIMRGBColor", "values": [255, 255, 190, 100]}
            })
        );
    }

    #[test]
    fn character_marker_keeps_3d_field_spelling() {
        let value = json!({
            "type": "CIMCharacterMarker",
            "enable": true,
            "anchorPointUnits": "Relative",
            "dominantSizeAxis3D": "Y",
            "size": 6.0,
            "billboardMode3D": "FaceNearPlane",
            "markerPlacement": {"type": "CIMMarkerPlacementInsidePolygon"},
            "characterIndex": 33,
            "fontFamilyName": "GSC Surficial",
            "fontStyleName": "Regular",
            "fontType": "TTOpenType",
            "scaleX": 1.0,
            "symbol": {"type": "CIMPolygonSymbol"},
            "scaleSymbolsProportionally": true,
            "respectFrame": true,
            "vendorExtra": 7
        });
        let layer: SymbolLayer = serde_json::from_value(value).unwrap();
        let SymbolLayer::CharacterMarker(marker) = &layer else {
            panic!("expected character marker");
        };
        assert_eq!(marker.character_index, 33);

        let out = serde_json::to_value(&layer).unwrap();
        assert_eq!(out["dominantSizeAxis3D"], "Y");
        assert_eq!(out["billboardMode3D"], "FaceNearPlane");
        assert!(out.get("vendorExtra").is_none());
    }
}
