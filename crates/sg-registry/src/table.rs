//! GSC Surficial Geology Style Chart v2.3.14 (April 2018).
//!
//! One row per map unit: classification key, short code, legend description.
//! Rows are grouped by deposit family in legend order.

/// Version of the classification scheme this table encodes.
pub const SCHEME_VERSION: &str = "2.3.14";

/// `(key, short_code, description)` rows.
pub const ENTRIES: &[(&str, &str, &str)] = &[
    ("3.01.15.001", "Isn", "Glacier Ice or Snowpack: snowpacks"),
    ("3.01.15.002", "I", "Glacier Ice or Snowpack: Glacier-icefield-icecap"),
    ("3.01.14.715", "H", "Anthropogenic deposits: undifferentiated"),
    ("3.01.02.011", "Owf", "Organic deposits: fen"),
    ("3.01.02.013", "Owb", "Organic deposits: bog"),
    ("3.01.02.015", "Ows", "Organic deposits: salt marsh"),
    ("3.01.02.023", "Ov", "Organic deposits: veneer"),
    ("3.01.02.025", "Ob", "Organic deposits: blanket"),
    ("3.01.02.012", "O", "Organic deposits: undifferentiated"),
    ("3.01.03.295", "El", "Eolian sediments: loess"),
    ("3.01.03.299", "Er", "Eolian sediments: dunes"),
    ("3.01.03.292", "Ev", "Eolian sediments: veneer"),
    ("3.01.03.297", "E", "Eolian sediments: undifferentiated"),
    ("3.01.01.107", "Cf", "Colluvial and Mass-wasting deposits"),
    ("3.01.01.097", "Ca", "Colluvial and Mass-wasting deposits: apron or talus scree"),
    ("3.01.01.155", "Cz", "Colluvial and Mass-wasting deposits: landslide"),
    ("3.01.01.139", "Cg", "Colluvial and Mass-wasting deposits: rock-glacier"),
    ("3.01.01.092", "Cv", "Colluvial and Mass-wasting deposits: veneer"),
    ("3.01.01.095", "Cb", "Colluvial and Mass-wasting deposits: blanket"),
    ("3.01.01.152", "C", "Colluvial and Mass-wasting deposits: undifferentiated"),
    ("3.01.04.265", "Ap", "Alluvial sediments: floodplain"),
    ("3.01.04.257", "Af", "Alluvial sediments: fan"),
    ("3.01.04.255", "Ai", "Alluvial sediments: intertidal or estuarine"),
    ("3.01.04.269", "At", "Alluvial sediments: terraced"),
    ("3.01.04.252", "Av", "Alluvial sediments: veneer"),
    ("3.01.04.267", "Ab", "Alluvial sediments: blanket"),
    ("3.01.04.263", "A", "Alluvial sediments: undifferentiated"),
    ("3.01.05.582", "Lr", "Lacustrine sediments: beach"),
    ("3.01.05.585", "Ld", "Lacustrine sediments: deltaic"),
    ("3.01.05.573", "Ln", "Lacustrine sediments: littoral and nearshore"),
    ("3.01.05.577", "Lo", "Lacustrine sediments: offshore"),
    ("3.01.05.572", "Lv", "Lacustrine sediments: veneer"),
    ("3.01.05.575", "Lb", "Lacustrine sediments: blanket"),
    ("3.01.05.583", "L", "Lacustrine sediments: undifferentiated"),
    ("3.01.06.495", "Mt", "Marine sediments: terraced"),
    ("3.01.06.497", "Mr", "Marine sediments: beach"),
    ("3.01.06.507", "Md", "Marine sediments: deltaic"),
    ("3.01.06.492", "Mi", "Marine sediments: intertidal"),
    ("3.01.06.493", "Mn", "Marine sediments: littoral and nearshore"),
    ("3.01.06.509", "Mo", "Marine sediments: offshore"),
    ("3.01.06.502", "Mv", "Marine sediments: veneer"),
    ("3.01.06.505", "Mb", "Marine sediments: blanket"),
    ("3.01.06.503", "M", "Marine sediments: undifferentiated"),
    ("3.01.09.487", "GMr", "Glaciomarine sediments: beach"),
    ("3.01.09.525", "GMd", "Glaciomarine sediments: deltaic"),
    ("3.01.09.512", "GMi", "Glaciomarine sediments: intertidal"),
    ("3.01.09.513", "GMn", "Glaciomarine sediments: littoral and nearshore"),
    ("3.01.09.519", "GMo", "Glaciomarine sediments: offshore"),
    ("3.01.09.527", "GMf", "Glaciomarine sediments: submarine outwash fan"),
    ("3.01.09.517", "GMm", "Glaciomarine sediments: submarine moraine"),
    ("3.01.09.483", "GMv", "Glaciomarine sediments: veneer"),
    ("3.01.09.485", "GMb", "Glaciomarine sediments: blanket"),
    ("3.01.09.515", "GM", "Glaciomarine sediments: undifferentiated"),
    ("3.01.08.645", "GLr", "Glaciolacustrine sediments: beach"),
    ("3.01.08.613", "GLd", "Glaciolacustrine sediments: deltaic"),
    ("3.01.08.612", "GLn", "Glaciolacustrine sediments: littoral and nearshore"),
    ("3.01.08.637", "GLo", "Glaciolacustrine sediments: offshore"),
    ("3.01.08.615", "GLf", "Glaciolacustrine sediments: subaqueous outwash fan"),
    ("3.01.08.617", "GLm", "Glaciolacustrine sediments: subaqueous moraine"),
    ("3.01.08.635", "GLh", "Glaciolacustrine sediments: hummocky"),
    ("3.01.08.642", "GLv", "Glaciolacustrine sediments: veneer"),
    ("3.01.08.647", "GLb", "Glaciolacustrine sediments: blanket"),
    ("3.01.08.643", "GL", "Glaciolacustrine sediments: undifferentiated"),
    ("3.01.07.249", "GFp", "Glaciofluvial sediments: outwash plain"),
    ("3.01.07.237", "GFt", "Glaciofluvial sediments: terraced"),
    ("3.01.07.225", "GFf", "Glaciofluvial sediments: outwash fan"),
    ("3.01.07.215", "GFh", "Glaciofluvial sediments: hummocky"),
    ("3.01.07.217", "GFc", "Glaciofluvial sediments: ice-contact"),
    ("3.01.07.219", "GFk", "Glaciofluvial sediments: kame terrace"),
    ("3.01.07.229", "GFr", "Glaciofluvial sediments: esker"),
    ("3.01.07.223", "GFv", "Glaciofluvial sediments: veneer"),
    ("3.01.07.247", "GFb", "Glaciofluvial sediments: blanket"),
    ("3.01.07.235", "GF", "Glaciofluvial sediments: undifferentiated"),
    ("3.01.10.357", "Tg", "Glacial sediments: rock-glacierized moraine"),
    ("3.01.10.375", "Th", "Glacial sediments: hummocky till"),
    ("3.01.10.377", "Tm", "Glacial sediments: moraine complex"),
    ("3.01.10.385", "Tr", "Glacial sediments: ridged till, moraine"),
    ("3.01.10.387", "Ts", "Glacial sediments: streamlined till"),
    ("3.01.10.439", "Tp", "Glacial sediments: till plain"),
    ("3.01.10.057", "Tx", "Glacial sediments: weathered till"),
    ("3.01.10.355", "Tv", "Glacial sediments: veneer"),
    ("3.01.10.359", "Tb", "Glacial sediments: blanket"),
    ("3.01.10.373", "T", "Glacial sediments: undifferentiated"),
    ("3.01.11.175", "Wv", "Weathered bedrock or regolith: veneer"),
    ("3.01.11.169", "Wb", "Weathered bedrock or regolith: blanket"),
    ("3.01.11.177", "W", "Weathered bedrock or regolith: undifferentiated"),
    ("3.01.16.705", "Vpy", "Volcanic deposits: pyroclastic sediments"),
    ("3.01.16.707", "V", "Volcanic deposits: undifferentiated"),
    ("3.01.12.082", "U", "Undifferentiated deposits: undifferentiated"),
    ("3.01.13.192", "R1", "Bedrock: sedimentary"),
    ("3.01.13.187", "R2", "Bedrock: igneous"),
    ("3.01.13.183", "R3", "Bedrock: metamorphic"),
    ("3.01.13.185", "R", "Bedrock: undifferentiated"),
];
