//! Config file schema and command reports

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Top-level config file (`<config_dir>/curve-opdata/config.toml`)
#[derive(Debug, Default, Deserialize)]
pub struct ConfigFile {
    pub default: Option<DefaultConfig>,
    /// Extra curves, keyed by name. These shadow built-ins of the same name.
    #[serde(default)]
    pub curves: BTreeMap<String, CurveEntry>,
}

impl ConfigFile {
    pub fn from_toml(content: &str) -> crate::error::Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn default_curve(&self) -> Option<&str> {
        self.default.as_ref().and_then(|d| d.curve.as_deref())
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct DefaultConfig {
    /// Curve used when `--curve` is not given
    pub curve: Option<String>,
}

/// A curve declared in the config file. Integers are hex strings.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CurveEntry {
    pub family: String,
    pub modulus: String,
    pub extension_degree: u8,
    pub order: String,
    pub twist: String,
    /// `[x, y]`
    pub g1: [String; 2],
    /// x components then y components; omitted for degree 1
    #[serde(default)]
    pub g2: Vec<String>,
}

/// Where a curve definition came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CurveSource {
    Builtin,
    Config,
}

/// One row of `curve-opdata curves`
#[derive(Debug, Clone, Serialize)]
pub struct CurveSummary {
    pub name: String,
    pub source: CurveSource,
    pub family: String,
    pub twist: String,
    pub extension_degree: u8,
    pub field_len: usize,
    pub order_len: usize,
    pub opdata_len: usize,
    pub g1_point_len: usize,
    pub g2_point_len: Option<usize>,
}

/// Output of `curve-opdata encode`
#[derive(Debug, Clone, Serialize)]
pub struct EncodeReport {
    pub curve: String,
    pub length: usize,
    pub field_len: usize,
    pub order_len: usize,
    pub extension_degree: u8,
    pub opdata: String,
}

/// Output of `curve-opdata build`
#[derive(Debug, Clone, Serialize)]
pub struct BuildReport {
    pub curve: String,
    pub kind: String,
    pub length: usize,
    pub opdata_len: usize,
    pub input: String,
}

/// Output of `curve-opdata validate`
#[derive(Debug, Clone, Serialize)]
pub struct ValidationReport {
    /// `None` when only the op-data header was checked
    pub kind: Option<String>,
    pub length: usize,
    pub expected_length: Option<usize>,
    pub valid: bool,
    pub reason: Option<String>,
}

/// Output of `curve-opdata compare`
#[derive(Debug, Clone, Serialize)]
pub struct CompareReport {
    pub curve: String,
    pub kind: String,
    pub expected_length: usize,
    pub actual_length: usize,
    pub matches: bool,
    /// Decoded pairing verdict, for pairing results only
    pub pairing: Option<bool>,
}
