//! Curve registry: built-in named curves plus config-file entries

use crate::error::{RegistryError, Result};
use crate::types::{ConfigFile, CurveSource, CurveEntry, CurveSummary};
use curve_opdata_core::{curves, BigUint, ByteBuffer, CurveFamily, CurveParameters, TwistType};
use std::collections::BTreeMap;

/// Resolves curve names to validated parameters
#[derive(Debug, Clone, Default)]
pub struct CurveRegistry {
    configured: BTreeMap<String, (String, CurveEntry)>,
}

impl CurveRegistry {
    /// Registry with only the built-in curves
    pub fn builtin() -> Self {
        Self::default()
    }

    /// Registry with the config file's curves layered over the built-ins
    pub fn from_config(config: &ConfigFile) -> Self {
        let configured = config
            .curves
            .iter()
            .map(|(name, entry)| (normalize(name), (name.clone(), entry.clone())))
            .collect();
        Self { configured }
    }

    /// Parameters for `name`. Configured curves win over built-ins.
    pub fn resolve(&self, name: &str) -> Result<CurveParameters> {
        if let Some((display, entry)) = self.configured.get(&normalize(name)) {
            log::debug!("Using configured curve '{}'", display);
            return params_from_entry(display, entry);
        }
        let curve = curves::lookup(name)
            .ok_or_else(|| RegistryError::UnknownCurve(name.to_string()))?;
        curve
            .params()
            .map_err(|source| RegistryError::InvalidParameters {
                curve: curve.name.to_string(),
                source,
            })
    }

    /// Canonical display name for `name`, if it resolves
    pub fn canonical_name(&self, name: &str) -> Option<String> {
        if let Some((display, _)) = self.configured.get(&normalize(name)) {
            return Some(display.clone());
        }
        curves::lookup(name).map(|c| c.name.to_string())
    }

    /// Every resolvable curve. A configured curve that fails validation is
    /// reported as an error instead of being skipped.
    pub fn summaries(&self) -> Result<Vec<CurveSummary>> {
        let mut out = Vec::new();
        for curve in curves::NAMED_CURVES {
            if self.configured.contains_key(&normalize(curve.name)) {
                continue;
            }
            let params = self.resolve(curve.name)?;
            out.push(summarize(curve.name, CurveSource::Builtin, &params));
        }
        for (display, entry) in self.configured.values() {
            let params = params_from_entry(display, entry)?;
            out.push(summarize(display, CurveSource::Config, &params));
        }
        Ok(out)
    }
}

fn normalize(name: &str) -> String {
    name.trim().to_ascii_lowercase().replace('_', "-")
}

fn summarize(name: &str, source: CurveSource, params: &CurveParameters) -> CurveSummary {
    let layout = params.layout();
    CurveSummary {
        name: name.to_string(),
        source,
        family: params.family().to_string(),
        twist: params.twist().to_string(),
        extension_degree: layout.extension_degree,
        field_len: layout.field_len,
        order_len: layout.order_len,
        opdata_len: layout.header_len(),
        g1_point_len: layout.g1_point_len(),
        g2_point_len: layout.has_g2().then(|| layout.g2_point_len()),
    }
}

/// Validate a configured curve entry
pub fn params_from_entry(name: &str, entry: &CurveEntry) -> Result<CurveParameters> {
    let family: CurveFamily = entry
        .family
        .parse()
        .map_err(|source| RegistryError::UnknownTag {
            curve: name.to_string(),
            source,
        })?;
    let twist: TwistType = entry
        .twist
        .parse()
        .map_err(|source| RegistryError::UnknownTag {
            curve: name.to_string(),
            source,
        })?;

    let uint = |field: &'static str, value: &str| -> Result<BigUint> {
        ByteBuffer::from_hex(value)
            .map(|buf| buf.to_uint())
            .map_err(|source| RegistryError::InvalidValue {
                curve: name.to_string(),
                field,
                source,
            })
    };

    let modulus = uint("modulus", &entry.modulus)?;
    let order = uint("order", &entry.order)?;
    let g1 = [uint("g1.x", &entry.g1[0])?, uint("g1.y", &entry.g1[1])?];
    let g2 = entry
        .g2
        .iter()
        .map(|c| uint("g2 coordinate", c))
        .collect::<Result<Vec<_>>>()?;

    CurveParameters::new(family, modulus, entry.extension_degree, order, twist, g1, g2).map_err(
        |source| RegistryError::InvalidParameters {
            curve: name.to_string(),
            source,
        },
    )
}
