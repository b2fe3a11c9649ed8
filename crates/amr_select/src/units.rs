//! Explicit normalisation of lengths into code units.
//!
//! Every coordinate handed to a selector must already be in the dataset's
//! internal length unit. Callers holding values in other units convert them
//! here first; the conversion factors themselves come from the dataset.

use std::collections::HashMap;

use glam::DVec3;

use crate::error::{Result, SelectorError};

/// Name of the internal length unit. Always registered with factor 1.
pub const CODE_LENGTH: &str = "code_length";

/// A length value tagged with its unit name.
#[derive(Clone, Debug, PartialEq)]
pub struct Length {
  pub value: f64,
  pub unit: String,
}

impl Length {
  pub fn new(value: f64, unit: impl Into<String>) -> Self {
    Self {
      value,
      unit: unit.into(),
    }
  }

  /// A value already in code units.
  pub fn code(value: f64) -> Self {
    Self::new(value, CODE_LENGTH)
  }
}

/// Size of each known unit expressed in code length.
#[derive(Clone, Debug)]
pub struct UnitRegistry {
  code_length_per_unit: HashMap<String, f64>,
}

impl UnitRegistry {
  pub fn new() -> Self {
    let mut code_length_per_unit = HashMap::new();
    code_length_per_unit.insert(CODE_LENGTH.to_string(), 1.0);
    Self {
      code_length_per_unit,
    }
  }

  /// Register `unit` as `code_lengths` code units long.
  pub fn register(&mut self, unit: impl Into<String>, code_lengths: f64) -> &mut Self {
    self.code_length_per_unit.insert(unit.into(), code_lengths);
    self
  }

  /// Convert a length to code units.
  pub fn ensure_code(&self, length: &Length) -> Result<f64> {
    self
      .code_length_per_unit
      .get(&length.unit)
      .map(|factor| length.value * factor)
      .ok_or_else(|| SelectorError::UnknownUnit(length.unit.clone()))
  }

  /// Convert a position whose three components share one unit.
  pub fn ensure_code_vec(&self, value: DVec3, unit: &str) -> Result<DVec3> {
    let factor = self
      .code_length_per_unit
      .get(unit)
      .ok_or_else(|| SelectorError::UnknownUnit(unit.to_string()))?;
    Ok(value * *factor)
  }
}

impl Default for UnitRegistry {
  fn default() -> Self {
    Self::new()
  }
}
