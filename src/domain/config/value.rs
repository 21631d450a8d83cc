// Copyright 2025 JiangLong.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use serde::Serialize;
use std::fmt;

/// A scalar configuration value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ConfigValue {
    String(String),
    Integer(i64),
    Float(f64),
}

impl ConfigValue {
    /// Integer view of the value. Strings are parsed; floats qualify only
    /// when they have no fractional part (`3.0`).
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            ConfigValue::Integer(i) => Some(*i),
            ConfigValue::String(s) => s.trim().parse::<i64>().ok(),
            ConfigValue::Float(f) => integral_float(*f),
        }
    }

    pub fn is_integer(&self) -> bool {
        matches!(self, ConfigValue::Integer(_))
    }

    /// Converts a document scalar into a config value.
    ///
    /// Returns `Ok(None)` for null, and `Err` with a short description for
    /// nested values, which flat documents do not allow.
    pub fn from_json(value: serde_json::Value) -> Result<Option<Self>, String> {
        match value {
            serde_json::Value::Null => Ok(None),
            serde_json::Value::Bool(b) => Ok(Some(ConfigValue::String(b.to_string()))),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Ok(Some(ConfigValue::Integer(i)))
                } else if let Some(f) = n.as_f64() {
                    Ok(Some(ConfigValue::Float(f)))
                } else {
                    Err(format!("unsupported number {}", n))
                }
            }
            serde_json::Value::String(s) => Ok(Some(ConfigValue::String(s))),
            serde_json::Value::Array(_) => Err("arrays are not supported".to_string()),
            serde_json::Value::Object(_) => Err("nested mappings are not supported".to_string()),
        }
    }
}

fn integral_float(f: f64) -> Option<i64> {
    // i64::MAX is not representable as f64; the bound is exclusive
    if f.is_finite() && f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 {
        Some(f as i64)
    } else {
        None
    }
}

impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigValue::String(s) => f.write_str(s),
            ConfigValue::Integer(i) => write!(f, "{}", i),
            ConfigValue::Float(v) => write!(f, "{}", v),
        }
    }
}

impl From<&str> for ConfigValue {
    fn from(s: &str) -> Self {
        ConfigValue::String(s.to_string())
    }
}

impl From<String> for ConfigValue {
    fn from(s: String) -> Self {
        ConfigValue::String(s)
    }
}

impl From<i64> for ConfigValue {
    fn from(i: i64) -> Self {
        ConfigValue::Integer(i)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_as_integer() {
        assert_eq!(ConfigValue::Integer(5).as_integer(), Some(5));
        assert_eq!(ConfigValue::from(" 8080 ").as_integer(), Some(8080));
        assert_eq!(ConfigValue::from("five").as_integer(), None);
        assert_eq!(ConfigValue::Float(2.5).as_integer(), None);
    }

    #[test]
    fn test_integral_float_is_an_integer() {
        assert_eq!(ConfigValue::Float(3.0).as_integer(), Some(3));
        assert_eq!(ConfigValue::Float(-0.0).as_integer(), Some(0));
        assert_eq!(ConfigValue::Float(f64::NAN).as_integer(), None);
        assert_eq!(ConfigValue::Float(f64::INFINITY).as_integer(), None);
        assert_eq!(ConfigValue::Float(1e300).as_integer(), None);
    }

    #[test]
    fn test_from_json_scalars() {
        assert_eq!(ConfigValue::from_json(json!(null)).unwrap(), None);
        assert_eq!(
            ConfigValue::from_json(json!(3)).unwrap(),
            Some(ConfigValue::Integer(3))
        );
        assert_eq!(
            ConfigValue::from_json(json!(true)).unwrap(),
            Some(ConfigValue::from("true"))
        );
        assert_eq!(
            ConfigValue::from_json(json!(0.5)).unwrap(),
            Some(ConfigValue::Float(0.5))
        );
    }

    #[test]
    fn test_from_json_rejects_nesting() {
        assert!(ConfigValue::from_json(json!({"a": 1})).is_err());
        assert!(ConfigValue::from_json(json!([1, 2])).is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(ConfigValue::Integer(80).to_string(), "80");
        assert_eq!(ConfigValue::from("nginx:1.25").to_string(), "nginx:1.25");
    }
}
