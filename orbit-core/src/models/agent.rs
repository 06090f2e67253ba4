use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

use crate::error::OrbitError;

/// 24-bit display color, written as `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AgentColor(u32);

impl AgentColor {
    pub const fn from_rgb_hex(hex: u32) -> Self {
        Self(hex & 0x00ff_ffff)
    }

    pub fn rgb(&self) -> (u8, u8, u8) {
        let r = ((self.0 >> 16) & 0xFF) as u8;
        let g = ((self.0 >> 8) & 0xFF) as u8;
        let b = (self.0 & 0xFF) as u8;
        (r, g, b)
    }

    pub fn hex(&self) -> u32 {
        self.0
    }
}

impl FromStr for AgentColor {
    type Err = OrbitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |message: &str| OrbitError::InvalidColor {
            value: s.to_string(),
            message: message.to_string(),
        };

        let digits = s
            .strip_prefix('#')
            .ok_or_else(|| invalid("missing leading '#'"))?;
        if digits.len() != 6 {
            return Err(invalid("expected six hex digits"));
        }
        u32::from_str_radix(digits, 16)
            .map(Self::from_rgb_hex)
            .map_err(|e| invalid(&e.to_string()))
    }
}

impl std::fmt::Display for AgentColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:06x}", self.0)
    }
}

impl Serialize for AgentColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for AgentColor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// A named role in the catalog. Purely descriptive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Agent {
    pub id: String,
    pub label: String,
    pub role: String,
    pub color: AgentColor,
}

impl Agent {
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        role: impl Into<String>,
        color: AgentColor,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            role: role.into(),
            color,
        }
    }
}
