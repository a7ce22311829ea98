//! 金额类型
//!
//! 后端的 `Decimal` 字段可能被序列化为 JSON 数字，也可能是十进制字符串
//! （取决于后端版本），这里统一解析为 `f64`。

use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use std::fmt;

/// 金额（单位：比索，无小数精度要求）
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Amount(f64);

impl Amount {
    #[inline]
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    #[inline]
    pub const fn value(&self) -> f64 {
        self.0
    }
}

impl From<f64> for Amount {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${:.0}", self.0)
    }
}

impl Serialize for Amount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.0)
    }
}

struct AmountVisitor;

impl de::Visitor<'_> for AmountVisitor {
    type Value = Amount;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a number or a decimal string")
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Amount, E> {
        Ok(Amount(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Amount, E> {
        Ok(Amount(v as f64))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Amount, E> {
        Ok(Amount(v as f64))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Amount, E> {
        v.trim()
            .parse::<f64>()
            .map(Amount)
            .map_err(|_| E::invalid_value(de::Unexpected::Str(v), &self))
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(AmountVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_numbers_and_decimal_strings() {
        let from_number: Amount = serde_json::from_str("12500").unwrap();
        let from_float: Amount = serde_json::from_str("12500.5").unwrap();
        let from_string: Amount = serde_json::from_str("\"12500.50\"").unwrap();

        assert_eq!(from_number.value(), 12500.0);
        assert_eq!(from_float.value(), 12500.5);
        assert_eq!(from_string.value(), 12500.5);
    }

    #[test]
    fn rejects_garbage() {
        assert!(serde_json::from_str::<Amount>("\"doce\"").is_err());
        assert!(serde_json::from_str::<Amount>("true").is_err());
    }

    #[test]
    fn displays_without_decimals() {
        assert_eq!(Amount::new(15000.4).to_string(), "$15000");
    }
}
