//! Native cell values as delivered by the MySQL connection

use std::borrow::Cow;

/// A single column value of a native result row.
///
/// Text-protocol results arrive as [`NativeValue::Bytes`]; the typed
/// variants cover binary-protocol values.
#[derive(Debug, Clone, PartialEq)]
pub enum NativeValue {
    Null,
    Bytes(Vec<u8>),
    Int(i64),
    UInt(u64),
    Float(f32),
    Double(f64),
    /// year, month, day, hour, minute, second, microsecond
    Date(u16, u8, u8, u8, u8, u8, u32),
    /// negative, days, hours, minutes, seconds, microseconds
    Time(bool, u32, u8, u8, u8, u32),
}

impl NativeValue {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Bytes(value.into().into_bytes())
    }

    pub fn is_null(&self) -> bool {
        matches!(self, NativeValue::Null)
    }

    /// Canonical text form, or `None` for SQL NULL.
    pub fn render(&self) -> Option<Cow<'_, [u8]>> {
        let rendered = match self {
            NativeValue::Null => return None,
            NativeValue::Bytes(bytes) => return Some(Cow::Borrowed(bytes.as_slice())),
            NativeValue::Int(v) => v.to_string(),
            NativeValue::UInt(v) => v.to_string(),
            NativeValue::Float(v) => v.to_string(),
            NativeValue::Double(v) => v.to_string(),
            NativeValue::Date(year, month, day, hour, minute, second, micros) => {
                let mut out = format!(
                    "{:04}-{:02}-{:02} {:02}:{:02}:{:02}",
                    year, month, day, hour, minute, second
                );
                if *micros > 0 {
                    out.push_str(&format!(".{:06}", micros));
                }
                out
            }
            NativeValue::Time(negative, days, hours, minutes, seconds, micros) => {
                let total_hours = u64::from(*days) * 24 + u64::from(*hours);
                let mut out = format!(
                    "{}{:02}:{:02}:{:02}",
                    if *negative { "-" } else { "" },
                    total_hours,
                    minutes,
                    seconds
                );
                if *micros > 0 {
                    out.push_str(&format!(".{:06}", micros));
                }
                out
            }
        };
        Some(Cow::Owned(rendered.into_bytes()))
    }
}

impl From<mysql_async::Value> for NativeValue {
    fn from(value: mysql_async::Value) -> Self {
        use mysql_async::Value;

        match value {
            Value::NULL => NativeValue::Null,
            Value::Bytes(bytes) => NativeValue::Bytes(bytes),
            Value::Int(v) => NativeValue::Int(v),
            Value::UInt(v) => NativeValue::UInt(v),
            Value::Float(v) => NativeValue::Float(v),
            Value::Double(v) => NativeValue::Double(v),
            Value::Date(y, mo, d, h, mi, s, us) => NativeValue::Date(y, mo, d, h, mi, s, us),
            Value::Time(neg, d, h, mi, s, us) => NativeValue::Time(neg, d, h, mi, s, us),
        }
    }
}
