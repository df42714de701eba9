//! Transport row encoding
//!
//! A row travels as one base64 blob holding the concatenated text of every
//! non-null value, plus a parallel `lengths` array. `-1` marks NULL; any
//! other entry is the byte length of that column's slice of the blob.
//! There are no separators, so `lengths` is the only way to re-split.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde::Serialize;

use super::result::ColumnDescriptor;
use super::value::NativeValue;

/// `lengths` entry marking a NULL column
pub const NULL_LENGTH: i64 = -1;

/// Encoded result row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Row {
    /// Base64 of the concatenated non-null values
    #[serde(rename = "values")]
    pub encoded_values: String,
    pub lengths: Vec<i64>,
}

impl Row {
    /// Split the row back into per-column values (`None` for NULL).
    ///
    /// Returns `None` if the payload is not valid base64 or the lengths do
    /// not add up to the decoded size.
    pub fn decode_values(&self) -> Option<Vec<Option<Vec<u8>>>> {
        let buffer = STANDARD.decode(&self.encoded_values).ok()?;
        let mut offset = 0usize;
        let mut values = Vec::with_capacity(self.lengths.len());

        for &length in &self.lengths {
            if length == NULL_LENGTH {
                values.push(None);
                continue;
            }
            let length = usize::try_from(length).ok()?;
            let end = offset.checked_add(length)?;
            values.push(Some(buffer.get(offset..end)?.to_vec()));
            offset = end;
        }

        (offset == buffer.len()).then_some(values)
    }
}

/// Encode one native row in field order.
///
/// Values are taken by column position; a row shorter than `fields` is
/// padded with NULLs.
pub fn encode_row(values: &[NativeValue], fields: &[ColumnDescriptor]) -> Row {
    let mut buffer = Vec::new();
    let mut lengths = Vec::with_capacity(fields.len());

    for index in 0..fields.len() {
        match values.get(index).and_then(NativeValue::render) {
            Some(text) => {
                lengths.push(text.len() as i64);
                buffer.extend_from_slice(&text);
            }
            None => lengths.push(NULL_LENGTH),
        }
    }

    Row {
        encoded_values: STANDARD.encode(&buffer),
        lengths,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::types::ProtocolType;

    fn fields(count: usize) -> Vec<ColumnDescriptor> {
        (0..count)
            .map(|i| ColumnDescriptor {
                name: format!("c{}", i),
                column_type: ProtocolType::Varchar,
                table: "t".to_string(),
                origin_table: "t".to_string(),
                database: "db".to_string(),
                origin_name: format!("c{}", i),
            })
            .collect()
    }

    fn texts(values: Vec<Option<Vec<u8>>>) -> Vec<Option<String>> {
        values
            .into_iter()
            .map(|v| v.map(|bytes| String::from_utf8(bytes).unwrap()))
            .collect()
    }

    #[test]
    fn test_single_value() {
        let row = encode_row(&[NativeValue::text("1")], &fields(1));
        assert_eq!(row.encoded_values, "MQ==");
        assert_eq!(row.lengths, vec![1]);
    }

    #[test]
    fn test_values_are_concatenated_without_separators() {
        let row = encode_row(
            &[NativeValue::text("ab"), NativeValue::Int(42), NativeValue::text("c")],
            &fields(3),
        );
        assert_eq!(STANDARD.decode(&row.encoded_values).unwrap(), b"ab42c");
        assert_eq!(row.lengths, vec![2, 2, 1]);
    }

    #[test]
    fn test_round_trip_with_nulls() {
        let row = encode_row(
            &[
                NativeValue::Null,
                NativeValue::text("hello"),
                NativeValue::Null,
                NativeValue::Double(2.5),
            ],
            &fields(4),
        );
        assert_eq!(row.lengths, vec![-1, 5, -1, 3]);
        assert_eq!(
            texts(row.decode_values().unwrap()),
            vec![None, Some("hello".to_string()), None, Some("2.5".to_string())]
        );
    }

    #[test]
    fn test_all_null_row() {
        let row = encode_row(&[NativeValue::Null, NativeValue::Null], &fields(2));
        assert_eq!(row.encoded_values, "");
        assert_eq!(row.lengths, vec![-1, -1]);
        assert_eq!(row.decode_values().unwrap(), vec![None, None]);
    }

    #[test]
    fn test_empty_string_is_not_null() {
        let row = encode_row(
            &[NativeValue::text(""), NativeValue::Null, NativeValue::text("")],
            &fields(3),
        );
        assert_eq!(row.lengths, vec![0, -1, 0]);
        assert_eq!(row.encoded_values, "");
        assert_eq!(
            row.decode_values().unwrap(),
            vec![Some(Vec::new()), None, Some(Vec::new())]
        );
    }

    #[test]
    fn test_lengths_count_bytes() {
        let row = encode_row(&[NativeValue::text("héllo"), NativeValue::text("✓")], &fields(2));
        assert_eq!(row.lengths, vec![6, 3]);
        assert_eq!(
            texts(row.decode_values().unwrap()),
            vec![Some("héllo".to_string()), Some("✓".to_string())]
        );
    }

    #[test]
    fn test_binary_values_survive() {
        let blob = vec![0u8, 255, 10, 13, 0];
        let row = encode_row(&[NativeValue::Bytes(blob.clone())], &fields(1));
        assert_eq!(row.lengths, vec![5]);
        assert_eq!(row.decode_values().unwrap(), vec![Some(blob)]);
    }

    #[test]
    fn test_short_row_pads_with_null() {
        let row = encode_row(&[NativeValue::text("x")], &fields(3));
        assert_eq!(row.lengths, vec![1, -1, -1]);
    }

    #[test]
    fn test_decode_rejects_inconsistent_lengths() {
        let row = Row {
            encoded_values: STANDARD.encode(b"abc"),
            lengths: vec![2],
        };
        assert!(row.decode_values().is_none());

        let row = Row {
            encoded_values: STANDARD.encode(b"abc"),
            lengths: vec![5],
        };
        assert!(row.decode_values().is_none());
    }

    #[test]
    fn test_serialized_shape() {
        let row = encode_row(&[NativeValue::text("1"), NativeValue::Null], &fields(2));
        let json = serde_json::to_value(&row).unwrap();
        assert_eq!(json, serde_json::json!({"values": "MQ==", "lengths": [1, -1]}));
    }
}
