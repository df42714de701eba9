//! Native MySQL type code → protocol type label
//!
//! The mapping is a static rule table keyed by the column type code sent in
//! the MySQL column definition. Each rule inspects a few bits of the column
//! flag bitmask. Codes without a rule fall back to the native type name.
//!
//! Flag bit values follow the MySQL column definition flags:
//! <https://dev.mysql.com/doc/dev/mysql-server/latest/group__group__cs__column__definition__flags.html>

use std::fmt;

use serde::{Serialize, Serializer};

// MySQL column type codes
pub const TYPE_DECIMAL: u8 = 0;
pub const TYPE_TINY: u8 = 1;
pub const TYPE_SHORT: u8 = 2;
pub const TYPE_LONG: u8 = 3;
pub const TYPE_FLOAT: u8 = 4;
pub const TYPE_DOUBLE: u8 = 5;
pub const TYPE_NULL: u8 = 6;
pub const TYPE_TIMESTAMP: u8 = 7;
pub const TYPE_LONGLONG: u8 = 8;
pub const TYPE_INT24: u8 = 9;
pub const TYPE_DATE: u8 = 10;
pub const TYPE_TIME: u8 = 11;
pub const TYPE_DATETIME: u8 = 12;
pub const TYPE_YEAR: u8 = 13;
pub const TYPE_NEWDATE: u8 = 14;
pub const TYPE_VARCHAR: u8 = 15;
pub const TYPE_BIT: u8 = 16;
pub const TYPE_TIMESTAMP2: u8 = 17;
pub const TYPE_DATETIME2: u8 = 18;
pub const TYPE_TIME2: u8 = 19;
pub const TYPE_TYPED_ARRAY: u8 = 20;
pub const TYPE_VECTOR: u8 = 242;
pub const TYPE_INVALID: u8 = 243;
pub const TYPE_BOOL: u8 = 244;
pub const TYPE_JSON: u8 = 245;
pub const TYPE_NEWDECIMAL: u8 = 246;
pub const TYPE_ENUM: u8 = 247;
pub const TYPE_SET: u8 = 248;
pub const TYPE_TINY_BLOB: u8 = 249;
pub const TYPE_MEDIUM_BLOB: u8 = 250;
pub const TYPE_LONG_BLOB: u8 = 251;
pub const TYPE_BLOB: u8 = 252;
pub const TYPE_VAR_STRING: u8 = 253;
pub const TYPE_STRING: u8 = 254;
pub const TYPE_GEOMETRY: u8 = 255;

/// Column flag bitmask
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ColumnFlags(u16);

impl ColumnFlags {
    pub const UNSIGNED: u16 = 0x20;
    pub const BINARY: u16 = 0x80;
    pub const ENUM: u16 = 0x100;
    pub const SET: u16 = 0x800;

    pub fn from_bits(bits: u16) -> Self {
        Self(bits)
    }

    pub fn bits(&self) -> u16 {
        self.0
    }

    fn has(&self, bit: u16) -> bool {
        self.0 & bit != 0
    }

    pub fn is_unsigned(&self) -> bool {
        self.has(Self::UNSIGNED)
    }

    pub fn is_binary(&self) -> bool {
        self.has(Self::BINARY)
    }

    pub fn is_enum(&self) -> bool {
        self.has(Self::ENUM)
    }

    pub fn is_set(&self) -> bool {
        self.has(Self::SET)
    }
}

/// Type label understood by the serverless protocol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProtocolType {
    Int8,
    Uint8,
    Int16,
    Uint16,
    Int24,
    Uint24,
    Int32,
    Uint32,
    Int64,
    Uint64,
    Float32,
    Float64,
    Decimal,
    Varchar,
    Varbinary,
    Char,
    Binary,
    Enum,
    Set,
    Text,
    Blob,
    /// Unmapped native code, labelled with the native type name
    Native(&'static str),
}

impl ProtocolType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProtocolType::Int8 => "INT8",
            ProtocolType::Uint8 => "UINT8",
            ProtocolType::Int16 => "INT16",
            ProtocolType::Uint16 => "UINT16",
            ProtocolType::Int24 => "INT24",
            ProtocolType::Uint24 => "UINT24",
            ProtocolType::Int32 => "INT32",
            ProtocolType::Uint32 => "UINT32",
            ProtocolType::Int64 => "INT64",
            ProtocolType::Uint64 => "UINT64",
            ProtocolType::Float32 => "FLOAT32",
            ProtocolType::Float64 => "FLOAT64",
            ProtocolType::Decimal => "DECIMAL",
            ProtocolType::Varchar => "VARCHAR",
            ProtocolType::Varbinary => "VARBINARY",
            ProtocolType::Char => "CHAR",
            ProtocolType::Binary => "BINARY",
            ProtocolType::Enum => "ENUM",
            ProtocolType::Set => "SET",
            ProtocolType::Text => "TEXT",
            ProtocolType::Blob => "BLOB",
            ProtocolType::Native(name) => name,
        }
    }
}

impl fmt::Display for ProtocolType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ProtocolType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Flag predicate attached to a type code
#[derive(Debug, Clone, Copy)]
enum Rule {
    /// Signed or unsigned integer, chosen by UNSIGNED
    Integer {
        signed: ProtocolType,
        unsigned: ProtocolType,
    },
    /// Text or binary variant, chosen by BINARY
    Binary {
        text: ProtocolType,
        binary: ProtocolType,
    },
    /// ENUM and SET win over BINARY
    FixedString,
    /// Flags ignored
    Always(ProtocolType),
}

impl Rule {
    fn apply(&self, flags: ColumnFlags) -> ProtocolType {
        match *self {
            Rule::Integer { signed, unsigned } => {
                if flags.is_unsigned() {
                    unsigned
                } else {
                    signed
                }
            }
            Rule::Binary { text, binary } => {
                if flags.is_binary() {
                    binary
                } else {
                    text
                }
            }
            Rule::FixedString => {
                if flags.is_enum() {
                    ProtocolType::Enum
                } else if flags.is_set() {
                    ProtocolType::Set
                } else if flags.is_binary() {
                    ProtocolType::Binary
                } else {
                    ProtocolType::Char
                }
            }
            Rule::Always(label) => label,
        }
    }
}

const BLOB_RULE: Rule = Rule::Binary {
    text: ProtocolType::Text,
    binary: ProtocolType::Blob,
};

const VAR_STRING_RULE: Rule = Rule::Binary {
    text: ProtocolType::Varchar,
    binary: ProtocolType::Varbinary,
};

const TYPE_RULES: &[(u8, Rule)] = &[
    (
        TYPE_TINY,
        Rule::Integer {
            signed: ProtocolType::Int8,
            unsigned: ProtocolType::Uint8,
        },
    ),
    (
        TYPE_SHORT,
        Rule::Integer {
            signed: ProtocolType::Int16,
            unsigned: ProtocolType::Uint16,
        },
    ),
    (
        TYPE_INT24,
        Rule::Integer {
            signed: ProtocolType::Int24,
            unsigned: ProtocolType::Uint24,
        },
    ),
    (
        TYPE_LONG,
        Rule::Integer {
            signed: ProtocolType::Int32,
            unsigned: ProtocolType::Uint32,
        },
    ),
    (
        TYPE_LONGLONG,
        Rule::Integer {
            signed: ProtocolType::Int64,
            unsigned: ProtocolType::Uint64,
        },
    ),
    (TYPE_FLOAT, Rule::Always(ProtocolType::Float32)),
    (TYPE_DOUBLE, Rule::Always(ProtocolType::Float64)),
    (TYPE_VARCHAR, VAR_STRING_RULE),
    (TYPE_VAR_STRING, VAR_STRING_RULE),
    (TYPE_STRING, Rule::FixedString),
    (TYPE_DECIMAL, Rule::Always(ProtocolType::Decimal)),
    (TYPE_NEWDECIMAL, Rule::Always(ProtocolType::Decimal)),
    (TYPE_TINY_BLOB, BLOB_RULE),
    (TYPE_MEDIUM_BLOB, BLOB_RULE),
    (TYPE_LONG_BLOB, BLOB_RULE),
    (TYPE_BLOB, BLOB_RULE),
];

/// Map a native column type and its flags to a protocol type label.
///
/// Total: unmapped codes yield [`ProtocolType::Native`] with the native
/// type's display name.
pub fn map_type(type_code: u8, flags: u16) -> ProtocolType {
    let flags = ColumnFlags::from_bits(flags);
    TYPE_RULES
        .iter()
        .find(|(code, _)| *code == type_code)
        .map(|(_, rule)| rule.apply(flags))
        .unwrap_or_else(|| ProtocolType::Native(native_type_name(type_code)))
}

/// Display name of a native MySQL type code
pub fn native_type_name(type_code: u8) -> &'static str {
    match type_code {
        TYPE_DECIMAL => "DECIMAL",
        TYPE_TINY => "TINY",
        TYPE_SHORT => "SHORT",
        TYPE_LONG => "LONG",
        TYPE_FLOAT => "FLOAT",
        TYPE_DOUBLE => "DOUBLE",
        TYPE_NULL => "NULL",
        TYPE_TIMESTAMP => "TIMESTAMP",
        TYPE_LONGLONG => "LONGLONG",
        TYPE_INT24 => "INT24",
        TYPE_DATE => "DATE",
        TYPE_TIME => "TIME",
        TYPE_DATETIME => "DATETIME",
        TYPE_YEAR => "YEAR",
        TYPE_NEWDATE => "NEWDATE",
        TYPE_VARCHAR => "VARCHAR",
        TYPE_BIT => "BIT",
        TYPE_TIMESTAMP2 => "TIMESTAMP2",
        TYPE_DATETIME2 => "DATETIME2",
        TYPE_TIME2 => "TIME2",
        TYPE_TYPED_ARRAY => "TYPED_ARRAY",
        TYPE_VECTOR => "VECTOR",
        TYPE_INVALID => "INVALID",
        TYPE_BOOL => "BOOL",
        TYPE_JSON => "JSON",
        TYPE_NEWDECIMAL => "NEWDECIMAL",
        TYPE_ENUM => "ENUM",
        TYPE_SET => "SET",
        TYPE_TINY_BLOB => "TINY_BLOB",
        TYPE_MEDIUM_BLOB => "MEDIUM_BLOB",
        TYPE_LONG_BLOB => "LONG_BLOB",
        TYPE_BLOB => "BLOB",
        TYPE_VAR_STRING => "VAR_STRING",
        TYPE_STRING => "STRING",
        TYPE_GEOMETRY => "GEOMETRY",
        _ => "UNKNOWN",
    }
}
