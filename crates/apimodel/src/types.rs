use crate::prelude::*;
use derive_more::Display;

///
/// ColumnType
///
/// Storage type class names recognized by the type map. Variant idents are
/// the exact class names reported by the mapping layer; lookup is
/// case-sensitive with no aliasing.
///

#[allow(clippy::upper_case_acronyms)]
#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, PartialEq, Serialize)]
pub enum ColumnType {
    ARRAY,
    BIGINT,
    BOOLEAN,
    BigInteger,
    Boolean,
    CHAR,
    DATE,
    DATETIME,
    DECIMAL,
    Date,
    DateTime,
    FLOAT,
    Float,
    INT,
    INTEGER,
    Integer,
    JSON,
    NCHAR,
    NUMERIC,
    NVARCHAR,
    Numeric,
    REAL,
    SMALLINT,
    SmallInteger,
    String,
    TEXT,
    TIME,
    TIMESTAMP,
    Text,
    Time,
    Unicode,
    UnicodeText,
    VARCHAR,
}

impl ColumnType {
    /// Look up a storage type class name in the type map.
    #[must_use]
    pub fn from_type_name(name: &str) -> Option<Self> {
        match name {
            "ARRAY" => Some(Self::ARRAY),
            "BIGINT" => Some(Self::BIGINT),
            "BOOLEAN" => Some(Self::BOOLEAN),
            "BigInteger" => Some(Self::BigInteger),
            "Boolean" => Some(Self::Boolean),
            "CHAR" => Some(Self::CHAR),
            "DATE" => Some(Self::DATE),
            "DATETIME" => Some(Self::DATETIME),
            "DECIMAL" => Some(Self::DECIMAL),
            "Date" => Some(Self::Date),
            "DateTime" => Some(Self::DateTime),
            "FLOAT" => Some(Self::FLOAT),
            "Float" => Some(Self::Float),
            "INT" => Some(Self::INT),
            "INTEGER" => Some(Self::INTEGER),
            "Integer" => Some(Self::Integer),
            "JSON" => Some(Self::JSON),
            "NCHAR" => Some(Self::NCHAR),
            "NUMERIC" => Some(Self::NUMERIC),
            "NVARCHAR" => Some(Self::NVARCHAR),
            "Numeric" => Some(Self::Numeric),
            "REAL" => Some(Self::REAL),
            "SMALLINT" => Some(Self::SMALLINT),
            "SmallInteger" => Some(Self::SmallInteger),
            "String" => Some(Self::String),
            "TEXT" => Some(Self::TEXT),
            "TIME" => Some(Self::TIME),
            "TIMESTAMP" => Some(Self::TIMESTAMP),
            "Text" => Some(Self::Text),
            "Time" => Some(Self::Time),
            "Unicode" => Some(Self::Unicode),
            "UnicodeText" => Some(Self::UnicodeText),
            "VARCHAR" => Some(Self::VARCHAR),
            _ => None,
        }
    }

    /// API field category this storage type marshals to.
    #[must_use]
    pub const fn field_kind(self) -> FieldKind {
        match self {
            Self::ARRAY => FieldKind::List,

            Self::INT
            | Self::BIGINT
            | Self::SMALLINT
            | Self::INTEGER
            | Self::Integer
            | Self::SmallInteger
            | Self::BigInteger => FieldKind::Integer,

            Self::CHAR
            | Self::VARCHAR
            | Self::NCHAR
            | Self::NVARCHAR
            | Self::TEXT
            | Self::Text
            | Self::String
            | Self::Unicode
            | Self::UnicodeText => FieldKind::String,

            // FLOAT and NUMERIC marshal as strings, not floats
            Self::FLOAT | Self::NUMERIC => FieldKind::String,

            Self::REAL | Self::DECIMAL | Self::Numeric | Self::Float | Self::TIMESTAMP => {
                FieldKind::Float
            }

            Self::DATETIME | Self::TIME | Self::DateTime | Self::Time => FieldKind::DateTime,

            Self::DATE | Self::Date => FieldKind::Date,

            Self::BOOLEAN | Self::Boolean => FieldKind::Boolean,

            Self::JSON => FieldKind::Raw,
        }
    }
}

///
/// FieldKind
///

#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, PartialEq, Serialize)]
#[remain::sorted]
pub enum FieldKind {
    Boolean,
    Date,
    DateTime,
    Float,
    Integer,
    List,
    Raw,
    String,
}

///
/// TESTS
///
