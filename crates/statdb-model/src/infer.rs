//! Storage-kind inference from sampled values.
//!
//! Columns have no declared types; the first non-blank value observed
//! for a column fixes its storage kind for the whole table. Values
//! that later disagree with the sample are still inserted, and SQLite
//! column affinity decides how they are stored.
//!
//! Priority order: integer parse, then float parse, then text.

/// The storage type assigned to a column when its table is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageKind {
    Integer,
    Real,
    Text,
}

impl StorageKind {
    /// Classifies a single sample value.
    ///
    /// An empty or unparseable sample defaults to [`StorageKind::Text`].
    pub fn from_sample(sample: &str) -> Self {
        if sample.parse::<i64>().is_ok() {
            Self::Integer
        } else if sample.parse::<f64>().is_ok() {
            Self::Real
        } else {
            Self::Text
        }
    }

    /// The SQLite type name used in generated DDL.
    pub fn sql_type(self) -> &'static str {
        match self {
            Self::Integer => "INTEGER",
            Self::Real => "REAL",
            Self::Text => "TEXT",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integers_win_over_reals() {
        assert_eq!(StorageKind::from_sample("42"), StorageKind::Integer);
        assert_eq!(StorageKind::from_sample("-7"), StorageKind::Integer);
        assert_eq!(StorageKind::from_sample("+3"), StorageKind::Integer);
        assert_eq!(StorageKind::from_sample("0"), StorageKind::Integer);
    }

    #[test]
    fn decimals_and_exponents_are_real() {
        assert_eq!(StorageKind::from_sample("0.406"), StorageKind::Real);
        assert_eq!(StorageKind::from_sample("-1.5"), StorageKind::Real);
        assert_eq!(StorageKind::from_sample("1e5"), StorageKind::Real);
        assert_eq!(StorageKind::from_sample("2.5E-3"), StorageKind::Real);
    }

    #[test]
    fn everything_else_is_text() {
        assert_eq!(StorageKind::from_sample(""), StorageKind::Text);
        assert_eq!(StorageKind::from_sample("Babe Ruth"), StorageKind::Text);
        assert_eq!(StorageKind::from_sample("12 HR"), StorageKind::Text);
        assert_eq!(StorageKind::from_sample("1,024"), StorageKind::Text);
    }

    #[test]
    fn sql_type_names() {
        assert_eq!(StorageKind::Integer.sql_type(), "INTEGER");
        assert_eq!(StorageKind::Real.sql_type(), "REAL");
        assert_eq!(StorageKind::Text.sql_type(), "TEXT");
    }
}
