use std::fmt;

/// Classification of a [`QueryError`](super::QueryError).
///
/// | Kind | Raised by |
/// |------|-----------|
/// | `UnsupportedField` | time-series normalizer, before any provider call |
/// | `ProviderUnavailable` | normalizer and option chain assembler |
/// | `EmptyDataset` | time-series normalizer |
/// | `InconsistentSinglePoint` | single-point reducer |
/// | `UnsupportedDataType` | data type tag parsing |
/// | `SurfaceBuildFailure` | option chain assembler (builder pass-through) |
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum ErrorKind {
    UnsupportedField,
    ProviderUnavailable,
    EmptyDataset,
    InconsistentSinglePoint,
    UnsupportedDataType,
    SurfaceBuildFailure,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::UnsupportedField => "UNSUPPORTED_FIELD",
            Self::ProviderUnavailable => "PROVIDER_UNAVAILABLE",
            Self::EmptyDataset => "EMPTY_DATASET",
            Self::InconsistentSinglePoint => "INCONSISTENT_SINGLE_POINT",
            Self::UnsupportedDataType => "UNSUPPORTED_DATA_TYPE",
            Self::SurfaceBuildFailure => "SURFACE_BUILD_FAILURE",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
