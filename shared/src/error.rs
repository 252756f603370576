use thiserror::Error;

/// Errors raised by the map core and the selection form.
///
/// Only `MapAssetUnavailable` is terminal, and only for the map view itself.
/// Everything else is reported for a single region or a single input and the
/// caller carries on with the rest.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MapError {
    /// The vector map could not be fetched or parsed.
    #[error("map asset unavailable: {0}")]
    MapAssetUnavailable(String),

    /// A region code with no registry entry reached the map core.
    #[error("unknown region code: {0}")]
    InvalidRegion(String),

    /// Free-text state input matched neither a name nor an abbreviation.
    #[error("invalid state name or abbreviation: {0}")]
    UnknownState(String),

    /// The resolved state is already part of the selection.
    #[error("state already selected: {0}")]
    AlreadySelected(&'static str),

    /// A form-type identifier outside the supported set.
    #[error("unknown form type: {0}")]
    UnknownFormType(String),
}
