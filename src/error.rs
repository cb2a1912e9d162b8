// SPDX-License-Identifier: MPL-2.0
//! Crate-wide error type.
//!
//! Decode work runs on blocking threads and results travel inside UI
//! messages, so every variant stores its source rendered to a `String`
//! and the type stays `Clone + Send`.

use std::fmt;

/// Alias used by every fallible function in the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// What went wrong while reading, decoding, or configuring.
#[derive(Debug, Clone)]
pub enum Error {
    /// Reading or writing a file failed.
    Io(String),
    /// Bytes could not be decoded or encoded as a raster image.
    Decode(String),
    /// An SVG could not be parsed or rasterized.
    Svg(String),
    /// The settings file could not be parsed or serialized.
    Config(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (kind, detail) = match self {
            Error::Io(detail) => ("i/o", detail),
            Error::Decode(detail) => ("decode", detail),
            Error::Svg(detail) => ("svg", detail),
            Error::Config(detail) => ("config", detail),
        };
        write!(f, "{kind} error: {detail}")
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io(source.to_string())
    }
}

impl From<image_rs::ImageError> for Error {
    fn from(source: image_rs::ImageError) -> Self {
        Error::Decode(source.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(source: toml::de::Error) -> Self {
        Error::Config(source.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(source: toml::ser::Error) -> Self {
        Error::Config(source.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_failure_kind() {
        assert_eq!(
            Error::Io("disk gone".into()).to_string(),
            "i/o error: disk gone"
        );
        assert_eq!(
            Error::Decode("bad marker".into()).to_string(),
            "decode error: bad marker"
        );
        assert_eq!(Error::Svg("no root".into()).to_string(), "svg error: no root");
        assert_eq!(
            Error::Config("bad field".into()).to_string(),
            "config error: bad field"
        );
    }

    #[test]
    fn io_failures_convert_through_question_mark() {
        fn read() -> Result<String> {
            Ok(std::fs::read_to_string("/definitely/not/here")?)
        }

        match read() {
            Err(Error::Io(detail)) => assert!(!detail.is_empty()),
            other => panic!("expected an i/o error, got {other:?}"),
        }
    }

    #[test]
    fn decoder_failures_become_decode_errors() {
        let source = image_rs::ImageError::IoError(std::io::Error::other("bad stream"));
        match Error::from(source) {
            Error::Decode(detail) => assert!(detail.contains("bad stream")),
            other => panic!("expected a decode error, got {other:?}"),
        }
    }

    #[test]
    fn malformed_toml_becomes_a_config_error() {
        let parse: std::result::Result<toml::Value, _> = toml::from_str("not [ valid");
        let err: Error = parse.unwrap_err().into();
        assert!(matches!(err, Error::Config(_)));
    }
}
