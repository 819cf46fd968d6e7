// ============================================================================
// Serde Support
// Canonical-string serialization for the value types
// ============================================================================
//
// External formats carry these values as their canonical text: instants and
// spans as the fixed seconds+nanos layout, decimals as standard decimal
// text. Absence is expressed by the outer format's own null marker, which
// serde's `Option` handling already maps without touching the decoder.

use crate::codec::canonical;
use crate::decimal::DecimalValue;
use crate::temporal::{Instant, Span, TemporalError};
use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

impl Serialize for Instant {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&canonical::format_instant(Some(self)))
    }
}

impl<'de> Deserialize<'de> for Instant {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        match canonical::parse_instant(&text) {
            Ok(Some(instant)) => Ok(instant),
            Ok(None) => Err(D::Error::custom(TemporalError::AbsentValue)),
            Err(error) => Err(D::Error::custom(error)),
        }
    }
}

impl Serialize for Span {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&canonical::format_span(Some(self)))
    }
}

impl<'de> Deserialize<'de> for Span {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        match canonical::parse_span(&text) {
            Ok(Some(span)) => Ok(span),
            Ok(None) => Err(D::Error::custom(TemporalError::AbsentValue)),
            Err(error) => Err(D::Error::custom(error)),
        }
    }
}

impl Serialize for DecimalValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for DecimalValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(D::Error::custom)
    }
}
