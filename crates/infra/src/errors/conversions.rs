//! Conversions from external infrastructure errors into domain errors.

use pmrelay_domain::RelayError;
use reqwest::Error as HttpError;
use roxmltree::Error as XmlError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub RelayError);

impl From<InfraError> for RelayError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<RelayError> for InfraError {
    fn from(value: RelayError) -> Self {
        InfraError(value)
    }
}

/// Extension trait to make the conversion logic explicit in tests and within
/// this module.
trait IntoRelayError {
    fn into_relay(self) -> RelayError;
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → RelayError */
/* -------------------------------------------------------------------------- */

impl IntoRelayError for HttpError {
    fn into_relay(self) -> RelayError {
        // Status failures carry the same wording clients already parse.
        if let Some(status) = self.status() {
            return RelayError::Upstream(format!(
                "Request failed with status code {}",
                status.as_u16()
            ));
        }

        RelayError::Upstream(self.to_string())
    }
}

impl From<HttpError> for InfraError {
    fn from(value: HttpError) -> Self {
        InfraError(value.into_relay())
    }
}

/* -------------------------------------------------------------------------- */
/* roxmltree::Error → RelayError */
/* -------------------------------------------------------------------------- */

impl IntoRelayError for XmlError {
    fn into_relay(self) -> RelayError {
        RelayError::XmlParse(self.to_string())
    }
}

impl From<XmlError> for InfraError {
    fn from(value: XmlError) -> Self {
        InfraError(value.into_relay())
    }
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */
