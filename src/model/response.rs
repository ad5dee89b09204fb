use anyhow::Context;
use serde::de::DeserializeOwned;

use super::StdResult;

/// A raw response from the GitHub API, before decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    /// The HTTP status code of the response.
    status: u16,

    /// The response body.
    body: String,
}

impl RawResponse {
    /// Creates a new `RawResponse` instance with the given status and body.
    pub fn new(status: u16, body: &str) -> Self {
        Self {
            status,
            body: body.to_string(),
        }
    }

    /// Retrieves the HTTP status code.
    pub fn status(&self) -> u16 {
        self.status
    }

    /// Retrieves the response body.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Decodes the response body into a single domain object.
    pub fn decode<T: DeserializeOwned>(&self) -> StdResult<T> {
        serde_json::from_str(&self.body).with_context(|| {
            format!(
                "Failed to decode response body into {}",
                std::any::type_name::<T>()
            )
        })
    }

    /// Decodes the response body into an ordered list of domain objects.
    pub fn decode_list<T: DeserializeOwned>(&self) -> StdResult<Vec<T>> {
        self.decode()
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;
    use serde_json::json;

    use super::*;

    #[derive(Deserialize, Debug, PartialEq, Eq)]
    struct Record {
        name: String,
    }

    #[test]
    fn decode_a_well_formed_object() {
        let response = RawResponse::new(200, &json!({"name": "record-1"}).to_string());

        let record = response.decode::<Record>().unwrap();

        assert_eq!(
            Record {
                name: "record-1".to_string()
            },
            record
        );
    }

    #[test]
    fn decode_a_mismatched_object_fails() {
        let response = RawResponse::new(200, &json!({"other": "record-1"}).to_string());

        response.decode::<Record>().expect_err("Expected an error");
    }

    #[test]
    fn decode_an_empty_list() {
        let response = RawResponse::new(200, "[]");

        let records = response.decode_list::<Record>().unwrap();

        assert!(records.is_empty());
    }

    #[test]
    fn decode_a_list_with_a_malformed_element_fails() {
        let response =
            RawResponse::new(200, &json!([{"name": "record-1"}, {"other": 1}]).to_string());

        response
            .decode_list::<Record>()
            .expect_err("Expected an error");
    }
}
