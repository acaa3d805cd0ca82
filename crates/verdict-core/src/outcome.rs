//! The outcome envelope and its builder methods.

use crate::body::Body;
use crate::error::VerdictResult;
use crate::metadata::Metadata;
use crate::options::ResultOptions;
use crate::result_error::ResultError;
use crate::status::ResultStatus;
use http::StatusCode;
use serde::Serialize;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// The outcome of an operation.
///
/// An `Outcome` records whether an operation succeeded, an optional message
/// and code, structured errors, metadata, the HTTP status code to answer with
/// and, for data-carrying outcomes, an optional payload of type `T`.
///
/// Outcomes are built with consuming `with_*` methods, so every call in a
/// chain keeps the concrete payload type:
///
/// ```
/// use verdict_core::Outcome;
/// use http::StatusCode;
///
/// let outcome = Outcome::success_with(vec!["a", "b"])
///     .with_code("listed")
///     .with_http_status_code(StatusCode::CREATED)
///     .with_data(vec!["c"]);
///
/// assert_eq!(outcome.data(), Some(&vec!["c"]));
/// assert_eq!(outcome.http_status_code(), StatusCode::CREATED);
/// ```
///
/// `Outcome::success()` and `Outcome::failure()` build outcomes without a
/// data slot (`Outcome<()>`); their JSON body has no `data` field.
#[derive(Debug, Clone)]
pub struct Outcome<T = ()> {
    status: ResultStatus,
    message: Option<String>,
    code: Option<String>,
    errors: Vec<ResultError>,
    metadata: Metadata,
    http_status_code: StatusCode,
    data: Option<T>,
    carries_data: bool,
    options: Arc<ResultOptions>,
}

impl Outcome<()> {
    /// Creates a successful outcome without a data slot.
    #[must_use]
    pub fn success() -> Self {
        Self::new_in(ResultStatus::Success, None, false, ResultOptions::current())
    }

    /// Creates a failed outcome without a data slot.
    #[must_use]
    pub fn failure() -> Self {
        Self::new_in(ResultStatus::Failure, None, false, ResultOptions::current())
    }
}

impl<T> Outcome<T> {
    pub(crate) fn new_in(
        status: ResultStatus,
        data: Option<T>,
        carries_data: bool,
        options: Arc<ResultOptions>,
    ) -> Self {
        Self {
            status,
            message: None,
            code: None,
            errors: Vec::new(),
            metadata: options.initial_metadata(),
            http_status_code: status.default_status_code(),
            data,
            carries_data,
            options,
        }
    }

    /// Creates a successful outcome carrying `data`.
    #[must_use]
    pub fn success_with(data: T) -> Self {
        Self::new_in(ResultStatus::Success, Some(data), true, ResultOptions::current())
    }

    /// Creates a failed outcome carrying `data`.
    #[must_use]
    pub fn failure_with(data: T) -> Self {
        Self::new_in(ResultStatus::Failure, Some(data), true, ResultOptions::current())
    }

    /// Creates a successful data-carrying outcome whose data is absent.
    #[must_use]
    pub fn success_without_data() -> Self {
        Self::new_in(ResultStatus::Success, None, true, ResultOptions::current())
    }

    /// Creates a failed data-carrying outcome whose data is absent.
    #[must_use]
    pub fn failure_without_data() -> Self {
        Self::new_in(ResultStatus::Failure, None, true, ResultOptions::current())
    }

    /// Creates a failed data-carrying outcome holding a single error.
    ///
    /// ```
    /// use verdict_core::{Outcome, ResultError};
    ///
    /// let outcome = Outcome::<String>::failure_from(ResultError::new("bad id", "invalid_id"));
    /// assert!(outcome.failed());
    /// assert!(outcome.data().is_none());
    /// assert_eq!(outcome.errors().len(), 1);
    /// ```
    #[must_use]
    pub fn failure_from(error: ResultError) -> Self {
        Self::failure_without_data().with_errors([error])
    }

    /// Replaces the message.
    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Replaces the code.
    #[must_use]
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    /// Appends one error. The status is not changed.
    #[must_use]
    pub fn with_error(self, message: impl Into<String>, code: impl Into<String>) -> Self {
        self.with_errors([ResultError::new(message, code)])
    }

    /// Appends every error yielded by `errors`. An empty iterator is a no-op.
    #[must_use]
    pub fn with_errors<I>(mut self, errors: I) -> Self
    where
        I: IntoIterator<Item = ResultError>,
    {
        self.errors.extend(errors);
        self
    }

    /// Inserts a metadata entry.
    ///
    /// # Errors
    ///
    /// Returns `VerdictError::DuplicateMetadataKey` if `key` is already
    /// present, including keys seeded by the metadata factory.
    pub fn with_metadata(
        mut self,
        key: impl Into<String>,
        value: impl Into<Value>,
    ) -> VerdictResult<Self> {
        self.metadata.insert(key, value)?;
        Ok(self)
    }

    /// Inserts a metadata entry from any serializable value, such as an id or
    /// a timestamp type.
    ///
    /// # Errors
    ///
    /// Returns `VerdictError::DuplicateMetadataKey` if `key` is already
    /// present, or `VerdictError::Serialization` if `value` cannot be encoded.
    ///
    /// ```
    /// use verdict_core::Outcome;
    /// use serde::Serialize;
    ///
    /// #[derive(Serialize)]
    /// struct RequestId(u64);
    ///
    /// let outcome = Outcome::success()
    ///     .with_metadata_serialized("requestId", &RequestId(42))
    ///     .unwrap();
    /// assert_eq!(outcome.metadata()["requestId"], 42);
    /// ```
    pub fn with_metadata_serialized<V: Serialize + ?Sized>(
        mut self,
        key: impl Into<String>,
        value: &V,
    ) -> VerdictResult<Self> {
        self.metadata.insert_serialized(key, value)?;
        Ok(self)
    }

    /// Replaces the whole metadata map.
    #[must_use]
    pub fn with_metadata_map(mut self, metadata: Metadata) -> Self {
        self.metadata = metadata;
        self
    }

    /// Replaces the HTTP status code.
    #[must_use]
    pub fn with_http_status_code(mut self, code: StatusCode) -> Self {
        self.http_status_code = code;
        self
    }

    /// Sets or replaces the data. The outcome becomes data-carrying.
    #[must_use]
    pub fn with_data(mut self, data: T) -> Self {
        self.data = Some(data);
        self.carries_data = true;
        self
    }

    /// Returns the status.
    #[must_use]
    pub fn status(&self) -> ResultStatus {
        self.status
    }

    /// Returns `true` if the operation succeeded.
    #[must_use]
    pub fn succeeded(&self) -> bool {
        self.status.is_success()
    }

    /// Returns `true` if the operation failed.
    #[must_use]
    pub fn failed(&self) -> bool {
        !self.succeeded()
    }

    /// Returns the message, if any.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Returns the code, if any.
    #[must_use]
    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    /// Returns the errors in the order they were added.
    #[must_use]
    pub fn errors(&self) -> &[ResultError] {
        &self.errors
    }

    /// Returns the metadata.
    #[must_use]
    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    /// Returns the HTTP status code.
    #[must_use]
    pub fn http_status_code(&self) -> StatusCode {
        self.http_status_code
    }

    /// Returns the data, if present.
    #[must_use]
    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    /// Consumes the outcome and returns its data.
    #[must_use]
    pub fn into_data(self) -> Option<T> {
        self.data
    }

    /// Returns `true` if this outcome has a data slot, set or not.
    #[must_use]
    pub fn carries_data(&self) -> bool {
        self.carries_data
    }

    /// Returns the options captured at construction.
    #[must_use]
    pub fn options(&self) -> &Arc<ResultOptions> {
        &self.options
    }
}

impl<T: Serialize> Outcome<T> {
    /// Serializes the outcome to JSON text.
    ///
    /// # Errors
    ///
    /// Returns `VerdictError::Serialization` if the data cannot be encoded.
    ///
    /// # Example
    ///
    /// ```
    /// use verdict_core::Outcome;
    ///
    /// let json = Outcome::failure().with_error("bad id", "invalid_id").to_json().unwrap();
    /// assert_eq!(
    ///     json,
    ///     r#"{"Succeeded":false,"Errors":[{"Message":"bad id","Code":"invalid_id"}]}"#
    /// );
    /// ```
    pub fn to_json(&self) -> VerdictResult<String> {
        let body = Body::new(self);
        let json = if self.options.json().pretty {
            serde_json::to_string_pretty(&body)?
        } else {
            serde_json::to_string(&body)?
        };
        Ok(json)
    }

    /// Serializes the outcome to a JSON value.
    ///
    /// `serde_json::Value` cannot hold integers wider than 64 bits, so this
    /// can fail where [`to_json`](Self::to_json) succeeds.
    ///
    /// # Errors
    ///
    /// Returns `VerdictError::Serialization` if the data cannot be encoded.
    pub fn to_value(&self) -> VerdictResult<Value> {
        Ok(serde_json::to_value(Body::new(self))?)
    }
}

/// Renders [`to_json`](Outcome::to_json). An outcome whose data cannot be
/// encoded renders as `<unserializable outcome: ...>`; use `to_json` to get
/// the error itself.
impl<T: Serialize> fmt::Display for Outcome<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_json() {
            Ok(json) => f.write_str(&json),
            Err(err) => write!(f, "<unserializable outcome: {err}>"),
        }
    }
}

/// Factories that use these options instead of the registered ones.
impl ResultOptions {
    /// Creates a successful outcome without a data slot.
    #[must_use]
    pub fn success(self: &Arc<Self>) -> Outcome<()> {
        Outcome::new_in(ResultStatus::Success, None, false, Arc::clone(self))
    }

    /// Creates a failed outcome without a data slot.
    #[must_use]
    pub fn failure(self: &Arc<Self>) -> Outcome<()> {
        Outcome::new_in(ResultStatus::Failure, None, false, Arc::clone(self))
    }

    /// Creates a successful outcome carrying `data`.
    #[must_use]
    pub fn success_with<T>(self: &Arc<Self>, data: T) -> Outcome<T> {
        Outcome::new_in(ResultStatus::Success, Some(data), true, Arc::clone(self))
    }

    /// Creates a failed outcome carrying `data`.
    #[must_use]
    pub fn failure_with<T>(self: &Arc<Self>, data: T) -> Outcome<T> {
        Outcome::new_in(ResultStatus::Failure, Some(data), true, Arc::clone(self))
    }

    /// Creates a successful data-carrying outcome whose data is absent.
    #[must_use]
    pub fn success_without_data<T>(self: &Arc<Self>) -> Outcome<T> {
        Outcome::new_in(ResultStatus::Success, None, true, Arc::clone(self))
    }

    /// Creates a failed data-carrying outcome whose data is absent.
    #[must_use]
    pub fn failure_without_data<T>(self: &Arc<Self>) -> Outcome<T> {
        Outcome::new_in(ResultStatus::Failure, None, true, Arc::clone(self))
    }

    /// Creates a failed data-carrying outcome holding a single error.
    #[must_use]
    pub fn failure_from<T>(self: &Arc<Self>, error: ResultError) -> Outcome<T> {
        self.failure_without_data().with_errors([error])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::NamingPolicy;
    use serde_json::json;

    fn camel() -> Arc<ResultOptions> {
        Arc::new(
            ResultOptions::builder()
                .naming(NamingPolicy::CamelCase)
                .build(),
        )
    }

    #[test]
    fn test_success_defaults() {
        let outcome = Outcome::success();
        assert_eq!(outcome.status(), ResultStatus::Success);
        assert!(outcome.succeeded());
        assert!(!outcome.failed());
        assert!(outcome.message().is_none());
        assert!(outcome.code().is_none());
        assert!(outcome.errors().is_empty());
        assert_eq!(outcome.http_status_code(), StatusCode::OK);
        assert!(!outcome.carries_data());
    }

    #[test]
    fn test_failure_defaults() {
        let outcome = Outcome::failure();
        assert_eq!(outcome.status(), ResultStatus::Failure);
        assert!(outcome.failed());
        assert_eq!(outcome.http_status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_failure_with_data_keeps_failure_status() {
        let outcome = Outcome::failure_with(42);
        assert!(outcome.failed());
        assert_eq!(outcome.data(), Some(&42));
        assert_eq!(outcome.http_status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_message_and_code_are_replaced() {
        let outcome = Outcome::success()
            .with_message("first")
            .with_code("one")
            .with_message("second")
            .with_code("two");
        assert_eq!(outcome.message(), Some("second"));
        assert_eq!(outcome.code(), Some("two"));
    }

    #[test]
    fn test_errors_accumulate() {
        let outcome = Outcome::failure()
            .with_error("test", "test_code")
            .with_errors([
                ResultError::new("test", "test_code"),
                ResultError::new("test", "test_code"),
            ])
            .with_error("test", "test_code")
            .with_message("test1")
            .with_code("test_code");

        assert_eq!(outcome.errors().len(), 4);
        assert!(outcome.failed());
        assert_eq!(outcome.message(), Some("test1"));
    }

    #[test]
    fn test_with_errors_empty_is_noop() {
        let outcome = Outcome::failure()
            .with_error("a", "b")
            .with_errors(Vec::new());
        assert_eq!(outcome.errors().len(), 1);
    }

    #[test]
    fn test_with_error_does_not_change_status() {
        let outcome = Outcome::success().with_error("warning", "soft");
        assert!(outcome.succeeded());
        assert_eq!(outcome.http_status_code(), StatusCode::OK);
    }

    #[test]
    fn test_metadata_round_trip() {
        let outcome = Outcome::success()
            .with_metadata("dateTime", "2024-01-01T00:00:00Z")
            .unwrap();
        assert_eq!(outcome.metadata()["dateTime"], json!("2024-01-01T00:00:00Z"));
    }

    #[test]
    fn test_metadata_duplicate_key_fails() {
        let err = Outcome::success()
            .with_metadata("id", 1)
            .unwrap()
            .with_metadata("id", 2)
            .unwrap_err();
        assert!(err.is_duplicate_metadata_key());
    }

    #[test]
    fn test_metadata_serialized_value_in_body() {
        #[derive(Serialize)]
        struct Window {
            from: u32,
            to: u32,
        }

        let json = Outcome::success()
            .with_metadata_serialized("window", &Window { from: 1, to: 5 })
            .unwrap()
            .to_json()
            .unwrap();
        assert_eq!(
            json,
            r#"{"Succeeded":true,"MetaData":{"window":{"from":1,"to":5}}}"#
        );
    }

    #[test]
    fn test_metadata_map_replaces() {
        let replacement: Metadata = [("b", 2)].into_iter().collect();
        let outcome = Outcome::success()
            .with_metadata("a", 1)
            .unwrap()
            .with_metadata_map(replacement);
        assert!(!outcome.metadata().contains_key("a"));
        assert_eq!(outcome.metadata()["b"], json!(2));
    }

    #[test]
    fn test_http_status_code_override_wins() {
        let outcome = Outcome::failure()
            .with_http_status_code(StatusCode::CONFLICT)
            .with_error("taken", "name_taken");
        assert_eq!(outcome.http_status_code(), StatusCode::CONFLICT);
    }

    #[test]
    fn test_with_data_replaces() {
        let outcome = Outcome::success_with("first".to_string()).with_data("second".to_string());
        assert_eq!(outcome.data().map(String::as_str), Some("second"));
        assert_eq!(outcome.into_data(), Some("second".to_string()));
    }

    #[test]
    fn test_with_data_marks_data_slot() {
        let outcome = Outcome::<u32>::success_without_data();
        assert!(outcome.carries_data());
        assert!(outcome.data().is_none());
        assert_eq!(outcome.with_data(7).data(), Some(&7));
    }

    #[test]
    fn test_failure_from() {
        let outcome = Outcome::<Vec<u8>>::failure_from(ResultError::new("error message", "error_code"));
        assert!(outcome.failed());
        assert!(outcome.data().is_none());
        assert_eq!(outcome.errors()[0].message(), "error message");
        assert_eq!(outcome.errors()[0].code(), "error_code");
    }

    #[test]
    fn test_to_json_minimal() {
        assert_eq!(Outcome::success().to_json().unwrap(), r#"{"Succeeded":true}"#);
    }

    #[test]
    fn test_to_json_full_exact_names() {
        let json = Outcome::success_with(vec!["a", "b"])
            .with_message("listed")
            .with_code("ok")
            .with_error("partial", "partial_list")
            .with_metadata("page", 1)
            .unwrap()
            .to_json()
            .unwrap();

        assert_eq!(
            json,
            r#"{"Succeeded":true,"Message":"listed","Code":"ok","Errors":[{"Message":"partial","Code":"partial_list"}],"MetaData":{"page":1},"Data":["a","b"]}"#
        );
    }

    #[test]
    fn test_to_json_camel_case() {
        let json = camel()
            .failure()
            .with_error("bad id", "invalid_id")
            .to_json()
            .unwrap();
        assert_eq!(
            json,
            r#"{"succeeded":false,"errors":[{"message":"bad id","code":"invalid_id"}]}"#
        );
    }

    #[test]
    fn test_to_json_absent_data_is_null() {
        let json = camel().success_without_data::<String>().to_json().unwrap();
        assert_eq!(json, r#"{"succeeded":true,"data":null}"#);
    }

    #[test]
    fn test_to_json_without_omit_empty() {
        let options = Arc::new(ResultOptions::builder().omit_empty(false).build());
        let value = options.success().to_value().unwrap();
        assert_eq!(
            value,
            json!({
                "Succeeded": true,
                "Message": null,
                "Code": null,
                "Errors": [],
                "MetaData": {}
            })
        );
    }

    #[test]
    fn test_to_json_pretty() {
        let options = Arc::new(ResultOptions::builder().pretty(true).build());
        let json = options.success().with_code("ok").to_json().unwrap();
        assert!(json.contains('\n'));
        assert!(json.contains("\"Code\": \"ok\""));
    }

    #[test]
    fn test_serialization_failure_surfaces_at_to_json() {
        use std::collections::HashMap;

        let mut data = HashMap::new();
        data.insert(vec![1u8], "not a string key");
        let outcome = Outcome::success_with(data);

        let err = outcome.to_json().unwrap_err();
        assert!(err.is_serialization());
    }

    #[test]
    fn test_display_renders_json() {
        let outcome = Outcome::success().with_message("hi");
        assert_eq!(outcome.to_string(), r#"{"Succeeded":true,"Message":"hi"}"#);
    }

    #[test]
    fn test_display_unserializable_data_does_not_panic() {
        use std::collections::HashMap;

        let outcome = Outcome::success_with(HashMap::from([(vec![1u8], "x")]));
        let rendered = outcome.to_string();
        assert!(rendered.starts_with("<unserializable outcome: failed to serialize outcome"));
        assert!(format!("{outcome}").starts_with("<unserializable outcome"));
        assert!(outcome.to_json().unwrap_err().is_serialization());
    }

    #[test]
    fn test_explicit_options_seed_metadata() {
        let options = Arc::new(
            ResultOptions::builder()
                .metadata_factory(|| [("requestId", "req-1")].into_iter().collect())
                .build(),
        );

        let outcome = options.success_with(5).with_metadata("extra", true).unwrap();
        let keys: Vec<&str> = outcome.metadata().iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["requestId", "extra"]);

        let err = options
            .failure()
            .with_metadata("requestId", "other")
            .unwrap_err();
        assert!(err.is_duplicate_metadata_key());
    }

    #[test]
    fn test_outcome_keeps_its_options() {
        let options = camel();
        let outcome = options.success();
        assert!(Arc::ptr_eq(outcome.options(), &options));
    }
}
