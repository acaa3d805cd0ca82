//! JSON encoding of an outcome.
//!
//! The body carries `succeeded`, `message`, `code`, `errors`, `metaData` and,
//! for data-carrying outcomes, `data`, always in that order. The status and
//! the HTTP status code are never part of the body.

use crate::options::{JsonOptions, NamingPolicy};
use crate::outcome::Outcome;
use crate::result_error::ResultError;
use serde::ser::{Impossible, SerializeMap, Serializer};
use serde::Serialize;
use std::fmt;

/// Fields of the serialized body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Field {
    Succeeded,
    Message,
    Code,
    Errors,
    MetaData,
    Data,
}

impl Field {
    pub(crate) const fn name(self, naming: NamingPolicy) -> &'static str {
        match (naming, self) {
            (NamingPolicy::Exact, Self::Succeeded) => "Succeeded",
            (NamingPolicy::Exact, Self::Message) => "Message",
            (NamingPolicy::Exact, Self::Code) => "Code",
            (NamingPolicy::Exact, Self::Errors) => "Errors",
            (NamingPolicy::Exact, Self::MetaData) => "MetaData",
            (NamingPolicy::Exact, Self::Data) => "Data",
            (NamingPolicy::CamelCase, Self::Succeeded) => "succeeded",
            (NamingPolicy::CamelCase, Self::Message) => "message",
            (NamingPolicy::CamelCase, Self::Code) => "code",
            (NamingPolicy::CamelCase, Self::Errors) => "errors",
            (NamingPolicy::CamelCase, Self::MetaData) => "metaData",
            (NamingPolicy::CamelCase, Self::Data) => "data",
        }
    }
}

/// Borrowed view of an outcome that serializes with its JSON options.
pub(crate) struct Body<'a, T> {
    outcome: &'a Outcome<T>,
    json: JsonOptions,
}

impl<'a, T> Body<'a, T> {
    pub(crate) fn new(outcome: &'a Outcome<T>) -> Self {
        Self {
            json: *outcome.options().json(),
            outcome,
        }
    }
}

impl<T: Serialize> Serialize for Body<'_, T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let naming = self.json.naming;
        let omit = self.json.omit_empty;
        let outcome = self.outcome;
        let mut map = serializer.serialize_map(None)?;

        map.serialize_entry(Field::Succeeded.name(naming), &outcome.succeeded())?;

        if !(omit && outcome.message().is_none()) {
            map.serialize_entry(Field::Message.name(naming), &outcome.message())?;
        }
        if !(omit && outcome.code().is_none()) {
            map.serialize_entry(Field::Code.name(naming), &outcome.code())?;
        }
        if !(omit && outcome.errors().is_empty()) {
            let errors: Vec<ErrorEntry<'_>> = outcome
                .errors()
                .iter()
                .map(|error| ErrorEntry { error, naming })
                .collect();
            map.serialize_entry(Field::Errors.name(naming), &errors)?;
        }
        if !(omit && outcome.metadata().is_empty()) {
            map.serialize_entry(Field::MetaData.name(naming), outcome.metadata())?;
        }
        if outcome.carries_data() {
            map.serialize_entry(Field::Data.name(naming), &outcome.data())?;
        }

        map.end()
    }
}

struct ErrorEntry<'a> {
    error: &'a ResultError,
    naming: NamingPolicy,
}

impl Serialize for ErrorEntry<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry(Field::Message.name(self.naming), self.error.message())?;
        map.serialize_entry(Field::Code.name(self.naming), self.error.code())?;
        map.end()
    }
}

/// Returns `true` if `value` encodes to JSON `null`.
///
/// Stops at the first non-null token, so large payloads are not walked.
pub(crate) fn serializes_to_null<T: Serialize + ?Sized>(value: &T) -> bool {
    value.serialize(NullCheck).is_ok()
}

#[derive(Debug)]
struct NotNull;

impl fmt::Display for NotNull {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("value is not null")
    }
}

impl std::error::Error for NotNull {}

impl serde::ser::Error for NotNull {
    fn custom<M: fmt::Display>(_msg: M) -> Self {
        Self
    }
}

/// Accepts exactly the shapes `serde_json` writes as `null`.
struct NullCheck;

impl Serializer for NullCheck {
    type Ok = ();
    type Error = NotNull;
    type SerializeSeq = Impossible<(), NotNull>;
    type SerializeTuple = Impossible<(), NotNull>;
    type SerializeTupleStruct = Impossible<(), NotNull>;
    type SerializeTupleVariant = Impossible<(), NotNull>;
    type SerializeMap = Impossible<(), NotNull>;
    type SerializeStruct = Impossible<(), NotNull>;
    type SerializeStructVariant = Impossible<(), NotNull>;

    fn serialize_none(self) -> Result<(), NotNull> {
        Ok(())
    }

    fn serialize_some<T: Serialize + ?Sized>(self, value: &T) -> Result<(), NotNull> {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<(), NotNull> {
        Ok(())
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<(), NotNull> {
        Ok(())
    }

    fn serialize_newtype_struct<T: Serialize + ?Sized>(
        self,
        _name: &'static str,
        value: &T,
    ) -> Result<(), NotNull> {
        value.serialize(self)
    }

    fn serialize_bool(self, _v: bool) -> Result<(), NotNull> {
        Err(NotNull)
    }

    fn serialize_i8(self, _v: i8) -> Result<(), NotNull> {
        Err(NotNull)
    }

    fn serialize_i16(self, _v: i16) -> Result<(), NotNull> {
        Err(NotNull)
    }

    fn serialize_i32(self, _v: i32) -> Result<(), NotNull> {
        Err(NotNull)
    }

    fn serialize_i64(self, _v: i64) -> Result<(), NotNull> {
        Err(NotNull)
    }

    fn serialize_i128(self, _v: i128) -> Result<(), NotNull> {
        Err(NotNull)
    }

    fn serialize_u8(self, _v: u8) -> Result<(), NotNull> {
        Err(NotNull)
    }

    fn serialize_u16(self, _v: u16) -> Result<(), NotNull> {
        Err(NotNull)
    }

    fn serialize_u32(self, _v: u32) -> Result<(), NotNull> {
        Err(NotNull)
    }

    fn serialize_u64(self, _v: u64) -> Result<(), NotNull> {
        Err(NotNull)
    }

    fn serialize_u128(self, _v: u128) -> Result<(), NotNull> {
        Err(NotNull)
    }

    // serde_json writes non-finite floats as `null`.
    fn serialize_f32(self, v: f32) -> Result<(), NotNull> {
        if v.is_finite() {
            Err(NotNull)
        } else {
            Ok(())
        }
    }

    fn serialize_f64(self, v: f64) -> Result<(), NotNull> {
        if v.is_finite() {
            Err(NotNull)
        } else {
            Ok(())
        }
    }

    fn serialize_char(self, _v: char) -> Result<(), NotNull> {
        Err(NotNull)
    }

    fn serialize_str(self, _v: &str) -> Result<(), NotNull> {
        Err(NotNull)
    }

    fn serialize_bytes(self, _v: &[u8]) -> Result<(), NotNull> {
        Err(NotNull)
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
    ) -> Result<(), NotNull> {
        Err(NotNull)
    }

    fn serialize_newtype_variant<T: Serialize + ?Sized>(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _value: &T,
    ) -> Result<(), NotNull> {
        Err(NotNull)
    }

    fn serialize_seq(self, _len: Option<usize>) -> Result<Self::SerializeSeq, NotNull> {
        Err(NotNull)
    }

    fn serialize_tuple(self, _len: usize) -> Result<Self::SerializeTuple, NotNull> {
        Err(NotNull)
    }

    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleStruct, NotNull> {
        Err(NotNull)
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleVariant, NotNull> {
        Err(NotNull)
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<Self::SerializeMap, NotNull> {
        Err(NotNull)
    }

    fn serialize_struct(
        self,
        _name: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStruct, NotNull> {
        Err(NotNull)
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStructVariant, NotNull> {
        Err(NotNull)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_names() {
        assert_eq!(Field::MetaData.name(NamingPolicy::Exact), "MetaData");
        assert_eq!(Field::MetaData.name(NamingPolicy::CamelCase), "metaData");
        assert_eq!(Field::Succeeded.name(NamingPolicy::CamelCase), "succeeded");
        assert_eq!(Field::Data.name(NamingPolicy::Exact), "Data");
    }

    #[test]
    fn test_error_entry_naming() {
        let error = ResultError::new("bad id", "invalid_id");
        let exact = serde_json::to_string(&ErrorEntry {
            error: &error,
            naming: NamingPolicy::Exact,
        })
        .unwrap();
        let camel = serde_json::to_string(&ErrorEntry {
            error: &error,
            naming: NamingPolicy::CamelCase,
        })
        .unwrap();

        assert_eq!(exact, r#"{"Message":"bad id","Code":"invalid_id"}"#);
        assert_eq!(camel, r#"{"message":"bad id","code":"invalid_id"}"#);
    }

    #[test]
    fn test_serializes_to_null() {
        #[derive(Serialize)]
        struct Marker;

        #[derive(Serialize)]
        struct Wrapper(Option<u8>);

        assert!(serializes_to_null(&()));
        assert!(serializes_to_null(&None::<String>));
        assert!(serializes_to_null(&Some(None::<u8>)));
        assert!(serializes_to_null(&serde_json::Value::Null));
        assert!(serializes_to_null(&Marker));
        assert!(serializes_to_null(&Wrapper(None)));
        assert!(serializes_to_null(&f64::NAN));

        assert!(!serializes_to_null(&0));
        assert!(!serializes_to_null(&u128::MAX));
        assert!(!serializes_to_null(&""));
        assert!(!serializes_to_null(&Vec::<u8>::new()));
        assert!(!serializes_to_null(&Wrapper(Some(1))));
        assert!(!serializes_to_null(&serde_json::json!({})));
    }
}
