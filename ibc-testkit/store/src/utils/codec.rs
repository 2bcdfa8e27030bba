use core::fmt::Display;
use core::marker::PhantomData;

use displaydoc::Display as DisplayDoc;
use serde::de::DeserializeOwned;
use serde::Serialize;

#[derive(Debug, DisplayDoc)]
pub enum CodecError {
    /// JSON codec failure: `{0}`
    Json(serde_json::Error),
    /// protobuf decoding failure: `{0}`
    Protobuf(prost::DecodeError),
    /// decoded raw value is not a valid domain value: `{0}`
    Conversion(String),
    /// expected the null marker `[0x00]`
    NotNull,
}

impl std::error::Error for CodecError {}

/// How values of one type are turned into store bytes and back.
pub trait Codec {
    type Type;
    type Encoded: AsRef<[u8]>;

    fn encode(d: &Self::Type) -> Result<Self::Encoded, CodecError>;

    fn decode(bytes: &[u8]) -> Result<Self::Type, CodecError>;
}

/// Encodes values as JSON with `serde_json`.
#[derive(Clone, Debug)]
pub struct JsonCodec<T>(PhantomData<T>);

impl<T> Codec for JsonCodec<T>
where
    T: Serialize + DeserializeOwned,
{
    type Type = T;
    type Encoded = Vec<u8>;

    fn encode(d: &Self::Type) -> Result<Self::Encoded, CodecError> {
        serde_json::to_vec(d).map_err(CodecError::Json)
    }

    fn decode(bytes: &[u8]) -> Result<Self::Type, CodecError> {
        serde_json::from_slice(bytes).map_err(CodecError::Json)
    }
}

/// Marks a key as set without storing any value.
#[derive(Clone, Debug)]
pub struct NullCodec;

impl Codec for NullCodec {
    type Type = ();
    type Encoded = [u8; 1];

    fn encode(_d: &Self::Type) -> Result<Self::Encoded, CodecError> {
        Ok([0x00])
    }

    fn decode(bytes: &[u8]) -> Result<Self::Type, CodecError> {
        match bytes {
            [0x00] => Ok(()),
            _ => Err(CodecError::NotNull),
        }
    }
}

/// Encodes a domain type through its raw `prost` message `R`.
#[derive(Clone, Debug)]
pub struct ProtobufCodec<T, R> {
    domain_type: PhantomData<T>,
    raw_type: PhantomData<R>,
}

impl<T, R> Codec for ProtobufCodec<T, R>
where
    T: Into<R> + Clone,
    R: TryInto<T> + Default + prost::Message,
    <R as TryInto<T>>::Error: Display,
{
    type Type = T;
    type Encoded = Vec<u8>;

    fn encode(d: &Self::Type) -> Result<Self::Encoded, CodecError> {
        let raw: R = d.clone().into();
        Ok(raw.encode_to_vec())
    }

    fn decode(bytes: &[u8]) -> Result<Self::Type, CodecError> {
        R::decode(bytes)
            .map_err(CodecError::Protobuf)?
            .try_into()
            .map_err(|e| CodecError::Conversion(e.to_string()))
    }
}
