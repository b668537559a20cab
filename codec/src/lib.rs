//! Binary wire codec for the wirecall RPC message envelope.
//!
//! # Overview
//!
//! Encodes and decodes primitive values, strings, and aggregate headers
//! (fields, maps, lists, sets, struct and message boundaries) into/from a
//! flat byte stream in network byte order. This is the layer beneath an RPC
//! transport, consumed by generated or hand-written marshalling code that
//! serializes typed payloads field-by-field. The codec owns no buffers and
//! performs no I/O: [Writer] appends to any [bytes::BufMut] sink and [Reader]
//! consumes any [bytes::Buf] source, with every read bounds-checked against
//! the bound region.
//!
//! # Wire Format
//!
//! All integers are big-endian on the wire regardless of host.
//!
//! | Element | Layout |
//! |---|---|
//! | bool | 1 byte, 0 = false, nonzero = true |
//! | byte | 1 byte, signed |
//! | i16 / i32 / i64 | 2 / 4 / 8 bytes, signed |
//! | double | 8 bytes, IEEE-754 bit pattern |
//! | string / binary | i32 length (>= 0) + raw bytes |
//! | field header | tag byte [+ i16 id unless tag == Stop] |
//! | map header | key tag, value tag, i32 count (>= 0) |
//! | list / set header | element tag, i32 count (>= 0) |
//! | message (versioned) | i32 = 0x8001_0000 \| kind; string name; i32 seq |
//! | message (legacy) | i32 name length; name bytes; kind byte; i32 seq |
//!
//! Envelopes are always written in the versioned form. On read, a
//! non-negative leading word selects the legacy pre-versioned layout; a
//! negative one must carry the supported version tag in its top 16 bits or
//! decoding fails.
//!
//! # Example
//!
//! ```
//! use bytes::BytesMut;
//! use wirecall_codec::{Kind, Reader, Tag, Writer};
//!
//! // Encode a call envelope carrying a single i32 field.
//! let mut writer = Writer::new(BytesMut::new());
//! writer.write_message_begin("ping", Kind::Call, 7);
//! writer.write_struct_begin();
//! writer.write_field_begin(Tag::I32, 1);
//! writer.write_i32(42);
//! writer.write_field_end();
//! writer.write_field_stop();
//! writer.write_struct_end();
//! writer.write_message_end();
//!
//! // Decode it back.
//! let mut reader = Reader::new(writer.into_inner().freeze());
//! let header = reader.read_message_begin().unwrap();
//! assert_eq!((header.name.as_str(), header.kind, header.seq), ("ping", Kind::Call, 7));
//! reader.read_struct_begin();
//! let field = reader.read_field_begin().unwrap();
//! assert_eq!((field.tag, field.id), (Tag::I32, 1));
//! assert_eq!(reader.read_i32().unwrap(), 42);
//! reader.read_field_end();
//! assert_eq!(reader.read_field_begin().unwrap().tag, Tag::Stop);
//! reader.read_struct_end();
//! reader.read_message_end();
//! assert_eq!(reader.remaining(), 0);
//! ```

pub mod error;
pub mod reader;
pub mod types;
pub mod writer;

// Re-export main types
pub use error::Error;
pub use reader::Reader;
pub use types::{
    FieldHeader, Kind, ListHeader, MapHeader, MessageHeader, Tag, VERSION_1, VERSION_MASK,
};
pub use writer::Writer;
