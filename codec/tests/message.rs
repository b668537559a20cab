//! End-to-end envelope scenarios exercising the writer and reader together.

use bytes::BytesMut;
use wirecall_codec::{Error, Kind, Reader, Tag, Writer};

/// Encode a call envelope with one i32 field, decode it, and verify every
/// piece comes back identically with zero leftover bytes.
#[test]
fn test_call_roundtrip() {
    let mut writer = Writer::new(BytesMut::new());
    let mut written = writer.write_message_begin("ping", Kind::Call, 7);
    written += writer.write_struct_begin();
    written += writer.write_field_begin(Tag::I32, 1);
    written += writer.write_i32(42);
    written += writer.write_field_end();
    written += writer.write_field_stop();
    written += writer.write_struct_end();
    written += writer.write_message_end();

    let encoded = writer.into_inner().freeze();
    assert_eq!(written, encoded.len());
    // Envelope (16) + field header (3) + value (4) + stop (1).
    assert_eq!(written, 16 + 3 + 4 + 1);

    let mut reader = Reader::new(encoded);
    let header = reader.read_message_begin().unwrap();
    assert_eq!(header.name, "ping");
    assert_eq!(header.kind, Kind::Call);
    assert_eq!(header.seq, 7);

    reader.read_struct_begin();
    let field = reader.read_field_begin().unwrap();
    assert_eq!(field.tag, Tag::I32);
    assert_eq!(field.id, 1);
    assert_eq!(reader.read_i32().unwrap(), 42);
    reader.read_field_end();

    let stop = reader.read_field_begin().unwrap();
    assert_eq!(stop.tag, Tag::Stop);
    assert_eq!(stop.id, 0);
    reader.read_struct_end();
    reader.read_message_end();

    assert_eq!(reader.remaining(), 0);
    assert_eq!(reader.consumed(), written);
}

/// The exact bytes of the versioned envelope are part of the contract.
#[test]
fn test_versioned_envelope_bytes() {
    let mut writer = Writer::new(BytesMut::new());
    writer.write_message_begin("ping", Kind::Call, 7);
    let encoded = writer.into_inner();
    assert_eq!(
        encoded[..],
        [
            0x80, 0x01, 0x00, 0x01, // VERSION_1 | CALL
            0x00, 0x00, 0x00, 0x04, b'p', b'i', b'n', b'g', // name
            0x00, 0x00, 0x00, 0x07, // seq
        ]
    );
}

/// A pre-versioned peer sends the name length first; the reader must accept
/// that layout unchanged.
#[test]
fn test_legacy_envelope_accepted() {
    let encoded = [
        0x00, 0x00, 0x00, 0x03, b'a', b'd', b'd', // name
        0x01, // CALL
        0xFF, 0xFF, 0xFF, 0xFF, // seq = -1
    ];
    let mut reader = Reader::new(&encoded[..]);
    let header = reader.read_message_begin().unwrap();
    assert_eq!(header.name, "add");
    assert_eq!(header.kind, Kind::Call);
    assert_eq!(header.seq, -1);
    assert_eq!(reader.remaining(), 0);
}

/// Unknown versions are rejected outright, never approximated.
#[test]
fn test_foreign_version_rejected() {
    let encoded = [0x80, 0x02, 0x00, 0x01, 0x00, 0x00, 0x00, 0x00];
    let mut reader = Reader::new(&encoded[..]);
    assert!(matches!(
        reader.read_message_begin(),
        Err(Error::BadVersion(0x8002_0000))
    ));
}

/// Truncating an envelope at any point yields a typed failure, never a
/// partial value.
#[test]
fn test_truncated_envelope() {
    let mut writer = Writer::new(BytesMut::new());
    writer.write_message_begin("ping", Kind::Call, 7);
    let encoded = writer.into_inner().freeze();

    for cut in 0..encoded.len() {
        let mut reader = Reader::new(encoded.slice(..cut));
        assert!(
            matches!(reader.read_message_begin(), Err(Error::EndOfBuffer)),
            "cut at {cut} did not fail with EndOfBuffer"
        );
    }
}

/// Nested aggregates: a map of string -> list<i64> framed field-by-field.
#[test]
fn test_nested_aggregates() {
    let mut writer = Writer::new(BytesMut::new());
    writer.write_message_begin("stats", Kind::Reply, 3);
    writer.write_struct_begin();
    writer.write_field_begin(Tag::Map, 1);
    writer.write_map_begin(Tag::Binary, Tag::List, 1);
    writer.write_string("latencies");
    writer.write_list_begin(Tag::I64, 2);
    writer.write_i64(250);
    writer.write_i64(i64::MIN);
    writer.write_list_end();
    writer.write_map_end();
    writer.write_field_end();
    writer.write_field_stop();
    writer.write_struct_end();
    writer.write_message_end();

    let mut reader = Reader::new(writer.into_inner().freeze());
    let header = reader.read_message_begin().unwrap();
    assert_eq!(header.name, "stats");
    assert_eq!(header.kind, Kind::Reply);

    reader.read_struct_begin();
    let field = reader.read_field_begin().unwrap();
    assert_eq!((field.tag, field.id), (Tag::Map, 1));

    let map = reader.read_map_begin().unwrap();
    assert_eq!((map.key, map.value, map.len), (Tag::Binary, Tag::List, 1));
    assert_eq!(reader.read_string().unwrap(), "latencies");

    let list = reader.read_list_begin().unwrap();
    assert_eq!((list.elem, list.len), (Tag::I64, 2));
    assert_eq!(reader.read_i64().unwrap(), 250);
    assert_eq!(reader.read_i64().unwrap(), i64::MIN);
    reader.read_list_end();
    reader.read_map_end();
    reader.read_field_end();

    assert_eq!(reader.read_field_begin().unwrap().tag, Tag::Stop);
    reader.read_struct_end();
    reader.read_message_end();
    assert_eq!(reader.remaining(), 0);
}

/// An exception reply round-trips like any other envelope.
#[test]
fn test_exception_envelope() {
    let mut writer = Writer::new(BytesMut::new());
    writer.write_message_begin("ping", Kind::Exception, 7);
    writer.write_struct_begin();
    writer.write_field_begin(Tag::Binary, 1);
    writer.write_string("method unknown");
    writer.write_field_end();
    writer.write_field_stop();
    writer.write_struct_end();
    writer.write_message_end();

    let mut reader = Reader::new(writer.into_inner().freeze());
    let header = reader.read_message_begin().unwrap();
    assert_eq!(header.kind, Kind::Exception);
    reader.read_struct_begin();
    let field = reader.read_field_begin().unwrap();
    assert_eq!(field.tag, Tag::Binary);
    assert_eq!(reader.read_string().unwrap(), "method unknown");
    assert_eq!(reader.read_field_begin().unwrap().tag, Tag::Stop);
    assert_eq!(reader.remaining(), 0);
}
