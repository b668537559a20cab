#![no_main]

use arbitrary::Arbitrary;
use bytes::BytesMut;
use libfuzzer_sys::fuzz_target;
use wirecall_codec::{Kind, Reader, Tag, Writer};

#[derive(Arbitrary, Debug)]
struct Envelope {
    name: String,
    kind: u8,
    seq: i32,
    field_id: i16,
    value: i64,
}

fuzz_target!(|input: Envelope| {
    let kind = match input.kind % 4 {
        0 => Kind::Call,
        1 => Kind::Reply,
        2 => Kind::Exception,
        _ => Kind::Oneway,
    };

    let mut writer = Writer::new(BytesMut::new());
    let mut written = writer.write_message_begin(&input.name, kind, input.seq);
    written += writer.write_struct_begin();
    written += writer.write_field_begin(Tag::I64, input.field_id);
    written += writer.write_i64(input.value);
    written += writer.write_field_end();
    written += writer.write_field_stop();
    written += writer.write_struct_end();
    written += writer.write_message_end();

    let encoded = writer.into_inner().freeze();
    assert_eq!(written, encoded.len());

    let mut reader = Reader::new(encoded);
    let header = reader.read_message_begin().expect("failed to decode a successfully encoded envelope");
    assert_eq!(header.name, input.name);
    assert_eq!(header.kind, kind);
    assert_eq!(header.seq, input.seq);

    reader.read_struct_begin();
    let field = reader.read_field_begin().expect("failed to decode field header");
    assert_eq!(field.tag, Tag::I64);
    assert_eq!(field.id, input.field_id);
    assert_eq!(reader.read_i64().expect("failed to decode field value"), input.value);
    reader.read_field_end();
    assert_eq!(reader.read_field_begin().expect("failed to decode stop").tag, Tag::Stop);
    reader.read_struct_end();
    reader.read_message_end();

    assert_eq!(reader.consumed(), written);
    assert_eq!(reader.remaining(), 0);
});
