#![no_main]

use libfuzzer_sys::fuzz_target;
use wirecall_codec::{Reader, Tag};

// Walk an arbitrary byte region as an envelope followed by a field sequence.
// Decoding must fail with typed errors, never panic or over-read.
fuzz_target!(|data: &[u8]| {
    let mut reader = Reader::new(data);
    if reader.read_message_begin().is_err() {
        return;
    }
    reader.read_struct_begin();
    for _ in 0..1024 {
        let field = match reader.read_field_begin() {
            Ok(field) => field,
            Err(_) => return,
        };
        let ok = match field.tag {
            Tag::Stop => break,
            Tag::Bool => reader.read_bool().is_ok(),
            Tag::Byte => reader.read_i8().is_ok(),
            Tag::Double => reader.read_double().is_ok(),
            Tag::I16 => reader.read_i16().is_ok(),
            Tag::I32 => reader.read_i32().is_ok(),
            Tag::I64 => reader.read_i64().is_ok(),
            Tag::Binary => reader.read_binary().is_ok(),
            Tag::Map => reader.read_map_begin().is_ok(),
            Tag::Set => reader.read_set_begin().is_ok(),
            Tag::List => reader.read_list_begin().is_ok(),
            // Struct and void bodies carry no immediate payload here.
            Tag::Struct | Tag::Void => true,
        };
        if !ok {
            return;
        }
        reader.read_field_end();
    }
    reader.read_struct_end();
    reader.read_message_end();
    assert!(reader.consumed() <= data.len());
});
