//! Encode half of the codec.
//!
//! All multi-byte values are written most-significant-byte first, independent
//! of host byte order. Every operation returns the number of bytes it
//! appended so composite writes can sum their parts; the begin/end pairing
//! hooks that have no wire footprint return 0.

use crate::types::{Kind, Tag, VERSION_1};
use bytes::BufMut;

/// Encodes envelope framing and primitive values into a byte sink.
///
/// The sink is any [BufMut]; appends are infallible (growth and allocation
/// are the sink's concern). Lengths and counts that do not fit the signed
/// 32-bit wire slot are caller bugs and panic rather than truncate.
pub struct Writer<B: BufMut> {
    sink: B,
}

impl<B: BufMut> Writer<B> {
    /// Binds a writer to a sink.
    pub fn new(sink: B) -> Self {
        Self { sink }
    }

    /// Releases the sink.
    pub fn into_inner(self) -> B {
        self.sink
    }

    pub fn write_bool(&mut self, value: bool) -> usize {
        self.sink.put_u8(value as u8);
        1
    }

    pub fn write_i8(&mut self, value: i8) -> usize {
        self.sink.put_i8(value);
        1
    }

    pub fn write_i16(&mut self, value: i16) -> usize {
        self.sink.put_i16(value);
        2
    }

    pub fn write_i32(&mut self, value: i32) -> usize {
        self.sink.put_i32(value);
        4
    }

    pub fn write_i64(&mut self, value: i64) -> usize {
        self.sink.put_i64(value);
        8
    }

    /// Writes the IEEE-754 bit pattern verbatim, big-endian. No NaN or
    /// infinity normalization.
    pub fn write_double(&mut self, value: f64) -> usize {
        self.sink.put_f64(value);
        8
    }

    /// Writes a signed 32-bit length prefix followed by the raw bytes.
    pub fn write_binary(&mut self, value: &[u8]) -> usize {
        let len = i32::try_from(value.len()).expect("binary length exceeds i32");
        let prefix = self.write_i32(len);
        self.sink.put_slice(value);
        prefix + value.len()
    }

    /// Strings share the binary framing.
    pub fn write_string(&mut self, value: &str) -> usize {
        self.write_binary(value.as_bytes())
    }

    /// Writes a versioned envelope: `VERSION_1 | kind`, the length-prefixed
    /// name, then the sequence id. The legacy unversioned layout is read-only
    /// compatibility; it is never written.
    pub fn write_message_begin(&mut self, name: &str, kind: Kind, seq: i32) -> usize {
        let word = (VERSION_1 | kind as u32) as i32;
        let mut written = self.write_i32(word);
        written += self.write_string(name);
        written += self.write_i32(seq);
        written
    }

    pub fn write_message_end(&mut self) -> usize {
        0
    }

    pub fn write_struct_begin(&mut self) -> usize {
        0
    }

    pub fn write_struct_end(&mut self) -> usize {
        0
    }

    /// Writes a field header: tag then id, 3 bytes. The stop sentinel has its
    /// own operation ([Self::write_field_stop]) and never carries an id.
    pub fn write_field_begin(&mut self, tag: Tag, id: i16) -> usize {
        debug_assert!(tag != Tag::Stop, "use write_field_stop");
        self.write_tag(tag) + self.write_i16(id)
    }

    pub fn write_field_end(&mut self) -> usize {
        0
    }

    /// Terminates a field sequence: the 1-byte stop tag, no id.
    pub fn write_field_stop(&mut self) -> usize {
        self.write_tag(Tag::Stop)
    }

    /// Writes a map header: key tag, value tag, element count.
    pub fn write_map_begin(&mut self, key: Tag, value: Tag, len: u32) -> usize {
        let len = i32::try_from(len).expect("map length exceeds i32");
        self.write_tag(key) + self.write_tag(value) + self.write_i32(len)
    }

    pub fn write_map_end(&mut self) -> usize {
        0
    }

    /// Writes a list header: element tag, element count.
    pub fn write_list_begin(&mut self, elem: Tag, len: u32) -> usize {
        let len = i32::try_from(len).expect("list length exceeds i32");
        self.write_tag(elem) + self.write_i32(len)
    }

    pub fn write_list_end(&mut self) -> usize {
        0
    }

    /// Sets share the list wire layout.
    pub fn write_set_begin(&mut self, elem: Tag, len: u32) -> usize {
        let len = i32::try_from(len).expect("set length exceeds i32");
        self.write_tag(elem) + self.write_i32(len)
    }

    pub fn write_set_end(&mut self) -> usize {
        0
    }

    fn write_tag(&mut self, tag: Tag) -> usize {
        self.sink.put_u8(tag as u8);
        1
    }
}
