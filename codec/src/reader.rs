//! Decode half of the codec.
//!
//! Every read is funneled through one checked-access gate that verifies
//! enough bytes remain before anything is touched, so no
//! operation can read past the end of the bound region. Decoding either
//! completes or fails synchronously with a typed [Error]; the codec never
//! guesses a fallback interpretation.

use crate::{
    error::Error,
    types::{FieldHeader, Kind, ListHeader, MapHeader, MessageHeader, Tag, VERSION_1, VERSION_MASK},
};
use bytes::{Buf, Bytes};

/// Decodes envelope framing and primitive values from a bounded byte source.
///
/// The source is any [Buf] over an already-materialized region (`&[u8]` and
/// [Bytes] both qualify). The reader tracks the total bytes consumed by
/// successful reads; per-operation counts are deltas of [Reader::consumed].
pub struct Reader<B: Buf> {
    src: B,
    consumed: usize,
}

impl<B: Buf> Reader<B> {
    /// Binds a reader to a source region.
    pub fn new(src: B) -> Self {
        Self { src, consumed: 0 }
    }

    /// Total bytes consumed by successful reads so far.
    pub fn consumed(&self) -> usize {
        self.consumed
    }

    /// Bytes left in the bound region.
    pub fn remaining(&self) -> usize {
        self.src.remaining()
    }

    /// The checked-access gate: fails without advancing when fewer than `len`
    /// bytes remain, otherwise accounts for `len` bytes about to be read.
    fn ensure(&mut self, len: usize) -> Result<(), Error> {
        if self.src.remaining() < len {
            return Err(Error::EndOfBuffer);
        }
        self.consumed += len;
        Ok(())
    }

    /// Any non-zero byte decodes to true.
    pub fn read_bool(&mut self) -> Result<bool, Error> {
        self.ensure(1)?;
        Ok(self.src.get_u8() != 0)
    }

    pub fn read_i8(&mut self) -> Result<i8, Error> {
        self.ensure(1)?;
        Ok(self.src.get_i8())
    }

    pub fn read_i16(&mut self) -> Result<i16, Error> {
        self.ensure(2)?;
        Ok(self.src.get_i16())
    }

    pub fn read_i32(&mut self) -> Result<i32, Error> {
        self.ensure(4)?;
        Ok(self.src.get_i32())
    }

    pub fn read_i64(&mut self) -> Result<i64, Error> {
        self.ensure(8)?;
        Ok(self.src.get_i64())
    }

    /// Reads the IEEE-754 bit pattern verbatim, big-endian. NaN and infinity
    /// pass through unchanged.
    pub fn read_double(&mut self) -> Result<f64, Error> {
        self.ensure(8)?;
        Ok(self.src.get_f64())
    }

    /// Reads a signed 32-bit length prefix and that many raw bytes. Zero-copy
    /// when the source is [Bytes].
    pub fn read_binary(&mut self) -> Result<Bytes, Error> {
        let len = self.read_len()?;
        self.ensure(len)?;
        Ok(self.src.copy_to_bytes(len))
    }

    /// Like [Self::read_binary], but the body must be valid UTF-8.
    pub fn read_string(&mut self) -> Result<String, Error> {
        let len = self.read_i32()?;
        self.read_string_body(len)
    }

    /// Reads an envelope header. Dispatches on the sign of the leading word:
    /// non-negative selects the legacy unversioned layout, negative the
    /// versioned one.
    pub fn read_message_begin(&mut self) -> Result<MessageHeader, Error> {
        let word = self.read_i32()?;
        if word >= 0 {
            self.read_message_legacy(word)
        } else {
            self.read_message_versioned(word)
        }
    }

    pub fn read_message_end(&mut self) {}

    pub fn read_struct_begin(&mut self) {}

    pub fn read_struct_end(&mut self) {}

    /// Reads a field header. On the stop sentinel no id follows and the id
    /// defaults to 0.
    pub fn read_field_begin(&mut self) -> Result<FieldHeader, Error> {
        let tag = self.read_tag()?;
        if tag == Tag::Stop {
            return Ok(FieldHeader { tag, id: 0 });
        }
        let id = self.read_i16()?;
        Ok(FieldHeader { tag, id })
    }

    pub fn read_field_end(&mut self) {}

    pub fn read_map_begin(&mut self) -> Result<MapHeader, Error> {
        let key = self.read_tag()?;
        let value = self.read_tag()?;
        let len = self.read_count()?;
        Ok(MapHeader { key, value, len })
    }

    pub fn read_map_end(&mut self) {}

    pub fn read_list_begin(&mut self) -> Result<ListHeader, Error> {
        let elem = self.read_tag()?;
        let len = self.read_count()?;
        Ok(ListHeader { elem, len })
    }

    pub fn read_list_end(&mut self) {}

    /// Sets share the list wire layout.
    pub fn read_set_begin(&mut self) -> Result<ListHeader, Error> {
        self.read_list_begin()
    }

    pub fn read_set_end(&mut self) {}

    /// Legacy unversioned layout: the leading word was the name length; name
    /// bytes, a kind byte, and the sequence id follow.
    fn read_message_legacy(&mut self, len: i32) -> Result<MessageHeader, Error> {
        let name = self.read_string_body(len)?;
        let kind = Kind::from_u8(self.read_i8()? as u8)?;
        let seq = self.read_i32()?;
        Ok(MessageHeader { name, kind, seq })
    }

    /// Versioned layout: the top 16 bits of the (negative) leading word must
    /// equal the supported version tag; the low 8 bits carry the kind.
    fn read_message_versioned(&mut self, word: i32) -> Result<MessageHeader, Error> {
        let version = word as u32 & VERSION_MASK;
        if version != VERSION_1 {
            return Err(Error::BadVersion(version));
        }
        let kind = Kind::from_u8((word & 0xff) as u8)?;
        let name = self.read_string()?;
        let seq = self.read_i32()?;
        Ok(MessageHeader { name, kind, seq })
    }

    fn read_tag(&mut self) -> Result<Tag, Error> {
        self.ensure(1)?;
        Tag::from_u8(self.src.get_u8())
    }

    /// Reads a length/count slot: signed on the wire, logically unsigned.
    /// Negative is a protocol error before any byte access.
    fn read_len(&mut self) -> Result<usize, Error> {
        let len = self.read_i32()?;
        if len < 0 {
            return Err(Error::NegativeSize(len));
        }
        Ok(len as usize)
    }

    fn read_count(&mut self) -> Result<u32, Error> {
        self.read_len().map(|len| len as u32)
    }

    fn read_string_body(&mut self, len: i32) -> Result<String, Error> {
        if len < 0 {
            return Err(Error::NegativeSize(len));
        }
        let len = len as usize;
        if len == 0 {
            return Ok(String::new());
        }
        self.ensure(len)?;
        let body = self.src.copy_to_bytes(len);
        String::from_utf8(body.into()).map_err(|_| Error::InvalidUtf8)
    }
}
