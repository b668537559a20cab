//! Wire-level types shared by the writer and reader.

use crate::error::Error;

/// Version tag carried in the high 16 bits of a versioned envelope's leading
/// word. Exactly one version is supported; anything else is rejected.
pub const VERSION_1: u32 = 0x8001_0000;

/// Mask selecting the version bits of an envelope's leading word.
pub const VERSION_MASK: u32 = 0xffff_0000;

/// Wire type tag identifying a field or collection element.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Tag {
    /// Terminates a field sequence. Never followed by a field id.
    Stop = 0,
    Void = 1,
    Bool = 2,
    Byte = 3,
    Double = 4,
    I16 = 6,
    I32 = 8,
    I64 = 10,
    /// Strings and raw byte payloads share one framing.
    Binary = 11,
    Struct = 12,
    Map = 13,
    Set = 14,
    List = 15,
}

impl Tag {
    /// Converts a raw wire byte into a tag.
    pub fn from_u8(value: u8) -> Result<Self, Error> {
        match value {
            0 => Ok(Self::Stop),
            1 => Ok(Self::Void),
            2 => Ok(Self::Bool),
            3 => Ok(Self::Byte),
            4 => Ok(Self::Double),
            6 => Ok(Self::I16),
            8 => Ok(Self::I32),
            10 => Ok(Self::I64),
            11 => Ok(Self::Binary),
            12 => Ok(Self::Struct),
            13 => Ok(Self::Map),
            14 => Ok(Self::Set),
            15 => Ok(Self::List),
            _ => Err(Error::InvalidTag(value)),
        }
    }
}

/// Role of a message envelope.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Kind {
    Call = 1,
    Reply = 2,
    Exception = 3,
    Oneway = 4,
}

impl Kind {
    /// Converts a raw wire byte into a message kind.
    pub fn from_u8(value: u8) -> Result<Self, Error> {
        match value {
            1 => Ok(Self::Call),
            2 => Ok(Self::Reply),
            3 => Ok(Self::Exception),
            4 => Ok(Self::Oneway),
            _ => Err(Error::InvalidKind(value)),
        }
    }
}

/// Decoded field header. When `tag` is [Tag::Stop], no id was read and `id`
/// defaults to 0.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldHeader {
    pub tag: Tag,
    pub id: i16,
}

/// Decoded map header.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MapHeader {
    pub key: Tag,
    pub value: Tag,
    pub len: u32,
}

/// Decoded list or set header (both share one wire layout).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ListHeader {
    pub elem: Tag,
    pub len: u32,
}

/// Decoded message envelope: one RPC call/reply wrapper.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MessageHeader {
    pub name: String,
    pub kind: Kind,
    pub seq: i32,
}
