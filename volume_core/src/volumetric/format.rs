use std::{
    fmt,
    io::{self, Read, Write},
    str::FromStr,
};

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};

use crate::error::ImportError;

/// Encoding of one sample in a raw volume file.
///
/// All multi-byte encodings are little-endian.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SampleFormat {
    Int8,
    Uint8,
    Int16,
    Uint16,
    Int32,
    Uint32,
}

impl SampleFormat {
    pub const ALL: [SampleFormat; 6] = [
        SampleFormat::Int8,
        SampleFormat::Uint8,
        SampleFormat::Int16,
        SampleFormat::Uint16,
        SampleFormat::Int32,
        SampleFormat::Uint32,
    ];

    /// Size of one sample in bytes.
    pub fn byte_width(self) -> usize {
        match self {
            SampleFormat::Int8 | SampleFormat::Uint8 => 1,
            SampleFormat::Int16 | SampleFormat::Uint16 => 2,
            SampleFormat::Int32 | SampleFormat::Uint32 => 4,
        }
    }

    pub fn is_signed(self) -> bool {
        matches!(
            self,
            SampleFormat::Int8 | SampleFormat::Int16 | SampleFormat::Int32
        )
    }

    /// Smallest and largest representable value.
    pub fn limits(self) -> (i64, i64) {
        match self {
            SampleFormat::Int8 => (i8::MIN.into(), i8::MAX.into()),
            SampleFormat::Uint8 => (u8::MIN.into(), u8::MAX.into()),
            SampleFormat::Int16 => (i16::MIN.into(), i16::MAX.into()),
            SampleFormat::Uint16 => (u16::MIN.into(), u16::MAX.into()),
            SampleFormat::Int32 => (i32::MIN.into(), i32::MAX.into()),
            SampleFormat::Uint32 => (u32::MIN.into(), u32::MAX.into()),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            SampleFormat::Int8 => "int8",
            SampleFormat::Uint8 => "uint8",
            SampleFormat::Int16 => "int16",
            SampleFormat::Uint16 => "uint16",
            SampleFormat::Int32 => "int32",
            SampleFormat::Uint32 => "uint32",
        }
    }

    /// Read one sample and widen it to `i64`.
    pub fn read_sample<R: Read>(self, reader: &mut R) -> io::Result<i64> {
        let val = match self {
            SampleFormat::Int8 => reader.read_i8()?.into(),
            SampleFormat::Uint8 => reader.read_u8()?.into(),
            SampleFormat::Int16 => reader.read_i16::<LittleEndian>()?.into(),
            SampleFormat::Uint16 => reader.read_u16::<LittleEndian>()?.into(),
            SampleFormat::Int32 => reader.read_i32::<LittleEndian>()?.into(),
            SampleFormat::Uint32 => reader.read_u32::<LittleEndian>()?.into(),
        };
        Ok(val)
    }

    /// Write one sample, saturating it to the representable range.
    pub fn write_sample<W: Write>(self, writer: &mut W, val: i64) -> io::Result<()> {
        let (low, high) = self.limits();
        let val = val.clamp(low, high);
        match self {
            SampleFormat::Int8 => writer.write_i8(val as i8),
            SampleFormat::Uint8 => writer.write_u8(val as u8),
            SampleFormat::Int16 => writer.write_i16::<LittleEndian>(val as i16),
            SampleFormat::Uint16 => writer.write_u16::<LittleEndian>(val as u16),
            SampleFormat::Int32 => writer.write_i32::<LittleEndian>(val as i32),
            SampleFormat::Uint32 => writer.write_u32::<LittleEndian>(val as u32),
        }
    }
}

impl fmt::Display for SampleFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SampleFormat {
    type Err = ImportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        SampleFormat::ALL
            .into_iter()
            .find(|f| f.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ImportError::Descriptor(format!("unknown sample format '{s}'")))
    }
}

#[cfg(test)]
mod test {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn widths_and_sign() {
        let widths: Vec<_> = SampleFormat::ALL.iter().map(|f| f.byte_width()).collect();
        assert_eq!(widths, [1, 1, 2, 2, 4, 4]);

        assert!(SampleFormat::Int16.is_signed());
        assert!(!SampleFormat::Uint32.is_signed());
    }

    #[test]
    fn reads_little_endian() {
        let bytes = [0x34, 0x12, 0xff, 0xff];
        let mut cursor = Cursor::new(&bytes[..]);
        assert_eq!(SampleFormat::Uint16.read_sample(&mut cursor).unwrap(), 0x1234);
        assert_eq!(SampleFormat::Int16.read_sample(&mut cursor).unwrap(), -1);
    }

    #[test]
    fn signed_and_unsigned_bytes_differ() {
        let bytes = [0xff];
        assert_eq!(
            SampleFormat::Int8.read_sample(&mut &bytes[..]).unwrap(),
            -1
        );
        assert_eq!(
            SampleFormat::Uint8.read_sample(&mut &bytes[..]).unwrap(),
            255
        );
    }

    #[test]
    fn uint32_widens_without_wrapping() {
        let bytes = u32::MAX.to_le_bytes();
        let val = SampleFormat::Uint32.read_sample(&mut &bytes[..]).unwrap();
        assert_eq!(val, u32::MAX as i64);
    }

    #[test]
    fn write_saturates() {
        let mut out = Vec::new();
        SampleFormat::Uint8.write_sample(&mut out, 300).unwrap();
        SampleFormat::Int8.write_sample(&mut out, -300).unwrap();
        assert_eq!(out, [255, 0x80]);
    }

    #[test]
    fn parse_names() {
        assert_eq!("uint16".parse::<SampleFormat>().unwrap(), SampleFormat::Uint16);
        assert_eq!(" Int32 ".parse::<SampleFormat>().unwrap(), SampleFormat::Int32);
        assert!("float".parse::<SampleFormat>().is_err());

        for format in SampleFormat::ALL {
            assert_eq!(format.to_string().parse::<SampleFormat>().unwrap(), format);
        }
    }
}
