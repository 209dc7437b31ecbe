// Taken from rustls <https://github.com/rustls/rustls>
//
// Copyright (c) 2016 Joe Birr-Pixton and rustls project contributors
// Copyright (c) 2020 Intel Corporation
//
// SPDX-License-Identifier: Apache-2.0 or MIT

use core::fmt::Debug;

/// Read from a byte slice.
pub struct Reader<'a> {
    buf: &'a [u8],
    offs: usize,
}

impl<'a> Reader<'a> {
    pub fn init(bytes: &'a [u8]) -> Reader<'a> {
        Reader {
            buf: bytes,
            offs: 0,
        }
    }

    pub fn take(&mut self, len: usize) -> Option<&'a [u8]> {
        if self.left() < len {
            return None;
        }

        let current = self.offs;
        self.offs += len;
        Some(&self.buf[current..current + len])
    }

    /// Copy exactly `out.len()` bytes into `out`.
    pub fn take_into(&mut self, out: &mut [u8]) -> Option<usize> {
        let src = self.take(out.len())?;
        out.copy_from_slice(src);
        Some(src.len())
    }

    pub fn left(&self) -> usize {
        self.buf.len() - self.offs
    }
}

/// Write to a byte slice.
pub struct Writer<'a> {
    buf: &'a mut [u8],
    offs: usize,
}

impl<'a> Writer<'a> {
    pub fn init(bytes: &'a mut [u8]) -> Writer<'a> {
        Writer {
            buf: bytes,
            offs: 0,
        }
    }

    pub fn extend_from_slice(&mut self, value: &[u8]) -> Option<usize> {
        if self.left() < value.len() {
            return None;
        }
        let end = self.offs + value.len();
        self.buf[self.offs..end].copy_from_slice(value);
        self.offs = end;
        Some(value.len())
    }

    pub fn push(&mut self, value: u8) -> Option<u8> {
        if self.left() < 1 {
            return None;
        }
        self.buf[self.offs] = value;
        self.offs += 1;
        Some(value)
    }

    pub fn left(&self) -> usize {
        self.buf.len() - self.offs
    }

    pub fn used(&self) -> usize {
        self.offs
    }
}

#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct EncodeErr;

/// Things we can encode and read from a Reader.
pub trait Codec: Debug + Sized {
    /// Encode yourself by appending onto `bytes`.
    /// Return Ok(encoded size) or Err(EncodeErr)
    fn encode(&self, bytes: &mut Writer) -> Result<usize, EncodeErr>;

    /// Decode yourself by fiddling with the `Reader`.
    /// Return Some if it worked, None if not.
    fn read(_: &mut Reader) -> Option<Self>;

    /// Read one of these from the front of `bytes` and
    /// return it.
    fn read_bytes(bytes: &[u8]) -> Option<Self> {
        let mut rd = Reader::init(bytes);
        Self::read(&mut rd)
    }
}

// All multi-byte integers are little-endian on the wire.
macro_rules! le_int_codec {
    ($ty:ty, $len:expr) => {
        impl Codec for $ty {
            fn encode(&self, bytes: &mut Writer) -> Result<usize, EncodeErr> {
                bytes
                    .extend_from_slice(&self.to_le_bytes())
                    .ok_or(EncodeErr)
            }

            fn read(r: &mut Reader) -> Option<$ty> {
                let mut v = [0u8; $len];
                r.take_into(&mut v)?;
                Some(<$ty>::from_le_bytes(v))
            }
        }
    };
}

impl Codec for u8 {
    fn encode(&self, bytes: &mut Writer) -> Result<usize, EncodeErr> {
        bytes.push(*self).ok_or(EncodeErr)?;
        Ok(1)
    }
    fn read(r: &mut Reader) -> Option<u8> {
        r.take(1).map(|b| b[0])
    }
}

le_int_codec!(u16, 2);
le_int_codec!(u32, 4);
le_int_codec!(u64, 8);

impl<T: Codec + Copy + Default, const N: usize> Codec for [T; N] {
    fn encode(&self, bytes: &mut Writer) -> Result<usize, EncodeErr> {
        let used = bytes.used();
        for d in self.iter() {
            let _ = d.encode(bytes)?;
        }
        Ok(bytes.used() - used)
    }

    fn read(reader: &mut Reader) -> Option<Self> {
        let mut target = [T::default(); N];
        for t in target.iter_mut() {
            *t = T::read(reader)?;
        }

        Some(target)
    }
}
