
macro_rules! define_digest {
    ($digest:ident, $size:expr) => {
        #[derive(Copy, Clone, PartialEq, Eq, Hash)]
        pub struct $digest([u8; $size]);

        impl $digest {
            pub const LEN: usize = $size;

            pub fn from_bytes(bytes: [u8; $size]) -> Self {
                $digest(bytes)
            }

            pub fn to_bytes(self) -> [u8; $size] {
                self.0
            }
        }

        impl AsRef<[u8]> for $digest {
            fn as_ref(&self) -> &[u8] {
                &self.0
            }
        }

        impl From<$digest> for Box<[u8]> {
            fn from(digest: $digest) -> Box<[u8]> {
                Box::new(digest.0)
            }
        }

        impl ::std::fmt::Debug for $digest {
            fn fmt(&self, f: &mut ::std::fmt::Formatter) -> ::std::fmt::Result {
                write!(f, "{}(\"", stringify!($digest))?;
                for byte in &self.0[..] {
                    write!(f, "{:02x}", byte)?;
                }
                write!(f, "\")")
            }
        }

        impl ::std::fmt::Display for $digest {
            fn fmt(&self, f: &mut ::std::fmt::Formatter) -> ::std::fmt::Result {
                for byte in &self.0[..] {
                    write!(f, "{:02x}", byte)?;
                }
                Ok(())
            }
        }

        impl ::std::str::FromStr for $digest {
            type Err = ::hex::FromHexError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let mut bytes = [0; $size];
                ::hex::decode_to_slice(s, &mut bytes)?;
                Ok($digest(bytes))
            }
        }

        impl $crate::digest::Digest for $digest {}
    }
}

macro_rules! define_chunk {
    ($chunk:ident, $size:expr) => {
        #[derive(Copy, Clone)]
        pub struct $chunk([u8; $size]);

        impl AsMut<[u8]> for $chunk {
            fn as_mut(&mut self) -> &mut [u8] {
                &mut self.0
            }
        }

        impl AsRef<[u8]> for $chunk {
            fn as_ref(&self) -> &[u8] {
                &self.0
            }
        }

        impl ::std::fmt::Debug for $chunk {
            fn fmt(&self, f: &mut ::std::fmt::Formatter) -> ::std::fmt::Result {
                for byte in &self.0[..] {
                    write!(f, "{:02x}", byte)?;
                }
                Ok(())
            }
        }

        impl $crate::digest::chunked::Chunk for $chunk {
            const LEN: usize = $size;

            fn new() -> Self {
                $chunk([0; $size])
            }
        }
    }
}
