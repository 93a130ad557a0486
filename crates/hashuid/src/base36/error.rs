/// Errors that can occur while decoding base-36 integers.
#[derive(Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
#[non_exhaustive]
pub enum Base36Error {
    /// The input was empty, or contained only a sign.
    #[error("empty base36 value")]
    DecodeEmpty,

    /// The input contained a byte outside `0-9`, `a-z` and `A-Z`.
    #[error("invalid ascii byte {byte:#04x} at index {index}")]
    DecodeInvalidAscii {
        /// The offending byte.
        byte: u8,
        /// Its position in the input.
        index: usize,
    },

    /// The decoded value does not fit the target integer type.
    #[error("base36 value `{input}` overflows a {bits}-bit integer")]
    DecodeOverflow {
        /// The rejected input.
        input: String,
        /// Width of the target integer type.
        bits: u32,
    },
}
