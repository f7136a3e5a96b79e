//! Alphabet implementations behind the registered multibase encodings

use crate::registry::{BaseCodec, DecodeError};
use base64::engine::general_purpose::GeneralPurpose;
use base64::Engine as _;
use data_encoding::{Encoding, Specification};
use num_bigint::BigUint;
use once_cell::sync::Lazy;

/// Letter case accepted by a bit-packing alphabet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LetterCase {
    /// Alphabet is used exactly as specified
    Exact,
    /// Uppercase RFC 4648 alphabet rendered and accepted in lowercase only
    Lower,
}

/// RFC 4648 style bit-packing codec (base2, base8, base32 family)
#[derive(Debug, Clone)]
pub struct BitsCodec {
    encoding: Encoding,
    case: LetterCase,
}

impl BitsCodec {
    pub fn new(encoding: Encoding, case: LetterCase) -> Self {
        Self { encoding, case }
    }

    /// Build a codec from an alphabet whose size is a power of two
    pub fn from_symbols(symbols: &str, padding: Option<char>) -> Result<Self, DecodeError> {
        bit_encoding(symbols, padding)
            .map(|encoding| Self::new(encoding, LetterCase::Exact))
            .map_err(DecodeError::new)
    }
}

impl BaseCodec for BitsCodec {
    fn encode(&self, bytes: &[u8]) -> String {
        let text = self.encoding.encode(bytes);
        match self.case {
            LetterCase::Exact => text,
            LetterCase::Lower => text.to_ascii_lowercase(),
        }
    }

    fn decode(&self, text: &str) -> Result<Vec<u8>, DecodeError> {
        match self.case {
            LetterCase::Exact => self.encoding.decode(text.as_bytes()).map_err(DecodeError::new),
            LetterCase::Lower => {
                if text.bytes().any(|b| b.is_ascii_uppercase()) {
                    return Err(DecodeError::new("uppercase symbol in lowercase alphabet"));
                }
                self.encoding
                    .decode(text.to_ascii_uppercase().as_bytes())
                    .map_err(DecodeError::new)
            }
        }
    }
}

/// Build a data-encoding specification from raw symbols
pub(crate) fn bit_encoding(
    symbols: &str,
    padding: Option<char>,
) -> Result<Encoding, data_encoding::SpecificationError> {
    let mut spec = Specification::new();
    spec.symbols.push_str(symbols);
    spec.padding = padding;
    spec.encoding()
}

pub(crate) static BASE2: Lazy<Encoding> =
    Lazy::new(|| bit_encoding("01", None).expect("binary alphabet is a valid specification"));

pub(crate) static BASE8: Lazy<Encoding> = Lazy::new(|| {
    bit_encoding("01234567", None).expect("octal alphabet is a valid specification")
});

pub(crate) static BASE32Z: Lazy<Encoding> = Lazy::new(|| {
    bit_encoding("ybndrfg8ejkmcpqxot1uwisza345h769", None)
        .expect("z-base-32 alphabet is a valid specification")
});

/// Hexadecimal with a fixed letter case
#[derive(Debug, Clone, Copy)]
pub struct Base16Codec {
    upper: bool,
}

impl Base16Codec {
    pub fn lower() -> Self {
        Self { upper: false }
    }

    pub fn upper() -> Self {
        Self { upper: true }
    }
}

impl BaseCodec for Base16Codec {
    fn encode(&self, bytes: &[u8]) -> String {
        if self.upper {
            hex::encode_upper(bytes)
        } else {
            hex::encode(bytes)
        }
    }

    fn decode(&self, text: &str) -> Result<Vec<u8>, DecodeError> {
        let wrong_case = if self.upper {
            text.bytes().any(|b| b.is_ascii_lowercase())
        } else {
            text.bytes().any(|b| b.is_ascii_uppercase())
        };
        if wrong_case {
            return Err(DecodeError::new("hex digit in the wrong letter case"));
        }
        hex::decode(text).map_err(DecodeError::new)
    }
}

/// Base64 through one of the general-purpose engines
#[derive(Debug, Clone, Copy)]
pub struct Base64Codec {
    engine: &'static GeneralPurpose,
}

impl Base64Codec {
    pub fn new(engine: &'static GeneralPurpose) -> Self {
        Self { engine }
    }
}

impl BaseCodec for Base64Codec {
    fn encode(&self, bytes: &[u8]) -> String {
        self.engine.encode(bytes)
    }

    fn decode(&self, text: &str) -> Result<Vec<u8>, DecodeError> {
        self.engine.decode(text).map_err(DecodeError::new)
    }
}

/// Base58 with the Bitcoin or Flickr alphabet
#[derive(Clone, Copy)]
pub struct Base58Codec {
    alphabet: &'static bs58::Alphabet,
}

impl Base58Codec {
    pub fn bitcoin() -> Self {
        Self {
            alphabet: bs58::Alphabet::BITCOIN,
        }
    }

    pub fn flickr() -> Self {
        Self {
            alphabet: bs58::Alphabet::FLICKR,
        }
    }
}

impl BaseCodec for Base58Codec {
    fn encode(&self, bytes: &[u8]) -> String {
        bs58::encode(bytes).with_alphabet(self.alphabet).into_string()
    }

    fn decode(&self, text: &str) -> Result<Vec<u8>, DecodeError> {
        bs58::decode(text)
            .with_alphabet(self.alphabet)
            .into_vec()
            .map_err(DecodeError::new)
    }
}

/// Positional big-integer codec (base10, base36, configured radix bases)
///
/// Every leading zero byte maps to one copy of the alphabet's first symbol.
#[derive(Debug, Clone)]
pub struct RadixCodec {
    symbols: Vec<char>,
}

impl RadixCodec {
    /// Alphabet must hold between 2 and 256 distinct symbols
    pub fn new(alphabet: &str) -> Result<Self, DecodeError> {
        let symbols: Vec<char> = alphabet.chars().collect();
        if !(2..=256).contains(&symbols.len()) {
            return Err(DecodeError::new(format!(
                "radix alphabet must have 2 to 256 symbols, got {}",
                symbols.len()
            )));
        }
        for (i, c) in symbols.iter().enumerate() {
            if symbols[..i].contains(c) {
                return Err(DecodeError::new(format!("duplicate symbol {:?} in alphabet", c)));
            }
        }
        Ok(Self { symbols })
    }

    pub(crate) fn decimal() -> Self {
        Self {
            symbols: "0123456789".chars().collect(),
        }
    }

    pub(crate) fn base36(upper: bool) -> Self {
        let alphabet = if upper {
            "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ"
        } else {
            "0123456789abcdefghijklmnopqrstuvwxyz"
        };
        Self {
            symbols: alphabet.chars().collect(),
        }
    }

    fn radix(&self) -> u32 {
        self.symbols.len() as u32
    }
}

impl BaseCodec for RadixCodec {
    fn encode(&self, bytes: &[u8]) -> String {
        let zeros = bytes.iter().take_while(|b| **b == 0).count();
        let mut out: String = std::iter::repeat(self.symbols[0]).take(zeros).collect();

        let rest = &bytes[zeros..];
        if !rest.is_empty() {
            let digits = BigUint::from_bytes_be(rest).to_radix_be(self.radix());
            out.extend(digits.into_iter().map(|d| self.symbols[d as usize]));
        }
        out
    }

    fn decode(&self, text: &str) -> Result<Vec<u8>, DecodeError> {
        let zero = self.symbols[0];
        let zeros = text.chars().take_while(|c| *c == zero).count();

        let digits = text
            .chars()
            .skip(zeros)
            .map(|c| {
                self.symbols
                    .iter()
                    .position(|s| *s == c)
                    .map(|p| p as u8)
                    .ok_or_else(|| DecodeError::new(format!("invalid symbol {:?}", c)))
            })
            .collect::<Result<Vec<u8>, DecodeError>>()?;

        let mut out = vec![0u8; zeros];
        if !digits.is_empty() {
            let value = BigUint::from_radix_be(&digits, self.radix())
                .ok_or_else(|| DecodeError::new("digit out of range"))?;
            out.extend(value.to_bytes_be());
        }
        Ok(out)
    }
}
