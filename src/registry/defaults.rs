//! Built-in multibase, multicodec and multihash tables

use crate::multibase::codecs::{
    Base16Codec, Base58Codec, Base64Codec, BitsCodec, LetterCase, RadixCodec, BASE2, BASE32Z,
    BASE8,
};
use crate::registry::Base;
use base64::engine::general_purpose::{STANDARD, STANDARD_NO_PAD, URL_SAFE, URL_SAFE_NO_PAD};
use data_encoding::{BASE32, BASE32HEX, BASE32HEX_NOPAD, BASE32_NOPAD};

/// Built-in bases in registration order
pub fn bases() -> Vec<Base> {
    vec![
        Base::new("base2", '0', BitsCodec::new(BASE2.clone(), LetterCase::Exact)),
        Base::new("base8", '7', BitsCodec::new(BASE8.clone(), LetterCase::Exact)),
        Base::new("base10", '9', RadixCodec::decimal()),
        Base::new("base16", 'f', Base16Codec::lower()),
        Base::new("base16upper", 'F', Base16Codec::upper()),
        Base::new("base32hex", 'v', BitsCodec::new(BASE32HEX_NOPAD, LetterCase::Lower)),
        Base::new("base32hexupper", 'V', BitsCodec::new(BASE32HEX_NOPAD, LetterCase::Exact)),
        Base::new("base32hexpad", 't', BitsCodec::new(BASE32HEX, LetterCase::Lower)),
        Base::new("base32hexpadupper", 'T', BitsCodec::new(BASE32HEX, LetterCase::Exact)),
        Base::new("base32", 'b', BitsCodec::new(BASE32_NOPAD, LetterCase::Lower)),
        Base::new("base32upper", 'B', BitsCodec::new(BASE32_NOPAD, LetterCase::Exact)),
        Base::new("base32pad", 'c', BitsCodec::new(BASE32, LetterCase::Lower)),
        Base::new("base32padupper", 'C', BitsCodec::new(BASE32, LetterCase::Exact)),
        Base::new("base32z", 'h', BitsCodec::new(BASE32Z.clone(), LetterCase::Exact)),
        Base::new("base36", 'k', RadixCodec::base36(false)),
        Base::new("base36upper", 'K', RadixCodec::base36(true)),
        Base::new("base58flickr", 'Z', Base58Codec::flickr()),
        Base::new("base58btc", 'z', Base58Codec::bitcoin()),
        Base::new("base64", 'm', Base64Codec::new(&STANDARD_NO_PAD)),
        Base::new("base64pad", 'M', Base64Codec::new(&STANDARD)),
        Base::new("base64url", 'u', Base64Codec::new(&URL_SAFE_NO_PAD)),
        Base::new("base64urlpad", 'U', Base64Codec::new(&URL_SAFE)),
    ]
}

/// Multicodec content types
pub const CODECS: &[(&str, u64)] = &[
    ("cbor", 0x51),
    ("raw", 0x55),
    ("dag-pb", 0x70),
    ("dag-cbor", 0x71),
    ("libp2p-key", 0x72),
    ("git-raw", 0x78),
    ("torrent-info", 0x7b),
    ("torrent-file", 0x7c),
    ("dag-jose", 0x85),
    ("dag-cose", 0x86),
    ("eth-block", 0x90),
    ("eth-block-list", 0x91),
    ("eth-tx-trie", 0x92),
    ("eth-tx", 0x93),
    ("eth-tx-receipt-trie", 0x94),
    ("eth-tx-receipt", 0x95),
    ("eth-state-trie", 0x96),
    ("eth-account-snapshot", 0x97),
    ("eth-storage-trie", 0x98),
    ("bitcoin-block", 0xb0),
    ("bitcoin-tx", 0xb1),
    ("zcash-block", 0xc0),
    ("zcash-tx", 0xc1),
    ("decred-block", 0xe0),
    ("decred-tx", 0xe1),
    ("dash-block", 0xf0),
    ("dash-tx", 0xf1),
    ("dag-json", 0x0129),
    ("json", 0x0200),
    ("fil-commitment-unsealed", 0xf101),
    ("fil-commitment-sealed", 0xf102),
];

/// Multihash functions
pub const HASHERS: &[(&str, u64)] = &[
    ("identity", 0x00),
    ("sha1", 0x11),
    ("sha2-256", 0x12),
    ("sha2-512", 0x13),
    ("sha3-512", 0x14),
    ("sha3-384", 0x15),
    ("sha3-256", 0x16),
    ("sha3-224", 0x17),
    ("shake-128", 0x18),
    ("shake-256", 0x19),
    ("keccak-224", 0x1a),
    ("keccak-256", 0x1b),
    ("keccak-384", 0x1c),
    ("keccak-512", 0x1d),
    ("blake3", 0x1e),
    ("sha2-384", 0x20),
    ("murmur3-x64-64", 0x22),
    ("dbl-sha2-256", 0x56),
    ("md5", 0xd5),
    ("sha2-256-trunc254-padded", 0x1012),
    ("x11", 0x1100),
    ("blake2b-256", 0xb220),
    ("blake2b-512", 0xb240),
    ("blake2s-256", 0xb260),
    ("poseidon-bls12_381-a2-fc1", 0xb401),
];
