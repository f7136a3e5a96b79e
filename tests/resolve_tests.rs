//! Identifier resolution tests

use cidfmt::{registry, resolve_identifier, CidError, ResolveOptions, Version};
use cidfmt::resolve::{decode_identifier, extract_identifier};
use rstest::rstest;

const LEGACY: &str = "QmUNLLsPACCz1vLxQVkXqqLX5R1X345qqfHbsf67hvA3Nn";
const V1_BASE32: &str = "bafybeiczsscdsbs7ffqz55asqdf3smv6klcw3gofszvwlyarci47bgf354";
const RAW_BASE32: &str = "bafkreiczsscdsbs7ffqz55asqdf3smv6klcw3gofszvwlyarci47bgf354";

fn resolve(text: &str, options: ResolveOptions) -> cidfmt::Result<(cidfmt::Cid, cidfmt::Base)> {
    resolve_identifier(registry::global(), text, &options)
}

#[rstest]
#[case(LEGACY, Version::V0, "base58btc")]
#[case(V1_BASE32, Version::V1, "base32")]
#[case(RAW_BASE32, Version::V1, "base32")]
#[case("zdj7WbTaiJT1fgatdet9Ei9iDB5hdCxkbVyhyh8YTUnXMiwYi", Version::V1, "base58btc")]
#[case("f0170122059948439065f29619ef41280cbb932be52c56d99c5966b65e0111239f098bbef", Version::V1, "base16")]
fn test_decode_base_detection(#[case] text: &str, #[case] version: Version, #[case] base: &str) {
    let (cid, decoded_with) = resolve(text, ResolveOptions::default()).unwrap();
    assert_eq!(cid.version(), version);
    assert_eq!(decoded_with.name(), base);
}

#[test]
fn test_legacy_prefixed_with_z_is_still_legacy() {
    // a V0 multihash written with an explicit base58btc prefix
    let (cid, base) = resolve(&format!("z{}", LEGACY), ResolveOptions::default()).unwrap();
    assert_eq!(cid.version(), Version::V0);
    assert_eq!(base.name(), "base58btc");
    assert_eq!(cid.to_string(), LEGACY);
}

#[rstest]
#[case("/ipfs/QmUNLLsPACCz1vLxQVkXqqLX5R1X345qqfHbsf67hvA3Nn", LEGACY)]
#[case("/ipfs/QmUNLLsPACCz1vLxQVkXqqLX5R1X345qqfHbsf67hvA3Nn/a/b/c", LEGACY)]
#[case("QmUNLLsPACCz1vLxQVkXqqLX5R1X345qqfHbsf67hvA3Nn", LEGACY)]
#[case("/ipns/example.com", "/ipns/example.com")]
fn test_extract_identifier(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(extract_identifier(input), expected);
}

#[test]
fn test_version_override() {
    let (cid, _) = resolve(LEGACY, ResolveOptions::new().with_version(1)).unwrap();
    assert_eq!(cid.version(), Version::V1);
    assert_eq!(cid.to_string(), V1_BASE32);

    let (cid, _) = resolve(V1_BASE32, ResolveOptions::new().with_version(0)).unwrap();
    assert_eq!(cid.version(), Version::V0);
    assert_eq!(cid.to_string(), LEGACY);
}

#[test]
fn test_same_version_override_is_noop() {
    let (plain, _) = resolve(V1_BASE32, ResolveOptions::default()).unwrap();
    let (same, _) = resolve(V1_BASE32, ResolveOptions::new().with_version(1)).unwrap();
    assert_eq!(plain, same);
}

#[test]
fn test_downgrade_of_raw_codec_fails() {
    assert!(matches!(
        resolve(RAW_BASE32, ResolveOptions::new().with_version(0)),
        Err(CidError::IncompatibleVersionDowngrade { codec: 0x55, hash: 0x12 })
    ));
}

#[rstest]
#[case(2)]
#[case(3)]
#[case(u64::MAX)]
fn test_invalid_target_version(#[case] version: u64) {
    let err = resolve(LEGACY, ResolveOptions::new().with_version(version)).unwrap_err();
    assert!(matches!(err, CidError::InvalidCidVersion { version: v } if v == version));
}

#[test]
fn test_explicit_base_keeps_legacy_by_default() {
    let (cid, base) = resolve(LEGACY, ResolveOptions::new().with_base("base32")).unwrap();
    assert_eq!(cid.version(), Version::V0);
    assert_eq!(base.name(), "base32");
}

#[test]
fn test_explicit_base_with_legacy_upgrade() {
    let options = ResolveOptions::new()
        .with_base("base32")
        .with_legacy_upgrade(true);
    let (cid, _) = resolve(LEGACY, options).unwrap();
    assert_eq!(cid.version(), Version::V1);

    // an explicit version still wins over the upgrade
    let options = ResolveOptions::new()
        .with_base("base32")
        .with_version(0)
        .with_legacy_upgrade(true);
    let (cid, _) = resolve(LEGACY, options).unwrap();
    assert_eq!(cid.version(), Version::V0);
}

#[test]
fn test_unknown_explicit_base() {
    let err = resolve(LEGACY, ResolveOptions::new().with_base("base3")).unwrap_err();
    assert_eq!(err.to_string(), "Unknown base encoding: base3");
}

#[rstest]
#[case("!abc", '!')]
#[case("xyz", 'x')]
#[case("Qm", 'Q')]
fn test_unknown_prefix(#[case] text: &str, #[case] prefix: char) {
    let err = decode_identifier(registry::global(), text).unwrap_err();
    assert!(matches!(err, CidError::UnknownBasePrefix { prefix: p } if p == prefix));
}

#[rstest]
#[case("b")]
#[case("bafy")]
#[case("f0170")]
#[case("f0270")]
fn test_malformed_or_invalid_bytes(#[case] text: &str) {
    let err = decode_identifier(registry::global(), text).unwrap_err();
    assert!(
        matches!(
            err,
            CidError::MalformedIdentifierBytes { .. }
                | CidError::InvalidCidVersion { .. }
                | CidError::InvalidBaseEncoding { .. }
        ),
        "unexpected error for {}: {}",
        text,
        err
    );
}

#[test]
fn test_unsupported_version_tag() {
    assert!(matches!(
        decode_identifier(registry::global(), "f0270122000"),
        Err(CidError::InvalidCidVersion { version: 2 })
    ));
}

#[test]
fn test_wrong_case_payload_rejected() {
    let upper_payload = format!("b{}", &V1_BASE32[1..].to_uppercase());
    assert!(matches!(
        decode_identifier(registry::global(), &upper_payload),
        Err(CidError::InvalidBaseEncoding { .. })
    ));
}
