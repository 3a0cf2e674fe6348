use chrono::Utc;
use tracing::debug;
use url::Url;

use crate::msg::ExtractedReferral;

/// Wallet characters skipped before the code prefix (the `0x` scheme
/// marker on EVM-style addresses).
const PREFIX_SKIP: usize = 2;
/// Wallet characters taken for the code prefix.
const PREFIX_LEN: usize = 8;

/// Structural validity floor: an 8-char prefix plus a base-36 millisecond
/// timestamp is always at least this long.
pub const MIN_CODE_LEN: usize = 10;

/// Origin used when neither the caller nor the configuration supplies one.
pub const FALLBACK_ORIGIN: &str = "https://skydrop.app";

const QUERY_REF: &str = "ref";
const QUERY_WALLET: &str = "wallet";

/// Derive a referral code from a wallet address: characters 2..10 of the
/// address, lower-cased, followed by the creation time in base 36.
///
/// The address is not validated; a short address silently yields a short
/// prefix. Codes are stateless strings — nothing records that one was
/// issued.
pub fn generate_code(wallet: &str) -> String {
    generate_code_at(wallet, Utc::now().timestamp_millis())
}

/// Fixed-time variant of [`generate_code`] for deterministic callers.
pub fn generate_code_at(wallet: &str, now_ms: i64) -> String {
    let prefix: String = wallet
        .chars()
        .skip(PREFIX_SKIP)
        .take(PREFIX_LEN)
        .flat_map(char::to_lowercase)
        .collect();
    format!("{}{}", prefix, to_base36(now_ms.max(0) as u64))
}

/// Build a shareable claim link: `{base}/claim?ref={code}&wallet={wallet}`.
///
/// `base_url` wins when non-empty, then the configured public origin the
/// caller passes through, then [`FALLBACK_ORIGIN`]. Query values are
/// percent-encoded so the link always round-trips through
/// [`extract_info`].
pub fn generate_link(wallet: &str, base_url: Option<&str>) -> String {
    generate_link_at(wallet, base_url, Utc::now().timestamp_millis())
}

/// Fixed-time variant of [`generate_link`].
pub fn generate_link_at(wallet: &str, base_url: Option<&str>, now_ms: i64) -> String {
    let code = generate_code_at(wallet, now_ms);
    let base = match base_url {
        Some(base) if !base.is_empty() => base,
        _ => FALLBACK_ORIGIN,
    };
    let query = url::form_urlencoded::Serializer::new(String::new())
        .append_pair(QUERY_REF, &code)
        .append_pair(QUERY_WALLET, wallet)
        .finish();
    format!("{}/claim?{}", base.trim_end_matches('/'), query)
}

/// Recover the `ref` and `wallet` query parameters from a claim link.
///
/// Total: a malformed URL is reported as an all-`None` record, never an
/// error. The first occurrence of each parameter wins.
pub fn extract_info(link: &str) -> ExtractedReferral {
    let url = match Url::parse(link) {
        Ok(url) => url,
        Err(err) => {
            debug!(%err, link, "unparsable referral link");
            return ExtractedReferral {
                code: None,
                wallet: None,
            };
        }
    };
    let param = |name: &str| {
        url.query_pairs()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.into_owned())
    };
    ExtractedReferral {
        code: param(QUERY_REF),
        wallet: param(QUERY_WALLET),
    }
}

/// Length-only validity check. A `true` result is not proof the code was
/// ever issued — there is no registry to check against.
pub fn is_valid_code(code: &str) -> bool {
    code.len() >= MIN_CODE_LEN
}

/// Lowercase base-36 rendering of an unsigned integer.
fn to_base36(mut value: u64) -> String {
    const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    if value == 0 {
        return "0".to_string();
    }
    // u64::MAX in base 36 is 13 digits
    let mut buf = [0u8; 13];
    let mut at = buf.len();
    while value > 0 {
        at -= 1;
        buf[at] = DIGITS[(value % 36) as usize];
        value /= 36;
    }
    String::from_utf8_lossy(&buf[at..]).into_owned()
}
