use hmac::{Hmac, Mac};
use sha1::Sha1;
use time::OffsetDateTime;

/// 当前Unix时间戳（秒），十进制字符串
///
/// eg: 1763040729
pub fn now_unix_ts() -> String {
    OffsetDateTime::now_utc().unix_timestamp().to_string()
}

pub fn sign_hmac_sha1(secret: &str, str_to_sign: &str) -> Vec<u8> {
    type HmacSha1 = Hmac<Sha1>;
    let mut mac =
        HmacSha1::new_from_slice(secret.as_bytes()).expect("HMAC can take key of any size");
    mac.update(str_to_sign.as_bytes());
    mac.finalize().into_bytes().to_vec()
}

/// 小写hex编码的HMAC-SHA1签名，用于`api_sig`
pub fn sign_hmac_sha1_hex(secret: &str, str_to_sign: &str) -> String {
    hex::encode(sign_hmac_sha1(secret, str_to_sign))
}
