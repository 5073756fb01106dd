use chrono::Utc;
use jsonwebtoken::{EncodingKey, Header, encode};
use uuid::Uuid;
use vlog_board::{
    config::AppConfig,
    token::{Claims, TokenCodec, TokenKind},
};

const TEST_SUBJECT: Uuid = Uuid::from_u128(42);

fn test_codec() -> TokenCodec {
    TokenCodec::new(&AppConfig::default())
}

/// Signs claims directly with the default test secret, bypassing the codec's
/// TTL handling so tests can mint already-expired tokens.
fn sign_raw(claims: &Claims) -> String {
    let config = AppConfig::default();
    let key = EncodingKey::from_secret(config.jwt_secret.as_bytes());
    encode(&Header::default(), claims, &key).unwrap()
}

#[test]
fn test_access_token_round_trip() {
    let codec = test_codec();
    let pair = codec.issue_pair(TEST_SUBJECT).unwrap();

    let claims = codec.verify(&pair.access).unwrap();

    assert_eq!(claims.sub, TEST_SUBJECT);
    assert_eq!(claims.token_type, TokenKind::Access);
    assert!(claims.exp > claims.iat);
}

#[test]
fn test_refresh_token_round_trip() {
    let codec = test_codec();
    let pair = codec.issue_pair(TEST_SUBJECT).unwrap();

    let claims = codec.verify(&pair.refresh).unwrap();

    assert_eq!(claims.sub, TEST_SUBJECT);
    assert_eq!(claims.token_type, TokenKind::Refresh);
}

#[test]
fn test_pair_lifetimes_differ() {
    let codec = test_codec();
    let pair = codec.issue_pair(TEST_SUBJECT).unwrap();

    let access = codec.verify(&pair.access).unwrap();
    let refresh = codec.verify(&pair.refresh).unwrap();

    // Refresh tokens outlive access tokens by construction (1 day vs 30 days
    // with the default configuration).
    assert!(refresh.exp > access.exp);
}

#[test]
fn test_wrong_secret_rejected() {
    let codec = test_codec();
    let pair = codec.issue_pair(TEST_SUBJECT).unwrap();

    let other_codec = TokenCodec::new(&AppConfig {
        jwt_secret: "an-entirely-different-secret-value".to_string(),
        ..AppConfig::default()
    });

    assert!(other_codec.verify(&pair.access).is_err());
}

#[test]
fn test_expired_token_rejected() {
    let now = Utc::now().timestamp() as usize;
    // Well past the verifier's default 60-second leeway.
    let claims = Claims {
        sub: TEST_SUBJECT,
        token_type: TokenKind::Access,
        iat: now - 7200,
        exp: now - 3600,
    };
    let token = sign_raw(&claims);

    assert!(test_codec().verify(&token).is_err());
}

#[test]
fn test_malformed_token_rejected() {
    let codec = test_codec();

    assert!(codec.verify("definitely-not-a-jwt").is_err());
    assert!(codec.verify("a.b").is_err());
    assert!(codec.verify("").is_err());
}

#[test]
fn test_decode_insecure_reads_expired_claims() {
    let now = Utc::now().timestamp() as usize;
    let claims = Claims {
        sub: TEST_SUBJECT,
        token_type: TokenKind::Refresh,
        iat: now - 7200,
        exp: now - 3600,
    };
    let token = sign_raw(&claims);

    // Verification refuses the token, but the diagnostic decode can still say
    // whose it was.
    assert!(test_codec().verify(&token).is_err());
    let decoded = TokenCodec::decode_insecure(&token).unwrap();
    assert_eq!(decoded.sub, TEST_SUBJECT);
    assert_eq!(decoded.token_type, TokenKind::Refresh);
}

#[test]
fn test_decode_insecure_rejects_garbage() {
    assert!(TokenCodec::decode_insecure("no-dots-at-all").is_err());
    assert!(TokenCodec::decode_insecure("a.!!!not-base64!!!.c").is_err());
}
