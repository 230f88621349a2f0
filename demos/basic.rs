//! Run with
//!
//! ```not_rust
//! RUST_LOG=jwtparse=debug cargo run --example basic
//! ```

use std::time::{SystemTime, UNIX_EPOCH};

use jwtparse::algorithm::{hmac, AlgorithmId};
use jwtparse::signature::canonical_signing_input;
use jwtparse::{Claims, Header, Key, ParseOptions, TokenParser};
use serde_json::json;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const SECRET: &[u8] = b"demo-secret";

fn main() -> Result<(), jwtparse::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("{}=debug,jwtparse=debug", env!("CARGO_CRATE_NAME")).into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or_default();

    let header = Header {
        token_type: "JWT".to_string(),
        key_id: "demo-key".to_string(),
        ..Header::new("HS256")
    };
    let claims = Claims {
        issuer: "https://issuer.example".to_string(),
        subject: "user123".to_string(),
        issued_at: now,
        expiration: now + 3600,
        data: Some(json!({"roles": ["reader"]})),
        ..Default::default()
    };

    let signing_input = canonical_signing_input(&header, &claims)?;
    let token = format!(
        "{}.{}",
        signing_input,
        hmac::sign(AlgorithmId::HS256, &signing_input, SECRET)?
    );
    tracing::info!(%token, "issued demo token");

    let parser = TokenParser::new(Key::symmetric(SECRET))
        .with_options(ParseOptions::new().require_issuer().require_key_id());

    let parsed = parser.parse(&token)?;
    tracing::info!(
        subject = parsed.subject(),
        expires = parsed.expiration(),
        "token accepted"
    );

    // Rejections: each reports a stable kind name
    let cases = [
        (
            "missing audience",
            token.clone(),
            ParseOptions::new().require_audience(),
        ),
        (
            "forged signature",
            format!("{signing_input}.AAAA"),
            ParseOptions::DEFAULT,
        ),
        ("two segments", signing_input.clone(), ParseOptions::DEFAULT),
    ];
    for (name, token, options) in cases {
        match parser.parse_with(&token, &options) {
            Ok(_) => tracing::warn!(case = name, "unexpectedly accepted"),
            Err(e) => tracing::info!(case = name, kind = e.kind().as_str(), "rejected"),
        }
    }

    let expired = parser.parse_at(&token, parser.options(), now + 7200);
    if let Err(e) = expired {
        tracing::info!(case = "two hours later", kind = %e.kind(), "rejected");
    }

    Ok(())
}
