use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde_json::Value as JsonValue;

/// Claims of interest from the session token payload.
///
/// The token is a compact three-part encoded value whose middle part is
/// base64url JSON. Only `exp` and the role claims are read; everything else
/// is ignored. `None` means the claim is absent (or null, or mistyped) —
/// distinct from a present-but-empty role list.
#[derive(Debug, Clone, Default)]
pub struct Claims {
    /// Expiry as Unix seconds. Absent means non-expiring.
    pub exp: Option<i64>,
    pub roles: Option<Vec<String>>,
    /// Fallback claim consulted when `roles` is absent (Spring-style tokens).
    pub authorities: Option<Vec<String>>,
}

impl Claims {
    /// Role names normalized for matching: the `roles` claim when it exists
    /// (even empty), else `authorities`, each uppercased with a leading
    /// `ROLE_` stripped. Order preserved.
    #[must_use]
    pub fn normalized_roles(&self) -> Vec<String> {
        self.roles
            .as_deref()
            .or(self.authorities.as_deref())
            .unwrap_or(&[])
            .iter()
            .map(|r| normalize_role(r))
            .collect()
    }
}

/// Decodes the claims payload of a session token.
///
/// Returns `None` for anything that is not a decodable three-part token with
/// a JSON payload — malformed base64 and malformed JSON are swallowed, never
/// surfaced as errors. A raw token whose payload cannot be decoded still
/// counts as "present" for logged-in checks; it just carries no claims.
///
/// Extraction is tolerant per claim: a null or mistyped `roles` does not
/// discard a valid `exp`, and non-string entries inside a role list are
/// skipped rather than failing the whole payload.
#[must_use]
pub fn decode_claims(token: &str) -> Option<Claims> {
    let payload = token.split('.').nth(1)?;
    let bytes = URL_SAFE_NO_PAD
        .decode(payload.trim_end_matches('='))
        .ok()?;
    let value: JsonValue = serde_json::from_slice(&bytes).ok()?;
    Some(Claims {
        exp: value
            .get("exp")
            .and_then(|v| v.as_i64().or_else(|| v.as_f64().map(|f| f as i64))),
        roles: claim_strings(value.get("roles")),
        authorities: claim_strings(value.get("authorities")),
    })
}

fn claim_strings(value: Option<&JsonValue>) -> Option<Vec<String>> {
    let entries = value?.as_array()?;
    Some(
        entries
            .iter()
            .filter_map(|v| v.as_str().map(str::to_owned))
            .collect(),
    )
}

/// Normalizes a role name for matching: uppercase, then strip one leading
/// `ROLE_`. `"ROLE_admin"`, `"role_ADMIN"` and `"admin"` all normalize to
/// `"ADMIN"`.
#[must_use]
pub fn normalize_role(role: &str) -> String {
    let upper = role.to_uppercase();
    match upper.strip_prefix("ROLE_") {
        Some(rest) => rest.to_owned(),
        None => upper,
    }
}

#[cfg(test)]
pub(crate) fn encode_token(claims: &serde_json::Value) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let payload = URL_SAFE_NO_PAD.encode(claims.to_string().as_bytes());
    format!("{header}.{payload}.sig")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_exp_and_roles() {
        let token = encode_token(&json!({"exp": 1_700_000_000, "roles": ["ROLE_ADMIN"]}));
        let claims = decode_claims(&token).unwrap();
        assert_eq!(claims.exp, Some(1_700_000_000));
        assert_eq!(claims.normalized_roles(), vec!["ADMIN"]);
    }

    #[test]
    fn authorities_used_when_roles_absent() {
        let token = encode_token(&json!({"authorities": ["ROLE_user", "gerente"]}));
        let claims = decode_claims(&token).unwrap();
        assert_eq!(claims.normalized_roles(), vec!["USER", "GERENTE"]);
    }

    #[test]
    fn roles_take_precedence_over_authorities() {
        let token = encode_token(&json!({"roles": ["ADMIN"], "authorities": ["USER"]}));
        let claims = decode_claims(&token).unwrap();
        assert_eq!(claims.normalized_roles(), vec!["ADMIN"]);
    }

    #[test]
    fn missing_exp_is_none() {
        let token = encode_token(&json!({"sub": "maria"}));
        let claims = decode_claims(&token).unwrap();
        assert_eq!(claims.exp, None);
        assert!(claims.normalized_roles().is_empty());
    }

    #[test]
    fn null_roles_does_not_discard_other_claims() {
        let token = encode_token(&json!({"exp": 1, "roles": null, "authorities": ["ADMIN"]}));
        let claims = decode_claims(&token).unwrap();
        assert_eq!(claims.exp, Some(1));
        assert_eq!(claims.roles, None);
        assert_eq!(claims.normalized_roles(), vec!["ADMIN"]);
    }

    #[test]
    fn empty_roles_claim_does_not_fall_back_to_authorities() {
        let token = encode_token(&json!({"roles": [], "authorities": ["ADMIN"]}));
        let claims = decode_claims(&token).unwrap();
        assert_eq!(claims.roles, Some(vec![]));
        assert!(claims.normalized_roles().is_empty());
    }

    #[test]
    fn mistyped_claims_degrade_individually() {
        let token = encode_token(&json!({"exp": "soon", "roles": ["USER", 5]}));
        let claims = decode_claims(&token).unwrap();
        assert_eq!(claims.exp, None);
        assert_eq!(claims.normalized_roles(), vec!["USER"]);
    }

    #[test]
    fn padded_payload_accepted() {
        use base64::engine::general_purpose::URL_SAFE;
        let payload = URL_SAFE.encode(br#"{"exp":10}"#);
        let token = format!("h.{payload}.s");
        assert_eq!(decode_claims(&token).unwrap().exp, Some(10));
    }

    #[test]
    fn malformed_tokens_decode_to_none() {
        assert!(decode_claims("").is_none());
        assert!(decode_claims("not-a-token").is_none());
        assert!(decode_claims("a.!!!not-base64!!!.c").is_none());

        let not_json = URL_SAFE_NO_PAD.encode(b"plain text");
        assert!(decode_claims(&format!("a.{not_json}.c")).is_none());
    }

    #[test]
    fn normalize_role_variants() {
        assert_eq!(normalize_role("ROLE_admin"), "ADMIN");
        assert_eq!(normalize_role("role_ADMIN"), "ADMIN");
        assert_eq!(normalize_role("admin"), "ADMIN");
        // Only one prefix is stripped.
        assert_eq!(normalize_role("ROLE_ROLE_X"), "ROLE_X");
    }
}
