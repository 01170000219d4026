mod common;

use common::{test_jwt_config, test_user};
use visawise::config::jwt::JwtConfig;
use visawise::modules::users::model::UserRole;
use visawise::utils::jwt::{create_session_token, verify_token};

#[test]
fn token_round_trip_preserves_claims() {
    let config = test_jwt_config();
    let user = test_user(UserRole::Agent);

    let token = create_session_token(&user, &config).unwrap();
    let claims = verify_token(&token, &config).unwrap();

    assert_eq!(claims.sub, user.id.to_string());
    assert_eq!(claims.name, user.name);
    assert_eq!(claims.username, user.username);
    assert_eq!(claims.role, "agent");
    assert!(claims.exp > claims.iat);
    assert_eq!(claims.exp - claims.iat, 3600);
}

#[test]
fn admin_role_is_encoded_in_claims() {
    let config = test_jwt_config();
    let user = test_user(UserRole::Admin);

    let token = create_session_token(&user, &config).unwrap();
    let claims = verify_token(&token, &config).unwrap();

    assert_eq!(claims.role, "admin");
}

#[test]
fn token_signed_with_other_secret_is_rejected() {
    let config = test_jwt_config();
    let other = JwtConfig {
        secret: "a-different-secret".to_string(),
        ..test_jwt_config()
    };
    let user = test_user(UserRole::Agent);

    let token = create_session_token(&user, &other).unwrap();

    let err = verify_token(&token, &config).unwrap_err();
    assert_eq!(err.message, "Invalid or expired token");
}

#[test]
fn expired_token_is_rejected() {
    let config = JwtConfig {
        expires_in: -3600,
        ..test_jwt_config()
    };
    let user = test_user(UserRole::Agent);

    let token = create_session_token(&user, &config).unwrap();

    assert!(verify_token(&token, &config).is_err());
}

#[test]
fn garbage_tokens_are_rejected() {
    let config = test_jwt_config();

    for token in ["", "not-a-token", "a.b.c", "eyJhbGciOiJIUzI1NiJ9.e30."] {
        assert!(verify_token(token, &config).is_err(), "accepted {token:?}");
    }
}

#[test]
fn tokens_for_distinct_users_differ() {
    let config = test_jwt_config();
    let first = test_user(UserRole::Agent);
    let second = test_user(UserRole::Agent);

    let first_token = create_session_token(&first, &config).unwrap();
    let second_token = create_session_token(&second, &config).unwrap();

    assert_ne!(first_token, second_token);
    assert_eq!(
        verify_token(&first_token, &config).unwrap().sub,
        first.id.to_string()
    );
}
