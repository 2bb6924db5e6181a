use facilityhub_auth::{create_access_token, verify_token};
use facilityhub_config::JwtConfig;
use uuid::Uuid;

fn get_test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret: "test_secret_key_for_testing_purposes".to_string(),
        access_token_expiry: 3600,
    }
}

#[test]
fn test_verify_token_success() {
    let jwt_config = get_test_jwt_config();
    let user_id = Uuid::new_v4();

    let token = create_access_token(user_id, "officer@facilityhub.test", &jwt_config).unwrap();
    let claims = verify_token(&token, &jwt_config).unwrap();

    assert_eq!(claims.sub, user_id.to_string());
    assert_eq!(claims.email, "officer@facilityhub.test");
    assert_eq!(claims.exp - claims.iat, 3600);
}

#[test]
fn test_verify_token_wrong_secret() {
    let jwt_config = get_test_jwt_config();
    let token = create_access_token(Uuid::new_v4(), "a@b.test", &jwt_config).unwrap();

    let other = JwtConfig {
        secret: "another_secret".to_string(),
        ..jwt_config
    };

    assert!(verify_token(&token, &other).is_err());
}

#[test]
fn test_verify_token_malformed() {
    let jwt_config = get_test_jwt_config();

    assert!(verify_token("", &jwt_config).is_err());
    assert!(verify_token("a.b.c", &jwt_config).is_err());
}
