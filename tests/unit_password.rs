use visawise::utils::password::{hash_password, verify_password};

#[test]
fn hash_and_verify_round_trip() {
    let password = "correct horse battery staple";
    let hash = hash_password(password).unwrap();

    assert_ne!(hash, password);
    assert!(verify_password(password, &hash).unwrap());
}

#[test]
fn wrong_password_does_not_verify() {
    let hash = hash_password("password123").unwrap();

    assert!(!verify_password("password124", &hash).unwrap());
    assert!(!verify_password("", &hash).unwrap());
}

#[test]
fn same_password_hashes_differently() {
    // bcrypt salts per call
    let first = hash_password("password123").unwrap();
    let second = hash_password("password123").unwrap();

    assert_ne!(first, second);
    assert!(verify_password("password123", &first).unwrap());
    assert!(verify_password("password123", &second).unwrap());
}

#[test]
fn malformed_hash_is_an_error() {
    assert!(verify_password("password123", "not-a-bcrypt-hash").is_err());
}
