//! Behavioural tests for the validation engine
use formcheck::forms::FormRegistry;
use formcheck::{validate, FieldRule, FieldType, FormValues, RuleSet};

fn values(pairs: &[(&str, &str)]) -> FormValues {
    pairs.iter().copied().collect()
}

#[test]
fn test_invalid_email() {
    let rules = RuleSet::new("t").field("email", FieldRule::required("Email").email());
    let result = validate(&rules, &values(&[("email", "not-an-email")]));

    assert!(!result.is_valid());
    assert_eq!(result.errors().len(), 1);
    assert_eq!(result.error("email"), Some("Email no válido"));
}

#[test]
fn test_password_length() {
    let rules = RuleSet::new("t").field("pwd", FieldRule::required("Password").password());

    let short = validate(&rules, &values(&[("pwd", "abc")]));
    assert_eq!(
        short.error("pwd"),
        Some("La contraseña debe tener al menos 6 caracteres")
    );

    let ok = validate(&rules, &values(&[("pwd", "abcdef")]));
    assert!(ok.is_valid());
    assert_eq!(ok.error("pwd"), None);
}

#[test]
fn test_confirmation_mismatch_only_on_confirm() {
    let rules = RuleSet::new("t")
        .field(
            "pwd",
            FieldRule {
                required: true,
                ..FieldRule::default()
            },
        )
        .field(
            "confirm",
            FieldRule {
                required: true,
                match_field: Some("pwd".to_string()),
                ..FieldRule::default()
            },
        );

    let result = validate(&rules, &values(&[("pwd", "x"), ("confirm", "y")]));
    assert!(!result.is_valid());
    assert_eq!(result.errors().len(), 1);
    assert_eq!(result.error("confirm"), Some("Las contraseñas no coinciden"));

    let result = validate(&rules, &values(&[("pwd", "x"), ("confirm", "x")]));
    assert!(result.is_valid());
}

#[test]
fn test_required_message_wins_for_blank_values() {
    let rule = FieldRule {
        required: true,
        field_type: FieldType::Email,
        min_length: Some(8),
        match_field: Some("other".to_string()),
        label: Some("Correo".to_string()),
    };
    let rules = RuleSet::new("t").field("email", rule);

    for form in [values(&[]), values(&[("email", "")]), values(&[("email", " \t ")])] {
        let result = validate(&rules, &form);
        assert_eq!(result.error("email"), Some("Correo es requerido"));
    }
}

#[test]
fn test_every_field_is_evaluated() {
    let registry = FormRegistry::with_builtin_forms();
    let rules = registry.rules("register").expect("register form");

    let result = validate(
        rules,
        &values(&[
            ("name", "A"),
            ("email", "ana@"),
            ("password", "123"),
            ("confirmPassword", "1234"),
        ]),
    );

    assert_eq!(result.error("name"), Some("Nombre debe tener al menos 2 caracteres"));
    assert_eq!(result.error("email"), Some("Email no válido"));
    assert_eq!(
        result.error("password"),
        Some("La contraseña debe tener al menos 6 caracteres")
    );
    assert_eq!(
        result.error("confirmPassword"),
        Some("Las contraseñas no coinciden")
    );
}

#[test]
fn test_valid_registration() {
    let registry = FormRegistry::with_builtin_forms();
    let rules = registry.rules("register").expect("register form");

    let result = validate(
        rules,
        &values(&[
            ("name", "Ana"),
            ("email", "ana@example.com"),
            ("password", "secreto1"),
            ("confirmPassword", "secreto1"),
        ]),
    );
    assert!(result.is_valid());
    assert!(result.errors().is_empty());
}

#[test]
fn test_empty_rule_set_is_always_valid() {
    let rules = RuleSet::new("empty");
    for form in [values(&[]), values(&[("anything", ""), ("else", "x")])] {
        let result = validate(&rules, &form);
        assert!(result.is_valid());
        assert!(result.errors().is_empty());
    }
}

#[test]
fn test_validation_is_idempotent() {
    let registry = FormRegistry::with_builtin_forms();
    let rules = registry.rules("profile").expect("profile form");
    let form = values(&[("name", "B"), ("email", "b@b"), ("company", "X")]);

    let first = validate(rules, &form);
    let second = validate(rules, &form);
    assert_eq!(first, second);
}

#[test]
fn test_is_valid_tracks_errors() {
    let registry = FormRegistry::with_builtin_forms();
    let forms = [
        values(&[]),
        values(&[("email", "a@b.co")]),
        values(&[("email", "a@b.co"), ("password", "123456")]),
        values(&[("email", "bad"), ("password", "1")]),
    ];

    for name in registry.list_names() {
        let rules = registry.rules(name).unwrap();
        for form in &forms {
            let result = validate(rules, form);
            assert_eq!(result.is_valid(), result.errors().is_empty());
        }
    }
}
