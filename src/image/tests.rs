use super::*;

const APP_NAME: &str = "repo/name";
const APP_VERSION: &str = "v1.0.1";

fn inputs() -> ImageNameInputs {
    ImageNameInputs::new(APP_NAME, APP_VERSION)
}

#[test]
fn test_uses_name_and_version_without_user() {
    let image = resolve(&inputs()).unwrap();
    assert_eq!(image.to_string(), "repo/name:v1.0.1");
    assert!(image.namespace().is_none());
}

#[test]
fn test_empty_user_is_ignored() {
    let image = resolve(&inputs().with_namespace_override(Some(String::new()))).unwrap();
    assert_eq!(image.to_string(), "repo/name:v1.0.1");

    let image = resolve(&inputs().with_namespace_override(Some("   ".to_string()))).unwrap();
    assert_eq!(image.to_string(), "repo/name:v1.0.1");
}

#[test]
fn test_prefixes_user_name() {
    let image = resolve(&inputs().with_namespace_override(Some("user".to_string()))).unwrap();
    assert_eq!(image.to_string(), "user/repo/name:v1.0.1");
    assert_eq!(image.namespace(), Some("user"));
    assert_eq!(image.repository(), APP_NAME);
    assert_eq!(image.tag(), APP_VERSION);
}

#[test]
fn test_replaces_spaces_in_user_name() {
    let image =
        resolve(&inputs().with_namespace_override(Some("user surname".to_string()))).unwrap();
    assert_eq!(image.to_string(), "user-surname/repo/name:v1.0.1");
}

#[test]
fn test_fails_on_spaces_in_group() {
    let result = resolve(&inputs().with_explicit_group(Some("group with space".to_string())));
    assert_eq!(
        result,
        Err(ValidationError::InvalidGroup("group with space".to_string()))
    );
}

#[test]
fn test_group_whitespace_is_never_normalized() {
    for group in [" group", "group ", "gr\toup", "gr\noup"] {
        let result = resolve(&inputs().with_explicit_group(Some(group.to_string())));
        assert!(
            matches!(result, Err(ValidationError::InvalidGroup(_))),
            "expected '{}' to be rejected",
            group.escape_debug()
        );
    }
}

#[test]
fn test_group_takes_precedence_over_user() {
    let image = resolve(
        &inputs()
            .with_namespace_override(Some("user".to_string()))
            .with_explicit_group(Some("team".to_string())),
    )
    .unwrap();
    assert_eq!(image.to_string(), "team/repo/name:v1.0.1");
}

#[test]
fn test_invalid_group_fails_even_with_valid_user() {
    let result = resolve(
        &inputs()
            .with_namespace_override(Some("user".to_string()))
            .with_explicit_group(Some("my team".to_string())),
    );
    assert!(result.is_err());
}

#[test]
fn test_empty_group_falls_back_to_user() {
    let image = resolve(
        &inputs()
            .with_namespace_override(Some("user".to_string()))
            .with_explicit_group(Some(String::new())),
    )
    .unwrap();
    assert_eq!(image.to_string(), "user/repo/name:v1.0.1");
}

#[test]
fn test_name_and_version_without_user_for_many_inputs() {
    let cases = [("app", "1.0.0"), ("org/app", "latest"), ("a", "b"), ("my-app", "0.1.0-rc.1")];
    for (name, version) in cases {
        let image = resolve(&ImageNameInputs::new(name, version)).unwrap();
        assert_eq!(image.to_string(), format!("{}:{}", name, version));
    }
}

#[test]
fn test_user_prefix_for_many_inputs() {
    let users = ["alice", "Bob Smith", "first middle last", "jdoe "];
    for user in users {
        let image =
            resolve(&inputs().with_namespace_override(Some(user.to_string()))).unwrap();
        let expected = format!("{}/{}:{}", normalize_namespace(user), APP_NAME, APP_VERSION);
        assert_eq!(image.to_string(), expected);
        assert!(!image.namespace().unwrap().contains(char::is_whitespace));
    }
}

#[test]
fn test_normalize_namespace() {
    assert_eq!(normalize_namespace("user surname"), "user-surname");
    assert_eq!(normalize_namespace("a  b\tc"), "a-b-c");
    assert_eq!(normalize_namespace("  padded  "), "padded");
    assert_eq!(normalize_namespace("plain"), "plain");
    assert_eq!(normalize_namespace(""), "");
}

#[test]
fn test_normalize_namespace_is_idempotent() {
    for user in ["user", "user surname", " a \t b ", "x-y z", ""] {
        let once = normalize_namespace(user);
        assert_eq!(normalize_namespace(&once), once);
    }
}

#[test]
fn test_registry_prefix() {
    let image = resolve(
        &inputs()
            .with_registry(Some("ghcr.io/".to_string()))
            .with_namespace_override(Some("user".to_string())),
    )
    .unwrap();
    assert_eq!(image.to_string(), "ghcr.io/user/repo/name:v1.0.1");
    assert_eq!(image.registry(), Some("ghcr.io"));

    let image = resolve(&inputs().with_registry(Some(String::new()))).unwrap();
    assert!(image.registry().is_none());
}

#[test]
fn test_image_override_wins() {
    let image = resolve(
        &inputs()
            .with_registry(Some("ghcr.io".to_string()))
            .with_explicit_group(Some("group with space".to_string()))
            .with_image_override(Some("quay.io/org/app:2.0".to_string())),
    )
    .unwrap();
    assert_eq!(image.to_string(), "quay.io/org/app:2.0");
    assert_eq!(image.repository(), "quay.io/org/app");
    assert_eq!(image.tag(), "2.0");
}

#[test]
fn test_image_override_without_tag() {
    let image = resolve(&inputs().with_image_override(Some("org/app".to_string()))).unwrap();
    assert_eq!(image.to_string(), "org/app:latest");

    let image = resolve(&inputs().with_image_override(Some("org/app:".to_string()))).unwrap();
    assert_eq!(image.to_string(), "org/app:latest");
}

#[test]
fn test_image_override_with_registry_port() {
    let image =
        resolve(&inputs().with_image_override(Some("localhost:5000/app".to_string()))).unwrap();
    assert_eq!(image.repository(), "localhost:5000/app");
    assert_eq!(image.tag(), "latest");

    let image =
        resolve(&inputs().with_image_override(Some("localhost:5000/app:v2".to_string())))
            .unwrap();
    assert_eq!(image.repository(), "localhost:5000/app");
    assert_eq!(image.tag(), "v2");
}

#[test]
fn test_empty_image_override_is_ignored() {
    let image = resolve(&inputs().with_image_override(Some(String::new()))).unwrap();
    assert_eq!(image.to_string(), "repo/name:v1.0.1");
}

#[test]
fn test_with_tag() {
    let image = resolve(&inputs().with_namespace_override(Some("user".to_string()))).unwrap();
    let latest = image.with_tag("latest").unwrap();
    assert_eq!(latest.to_string(), "user/repo/name:latest");
    assert_eq!(image.tag(), APP_VERSION);
}

#[test]
fn test_with_tag_rejects_whitespace_and_empty() {
    let image = resolve(&inputs()).unwrap();
    for tag in ["my tag", " latest", "latest\n", ""] {
        assert_eq!(
            image.with_tag(tag),
            Err(ValidationError::InvalidTag(tag.to_string()))
        );
    }
}

#[test]
fn test_blank_image_override_is_ignored() {
    for blank in ["   ", "\t", " \n "] {
        let image = resolve(&inputs().with_image_override(Some(blank.to_string()))).unwrap();
        assert_eq!(image.to_string(), "repo/name:v1.0.1");
    }
}

#[test]
fn test_image_override_is_trimmed() {
    let image =
        resolve(&inputs().with_image_override(Some(" quay.io/app:1 ".to_string()))).unwrap();
    assert_eq!(image.to_string(), "quay.io/app:1");
    assert_eq!(image.repository(), "quay.io/app");
    assert_eq!(image.tag(), "1");
}

#[test]
fn test_image_override_without_repository_fails() {
    for image in [":", ":v1", " :latest "] {
        let result = resolve(&inputs().with_image_override(Some(image.to_string())));
        assert_eq!(
            result,
            Err(ValidationError::InvalidImage(image.trim().to_string()))
        );
    }
}

#[test]
fn test_image_override_with_inner_whitespace_fails() {
    let result = resolve(&inputs().with_image_override(Some("org/my app:1".to_string())));
    assert!(matches!(result, Err(ValidationError::InvalidImage(_))));
}

#[test]
#[cfg(debug_assertions)]
#[should_panic(expected = "application name and version must be non-empty")]
fn test_empty_name_and_version_are_rejected() {
    let _ = ImageNameInputs::new("", "");
}

#[test]
fn test_validation_error_message() {
    let err = ValidationError::InvalidGroup("a b".to_string());
    assert!(err.to_string().contains("'a b'"));
    assert!(err.to_string().contains("whitespace"));
}
