//! Tests for loading form definitions from disk
use std::fs;
use std::path::Path;

use formcheck::forms::{load_form_file, load_forms_from_directory, FormPriority, FormRegistry};

fn write_form(dir: &Path, file: &str, content: &str) {
    fs::write(dir.join(file), content).expect("write form file");
}

#[tokio::test]
async fn test_directory_loading_skips_bad_files() {
    let dir = tempfile::tempdir().expect("temp dir");
    write_form(
        dir.path(),
        "contact.toml",
        r#"
[form]
name = "contact"

[fields.email]
required = true
type = "email"
label = "Email"
"#,
    );
    write_form(dir.path(), "broken.toml", "[form\nname = ");
    write_form(dir.path(), "notes.txt", "[form]\nname = \"ignored\"\n");

    let mut registry = FormRegistry::new();
    load_forms_from_directory(dir.path(), FormPriority::UserGlobal, &mut registry)
        .await
        .expect("load directory");

    assert_eq!(registry.list_names(), vec!["contact"]);
    let contact = registry.get("contact").unwrap();
    assert_eq!(contact.priority, FormPriority::UserGlobal);
    assert_eq!(
        contact.source_path.as_deref(),
        Some(dir.path().join("contact.toml").as_path())
    );
}

#[tokio::test]
async fn test_workspace_form_overrides_builtin() {
    let dir = tempfile::tempdir().expect("temp dir");
    write_form(
        dir.path(),
        "login.toml",
        r#"
[form]
name = "login"
description = "SSO login"

[fields.username]
required = true
label = "Usuario"
"#,
    );

    let mut registry = FormRegistry::with_builtin_forms();
    load_forms_from_directory(dir.path(), FormPriority::Workspace, &mut registry)
        .await
        .expect("load directory");

    let login = registry.get("login").unwrap();
    assert_eq!(login.priority, FormPriority::Workspace);
    assert_eq!(login.rules.description.as_deref(), Some("SSO login"));
    assert!(login.rules.get("email").is_none());
    assert!(login.rules.get("username").is_some());

    // Other built-ins are untouched
    assert_eq!(
        registry.get("register").unwrap().priority,
        FormPriority::BuiltIn
    );
}

#[tokio::test]
async fn test_load_single_form_file() {
    let dir = tempfile::tempdir().expect("temp dir");
    write_form(
        dir.path(),
        "upload.toml",
        r#"
[form]
name = "upload"

[fields.repositoryUrl]
required = true
minLength = 10
label = "URL del repositorio"
"#,
    );

    let rules = load_form_file(&dir.path().join("upload.toml"))
        .await
        .expect("load form file");
    assert_eq!(rules.name, "upload");
    assert_eq!(rules.get("repositoryUrl").unwrap().min_length, Some(10));

    assert!(load_form_file(&dir.path().join("missing.toml")).await.is_err());
}
