//! Loading translation files and resolving keys end to end.

#![allow(clippy::unwrap_used)]
#![allow(clippy::indexing_slicing)]
#![allow(missing_docs)]

use std::fs;
use std::path::Path;

use boujee::config::Settings;
use boujee::input::{
    self,
    EmbeddedRoot,
    LoadError,
    TranslationLoader,
};
use boujee::{
    LocaleSource,
    Replacer,
    ResolveError,
    TranslationService,
};
use googletest::prelude::*;
use rstest::*;
use tempfile::TempDir;

#[derive(rust_embed::RustEmbed)]
#[folder = "tests/fixtures/"]
struct Fixtures;

fn write(root: &Path, name: &str, content: &str) {
    fs::write(root.join(name), content).unwrap();
}

fn locale(tag: &str) -> LocaleSource {
    LocaleSource::parse(tag).unwrap()
}

#[fixture]
fn greetings() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), "en_US.json", r#"{"greeting": "hi"}"#);
    write(temp_dir.path(), "pl_PL.json", r#"{"greeting": "cześć"}"#);
    temp_dir
}

#[rstest]
fn test_load_all_and_resolve_with_fallback(greetings: TempDir) {
    let translations = input::load_all(greetings.path()).unwrap();
    assert_eq!(translations.len(), 2);

    let mut service = TranslationService::new(locale("en_US"));
    service.update_translations(translations);

    let args = Replacer::new();
    assert_that!(service.resolve("GREETING", Some(&locale("pl_PL")), &args).unwrap(), eq("cześć"));
    assert_that!(service.resolve("GREETING", Some(&locale("de_DE")), &args).unwrap(), eq("hi"));
}

#[rstest]
fn test_one_malformed_file_fails_the_whole_load() {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), "de_DE.json", r#"{"greeting": "hallo"}"#);
    write(temp_dir.path(), "en_US.json", r#"{"greeting": "hi"}"#);
    write(temp_dir.path(), "es_ES.json", r#"{"greeting": ["#);
    write(temp_dir.path(), "pl_PL.json", r#"{"greeting": "cześć"}"#);

    let result = input::load_all(temp_dir.path());

    let error = result.unwrap_err();
    assert!(matches!(error, LoadError::MalformedInput { .. }), "{error:?}");
    assert_that!(error.to_string(), contains_substring("es_ES.json"));
}

#[rstest]
fn test_round_trip_text_and_message() {
    let temp_dir = TempDir::new().unwrap();
    write(
        temp_dir.path(),
        "en_US.json",
        r#"{"title": "Arena", "rules": {"list": ["no griefing", "be nice"]}}"#,
    );

    let translations = input::load(temp_dir.path(), "en_US").unwrap();
    let mut service = TranslationService::new(locale("en_US"));
    service.update_translations([translations]);

    let en = locale("en_US");
    let args = Replacer::new();
    assert_that!(service.resolve("TITLE", Some(&en), &args).unwrap(), eq("Arena"));
    assert_that!(
        service.resolve("RULES_LIST", Some(&en), &args).unwrap(),
        eq("no griefing\nbe nice")
    );
}

#[rstest]
fn test_fill_then_reload_replaces_locale(greetings: TempDir) {
    let mut service = TranslationService::new(locale("en_US"));
    assert_eq!(input::fill(greetings.path(), &mut service).unwrap(), 2);

    write(greetings.path(), "en_US.json", r#"{"welcome": "hello"}"#);
    input::fill(greetings.path(), &mut service).unwrap();

    let args = Replacer::new();
    assert_that!(service.resolve("WELCOME", None, &args).unwrap(), eq("hello"));
    assert_that!(
        service.resolve("GREETING", None, &args),
        err(eq(&ResolveError::TranslationNotFound {
            key: "GREETING".to_string(),
            locale: "en_US".to_string(),
        }))
    );
}

#[rstest]
fn test_embedded_root_matches_filesystem_root() {
    let loader = TranslationLoader::default();
    let embedded = loader.load_all(&EmbeddedRoot::<Fixtures>::new("locales")).unwrap();
    let on_disk =
        input::load_all(&Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/locales"))
            .unwrap();

    assert_eq!(embedded, on_disk);
}

#[rstest]
fn test_embedded_root_resolves_with_arguments() {
    let mut service = TranslationService::new(locale("en_US"));
    TranslationLoader::default()
        .fill(&EmbeddedRoot::<Fixtures>::new("locales"), &mut service)
        .unwrap();

    let args = Replacer::new().with("player", "Steve");
    assert_that!(
        service.resolve("arena.join", Some(&locale("pl_PL")), &args),
        err(anything())
    );
    assert_that!(
        service.resolve("arena_join", Some(&locale("pl_PL")), &args).unwrap(),
        eq("Steve dołączył do areny")
    );
    assert_that!(
        service.resolve("ARENA_HELP", Some(&locale("pl_PL")), &args).unwrap(),
        eq("/arena join <name>\n/arena leave")
    );
}

#[rstest]
fn test_configured_loader_and_service() {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), "pl_PL.jsonc", "{\n  // lobby\n  \"lines\": [\"a\", \"b\",],\n}");
    write(temp_dir.path(), "notes.txt", "not a translation file");
    let settings: Settings = serde_json::from_str(
        r#"{
            "defaultLocale": "pl_PL",
            "lineSeparator": " / ",
            "excludePatterns": ["**/*.txt"]
        }"#,
    )
    .unwrap();

    let mut service = TranslationService::from_settings(&settings).unwrap();
    let installed = TranslationLoader::new(&settings)
        .unwrap()
        .fill(&input::FsRoot::new(temp_dir.path()), &mut service)
        .unwrap();

    assert_eq!(installed, 1);
    assert_that!(service.resolve("LINES", None, &Replacer::new()).unwrap(), eq("a / b"));
}

#[rstest]
#[case::json("en_US.json")]
#[case::jsonc("en_US.jsonc")]
fn test_deeply_nested_file_is_reported_not_fatal(#[case] name: &str) {
    let temp_dir = TempDir::new().unwrap();
    let depth = 200_000;
    write(
        temp_dir.path(),
        name,
        &format!("{}\"x\"{}", "{\"a\": ".repeat(depth), "}".repeat(depth)),
    );

    let error = input::load_all(temp_dir.path()).unwrap_err();

    assert!(matches!(error, LoadError::MalformedInput { .. }), "{error:?}");
    assert_that!(error.to_string(), contains_substring("nesting deeper than 64 levels"));
}

#[rstest]
fn test_nesting_at_the_limit_loads_from_both_formats() {
    let temp_dir = TempDir::new().unwrap();
    let depth = input::MAX_NESTING_DEPTH;
    let content = format!("{}\"x\"{}", "{\"a\": ".repeat(depth), "}".repeat(depth));
    write(temp_dir.path(), "en_US.json", &content);
    write(temp_dir.path(), "pl_PL.jsonc", &content);

    let translations = input::load_all(temp_dir.path()).unwrap();

    let key = vec!["A"; depth].join("_");
    assert!(translations[0].contains_key(&key));
    assert!(translations[1].contains_key(&key));
}
