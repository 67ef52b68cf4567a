mod shared;

use clap::Parser;
use wordswap::{translate, Dictionary, Direction, Index};
use wordswap_repo::{
    cli::Cli,
    command,
    error::{ConfigError, Error},
};

use shared::{cli_args, test_dictionary, test_index};

#[test]
fn test_translate_sentence_both_ways() {
    let index = test_index();

    let there = translate("Привет, мой друг! Я и ТЫ.", Direction::Forward, &index);
    assert_eq!(there.output, "Lihek, doi vela! SA и TU.");
    assert_eq!(there.translated_count(), 5);
    assert_eq!(there.total_word_tokens(), 6);
    assert_eq!(there.coverage_percent(), 83);

    let back = translate(&there.output, Direction::Reverse, &index);
    assert_eq!(back.output, "Привет, мой друг! Я и ТЫ.");
}

#[test]
fn test_translate_inflected_forms() {
    let index = test_index();

    let translation = translate("Моего друга, моим друзьям", Direction::Forward, &index);

    assert_eq!(translation.output, "Doi vela, doi vela");
    assert_eq!(translation.coverage(), 1.0);
}

#[test]
fn test_rebuild_is_idempotent() {
    let dictionary = test_dictionary();

    assert_eq!(Index::rebuild(&dictionary), Index::rebuild(&dictionary));
}

#[test]
fn test_import_export_roundtrip() {
    let dictionary = test_dictionary();
    let exported = dictionary.export_json().unwrap();

    let mut imported = Dictionary::with_defaults();
    imported.import_json(&exported).unwrap();

    assert_eq!(imported, dictionary);
}

async fn run(args: Vec<&str>) -> (Result<(), Error>, String, String) {
    let cli = Cli::try_parse_from(args).unwrap();
    let (mut out, mut err) = (Vec::new(), Vec::new());

    let result = command::run(cli, &mut out, &mut err).await;

    (
        result,
        String::from_utf8(out).unwrap(),
        String::from_utf8(err).unwrap(),
    )
}

#[tokio::test]
async fn test_cli_translate_with_default_store() {
    let dir = tempfile::tempdir().unwrap();
    let store = dir.path().join("dictionary.json");

    let (result, out, err) = run(cli_args(&store, &["translate", "привет мир"])).await;

    assert_eq!(result, Ok(()));
    assert_eq!(out, "lihek kaar\n");
    assert_eq!(err, "coverage: 100% (2/2 words)\n");
    // Read-only commands never create the store.
    assert!(!store.exists());
}

#[tokio::test]
async fn test_cli_add_persists() {
    let dir = tempfile::tempdir().unwrap();
    let store = dir.path().join("dictionary.json");

    let (result, out, _) = run(cli_args(&store, &["add", "мой", "doi"])).await;
    assert_eq!(result, Ok(()));
    assert_eq!(out, "added #4: мой = doi\n");

    let (result, out, _) = run(cli_args(&store, &["add", "МИР", "X"])).await;
    assert_eq!(result, Ok(()));
    assert_eq!(out, "updated #1: МИР = X (was kaar)\n");

    let (_, out, err) = run(cli_args(&store, &["translate", "моя мир, его"])).await;
    assert_eq!(out, "doi X, его\n");
    assert_eq!(err, "coverage: 67% (2/3 words)\n");
}

#[tokio::test]
async fn test_cli_translate_keeps_single_trailing_newline() {
    let dir = tempfile::tempdir().unwrap();
    let store = dir.path().join("dictionary.json");

    let (result, out, _) = run(cli_args(&store, &["translate", "привет\nмир\n"])).await;

    assert_eq!(result, Ok(()));
    assert_eq!(out, "lihek\nkaar\n");

    let (_, out, _) = run(cli_args(&store, &["swap", "мир\n"])).await;
    assert_eq!(out, "kaar\nмир\n");
}

#[tokio::test]
async fn test_cli_swap() {
    let dir = tempfile::tempdir().unwrap();
    let store = dir.path().join("dictionary.json");

    let (result, out, _) = run(cli_args(&store, &["swap", "Привет, мир"])).await;

    assert_eq!(result, Ok(()));
    assert_eq!(out, "Lihek, kaar\nПривет, мир\n");
}

#[tokio::test]
async fn test_cli_import_rejects_non_array() {
    let dir = tempfile::tempdir().unwrap();
    let store = dir.path().join("dictionary.json");
    let payload = dir.path().join("payload.json");
    std::fs::write(&payload, r#"{"not":"an array"}"#).unwrap();

    let (result, _, _) = run(cli_args(&store, &["import", payload.to_str().unwrap()])).await;

    assert!(matches!(result, Err(Error::Core(wordswap::Error::Import(_)))));
    assert!(!store.exists());
}

#[tokio::test]
async fn test_cli_import_then_list() {
    let dir = tempfile::tempdir().unwrap();
    let store = dir.path().join("dictionary.json");
    let payload = dir.path().join("payload.json");
    std::fs::write(
        &payload,
        r#"[{"ru": "друг", "lk": "vela"}, {"ru": 1, "lk": "x"}]"#,
    )
    .unwrap();

    let (result, out, _) = run(cli_args(&store, &["import", payload.to_str().unwrap()])).await;
    assert_eq!(result, Ok(()));
    assert_eq!(out, "imported 1 pairs (1 skipped)\n");

    let (_, out, _) = run(cli_args(&store, &["list"])).await;
    assert_eq!(out, "1 words\n   0  друг\tvela\n");
}

#[tokio::test]
async fn test_cli_add_over_unusable_store_keeps_backup() {
    let dir = tempfile::tempdir().unwrap();
    let store = dir.path().join("dictionary.json");
    std::fs::write(&store, "not json").unwrap();

    let (result, _, _) = run(cli_args(&store, &["add", "друг", "vela"])).await;

    assert_eq!(result, Ok(()));
    assert_eq!(
        std::fs::read_to_string(dir.path().join("dictionary.json.bak")).unwrap(),
        "not json"
    );
}

#[tokio::test]
async fn test_cli_clear_needs_confirmation() {
    let dir = tempfile::tempdir().unwrap();
    let store = dir.path().join("dictionary.json");

    let (result, _, _) = run(cli_args(&store, &["clear"])).await;
    assert!(matches!(
        result,
        Err(Error::Config(ConfigError::Unconfirmed(_)))
    ));

    let (result, _, _) = run(cli_args(&store, &["clear", "--yes"])).await;
    assert_eq!(result, Ok(()));

    let (_, out, err) = run(cli_args(&store, &["translate", "привет"])).await;
    assert_eq!(out, "привет\n");
    assert_eq!(err, "coverage: 0% (0/1 words)\n");

    let (_, out, _) = run(cli_args(&store, &["list"])).await;
    assert_eq!(out, "dictionary is empty\n");
}
