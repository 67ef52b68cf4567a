use std::io::Write;

use tokio::io::AsyncReadExt;
use tracing::debug;
use wordswap::{
    dictionary::{Import, Insertion},
    Translation,
};

use crate::{
    cli::{self, Cli, Command},
    engine::WordswapFacade,
    error::{ConfigError, Error, IoError},
    store::Store,
};

/// Runs one CLI command against the dictionary in the configured store.
///
/// Results go to `out`, diagnostics such as coverage to `err`. The store is
/// written back only after a successful mutation.
pub async fn run<O: Write, E: Write>(cli: Cli, out: &mut O, err: &mut E) -> Result<(), Error> {
    let store = Store::new(&cli.store);
    let mut engine = WordswapFacade::new(store.load().await?);

    debug!(store = %store.path().display(), command = ?cli.command, "running command");

    let mutated = match cli.command {
        Command::Translate(args) => {
            let text = input(args.text).await?;
            let translation = engine.translate(&text, args.direction);

            emit_text(out, &translation.output)?;
            coverage(err, &translation)?;
            false
        }
        Command::Swap(args) => {
            let text = input(args.text).await?;
            let (there, back) = engine.swap(&text, args.direction);

            emit_text(out, &there.output)?;
            emit_text(out, &back.output)?;
            coverage(err, &there)?;
            coverage(err, &back)?;
            false
        }
        Command::Add(cli::Add { source, target }) => {
            match engine.add(&source, &target)? {
                Insertion::Added { index } => {
                    emit(out, &format!("added #{index}: {source} = {target}"))?
                }
                Insertion::Updated { index, previous } => emit(
                    out,
                    &format!("updated #{index}: {source} = {target} (was {previous})"),
                )?,
            }
            true
        }
        Command::Remove(cli::Remove { index }) => {
            let pair = engine.remove(index)?;
            emit(out, &format!("removed #{index}: {} = {}", pair.source, pair.target))?;
            true
        }
        Command::List => {
            list(out, &engine)?;
            false
        }
        Command::Import(cli::Import { file }) => {
            let raw = tokio::fs::read_to_string(&file)
                .await
                .map_err(|error| IoError::file(&file, &error))?;

            match engine.import(&raw)? {
                Import::Skipped => {
                    emit(out, "nothing to import")?;
                    false
                }
                Import::Replaced { accepted, rejected } => {
                    emit(
                        out,
                        &format!("imported {accepted} pairs ({rejected} skipped)"),
                    )?;
                    true
                }
            }
        }
        Command::Export(cli::Export { file }) => {
            let raw = engine.export()?;
            match file {
                Some(file) => tokio::fs::write(&file, raw)
                    .await
                    .map_err(|error| IoError::file(&file, &error))?,
                None => emit(out, &raw)?,
            }
            false
        }
        Command::Clear(cli::Clear { yes }) => {
            if !yes {
                return Err(ConfigError::Unconfirmed("clear the dictionary").into());
            }

            engine.clear();
            emit(out, "dictionary cleared")?;
            true
        }
    };

    if mutated {
        store.save(engine.dictionary()).await?;
    }

    Ok(())
}

async fn input(text: Option<String>) -> Result<String, Error> {
    if let Some(text) = text {
        return Ok(text);
    }

    let mut buffer = String::new();
    tokio::io::stdin()
        .read_to_string(&mut buffer)
        .await
        .map_err(|error| IoError::Stdin(error.kind()))?;

    if buffer.is_empty() {
        return Err(ConfigError::NoInput.into());
    }

    Ok(buffer)
}

fn emit<W: Write>(sink: &mut W, line: &str) -> Result<(), Error> {
    writeln!(sink, "{line}").map_err(|error| IoError::Output(error.kind()).into())
}

/// Writes translated text, ending it with a newline unless it already has one.
fn emit_text<W: Write>(sink: &mut W, text: &str) -> Result<(), Error> {
    if text.ends_with('\n') {
        write!(sink, "{text}").map_err(|error| IoError::Output(error.kind()).into())
    } else {
        emit(sink, text)
    }
}

fn coverage<W: Write>(sink: &mut W, translation: &Translation) -> Result<(), Error> {
    emit(
        sink,
        &format!(
            "coverage: {}% ({}/{} words)",
            translation.coverage_percent(),
            translation.translated_count(),
            translation.total_word_tokens()
        ),
    )
}

fn list<W: Write>(sink: &mut W, engine: &WordswapFacade) -> Result<(), Error> {
    let dictionary = engine.dictionary();

    if dictionary.is_empty() {
        return emit(sink, "dictionary is empty");
    }

    emit(sink, &format!("{} words", dictionary.len()))?;
    dictionary
        .iter()
        .enumerate()
        .try_for_each(|(index, pair)| {
            emit(sink, &format!("{index:>4}  {}\t{}", pair.source, pair.target))
        })
}
