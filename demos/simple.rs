//! Resolves a few keys from translations bundled into the binary.
//!
//! Usage:
//! ```
//! RUST_LOG=boujee=debug cargo run --example simple -- pl_PL
//! ```

#![allow(clippy::print_stdout)]

use boujee::input::{
    EmbeddedRoot,
    TranslationLoader,
};
use boujee::{
    LocaleSource,
    Replacer,
    TranslationService,
};

#[derive(rust_embed::RustEmbed)]
#[folder = "demos/assets/"]
struct Assets;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let requested = std::env::args().nth(1).unwrap_or_else(|| "en_US".to_string());
    let locale = LocaleSource::parse(&requested)?;

    let mut service = TranslationService::new(LocaleSource::parse("en_US")?);
    TranslationLoader::default().fill(&EmbeddedRoot::<Assets>::new("languages"), &mut service)?;

    let args = Replacer::new().with("player", "Steve").with("arena", "Lobby");
    for key in ["greeting", "arena.full", "arena_full", "arena_help"] {
        match service.resolve(key, Some(&locale), &args) {
            Ok(text) => println!("{key}:\n{text}\n"),
            Err(e) => println!("{key}: {e}\n"),
        }
    }

    Ok(())
}
