use anyhow::{anyhow, Context};
use clap::{Parser, Subcommand};
use linara_protocol::{builtin, load_pack, LanguagePack};
use linara_translator::Translator;
use rkyv::ser::{serializers::AllocSerializer, Serializer};
use std::fs;
use std::io::{self, BufRead};
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "English <-> Linara translator and language pack compiler")]
struct Cli {
    /// Language pack to translate with (`.json`, or a compiled rkyv archive)
    #[arg(short, long, value_name = "FILE", global = true)]
    pack: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Translate English to Linara (reads stdin line by line without TEXT)
    Encode { text: Option<String> },
    /// Translate Linara to English (reads stdin line by line without TEXT)
    Decode { text: Option<String> },
    /// Compile a JSON language pack to an rkyv archive
    Compile {
        #[arg(short, long, value_name = "FILE")]
        input: PathBuf,

        #[arg(short, long, value_name = "FILE")]
        output: PathBuf,
    },
    /// Write the built-in Linara pack as JSON
    Export {
        #[arg(short, long, value_name = "FILE")]
        output: PathBuf,
    },
}

#[derive(Clone, Copy)]
enum Direction {
    Encode,
    Decode,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Encode { text } => translate(cli.pack.as_deref(), Direction::Encode, text),
        Command::Decode { text } => translate(cli.pack.as_deref(), Direction::Decode, text),
        Command::Compile { input, output } => {
            println!("Reading JSON from {:?}...", input);
            let pack = read_json(&input)?;
            println!(
                "Compiling pack '{}' version {} with {} entries...",
                pack.name,
                pack.version,
                pack.entries.len()
            );
            let bytes = compile(&pack)?;
            fs::write(&output, bytes).with_context(|| format!("writing {:?}", output))?;
            println!("Binary written to {:?}", output);
            Ok(())
        }
        Command::Export { output } => {
            let json = serde_json::to_string_pretty(&builtin::linara())?;
            fs::write(&output, json).with_context(|| format!("writing {:?}", output))?;
            println!("Built-in pack written to {:?}", output);
            Ok(())
        }
    }
}

fn translate(pack: Option<&Path>, direction: Direction, text: Option<String>) -> anyhow::Result<()> {
    let translator = load_translator(pack)?;
    let run = |line: &str| match direction {
        Direction::Encode => translator.encode(line),
        Direction::Decode => translator.decode(line),
    };

    if let Some(text) = text {
        println!("{}", run(&text));
        return Ok(());
    }

    for line in io::stdin().lock().lines() {
        println!("{}", run(&line?));
    }
    Ok(())
}

fn load_translator(pack: Option<&Path>) -> anyhow::Result<Translator> {
    let Some(path) = pack else {
        return Ok(Translator::linara()?);
    };
    let pack = read_pack(path)?;
    info!(name = %pack.name, version = pack.version, "using language pack {:?}", path);
    Translator::from_pack(pack).with_context(|| format!("loading language pack {:?}", path))
}

/// JSON by extension, otherwise a compiled archive.
fn read_pack(path: &Path) -> anyhow::Result<LanguagePack> {
    if path.extension().is_some_and(|ext| ext == "json") {
        return read_json(path);
    }
    let bytes = fs::read(path).with_context(|| format!("reading {:?}", path))?;
    debug!(len = bytes.len(), "read archive");
    load_pack(&bytes).with_context(|| format!("decoding archive {:?}", path))
}

fn read_json(path: &Path) -> anyhow::Result<LanguagePack> {
    let data = fs::read_to_string(path).with_context(|| format!("reading {:?}", path))?;
    serde_json::from_str(&data).with_context(|| format!("parsing {:?}", path))
}

fn compile(pack: &LanguagePack) -> anyhow::Result<Vec<u8>> {
    let mut serializer = AllocSerializer::<256>::default();
    serializer
        .serialize_value(pack)
        .map_err(|e| anyhow!("failed to rkyv serialize: {:?}", e))?;
    Ok(serializer.into_serializer().into_inner().to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn scratch(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("linara-cli-{}-{}", std::process::id(), name))
    }

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();

        let cli = Cli::try_parse_from(["linara", "encode", "I eat food.", "--pack", "pack.json"]).unwrap();
        assert_eq!(cli.pack.as_deref(), Some(Path::new("pack.json")));
        assert!(matches!(cli.command, Command::Encode { text: Some(_) }));
    }

    #[test]
    fn test_json_and_archive_packs_agree() {
        let json_path = scratch("pack.json");
        let archive_path = scratch("pack.rkyv");

        let pack = builtin::linara();
        fs::write(&json_path, serde_json::to_string_pretty(&pack).unwrap()).unwrap();
        let from_json = read_pack(&json_path).unwrap();
        assert_eq!(from_json, pack);

        fs::write(&archive_path, compile(&from_json).unwrap()).unwrap();
        let translator = load_translator(Some(&archive_path)).unwrap();
        assert_eq!(translator.encode("I did not eat the food."), "Mi kera ma-kemata.");

        fs::remove_file(json_path).ok();
        fs::remove_file(archive_path).ok();
    }

    #[test]
    fn test_bad_pack_reports_path() {
        let path = scratch("broken.json");
        fs::write(&path, "{ not json").unwrap();

        let err = load_translator(Some(&path)).unwrap_err();
        assert!(format!("{:#}", err).contains("broken.json"));

        fs::remove_file(path).ok();
    }
}
