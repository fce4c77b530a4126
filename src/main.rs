use std::env;
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Arc;

use spot_finder::engine::{Output, OutputBlock};
use spot_finder::{SpotFinder, load_config_from_file, load_vocabulary_from_file};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn flush_output(out: Output) {
    for block in out.blocks {
        match block {
            OutputBlock::Title(t) => println!("\n{}", t),
            OutputBlock::Text(line) => println!("{}", line),
            OutputBlock::Entry(entry) => println!("  {}", entry),
            OutputBlock::Field { name, value } => println!("\n[{}]\n{}", name, value),
            OutputBlock::Footer(footer) => println!("\n{}", footer),
        }
    }
}

fn init_tracing(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::try_new(default_filter).unwrap_or_else(|_| EnvFilter::new("info"))
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> io::Result<()> {
    let config_path: PathBuf = env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("spot_finder.toml"));

    let config = match load_config_from_file(&config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load config '{}': {e}", config_path.display());
            std::process::exit(1);
        }
    };

    init_tracing(&config.log_filter);
    info!(config = %config_path.display(), "starting spot finder");

    // An invalid vocabulary must never be served; refuse to start instead.
    let index = match load_vocabulary_from_file(&config.data_path) {
        Ok(index) => index,
        Err(e) => {
            error!(path = %config.data_path.display(), "failed to load vocabulary: {e}");
            std::process::exit(1);
        }
    };

    let finder = SpotFinder::new(Arc::new(index), config.command_prefix.clone());

    println!(
        "채집 & 거점 검색 ({}{} 로 사용법 보기, quit 로 종료)",
        config.command_prefix,
        spot_finder::engine::USAGE_COMMANDS[0]
    );

    let stdin = io::stdin();

    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut input = String::new();
        let bytes_read = stdin.read_line(&mut input)?;
        if bytes_read == 0 {
            println!();
            break;
        }

        let input = input.trim();
        if input.is_empty() {
            continue;
        }

        let (out, quit) = finder.step(input);
        flush_output(out);

        if quit {
            break;
        }
    }

    Ok(())
}
