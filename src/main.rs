//! Binix Search - command line front end
//!
//! Runs the search integration utilities against local files.

use binix_search::recent_searches::{recent_searches_plugin_with, FileStorage};
use binix_search::search::{SearchHit, SearchResponse};
use binix_search::{get_rgb, HtmlDocument, SearchConfig, SearchEngine, SearchError, NAME, VERSION};
use std::env;
use std::fs;
use std::path::PathBuf;

const DEFAULT_STORAGE_PATH: &str = "recent-searches.json";

fn main() {
    env_logger::init();

    let mut args: Vec<String> = env::args().skip(1).collect();
    let config = match take_config(&mut args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = run(&config, &args) {
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}

/// Remove `--config <file>` from the arguments and load it
fn take_config(args: &mut Vec<String>) -> binix_search::Result<SearchConfig> {
    match args.iter().position(|a| a == "--config") {
        Some(pos) => {
            let path = args
                .get(pos + 1)
                .cloned()
                .ok_or_else(|| SearchError::Other("--config needs a file".to_string()))?;
            args.drain(pos..=pos + 1);
            Ok(SearchConfig::from_file(path)?)
        }
        None => Ok(SearchConfig::default()),
    }
}

fn run(config: &SearchConfig, args: &[String]) -> binix_search::Result<()> {
    let args: Vec<&str> = args.iter().map(String::as_str).collect();
    match args.as_slice() {
        ["color", value] => {
            println!("{}", get_rgb(value)?);
        }
        ["url", base_url, locale, id] => {
            let engine = SearchEngine::new(SearchConfig {
                base_url: base_url.to_string(),
                locale: locale.to_string(),
                ..config.clone()
            });
            println!("{}", engine.article_url(*id));
        }
        ["mount", file, rest @ ..] => {
            let mut config = config.clone();
            if let [selector] = rest {
                config.input_selector = selector.to_string();
            }
            mount(config, file)?;
        }
        ["hits", file] => {
            let content = fs::read_to_string(file)?;
            let mut response: SearchResponse<SearchHit> = serde_json::from_str(&content)?;
            SearchEngine::new(config.clone()).hydrate(&mut response);
            for hit in &response.hits {
                println!(
                    "{:>3}  {}  {}",
                    hit.result_position.unwrap_or_default(),
                    hit.title,
                    hit.url
                );
            }
        }
        ["recent", command @ ..] => recent(config, command)?,
        _ => print_usage(),
    }
    Ok(())
}

fn mount(config: SearchConfig, file: &str) -> binix_search::Result<()> {
    let content = fs::read_to_string(file)?;
    let mut document = HtmlDocument::parse(&content);
    let engine = SearchEngine::new(config);
    let mounted = engine.mount(&mut document, storage(engine.config()))?;

    println!("✅ Search mounted on '{}'", engine.config().input_selector);
    println!(
        "   • Submit button: {}",
        if mounted.submit_button().is_some() { "found" } else { "none" }
    );
    println!("   • Theme color: {}", mounted.primary_rgb());
    println!("{}", document.html());
    Ok(())
}

fn recent(config: &SearchConfig, command: &[&str]) -> binix_search::Result<()> {
    let mut plugin = recent_searches_plugin_with(
        storage(config),
        &config.recent_searches.key,
        config.recent_searches.limit,
    );
    match command {
        ["add", query] => plugin.on_submit(query)?,
        ["remove", id] => plugin.remove(id)?,
        ["list", rest @ ..] => {
            let query = rest.first().copied().unwrap_or_default();
            for suggestion in plugin.suggestions(query) {
                println!("{}", suggestion.highlighted_label);
            }
        }
        _ => print_usage(),
    }
    Ok(())
}

fn storage(config: &SearchConfig) -> FileStorage {
    let path = config
        .storage_path
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_STORAGE_PATH));
    FileStorage::new(path)
}

fn print_usage() {
    println!("🔎 {} v{}", NAME, VERSION);
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("Usage: binix-search [--config <file>] <command>");
    println!();
    println!("   color <value>                 Resolve a CSS color to 'r, g, b'");
    println!("   url <base> <locale> <id>      Build an article URL");
    println!("   mount <html-file> [selector]  Replace the search form with a container");
    println!("   hits <response.json>          Print hydrated search hits");
    println!("   recent add <query>            Remember a search");
    println!("   recent list [query]           Show recent searches for a query");
    println!("   recent remove <id>            Forget a search");
}
