//! doc-qa command-line client
//!
//! Run with: cargo run -p doc-qa --features cli --bin doc-qa -- report.pdf -q "Who wrote it?"

use anyhow::Context;
use clap::Parser;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use doc_qa::{config::QaConfig, DocumentAssistant};

#[derive(Parser, Debug)]
#[command(version, about = "Ask questions about a PDF or text document", long_about = None)]
struct Args {
    /// PDF or plain-text file to load
    file: PathBuf,

    /// Question to ask; repeat for several. Without any, an interactive prompt starts
    #[arg(short, long = "question")]
    questions: Vec<String>,

    /// Config file (defaults to $DOC_QA_CONFIG or the user config dir)
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "doc_qa=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();
    let config = QaConfig::load(args.config.as_deref()).context("failed to load configuration")?;
    if config.llm.api_key.is_none() {
        eprintln!(
            "{} OPENROUTER_API_KEY is not set; answers will report an error",
            style("warning:").yellow().bold()
        );
    }

    let mut assistant = DocumentAssistant::from_config(&config.llm)?;

    let data = tokio::fs::read(&args.file)
        .await
        .with_context(|| format!("failed to read {}", args.file.display()))?;
    let filename = args
        .file
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| args.file.display().to_string());

    let spinner = spinner(&format!("Extracting text from {}...", filename))?;
    let loaded = assistant.upload(&filename, None, &data);
    spinner.finish_and_clear();
    let document = loaded?;
    let stats = document.stats();
    println!(
        "{} {} ({:.1} KB, {} characters, {} words, {} lines)",
        style("Loaded").green().bold(),
        style(&document.name).bold(),
        document.size_bytes as f64 / 1024.0,
        stats.char_count,
        stats.word_count,
        stats.line_count
    );

    if !args.questions.is_empty() {
        for question in &args.questions {
            ask(&mut assistant, question).await?;
        }
        return Ok(());
    }

    println!(
        "{}",
        style("Type a question, or :stats, :clear, :quit").dim()
    );

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();
    loop {
        stdout.write_all(b"\n> ").await?;
        stdout.flush().await?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        match line.trim() {
            "" => continue,
            ":quit" | ":q" => break,
            ":clear" => {
                assistant.clear_history();
                println!("{}", style("History cleared").dim());
            }
            ":stats" => print_stats(&assistant),
            question => ask(&mut assistant, question).await?,
        }
    }

    Ok(())
}

async fn ask(assistant: &mut DocumentAssistant, question: &str) -> anyhow::Result<()> {
    let spinner = spinner("Thinking...")?;
    let result = assistant.ask(question).await;
    spinner.finish_and_clear();

    let exchange = result?.clone();
    let number = assistant.history().len();

    println!("{} {}", style(format!("Q{}:", number)).cyan().bold(), exchange.question());
    if exchange.is_failed() {
        println!("{} {}", style(format!("A{}:", number)).red().bold(), exchange.answer());
    } else {
        println!("{} {}", style(format!("A{}:", number)).green().bold(), exchange.answer());
    }
    Ok(())
}

fn spinner(message: &str) -> anyhow::Result<ProgressBar> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::with_template("{spinner:.green} {msg}")?);
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(120));
    Ok(spinner)
}

fn print_stats(assistant: &DocumentAssistant) {
    let Some(document) = assistant.document() else {
        println!("{}", style("No document loaded").yellow());
        return;
    };
    let stats = document.stats();
    println!("{}", style(&document.name).bold());
    println!("  Type:       {}", document.file_type.display_name());
    println!("  Size:       {:.1} KB", document.size_bytes as f64 / 1024.0);
    if let Some(pages) = document.page_count {
        println!("  Pages:      {}", pages);
    }
    println!("  Characters: {}", stats.char_count);
    println!("  Words:      {}", stats.word_count);
    println!("  Lines:      {}", stats.line_count);
    println!("  Questions:  {}", assistant.history().len());
}
