use std::io::{IsTerminal, Write};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use colored::{ColoredString, Colorize};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

use lvl404_term::{Category, Completion, Effect, Record, Terminal, TerminalOptions};

#[derive(Parser)]
#[command(name = "lvl404-term")]
#[command(about = "A fake terminal from the lvl404 void")]
#[command(version)]
struct Cli {
    /// Run a single command line and exit
    #[arg(short = 'c')]
    command: Option<String>,

    /// Print every record as a JSON object, one per line
    #[arg(long = "json")]
    json: bool,

    /// TOML file with terminal options
    #[arg(long = "config")]
    config: Option<PathBuf>,
}

/// Renders records to stdout and runs their effects.
struct Renderer {
    json: bool,
    glitching: Arc<AtomicBool>,
}

impl Renderer {
    fn render(&self, records: &[Record]) {
        let mut stdout = std::io::stdout().lock();
        for record in records {
            if self.json {
                match serde_json::to_string(record) {
                    Ok(line) => {
                        let _ = writeln!(stdout, "{}", line);
                    }
                    Err(e) => tracing::warn!(error = %e, "cannot encode record"),
                }
                if let Record::Effect { effect: Effect::Animate { duration_ms, .. } } = record {
                    self.start_glitch(*duration_ms);
                }
                continue;
            }

            match record {
                Record::Line { category, text } => {
                    let _ = writeln!(stdout, "{}", style(*category, text));
                }
                Record::Effect { effect } => match effect {
                    Effect::ClearOutput => {
                        let _ = write!(stdout, "\x1b[2J\x1b[H");
                    }
                    Effect::OpenUrl { url } => {
                        let _ = writeln!(stdout, "{} {}", "->".cyan(), url.cyan().underline());
                    }
                    Effect::Animate { duration_ms, .. } => self.start_glitch(*duration_ms),
                    Effect::FocusInput => {}
                },
            }
        }
        let _ = stdout.flush();
    }

    // One-shot timer; a second glitch simply starts another one.
    fn start_glitch(&self, duration_ms: u64) {
        self.glitching.store(true, Ordering::SeqCst);
        let flag = self.glitching.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(duration_ms)).await;
            flag.store(false, Ordering::SeqCst);
        });
    }

    fn prompt(&self, terminal: &Terminal) {
        let prompt = terminal.prompt();
        let mut stdout = std::io::stdout().lock();
        let shown = if self.glitching.load(Ordering::SeqCst) {
            prompt.magenta().blink()
        } else {
            prompt.green().bold()
        };
        let _ = write!(stdout, "{}", shown);
        let _ = stdout.flush();
    }
}

fn style(category: Category, text: &str) -> ColoredString {
    match category {
        Category::CommandEcho => format!("$ {}", text).dimmed(),
        Category::Error => text.red(),
        Category::Success => text.green(),
        Category::Info => text.cyan(),
        Category::Warning => text.yellow(),
        Category::SectionHeader => text.bold().underline(),
        Category::Listing | Category::FileContent => text.normal(),
        Category::Link => text.blue().underline(),
        Category::Glitch => text.magenta().blink(),
    }
}

/// `:tab` with an optional prefix; `None` for any other line.
fn tab_prefix(line: &str) -> Option<&str> {
    if line == ":tab" {
        return Some("");
    }
    line.strip_prefix(":tab ").map(str::trim_start)
}

/// Lines starting with `:` stand in for keys a line-mode terminal never sees.
async fn handle_line(terminal: &mut Terminal, renderer: &Renderer, line: &str) {
    if let Some(codes) = line.strip_prefix(":key ") {
        for code in codes.split_whitespace() {
            renderer.render(&terminal.key_pressed(code));
        }
        return;
    }

    if let Some(partial) = tab_prefix(line) {
        let (completion, records) = terminal.complete(partial);
        renderer.render(&records);
        if let Completion::Replace(name) = completion {
            renderer.render(&[Record::info(name)]);
        }
        return;
    }

    let records = terminal.submit(line).await;
    renderer.render(&records);
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let options = match &cli.config {
        Some(path) => match TerminalOptions::from_path(path) {
            Ok(options) => options,
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        },
        None => TerminalOptions::default(),
    };

    let mut terminal = Terminal::new(options);
    let renderer = Renderer {
        json: cli.json,
        glitching: Arc::new(AtomicBool::new(false)),
    };

    if let Some(line) = cli.command {
        handle_line(&mut terminal, &renderer, &line).await;
        return;
    }

    let interactive = std::io::stdin().is_terminal() && !cli.json;
    renderer.render(&terminal.start());
    if interactive {
        renderer.render(&[Record::info("Type 'help' to see available commands")]);
        renderer.prompt(&terminal);
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(e) => {
                eprintln!("Error: cannot read input: {}", e);
                std::process::exit(1);
            }
        };

        if line.trim() == ":quit" {
            break;
        }
        handle_line(&mut terminal, &renderer, &line).await;
        if interactive {
            renderer.prompt(&terminal);
        }
    }
}
