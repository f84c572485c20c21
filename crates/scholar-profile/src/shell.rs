//! Interactive stdio shell.
//!
//! Line-oriented commands over stdin drive the view engine through its
//! action dispatch; an hourly timer forces a profile refresh. Input and the
//! timer are multiplexed on one `select!` loop, so all state mutation stays
//! within a single task.

use std::io::Write as _;
use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::time::MissedTickBehavior;

use crate::config::Config;
use crate::observe::EventSink;
use crate::profile::ProfileSnapshot;
use crate::provider::DataProvider;
use crate::render::{self, HIGHLIGHT_MARKERS, Highlighter, TermSurface};
use crate::view::{Action, PublicationView, SortOrder};

/// One parsed shell command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// A view-engine action (filter, sort, search, paging).
    View(Action),

    /// Re-render the current page.
    Show,

    /// Show the profile header (name, affiliation, stats, coauthors).
    Profile,

    /// Force a refresh now, regardless of TTL.
    Refresh,

    /// Print the command list.
    Help,

    /// Exit the shell.
    Quit,
}

/// Parse one input line into a command.
///
/// # Errors
///
/// Returns a user-facing message for unknown commands or bad arguments.
pub fn parse_command(line: &str) -> Result<Command, String> {
    let mut parts = line.split_whitespace();
    let Some(head) = parts.next() else {
        return Err("empty command, try 'help'".to_string());
    };
    let rest = parts.collect::<Vec<_>>().join(" ");

    match head.to_lowercase().as_str() {
        "filter" => rest
            .parse()
            .map(|filter| Command::View(Action::SetFilter(filter)))
            .map_err(|e| format!("{e}")),
        // Unrecognized sort labels fall back to newest, matching the engine
        "sort" => Ok(Command::View(Action::SetSort(SortOrder::parse(&rest)))),
        "search" => {
            if rest.is_empty() {
                Err("usage: search <text>".to_string())
            } else {
                Ok(Command::View(Action::SetSearch(rest)))
            }
        }
        "clear" => Ok(Command::View(Action::ClearSearch)),
        "page" => rest
            .parse()
            .map(|n| Command::View(Action::SetPage(n)))
            .map_err(|_| "usage: page <number>".to_string()),
        "next" => Ok(Command::View(Action::NextPage)),
        "prev" => Ok(Command::View(Action::PrevPage)),
        "show" => Ok(Command::Show),
        "profile" => Ok(Command::Profile),
        "refresh" => Ok(Command::Refresh),
        "help" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),
        other => Err(format!("unknown command: {other}, try 'help'")),
    }
}

const HELP: &str = "\
Commands:
  filter <all|conference|journal|preprint>
  sort <newest|oldest|citations-desc|citations-asc|title-asc|title-desc>
  search <text>     clear
  page <n>          next | prev
  show              profile
  refresh           quit";

/// Run the shell until EOF or `quit`.
///
/// # Errors
///
/// Returns error only on stdin I/O failure; fetch failures are swallowed
/// per the stay-stale policy.
pub async fn run(
    provider: Arc<DataProvider>,
    config: &Config,
    sink: Arc<dyn EventSink>,
) -> anyhow::Result<()> {
    let mut surface = TermSurface::new(std::io::stdout());
    let mut view = PublicationView::new();
    let mut highlighter = Highlighter::with_markers(
        &config.fallback.name,
        HIGHLIGHT_MARKERS.0,
        HIGHLIGHT_MARKERS.1,
    );
    let mut snapshot: Option<Arc<ProfileSnapshot>> = None;

    // First load: on failure the empty placeholder stays, the sink hears
    // about it, and the shell still comes up.
    match provider.fetch_profile().await {
        Ok(first) => {
            install(&first, &mut view, &mut highlighter);
            render::render_profile(&mut surface, &first, sink.as_ref());
            render::render_view(&mut surface, &view.derive(), &highlighter, sink.as_ref());
            snapshot = Some(first);
        }
        Err(error) => {
            sink.refresh_failed(provider.author_id(), &error);
            render::render_view(&mut surface, &view.derive(), &highlighter, sink.as_ref());
        }
    }

    let stdin = BufReader::new(tokio::io::stdin());
    let mut lines = stdin.lines();
    let mut ticker = tokio::time::interval(config.refresh_interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    ticker.tick().await; // the first tick fires immediately; skip it

    tracing::info!("Shell ready, waiting for commands");
    prompt();

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else {
                    tracing::info!("Stdin closed, shutting down");
                    break;
                };

                if line.trim().is_empty() {
                    prompt();
                    continue;
                }

                match parse_command(&line) {
                    Ok(Command::Quit) => break,
                    Ok(command) => {
                        handle(
                            command,
                            &provider,
                            &mut view,
                            &mut surface,
                            &mut highlighter,
                            &mut snapshot,
                            sink.as_ref(),
                        )
                        .await;
                    }
                    Err(message) => println!("{message}"),
                }
                prompt();
            }
            _ = ticker.tick() => {
                tracing::debug!("Periodic refresh fired");
                if let Some(fresh) = provider.refresh().await {
                    install(&fresh, &mut view, &mut highlighter);
                    render::render_profile(&mut surface, &fresh, sink.as_ref());
                    render::render_view(&mut surface, &view.derive(), &highlighter, sink.as_ref());
                    snapshot = Some(fresh);
                    prompt();
                }
            }
        }
    }

    Ok(())
}

async fn handle(
    command: Command,
    provider: &Arc<DataProvider>,
    view: &mut PublicationView,
    surface: &mut TermSurface<std::io::Stdout>,
    highlighter: &mut Highlighter,
    snapshot: &mut Option<Arc<ProfileSnapshot>>,
    sink: &dyn EventSink,
) {
    match command {
        Command::View(action) => {
            view.apply(action);
            render::render_view(surface, &view.derive(), highlighter, sink);
        }
        Command::Show => {
            render::render_view(surface, &view.derive(), highlighter, sink);
        }
        Command::Profile => match snapshot {
            Some(current) => {
                render::render_profile(surface, current, sink);
                if !current.interests.is_empty() {
                    println!("Interests: {}", current.interests.join(", "));
                }
            }
            None => println!("No profile loaded yet"),
        },
        Command::Refresh => {
            if let Some(fresh) = provider.refresh().await {
                install(&fresh, view, highlighter);
                render::render_profile(surface, &fresh, sink);
                render::render_view(surface, &view.derive(), highlighter, sink);
                *snapshot = Some(fresh);
            }
        }
        Command::Help => println!("{HELP}"),
        Command::Quit => unreachable!("handled by the caller"),
    }
}

/// Load a fresh snapshot into the view and rebuild the owner highlighter.
fn install(snapshot: &ProfileSnapshot, view: &mut PublicationView, highlighter: &mut Highlighter) {
    *highlighter =
        Highlighter::with_markers(&snapshot.name, HIGHLIGHT_MARKERS.0, HIGHLIGHT_MARKERS.1);
    view.load(snapshot.publications.iter().cloned());
}

fn prompt() {
    print!("> ");
    let _ = std::io::stdout().flush();
}
