//! Interactive builder shell.
//!
//! Reads one command per line and turns it into a [`UiEvent`]. Everything
//! printed comes from the render hooks, so the shell itself only parses.

use std::io::Write;
use std::time::Duration;

use brgrr_builder::display::toppings_text;
use brgrr_builder::{
    AppError, BuilderConfig, BuilderSession, Catalog, Clock, KeyValueStorage, LocalSession,
    RenderHooks, UiEvent,
};
use brgrr_core::{BaseId, CheckoutStage, ToppingId};
use thiserror::Error;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tracing::{info, instrument};

use super::render::TerminalRenderer;

const HELP: &str = "\
Commands:
  base <id>            choose a bun
  topping <id>         add or remove a topping
  fav save [name]      save the current burger
  fav apply <n>        load favorite number n
  fav list             show saved favorites
  checkout             review the order
  confirm | cancel     place the order or keep editing
  login <name>         order under a name
  logout               order as Guest and clear history
  show                 print the current burger and history
  menu                 list buns and toppings
  help                 this text
  quit                 leave";

/// A parsed shell line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Event(UiEvent),
    ListFavorites,
    Show,
    Menu,
    Help,
    Quit,
}

/// Errors parsing a shell line.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("unknown command '{0}', type 'help' for the list")]
    Unknown(String),

    #[error("'{0}' needs {1}")]
    MissingArgument(&'static str, &'static str),

    #[error("'{0}' is not a favorite number")]
    InvalidNumber(String),
}

/// Parse one line. Blank lines yield `None`.
///
/// # Errors
///
/// Returns `ParseError` for unknown commands or missing arguments.
pub fn parse_command(line: &str) -> Result<Option<ShellCommand>, ParseError> {
    let line = line.trim();
    let (word, rest) = line
        .split_once(char::is_whitespace)
        .map_or((line, ""), |(w, r)| (w, r.trim()));

    let command = match word.to_ascii_lowercase().as_str() {
        "" => return Ok(None),
        "base" | "bun" => ShellCommand::Event(UiEvent::SelectBase(BaseId::new(required(
            "base", rest, "a bun id",
        )?))),
        "topping" | "t" => ShellCommand::Event(UiEvent::ToggleTopping(ToppingId::new(
            required("topping", rest, "a topping id")?,
        ))),
        "fav" | "favorite" => parse_favorite(rest)?,
        "checkout" => ShellCommand::Event(UiEvent::OpenCheckout),
        "confirm" => ShellCommand::Event(UiEvent::ConfirmCheckout),
        "cancel" => ShellCommand::Event(UiEvent::CancelCheckout),
        "login" => ShellCommand::Event(UiEvent::Login(rest.to_string())),
        "logout" => ShellCommand::Event(UiEvent::Logout),
        "show" => ShellCommand::Show,
        "menu" => ShellCommand::Menu,
        "help" | "?" => ShellCommand::Help,
        "quit" | "exit" => ShellCommand::Quit,
        other => return Err(ParseError::Unknown(other.to_string())),
    };
    Ok(Some(command))
}

fn parse_favorite(rest: &str) -> Result<ShellCommand, ParseError> {
    let (action, arg) = rest
        .split_once(char::is_whitespace)
        .map_or((rest, ""), |(a, r)| (a, r.trim()));

    match action {
        "" | "list" => Ok(ShellCommand::ListFavorites),
        "save" => Ok(ShellCommand::Event(UiEvent::SaveFavorite {
            name: (!arg.is_empty()).then(|| arg.to_string()),
        })),
        "apply" => {
            let raw = required("fav apply", arg, "a favorite number")?;
            match raw.parse::<usize>() {
                Ok(n) if n > 0 => Ok(ShellCommand::Event(UiEvent::ApplyFavorite(n - 1))),
                _ => Err(ParseError::InvalidNumber(raw.to_string())),
            }
        }
        other => Err(ParseError::Unknown(format!("fav {other}"))),
    }
}

fn required<'a>(
    command: &'static str,
    arg: &'a str,
    what: &'static str,
) -> Result<&'a str, ParseError> {
    if arg.is_empty() {
        Err(ParseError::MissingArgument(command, what))
    } else {
        Ok(arg)
    }
}

/// Run the shell on stdin with favorites stored under the configured directory.
///
/// # Errors
///
/// Returns an error if stdin or `out` fails.
pub async fn run(
    config: &BuilderConfig,
    catalog: Catalog,
    out: impl Write,
) -> brgrr_builder::Result<()> {
    info!(data_dir = %config.data_dir.display(), "Starting builder shell");
    let mut session = LocalSession::open(catalog.clone(), config.data_dir.clone());
    let mut renderer = TerminalRenderer::new(out, catalog);
    let stdin = BufReader::new(tokio::io::stdin());

    run_session(&mut session, stdin, &mut renderer, config.confirm_delay).await?;
    renderer.finish()?;
    Ok(())
}

/// Drive `session` from `input` until end of input or `quit`.
///
/// After a confirmed order the shell waits `confirm_delay` before returning
/// to editing.
///
/// # Errors
///
/// Returns an error if reading `input` fails. Refused actions are shown to
/// the user and do not end the loop.
#[instrument(skip_all)]
pub async fn run_session<L, S, C, R, W>(
    session: &mut BuilderSession<L, S, C>,
    input: R,
    renderer: &mut TerminalRenderer<W>,
    confirm_delay: Duration,
) -> brgrr_builder::Result<()>
where
    L: KeyValueStorage,
    S: KeyValueStorage,
    C: Clock,
    R: AsyncBufRead + Unpin,
    W: Write,
{
    session.render_initial(renderer);
    renderer.line(format_args!("Type 'help' for commands."));

    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await? {
        let command = match parse_command(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                renderer.line(format_args!("! {e}"));
                continue;
            }
        };

        match command {
            ShellCommand::Event(event) => {
                let confirming = event == UiEvent::ConfirmCheckout;
                if let Err(e) = session.dispatch(event, renderer) {
                    let e = AppError::from(e);
                    if e.is_user_error() {
                        tracing::debug!(error = %e, "Action refused");
                    } else {
                        tracing::error!(error = %e, "Action failed");
                    }
                    continue;
                }
                if confirming && session.stage() == CheckoutStage::Confirmed {
                    tokio::time::sleep(confirm_delay).await;
                    session.dispatch(UiEvent::Acknowledge, renderer)?;
                }
            }
            ShellCommand::ListFavorites => {
                let favorites = session.favorites();
                renderer.favorites_changed(&favorites);
            }
            ShellCommand::Show => {
                let breakdown = session.breakdown();
                let configuration = session.configuration().clone();
                let catalog = session.catalog();
                let base = configuration
                    .base()
                    .map_or("none", |id| catalog.base_label(id))
                    .to_string();
                let toppings =
                    toppings_text(catalog, &catalog.ordered_toppings(configuration.toppings()));
                renderer.line(format_args!("Bun: {base}"));
                renderer.line(format_args!("Toppings: {toppings}"));
                renderer.price_updated(&breakdown, &configuration);
                let history = session.history();
                renderer.history_changed(&history);
            }
            ShellCommand::Menu => {
                let mut text = Vec::new();
                super::menu::print(session.catalog(), &mut text)?;
                renderer.line(format_args!("{}", String::from_utf8_lossy(&text).trim_end()));
            }
            ShellCommand::Help => renderer.line(format_args!("{HELP}")),
            ShellCommand::Quit => break,
        }
    }

    info!("Shell closed");
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use brgrr_builder::{EphemeralSession, FixedClock, PersistenceStore};

    use super::*;

    fn event(line: &str) -> UiEvent {
        match parse_command(line).unwrap() {
            Some(ShellCommand::Event(event)) => event,
            other => panic!("expected an event, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_events() {
        assert_eq!(
            event("base classic"),
            UiEvent::SelectBase(BaseId::new("classic"))
        );
        assert_eq!(
            event("  t   jalapeno "),
            UiEvent::ToggleTopping(ToppingId::new("jalapeno"))
        );
        assert_eq!(event("fav apply 2"), UiEvent::ApplyFavorite(1));
        assert_eq!(event("fav save"), UiEvent::SaveFavorite { name: None });
        assert_eq!(
            event("fav save Friday night"),
            UiEvent::SaveFavorite {
                name: Some("Friday night".to_string())
            }
        );
        assert_eq!(event("login  Ada "), UiEvent::Login("Ada".to_string()));
        assert_eq!(event("CHECKOUT"), UiEvent::OpenCheckout);
    }

    #[test]
    fn test_parse_non_events() {
        assert_eq!(parse_command("   ").unwrap(), None);
        assert_eq!(parse_command("quit").unwrap(), Some(ShellCommand::Quit));
        assert_eq!(
            parse_command("fav").unwrap(),
            Some(ShellCommand::ListFavorites)
        );
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            parse_command("base"),
            Err(ParseError::MissingArgument("base", "a bun id"))
        );
        assert_eq!(
            parse_command("fav apply 0"),
            Err(ParseError::InvalidNumber("0".to_string()))
        );
        assert_eq!(
            parse_command("fav apply two"),
            Err(ParseError::InvalidNumber("two".to_string()))
        );
        assert_eq!(
            parse_command("order"),
            Err(ParseError::Unknown("order".to_string()))
        );
    }

    async fn run_script(script: &str) -> (String, EphemeralSession<FixedClock>) {
        let mut session = BuilderSession::with_clock(
            Catalog::standard(),
            PersistenceStore::in_memory(),
            FixedClock(1_700_000_000_000),
        );
        let mut renderer = TerminalRenderer::new(Vec::new(), Catalog::standard());
        run_session(
            &mut session,
            script.as_bytes(),
            &mut renderer,
            Duration::ZERO,
        )
        .await
        .unwrap();
        let out = String::from_utf8(renderer.finish().unwrap()).unwrap();
        (out, session)
    }

    #[tokio::test]
    async fn test_order_through_shell() {
        let (out, mut session) = run_script(
            "login ada\nbase classic\ntopping cheese\ntopping bacon\ncheckout\nconfirm\n",
        )
        .await;

        assert!(out.contains("Logged in as ada"));
        assert!(out.contains("  Total:    ₹84"));
        assert!(out.contains("Order placed for ada: Classic with Cheese, Bacon, total ₹84"));
        assert!(out.ends_with("Back to your burger.\n"));

        assert_eq!(session.stage(), CheckoutStage::Editing);
        assert_eq!(session.history().len(), 1);
    }

    #[tokio::test]
    async fn test_refusals_are_printed() {
        let (out, session) = run_script("checkout\nfav save\nwhat\nquit\nbase sesame\n").await;

        assert!(out.contains("! Please choose a bun to continue."));
        assert!(out.contains("! Please choose a bun before saving a favorite."));
        assert!(out.contains("! unknown command 'what'"));
        // Nothing after quit runs.
        assert!(session.configuration().base().is_none());
    }

    #[tokio::test]
    async fn test_off_menu_items_are_refused() {
        let (out, mut session) = run_script(
            "base brioche\ntopping cheese\ntopping pineapple\ncheckout\nconfirm\n",
        )
        .await;

        assert!(out.contains("! We don't have a 'brioche' bun."));
        assert!(out.contains("! We don't have 'pineapple' as a topping."));
        assert!(out.contains("! Please choose a bun to continue."));
        assert!(!out.contains("Order placed"));
        assert!(session.configuration().base().is_none());
        assert!(session.history().is_empty());
    }

    #[tokio::test]
    async fn test_initial_render() {
        let (out, _) = run_script("").await;
        assert!(out.starts_with("Ordering as Guest\n"));
        assert!(out.ends_with("Type 'help' for commands.\n"));
    }
}
