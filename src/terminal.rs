//! Line-oriented front end for [`MarketForm`].
//!
//! Each command maps onto one form trigger. After every trigger the whole
//! output surface is printed, the way the form's text area would show it.

use std::io;
use std::str::FromStr;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, Lines};
use tracing::{debug, error, info};
use crate::presentation::{MarketForm, Prompter};

pub const HELP: &str = "\
Commands:
  add       add a product (prompts for name, category, price, quantity)
  products  view the product catalog
  order     place an order (prompts for username, product, quantity)
  orders    view all orders
  users     view the user directory
  help      show this message
  quit      exit
";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Add,
    Products,
    Order,
    Orders,
    Users,
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "add" => Ok(Command::Add),
            "products" => Ok(Command::Products),
            "order" => Ok(Command::Order),
            "orders" => Ok(Command::Orders),
            "users" => Ok(Command::Users),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            other => Err(format!("Unknown command: {}. Type 'help' for a list.", other)),
        }
    }
}

pub struct Terminal<R, W> {
    lines: Lines<R>,
    writer: W,
}

impl<R, W> Terminal<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            lines: reader.lines(),
            writer,
        }
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    /// Next input line; `None` on end of input or a read error.
    async fn read_line(&mut self) -> Option<String> {
        match self.lines.next_line().await {
            Ok(line) => line,
            Err(e) => {
                error!(error = %e, "Failed to read input");
                None
            }
        }
    }

    async fn write(&mut self, text: &str) -> io::Result<()> {
        self.writer.write_all(text.as_bytes()).await?;
        self.writer.flush().await
    }
}

impl<R, W> Prompter for Terminal<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    async fn prompt_text(&mut self, label: &str) -> Option<String> {
        if let Err(e) = self.write(&format!("{} ", label)).await {
            error!(error = %e, "Failed to write prompt");
            return None;
        }
        self.read_line().await
    }
}

/// Reads commands until `quit` or end of input.
pub async fn run_session<R, W>(form: &mut MarketForm, terminal: &mut Terminal<R, W>) -> io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    info!("Session started");
    terminal.write(HELP).await?;

    loop {
        terminal.write("> ").await?;
        let Some(line) = terminal.read_line().await else {
            break;
        };
        if line.trim().is_empty() {
            continue;
        }

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(message) => {
                terminal.write(&format!("{}\n", message)).await?;
                continue;
            }
        };
        debug!(?command, "Command received");

        // Failures are already on the output surface.
        match command {
            Command::Add => {
                let _ = form.add_product(terminal).await;
            }
            Command::Products => {
                let _ = form.view_products().await;
            }
            Command::Order => {
                if !place_order(form, terminal).await {
                    terminal.write("Order cancelled.\n").await?;
                    continue;
                }
            }
            Command::Orders => {
                let _ = form.view_orders().await;
            }
            Command::Users => {
                let _ = form.view_users().await;
            }
            Command::Help => {
                terminal.write(HELP).await?;
                continue;
            }
            Command::Quit => break,
        }

        terminal.write(&format!("\n{}\n", form.output().as_str())).await?;
    }

    info!("Session ended");
    Ok(())
}

/// Collects the order inputs and submits them. Returns `false` when a prompt
/// was dismissed before the order was sent.
async fn place_order<R, W>(form: &mut MarketForm, terminal: &mut Terminal<R, W>) -> bool
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let Some(username) = terminal.prompt_text("Username:").await else {
        return false;
    };
    let product_label = format!("Product [{}]:", numbered(form.product_choices()));
    let Some(selection) = terminal.prompt_text(&product_label).await else {
        return false;
    };
    let product_name = resolve_choice(form.product_choices(), &selection);
    let Some(quantity) = terminal.prompt_text("Quantity:").await else {
        return false;
    };

    let _ = form.place_order(username.trim(), &product_name, &quantity).await;
    true
}

fn numbered(choices: &[String]) -> String {
    choices
        .iter()
        .enumerate()
        .map(|(i, name)| format!("{}) {}", i + 1, name))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Maps a selection to a product name: a 1-based position in `choices`, or
/// otherwise the typed name itself.
fn resolve_choice(choices: &[String], selection: &str) -> String {
    let selection = selection.trim();
    selection
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|i| choices.get(i))
        .cloned()
        .unwrap_or_else(|| selection.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commands_parse_ignoring_case_and_padding() {
        assert_eq!(" ADD ".parse::<Command>(), Ok(Command::Add));
        assert_eq!("Orders".parse::<Command>(), Ok(Command::Orders));
        assert_eq!("exit".parse::<Command>(), Ok(Command::Quit));
        assert!("sell".parse::<Command>().is_err());
    }

    #[test]
    fn selection_accepts_position_or_name() {
        let choices = vec!["Wheat".to_string(), "Corn".to_string(), "Tomato".to_string()];
        assert_eq!(numbered(&choices), "1) Wheat, 2) Corn, 3) Tomato");
        assert_eq!(resolve_choice(&choices, "2"), "Corn");
        assert_eq!(resolve_choice(&choices, " tomato "), "tomato");
        assert_eq!(resolve_choice(&choices, "0"), "0");
        assert_eq!(resolve_choice(&choices, "4"), "4");
    }

    #[tokio::test]
    async fn prompt_writes_label_and_reads_line() {
        let mut terminal = Terminal::new("Rice\n".as_bytes(), Vec::new());
        assert_eq!(terminal.prompt_text("Enter Product Name:").await, Some("Rice".to_string()));
        assert_eq!(terminal.prompt_text("Enter Product Category:").await, None);
        assert_eq!(
            String::from_utf8(terminal.into_writer()).unwrap(),
            "Enter Product Name: Enter Product Category: "
        );
    }
}
