//! Menu dispatch: one selection, one command, one [`Outcome`].

use std::fmt;
use tokio::io::{AsyncBufRead, AsyncWrite};
use tracing::{debug, info, instrument};
use crate::console::Console;
use crate::domain::{NewProduct, Product, ProductUpdate};
use crate::error::SessionError;
use crate::fields::{parse_identifier, parse_text, Field};
use crate::repository::ProductRepository;

/// The four menu commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Add,
    View,
    Update,
    Delete,
}

impl Command {
    /// Maps a menu selection ("1".."4") to its command.
    pub fn from_selection(selection: &str) -> Option<Self> {
        match selection.trim() {
            "1" => Some(Command::Add),
            "2" => Some(Command::View),
            "3" => Some(Command::Update),
            "4" => Some(Command::Delete),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouterState {
    Idle,
    Adding,
    Viewing,
    Updating,
    Deleting,
    Done,
}

impl From<Command> for RouterState {
    fn from(command: Command) -> Self {
        match command {
            Command::Add => RouterState::Adding,
            Command::View => RouterState::Viewing,
            Command::Update => RouterState::Updating,
            Command::Delete => RouterState::Deleting,
        }
    }
}

/// Result of a command that ran to completion. Not-found is one of them.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Added,
    Found(Product),
    Updated,
    Deleted,
    NotFound,
    InvalidChoice,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Added => write!(f, "Product added successfully."),
            Outcome::Found(product) => write!(
                f,
                "Id: {}\nProduct: {}\nPrice: {}",
                product.id, product.name, product.price
            ),
            Outcome::Updated => write!(f, "Product card updated successfully."),
            Outcome::Deleted => write!(f, "Product deleted successfully."),
            Outcome::NotFound => write!(f, "No such product!"),
            Outcome::InvalidChoice => {
                write!(f, "Invalid choice. Please select an action from 1 to 4.")
            }
        }
    }
}

/// Routes a single menu selection to its handler.
///
/// Starts `Idle`, moves to the selected command's state, and ends `Done`
/// whatever the handler returned. A `Done` router accepts nothing more.
pub struct CommandRouter<'a> {
    state: RouterState,
    repository: &'a dyn ProductRepository,
}

impl<'a> CommandRouter<'a> {
    pub fn new(repository: &'a dyn ProductRepository) -> Self {
        Self {
            state: RouterState::Idle,
            repository,
        }
    }

    #[cfg(test)]
    pub fn state(&self) -> RouterState {
        self.state
    }

    #[instrument(skip(self, console))]
    pub async fn dispatch<R, W>(
        &mut self,
        selection: &str,
        console: &mut Console<R, W>,
    ) -> Result<Outcome, SessionError>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        if self.state != RouterState::Idle {
            return Err(SessionError::CommandAlreadyRun);
        }

        let Some(command) = Command::from_selection(selection) else {
            info!("Invalid menu selection");
            self.state = RouterState::Done;
            return Ok(Outcome::InvalidChoice);
        };

        self.state = command.into();
        debug!(state = ?self.state, "Command selected");

        let result = match command {
            Command::Add => add_product(console, self.repository).await,
            Command::View => view_product(console, self.repository).await,
            Command::Update => update_product(console, self.repository).await,
            Command::Delete => delete_product(console, self.repository).await,
        };

        self.state = RouterState::Done;
        result
    }
}

// =============================================================================
// HANDLERS
// =============================================================================

#[instrument(skip_all)]
pub async fn add_product<R, W>(
    console: &mut Console<R, W>,
    repository: &dyn ProductRepository,
) -> Result<Outcome, SessionError>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let name = console.prompt("Enter the product name: ").await?;
    let name = parse_text(Field::Name, &name)?;
    let quantity = console.prompt("Enter the stock quantity: ").await?;
    let quantity = parse_text(Field::Quantity, &quantity)?;
    let price = console.prompt("Enter the price per unit: ").await?;
    let price = parse_text(Field::Price, &price)?;

    repository.insert(NewProduct { name, quantity, price }).await?;
    info!("Product added");
    Ok(Outcome::Added)
}

#[instrument(skip_all)]
pub async fn view_product<R, W>(
    console: &mut Console<R, W>,
    repository: &dyn ProductRepository,
) -> Result<Outcome, SessionError>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let id = parse_identifier(&console.prompt("Enter id: ").await?)?;

    match repository.find_by_id(id).await? {
        Some(product) => Ok(Outcome::Found(product)),
        None => {
            debug!(id, "Product not found");
            Ok(Outcome::NotFound)
        }
    }
}

#[instrument(skip_all)]
pub async fn update_product<R, W>(
    console: &mut Console<R, W>,
    repository: &dyn ProductRepository,
) -> Result<Outcome, SessionError>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let id = console.prompt("Enter the ID of the product to change: ").await?;
    let id = parse_identifier(&id)?;
    let name = console.prompt("Enter the new product name: ").await?;
    let name = parse_text(Field::Name, &name)?;
    let price = console.prompt("Enter the new price per unit: ").await?;
    let price = parse_text(Field::Price, &price)?;
    let quantity = console.prompt("Enter the new stock quantity: ").await?;
    let quantity = parse_text(Field::Quantity, &quantity)?;

    let rows = repository.update(id, ProductUpdate { name, price, quantity }).await?;
    if rows > 0 {
        info!(id, "Product updated");
        Ok(Outcome::Updated)
    } else {
        Ok(Outcome::NotFound)
    }
}

#[instrument(skip_all)]
pub async fn delete_product<R, W>(
    console: &mut Console<R, W>,
    repository: &dyn ProductRepository,
) -> Result<Outcome, SessionError>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let id = console.prompt("Enter the ID of the product to delete: ").await?;
    let id = parse_identifier(&id)?;

    let rows = repository.delete(id).await?;
    if rows > 0 {
        info!(id, "Product deleted");
        Ok(Outcome::Deleted)
    } else {
        Ok(Outcome::NotFound)
    }
}
