use colored::Colorize;
use tokio::io::{AsyncBufRead, AsyncWrite};
use tracing::{debug, instrument};
use crate::console::Console;
use crate::error::SessionError;
use crate::repository::ProductRepository;
use crate::router::{CommandRouter, Outcome};

pub const MENU: &str = "Menu:\n\
1. Add product\n\
2. View product\n\
3. Update product\n\
4. Delete product\n";

pub const SELECTION_PROMPT: &str = "Select an action: ";

/// One interactive run: menu, one selection, one command.
pub struct ConsoleSession<R, W> {
    console: Console<R, W>,
}

impl<R, W> ConsoleSession<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(console: Console<R, W>) -> Self {
        Self { console }
    }

    /// Shows the menu once, reads a single selection and runs it.
    ///
    /// Handler errors come back unchanged; a not-found record is an `Ok`.
    #[instrument(name = "console_session", skip_all)]
    pub async fn run(
        &mut self,
        repository: &dyn ProductRepository,
    ) -> Result<Outcome, SessionError> {
        self.console.println(MENU).await?;
        let selection = self.console.prompt(SELECTION_PROMPT).await?;
        debug!(selection = %selection, "Selection read");

        CommandRouter::new(repository)
            .dispatch(&selection, &mut self.console)
            .await
    }

    pub async fn report_outcome(&mut self, outcome: &Outcome) -> Result<(), SessionError> {
        self.console.println(&outcome.to_string()).await
    }

    /// Prints a marked error line carrying only the error's message.
    pub async fn report_error(&mut self, error: &SessionError) -> Result<(), SessionError> {
        let line = format!("{}{}", "ERROR: ".red(), error);
        self.console.println(&line).await
    }

    #[cfg(test)]
    pub fn into_console(self) -> Console<R, W> {
        self.console
    }
}
