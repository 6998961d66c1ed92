//! CLI module for the cogs application
//!
//! This module handles the command-line interface, dispatching commands to
//! the catalog and the credential service and rendering their output.
use console::style;
use log::{info, warn};

use crate::{
    AuthFlow, Catalog, CogsError, Commands, Config, LoginFields, RegisterFields, RecordStore,
    Result, Tag, UserService,
};

/// CLI application handler - processes commands and interfaces with the
/// catalog and the credential service
pub struct App<S: RecordStore> {
    /// The in-memory post-it board
    catalog: Catalog,

    /// The credential service backed by the record store
    user_service: UserService<S>,

    /// Application configuration
    config: Config,

    /// Whether to display verbose output
    verbose: bool,
}

impl<S: RecordStore> App<S> {
    /// Create a new CLI application with the given service and config
    pub fn new(user_service: UserService<S>, config: Config, verbose: bool) -> Self {
        Self {
            catalog: Catalog::with_demo_content(),
            user_service,
            config,
            verbose,
        }
    }

    /// Run the CLI application with the given command
    pub fn run(&mut self, command: Commands) -> Result<()> {
        match command {
            Commands::Register {
                name,
                email,
                password,
                confirm,
            } => self.handle_register(name, email, password, confirm)?,

            Commands::Login { email, password } => self.handle_login(email, password)?,

            Commands::Logout => self.handle_logout()?,

            Commands::Whoami { json } => self.handle_whoami(json)?,

            Commands::Board { tag, columns, json } => self.handle_board(tag, columns, json)?,

            Commands::Add { text, tag, color } => self.handle_add(text, tag, color)?,

            Commands::Tags => self.handle_tags(),

            Commands::Note { text } => self.handle_note(text),

            Commands::Notes { json } => self.handle_notes(json)?,

            Commands::Config { reset, .. } => self.handle_config(reset)?,
        }

        Ok(())
    }

    fn handle_register(
        &mut self,
        name: String,
        email: String,
        password: String,
        confirm: String,
    ) -> Result<()> {
        let mut flow = AuthFlow::new();
        flow.register = RegisterFields {
            name,
            email,
            password,
            confirm_password: confirm,
        };

        let user = flow.submit_register(&self.user_service)?;
        println!(
            "{} account created for {} <{}>",
            style("ok:").green().bold(),
            user.name,
            user.email
        );
        Ok(())
    }

    fn handle_login(&mut self, email: String, password: String) -> Result<()> {
        let mut flow = AuthFlow::new();
        flow.login = LoginFields { email, password };

        let user = flow.submit_login(&self.user_service)?;
        println!("{} welcome back, {}!", style("ok:").green().bold(), user.name);
        Ok(())
    }

    fn handle_logout(&mut self) -> Result<()> {
        self.user_service.clear_user()?;
        println!("{} logged out", style("ok:").green().bold());
        Ok(())
    }

    fn handle_whoami(&self, json: bool) -> Result<()> {
        match self.user_service.get_user() {
            Some(user) => {
                if json {
                    println!("{}", serde_json::to_string_pretty(&user)?);
                } else {
                    println!("{} <{}>", user.name, user.email);
                }
            }
            None => println!("no account stored"),
        }
        Ok(())
    }

    fn handle_board(
        &mut self,
        tag: Option<Tag>,
        columns: Option<usize>,
        json: bool,
    ) -> Result<()> {
        if let Some(tag) = tag {
            self.catalog.select_tag(tag);
        }
        let columns = columns.unwrap_or(self.config.columns);

        if json {
            println!("{}", serde_json::to_string_pretty(&self.catalog.filtered())?);
            return Ok(());
        }

        let rows = self.catalog.chunked(columns);
        if rows.is_empty() {
            println!("no post-its for tag {}", self.catalog.selected_tag());
            return Ok(());
        }

        for row in rows {
            let cells: Vec<String> = row
                .iter()
                .map(|p| {
                    format!(
                        "[{}] {} {}",
                        p.id,
                        style(format!("({})", p.tag)).cyan(),
                        p.text
                    )
                })
                .collect();
            println!("{}", cells.join("  |  "));
        }

        if self.verbose {
            println!(
                "{} of {} post-its shown",
                self.catalog.filtered().len(),
                self.catalog.post_its().len()
            );
        }
        Ok(())
    }

    fn handle_add(&mut self, text: String, tag: Tag, color: String) -> Result<()> {
        if tag == Tag::All {
            warn!("Rejecting post-it tagged with the wildcard");
            return Err(CogsError::InvalidPostIt {
                message: "'all' is a filter, not a tag; pick a concrete tag".to_string(),
            });
        }

        let id = self.catalog.add_post_it(text, tag, color)?;
        info!("Post-it {} added via CLI", id);
        println!("{} post-it {} added", style("ok:").green().bold(), id);
        println!("note: the board is in-memory; additions last for this run only");
        Ok(())
    }

    fn handle_tags(&self) {
        for tag in Tag::all() {
            if *tag == Tag::All {
                println!("{} (wildcard)", tag);
            } else {
                println!("{}", tag);
            }
        }
    }

    fn handle_note(&mut self, text: String) {
        self.catalog.add_annotation(text);
        println!(
            "{} annotation added ({} total)",
            style("ok:").green().bold(),
            self.catalog.annotations().len()
        );
    }

    fn handle_notes(&self, json: bool) -> Result<()> {
        if json {
            println!("{}", serde_json::to_string_pretty(self.catalog.annotations())?);
        } else {
            for note in self.catalog.annotations() {
                println!("- {}", note);
            }
        }
        Ok(())
    }

    fn handle_config(&self, reset: bool) -> Result<()> {
        if reset {
            let defaults = Config::default();
            defaults.save()?;
            println!("{} configuration reset to defaults", style("ok:").green().bold());
            return Ok(());
        }
        // Showing the configuration is the default action
        println!("{}", serde_json::to_string_pretty(&self.config)?);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStore;

    fn app() -> App<MemoryStore> {
        App::new(
            UserService::new(MemoryStore::new()),
            Config::default(),
            false,
        )
    }

    #[test]
    fn add_command_rejects_the_wildcard_tag() {
        let mut app = app();
        let result = app.run(Commands::Add {
            text: "idea".to_string(),
            tag: Tag::All,
            color: "yellow".to_string(),
        });
        assert!(matches!(result, Err(CogsError::InvalidPostIt { .. })));
    }

    #[test]
    fn register_then_login_through_the_cli() {
        let mut app = app();
        app.run(Commands::Register {
            name: "Ana".to_string(),
            email: "ana@example.com".to_string(),
            password: "secret123".to_string(),
            confirm: "secret123".to_string(),
        })
        .unwrap();

        app.run(Commands::Login {
            email: "ana@example.com".to_string(),
            password: "secret123".to_string(),
        })
        .unwrap();
    }

    #[test]
    fn login_without_an_account_fails_with_a_message() {
        let mut app = app();
        let err = app
            .run(Commands::Login {
                email: "ana@example.com".to_string(),
                password: "secret123".to_string(),
            })
            .unwrap_err();
        assert_eq!(err.to_string(), "Incorrect email or password.");
    }
}
