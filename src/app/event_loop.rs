use std::io::stdout;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use ratatui::DefaultTerminal;

use crate::app::{App, Message, Model, update};
use crate::app::update::fragment_or_default;
use crate::portfolio::Portfolio;

impl App {
    /// Run the main event loop.
    ///
    /// Startup order matches the page-ready sequence: apply the theme,
    /// route the initial fragment, then listen for events.
    ///
    /// # Errors
    ///
    /// Returns an error if the portfolio cannot be loaded, terminal
    /// initialization fails, or the event loop hits an I/O failure.
    pub fn run(&mut self) -> Result<()> {
        let portfolio = Portfolio::load(&self.file_path)?;

        let mut terminal = ratatui::try_init()
            .context("Failed to initialize terminal — folio requires an interactive terminal")?;
        execute!(stdout(), EnableMouseCapture)?;
        let size = terminal.size()?;

        let initial_fragment = self.initial_section.clone().unwrap_or_default();
        let mut model = Model::new(
            self.file_path.clone(),
            portfolio,
            (size.width, size.height),
            &initial_fragment,
        );
        model.nav_visible = self.nav_visible;
        model
            .config_global_path
            .clone_from(&self.config_global_path);
        model.config_local_path.clone_from(&self.config_local_path);

        // Theme first so the first frame paints with the right palette.
        // The resolved choice is persisted like any other theme change.
        let theme_msg = Message::SetTheme(self.initial_theme);
        model = update(model, theme_msg.clone());
        self.handle_message_side_effects(&mut model, &theme_msg);

        // Initial activation goes through the router like every later one.
        let initial_id = fragment_or_default(model.history.current()).to_string();
        model = update(model, Message::ShowSection(initial_id));

        let result = self.event_loop(&mut terminal, &mut model);

        let _ = execute!(stdout(), DisableMouseCapture);
        ratatui::restore();

        result
    }

    fn event_loop(&self, terminal: &mut DefaultTerminal, model: &mut Model) -> Result<()> {
        let mut needs_render = true;

        loop {
            if needs_render {
                terminal.draw(|frame| crate::ui::render(model, frame))?;
                needs_render = false;
            }
            if model.should_quit {
                break;
            }

            if event::poll(Duration::from_millis(250))? {
                if let Some(msg) = Self::handle_event(&event::read()?, model) {
                    tracing::debug!(?msg, "event");
                    let side_msg = msg.clone();
                    *model = update(std::mem::take(model), msg);
                    self.handle_message_side_effects(model, &side_msg);
                    needs_render = true;
                }

                // Coalesce key repeat bursts into a single render.
                while event::poll(Duration::from_millis(0))? {
                    if let Some(msg) = Self::handle_event(&event::read()?, model) {
                        let side_msg = msg.clone();
                        *model = update(std::mem::take(model), msg);
                        self.handle_message_side_effects(model, &side_msg);
                        needs_render = true;
                    }
                }
            }
        }
        Ok(())
    }
}
