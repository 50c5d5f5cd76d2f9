//! Form command implementation
//!
//! Fits the estimator and runs the interactive form until the user quits.

use anyhow::Result;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle,
    },
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use tracing::info;

use house_price_estimator::{
    config::Config,
    estimator::{FittedEstimator, PriceModel, SAMPLE_ROWS},
    form::{ui::WINDOW_TITLE, FormApp},
};

/// Execute the form command
pub fn execute(cfg: &Config) -> Result<()> {
    let estimator = FittedEstimator::fit(&SAMPLE_ROWS)?;
    info!(rows = SAMPLE_ROWS.len(), "Estimator fitted");

    let app = FormApp::new(estimator, cfg.display.currency_symbol.clone());
    run_form(app)
}

/// Run the form in the alternate screen
fn run_form<M: PriceModel>(mut app: FormApp<M>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, SetTitle(WINDOW_TITLE))?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    terminal.clear()?;

    let result = event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    info!("Form closed");
    result
}

fn event_loop<M: PriceModel>(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut FormApp<M>,
) -> Result<()> {
    loop {
        terminal.draw(|f| app.render(f))?;

        // Blocks until the next key press or resize
        if let Event::Key(key) = event::read()? {
            if app.handle_key(key) {
                return Ok(());
            }
        }
    }
}
