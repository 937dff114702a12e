//! Main application state and UI loop
//!
//! Contains the App struct, the render loop and keyboard handling. Input
//! edits dashboard state locally; anything that talks to the API goes out as
//! a [`Command`] and comes back as worker events.

use crate::consts::cli_consts;
use crate::environment::Environment;
use crate::events::Event as WorkerEvent;
use crate::ui::dashboard::{DashboardState, Focus, FormField, render_dashboard};
use crate::ui::splash::render_splash;
use crate::workers::Command;
use crossterm::event::{self, Event, KeyCode};
use ratatui::{Frame, Terminal, backend::Backend};
use std::time::Instant;
use tokio::sync::{broadcast, mpsc};

/// The different screens in the application.
#[derive(Debug)]
pub enum Screen {
    /// Splash screen shown at the start of the application.
    Splash,
    /// Dashboard screen displaying the inventory.
    Dashboard(Box<DashboardState>),
}

/// Application state
#[derive(Debug)]
pub struct App {
    /// The start time of the application, used for computing uptime.
    start_time: Instant,

    /// Display name of the signed-in user, if known.
    username: Option<String>,

    /// The environment in which the application is running.
    environment: Environment,

    /// The current screen being displayed in the application.
    current_screen: Screen,

    /// Receives events from worker tasks.
    event_receiver: mpsc::Receiver<WorkerEvent>,

    /// Sends user actions to the worker side.
    command_sender: mpsc::Sender<Command>,

    /// Broadcasts shutdown signal to worker tasks.
    shutdown_sender: broadcast::Sender<()>,
}

impl App {
    /// Creates a new instance of the application.
    pub fn new(
        username: Option<String>,
        environment: Environment,
        event_receiver: mpsc::Receiver<WorkerEvent>,
        command_sender: mpsc::Sender<Command>,
        shutdown_sender: broadcast::Sender<()>,
    ) -> Self {
        Self {
            start_time: Instant::now(),
            username,
            environment,
            current_screen: Screen::Splash,
            event_receiver,
            command_sender,
            shutdown_sender,
        }
    }

    /// Transition to the dashboard and kick off the initial refresh.
    fn enter_dashboard(&mut self) {
        let state = DashboardState::new(self.username.clone(), self.environment, self.start_time);
        self.current_screen = Screen::Dashboard(Box::new(state));
        let _ = self.command_sender.try_send(Command::Refresh);
    }
}

/// Runs the application UI in a loop, handling events and rendering the appropriate screen.
pub async fn run<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> std::io::Result<()> {
    let splash_start = Instant::now();

    // UI event loop
    loop {
        // Queue all incoming worker events for processing
        while let Ok(event) = app.event_receiver.try_recv() {
            if let Screen::Dashboard(state) = &mut app.current_screen {
                state.add_event(event);
            }
        }

        // Apply queued events before drawing
        if let Screen::Dashboard(state) = &mut app.current_screen {
            state.update();
        }

        terminal.draw(|f| render(f, &app.current_screen))?;

        // Handle splash-to-dashboard transition
        if let Screen::Splash = app.current_screen {
            if splash_start.elapsed() >= cli_consts::splash_duration() {
                app.enter_dashboard();
                continue;
            }
        }

        // Poll for key events
        if event::poll(cli_consts::input_poll_interval())? {
            if let Event::Key(key) = event::read()? {
                // Skip events that are not KeyEventKind::Press
                if key.kind == event::KeyEventKind::Release {
                    continue;
                }

                if key.code == KeyCode::Esc {
                    let _ = app.shutdown_sender.send(());
                    return Ok(());
                }

                match &mut app.current_screen {
                    Screen::Splash => {
                        // Any key press will skip the splash screen
                        app.enter_dashboard();
                    }
                    Screen::Dashboard(state) => {
                        let quit = handle_dashboard_key(state, key.code, &app.command_sender);
                        if quit {
                            let _ = app.shutdown_sender.send(());
                            return Ok(());
                        }
                    }
                }
            }
        }
    }
}

/// Renders the current screen based on the application state.
fn render(f: &mut Frame, screen: &Screen) {
    match screen {
        Screen::Splash => render_splash(f),
        Screen::Dashboard(state) => render_dashboard(f, state),
    }
}

/// Handles a key press on the dashboard. Returns true when the app should quit.
fn handle_dashboard_key(
    state: &mut DashboardState,
    code: KeyCode,
    commands: &mpsc::Sender<Command>,
) -> bool {
    match code {
        KeyCode::Tab => {
            state.focus = state.focus.next();
            return false;
        }
        KeyCode::BackTab => {
            state.focus = state.focus.prev();
            return false;
        }
        _ => {}
    }

    match state.focus {
        Focus::Search => match code {
            KeyCode::Char(c) => {
                state.filters.search_term.push(c);
                state.clamp_selection();
            }
            KeyCode::Backspace => {
                state.filters.search_term.pop();
                state.clamp_selection();
            }
            _ => {}
        },
        Focus::CategoryFilter => match code {
            KeyCode::Left => {
                state.filters.cycle_category(false);
                state.clamp_selection();
            }
            KeyCode::Right | KeyCode::Char(' ') => {
                state.filters.cycle_category(true);
                state.clamp_selection();
            }
            _ => {}
        },
        Focus::LowStockToggle => {
            if matches!(code, KeyCode::Char(' ') | KeyCode::Enter) {
                state.filters.low_stock_only = !state.filters.low_stock_only;
                state.clamp_selection();
            }
        }
        Focus::Form(field) => handle_form_key(state, field, code, commands),
        Focus::Products => match code {
            KeyCode::Char('q') => return true,
            KeyCode::Up => state.select_prev(),
            KeyCode::Down => state.select_next(),
            KeyCode::Char('+') | KeyCode::Char('=') => state.adjust_selected_add_amount(1),
            KeyCode::Char('-') => state.adjust_selected_add_amount(-1),
            KeyCode::Char('r') => {
                let _ = commands.try_send(Command::Refresh);
            }
            KeyCode::Enter => submit_add_stock(state, commands),
            _ => {}
        },
    }
    false
}

fn handle_form_key(
    state: &mut DashboardState,
    field: FormField,
    code: KeyCode,
    commands: &mpsc::Sender<Command>,
) {
    if code == KeyCode::Enter {
        submit_form(state, commands);
        return;
    }

    match field {
        FormField::Category => match code {
            KeyCode::Left => state.form.cycle_category(false),
            KeyCode::Right | KeyCode::Char(' ') => state.form.cycle_category(true),
            _ => {}
        },
        FormField::Name => edit_text(&mut state.form.product_name, code),
        FormField::Price => edit_text(&mut state.form.price, code),
        FormField::Threshold => edit_text(&mut state.form.threshold, code),
        FormField::Quantity => edit_text(&mut state.form.quantity, code),
    }
}

fn edit_text(buffer: &mut String, code: KeyCode) {
    match code {
        KeyCode::Char(c) => buffer.push(c),
        KeyCode::Backspace => {
            buffer.pop();
        }
        _ => {}
    }
}

/// Validates the form and dispatches the create. Invalid input surfaces as a
/// local error; no request is sent. The busy flag blocks double submission.
fn submit_form(state: &mut DashboardState, commands: &mpsc::Sender<Command>) {
    if state.adding_product {
        return;
    }
    match state.form.parse() {
        Ok(input) => {
            let _ = commands.try_send(Command::AddProduct(input));
        }
        Err(message) => state.error = Some(message),
    }
}

/// Dispatches a stock top-up for the selected product. A zero amount or an
/// in-flight update for the same product means no request at all.
fn submit_add_stock(state: &mut DashboardState, commands: &mpsc::Sender<Command>) {
    let Some(product) = state.selected_product() else {
        return;
    };
    let product_id = product.product_id.clone();
    let current_quantity = product.quantity;

    if state.is_updating(&product_id) {
        return;
    }
    let add_amount = state.add_amount(&product_id);
    if add_amount == 0 {
        return;
    }

    let _ = commands.try_send(Command::AddStock {
        product_id,
        current_quantity,
        add_amount,
    });
}
