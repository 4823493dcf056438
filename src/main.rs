mod ui;

use anyhow::{Context, Result};
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use std::io;
use std::path::Path;
use std::sync::Mutex;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

use dna_island::config::load_or_default;
use dna_island::layout;
use dna_island::puzzle::Base;
use dna_island::scene::ButtonId;
use dna_island::timer::{EventQueue, SystemClock};
use dna_island::{Direction, GameEvent, GameState, Scene, SceneController};

const CONFIG_FILE: &str = "dna_island.toml";
const LOG_FILE: &str = "dna_island.log";
const IDLE_POLL: Duration = Duration::from_millis(250);

enum Action {
    Quit,
    Game(GameEvent),
}

fn init_logging() -> Result<()> {
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(LOG_FILE)
        .with_context(|| format!("opening log file {}", LOG_FILE))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}

fn main() -> Result<()> {
    init_logging()?;
    let config = load_or_default(Path::new(CONFIG_FILE))?;
    tracing::info!(?config, "DNA Island starting");

    let mut controller = SceneController::new(config);
    let mut state = controller.new_game();
    let mut queue = EventQueue::new(SystemClock::new());

    enable_raw_mode().context("enabling raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("entering alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("creating terminal")?;

    let outcome = run(&mut terminal, &mut controller, &mut state, &mut queue);

    disable_raw_mode().context("disabling raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("leaving alternate screen")?;
    terminal.show_cursor().context("restoring cursor")?;
    outcome?;

    if state.scene == Scene::Win {
        println!("\nYou restored every strand in the lab. The island thanks you!\n");
    }
    tracing::info!(level = state.level, "DNA Island exiting");
    Ok(())
}

fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    controller: &mut SceneController,
    state: &mut GameState,
    queue: &mut EventQueue<SystemClock>,
) -> Result<()> {
    loop {
        let screen = terminal.draw(|f| ui::draw(f, state))?.area;

        let timeout = queue.time_to_next().map_or(IDLE_POLL, |d| d.min(IDLE_POLL));
        if event::poll(timeout)? {
            let action = match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => key_action(state.scene, key),
                Event::Mouse(mouse) => mouse_action(state.scene, screen, mouse),
                _ => None,
            };
            match action {
                Some(Action::Quit) => return Ok(()),
                Some(Action::Game(event)) => controller.dispatch(state, event, queue),
                None => {}
            }
        }

        while let Some(event) = queue.pop_due() {
            controller.dispatch(state, event, queue);
        }
    }
}

fn key_action(scene: Scene, key: KeyEvent) -> Option<Action> {
    if key.code == KeyCode::Char('q')
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
    {
        return Some(Action::Quit);
    }

    let event = match (scene, key.code) {
        (_, KeyCode::Up) => GameEvent::Move(Direction::Up),
        (_, KeyCode::Down) => GameEvent::Move(Direction::Down),
        (_, KeyCode::Left) => GameEvent::Move(Direction::Left),
        (_, KeyCode::Right) => GameEvent::Move(Direction::Right),
        (Scene::Forest | Scene::Lab, KeyCode::Esc | KeyCode::Char('h')) => {
            GameEvent::ButtonPress(ButtonId::ExitToHub)
        }
        (Scene::Lab, KeyCode::Enter | KeyCode::Char('s')) => GameEvent::ButtonPress(ButtonId::Submit),
        (Scene::Lab, KeyCode::Char(c)) => GameEvent::ButtonPress(ButtonId::Spawn(Base::from_char(c)?)),
        (Scene::Win, KeyCode::Enter | KeyCode::Char('r')) => {
            GameEvent::ButtonPress(ButtonId::Restart)
        }
        _ => return None,
    };
    Some(Action::Game(event))
}

fn mouse_action(scene: Scene, screen: Rect, mouse: MouseEvent) -> Option<Action> {
    let at = ui::to_logical(screen, mouse.column, mouse.row)?;
    let event = match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => match layout::button_hit(scene, at) {
            Some(id) => GameEvent::ButtonPress(id),
            None => GameEvent::DragStart(at),
        },
        MouseEventKind::Drag(MouseButton::Left) => GameEvent::DragMove(at),
        MouseEventKind::Up(MouseButton::Left) => GameEvent::DragEnd(at),
        _ => return None,
    };
    Some(Action::Game(event))
}
