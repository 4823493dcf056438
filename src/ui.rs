use dna_island::geometry::{Bounds, Point};
use dna_island::layout::{self, WINDOW_HEIGHT, WINDOW_WIDTH};
use dna_island::puzzle::SlotMark;
use dna_island::scene::{ButtonId, GameState, LabState, Notice, Scene};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

const BASE_COLOR: Color = Color::Blue;
const TEXT_COLOR: Color = Color::Black;

struct Screen {
    status: Rect,
    play: Rect,
    message: Rect,
}

fn split(area: Rect) -> Screen {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(10),
            Constraint::Length(4),
        ])
        .split(area);
    Screen {
        status: chunks[0],
        play: chunks[1],
        message: chunks[2],
    }
}

/// Maps a terminal cell back onto the logical plane. `None` outside the map.
pub fn to_logical(area: Rect, column: u16, row: u16) -> Option<Point> {
    let play = split(area).play;
    if play.width == 0
        || play.height == 0
        || column < play.x
        || row < play.y
        || column >= play.x + play.width
        || row >= play.y + play.height
    {
        return None;
    }
    let x = (column - play.x) as i32 * WINDOW_WIDTH / play.width as i32;
    let y = (row - play.y) as i32 * WINDOW_HEIGHT / play.height as i32;
    Some(Point::new(x, y))
}

fn to_cells(play: Rect, bounds: Bounds) -> Rect {
    let scale_x = |x: i32| (x.clamp(0, WINDOW_WIDTH) * play.width as i32 / WINDOW_WIDTH) as u16;
    let scale_y = |y: i32| (y.clamp(0, WINDOW_HEIGHT) * play.height as i32 / WINDOW_HEIGHT) as u16;

    let x = scale_x(bounds.left()).min(play.width.saturating_sub(1));
    let y = scale_y(bounds.top()).min(play.height.saturating_sub(1));
    let width = scale_x(bounds.right()).saturating_sub(x).max(1);
    let height = scale_y(bounds.bottom()).saturating_sub(y).max(1);
    Rect::new(
        play.x + x,
        play.y + y,
        width.min(play.width - x),
        height.min(play.height - y),
    )
}

fn cell(f: &mut Frame, play: Rect, bounds: Bounds, text: String, style: Style) {
    let widget = Paragraph::new(text)
        .style(style)
        .alignment(Alignment::Center);
    f.render_widget(widget, to_cells(play, bounds));
}

pub fn draw(f: &mut Frame, state: &GameState) {
    let screen = split(f.area());
    draw_status(f, state, screen.status);

    match state.scene {
        Scene::Hub | Scene::Forest => draw_overworld(f, state, screen.play),
        Scene::Lab => {
            if let Some(lab) = state.lab.as_ref() {
                draw_lab(f, state, lab, screen.play);
            }
        }
        Scene::Win => draw_win(f, screen.play),
    }
    draw_buttons(f, state, screen.play);
    draw_message(f, state, screen.message);
}

fn draw_status(f: &mut Frame, state: &GameState, area: Rect) {
    let mut spans = vec![
        Span::styled(
            " DNA ISLAND ADVENTURE ",
            Style::default().fg(Color::Black).bg(Color::Yellow),
        ),
        Span::raw("  "),
        Span::styled(
            format!(" {} ", state.scene.title()),
            Style::default().fg(Color::White).bg(Color::DarkGray),
        ),
        Span::raw("  "),
        Span::styled(
            format!(" Level: {} ", state.level),
            Style::default().fg(Color::Cyan),
        ),
        Span::raw("  "),
        Span::styled(
            format!(" Streak: {} ", state.difficulty.streak()),
            Style::default().fg(Color::Magenta),
        ),
    ];
    if let Some(lab) = state.lab.as_ref() {
        let left = lab.timer.displayed();
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            format!(" Time: {}s ", left),
            Style::default().fg(if left > 30 {
                Color::Green
            } else if left > 10 {
                Color::Yellow
            } else {
                Color::Red
            }),
        ));
    }
    let status = Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::BOTTOM));
    f.render_widget(status, area);
}

fn draw_overworld(f: &mut Frame, state: &GameState, play: Rect) {
    let (zone, label, ground) = match state.scene {
        Scene::Hub => (layout::HUB_ENTRANCE, "Forest", Color::Rgb(40, 90, 40)),
        _ => (layout::LAB_DOOR, "Lab", Color::Rgb(20, 60, 20)),
    };
    f.render_widget(Block::default().style(Style::default().bg(ground)), play);
    cell(
        f,
        play,
        zone,
        label.to_string(),
        Style::default().fg(Color::White).bg(Color::DarkGray),
    );
    if let Some(player) = state.player {
        cell(
            f,
            play,
            layout::player_bounds(player),
            "@".to_string(),
            Style::default()
                .fg(Color::Yellow)
                .bg(Color::Black)
                .add_modifier(Modifier::BOLD),
        );
    }
}

fn draw_lab(f: &mut Frame, state: &GameState, lab: &LabState, play: Rect) {
    f.render_widget(
        Block::default().style(Style::default().bg(Color::Rgb(30, 30, 50))),
        play,
    );
    let label = Style::default().fg(TEXT_COLOR).bg(BASE_COLOR);
    cell(
        f,
        play,
        Bounds::new(600, 30, 80, 40),
        format!("Level: {}", state.level),
        label,
    );
    cell(
        f,
        play,
        Bounds::new(600, 80, 80, 40),
        format!("Time: {}s", lab.timer.displayed()),
        label,
    );

    let slots = lab.puzzle.slots();
    for (i, slot) in slots.iter().enumerate() {
        let prompt = layout::prompt_position(i, slots.len());
        cell(
            f,
            play,
            Bounds::new(prompt.x, prompt.y, layout::CELL_SIZE, layout::CELL_SIZE),
            slot.prompt.to_string(),
            Style::default().fg(TEXT_COLOR).bg(Color::LightBlue),
        );

        let bg = match slot.mark {
            SlotMark::Empty => Color::White,
            SlotMark::Placed | SlotMark::Match => Color::LightGreen,
            SlotMark::Mismatch => Color::Red,
        };
        cell(
            f,
            play,
            Bounds::new(
                slot.position.x,
                slot.position.y,
                layout::CELL_SIZE,
                layout::CELL_SIZE,
            ),
            slot.placement.map(|b| b.to_string()).unwrap_or_default(),
            Style::default().fg(TEXT_COLOR).bg(bg),
        );
    }

    for token in lab.puzzle.tokens() {
        let mut style = Style::default().fg(Color::White).bg(BASE_COLOR);
        if lab.drag.is_some_and(|d| d.token == token.id) {
            style = style.add_modifier(Modifier::BOLD | Modifier::REVERSED);
        }
        cell(
            f,
            play,
            Bounds::new(
                token.position.x,
                token.position.y,
                layout::CELL_SIZE,
                layout::CELL_SIZE,
            ),
            token.base.to_string(),
            style,
        );
    }
}

fn draw_win(f: &mut Frame, play: Rect) {
    f.render_widget(Block::default().style(Style::default().bg(Color::Black)), play);
    cell(
        f,
        play,
        Bounds::new(WINDOW_WIDTH / 2 - 150, WINDOW_HEIGHT / 2 - 40, 300, 60),
        "YOU WIN!".to_string(),
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
    );
}

fn draw_buttons(f: &mut Frame, state: &GameState, play: Rect) {
    for (id, bounds) in layout::buttons(state.scene) {
        let label = match id {
            ButtonId::Spawn(base) => {
                let left = state
                    .lab
                    .as_ref()
                    .map(|lab| lab.puzzle.palette().remaining(base))
                    .unwrap_or(0);
                format!("{} ({})", base, left)
            }
            ButtonId::Submit => "Submit".to_string(),
            ButtonId::ExitToHub => "Exit to Hub".to_string(),
            ButtonId::Restart => "Restart".to_string(),
        };
        cell(
            f,
            play,
            bounds,
            label,
            Style::default()
                .fg(TEXT_COLOR)
                .bg(BASE_COLOR)
                .add_modifier(Modifier::BOLD),
        );
    }
}

fn draw_message(f: &mut Frame, state: &GameState, area: Rect) {
    let (text, style) = match &state.notice {
        Some(Notice::Solved { level }) => (
            format!("Level {} cleared! Every pair matched.", level),
            Style::default().fg(Color::Green),
        ),
        Some(Notice::Mismatch { matched, total }) => (
            format!(
                "Only {} of {} pairs matched. The strand falls apart... try again.",
                matched, total
            ),
            Style::default().fg(Color::Red),
        ),
        Some(Notice::TimedOut { level }) => (
            format!("Time ran out! Back to level {}.", level),
            Style::default().fg(Color::Red),
        ),
        None => (String::new(), Style::default()),
    };
    let help = match state.scene {
        Scene::Hub | Scene::Forest => "Arrows: walk  •  Esc: hub  •  q: quit",
        Scene::Lab => "a/t/g/c: spawn base  •  drag onto slot  •  Enter: submit  •  Esc: hub  •  q: quit",
        Scene::Win => "Enter / r: restart  •  q: quit",
    };
    let message = Paragraph::new(vec![
        Line::from(Span::styled(text, style)),
        Line::from(Span::styled(help, Style::default().fg(Color::DarkGray))),
    ])
    .block(Block::default().borders(Borders::TOP).title(" Lab Notes "))
    .wrap(Wrap { trim: false });
    f.render_widget(message, area);
}
