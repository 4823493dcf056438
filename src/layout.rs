//! Fixed positions on the logical plane shared by the engine and the renderer.

use crate::geometry::{Bounds, Point};
use crate::puzzle::Base;
use crate::scene::{ButtonId, Scene};

pub const WINDOW_WIDTH: i32 = 800;
pub const WINDOW_HEIGHT: i32 = 600;

pub const PLAYER_SIZE: i32 = 40;
pub const PLAYER_SPAWN: Point = Point::new(100, 500);

pub const HUB_ENTRANCE: Bounds = Bounds::new(130, 100, 90, 100);
pub const LAB_DOOR: Bounds = Bounds::new(700, 100, 80, 100);

pub const PROMPT_ROW_Y: i32 = 150;
pub const SLOT_ROW_Y: i32 = 250;
pub const PALETTE_ROW_Y: i32 = 350;
const ROW_X: i32 = 150;
const MAX_SLOT_SPACING: i32 = 80;

/// Free tokens and slots are drawn as squares of this size.
pub const CELL_SIZE: i32 = 40;
pub const TOKEN_SPAWN: Point = Point::new(WINDOW_WIDTH / 2, WINDOW_HEIGHT - 100);

pub const BUTTON_WIDTH: i32 = 70;
pub const BUTTON_HEIGHT: i32 = 40;

pub fn player_bounds(at: Point) -> Bounds {
    Bounds::new(at.x, at.y, PLAYER_SIZE, PLAYER_SIZE)
}

/// Clamps a player origin so the whole sprite stays on screen.
pub fn clamp_player(at: Point) -> Point {
    Point::new(
        at.x.clamp(0, WINDOW_WIDTH - PLAYER_SIZE),
        at.y.clamp(0, WINDOW_HEIGHT - PLAYER_SIZE),
    )
}

fn slot_spacing(count: usize) -> i32 {
    let count = count.max(1) as i32;
    MAX_SLOT_SPACING.min((WINDOW_WIDTH - 300) / count)
}

pub fn prompt_position(index: usize, count: usize) -> Point {
    Point::new(ROW_X + index as i32 * slot_spacing(count), PROMPT_ROW_Y)
}

pub fn slot_position(index: usize, count: usize) -> Point {
    Point::new(ROW_X + index as i32 * slot_spacing(count), SLOT_ROW_Y)
}

/// Buttons visible in `scene`, with their hit boxes.
pub fn buttons(scene: Scene) -> Vec<(ButtonId, Bounds)> {
    let exit = (ButtonId::ExitToHub, button_at(700, 500));
    match scene {
        Scene::Hub => Vec::new(),
        Scene::Forest => vec![exit],
        Scene::Lab => {
            let mut buttons: Vec<_> = Base::ALL
                .iter()
                .enumerate()
                .map(|(i, base)| {
                    (
                        ButtonId::Spawn(*base),
                        button_at(ROW_X + i as i32 * 100, PALETTE_ROW_Y),
                    )
                })
                .collect();
            buttons.push((ButtonId::Submit, button_at(650, PALETTE_ROW_Y)));
            buttons.push(exit);
            buttons
        }
        Scene::Win => vec![(
            ButtonId::Restart,
            button_at(WINDOW_WIDTH / 2 - BUTTON_WIDTH / 2, WINDOW_HEIGHT / 2 + 50),
        )],
    }
}

pub fn button_hit(scene: Scene, p: Point) -> Option<ButtonId> {
    buttons(scene)
        .into_iter()
        .find(|(_, bounds)| bounds.contains(p))
        .map(|(id, _)| id)
}

const fn button_at(x: i32, y: i32) -> Bounds {
    Bounds::new(x, y, BUTTON_WIDTH, BUTTON_HEIGHT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawn_point_is_clear_of_both_triggers() {
        let player = player_bounds(PLAYER_SPAWN);
        assert!(!player.overlaps(&HUB_ENTRANCE));
        assert!(!player.overlaps(&LAB_DOOR));
    }

    #[test]
    fn wide_puzzles_squeeze_slot_spacing() {
        assert_eq!(slot_position(1, 4).x - slot_position(0, 4).x, 80);
        assert_eq!(slot_position(1, 10).x - slot_position(0, 10).x, 50);
    }

    #[test]
    fn lab_buttons_are_hit_tested() {
        assert_eq!(
            button_hit(Scene::Lab, Point::new(255, 360)),
            Some(ButtonId::Spawn(Base::T))
        );
        assert_eq!(
            button_hit(Scene::Lab, Point::new(660, 360)),
            Some(ButtonId::Submit)
        );
        assert_eq!(button_hit(Scene::Hub, Point::new(710, 510)), None);
        assert_eq!(
            button_hit(Scene::Forest, Point::new(710, 510)),
            Some(ButtonId::ExitToHub)
        );
    }
}
