//! Demo scene and UI.
//!
//! A bounded world with named landmarks the camera can focus on, plus a
//! settings panel exposing every camera tunable at runtime.

use egui::{Align2, Color32, FontId, Rect, Stroke};
use glam::Vec2;
use hecs::{Entity, World};
use rand::Rng;
use serde::Deserialize;

use rts_camera::{CameraConfig, CameraController, Position, WorldRect};
use rts_camera::easing::{EaseKind, TransitionCurve};

/// Spacing of the ground grid in world units
const GRID_STEP: f32 = 512.0;
/// Landmark disc radius in world units
const LANDMARK_RADIUS: f32 = 48.0;

/// A named point of interest the camera can focus on.
pub struct Landmark {
    pub name: String,
    pub color: [u8; 3],
}

/// Decorative terrain rectangle.
pub struct Patch {
    pub half: Vec2,
    pub shade: u8,
}

/// Scene description parsed from demos/scene.json
#[derive(Deserialize)]
struct SceneFile {
    world: SceneWorld,
    landmarks: Vec<SceneLandmark>,
}

#[derive(Deserialize)]
struct SceneWorld {
    origin: [f32; 2],
    size: [f32; 2],
}

#[derive(Deserialize)]
struct SceneLandmark {
    name: String,
    x: f32,
    y: f32,
    color: [u8; 3],
}

/// Loaded demo scene: world bounds plus landmark entities in hotkey order.
pub struct Scene {
    pub world_rect: WorldRect,
    pub landmarks: Vec<Entity>,
}

/// Parse the embedded scene description and populate the world.
pub fn load_scene(world: &mut World) -> Result<Scene, String> {
    let file: SceneFile = serde_json::from_str(include_str!("../demos/scene.json"))
        .map_err(|e| format!("Failed to parse demo scene: {e}"))?;

    let world_rect = WorldRect::new(
        Vec2::new(file.world.origin[0], file.world.origin[1]),
        Vec2::new(file.world.size[0], file.world.size[1]),
    );

    let landmarks = file
        .landmarks
        .into_iter()
        .map(|lm| {
            world.spawn((
                Position::new(lm.x, lm.y),
                Landmark {
                    name: lm.name,
                    color: lm.color,
                },
            ))
        })
        .collect();

    scatter_patches(world, &world_rect);

    Ok(Scene {
        world_rect,
        landmarks,
    })
}

/// Sprinkle decorative terrain so camera motion is visible everywhere.
fn scatter_patches(world: &mut World, rect: &WorldRect) {
    let mut rng = rand::thread_rng();
    for _ in 0..48 {
        let position = Position::new(
            rng.gen_range(rect.origin.x..rect.max().x),
            rng.gen_range(rect.origin.y..rect.max().y),
        );
        let patch = Patch {
            half: Vec2::new(rng.gen_range(40.0..220.0), rng.gen_range(40.0..220.0)),
            shade: rng.gen_range(30..60),
        };
        world.spawn((position, patch));
    }
}

/// Paint the world through the camera onto egui's background layer.
pub fn draw_world(
    painter: &egui::Painter,
    camera: &CameraController,
    world: &World,
    pixels_per_point: f32,
) {
    puffin::profile_function!();

    let to_screen = |world_pos: Vec2| -> egui::Pos2 {
        let screen = camera.world_to_screen(world_pos);
        egui::pos2(screen.x / pixels_per_point, screen.y / pixels_per_point)
    };

    let visible = camera.visible_rect();

    // Ground grid
    let grid_stroke = Stroke::new(1.0, Color32::from_gray(45));
    let mut x = (visible.origin.x / GRID_STEP).floor() * GRID_STEP;
    while x <= visible.max().x {
        painter.line_segment(
            [
                to_screen(Vec2::new(x, visible.origin.y)),
                to_screen(Vec2::new(x, visible.max().y)),
            ],
            grid_stroke,
        );
        x += GRID_STEP;
    }
    let mut y = (visible.origin.y / GRID_STEP).floor() * GRID_STEP;
    while y <= visible.max().y {
        painter.line_segment(
            [
                to_screen(Vec2::new(visible.origin.x, y)),
                to_screen(Vec2::new(visible.max().x, y)),
            ],
            grid_stroke,
        );
        y += GRID_STEP;
    }

    // Terrain patches
    for (_, (position, patch)) in world.query::<(&Position, &Patch)>().iter() {
        let center = position.vec2();
        let rect = Rect::from_min_max(
            to_screen(center - patch.half),
            to_screen(center + patch.half),
        );
        let shade = patch.shade;
        painter.rect_filled(rect, 4.0, Color32::from_rgb(shade / 2, shade, shade / 2));
    }

    // World border
    if camera.config.limits_enabled {
        let rect = camera.config.world_rect;
        painter.rect_stroke(
            Rect::from_min_max(to_screen(rect.origin), to_screen(rect.max())),
            0.0,
            Stroke::new(2.0, Color32::from_rgb(200, 120, 60)),
        );
    }

    // Landmarks
    for (_, (position, landmark)) in world.query::<(&Position, &Landmark)>().iter() {
        let center = to_screen(position.vec2());
        let radius = LANDMARK_RADIUS / camera.zoom.max(0.001) / pixels_per_point;
        let [r, g, b] = landmark.color;
        painter.circle_filled(center, radius, Color32::from_rgb(r, g, b));
        painter.text(
            egui::pos2(center.x, center.y - radius - 4.0),
            Align2::CENTER_BOTTOM,
            &landmark.name,
            FontId::proportional(13.0),
            Color32::WHITE,
        );
    }

    // Focus marker
    if let Some((target, _)) = camera.focus_target() {
        let center = to_screen(target);
        let stroke = Stroke::new(2.0, Color32::from_rgb(255, 220, 80));
        let arm = 12.0;
        painter.line_segment(
            [
                egui::pos2(center.x - arm, center.y),
                egui::pos2(center.x + arm, center.y),
            ],
            stroke,
        );
        painter.line_segment(
            [
                egui::pos2(center.x, center.y - arm),
                egui::pos2(center.x, center.y + arm),
            ],
            stroke,
        );
    }
}

/// Settings panel editing the live camera configuration.
///
/// Returns the advisory warnings for the edited configuration so the caller
/// can log newly appearing ones.
pub fn settings_panel(
    ctx: &egui::Context,
    config: &mut CameraConfig,
    status: &str,
) -> Vec<rts_camera::ConfigWarning> {
    let mut warnings = Vec::new();

    egui::SidePanel::right("camera_settings")
        .default_width(270.0)
        .show(ctx, |ui| {
            ui.heading("Camera");
            ui.separator();

            ui.checkbox(&mut config.keyboard_enabled, "Keyboard panning");
            ui.add(egui::Slider::new(&mut config.pan_speed, 0.0..=3000.0).text("Pan speed"));
            ui.add(egui::Slider::new(&mut config.acceleration, 100.0..=10_000.0).text("Acceleration"));
            ui.separator();

            ui.checkbox(&mut config.edge_scroll_enabled, "Edge scrolling");
            ui.add(egui::Slider::new(&mut config.edge_margin, 1.0..=64.0).text("Edge margin"));
            ui.checkbox(&mut config.confine_pointer, "Confine pointer to window");
            ui.separator();

            ui.add(egui::Slider::new(&mut config.drag_sensitivity, 0.1..=4.0).text("Drag sensitivity"));
            ui.separator();

            ui.add(egui::Slider::new(&mut config.zoom_min, 0.05..=2.0).text("Zoom min"));
            ui.add(egui::Slider::new(&mut config.zoom_max, 0.5..=6.0).text("Zoom max"));
            ui.add(egui::Slider::new(&mut config.zoom_step, 0.01..=0.5).text("Zoom step"));
            ui.separator();

            ui.checkbox(&mut config.limits_enabled, "World limits");
            ui.separator();

            ui.label("Focus");
            ui.add(egui::Slider::new(&mut config.focus_zoom, 0.1..=4.0).text("Default zoom"));
            ui.add(egui::Slider::new(&mut config.focus_duration, 0.1..=3.0).text("Default duration"));
            ui.checkbox(&mut config.focus_suppresses_input, "Suppress input while focusing");

            egui::ComboBox::from_label("Curve")
                .selected_text(config.focus_curve.name())
                .show_ui(ui, |ui| {
                    for curve in TransitionCurve::ALL {
                        ui.selectable_value(&mut config.focus_curve, curve, curve.name());
                    }
                });
            egui::ComboBox::from_label("Ease")
                .selected_text(config.focus_ease.name())
                .show_ui(ui, |ui| {
                    for ease in EaseKind::ALL {
                        ui.selectable_value(&mut config.focus_ease, ease, ease.name());
                    }
                });

            warnings = config.validate();
            if !warnings.is_empty() {
                ui.separator();
                for warning in &warnings {
                    ui.colored_label(Color32::YELLOW, format!("\u{26a0} {warning}"));
                }
            }

            ui.separator();
            ui.label(status);
            ui.separator();
            ui.small("WASD / arrows: pan \u{2022} wheel: zoom");
            ui.small("Middle/right drag (or Ctrl+left): grab the world");
            ui.small("1-9: focus a landmark \u{2022} click: focus a point");
            ui.small("Esc: cancel focus");
        });

    warnings
}
