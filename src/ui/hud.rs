//! Heads-up display drawn over the scene

use crate::timing::FrameClock;
use crate::world::World;

const KEY_HELP: &[(&str, &str)] = &[
    ("1-4", "select scenario"),
    ("R", "reload scenario"),
    ("Arrows", "pan camera"),
    ("Wheel", "zoom"),
    (", / .", "slower / faster"),
    ("Space", "pause"),
    ("G", "toggle force model"),
    ("Esc", "quit"),
];

/// Snapshot of everything the HUD shows for one frame
#[derive(Debug, Clone, PartialEq)]
pub struct HudStats {
    pub fps: f32,
    pub frame_time_ms: f32,
    pub scene: &'static str,
    pub velocity_scale: f32,
    pub force_model: &'static str,
    pub active_bodies: usize,
    pub capacity: usize,
    pub last_merges: usize,
    pub total_merges: usize,
    pub max_force: f64,
    pub paused: bool,
}

impl HudStats {
    pub fn collect(world: &World, clock: &FrameClock) -> Self {
        let simulation = &world.simulation;
        let stats = simulation.stats();

        Self {
            fps: clock.fps(),
            frame_time_ms: clock.frame_time_ms(),
            scene: simulation.scene().description(),
            velocity_scale: simulation.velocity_scale(),
            force_model: simulation.force_model().label(),
            active_bodies: simulation.active_count(),
            capacity: simulation.capacity(),
            last_merges: stats.last_merges,
            total_merges: stats.total_merges,
            max_force: stats.last_step.max_force,
            paused: simulation.is_paused(),
        }
    }

    /// Status lines in display order
    pub fn lines(&self) -> Vec<String> {
        let mut lines = vec![
            format!("FPS: {:.1} ({:.2} ms)", self.fps, self.frame_time_ms),
            self.scene.to_string(),
            format!("Velocity scale: {:.5}", self.velocity_scale),
            format!("Force model: {}", self.force_model),
            format!("Bodies: {} / {}", self.active_bodies, self.capacity),
            format!("Merges: {} (total {})", self.last_merges, self.total_merges),
            format!("Max force: {:.4e}", self.max_force),
        ];
        if self.paused {
            lines.push("PAUSED".to_string());
        }
        lines
    }
}

/// Draws the status window and the key help
pub fn draw_hud(ui: &imgui::Ui, stats: &HudStats) {
    let display_size = ui.io().display_size;
    if display_size[0] <= 0.0 || display_size[1] <= 0.0 {
        return;
    }

    ui.window("Gravity")
        .position([10.0, 10.0], imgui::Condition::FirstUseEver)
        .always_auto_resize(true)
        .collapsible(true)
        .build(|| {
            for line in stats.lines() {
                ui.text(line);
            }

            ui.separator();
            if ui.collapsing_header("Keys", imgui::TreeNodeFlags::empty()) {
                for (key, help) in KEY_HELP {
                    ui.text(format!("{key:>8}  {help}"));
                }
            }
        });
}
