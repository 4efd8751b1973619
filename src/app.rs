//! Desktop driver
//!
//! [`GravityApp`] owns the winit event loop. The per-frame logic lives in
//! [`World`]; this module only collects input, paces frames and hands the
//! result to the renderer and the HUD.

use log::{debug, error, info};
use std::sync::Arc;
use std::time::Instant;
use winit::{
    application::ApplicationHandler,
    dpi::{LogicalSize, PhysicalSize},
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Fullscreen, Window, WindowAttributes, WindowId},
};

use crate::config::AppConfig;
use crate::error::{GravityError, Result};
use crate::gfx::rendering::{FrameStatus, RenderEngine};
use crate::input::InputState;
use crate::timing::FrameClock;
use crate::ui::{HudStats, UiManager};
use crate::world::{FrameOutcome, World};

/// The gravity visualizer application
///
/// ```no_run
/// use gravity::{config::AppConfig, GravityApp};
///
/// let app = GravityApp::new(AppConfig::default().with_target_fps(30))?;
/// app.run()?;
/// # Ok::<(), gravity::error::GravityError>(())
/// ```
pub struct GravityApp {
    event_loop: EventLoop<()>,
    app_state: AppState,
}

struct AppState {
    config: AppConfig,
    window: Option<Arc<Window>>,
    render_engine: Option<RenderEngine>,
    ui_manager: Option<UiManager>,
    world: World,
    input: InputState,
    clock: FrameClock,
    fatal_error: Option<GravityError>,
}

impl GravityApp {
    /// Validates `config`, loads the initial scene and creates the event loop
    pub fn new(config: AppConfig) -> Result<Self> {
        let world = World::new(&config)?;
        let event_loop = EventLoop::new()?;

        Ok(Self {
            event_loop,
            app_state: AppState {
                clock: FrameClock::new(config.target_fps),
                config,
                window: None,
                render_engine: None,
                ui_manager: None,
                world,
                input: InputState::default(),
                fatal_error: None,
            },
        })
    }

    pub fn world(&self) -> &World {
        &self.app_state.world
    }

    /// Runs until the window closes or quit is requested
    ///
    /// Window or GPU failures stop the loop and are returned here.
    pub fn run(mut self) -> Result<()> {
        self.event_loop
            .set_control_flow(ControlFlow::WaitUntil(Instant::now()));
        self.event_loop.run_app(&mut self.app_state)?;

        match self.app_state.fatal_error.take() {
            Some(error) => Err(error),
            None => {
                info!(
                    "Exited after {} frames, {} merges",
                    self.app_state.clock.frames(),
                    self.app_state.world.stats().total_merges
                );
                Ok(())
            }
        }
    }
}

impl AppState {
    fn init_graphics(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let window_config = &self.config.window;
        let attributes = WindowAttributes::default()
            .with_title(window_config.title.clone())
            .with_inner_size(LogicalSize::new(window_config.width, window_config.height))
            .with_fullscreen(
                window_config
                    .fullscreen
                    .then_some(Fullscreen::Borderless(None)),
            );

        let window = Arc::new(event_loop.create_window(attributes)?);
        let PhysicalSize { width, height } = window.inner_size();
        self.world.resize(width, height);

        let render_engine = pollster::block_on(RenderEngine::new(
            window.clone(),
            &self.config.render,
            self.config.simulation.capacity,
        ))?;

        let ui_manager = UiManager::new(
            render_engine.device(),
            render_engine.queue(),
            render_engine.surface_format(),
            &window,
        );

        self.ui_manager = Some(ui_manager);
        self.render_engine = Some(render_engine);
        self.window = Some(window);
        Ok(())
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, error: GravityError) {
        error!("{error}");
        self.fatal_error = Some(error);
        event_loop.exit();
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        self.clock.mark_frame(Instant::now());
        let frame_input = self.input.begin_frame();

        if self.world.update(&frame_input) == FrameOutcome::Quit {
            event_loop.exit();
            return;
        }

        let (Some(render_engine), Some(window)) =
            (self.render_engine.as_mut(), self.window.as_ref())
        else {
            return;
        };

        let hud = HudStats::collect(&self.world, &self.clock);
        let bodies = self.world.simulation.bodies();
        let camera = &self.world.camera;

        let result = match self.ui_manager.as_mut() {
            Some(ui_manager) => render_engine.render_frame(
                bodies,
                camera,
                |device, queue, encoder, target| {
                    ui_manager.render_hud(device, queue, encoder, window, target, &hud)
                },
            ),
            None => render_engine.render_frame(bodies, camera, |_, _, _, _| Ok(())),
        };

        match result {
            Ok(FrameStatus::Presented) => {}
            Ok(FrameStatus::Skipped) => debug!("Frame {} skipped", self.clock.frames()),
            Err(error) => self.fail(event_loop, error),
        }
    }
}

impl ApplicationHandler for AppState {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        if let Err(error) = self.init_graphics(event_loop) {
            self.fail(event_loop, error);
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        let Some(window) = self.window.clone() else {
            return;
        };

        // UI sees input first; key events always reach the input state so
        // held keys are released even while the UI has focus
        let ui_captured = self
            .ui_manager
            .as_mut()
            .is_some_and(|ui_manager| ui_manager.handle_window_event(&window, window_id, &event));
        if !ui_captured || matches!(event, WindowEvent::KeyboardInput { .. }) {
            self.input.handle_window_event(&event);
        }

        match event {
            WindowEvent::Resized(PhysicalSize { width, height }) => {
                self.world.resize(width, height);
                if let Some(render_engine) = self.render_engine.as_mut() {
                    render_engine.resize(width, height);
                }
            }
            WindowEvent::CloseRequested => {
                info!("Window closed");
                event_loop.exit();
            }
            WindowEvent::RedrawRequested => self.redraw(event_loop),
            _ => (),
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let now = Instant::now();
        if self.clock.is_due(now) {
            if let Some(window) = self.window.as_ref() {
                window.request_redraw();
            }
        }
        event_loop.set_control_flow(ControlFlow::WaitUntil(self.clock.next_deadline(now)));
    }
}
