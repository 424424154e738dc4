//! Cursor Chase entry point
//!
//! Owns the window, the render surface, and the fixed-timestep loop
//! that drives the simulation.

use std::sync::Arc;

use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use cursor_chase::consts::*;
use cursor_chase::platform::{self, FrameClock, InputEvent};
use cursor_chase::renderer::{self, RenderState};
use cursor_chase::sim::{GameState, TickInput, tick};

/// Everything that exists once the window is up
struct Game {
    window: Arc<Window>,
    render_state: RenderState,
    state: GameState,
    input: TickInput,
    clock: FrameClock,
    accumulator: f32,
}

impl Game {
    fn new(window: Arc<Window>) -> Self {
        let seed = platform::time::seed_from_clock();
        log::info!("Game initialized with seed: {}", seed);

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::PRIMARY,
            ..Default::default()
        });

        let surface = instance
            .create_surface(window.clone())
            .expect("Failed to create surface");

        let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::HighPerformance,
            compatible_surface: Some(&surface),
            force_fallback_adapter: false,
        }))
        .expect("Failed to find a compatible GPU adapter");
        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let size = window.inner_size();
        let render_state = pollster::block_on(RenderState::new(
            surface,
            &adapter,
            size.width.max(1),
            size.height.max(1),
        ));

        Self {
            window,
            render_state,
            state: GameState::new(seed),
            input: TickInput::default(),
            clock: FrameClock::new(),
            accumulator: 0.0,
        }
    }

    /// Run simulation ticks for the elapsed wall time
    fn update(&mut self) {
        let dt = self.clock.delta().min(0.1);
        self.accumulator += dt;

        let mut substeps = 0;
        while self.accumulator >= TICK_DT && substeps < MAX_SUBSTEPS {
            let input = self.input.clone();
            tick(&mut self.state, &input);
            self.accumulator -= TICK_DT;
            substeps += 1;

            // Clear one-shot inputs after processing
            self.input.restart = false;
            self.input.cursor = None;
        }
    }

    /// Render the current frame
    fn render(&mut self) {
        let frame = renderer::build_frame(&self.state);
        match self.render_state.render(&frame) {
            Ok(_) => {}
            Err(wgpu::SurfaceError::Lost) => {
                let (w, h) = self.render_state.size;
                self.render_state.resize(w, h);
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("Out of memory!");
            }
            Err(e) => {
                log::warn!("Render error: {:?}", e);
            }
        }
    }
}

/// Application shell; the game exists once `resumed` has run
struct App {
    game: Option<Game>,
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.game.is_some() {
            return;
        }

        let attributes = Window::default_attributes()
            .with_title("Cursor Chase")
            .with_inner_size(LogicalSize::new(CANVAS_WIDTH as f64, CANVAS_HEIGHT as f64))
            .with_resizable(false);
        let window = Arc::new(
            event_loop
                .create_window(attributes)
                .expect("Failed to create window"),
        );

        self.game = Some(Game::new(window));
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        let Some(game) = self.game.as_mut() else {
            return;
        };

        match platform::input::translate(&event, game.window.scale_factor()) {
            Some(InputEvent::CursorMoved(pos)) => {
                game.input.cursor = Some(pos);
            }
            Some(InputEvent::Restart) => {
                game.input.restart = true;
            }
            Some(InputEvent::Quit) => {
                log::info!("Exiting with final score: {}", game.state.score);
                event_loop.exit();
                return;
            }
            None => {}
        }

        match event {
            WindowEvent::Resized(size) => {
                game.render_state.resize(size.width, size.height);
            }
            WindowEvent::RedrawRequested => {
                game.update();
                game.render();
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(game) = self.game.as_ref() {
            game.window.request_redraw();
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Cursor Chase starting...");

    let event_loop = EventLoop::new().expect("Failed to create event loop");
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App { game: None };
    event_loop.run_app(&mut app).expect("Event loop error");
}
