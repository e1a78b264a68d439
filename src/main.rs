use clap::Parser;

use glium::glutin::event::{ElementState, Event, KeyboardInput, WindowEvent};
use glium::glutin::event_loop::{ControlFlow, EventLoop};
use glium::glutin::window::WindowBuilder;
use glium::glutin::ContextBuilder;
use glium::{Display, Surface};

use log::{error, info, warn};

use rusty_light::cli::{self, Args};
use rusty_light::config::Config;
use rusty_light::float::ToFloat;
use rusty_light::gl_renderer::GlRenderer;
use rusty_light::{AppState, Command, Result, Scene};

fn main() {
    let args = Args::parse();
    cli::setup_logging(args.verbose);
    if let Err(e) = run(&args) {
        error!("{}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    let config = Config::from_args(args);
    cli::print_usage();

    let mut app = AppState::new(&config)?;
    let scene = Scene::cube();

    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title(config.title.clone())
        .with_inner_size(config.dimensions());
    let context = ContextBuilder::new().with_depth_buffer(24);
    let display = Display::new(window, context, &event_loop)?;
    let renderer = GlRenderer::new(&display)?;
    info!(
        "Opened {}x{} window, material {}",
        config.width, config.height, app.preset
    );

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Wait;
        match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => app.quit = true,
                WindowEvent::Resized(size) => {
                    // Minimized windows report a zero height
                    if size.height > 0 {
                        let aspect = size.width.to_float() / size.height.to_float();
                        if let Err(e) = app.camera.set_aspect(aspect) {
                            warn!("Keeping previous aspect ratio: {}", e);
                        }
                        app.redraw = true;
                    }
                }
                WindowEvent::ReceivedCharacter(c) => {
                    if let Some(command) = Command::from_char(c) {
                        app.apply(command);
                    }
                }
                WindowEvent::KeyboardInput {
                    input:
                        KeyboardInput {
                            state: ElementState::Pressed,
                            virtual_keycode: Some(key),
                            ..
                        },
                    ..
                } => {
                    if let Some(command) = Command::from_key(key) {
                        app.apply(command);
                    }
                }
                _ => (),
            },
            Event::RedrawRequested(_) => {
                if let Err(e) = draw(&display, &renderer, &scene, &app, config.clear_color) {
                    error!("{}", e);
                    app.quit = true;
                }
            }
            Event::MainEventsCleared => {
                if app.redraw {
                    app.redraw = false;
                    display.gl_window().window().request_redraw();
                }
            }
            _ => (),
        }
        if app.quit {
            *control_flow = ControlFlow::Exit;
        }
    })
}

fn draw(
    display: &Display,
    renderer: &GlRenderer,
    scene: &Scene,
    app: &AppState,
    clear_color: (f32, f32, f32, f32),
) -> Result<()> {
    let mut target = display.draw();
    let (width, height) = target.get_dimensions();
    // Don't draw if the window is minimized
    let drawn = if width != 0 && height != 0 {
        target.clear_color_and_depth(clear_color, 1.0);
        renderer.render(display, &mut target, scene, app)
    } else {
        Ok(())
    };
    target.finish()?;
    drawn
}
