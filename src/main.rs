// src/main.rs
use nannou::prelude::*;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use honeycomb_loader::{
    animation::{AnimationMode, DrawCommand, HoneycombAnimator, TickTimer},
    config::Config,
    draw::draw_honeycomb,
    models::Palette,
};

struct Model {
    animator: HoneycombAnimator,
    timer: TickTimer,

    // latest frame handed back by the animator
    frame: Vec<DrawCommand>,

    // Style
    background: Rgb<f32>,
    configured_palette: Palette,
    rainbow: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("honeycomb_loader=info")),
        )
        .init();

    nannou::app(model).update(update).run();
}

fn model(app: &App) -> Model {
    // Load config
    let config = Config::load().expect("Failed to load config file");
    let animator = config.build_animator().expect("Invalid config file");
    let background = config.background().expect("Invalid background color");
    let configured_palette = config.palette().expect("Invalid palette");

    // Create window
    app.new_window()
        .title("honeycomb_loader")
        .size(config.window.width, config.window.height)
        .view(view)
        .key_pressed(key_pressed)
        .resized(resized)
        .build()
        .unwrap();

    let mut model = Model {
        animator,
        timer: TickTimer::new(),
        frame: Vec::new(),
        background,
        rainbow: configured_palette == Palette::rainbow(),
        configured_palette,
    };
    restart(&mut model);
    model
}

// Attach from scratch: blank first frame, then arm the timer
fn restart(model: &mut Model) {
    model.animator.attach();
    model.frame = model.animator.on_tick();
    rearm(model);
}

fn rearm(model: &mut Model) {
    match model.animator.schedule_next() {
        Some(request) => model.timer.arm(request),
        None => model.timer.disarm(),
    }
}

fn update(_app: &App, model: &mut Model, update: Update) {
    if let Some(request) = model.timer.update(update.since_last) {
        if let Some(frame) = model.animator.fire(request) {
            model.frame = frame;
        }
        rearm(model);
    }
}

fn resized(_app: &App, model: &mut Model, size: Vec2) {
    match model.animator.on_viewport_changed(size.x, size.y) {
        Ok(()) => model.frame = model.animator.current_frame(),
        Err(e) => warn!("ignoring resize: {}", e),
    }
}

fn key_pressed(_app: &App, model: &mut Model, key: Key) {
    match key {
        // detach / reattach
        Key::Space => {
            if model.animator.is_attached() {
                model.animator.detach();
                model.timer.disarm();
                model.frame.clear();
            } else {
                restart(model);
            }
        }
        Key::M => {
            let next = match model.animator.mode() {
                AnimationMode::Binary => AnimationMode::Continuous,
                AnimationMode::Continuous => AnimationMode::Binary,
            };
            model.animator.set_mode(next);
            if model.animator.is_attached() {
                restart(model);
            }
        }
        Key::R => {
            model.rainbow = !model.rainbow;
            let palette = if model.rainbow {
                Palette::rainbow()
            } else {
                model.configured_palette
            };
            model.animator.set_palette(palette);
            model.frame = model.animator.current_frame();
        }
        Key::Up | Key::Down => {
            let current = model.animator.tick_interval().as_millis() as u64;
            let next = if key == Key::Up {
                (current / 2).max(1)
            } else {
                current.saturating_mul(2)
            };
            if model.animator.set_tick_interval_ms(next).is_ok() {
                info!("tick interval now {} ms", next);
                rearm(model);
            }
        }
        _ => (),
    }
}

// Draw the latest honeycomb frame
fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();
    draw.background().color(model.background);

    if model.animator.is_attached() {
        draw_honeycomb(&draw, &model.frame, app.window_rect(), model.background);
    }

    draw.to_frame(app, &frame).unwrap();
}
