// src/main.rs
use nannou::prelude::*;

use mocapvis::{
    config::Config, controllers::OscController, models::SkeletonState, render::SkeletonRenderer,
};

struct Model {
    skeleton: SkeletonState,
    osc_controller: OscController,
    renderer: SkeletonRenderer,
}

fn main() {
    nannou::app(model).update(update).run();
}

fn model(app: &App) -> Model {
    // Load config
    let config = Config::load().expect("Failed to load config file");

    // Bind the OSC receiver. Without the socket there is nothing to show,
    // so a failed bind takes the whole app down.
    let osc_controller = match OscController::new(config.osc.rx_port, &config.osc.namespace) {
        Ok(controller) => controller,
        Err(e) => {
            eprintln!(
                "Failed to bind OSC receiver on port {}: {}",
                config.osc.rx_port, e
            );
            std::process::exit(1);
        }
    };
    println!(
        "Listening for /{}/<part>/all on UDP port {}",
        config.osc.namespace, config.osc.rx_port
    );

    // Create window
    app.new_window()
        .title("mocapvis 0.1.0")
        .size(config.window.width, config.window.height)
        .view(view)
        .build()
        .unwrap();

    Model {
        skeleton: SkeletonState::new(),
        osc_controller,
        renderer: SkeletonRenderer::new(config.style.marker_radius, config.style.line_weight),
    }
}

fn update(_app: &App, model: &mut Model, _update: Update) {
    // Process OSC messages
    model.osc_controller.process_messages(&model.skeleton);
}

// Draw the state of Model into the given Frame
fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();
    draw.background().color(BLACK);

    let viewport = app.window_rect().wh();
    model.renderer.draw(&draw, &model.skeleton, viewport);

    draw.to_frame(app, &frame).unwrap();
}
