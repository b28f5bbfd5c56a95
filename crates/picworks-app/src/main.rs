//! Application entry point.
//!
//! Replays a short drag for every drawing tool on a fresh project and logs
//! the resulting display list.

use kurbo::{Point, Vec2};
use picworks_core::{
    Canvas, CanvasConfig, CanvasEvent, MouseButton, PointerEvent, Project, ProjectResult,
    SerializableColor, ToolKind,
};

/// Environment variable naming a JSON canvas config.
const CONFIG_ENV: &str = "PICWORKS_CONFIG";

fn load_config() -> CanvasConfig {
    let Ok(path) = std::env::var(CONFIG_ENV) else {
        return CanvasConfig::default();
    };
    match CanvasConfig::load(&path) {
        Ok(config) => {
            log::info!("Loaded canvas config from {}", path);
            config
        }
        Err(err) => {
            log::warn!("Using default canvas config: {}", err);
            CanvasConfig::default()
        }
    }
}

fn replay(canvas: &mut Canvas, origin: Point) {
    let events = [
        PointerEvent::Down {
            position: origin,
            button: MouseButton::Left,
        },
        PointerEvent::Move {
            position: origin + Vec2::new(30.0, 20.0),
        },
        PointerEvent::Move {
            position: origin + Vec2::new(60.0, 45.0),
        },
        PointerEvent::Up {
            position: origin + Vec2::new(60.0, 45.0),
            button: MouseButton::Left,
        },
    ];
    for event in events {
        canvas.handle_pointer_event(event);
    }
}

fn run() -> ProjectResult<()> {
    let config = load_config();
    let project = Project::with_color("Untitled", 800, 600, SerializableColor::white(), 72)?;
    let mut canvas = Canvas::new(project, config)?;
    canvas.set_grid_visible(true);

    let tools = ToolKind::all().iter().copied().filter(|tool| tool.creates_shape());
    for (i, tool) in tools.enumerate() {
        log::info!("Drawing with the {} tool", tool.display_name());
        canvas.set_tool(tool);
        replay(&mut canvas, Point::new(20.0 + 90.0 * i as f64, 40.0));
    }

    for event in canvas.poll_events() {
        if let CanvasEvent::DrawingChanged(drawing) = event {
            log::trace!("Drawing: {}", drawing);
        }
    }

    let list = canvas.display_list();
    log::info!("Display list holds {} elements", list.len());
    for element in list.elements_ordered() {
        match serde_json::to_string(element) {
            Ok(json) => log::info!("{}", json),
            Err(err) => log::error!("Failed to serialize element {}: {}", element.id(), err),
        }
    }
    Ok(())
}

fn main() {
    env_logger::init();
    log::info!("Starting PicWorks");

    if let Err(err) = run() {
        log::error!("{}", err);
        std::process::exit(1);
    }
}
