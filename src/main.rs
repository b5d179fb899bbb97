use std::path::PathBuf;

use clap::Parser;
use macroquad::prelude::*;

use conway_paint::{
    AppConfig, ConfigError, Rgb, Simulation,
    application::FramerateBounds,
    input, rendering,
    ui::{self, ColorPicker, Layout, Slider},
};

#[derive(Parser)]
#[command(name = "conway_paint")]
#[command(version)]
#[command(about = "Paint colored cells and watch them evolve under Conway's rules")]
struct Cli {
    /// Configuration file (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Grid side length, overrides the config file
    #[arg(short, long)]
    size: Option<usize>,

    /// Initial framerate in generations per second
    #[arg(short, long)]
    framerate: Option<u32>,
}

fn load_config(cli: &Cli) -> Result<AppConfig, ConfigError> {
    let mut config = match &cli.config {
        Some(path) => {
            let config = AppConfig::from_file(path)?;
            log::info!("Loaded config from: {}", path.display());
            config
        }
        None => {
            log::info!("Using default configuration");
            AppConfig::default()
        }
    };
    if let Some(size) = cli.size {
        config.grid.size = size;
    }
    if let Some(rate) = cli.framerate {
        config.framerate.initial = rate;
    }
    config.validate()?;
    Ok(config)
}

fn prepare(config: &AppConfig) -> Result<(Simulation, Rgb), ConfigError> {
    Ok((Simulation::from_config(config)?, config.dead_color()?))
}

fn window_conf(layout: &Layout) -> Conf {
    Conf {
        window_title: "Live Conway's painting".to_owned(),
        window_width: layout.window_width() as i32,
        window_height: layout.window_height() as i32,
        window_resizable: false,
        ..Default::default()
    }
}

async fn run(config: AppConfig, mut sim: Simulation, dead_color: Rgb) {
    let layout = Layout::new(config.grid.size, config.grid.pixel_size);
    let buttons = ui::create_buttons(&layout);
    let px = layout.panel_x();
    let buttons_bottom = 20.0 + buttons.len() as f32 * (ui::BUTTON_HEIGHT + ui::MARGIN);
    let mut picker = ColorPicker::new(px, buttons_bottom + 20.0, &sim.palette);
    let mut slider = Slider::framerate(
        px + 8.0,
        buttons_bottom + 20.0 + picker.height() + 40.0,
        ui::PANEL_WIDTH - 16.0,
        FramerateBounds::from(&config.framerate),
        sim.framerate().get(),
    );
    let mut renderer = rendering::GridRenderer::new(config.grid.size, dead_color);

    loop {
        let mouse_pos = mouse_position();

        if let Some(swatch) = picker.update(mouse_pos) {
            sim.brush = swatch.cell();
        }
        if let Some(rate) = slider.update(mouse_pos) {
            sim.set_framerate(rate);
        }
        input::process_button_clicks(&mut sim, &buttons, mouse_pos);
        if !slider.is_dragging() && !picker.is_dragging() {
            input::handle_mouse_paint(&mut sim, &layout, mouse_pos);
        }
        input::process_keyboard_input(&mut sim);
        slider.set_value(sim.framerate().get());

        sim.tick(get_frame_time());

        clear_background(Color::from_rgba(20, 20, 20, 255));
        renderer.draw(sim.grid(), &layout);
        rendering::draw_controls(&sim, &layout, &buttons, &picker, &slider, dead_color, mouse_pos);

        next_frame().await;
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            log::error!("{}", e);
            std::process::exit(1);
        }
    };
    let (sim, dead_color) = match prepare(&config) {
        Ok(ready) => ready,
        Err(e) => {
            log::error!("{}", e);
            std::process::exit(1);
        }
    };

    log::info!("Grid size: {}x{}", config.grid.size, config.grid.size);
    log::info!("Framerate: {} gen/s", sim.framerate().get());

    let layout = Layout::new(config.grid.size, config.grid.pixel_size);
    macroquad::Window::from_config(window_conf(&layout), run(config, sim, dead_color));
}
