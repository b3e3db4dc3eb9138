use macroquad::prelude::*;
use liquid_sim::{
    GameState, Pipeline, SimConfig,
    ui::{self, Dropdown},
    rendering, input,
};

fn window_conf() -> Conf {
    // Bad arguments are reported from main; size the window from defaults then
    let config = SimConfig::from_env().ok().flatten().unwrap_or_default();
    let (width, height) = config.grid_pixel_size();
    Conf {
        window_title: "Liquid Simulation".to_owned(),
        window_width: (width + ui::PANEL_WIDTH) as i32,
        window_height: height as i32,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match SimConfig::from_env() {
        Ok(Some(config)) => config,
        Ok(None) => {
            println!("{}", SimConfig::usage());
            return;
        }
        Err(err) => {
            log::error!("{}", err);
            eprintln!("{}", SimConfig::usage());
            return;
        }
    };
    log::info!(
        "starting {}x{} grid, {}px cells, {}ms per tick, pipeline {}",
        config.columns,
        config.rows,
        config.cell_size,
        config.tick_delay_ms,
        config.pipeline.name()
    );

    let mut state = GameState::new(&config);

    let pipelines = Pipeline::all();
    let mut pipeline_dropdown = Dropdown::new(
        ui::panel_x(),
        30.0,
        ui::PANEL_WIDTH,
        "Pipeline",
        ui::pipeline_items(),
    );
    if let Some(idx) = pipelines.iter().position(|p| *p == config.pipeline) {
        pipeline_dropdown.set_selected(idx);
    }

    loop {
        if input::quit_requested() {
            log::info!("quit after {} ticks", state.simulation.ticks());
            break;
        }

        let mouse_pos = mouse_position();
        pipeline_dropdown.set_position(ui::panel_x(), 30.0);
        let buttons = ui::create_buttons(ui::panel_x(), state.is_running);

        if pipeline_dropdown.update(mouse_pos) {
            if let Some(pipeline) = pipelines.get(pipeline_dropdown.selected()) {
                state.set_pipeline(*pipeline);
            }
        }

        // Edits first, then at most one tick, then draw
        state = input::process_button_clicks(state, &buttons, mouse_pos);
        if !pipeline_dropdown.is_open() {
            input::handle_mouse_paint(&mut state, mouse_pos);
        }
        state = input::process_keyboard_input(state);

        state = state.tick(get_frame_time());

        let render_start = std::time::Instant::now();
        clear_background(BLACK);
        rendering::draw_grid(state.grid(), state.cell_size);
        rendering::draw_controls(&state, &buttons, &pipeline_dropdown, mouse_pos);
        state.last_render_time_ms = render_start.elapsed().as_secs_f32() * 1000.0;

        next_frame().await;
    }
}
