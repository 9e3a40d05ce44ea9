//! Mini Osu entry point
//!
//! Opens the window, queues input between frames and paces frames at the
//! rate the current screen asks for.

use std::error::Error;
use std::time::{Duration, Instant};

use glam::Vec2;
use pixels::{Pixels, SurfaceTexture};
use winit::dpi::LogicalSize;
use winit::event::{Event, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;

use mini_osu::consts::{HEIGHT, WIDTH};
use mini_osu::platform::native::InputTranslator;
use mini_osu::platform::EventQueue;
use mini_osu::renderer::{DrawList, Rasterizer};
use mini_osu::sim::MonotonicClock;
use mini_osu::{App, AppControl, Settings};

fn frame_interval(fps: u32) -> Duration {
    Duration::from_secs_f64(1.0 / fps.max(1) as f64)
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    log::info!("Mini Osu starting...");

    let settings = Settings::load();
    settings.validate()?;

    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title("Mini Osu!")
        .with_inner_size(LogicalSize::new(WIDTH, HEIGHT))
        .with_resizable(false)
        .build(&event_loop)?;

    let mut pixels = {
        let size = window.inner_size();
        let surface = SurfaceTexture::new(size.width, size.height, &window);
        Pixels::new(WIDTH, HEIGHT, surface)?
    };

    let clock = MonotonicClock::new();
    let mut app = App::new(settings);
    let mut queue = EventQueue::new();
    let mut input = InputTranslator::new();
    let mut draw_list = DrawList::new();
    let mut next_frame = Instant::now();
    // Time of the last simulated frame; drawing uses the same instant
    let mut frame_time = 0.0;

    log::info!("Window open ({}x{})", WIDTH, HEIGHT);

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::WaitUntil(next_frame);

        match event {
            Event::WindowEvent { event, .. } => {
                if let WindowEvent::Resized(size) = &event {
                    if let Err(err) = pixels.resize_surface(size.width, size.height) {
                        log::error!("Surface resize failed: {}", err);
                        *control_flow = ControlFlow::Exit;
                        return;
                    }
                }
                let translated = input.translate(&event, |x, y| {
                    pixels
                        .window_pos_to_pixel((x, y))
                        .ok()
                        .map(|(px, py)| Vec2::new(px as f32, py as f32))
                });
                if let Some(ev) = translated {
                    queue.push(ev);
                }
            }
            Event::MainEventsCleared => {
                if Instant::now() < next_frame {
                    return;
                }

                frame_time = clock.now();
                if app.frame(queue.drain(), frame_time) == AppControl::Exit {
                    log::info!("Goodbye");
                    *control_flow = ControlFlow::Exit;
                    return;
                }
                window.request_redraw();

                next_frame += frame_interval(app.target_fps());
                // Don't try to catch up after a stall
                let after = Instant::now();
                if next_frame < after {
                    next_frame = after;
                }
                *control_flow = ControlFlow::WaitUntil(next_frame);
            }
            Event::RedrawRequested(_) => {
                app.draw(frame_time, &mut draw_list);
                if let Some(mut raster) = Rasterizer::new(pixels.frame_mut(), WIDTH, HEIGHT) {
                    raster.draw(&draw_list);
                }
                if let Err(err) = pixels.render() {
                    log::error!("Render failed: {}", err);
                    *control_flow = ControlFlow::Exit;
                }
            }
            _ => {}
        }
    });
}
