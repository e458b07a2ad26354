use minifb::{Key, Window, WindowOptions};
use tracing::info;

use crate::error::Result;
use crate::render::Canvas;

/// Show `canvas` in a window and block until it is closed or Escape is pressed.
pub fn show(canvas: &Canvas, title: &str) -> Result<()> {
    let mut window = Window::new(title, canvas.width(), canvas.height(), WindowOptions::default())?;
    window.set_target_fps(30);

    info!(width = canvas.width(), height = canvas.height(), "window open");

    while window.is_open() && !window.is_key_down(Key::Escape) {
        window.update_with_buffer(canvas.buffer(), canvas.width(), canvas.height())?;
    }

    info!("window closed");
    Ok(())
}
