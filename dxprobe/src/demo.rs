use std::{
    ffi::CString,
    os::raw::{c_float, c_int},
    path::PathBuf,
};

use clap::Args;
use cstr::cstr;
use dxportlib::{DxLib, GraphHandle, KeyCode, Screen};
use log::{debug, info, warn};

use crate::Error;

#[derive(Debug, Args)]
pub struct Options {
    #[clap(long, default_value_t = 640)]
    pub width: c_int,

    #[clap(long, default_value_t = 480)]
    pub height: c_int,

    #[clap(long, default_value_t = 60)]
    pub fps: c_int,

    #[clap(short, long)]
    pub windowed: bool,

    /// Image drawn in the middle of the scene.
    #[clap(short, long)]
    pub image: Option<PathBuf>,

    /// Stop after this many frames instead of waiting for Escape.
    #[clap(long)]
    pub frames: Option<u32>,
}

const ORBIT_PERIOD: u32 = 240;

/// Center of the orbiting circle at `frame`.
#[allow(clippy::cast_precision_loss)]
fn orbit(frame: u32, width: c_int, height: c_int) -> (c_float, c_float) {
    let (width, height, step) = (
        width as c_float,
        height as c_float,
        (frame % ORBIT_PERIOD) as c_float,
    );
    let angle = step / ORBIT_PERIOD as c_float * std::f32::consts::TAU;
    let radius = width.min(height) / 3.;
    (
        width / 2. + radius * angle.cos(),
        height / 2. + radius * angle.sin(),
    )
}

fn load_image(dx: &DxLib, options: &Options) -> Option<GraphHandle> {
    let path = options.image.as_ref()?;
    let Ok(name) = CString::new(path.as_os_str().as_encoded_bytes()) else {
        warn!("{} contains a NUL byte", path.display());
        return None;
    };
    let graph = dx.load_graph(&name);
    if graph.is_error() {
        warn!("cannot load {}", path.display());
        return None;
    }
    debug!("loaded {} as graph {}", path.display(), graph.raw());
    Some(graph)
}

fn draw_frame(dx: &DxLib, options: &Options, frame: u32, image: Option<GraphHandle>) {
    let background = dx.get_color(16, 24, 48);
    let white = dx.get_color(255, 255, 255);
    let accent = dx.get_color(255, 160, 32);

    dx.draw_fill_box(0, 0, options.width, options.height, background);
    dx.draw_line(0, options.height / 2, options.width, options.height / 2, white, None);

    if let Some(graph) = image {
        let (mut width, mut height) = (0, 0);
        dx.get_graph_size(graph, &mut width, &mut height);
        dx.draw_graph(
            (options.width - width) / 2,
            (options.height - height) / 2,
            graph,
            true,
        );
    }

    let (x, y) = orbit(frame, options.width, options.height);
    dx.draw_circle_f(x, y, 16., accent, true);

    if let Ok(text) = CString::new(format!("frame {frame}")) {
        dx.draw_string(8, 8, &text, white, None);
    }
}

pub fn run(dx: &DxLib, options: &Options) -> Result<(), Error> {
    dx.change_window_mode(options.windowed);
    dx.set_graph_mode(options.width, options.height, 32, Some(options.fps));
    dx.set_window_text(cstr!("dxprobe"));
    if dx.dxlib_init() == -1 {
        return Err(Error::Init);
    }
    info!(
        "running demo at {}x{}, {} fps",
        options.width, options.height, options.fps
    );

    dx.set_draw_screen(Screen::Back);
    let image = load_image(dx, options);

    let mut frame = 0;
    while options.frames.is_none_or(|frames| frame < frames) {
        if dx.process_message() == -1 || dx.check_hit_key(KeyCode::Escape) != 0 {
            break;
        }
        draw_frame(dx, options, frame, image);
        dx.screen_flip();
        frame += 1;
    }
    info!("demo stopped after {frame} frames");

    if let Some(graph) = image {
        dx.delete_graph(graph);
    }
    dx.dxlib_end();
    Ok(())
}

#[cfg(test)]
mod tests {
    use dxportlib::sys::{
        Api,
        echo::{self, Value},
    };

    use super::*;

    fn options(frames: Option<u32>) -> Options {
        Options {
            width: 320,
            height: 240,
            fps: 30,
            windowed: true,
            image: None,
            frames,
        }
    }

    fn echo_dx() -> DxLib {
        echo::reset();
        unsafe { DxLib::from_api(Api::echo()) }
    }

    #[test]
    fn orbit_stays_on_screen() {
        for frame in 0..ORBIT_PERIOD * 2 {
            let (x, y) = orbit(frame, 320, 240);
            assert!((0. ..=320.).contains(&x), "{x}");
            assert!((0. ..=240.).contains(&y), "{y}");
        }
        let (x, y) = orbit(0, 320, 240);
        assert!((x - 240.).abs() < 1e-3);
        assert!((y - 120.).abs() < 1e-3);
    }

    #[test]
    fn bounded_run() {
        let dx = echo_dx();
        run(&dx, &options(Some(3))).unwrap();

        let calls = echo::take_calls();
        let names: Vec<_> = calls.iter().map(|call| call.name).collect();
        assert_eq!(
            names[..4],
            ["ChangeWindowMode", "SetGraphMode", "SetWindowText", "DxLib_Init"]
        );
        assert_eq!(calls[1].args, [320, 240, 32, 30].map(Value::Int));
        assert_eq!(names.iter().filter(|&&name| name == "ScreenFlip").count(), 3);
        assert_eq!(names.last(), Some(&"DxLib_End"));
    }

    #[test]
    fn init_failure() {
        let dx = echo_dx();
        for _ in 0..3 {
            echo::push_return(0);
        }
        echo::push_return(-1);
        let err = run(&dx, &options(Some(1))).unwrap_err();
        assert!(matches!(err, Error::Init));
    }
}
