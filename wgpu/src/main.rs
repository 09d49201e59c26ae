#![windows_subsystem = "windows"]
use chargrid_wgpu::*;
use sound_roulette_app::{app, AppArgs, NAME};
use sound_roulette_native::{meap, NativeCommon};
use std::process;

const NORMAL_FONT_PATH: &str = "assets/fonts/normal.ttf";
const BOLD_FONT_PATH: &str = "assets/fonts/bold.ttf";

struct Args {
    native_common: NativeCommon,
    force_opengl: bool,
}

impl Args {
    fn parser() -> impl meap::Parser<Item = Self> {
        meap::let_map! {
            let {
                native_common = NativeCommon::parser();
                force_opengl = flag("force-opengl").desc("force opengl");
            } in {
                Self { native_common, force_opengl }
            }
        }
    }
}

fn load_font(path: &str) -> Vec<u8> {
    match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) => {
            eprintln!("missing font asset {}: {}", path, e);
            process::exit(1);
        }
    }
}

fn main() {
    use meap::Parser;
    env_logger::init();
    let Args {
        native_common:
            NativeCommon {
                initial_rng_seed,
                mute,
            },
        force_opengl,
    } = Args::parser().with_help_default().parse_env_or_exit();
    let context = Context::new(Config {
        font_bytes: FontBytes {
            normal: load_font(NORMAL_FONT_PATH),
            bold: load_font(BOLD_FONT_PATH),
        },
        title: NAME.to_string(),
        window_dimensions_px: Dimensions {
            width: 800.,
            height: 600.,
        },
        cell_dimensions_px: Dimensions {
            width: 10.,
            height: 20.,
        },
        font_scale: Dimensions {
            width: 20.,
            height: 20.,
        },
        underline_width_cell_ratio: 0.1,
        underline_top_offset_cell_ratio: 0.8,
        resizable: false,
        force_secondary_adapter: force_opengl,
    });
    match app(AppArgs {
        initial_rng_seed,
        mute,
    }) {
        Ok(component) => context.run(component),
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    }
}
