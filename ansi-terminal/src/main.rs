use chargrid_ansi_terminal::{col_encode, Context};
use sound_roulette_app::{app, AppArgs};
use sound_roulette_native::{meap, NativeCommon};
use std::process;

fn main() {
    use meap::Parser;
    env_logger::init();
    let NativeCommon {
        initial_rng_seed,
        mute,
    } = NativeCommon::parser()
        .with_help_default()
        .parse_env_or_exit();
    let context = match Context::new() {
        Ok(context) => context,
        Err(e) => {
            eprintln!("failed to initialise terminal: {:?}", e);
            process::exit(1);
        }
    };
    match app(AppArgs {
        initial_rng_seed,
        mute,
    }) {
        Ok(component) => context.run(component, col_encode::FromTermInfoRgb),
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    }
}
