pub use meap;
use sound_roulette_app::InitialRngSeed;

/// Options shared by the desktop frontends. Everything is optional, so the
/// default invocation takes no arguments.
pub struct NativeCommon {
    pub initial_rng_seed: InitialRngSeed,
    pub mute: bool,
}

impl NativeCommon {
    pub fn parser() -> impl meap::Parser<Item = Self> {
        meap::let_map! {
            let {
                rng_seed = opt_opt::<u64, _>("INT", "rng-seed")
                    .desc("seed for the sound trigger rng");
                mute = flag("mute").desc("disable audio output");
            } in {
                Self {
                    initial_rng_seed: rng_seed
                        .map(InitialRngSeed::U64)
                        .unwrap_or(InitialRngSeed::Random),
                    mute,
                }
            }
        }
    }
}
