//! Demo binary: opens a window driving the camera controller.
//!
//! Usage: `orthocam [OPTIONS.toml]`

use std::path::Path;

use orthocam::{options::Options, viewer::Viewer};

fn main() {
    env_logger::init();

    let options = match std::env::args().nth(1) {
        Some(arg) => match Options::load(Path::new(&arg)) {
            Ok(options) => {
                log::info!("Loaded options from '{arg}'");
                options
            }
            Err(e) => {
                log::error!("{e}");
                std::process::exit(1);
            }
        },
        None => Options::default(),
    };

    if let Err(e) = Viewer::builder().with_options(options).build().run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}
