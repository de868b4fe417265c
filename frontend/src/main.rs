use log::{error, info};

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    if console_log::init_with_level(sanctuary::config::log_level()).is_err() {
        web_sys::console::warn_1(&"logger was already initialized".into());
    }

    info!("Starting Alexandria Sanctuary");
    if let Err(err) = sanctuary::run() {
        error!("{}", err);
    }
}
