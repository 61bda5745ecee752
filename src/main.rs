use expand_css::{Config, log_init};

fn main() {
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("expand-css: {e}");
            return;
        }
    };

    if let Err(e) = log_init::init_logger(config.log_level) {
        eprintln!("expand-css: {e}");
    }

    expand_css::run(&config);
}
