use crate::config::LogLevel;

pub fn init_logger(level: LogLevel, verbose: bool) {
    env_logger::Builder::new()
        .filter_level(if verbose {
            log::LevelFilter::Debug
        } else {
            level.to_filter()
        })
        .init();
}
