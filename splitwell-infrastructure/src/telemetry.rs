/// Initialize logging and tracing
pub fn init_logging() {
    tracing_subscriber::fmt::init();
}
