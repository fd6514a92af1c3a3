fn main() {
    strategist::app::logging::init_logging();
    strategist::app::cli::run();
}
