fn main() {
    dirkeep::app::cli::run();
}
