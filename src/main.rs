fn main() {
    alternate::app::cli::run();
}
