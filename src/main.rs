fn main() {
    depcheck::cli::run();
}
