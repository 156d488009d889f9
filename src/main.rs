fn main() {
    create_new_vhost::app::cli::run();
}
