fn main() {
    storrmbox_web::run();
}
