fn main() {
    cursor_thumbnails_lib::run()
}
