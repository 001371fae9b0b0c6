fn main() {
    smartwaste_pwa::run();
}
