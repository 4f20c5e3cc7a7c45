fn main() {
    vantora_site::run();
}
