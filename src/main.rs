fn main() {
    nexus_lib::run()
}
