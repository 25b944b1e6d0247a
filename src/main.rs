fn main() {
    biosphere::game::run();
}
