fn main() {
    klondike_term::run();
}
