fn main() {
    chikitsa_lib::run()
}
