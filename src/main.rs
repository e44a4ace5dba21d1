fn main() {
    caportal_lib::run()
}
