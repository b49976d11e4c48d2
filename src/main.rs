fn main() {
    galleria::start();
}
