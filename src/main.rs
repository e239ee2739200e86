fn main() {
    admission_predictor::run();
}
