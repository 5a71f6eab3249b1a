fn main() {
    basics::host::main_for("zero_value");
}
