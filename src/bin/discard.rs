fn main() {
    basics::host::main_for("discard");
}
