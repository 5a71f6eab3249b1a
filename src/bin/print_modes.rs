fn main() {
    basics::host::main_for("print_modes");
}
