fn main() {
    basics::host::main_for("swap_simultaneous");
}
