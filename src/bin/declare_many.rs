fn main() {
    basics::host::main_for("declare_many");
}
