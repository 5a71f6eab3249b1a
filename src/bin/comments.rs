fn main() {
    basics::host::main_for("comments");
}
