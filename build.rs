fn main() {
    // Re-export the ESP-IDF sysenv captured by embuild.  A no-op for
    // host builds where no esp environment is present.
    embuild::espidf::sysenv::output();
}
