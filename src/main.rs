fn main() {
    #[cfg(feature = "cli")]
    yalz::cli::run();

    #[cfg(not(feature = "cli"))]
    {
        eprintln!("yalz: CLI not enabled. Rebuild with `--features cli`.");
        std::process::exit(1);
    }
}
