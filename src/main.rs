fn main() {
    issue_branch::app::cli::run();
}
