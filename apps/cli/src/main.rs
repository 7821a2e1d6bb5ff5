fn main() -> anyhow::Result<()> {
    quizbot_cli::run()
}
