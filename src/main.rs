use comparatifs_quest::QuizApp;

fn main() -> eframe::Result<()> {
    pretty_env_logger::init();

    let options = eframe::NativeOptions::default();
    eframe::run_native(
        "Comparatifs Quest",
        options,
        Box::new(|_cc| Ok(Box::new(QuizApp::new()))),
    )
}
